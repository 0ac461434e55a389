#[tokio::main]
async fn main() -> anyhow::Result<()> {
    video_title_extractor::server::start().await
}
