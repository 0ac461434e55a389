//! Shared helpers for the integration tests.

#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use serde_json::Value;
use tempfile::TempDir;
use tokio::net::TcpListener;
use video_title_extractor::server::{router::create_router, state::AppState};
use video_title_extractor::{ExtractError, ExtractorConfig, MetadataExtractor, MetadataNode};

pub const INDEX_HTML: &str = "<!DOCTYPE html><title>Video Title Extractor</title>";

/// Extractor that answers from a fixed table instead of running yt-dlp.
///
/// Unknown URLs fail the way yt-dlp does for an unsupported site.
#[derive(Default)]
pub struct StubExtractor {
    responses: HashMap<String, Result<Value, ExtractError>>,
    calls: AtomicUsize,
}

impl StubExtractor {
    pub fn with_metadata(mut self, url: &str, metadata: Value) -> Self {
        self.responses.insert(url.to_string(), Ok(metadata));
        self
    }

    pub fn with_error(mut self, url: &str, error: ExtractError) -> Self {
        self.responses.insert(url.to_string(), Err(error));
        self
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl MetadataExtractor for StubExtractor {
    fn name(&self) -> &'static str {
        "stub"
    }

    fn is_available(&self) -> bool {
        true
    }

    async fn extract(
        &self,
        url: &str,
        _config: &ExtractorConfig,
    ) -> Result<MetadataNode, ExtractError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match self.responses.get(url) {
            Some(Ok(metadata)) => Ok(MetadataNode::from(metadata.clone())),
            Some(Err(err)) => Err(err.clone()),
            None => Err(ExtractError::ExtractionFailed(format!(
                "ERROR: Unsupported URL: {url}"
            ))),
        }
    }
}

/// A running server on an ephemeral port.
pub struct TestApp {
    pub address: String,
    pub client: reqwest::Client,
    pub extractor: Arc<StubExtractor>,
    _static_dir: TempDir,
}

impl TestApp {
    pub async fn spawn(extractor: StubExtractor) -> anyhow::Result<Self> {
        let static_dir = tempfile::tempdir()?;
        std::fs::write(static_dir.path().join("index.html"), INDEX_HTML)?;
        std::fs::write(static_dir.path().join("app.js"), "console.log('ok');")?;

        let extractor = Arc::new(extractor);
        let state = AppState::new(
            extractor.clone(),
            ExtractorConfig::default(),
            static_dir.path(),
        );
        let app = create_router(state);

        let listener = TcpListener::bind("127.0.0.1:0").await?;
        let address = format!("http://{}", listener.local_addr()?);

        tokio::spawn(async move {
            if let Err(e) = axum::serve(listener, app).await {
                eprintln!("Server error: {e}");
            }
        });

        Ok(Self {
            address,
            client: reqwest::Client::new(),
            extractor,
            _static_dir: static_dir,
        })
    }

    pub async fn post_extract(&self, body: Value) -> reqwest::Response {
        self.client
            .post(format!("{}/api/extract", self.address))
            .json(&body)
            .send()
            .await
            .expect("Failed to execute request.")
    }
}
