//! HTTP surface: the JSON API plus the static front end.

pub mod config;
pub mod errors;
pub mod handlers;
pub mod router;
pub mod state;
pub mod types;

use crate::server::{
    config::{get_config, AppConfig},
    router::create_router,
    state::build_app_state,
};
use tokio::net::TcpListener;
use tracing::{debug, info, warn};
use tracing_subscriber::FmtSubscriber;

/// Configures and runs the web server on an already bound listener.
pub async fn run(listener: TcpListener, config: AppConfig) -> anyhow::Result<()> {
    debug!(?config, "Server configuration loaded");

    let app_state = build_app_state(&config);
    if let Some(orchestrator) = &app_state.orchestrator {
        let status = orchestrator.get_status(config.extractor_mode);
        match status.active_backend {
            Some(backend) => info!(backend, mode = %status.mode, "extraction backend ready"),
            None => warn!(
                mode = %status.mode,
                "no usable yt-dlp found; extraction requests will fail until it is installed"
            ),
        }
    }

    let app = create_router(app_state);

    info!("listening on {}", listener.local_addr()?);
    axum::serve(listener, app).await?;

    Ok(())
}

/// The library's main entry point.
///
/// Sets up logging, configuration, and the TCP listener, then calls `run`.
pub async fn start() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let subscriber = FmtSubscriber::builder()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .compact()
        .finish();
    tracing::subscriber::set_global_default(subscriber).expect("setting default subscriber failed");

    let config = get_config(None)?;
    let listener = TcpListener::bind(config.bind_address()).await?;
    info!("Server listening on {}", config.bind_address());

    run(listener, config).await
}
