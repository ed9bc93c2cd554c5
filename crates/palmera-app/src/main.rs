mod cli;
mod repl;

use std::time::Duration;

use palmera_chat::{BackendConfig, HttpBackend, Session};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    // Parse CLI arguments
    let args = cli::parse();

    // Initialize logging
    let log_directive = args.log_level.as_deref().unwrap_or("palmera=warn");
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive(
                log_directive
                    .parse()
                    .unwrap_or_else(|_| "palmera=warn".parse().unwrap()),
            ),
        )
        .init();

    tracing::info!("Palmera v{} starting...", env!("CARGO_PKG_VERSION"));

    // Load config
    let config = match &args.config {
        Some(path) => palmera_config::load_from_path(std::path::Path::new(path)),
        None => palmera_config::load_config(),
    }
    .unwrap_or_else(|e| {
        tracing::warn!("Config load failed, using defaults: {e}");
        palmera_config::PalmeraConfig::default()
    });

    let base_url = args
        .backend
        .clone()
        .unwrap_or_else(|| config.backend.base_url.clone());
    let backend = HttpBackend::new(
        BackendConfig::new(base_url)
            .with_connect_timeout(Duration::from_secs(config.backend.connect_timeout_secs))
            .with_request_timeout(Duration::from_secs(config.backend.request_timeout_secs)),
    );

    let mut session = Session::new().with_greeting(config.chat.greeting.clone());
    tracing::info!("Session {} ready", session.id());

    if let Err(e) = repl::run(&mut session, &backend).await {
        tracing::error!("Chat loop error: {e}");
        std::process::exit(1);
    }
    tracing::info!("Shutdown complete");
}
