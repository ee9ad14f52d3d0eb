use minimax_tts::infrastructure::config::{Config, LogFormat};
use minimax_tts::infrastructure::http::{create_app, start_http_server};
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load configuration
    let config = Config::from_env()?;

    // Initialize logging
    init_logging(&config);

    tracing::info!(
        "Starting MiniMax TTS host on {}:{}",
        config.host,
        config.port
    );
    tracing::info!(
        environment = ?config.environment,
        development = config.is_development(),
        "Configuration loaded"
    );

    let app = create_app(&config)?;

    start_http_server(Arc::new(config), app).await?;

    Ok(())
}

fn init_logging(config: &Config) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "minimax_tts=debug,tower_http=debug".into());

    if config.log_format == LogFormat::Json {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().pretty())
            .init();
    }
}
