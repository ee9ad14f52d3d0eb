pub mod extract;
pub mod request_id;

use axum::{
    middleware,
    routing::{delete, get, post},
    Router,
};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

use crate::controllers::{
    config_flow::ConfigFlowController, entries::EntryController, health, tts::TtsController,
};
use crate::domain::entry::EntryService;
use crate::domain::tts::TtsService;
use crate::infrastructure::config::Config;
use crate::infrastructure::repositories::{
    EntryRepository, InMemoryNotificationRepository, MinimaxTtsRepository,
};

pub use extract::ApiJson;
pub use request_id::{request_id_middleware, X_REQUEST_ID};

/// Wire repositories, services and controllers into the application router
pub fn create_app(config: &Config) -> anyhow::Result<Router> {
    tracing::info!(
        api_url = %config.minimax_api_url,
        timeout_secs = config.minimax_timeout_secs,
        "Initializing MiniMax TTS client"
    );

    // 1. Repositories
    let entry_repo = Arc::new(EntryRepository::new());
    let notification_repo = Arc::new(InMemoryNotificationRepository::new());
    let tts_repo = Arc::new(MinimaxTtsRepository::new(
        config.minimax_api_url.clone(),
        config.minimax_timeout(),
    )?);

    // 2. Services
    let entry_service = Arc::new(EntryService::new(entry_repo.clone()));
    let tts_service = Arc::new(TtsService::new(
        entry_repo.clone(),
        tts_repo,
        notification_repo.clone(),
    ));

    // 3. Controllers
    let config_flow_controller = Arc::new(ConfigFlowController::new(
        entry_service.clone(),
        tts_service.clone(),
    ));
    let entry_controller = Arc::new(EntryController::new(entry_service, tts_service.clone()));
    let tts_controller = Arc::new(TtsController::new(tts_service, notification_repo));

    let config_flow_routes = Router::new()
        .route(
            "/api/config_flow/user",
            get(ConfigFlowController::show_form).post(ConfigFlowController::submit),
        )
        .with_state(config_flow_controller);

    let entry_routes = Router::new()
        .route("/api/entries", get(EntryController::list_entries))
        .route(
            "/api/entries/:entry_id",
            get(EntryController::get_entry).delete(EntryController::delete_entry),
        )
        .with_state(entry_controller);

    let tts_routes = Router::new()
        .route("/api/tts/:entry_id/synthesize", post(TtsController::synthesize))
        .route("/api/notifications", get(TtsController::list_notifications))
        .route(
            "/api/notifications/:notification_id",
            delete(TtsController::dismiss_notification),
        )
        .with_state(tts_controller);

    let app = Router::new()
        .route("/health", get(health::health))
        .route("/health/ready", get(health::health_ready))
        .with_state(entry_repo)
        .merge(config_flow_routes)
        .merge(entry_routes)
        .merge(tts_routes)
        .layer(middleware::from_fn(request_id_middleware))
        .layer(TraceLayer::new_for_http());

    Ok(app)
}

/// Start the HTTP server with all routes configured
pub async fn start_http_server(config: Arc<Config>, app: Router) -> Result<(), Box<dyn std::error::Error>> {
    let listener =
        tokio::net::TcpListener::bind(format!("{}:{}", config.host, config.port)).await?;

    tracing::info!("Server listening on {}", listener.local_addr()?);

    axum::serve(listener, app).await?;

    Ok(())
}
