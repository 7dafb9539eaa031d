use status_core::StatusStore;
use status_server::routes::api_router;
use status_server::state::AppState;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let bind = std::env::var("STATUS_BIND").unwrap_or_else(|_| "0.0.0.0:8000".into());
    let app = api_router(AppState::new(StatusStore::seeded()));

    let listener = tokio::net::TcpListener::bind(&bind)
        .await
        .expect("bind listener");

    tracing::info!(%bind, "status-server listening");
    axum::serve(listener, app).await.expect("serve");
}
