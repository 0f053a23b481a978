use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{EnvFilter, fmt};

use event_hub::shell::config::Config;
use event_hub::shell::http::router;
use event_hub::shell::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = Config::from_env()?;

    fmt().with_env_filter(EnvFilter::new(&config.rust_log)).init();

    let state = AppState::from_config(&config);
    let app = router(state)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http());

    let addr = config.bind_address();
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!(
        "EventHub listening on http://{} (form reset after {:?})",
        addr,
        config.form_reset_delay
    );
    axum::serve(listener, app).await?;
    Ok(())
}
