/// Service entry point
use spacex_launches::clients::GraphqlClient;
use spacex_launches::config::AppConfig;
use spacex_launches::handlers::AppState;
use spacex_launches::routes::build_router;
use spacex_launches::services::LaunchService;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(EnvFilter::from_default_env())
        .finish();
    let _ = tracing::subscriber::set_global_default(subscriber);

    // Load configuration
    let config = AppConfig::from_env()?;
    info!("Configuration loaded successfully");

    // Initialize the upstream client and service
    let graphql_client = GraphqlClient::new(
        config.spacex_graphql_url.clone(),
        config.upcoming_supports_offset,
    )?;
    let launch_service = Arc::new(LaunchService::new(graphql_client));

    // Initialize application state
    let state = AppState {
        launch_service,
        default_limit: config.default_limit,
    };

    // Build router
    let app = build_router(state);

    // Start server
    let listener = tokio::net::TcpListener::bind(("0.0.0.0", config.port)).await?;
    info!("spacex_launches service listening on 0.0.0.0:{}", config.port);

    axum::serve(listener, app.into_make_service()).await?;

    Ok(())
}
