use std::net::SocketAddr;

use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

use auth_server::config::Config;
use auth_server::database::{connect_to_database, sync_schema, PgConnector};
use auth_server::routes::create_routes;
use auth_server::state::AppState;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = Config::from_env().map_err(|e| {
        tracing::error!("{}", e);
        e
    })?;

    let pool = connect_to_database(&PgConnector::from_config(&config), &config).await;

    if let Err(e) = sync_schema(&pool).await {
        tracing::error!(error = %e, "Error preparing database schema");
        std::process::exit(1);
    }

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let app = create_routes(AppState::new(pool, config));

    tracing::info!("Server running at http://{}", addr);

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
