use fwfps_server::{Config, create_router};
use fwfps_server::core::AppState;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use std::net::SocketAddr;
use std::str::FromStr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // Load the configuration from environment / .env file
    let config = Config::from_env()?;
    config.log_info();

    // Connection pool towards the SQLite store; the database file is
    // created on first start
    let connect_options =
        SqliteConnectOptions::from_str(&config.database_url)?.create_if_missing(true);
    let pool = SqlitePoolOptions::new()
        .max_connections(config.max_connections)
        .connect_with(connect_options)
        .await?;

    // One repository per entity, all sharing the pool
    let state = Arc::new(AppState::new(pool));
    state.init_schema().await?;

    let app = create_router(state);

    let addr = SocketAddr::from_str(&format!("{}:{}", config.server_host, config.server_port))?;
    info!("Server listening on http://{}", addr);

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
