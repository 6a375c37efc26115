use day_planner::{AppState, Config, load_data, router};
use std::net::SocketAddr;
use tokio::fs;
use tracing::{error, info, warn};
use tracing_subscriber::{EnvFilter, fmt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("info".parse()?))
        .init();

    let config = Config::from_env();
    info!(?config, "starting day planner");
    if config.admin_token.is_none() {
        warn!("ADMIN_TOKEN is not set, the planner is read-only");
    }

    if let Some(parent) = config.data_path.parent() {
        fs::create_dir_all(parent).await?;
    }

    let data = load_data(&config.data_path).await.inspect_err(|err| {
        error!("refusing to start, fix or move the data file: {err}");
    })?;
    info!(
        tasks = data.tasks.len(),
        leetcode = data.leetcode_tasks.len(),
        "loaded planner data"
    );
    let state = AppState::new(config.data_path, data, config.admin_token);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    info!("listening on http://{addr}");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        warn!("failed to listen for shutdown signal: {err}");
        std::future::pending::<()>().await;
    }
    info!("shutting down");
}
