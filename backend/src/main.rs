mod config;
mod indicators;
mod models;
mod routes;
mod services;
mod state;

use models::Dataset;
use state::AppState;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = match config::load_from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("Invalid configuration: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let dataset = match &config.dataset_path {
        Some(path) => {
            tracing::info!("Loading prices from {}", path.display());
            Dataset::from_json_file(path)
        }
        None => Dataset::sample(),
    };
    let dataset = match dataset {
        Ok(dataset) => dataset,
        Err(e) => {
            tracing::error!("Failed to load dataset: {}", e);
            return ExitCode::FAILURE;
        }
    };

    tracing::info!(
        "Serving {} prices (ma_period={}, rsi_period={})",
        dataset.len(),
        config.ma_period,
        config.rsi_period
    );

    let state = AppState::new(dataset, config.indicator_params());
    let app = routes::router(state);

    let listener = match tokio::net::TcpListener::bind(config.bind_addr).await {
        Ok(listener) => listener,
        Err(e) => {
            tracing::error!("Failed to bind {}: {}", config.bind_addr, e);
            return ExitCode::FAILURE;
        }
    };
    tracing::info!("Server listening on {}", config.bind_addr);

    if let Err(e) = axum::serve(listener, app).await {
        tracing::error!("Server error: {}", e);
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}
