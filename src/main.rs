//! Score estimator HTTP server.
//!
//! Loads configuration from the directory named by `SCORE_ESTIMATOR_CONFIG`
//! (default `./config`), checks the built-in band tables and serves the API.

use std::process;

use score_estimator::api::{AppState, create_router};
use score_estimator::calculation::BandTable;
use score_estimator::config::ConfigLoader;
use score_estimator::models::Exam;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

const CONFIG_DIR_VAR: &str = "SCORE_ESTIMATOR_CONFIG";

#[tokio::main]
async fn main() {
    let config_dir = std::env::var(CONFIG_DIR_VAR).unwrap_or_else(|_| "./config".to_string());

    let config = match ConfigLoader::load(&config_dir) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("Error: {}", err);
            process::exit(1);
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&config.server().log_filter)),
        )
        .init();

    for exam in Exam::ALL {
        if let Err(err) = BandTable::for_exam(exam).validate() {
            error!(error = %err, "Band table check failed");
            process::exit(1);
        }
    }

    let bind_address = config.server().bind_address.clone();
    let router = create_router(AppState::new(&config));

    let listener = match tokio::net::TcpListener::bind(&bind_address).await {
        Ok(listener) => listener,
        Err(err) => {
            error!(bind_address = %bind_address, error = %err, "Failed to bind");
            process::exit(1);
        }
    };

    info!(bind_address = %bind_address, config_dir = %config_dir, "Score estimator listening");

    if let Err(err) = axum::serve(listener, router).await {
        error!(error = %err, "Server error");
        process::exit(1);
    }
}
