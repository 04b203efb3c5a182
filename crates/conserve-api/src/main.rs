//! Conservation campaign API server entry point
//!
//! Run with:
//! ```bash
//! cargo run -p conserve-api
//! ```
//!
//! Configuration is loaded from environment variables and an optional `.env` file.

use conserve_common::{try_init_tracing_with_config, AppConfig, TracingConfig};
use tracing::{error, info};

#[tokio::main]
async fn main() {
    // Load configuration
    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load configuration: {e}");
            std::process::exit(1);
        }
    };

    // Initialize tracing
    let tracing_config = TracingConfig::for_environment(config.app.env, config.app.log_format);
    if let Err(e) = try_init_tracing_with_config(tracing_config) {
        eprintln!("Warning: Failed to initialize tracing: {e}");
    }

    info!(
        name = %config.app.name,
        env = ?config.app.env,
        address = %config.api.address(),
        "Starting conservation API server..."
    );

    // Run the server
    if let Err(e) = conserve_api::run(config).await {
        error!(error = %e, "Server failed");
        std::process::exit(1);
    }
}
