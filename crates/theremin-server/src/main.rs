//! Gaze action server binary.

use std::sync::Arc;

use tonic::transport::Server;
use tracing::{error, info, warn};

use theremin_action::{CursorActionDispatcher, CursorDriver, TracingDriver};
use theremin_server::{logging, metrics, EyeTrackerService, ServerConfig};

#[tokio::main]
async fn main() {
    // Load environment variables
    dotenvy::dotenv().ok();

    logging::init_tracing();

    info!("Starting theremin-server");

    // Load configuration
    let config = ServerConfig::from_env();
    info!("Server config: {:?}", config);

    let driver = build_driver();
    let pipeline = config.pipeline(driver.as_ref());
    info!(
        driver = driver.name(),
        screen = %pipeline.geometry,
        alpha = pipeline.smoothing.alpha(),
        "Cursor pipeline ready"
    );

    let addr = match config.bind_addr() {
        Ok(addr) => addr,
        Err(e) => {
            error!("Invalid ACTION_HOST {:?}: {}", config.host, e);
            std::process::exit(1);
        }
    };

    // Host already validated by bind_addr
    if let (true, Ok(metrics_addr)) = (config.metrics_enabled, config.metrics_addr()) {
        match metrics::init_metrics(metrics_addr) {
            Ok(()) => info!("Prometheus metrics enabled at http://{}/metrics", metrics_addr),
            Err(e) => warn!("Metrics disabled, exporter failed to start: {}", e),
        }
    }

    let service = EyeTrackerService::new(pipeline, CursorActionDispatcher::new(driver));

    info!("Action service listening on {}", addr);

    if let Err(e) = Server::builder()
        .add_service(service.into_server())
        .serve_with_shutdown(addr, shutdown_signal())
        .await
    {
        error!("Server error: {}", e);
        std::process::exit(1);
    }

    info!("Server shutdown complete");
}

/// Pick the OS pointer backend, falling back to log-only actions.
fn build_driver() -> Arc<dyn CursorDriver> {
    #[cfg(feature = "os-cursor")]
    {
        match theremin_action::EnigoDriver::new() {
            Ok(driver) => return Arc::new(driver),
            Err(e) => warn!("OS cursor control unavailable ({}), actions will only be logged", e),
        }
    }

    Arc::new(TracingDriver)
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!("Failed to install CTRL+C handler: {}", e);
        std::future::pending::<()>().await;
    }
    info!("Received shutdown signal");
}
