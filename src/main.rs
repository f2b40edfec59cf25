use tokio::net::TcpListener;
use tokio::signal::{self, ctrl_c};
use tracing::{error, info};

use pizza_orders::api::{self, AppState, ConnectionSettings};
use pizza_orders::{setup_tracing, Config, PizzaSystem};

#[tokio::main]
async fn main() -> Result<(), String> {
    dotenvy::dotenv().ok();
    setup_tracing();

    let config = Config::from_env().map_err(|e| {
        error!(error = %e, "Configuration error");
        e.to_string()
    })?;

    let system = PizzaSystem::start(&config).await.map_err(|e| {
        error!(error = %e, "Failed to start document store");
        e.to_string()
    })?;

    let app = api::router(AppState::new(&system, ConnectionSettings::from(&config)));

    let address = config.address();
    info!("Binding to {address}");
    let listener = TcpListener::bind(&address).await.map_err(|e| {
        error!(error = %e, "Failed to bind {address}");
        e.to_string()
    })?;
    info!("Server running on {address}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| e.to_string())?;

    system.shutdown().await?;
    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = ctrl_c().await {
            error!(error = %e, "Failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
        info!("Received Ctrl+C, shutting down");
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
                info!("Received terminate signal, shutting down");
            }
            Err(e) => {
                error!(error = %e, "Failed to install signal handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
