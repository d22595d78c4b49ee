//! Service entry-point: wires the store, REST endpoints, and OpenAPI docs.

use tracing::{error, info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use user_service::config::AppConfig;
use user_service::outbound::persistence::Store;
use user_service::server::create_server;

/// Application bootstrap.
///
/// The store must be reachable before the port is bound: a failed
/// connection logs the cause and terminates the process with a non-zero
/// exit code.
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    if let Err(e) = fmt().with_env_filter(EnvFilter::from_default_env()).json().try_init() {
        warn!(error = %e, "tracing init failed");
    }

    let config = AppConfig::from_env();

    let store = match Store::connect(&config.database_path) {
        Ok(store) => store,
        Err(e) => {
            error!(error = %e, path = %config.database_path.display(), "store connection failed");
            return Err(std::io::Error::other(e.to_string()));
        }
    };
    info!(path = %config.database_path.display(), "store connection established");

    let server = create_server(store.clone(), &config)?;
    let handle = server.handle();

    #[cfg(unix)]
    actix_web::rt::spawn(async move {
        let mut sigterm = match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(sigterm) => sigterm,
            Err(e) => {
                warn!(error = %e, "failed to install SIGTERM handler");
                return;
            }
        };
        sigterm.recv().await;
        info!("SIGTERM received, stopping server");
        handle.stop(true).await;
    });

    info!(port = config.port, "server running");
    info!(port = config.port, "swagger docs available under /docs");
    server.await?;

    store.close();
    info!("store connection closed, exiting");
    Ok(())
}
