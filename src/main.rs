use clap::Parser;
use dotenv::dotenv;
use tokio::net::TcpListener;
use tracing::info;

use rusty_contacts::prelude::{AppError, AppState, Config};
use rusty_contacts::{open_manager, server, telemetry};

async fn wait_for_shutdown_signal() {
    #[cfg(unix)]
    {
        use tokio::signal::unix::{SignalKind, signal};

        match (
            signal(SignalKind::terminate()),
            signal(SignalKind::interrupt()),
        ) {
            (Ok(mut sigterm), Ok(mut sigint)) => {
                tokio::select! {
                    _ = sigterm.recv() => {}
                    _ = sigint.recv() => {}
                }
            }
            _ => {
                let _ = tokio::signal::ctrl_c().await;
            }
        }
    }
    #[cfg(not(unix))]
    {
        let _ = tokio::signal::ctrl_c().await;
    }
}

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenv().ok();
    let config = Config::parse();
    telemetry::init_tracing(config.log_json);

    let manager = open_manager(&config);
    info!(
        storage_path = %config.storage_path.display(),
        medium = manager.medium(),
        persist_mode = ?config.persist_mode,
        id_policy = ?manager.id_policy(),
        contacts = manager.contact_list().len(),
        "contact store ready"
    );

    let listener = TcpListener::bind(config.socket_addr()).await?;

    server::serve(listener, AppState::new(manager), wait_for_shutdown_signal()).await
}
