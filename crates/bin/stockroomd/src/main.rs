//! # stockroomd: stockroom server
//!
//! Composition root that wires all adapters together and starts the server.
//!
//! ## Responsibilities
//! - Load configuration (config file, env vars)
//! - Install the `tracing` subscriber
//! - Initialize the `SQLite` connection pool and run migrations
//! - Construct the repository and the item service
//! - Optionally seed the demo inventory
//! - Build the axum router, bind and serve
//! - Shut down gracefully on SIGINT/SIGTERM
//!
//! ## Dependency rule
//! This is the **only** crate that depends on the storage and HTTP
//! adapters at once. It is the wiring layer: no domain logic belongs here.

mod config;
mod seed;

use std::sync::Arc;

use stockroom_adapter_http_axum::router;
use stockroom_adapter_http_axum::state::AppState;
use stockroom_adapter_storage_sqlite_sqlx::SqliteItemRepository;
use stockroom_app::services::item_service::ItemService;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = config::Config::load()?;
    init_tracing(&config.logging.filter);

    // Database
    let db = stockroom_adapter_storage_sqlite_sqlx::Config {
        database_url: config.database_url().to_string(),
    }
    .build()
    .await?;

    // Services
    let item_service = Arc::new(ItemService::new(SqliteItemRepository::new(
        db.pool().clone(),
    )));

    if config.database.seed_demo_data {
        seed::seed_if_empty(&item_service).await?;
    }

    // HTTP
    let app = router::build(
        AppState::from_arc(item_service),
        &config.server.cors_origins,
    );

    let bind_addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    tracing::info!(%bind_addr, "stockroomd listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("stockroomd stopped");
    Ok(())
}

fn init_tracing(filter: &str) {
    let filter = EnvFilter::try_new(filter).unwrap_or_else(|err| {
        eprintln!("invalid log filter {filter:?} ({err}), falling back to info");
        EnvFilter::new("info")
    });
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %err, "failed to listen for ctrl-c");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{SignalKind, signal};

        match signal(SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(err) => {
                tracing::error!(error = %err, "failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }
    tracing::info!("shutdown signal received, draining connections");
}
