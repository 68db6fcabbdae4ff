use pm_config::{Config, DatabaseBackend};
use pm_db::{MemoryStore, SqliteStore, WorkspaceStore};
use pm_server::{AppState, build_router, logger};
use pm_workspace::{Workspace, seed_if_empty};

use std::error::Error;
use std::sync::Arc;

use log::{error, info, warn};
use tokio::net::TcpListener;
use tower::limit::GlobalConcurrencyLimitLayer;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // A missing .env is fine
    dotenvy::dotenv().ok();

    // Load and validate configuration
    let config = Config::load()?;
    config.validate()?;

    // Ensure log directory exists before the logger opens the file
    let log_file_path = config.log_file_path()?;
    if let Some(parent) = log_file_path.as_ref().and_then(|p| p.parent()) {
        std::fs::create_dir_all(parent)?;
    }

    // Initialize logger (before any other logging)
    logger::initialize(config.logging.level, log_file_path, config.logging.colored)?;

    info!("Starting pm-server v{}", env!("CARGO_PKG_VERSION"));
    config.log_summary();

    let store = open_store(&config).await?;

    if config.seed.enabled {
        if seed_if_empty(store.as_ref()).await? {
            info!("Seeded demo workspace");
        }
    } else {
        info!("Demo seeding disabled");
    }

    let app_state = AppState::new(Workspace::new(store));

    let app = build_router(app_state).layer(GlobalConcurrencyLimitLayer::new(
        config.server.max_connections,
    ));

    // Create TCP listener
    let bind_addr = config.bind_addr();
    let listener = TcpListener::bind(&bind_addr).await?;

    // Get actual bound address (important when port is 0 / auto-assigned)
    let actual_addr = listener.local_addr()?;
    info!("Server listening on {}", actual_addr);

    // Start server with graceful shutdown
    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            match tokio::signal::ctrl_c().await {
                Ok(()) => info!("Received SIGINT (Ctrl+C), initiating graceful shutdown"),
                Err(e) => error!("Failed to listen for SIGINT: {}", e),
            }
        })
        .await?;

    info!("Graceful shutdown complete");

    Ok(())
}

/// The backend is chosen once, here, for the life of the process.
async fn open_store(config: &Config) -> Result<Arc<dyn WorkspaceStore>, Box<dyn Error>> {
    match config.database.backend {
        DatabaseBackend::Sqlite => {
            let database_path = config.database_path()?;
            info!("Connecting to database: {}", database_path.display());

            let pool = pm_db::open_pool(&database_path).await?;
            info!("Database ready");

            Ok(Arc::new(SqliteStore::new(pool)))
        }
        DatabaseBackend::Memory => {
            warn!("Using in-memory store; data is lost on shutdown");
            Ok(Arc::new(MemoryStore::new()))
        }
    }
}
