pub mod api;
pub mod app_state;
pub mod error;
pub mod health;
pub mod logger;
pub mod routes;

use crate::app_state::AppState;

use lc_auth::{JwtIdentityProvider, JwtValidator};

use std::error::Error;
use std::sync::Arc;

use log::{info, warn};
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // Pick up .env before reading config
    dotenvy::dotenv().ok();

    // Load and validate configuration
    let config = lc_config::Config::load()?;
    config.validate()?;

    // Construct log file path if configured
    let log_file_path: Option<std::path::PathBuf> = if let Some(ref filename) = config.logging.file
    {
        let config_dir = lc_config::Config::config_dir()?;
        let log_dir = config_dir.join(&config.logging.dir);

        // Ensure log directory exists
        std::fs::create_dir_all(&log_dir)?;

        Some(log_dir.join(filename))
    } else {
        None
    };

    // Initialize logger (before any other logging)
    logger::initialize(config.logging.level, log_file_path, config.logging.colored)?;

    info!("Starting lc-server v{}", env!("CARGO_PKG_VERSION"));
    config.log_summary();

    // Initialize database pool
    let database_path = config.database_path()?;
    info!("Connecting to database: {}", database_path.display());

    let pool = lc_db::connect(&database_path, config.database.max_connections).await?;
    info!("Database connection established");

    // Run migrations
    info!("Running database migrations...");
    sqlx::migrate!("../crates/lc-db/migrations")
        .run(&pool)
        .await?;
    info!("Migrations complete");

    // Session-token validator (validate() ensures exactly one key source)
    let validator = if let Some(ref secret) = config.auth.jwt_secret {
        JwtValidator::with_hs256(secret.as_bytes())
    } else if let Some(ref key_path) = config.auth.jwt_public_key_path {
        let config_dir = lc_config::Config::config_dir()?;
        let full_path = config_dir.join(key_path);
        let public_key = std::fs::read_to_string(&full_path).map_err(|e| {
            error::ServerError::JwtKeyFile {
                path: full_path.display().to_string(),
                source: e,
            }
        })?;
        JwtValidator::with_rs256(&public_key)?
    } else {
        unreachable!("validate() ensures a JWT key source is configured")
    };
    info!("Session tokens: {} verification enabled", validator.algorithm());

    // Build application state
    let app_state = AppState {
        pool,
        identity: Arc::new(JwtIdentityProvider::new(validator)),
    };

    // Build router
    let app = routes::build_router(app_state);

    // Create TCP listener
    let bind_addr = config.bind_addr();
    let listener = TcpListener::bind(&bind_addr).await?;

    // Get actual bound address (important when port is 0 / auto-assigned)
    let actual_addr = listener.local_addr()?;
    info!("Server listening on {}", actual_addr);

    // Start server with graceful shutdown
    info!("Server ready to accept connections");
    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            match tokio::signal::ctrl_c().await {
                Ok(()) => info!("Received SIGINT (Ctrl+C), initiating graceful shutdown"),
                Err(e) => warn!("Failed to listen for SIGINT: {}", e),
            }
        })
        .await?;

    info!("Graceful shutdown complete");
    Ok(())
}
