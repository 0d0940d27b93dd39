use authapi_auth::JwtValidator;
use authapi_config::Config;
use authapi_identity::KeycloakClient;
use authapi_server::{AppState, ClientConfigDto, build_router, error::ServerError, logger};

use std::error::Error;
use std::sync::Arc;
use std::time::Duration;

use log::{error, info, warn};
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions, SqliteSynchronous};
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // .env is optional
    dotenvy::dotenv().ok();

    // Load and validate configuration
    let config = Config::load()?;
    config.validate()?;

    // Initialize logger (before any other logging)
    logger::initialize(
        config.logging.level,
        config.log_file_path()?,
        config.logging.colored,
    )?;

    info!("Starting authapi-server v{}", env!("CARGO_PKG_VERSION"));
    config.log_summary();

    // Initialize database pool
    let database_path = config.database_path()?;
    info!("Connecting to database: {}", database_path.display());

    let pool = SqlitePoolOptions::new()
        .max_connections(10)
        .connect_with(
            SqliteConnectOptions::new()
                .filename(database_path)
                .create_if_missing(true)
                .foreign_keys(true)
                .journal_mode(SqliteJournalMode::Wal)
                .synchronous(SqliteSynchronous::Normal)
                .busy_timeout(Duration::from_secs(5)),
        )
        .await?;

    info!("Database connection established");

    info!("Running database migrations...");
    authapi_db::run_migrations(&pool)
        .await
        .map_err(ServerError::from)?;
    info!("Migrations complete");

    // Create JWT validator (optional based on auth.enabled)
    let jwt_validator: Option<Arc<JwtValidator>> = if config.auth.enabled {
        let audience = config.auth.audience.as_deref();
        let validator = if let Some(ref secret) = config.auth.jwt_secret {
            JwtValidator::with_hs256(secret.as_bytes(), audience)
        } else if let Some(ref key_path) = config.auth.jwt_public_key_path {
            let full_path = Config::config_dir()?.join(key_path);
            let public_key =
                std::fs::read_to_string(&full_path).map_err(|e| ServerError::JwtKeyFile {
                    path: full_path.display().to_string(),
                    source: e,
                })?;
            JwtValidator::with_rs256(&public_key, audience).map_err(ServerError::from)?
        } else {
            unreachable!("validate() ensures JWT config when auth.enabled")
        };
        info!("JWT: {} authentication enabled", validator.algorithm());
        Some(Arc::new(validator))
    } else {
        warn!("Authentication DISABLED - subject is taken from the X-User-Id header");
        None
    };

    let identity = Arc::new(KeycloakClient::new(&config.keycloak));
    info!(
        "Identity provider: {} realm={}",
        config.keycloak.server_url, config.keycloak.realm
    );

    let app_state = AppState {
        pool,
        jwt_validator,
        identity,
        client_config: ClientConfigDto::from(&config.keycloak),
        cors: config.cors.clone(),
    };

    let app = build_router(app_state);

    let bind_addr = config.bind_addr();
    let listener = TcpListener::bind(&bind_addr).await?;
    info!("Server listening on {}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Graceful shutdown complete");
    Ok(())
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("Received SIGINT (Ctrl+C), initiating graceful shutdown"),
        Err(e) => {
            error!("Failed to listen for SIGINT: {}", e);
            // Keep serving; the process can still be killed
            std::future::pending::<()>().await
        }
    }
}
