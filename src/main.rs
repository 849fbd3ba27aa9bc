//! User registry HTTP server.
//!
//! Reads configuration from a TOML file (`$USER_REGISTRY_CONFIG`, else
//! `~/.config/user-registry/config.toml`) with environment overrides, which
//! may also come from a `.env` file.

use std::sync::Arc;

use axum::extract::Request;
use axum::ServiceExt;
use sea_orm_migration::MigratorTrait;
use tokio::net::TcpListener;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use user_registry::application::UserService;
use user_registry::auth::AuthState;
use user_registry::domain::UserRepositoryInterface;
use user_registry::infrastructure::shutdown_signal;
use user_registry::interfaces::http::USERS_BASE_PATH;
use user_registry::{
    create_app, default_config_path, init_database, AppConfig, Migrator, UserRepository,
};

fn init_tracing(level: &str, json: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    if json {
        tracing_subscriber::fmt().json().with_env_filter(filter).init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // ── Load configuration ─────────────────────────────────────
    dotenvy::dotenv().ok();
    let config_path = default_config_path();
    let app_cfg = match AppConfig::load(&config_path) {
        Ok(cfg) => {
            init_tracing(&cfg.logging.level, cfg.logging.json);
            info!("Configuration loaded from {}", config_path.display());
            cfg
        }
        Err(e) => {
            init_tracing("info", false);
            error!("Failed to load config: {}", e);
            return Err(e.into());
        }
    };

    info!("Starting user registry...");

    // ── Database ───────────────────────────────────────────────
    let db = match init_database(&app_cfg.database_config()).await {
        Ok(db) => db,
        Err(e) => {
            error!("Failed to connect to database: {}", e);
            return Err(e.into());
        }
    };

    if let Err(e) = Migrator::up(&db, None).await {
        error!("Failed to prepare users table: {}", e);
        return Err(e.into());
    }

    // ── Service & router ───────────────────────────────────────
    let repo: Arc<dyn UserRepositoryInterface> = Arc::new(UserRepository::new(db));
    let user_service = Arc::new(UserService::new(repo));
    let auth = AuthState::new(app_cfg.auth.clone());
    let app = create_app(user_service, auth);

    let addr = app_cfg.server.address();
    let listener = TcpListener::bind(&addr).await?;
    info!("Listening on http://{}{}", addr, USERS_BASE_PATH);

    axum::serve(listener, ServiceExt::<Request>::into_make_service(app))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}
