//! Application runtime.
//!
//! [`AppHandle`] owns the database pool and the repository provider. It
//! connects, optionally runs migrations, and closes the pool on shutdown.

use std::sync::Arc;

use sea_orm::DatabaseConnection;
use sea_orm_migration::MigratorTrait;
use tracing::{info, warn};

use crate::application::services::ReportService;
use crate::config::AppConfig;
use crate::domain::RepositoryProvider;
use crate::infrastructure::database::migrator::Migrator;
use crate::infrastructure::database::repositories::SeaOrmRepositoryProvider;
use crate::infrastructure::{init_database, DatabaseConfig};
use crate::shared::AppError;

// ── Options ────────────────────────────────────────────────────────

/// Options for starting the application runtime.
pub struct AppOptions {
    /// Where to connect.
    pub database: DatabaseConfig,
    /// Run database migrations on startup (default: true).
    pub auto_migrate: bool,
}

impl AppOptions {
    pub fn from_config(config: &AppConfig) -> Self {
        Self {
            database: config.database.to_database_config(),
            auto_migrate: true,
        }
    }
}

impl Default for AppOptions {
    fn default() -> Self {
        Self::from_config(&AppConfig::default())
    }
}

// ── AppHandle ──────────────────────────────────────────────────────

/// Handle to a connected application.
pub struct AppHandle {
    /// Repository provider for data access.
    pub repos: Arc<dyn RepositoryProvider>,
    db: DatabaseConnection,
}

impl AppHandle {
    pub async fn start(options: AppOptions) -> Result<Self, AppError> {
        let db = init_database(&options.database).await?;

        if options.auto_migrate {
            info!("Running database migrations...");
            Migrator::up(&db, None).await?;
            info!("Migrations completed");
        }

        let repos: Arc<dyn RepositoryProvider> =
            Arc::new(SeaOrmRepositoryProvider::new(db.clone()));

        Ok(Self { repos, db })
    }

    /// Apply pending migrations; returns how many ran.
    pub async fn migrate(&self) -> Result<usize, AppError> {
        let pending = Migrator::get_pending_migrations(&self.db).await?.len();
        Migrator::up(&self.db, None).await?;
        Ok(pending)
    }

    pub fn reports(&self) -> ReportService {
        ReportService::new(self.repos.clone())
    }

    pub async fn shutdown(self) {
        if let Err(e) = self.db.close().await {
            warn!("Error closing database connection: {}", e);
        } else {
            info!("Database connection closed");
        }
    }
}

/// Install the global tracing subscriber, writing to stderr.
/// `RUST_LOG` wins over the configured level.
pub fn init_tracing(config: &AppConfig) {
    use tracing_subscriber::layer::SubscriberExt;
    use tracing_subscriber::util::SubscriberInitExt;

    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&config.logging.level));

    match config.logging.format.to_lowercase().as_str() {
        "json" => {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(
                    tracing_subscriber::fmt::layer()
                        .json()
                        .with_writer(std::io::stderr),
                )
                .init();
        }
        _ => {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
                .init();
        }
    }
}
