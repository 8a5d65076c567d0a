use std::sync::Arc;

use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database, DatabaseConnection};

use crate::server::{
    config::Config,
    error::AppError,
    service::{
        language::LanguageService,
        upload::{LocalUploadStore, UploadStore},
    },
    state::AppState,
    util::jwt::TokenIssuer,
};

/// Connects to the database and applies pending migrations.
///
/// The connection pool is built from `DATABASE_URL`; SQL statement logging from sqlx is
/// disabled in favour of request-level tracing. Every migration that has not run yet is
/// applied before the pool is handed out, so no request ever sees an outdated schema.
///
/// # Arguments
/// - `config` - Application configuration containing the database URL
///
/// # Returns
/// - `Ok(DatabaseConnection)` - Connected database with the current schema
/// - `Err(AppError::DbErr)` - Connecting or migrating failed
pub async fn connect_to_database(config: &Config) -> Result<DatabaseConnection, AppError> {
    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    tracing::info!("Database migrations applied");

    Ok(db)
}

/// Seeds English and Traditional Chinese when the language registry is empty.
pub async fn seed_languages(db: &DatabaseConnection) -> Result<(), AppError> {
    LanguageService::new(db).seed_defaults().await
}

/// Builds the shared state handed to every handler.
pub fn build_state(db: DatabaseConnection, config: &Config) -> AppState {
    let tokens = TokenIssuer::new(&config.jwt_secret, config.jwt_issuer.clone());
    let uploads: Arc<dyn UploadStore> = Arc::new(LocalUploadStore::new(
        config.upload_dir.clone(),
        config.upload_max_size,
    ));

    AppState::new(db, tokens, uploads)
}
