use thiserror::Error;

#[derive(Debug, Error)]
pub enum RepoError {
    #[error("Database query failed: {0}")]
    TechnicalError(#[from] sqlx::Error),
    #[error("Database migration failed: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),
}
