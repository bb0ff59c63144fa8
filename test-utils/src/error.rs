use thiserror::Error;

/// Errors raised while preparing a test environment.
#[derive(Error, Debug)]
pub enum TestError {
    /// Database connection, table creation or session table migration failed.
    #[error(transparent)]
    Database(#[from] sea_orm::DbErr),
}
