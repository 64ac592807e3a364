use diesel::r2d2::PoolError;
use thiserror::Error;

/// Errors raised by category store implementations.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// A query failed inside the database.
    #[error("database error: {0}")]
    Database(#[from] diesel::result::Error),
    /// No connection could be checked out of the pool.
    #[error("connection pool error: {0}")]
    Pool(#[from] PoolError),
    /// The aggregate could not be mapped onto the storage representation.
    #[error("validation error: {0}")]
    ValidationError(String),
    /// Any other store failure, reported with its original message.
    #[error("{0}")]
    Unexpected(String),
}

/// Convenient alias for results returned from store functions.
pub type RepositoryResult<T> = Result<T, RepositoryError>;
