use super::PgErr;
use std::future::Future;
use tokio_postgres::error::SqlState;

/// Upper bound on any single store operation. Exceeding it aborts the
/// query rather than blocking the worker indefinitely.
pub const STORE_DEADLINE: std::time::Duration = std::time::Duration::from_secs(5);

/// Infrastructure failure at the storage boundary.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("store operation exceeded {}s deadline", STORE_DEADLINE.as_secs())]
    Timeout,
    #[error("store unavailable: {0}")]
    Unavailable(#[from] PgErr),
}

impl StoreError {
    /// True when the underlying driver error is a unique-constraint violation.
    pub fn is_unique_violation(&self) -> bool {
        match self {
            Self::Unavailable(e) => e.code() == Some(&SqlState::UNIQUE_VIOLATION),
            Self::Timeout => false,
        }
    }
}

/// Runs a single store operation under [`STORE_DEADLINE`].
pub async fn bounded<T, F>(fut: F) -> Result<T, StoreError>
where
    F: Future<Output = Result<T, PgErr>>,
{
    match tokio::time::timeout(STORE_DEADLINE, fut).await {
        Ok(Ok(value)) => Ok(value),
        Ok(Err(e)) => Err(StoreError::Unavailable(e)),
        Err(_) => Err(StoreError::Timeout),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timeout_is_not_a_unique_violation() {
        assert!(!StoreError::Timeout.is_unique_violation());
    }
}
