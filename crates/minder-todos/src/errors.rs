use minder_pg::StoreError;

/// Failure taxonomy for todo operations.
///
/// `Missing` covers both rows that never existed and rows owned by
/// someone else; the repository cannot tell them apart and callers must
/// not be able to either.
#[derive(Debug, thiserror::Error)]
pub enum TodoError {
    #[error("todo not found")]
    Missing,
    #[error(transparent)]
    Store(#[from] StoreError),
}
