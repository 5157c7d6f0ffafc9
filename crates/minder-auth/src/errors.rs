/// Credential and token failure taxonomy.
///
/// Token variants record which verification gate failed. That granularity
/// stays inside the process: the HTTP boundary collapses every token
/// failure into one generic unauthenticated response so callers cannot
/// probe which check rejected them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum AuthError {
    #[error("password below minimum length")]
    WeakPassword,
    #[error("password hashing failed")]
    Hashing,
    #[error("invalid credentials")]
    InvalidCredentials,
    #[error("malformed token")]
    Malformed,
    #[error("token algorithm not allowed")]
    AlgorithmMismatch,
    #[error("token signature invalid")]
    InvalidSignature,
    #[error("token expired")]
    Expired,
    #[error("token claims invalid")]
    InvalidClaims,
    #[error("missing or malformed bearer credential")]
    Unauthenticated,
}
