use crate::types::EntityId;

/// Domain-level error taxonomy shared across crates.
///
/// All variants are terminal, user-facing outcomes; nothing here is
/// retryable. The api crate maps each variant to an HTTP status.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("{entity} not found")]
    NotFound { entity: &'static str, id: EntityId },

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Forbidden: {0}")]
    Forbidden(String),

    /// The requested quantity exceeds the seats still available for
    /// the session. Carries the pre-call available count.
    #[error("Not enough available seats. Only {available} left.")]
    InsufficientCapacity { available: i64 },

    #[error("Internal error: {0}")]
    Internal(String),
}
