//! Common error types used across the workspace.
//!
//! Each layer defines its own typed errors and converts into
//! [`StockroomError`] via `From`.

/// Top-level error for domain and application operations.
#[derive(Debug, thiserror::Error)]
pub enum StockroomError {
    #[error("validation failed")]
    Validation(#[from] ValidationError),

    #[error("not found")]
    NotFound(#[from] NotFoundError),

    /// Opaque failure from a persistence adapter.
    #[error("storage failure")]
    Storage(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// A domain invariant did not hold.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Name must not be empty")]
    EmptyName,

    #[error("{field} must be at most {max} characters")]
    TooLong { field: &'static str, max: usize },

    #[error("limit must be between 1 and {max}")]
    InvalidPagination { max: u32 },

    #[error("Unknown item type: {0}")]
    InvalidKind(String),

    #[error("Unknown item status: {0}")]
    InvalidStatus(String),
}

/// A lookup by identifier found nothing.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{entity} not found")]
pub struct NotFoundError {
    pub entity: &'static str,
    pub id: String,
}
