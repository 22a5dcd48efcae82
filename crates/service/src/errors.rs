use thiserror::Error;

/// Failures surfaced by garage operations.
///
/// Rule violations display as their bare message so the boundary layer can
/// hand it to the caller unchanged.
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("{0}")]
    Validation(String),
    #[error("{0}")]
    NotFound(String),
    #[error("{0}")]
    Conflict(String),
    #[error("store error: {0}")]
    Store(String),
    #[error("model error: {0}")]
    Model(#[from] models::errors::ModelError),
}

impl ServiceError {
    pub fn validation(msg: impl Into<String>) -> Self { Self::Validation(msg.into()) }

    /// Stable label for logs and metrics.
    pub fn kind(&self) -> &'static str {
        match self {
            ServiceError::Validation(_) => "validation",
            ServiceError::NotFound(_) => "not_found",
            ServiceError::Conflict(_) => "conflict",
            ServiceError::Store(_) => "store",
            ServiceError::Model(_) => "model",
        }
    }

    /// True for deterministic rule violations, false for infrastructure faults.
    pub fn is_rule_violation(&self) -> bool {
        matches!(self, ServiceError::Validation(_) | ServiceError::NotFound(_) | ServiceError::Conflict(_))
    }
}

impl From<sea_orm::DbErr> for ServiceError {
    fn from(e: sea_orm::DbErr) -> Self { Self::Store(e.to_string()) }
}
