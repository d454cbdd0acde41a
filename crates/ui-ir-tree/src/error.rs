use thiserror::Error;

pub type TreeResult<T> = Result<T, TreeError>;

/// Errors for contract violations. Ordinary "not found" outcomes are
/// reported as `false`/`None` by the mutation functions instead.
#[derive(Debug, Error)]
pub enum TreeError {
    #[error("invalid tree document: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("cannot insert `{child}` into `{parent}`: {reason}")]
    IllegalInsert {
        parent: String,
        child: String,
        reason: InsertRejection,
    },
}

/// Why a schema-checked insert was refused.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InsertRejection {
    #[error("containment not allowed by the schema")]
    Containment,
    #[error("default slot already holds its maximum of {max} children")]
    Capacity { max: usize },
    #[error("slot `{0}` is not allowed")]
    Slot(String),
}
