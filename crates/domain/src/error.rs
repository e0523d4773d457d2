use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    #[error("table name must be a plain SQL identifier, got {0:?}")]
    InvalidTableName(String),
    #[error("sample limit must be positive, got {0}")]
    InvalidSampleLimit(i64),
}
