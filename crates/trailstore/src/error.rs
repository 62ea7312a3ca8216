//! Error types for trailstore

use thiserror::Error;

/// Result type alias for trailstore operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Error types for query building and data access
#[derive(Debug, Error)]
pub enum StoreError {
    /// Referenced column is not in the table's known column set
    #[error("unknown column: {0}")]
    UnknownColumn(String),

    /// Operator token outside the supported set
    #[error("unsupported operator: {0}")]
    UnknownOperator(String),

    /// Condition value incompatible with the column's declared type
    #[error("type mismatch on column '{column}': expected {expected}, got {actual}")]
    TypeMismatch {
        column: String,
        expected: &'static str,
        actual: &'static str,
    },

    /// A non-final filter condition has no AND/OR connector
    #[error("missing AND/OR connector after condition {0}")]
    MissingConnector(usize),

    /// Builder input rejected before execution
    #[error("validation error: {0}")]
    Validation(String),

    /// Query execution error
    #[error("query error: {0}")]
    Query(#[from] tokio_postgres::Error),

    /// Connection pool error
    #[cfg(feature = "pool")]
    #[error("pool error: {0}")]
    Pool(String),

    /// Database connection error
    #[error("connection error: {0}")]
    Connection(String),

    /// Row decode/mapping error
    #[error("decode error on column '{column}': {message}")]
    Decode { column: String, message: String },
}

impl StoreError {
    /// Create a validation error
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// Create a decode error for a specific column
    pub fn decode(column: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Decode {
            column: column.into(),
            message: message.into(),
        }
    }

    /// Check if this error was caused by the caller's input.
    ///
    /// Caller errors are detected before any query is submitted and are never
    /// worth retrying with the same input.
    pub fn is_caller_error(&self) -> bool {
        matches!(
            self,
            Self::UnknownColumn(_)
                | Self::UnknownOperator(_)
                | Self::TypeMismatch { .. }
                | Self::MissingConnector(_)
                | Self::Validation(_)
        )
    }

    /// Check if this error came from the underlying executor or connection.
    pub fn is_data_access(&self) -> bool {
        #[cfg(feature = "pool")]
        if matches!(self, Self::Pool(_)) {
            return true;
        }
        matches!(
            self,
            Self::Query(_) | Self::Connection(_) | Self::Decode { .. }
        )
    }
}

#[cfg(feature = "pool")]
impl From<deadpool_postgres::PoolError> for StoreError {
    fn from(err: deadpool_postgres::PoolError) -> Self {
        Self::Pool(err.to_string())
    }
}
