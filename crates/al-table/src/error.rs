//! Lookup table errors.

use al_core::AlError;
use thiserror::Error;

/// Result type for table operations.
pub type TableResult<T> = Result<T, TableError>;

/// Errors raised while building or querying an [`InterpolationTable`](crate::InterpolationTable).
#[derive(Error, Debug, Clone, PartialEq)]
pub enum TableError {
    /// Interpolation needs at least two points.
    #[error("Table has {len} entries, interpolation needs at least 2")]
    TooFewEntries { len: usize },

    /// Two points share the same key.
    #[error("Duplicate table key {key}")]
    DuplicateKey { key: f64 },

    /// Keys must be finite to be totally ordered.
    #[error("Non-finite table key {key}")]
    NonFiniteKey { key: f64 },

    /// The lookup argument must be finite.
    #[error("Non-finite lookup argument {x}")]
    NonFiniteQuery { x: f64 },
}

impl From<TableError> for AlError {
    fn from(err: TableError) -> Self {
        match err {
            TableError::NonFiniteQuery { x } => AlError::NonFinite {
                what: "table lookup argument",
                value: x,
            },
            TableError::TooFewEntries { .. }
            | TableError::DuplicateKey { .. }
            | TableError::NonFiniteKey { .. } => AlError::InvalidArg {
                what: err.to_string(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = TableError::TooFewEntries { len: 1 };
        assert!(err.to_string().contains("at least 2"));

        let err = TableError::DuplicateKey { key: 2.5 };
        assert!(err.to_string().contains("2.5"));
    }

    #[test]
    fn error_to_al_error() {
        let al: AlError = TableError::TooFewEntries { len: 0 }.into();
        assert!(matches!(al, AlError::InvalidArg { .. }));

        let al: AlError = TableError::NonFiniteQuery { x: f64::NAN }.into();
        assert!(matches!(al, AlError::NonFinite { .. }));
    }
}
