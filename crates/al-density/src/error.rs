//! Air density errors.

use al_core::AlError;
use thiserror::Error;

/// Result type for air density operations.
pub type DensityResult<T> = Result<T, DensityError>;

/// Errors that can occur around density calculations.
///
/// The formulas themselves never fail; they propagate IEEE-754 infinities and
/// NaN. Errors come from explicit validation, from model selection and from
/// querying a context that has no reading yet.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DensityError {
    /// Non-physical values (negative pressure, humidity above 100%, etc.).
    #[error("Non-physical value: {what}")]
    NonPhysical { what: &'static str },

    /// Invalid argument.
    #[error("Invalid argument: {what}")]
    InvalidArg { what: String },

    /// Requested model variant cannot be built.
    #[error("Unknown density model '{name}'")]
    UnknownModel { name: String },

    /// A context was queried before any reading was supplied.
    #[error("No environmental reading has been set")]
    MissingReading,
}

impl From<DensityError> for AlError {
    fn from(err: DensityError) -> Self {
        match err {
            DensityError::InvalidArg { what } => AlError::InvalidArg { what },
            DensityError::NonPhysical { what } => AlError::InvalidArg {
                what: format!("Non-physical air reading: {what}"),
            },
            DensityError::UnknownModel { name } => AlError::InvalidArg {
                what: format!("Unknown density model: {name}"),
            },
            DensityError::MissingReading => AlError::Invariant {
                what: "context queried without a reading".to_string(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = DensityError::NonPhysical { what: "pressure" };
        assert!(err.to_string().contains("pressure"));

        let err = DensityError::UnknownModel {
            name: "cipm-1981".into(),
        };
        assert!(err.to_string().contains("cipm-1981"));
    }

    #[test]
    fn error_to_al_error() {
        let al: AlError = DensityError::MissingReading.into();
        assert!(matches!(al, AlError::Invariant { .. }));

        let al: AlError = DensityError::UnknownModel { name: "x".into() }.into();
        assert!(matches!(al, AlError::InvalidArg { .. }));
    }
}
