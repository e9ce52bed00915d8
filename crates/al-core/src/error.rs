use thiserror::Error;

pub type AlResult<T> = Result<T, AlError>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum AlError {
    #[error("Non-finite numeric value for {what}: {value}")]
    NonFinite { what: &'static str, value: f64 },

    #[error("Invalid argument: {what}")]
    InvalidArg { what: String },

    #[error("Invariant violated: {what}")]
    Invariant { what: String },
}
