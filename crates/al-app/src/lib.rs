//! Application service layer for airlab.
//!
//! Sits between the command-line front end and the library crates: loads lab
//! files, produces density reports and performs table lookups, reporting every
//! failure through [`AppError`].

pub mod density_service;
pub mod error;
pub mod lab_service;

// Re-export key types for convenience
pub use density_service::{
    DensityReport, DensityRequest, altitude_density, density_report, parse_reading,
};
pub use error::{AppError, AppResult};
pub use lab_service::{LabSummary, load_lab, lookup, summarize};
