//! al-core: stable foundation for airlab.
//!
//! Contains:
//! - error (shared error types)
//! - numeric (Real + tolerances + float helpers)
//! - units (uom SI types + constructors)
//! - convert (scalar unit conversions used around the lab)
//! - parse (unit-tagged text input)

pub mod convert;
pub mod error;
pub mod numeric;
pub mod parse;
pub mod units;

// Re-exports: nice ergonomics for downstream crates
pub use error::{AlError, AlResult};
pub use numeric::*;
pub use parse::{Quantity, UnitError, parse_quantity};
pub use units::*;
