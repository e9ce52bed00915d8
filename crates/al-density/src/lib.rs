//! al-density: moist air density for mass laboratories.
//!
//! Provides:
//! - `EnvironmentalReading` (temperature, relative humidity, pressure)
//! - `DensityModel` trait shared by every physical equation
//! - `CipmModel`: the CIPM-2007 equation for the density of moist air,
//!   built on a swappable `CipmConstants` table
//! - `ApproximateModel`: closed-form estimate without a constants table
//! - `SimpleModel`: barometric altitude-only estimate
//! - `MeasurementContext`: current reading plus the installed model
//! - `factory`: model selection by name and standard contexts
//!
//! # Architecture
//!
//! The CIPM sub-formulas (saturation vapour pressure, enhancement factor,
//! water vapour mole fraction, compressibility factor) are free functions in
//! [`cipm`] parameterized over a constants table. A future revision of the
//! equation only needs a new `CipmConstants` value.
//!
//! # Example
//!
//! ```
//! use al_density::{CipmModel, DensityModel, EnvironmentalReading};
//!
//! let model = CipmModel::cipm_2007();
//! let reading = EnvironmentalReading::new(20.0, 0.50, 101_325.0);
//! let rho = model.density(&reading);
//! assert!((rho - 1.1993).abs() < 1e-4);
//! ```

pub mod approximate;
pub mod cipm;
pub mod context;
pub mod error;
pub mod factory;
pub mod model;
pub mod reading;
pub mod simple;

// Re-exports for ergonomics
pub use approximate::{ApproximateModel, approximate_density};
pub use cipm::{CIPM_2007, CipmBreakdown, CipmConstants, CipmModel};
pub use context::MeasurementContext;
pub use error::{DensityError, DensityResult};
pub use factory::{ModelKind, build_model, context_by_name, standard_context};
pub use model::{
    DensityModel, K_FACTOR_DIVISOR, REFERENCE_CO2_FRACTION, STANDARD_AIR_DENSITY, check_co2_fraction,
    k_factor,
};
pub use reading::EnvironmentalReading;
pub use simple::{SimpleModel, simple_density};
