//! Density model trait.

use std::fmt;

use crate::approximate::approximate_density;
use crate::error::{DensityError, DensityResult};
use crate::reading::EnvironmentalReading;
use crate::simple::simple_density;

/// Conventional air density used for mass standards [kg/m³].
pub const STANDARD_AIR_DENSITY: f64 = 1.205;

/// Conventional density of mass standards [kg/m³] used by the K factor.
pub const K_FACTOR_DIVISOR: f64 = 8000.0;

/// Average mole fraction of CO₂ in laboratory air [mol/mol].
pub const REFERENCE_CO2_FRACTION: f64 = 0.0004;

/// Air buoyancy correction factor `1 - ρ_air / 8000`.
#[inline]
pub fn k_factor(air_density: f64) -> f64 {
    1.0 - air_density / K_FACTOR_DIVISOR
}

/// Check that a CO₂ content is a mole fraction in [0, 1].
pub fn check_co2_fraction(co2_fraction: f64) -> DensityResult<f64> {
    if (0.0..=1.0).contains(&co2_fraction) {
        Ok(co2_fraction)
    } else {
        Err(DensityError::InvalidArg {
            what: format!("CO2 mole fraction {co2_fraction} is outside [0, 1]"),
        })
    }
}

/// Trait for moist air density equations.
///
/// Every method is a pure function of its inputs and the model's fixed
/// constants. Implementations must be thread-safe (Send + Sync) so one model
/// can be shared by many contexts. Inputs are not validated here: bad
/// readings yield infinities or NaN, see [`EnvironmentalReading::validate`].
pub trait DensityModel: Send + Sync + fmt::Debug {
    /// Name of the physical equation, for display and audit only.
    fn equation_name(&self) -> &str;

    /// Density [kg/m³] at `reading` with an explicit CO₂ mole fraction.
    fn density_with_co2(&self, reading: &EnvironmentalReading, co2_fraction: f64) -> f64;

    /// CO₂ mole fraction assumed when none is measured.
    fn default_co2_fraction(&self) -> f64 {
        REFERENCE_CO2_FRACTION
    }

    /// Density [kg/m³] at `reading` with the default CO₂ mole fraction.
    fn density(&self, reading: &EnvironmentalReading) -> f64 {
        self.density_with_co2(reading, self.default_co2_fraction())
    }

    /// Reference air density [kg/m³].
    fn standard_density(&self) -> f64 {
        STANDARD_AIR_DENSITY
    }

    /// Closed-form estimate independent of any constants table.
    fn approximate_density(&self, reading: &EnvironmentalReading) -> f64 {
        approximate_density(reading)
    }

    /// Barometric estimate from the site height [m] alone.
    fn simple_density(&self, height_m: f64) -> f64 {
        simple_density(height_m)
    }

    /// K factor at the reference air density.
    fn k_factor(&self) -> f64 {
        k_factor(self.standard_density())
    }

    /// K factor at the density of `reading`.
    fn k_factor_at(&self, reading: &EnvironmentalReading) -> f64 {
        k_factor(self.density(reading))
    }
}
