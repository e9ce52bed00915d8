//! Closed-form approximation of moist air density.

use crate::model::DensityModel;
use crate::reading::EnvironmentalReading;

/// Approximate moist air density [kg/m³]:
///
/// ```text
/// ρ ≈ [0.34848·(p/100) − 0.009024·(100·h)·e^(0.0612·t)] / T
/// ```
///
/// with `p` in Pa, `h` as a fraction, `t` in °C and `T` in K.
pub fn approximate_density(reading: &EnvironmentalReading) -> f64 {
    let dry = 0.34848 * reading.pressure_pa / 100.0;
    let vapour =
        0.009024 * (reading.relative_humidity * 100.0) * (0.0612 * reading.temperature_c).exp();
    (dry - vapour) / reading.temperature_k()
}

/// Model that uses the approximation as its density. CO₂ is ignored.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ApproximateModel;

impl DensityModel for ApproximateModel {
    fn equation_name(&self) -> &str {
        "Approximate"
    }

    fn density_with_co2(&self, reading: &EnvironmentalReading, _co2_fraction: f64) -> f64 {
        approximate_density(reading)
    }
}
