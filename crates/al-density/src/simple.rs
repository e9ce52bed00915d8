//! Altitude-only barometric estimate.

use al_core::round_to;

use crate::model::DensityModel;
use crate::reading::EnvironmentalReading;

const SEA_LEVEL_DENSITY: f64 = 1.2;
const SEA_LEVEL_PRESSURE: f64 = 101_325.0;
const GRAVITY: f64 = 9.81;

/// Air density [kg/m³] at `height_m` above sea level, rounded to 3 decimals:
///
/// ```text
/// ρ(h) = 1.2 · exp(−1.2 / 101325 · 9.81 · h)
/// ```
pub fn simple_density(height_m: f64) -> f64 {
    let exponent = (-SEA_LEVEL_DENSITY / SEA_LEVEL_PRESSURE) * GRAVITY * height_m;
    round_to(SEA_LEVEL_DENSITY * exponent.exp(), 3)
}

/// Model for sites where only the height is known.
///
/// Readings and CO₂ are ignored; the density is the barometric estimate at
/// the configured height (sea level by default).
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SimpleModel {
    height_m: f64,
}

impl SimpleModel {
    pub fn at_height(height_m: f64) -> Self {
        Self { height_m }
    }

    pub fn height_m(&self) -> f64 {
        self.height_m
    }
}

impl DensityModel for SimpleModel {
    fn equation_name(&self) -> &str {
        "Barometric"
    }

    fn density_with_co2(&self, _reading: &EnvironmentalReading, _co2_fraction: f64) -> f64 {
        simple_density(self.height_m)
    }
}
