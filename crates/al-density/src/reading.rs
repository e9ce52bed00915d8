//! Laboratory air readings.

use std::fmt;

use al_core::convert::celsius_to_kelvin;
use al_core::units::{Pressure, Ratio, Temperature, to_degc};
use serde::{Deserialize, Serialize};

use crate::error::{DensityError, DensityResult};

/// One set of laboratory air readings.
///
/// Plain values in the units the equations use. Readings are replaced, never
/// edited in place: a new measurement means a new `EnvironmentalReading`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EnvironmentalReading {
    /// Air temperature [°C]
    pub temperature_c: f64,
    /// Relative humidity as a fraction (a reading of 53% is 0.53)
    pub relative_humidity: f64,
    /// Barometric pressure [Pa]
    pub pressure_pa: f64,
}

impl EnvironmentalReading {
    pub const STANDARD_TEMPERATURE_C: f64 = 20.0;
    pub const STANDARD_RELATIVE_HUMIDITY: f64 = 0.50;
    pub const STANDARD_PRESSURE_PA: f64 = 101_325.0;

    pub const fn new(temperature_c: f64, relative_humidity: f64, pressure_pa: f64) -> Self {
        Self {
            temperature_c,
            relative_humidity,
            pressure_pa,
        }
    }

    /// Standard laboratory air: 20 °C, 50 % RH, 101325 Pa (760 mmHg).
    pub const fn standard() -> Self {
        Self::new(
            Self::STANDARD_TEMPERATURE_C,
            Self::STANDARD_RELATIVE_HUMIDITY,
            Self::STANDARD_PRESSURE_PA,
        )
    }

    /// Build a reading from typed quantities.
    pub fn from_quantities(t: Temperature, rh: Ratio, p: Pressure) -> Self {
        Self::new(to_degc(t), rh.value, p.value)
    }

    /// Absolute temperature [K].
    pub fn temperature_k(&self) -> f64 {
        celsius_to_kelvin(self.temperature_c)
    }

    /// Check that the reading is physically plausible.
    ///
    /// The equations do not call this; outer layers do before trusting a
    /// reading that came from a user or a file.
    pub fn validate(&self) -> DensityResult<()> {
        if !self.temperature_c.is_finite() || self.temperature_k() <= 0.0 {
            return Err(DensityError::NonPhysical {
                what: "absolute temperature must be positive and finite",
            });
        }
        if !self.relative_humidity.is_finite() || !(0.0..=1.0).contains(&self.relative_humidity)
        {
            return Err(DensityError::NonPhysical {
                what: "relative humidity must be within [0, 1]",
            });
        }
        if !self.pressure_pa.is_finite() || self.pressure_pa <= 0.0 {
            return Err(DensityError::NonPhysical {
                what: "pressure must be positive and finite",
            });
        }
        Ok(())
    }
}

impl Default for EnvironmentalReading {
    fn default() -> Self {
        Self::standard()
    }
}

impl fmt::Display for EnvironmentalReading {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "T={:.2} °C, RH={:.1} %, p={:.0} Pa",
            self.temperature_c,
            self.relative_humidity * 100.0,
            self.pressure_pa
        )
    }
}
