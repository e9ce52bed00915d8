//! Unit-tagged numeric input.
//!
//! Turns text such as `"20C"`, `"760 mmHg"` or `"50%"` into the plain number
//! the density engine consumes. Canonical units are the ones the engine works
//! in, not strict SI: temperatures come back in °C, relative humidity as a
//! fraction in `[0, 1]`, pressure in Pa, height in m, density in kg/m³.

use std::fmt;

use crate::convert::{celsius_to_kelvin, fahrenheit_to_celsius, kelvin_to_celsius, mmhg_to_pascal};

/// Dimension/quantity family for a numeric input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Quantity {
    /// Air temperature (canonical: °C)
    Temperature,
    /// Absolute pressure (canonical: Pa)
    Pressure,
    /// Relative humidity (canonical: fraction 0-1)
    RelativeHumidity,
    /// Mole fraction, e.g. CO₂ content (canonical: mol/mol)
    MoleFraction,
    /// Height above sea level (canonical: m)
    Length,
    /// Density (canonical: kg/m³)
    Density,
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Temperature => write!(f, "Temperature"),
            Self::Pressure => write!(f, "Absolute Pressure"),
            Self::RelativeHumidity => write!(f, "Relative Humidity"),
            Self::MoleFraction => write!(f, "Mole Fraction"),
            Self::Length => write!(f, "Length"),
            Self::Density => write!(f, "Density"),
        }
    }
}

/// Error in unit parsing or conversion.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum UnitError {
    /// Input text did not parse to a number + optional unit
    #[error("Parse error: {0}")]
    ParseError(String),
    /// Unit not recognized for this quantity
    #[error("Unknown unit '{unit}' for {quantity}")]
    UnknownUnit { unit: String, quantity: Quantity },
    /// Value out of physical range (e.g. negative absolute temperature)
    #[error("Value {value} out of range: {reason}")]
    OutOfRange { value: f64, reason: String },
}

/// Parse a quantity value from user input text.
///
/// A bare number is taken to be in the canonical unit of `quantity`.
pub fn parse_quantity(raw_text: &str, quantity: Quantity) -> Result<f64, UnitError> {
    let trimmed = raw_text.trim();

    match quantity {
        Quantity::Temperature => parse_temperature(trimmed),
        Quantity::Pressure => parse_pressure(trimmed),
        Quantity::RelativeHumidity => parse_relative_humidity(trimmed),
        Quantity::MoleFraction => parse_mole_fraction(trimmed),
        Quantity::Length => parse_length(trimmed),
        Quantity::Density => parse_density(trimmed),
    }
}

/// Parse temperature in various units, return °C.
fn parse_temperature(input: &str) -> Result<f64, UnitError> {
    let (value, unit) = split_value_and_unit(input)?;

    let celsius = match unit.to_lowercase().as_str() {
        "" | "c" | "°c" | "degc" | "celsius" => value,
        "k" | "kelvin" => kelvin_to_celsius(value),
        "f" | "°f" | "degf" | "fahrenheit" => fahrenheit_to_celsius(value),
        _ => {
            return Err(UnitError::UnknownUnit {
                unit,
                quantity: Quantity::Temperature,
            });
        }
    };

    if celsius_to_kelvin(celsius) <= 0.0 {
        return Err(UnitError::OutOfRange {
            value: celsius,
            reason: "Absolute temperature must be > 0 K".to_string(),
        });
    }

    Ok(celsius)
}

/// Parse absolute pressure in various units, return Pa.
fn parse_pressure(input: &str) -> Result<f64, UnitError> {
    let (value, unit) = split_value_and_unit(input)?;

    let pa = match unit.to_lowercase().as_str() {
        "" | "pa" | "pascal" => value,
        "hpa" | "mbar" | "millibar" => value * 100.0,
        "kpa" => value * 1e3,
        "bar" => value * 1e5,
        "atm" => value * 101_325.0,
        "mmhg" | "torr" => mmhg_to_pascal(value),
        _ => {
            return Err(UnitError::UnknownUnit {
                unit,
                quantity: Quantity::Pressure,
            });
        }
    };

    if pa <= 0.0 {
        return Err(UnitError::OutOfRange {
            value: pa,
            reason: "Absolute pressure must be positive".to_string(),
        });
    }

    Ok(pa)
}

/// Parse relative humidity as a fraction or percentage.
fn parse_relative_humidity(input: &str) -> Result<f64, UnitError> {
    let (value, unit) = split_value_and_unit(input)?;

    let fraction = match unit.to_lowercase().as_str() {
        "" => value,
        "%" | "%rh" => value / 100.0,
        _ => {
            return Err(UnitError::UnknownUnit {
                unit,
                quantity: Quantity::RelativeHumidity,
            });
        }
    };

    if !(0.0..=1.0).contains(&fraction) {
        return Err(UnitError::OutOfRange {
            value: fraction,
            reason: "Relative humidity must be between 0 and 1 (0% and 100%)".to_string(),
        });
    }

    Ok(fraction)
}

/// Parse a mole fraction, accepting `%` and `ppm`.
fn parse_mole_fraction(input: &str) -> Result<f64, UnitError> {
    let (value, unit) = split_value_and_unit(input)?;

    let fraction = match unit.to_lowercase().as_str() {
        "" | "mol/mol" => value,
        "%" => value / 100.0,
        "ppm" => value * 1e-6,
        _ => {
            return Err(UnitError::UnknownUnit {
                unit,
                quantity: Quantity::MoleFraction,
            });
        }
    };

    if !(0.0..=1.0).contains(&fraction) {
        return Err(UnitError::OutOfRange {
            value: fraction,
            reason: "Mole fraction must be between 0 and 1".to_string(),
        });
    }

    Ok(fraction)
}

/// Parse a length (site height), return m. Negative heights are allowed.
fn parse_length(input: &str) -> Result<f64, UnitError> {
    let (value, unit) = split_value_and_unit(input)?;

    match unit.to_lowercase().as_str() {
        "" | "m" => Ok(value),
        "km" => Ok(value * 1e3),
        "ft" => Ok(value * 0.3048),
        _ => Err(UnitError::UnknownUnit {
            unit,
            quantity: Quantity::Length,
        }),
    }
}

/// Parse density in various units, return kg/m³.
fn parse_density(input: &str) -> Result<f64, UnitError> {
    let (value, unit) = split_value_and_unit(input)?;

    let kg_m3 = match unit.to_lowercase().as_str() {
        "" | "kg/m^3" | "kg/m³" | "kg/m3" => value,
        "g/cm^3" | "g/cm³" | "g/cm3" | "g/ml" => value * 1e3,
        "g/l" => value,
        _ => {
            return Err(UnitError::UnknownUnit {
                unit,
                quantity: Quantity::Density,
            });
        }
    };

    if kg_m3 <= 0.0 {
        return Err(UnitError::OutOfRange {
            value: kg_m3,
            reason: "Density must be positive".to_string(),
        });
    }

    Ok(kg_m3)
}

/// Split a value+unit string into (numeric_value, unit_string).
///
/// Examples:
/// - "20C" -> (20.0, "C")
/// - "760 mmHg" -> (760.0, "mmHg")
/// - "0.5" -> (0.5, "")
fn split_value_and_unit(input: &str) -> Result<(f64, String), UnitError> {
    let trimmed = input.trim();

    // Exponent markers only count when followed by a digit or sign, so "1e5"
    // stays numeric while the "e" of a unit name does not.
    let bytes = trimmed.as_bytes();
    let split_idx = trimmed
        .char_indices()
        .find(|&(i, c)| {
            if c.is_ascii_digit() || c == '.' || c == '-' || c == '+' {
                return false;
            }
            if (c == 'e' || c == 'E') && i > 0 {
                let next = bytes.get(i + 1).copied();
                return !matches!(next, Some(b'0'..=b'9' | b'-' | b'+'));
            }
            true
        })
        .map(|(i, _)| i)
        .unwrap_or(trimmed.len());

    let (num_part, unit_part) = trimmed.split_at(split_idx);
    let num_part = num_part.trim();
    let unit_part = unit_part.trim();

    let value: f64 = num_part.parse().map_err(|_| {
        UnitError::ParseError(format!("Could not parse numeric value from '{}'", input))
    })?;

    if !value.is_finite() {
        return Err(UnitError::ParseError(format!(
            "Non-finite value in '{}'",
            input
        )));
    }

    Ok((value, unit_part.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_celsius_default() {
        assert_eq!(parse_temperature("20").unwrap(), 20.0);
        assert_eq!(parse_temperature("20C").unwrap(), 20.0);
        assert_eq!(parse_temperature("20 °C").unwrap(), 20.0);
    }

    #[test]
    fn parse_kelvin_and_fahrenheit() {
        let t = parse_temperature("293.15 K").unwrap();
        assert!((t - 20.0).abs() < 1e-9);
        let t = parse_temperature("68F").unwrap();
        assert!((t - 20.0).abs() < 1e-9);
    }

    #[test]
    fn reject_below_absolute_zero() {
        assert!(matches!(
            parse_temperature("-300C"),
            Err(UnitError::OutOfRange { .. })
        ));
    }

    #[test]
    fn parse_pressure_units() {
        assert_eq!(parse_pressure("101325 Pa").unwrap(), 101_325.0);
        assert_eq!(parse_pressure("1013.25 hPa").unwrap(), 101_325.0);
        assert_eq!(parse_pressure("1 atm").unwrap(), 101_325.0);
        let p = parse_pressure("760 mmHg").unwrap();
        assert!((p - 101_325.0).abs() < 0.01);
        assert_eq!(parse_pressure("1e5").unwrap(), 1e5);
    }

    #[test]
    fn reject_unknown_pressure_unit() {
        assert!(matches!(
            parse_pressure("14.7 psi"),
            Err(UnitError::UnknownUnit { unit, .. }) if unit == "psi"
        ));
    }

    #[test]
    fn reject_zero_pressure() {
        assert!(parse_pressure("0 Pa").is_err());
    }

    #[test]
    fn parse_humidity_percent() {
        assert_eq!(parse_relative_humidity("0.53").unwrap(), 0.53);
        assert_eq!(parse_relative_humidity("50%").unwrap(), 0.5);
        assert!(parse_relative_humidity("120%").is_err());
    }

    #[test]
    fn parse_co2_ppm() {
        let x = parse_mole_fraction("400 ppm").unwrap();
        assert!((x - 0.0004).abs() < 1e-15);
        assert_eq!(parse_mole_fraction("0.0004").unwrap(), 0.0004);
    }

    #[test]
    fn parse_heights() {
        assert_eq!(parse_length("150 m").unwrap(), 150.0);
        assert_eq!(parse_length("1.5 km").unwrap(), 1500.0);
        assert_eq!(parse_length("-20").unwrap(), -20.0);
    }

    #[test]
    fn parse_density_units() {
        assert_eq!(parse_density("1.2 kg/m3").unwrap(), 1.2);
        assert!((parse_density("0.998 g/cm3").unwrap() - 998.0).abs() < 1e-9);
    }

    #[test]
    fn garbage_is_parse_error() {
        assert!(matches!(
            parse_quantity("warm", Quantity::Temperature),
            Err(UnitError::ParseError(_))
        ));
    }
}
