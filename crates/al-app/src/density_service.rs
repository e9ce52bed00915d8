//! Density reports for one reading.

use al_core::{Quantity, ensure_finite, parse_quantity};
use al_density::{
    CipmBreakdown, CipmModel, DensityModel, EnvironmentalReading, MeasurementContext, ModelKind,
    build_model, check_co2_fraction, simple_density,
};
use al_lab::LabConfig;
use serde::Serialize;

use crate::error::AppResult;

/// What to compute.
#[derive(Debug, Clone, PartialEq)]
pub struct DensityRequest {
    pub model: ModelKind,
    pub reading: EnvironmentalReading,
    /// Measured CO₂ mole fraction; the model default when absent.
    pub co2_fraction: Option<f64>,
    pub height_m: Option<f64>,
    pub breakdown: bool,
}

impl Default for DensityRequest {
    fn default() -> Self {
        Self {
            model: ModelKind::default(),
            reading: EnvironmentalReading::standard(),
            co2_fraction: None,
            height_m: None,
            breakdown: false,
        }
    }
}

impl DensityRequest {
    /// Request matching a lab file's model and latest reading.
    pub fn from_lab(lab: &LabConfig) -> Self {
        Self {
            model: lab.model,
            reading: lab.reading.unwrap_or_default(),
            co2_fraction: lab.co2_fraction,
            height_m: lab.height_m,
            breakdown: false,
        }
    }
}

/// Density of one reading with everything an operator needs to record.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DensityReport {
    pub equation: String,
    pub reading: EnvironmentalReading,
    pub co2_fraction: f64,
    /// ρ [kg/m³]
    pub density: f64,
    /// Closed-form estimate [kg/m³] for cross-checking.
    pub approximate_density: f64,
    pub k_factor: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub breakdown: Option<CipmBreakdown>,
}

/// Parse a reading from unit-tagged text (e.g. `"20.5C"`, `"48%"`, `"1008 hPa"`).
pub fn parse_reading(temperature: &str, humidity: &str, pressure: &str) -> AppResult<EnvironmentalReading> {
    Ok(EnvironmentalReading::new(
        parse_quantity(temperature, Quantity::Temperature)?,
        parse_quantity(humidity, Quantity::RelativeHumidity)?,
        parse_quantity(pressure, Quantity::Pressure)?,
    ))
}

pub fn density_report(request: &DensityRequest) -> AppResult<DensityReport> {
    request.reading.validate()?;
    if let Some(co2) = request.co2_fraction {
        check_co2_fraction(co2)?;
    }

    let model = build_model(request.model, request.height_m);
    let co2_fraction = request
        .co2_fraction
        .unwrap_or_else(|| model.default_co2_fraction());
    let ctx = MeasurementContext::new(model).with_reading(request.reading);

    let density = ctx.density_with_co2(co2_fraction)?;
    let breakdown = match request.model {
        ModelKind::Cipm2007 if request.breakdown => {
            Some(CipmModel::cipm_2007().evaluate(&request.reading, co2_fraction))
        }
        _ => None,
    };

    let report = DensityReport {
        equation: ctx.equation_name().to_string(),
        reading: request.reading,
        co2_fraction,
        density,
        approximate_density: ctx.approximate_density()?,
        k_factor: al_density::k_factor(density),
        breakdown,
    };
    tracing::info!(
        equation = %report.equation,
        reading = %report.reading,
        density = report.density,
        "computed air density"
    );
    Ok(report)
}

/// Barometric density estimate for a site height [m].
pub fn altitude_density(height_m: f64) -> AppResult<f64> {
    let height_m = ensure_finite(height_m, "site height")?;
    Ok(simple_density(height_m))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AppError;

    #[test]
    fn default_request_reports_standard_air() {
        let report = density_report(&DensityRequest::default()).unwrap();
        assert_eq!(report.equation, "CIPM-2007");
        assert_eq!(report.co2_fraction, 0.0004);
        assert!((report.density - 1.199_313_874).abs() < 1e-8);
        assert_eq!(report.k_factor, 1.0 - report.density / 8000.0);
        assert!(report.breakdown.is_none());
    }

    #[test]
    fn breakdown_matches_density() {
        let request = DensityRequest {
            breakdown: true,
            co2_fraction: Some(0.0005),
            ..DensityRequest::default()
        };
        let report = density_report(&request).unwrap();
        let breakdown = report.breakdown.unwrap();
        assert_eq!(breakdown.density, report.density);
        assert!((report.density - 1.199_807_59).abs() < 1e-8);
    }

    #[test]
    fn breakdown_only_for_cipm() {
        let request = DensityRequest {
            model: ModelKind::Approximate,
            breakdown: true,
            ..DensityRequest::default()
        };
        let report = density_report(&request).unwrap();
        assert!(report.breakdown.is_none());
        assert_eq!(report.density, report.approximate_density);
    }

    #[test]
    fn rejects_bad_inputs() {
        let request = DensityRequest {
            reading: EnvironmentalReading::new(20.0, 0.5, -1.0),
            ..DensityRequest::default()
        };
        assert!(matches!(density_report(&request), Err(AppError::Density(_))));

        let request = DensityRequest {
            co2_fraction: Some(2.0),
            ..DensityRequest::default()
        };
        assert!(matches!(density_report(&request), Err(AppError::Density(_))));
    }

    #[test]
    fn parses_unit_tagged_reading() {
        let r = parse_reading("68F", "50%", "760 mmHg").unwrap();
        assert!((r.temperature_c - 20.0).abs() < 1e-9);
        assert_eq!(r.relative_humidity, 0.5);
        assert!((r.pressure_pa - 101_325.0).abs() < 1e-3);

        assert!(matches!(
            parse_reading("20 furlongs", "0.5", "101325"),
            Err(AppError::InvalidInput(_))
        ));
    }

    #[test]
    fn altitude() {
        assert_eq!(altitude_density(1000.0).unwrap(), 1.068);
        assert!(altitude_density(f64::INFINITY).is_err());
    }
}
