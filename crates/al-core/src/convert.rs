//! Scalar unit conversions.
//!
//! Plain `f64 -> f64` helpers for the quantities that show up around a mass
//! laboratory: temperatures, barometric pressure, specific gravity and
//! mixture fractions. The density engine itself depends on
//! [`celsius_to_kelvin`] only.

use crate::error::{AlError, AlResult};
use crate::units::constants::{KELVIN_ZERO, MMHG_IN_PASCAL, WATER_DENSITY_4C};

#[inline]
pub fn celsius_to_kelvin(t_c: f64) -> f64 {
    t_c + KELVIN_ZERO
}

#[inline]
pub fn kelvin_to_celsius(t_k: f64) -> f64 {
    t_k - KELVIN_ZERO
}

#[inline]
pub fn celsius_to_fahrenheit(t_c: f64) -> f64 {
    t_c * 9.0 / 5.0 + 32.0
}

#[inline]
pub fn fahrenheit_to_celsius(t_f: f64) -> f64 {
    (t_f - 32.0) * 5.0 / 9.0
}

/// Convert an IPTS-68 water temperature to ITS-90, both in °C.
///
/// Two linear fits are used: one for 0..=40 °C and one up to 100 °C. Anything
/// hotter than 100 °C is rejected.
pub fn ipts68_to_its90(t68_c: f64) -> AlResult<f64> {
    if t68_c <= 40.0 {
        Ok(0.0002 + 0.99975 * t68_c)
    } else if t68_c <= 100.0 {
        Ok(0.0005 + 0.999_733_3 * t68_c)
    } else {
        Err(AlError::InvalidArg {
            what: format!("water temperature {t68_c} °C is out of range 0..100 °C"),
        })
    }
}

#[inline]
pub fn degrees_to_radians(angle_deg: f64) -> f64 {
    angle_deg.to_radians()
}

#[inline]
pub fn pascal_to_mmhg(p_pa: f64) -> f64 {
    p_pa / MMHG_IN_PASCAL
}

#[inline]
pub fn mmhg_to_pascal(p_mmhg: f64) -> f64 {
    p_mmhg * MMHG_IN_PASCAL
}

/// API gravity from specific gravity.
#[inline]
pub fn sg_to_api(sg: f64) -> f64 {
    141.5 / sg - 131.5
}

#[inline]
pub fn api_to_sg(api: f64) -> f64 {
    141.5 / (api + 131.5)
}

/// Specific gravity against an arbitrary reference density [kg/m³].
#[inline]
pub fn density_to_sg_with_base(density: f64, base_density: f64) -> f64 {
    density / base_density
}

/// Specific gravity against water at 4 °C.
#[inline]
pub fn density_to_sg(density: f64) -> f64 {
    density_to_sg_with_base(density, WATER_DENSITY_4C)
}

#[inline]
pub fn sg_to_density_with_base(sg: f64, base_density: f64) -> f64 {
    sg * base_density
}

#[inline]
pub fn sg_to_density(sg: f64) -> f64 {
    sg_to_density_with_base(sg, WATER_DENSITY_4C)
}

#[inline]
pub fn density_to_api(density: f64) -> f64 {
    sg_to_api(density_to_sg(density))
}

#[inline]
pub fn api_to_density(api: f64) -> f64 {
    sg_to_density(api_to_sg(api))
}

/// Amount of substance [mol] from mass [g] and molar mass [g/mol].
#[inline]
pub fn substance_amount(mass: f64, molar_mass: f64) -> f64 {
    mass / molar_mass
}

/// Mass [g] from amount of substance [mol] and molar mass [g/mol].
#[inline]
pub fn substance_mass(amount: f64, molar_mass: f64) -> f64 {
    amount * molar_mass
}

/// Mole fraction of component `index` given the amounts of every component.
pub fn mole_fraction(index: usize, amounts: &[f64]) -> AlResult<f64> {
    fraction_of(index, amounts)
}

/// Mole fraction of component `index` given masses and molar masses.
pub fn mole_fraction_from_masses(index: usize, masses: &[f64], molar_masses: &[f64]) -> AlResult<f64> {
    ensure_same_len(masses.len(), molar_masses.len(), "masses vs molar masses")?;
    let amounts: Vec<f64> = masses
        .iter()
        .zip(molar_masses)
        .map(|(&mass, &molar)| substance_amount(mass, molar))
        .collect();
    fraction_of(index, &amounts)
}

/// Mass fraction of component `index` given the masses of every component.
pub fn mass_fraction(index: usize, masses: &[f64]) -> AlResult<f64> {
    fraction_of(index, masses)
}

/// Mass fraction of component `index` given amounts and molar masses.
pub fn mass_fraction_from_amounts(
    index: usize,
    amounts: &[f64],
    molar_masses: &[f64],
) -> AlResult<f64> {
    ensure_same_len(amounts.len(), molar_masses.len(), "amounts vs molar masses")?;
    let masses: Vec<f64> = amounts
        .iter()
        .zip(molar_masses)
        .map(|(&amount, &molar)| substance_mass(amount, molar))
        .collect();
    fraction_of(index, &masses)
}

/// Volume fraction of component `index` given the volumes of every component.
pub fn volume_fraction(index: usize, volumes: &[f64]) -> AlResult<f64> {
    fraction_of(index, volumes)
}

fn ensure_same_len(a: usize, b: usize, what: &str) -> AlResult<()> {
    if a != b {
        return Err(AlError::InvalidArg {
            what: format!("length mismatch for {what}: {a} != {b}"),
        });
    }
    Ok(())
}

fn fraction_of(index: usize, parts: &[f64]) -> AlResult<f64> {
    let part = parts.get(index).ok_or_else(|| AlError::InvalidArg {
        what: format!(
            "component index {index} is out of range for {} components",
            parts.len()
        ),
    })?;
    let total: f64 = parts.iter().sum();
    Ok(part / total)
}


#[cfg(test)]
mod proptests {
    use super::*;
    use crate::{Tolerances, nearly_equal};
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn temperature_round_trips(t_c in -100.0_f64..200.0) {
            let tol = Tolerances { abs: 1e-9, rel: 1e-12 };
            prop_assert!(nearly_equal(kelvin_to_celsius(celsius_to_kelvin(t_c)), t_c, tol));
            prop_assert!(nearly_equal(fahrenheit_to_celsius(celsius_to_fahrenheit(t_c)), t_c, tol));
        }

        #[test]
        fn fractions_sum_to_one(parts in prop::collection::vec(0.1_f64..100.0, 1..6)) {
            let sum: f64 = (0..parts.len())
                .map(|i| mole_fraction(i, &parts).unwrap())
                .sum();
            let tol = Tolerances { abs: 1e-9, rel: 1e-9 };
            prop_assert!(nearly_equal(sum, 1.0, tol));
        }
    }
}
