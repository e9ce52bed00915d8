// al-core/src/units.rs

use uom::si::f64::{
    Length as UomLength, MassDensity as UomMassDensity, Pressure as UomPressure,
    Ratio as UomRatio, ThermodynamicTemperature as UomThermodynamicTemperature,
};

// Public canonical unit types (SI, f64)
pub type Density = UomMassDensity;
pub type Length = UomLength;
pub type Pressure = UomPressure;
pub type Ratio = UomRatio;
pub type Temperature = UomThermodynamicTemperature;

#[inline]
pub fn pa(v: f64) -> Pressure {
    use uom::si::pressure::pascal;
    Pressure::new::<pascal>(v)
}

#[inline]
pub fn k(v: f64) -> Temperature {
    use uom::si::thermodynamic_temperature::kelvin;
    Temperature::new::<kelvin>(v)
}

#[inline]
pub fn degc(v: f64) -> Temperature {
    use uom::si::thermodynamic_temperature::degree_celsius;
    Temperature::new::<degree_celsius>(v)
}

#[inline]
pub fn m(v: f64) -> Length {
    use uom::si::length::meter;
    Length::new::<meter>(v)
}

#[inline]
pub fn kg_per_m3(v: f64) -> Density {
    use uom::si::mass_density::kilogram_per_cubic_meter;
    Density::new::<kilogram_per_cubic_meter>(v)
}

#[inline]
pub fn unitless(v: f64) -> Ratio {
    use uom::si::ratio::ratio;
    Ratio::new::<ratio>(v)
}

/// Read a temperature back as degrees Celsius.
#[inline]
pub fn to_degc(t: Temperature) -> f64 {
    use uom::si::thermodynamic_temperature::degree_celsius;
    t.get::<degree_celsius>()
}

pub mod constants {
    use super::*;

    /// 0 °C on the Kelvin scale.
    pub const KELVIN_ZERO: f64 = 273.15;

    pub const MMHG_IN_PASCAL: f64 = 133.322_368_4;

    pub const AVERAGE_GRAVITY_MPS2: f64 = 9.806_65;

    /// Water at its densest (4 °C), the usual specific gravity reference [kg/m³].
    pub const WATER_DENSITY_4C: f64 = 1000.0;

    /// Volumetric thermal expansion coefficient of hydrometer glass [1/K].
    pub const HYDROMETER_GLASS_VTEC: f64 = 25e-6;

    #[inline]
    pub fn water_density_4c() -> Density {
        kg_per_m3(WATER_DENSITY_4C)
    }
}
