//! Current laboratory air: the latest reading plus the installed model.

use std::sync::Arc;

use al_core::units::{Density, kg_per_m3};

use crate::cipm::CipmModel;
use crate::error::{DensityError, DensityResult};
use crate::model::DensityModel;
use crate::reading::EnvironmentalReading;

/// Holds the latest reading and a shared density model.
///
/// Updating either replaces the whole value; the model itself is immutable and
/// may be shared with other contexts. A context starts without a reading and
/// every reading-based query fails with [`DensityError::MissingReading`] until
/// one is supplied.
#[derive(Debug, Clone)]
pub struct MeasurementContext {
    reading: Option<EnvironmentalReading>,
    model: Arc<dyn DensityModel>,
}

impl MeasurementContext {
    pub fn new(model: Arc<dyn DensityModel>) -> Self {
        Self {
            reading: None,
            model,
        }
    }

    pub fn with_reading(mut self, reading: EnvironmentalReading) -> Self {
        self.reading = Some(reading);
        self
    }

    pub fn with_model(mut self, model: Arc<dyn DensityModel>) -> Self {
        self.model = model;
        self
    }

    /// Replace the current reading.
    pub fn set_reading(&mut self, reading: EnvironmentalReading) {
        self.reading = Some(reading);
    }

    /// Install another model, returning the one it replaces.
    pub fn set_model(&mut self, model: Arc<dyn DensityModel>) -> Arc<dyn DensityModel> {
        std::mem::replace(&mut self.model, model)
    }

    pub fn reading(&self) -> Option<&EnvironmentalReading> {
        self.reading.as_ref()
    }

    pub fn model(&self) -> &Arc<dyn DensityModel> {
        &self.model
    }

    pub fn equation_name(&self) -> &str {
        self.model.equation_name()
    }

    fn current(&self) -> DensityResult<&EnvironmentalReading> {
        self.reading.as_ref().ok_or(DensityError::MissingReading)
    }

    /// Density [kg/m³] of the current air.
    pub fn density(&self) -> DensityResult<f64> {
        Ok(self.model.density(self.current()?))
    }

    /// Density [kg/m³] of the current air with a measured CO₂ mole fraction.
    pub fn density_with_co2(&self, co2_fraction: f64) -> DensityResult<f64> {
        Ok(self.model.density_with_co2(self.current()?, co2_fraction))
    }

    /// Density of the current air as a typed quantity.
    pub fn density_quantity(&self) -> DensityResult<Density> {
        self.density().map(kg_per_m3)
    }

    pub fn approximate_density(&self) -> DensityResult<f64> {
        Ok(self.model.approximate_density(self.current()?))
    }

    /// K factor of the current air.
    pub fn k_factor(&self) -> DensityResult<f64> {
        Ok(self.model.k_factor_at(self.current()?))
    }

    /// K factor at the model's reference density; needs no reading.
    pub fn standard_k_factor(&self) -> f64 {
        self.model.k_factor()
    }
}

impl Default for MeasurementContext {
    fn default() -> Self {
        Self::new(Arc::new(CipmModel::cipm_2007()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::approximate::ApproximateModel;
    use crate::simple::SimpleModel;

    #[test]
    fn empty_context_needs_a_reading() {
        let ctx = MeasurementContext::default();
        assert!(ctx.reading().is_none());
        assert_eq!(ctx.density(), Err(DensityError::MissingReading));
        assert_eq!(ctx.k_factor(), Err(DensityError::MissingReading));
        assert_eq!(ctx.standard_k_factor(), 1.0 - 1.205 / 8000.0);
    }

    #[test]
    fn queries_follow_reading() {
        let mut ctx = MeasurementContext::default().with_reading(EnvironmentalReading::standard());
        let at_standard = ctx.density().unwrap();
        assert!((at_standard - 1.2).abs() < 0.01);

        ctx.set_reading(EnvironmentalReading::new(20.0, 0.5, 90_000.0));
        assert!(ctx.density().unwrap() < at_standard);
    }

    #[test]
    fn k_factor_matches_density() {
        let ctx = MeasurementContext::default().with_reading(EnvironmentalReading::standard());
        let rho = ctx.density().unwrap();
        assert_eq!(ctx.k_factor().unwrap(), 1.0 - rho / 8000.0);
    }

    #[test]
    fn swapping_models() {
        let mut ctx = MeasurementContext::default().with_reading(EnvironmentalReading::standard());
        assert_eq!(ctx.equation_name(), "CIPM-2007");

        let previous = ctx.set_model(Arc::new(ApproximateModel));
        assert_eq!(previous.equation_name(), "CIPM-2007");
        assert_eq!(ctx.equation_name(), "Approximate");

        let ctx = ctx.with_model(Arc::new(SimpleModel::default()));
        assert_eq!(ctx.density().unwrap(), 1.2);
    }

    #[test]
    fn shared_model() {
        let model: Arc<dyn DensityModel> = Arc::new(CipmModel::cipm_2007());
        let a = MeasurementContext::new(model.clone()).with_reading(EnvironmentalReading::standard());
        let b = MeasurementContext::new(model.clone())
            .with_reading(EnvironmentalReading::new(22.0, 0.4, 100_000.0));
        assert_eq!(Arc::strong_count(&model), 3);
        assert_ne!(a.density().unwrap(), b.density().unwrap());
    }

    #[test]
    fn density_quantity_in_si() {
        let ctx = MeasurementContext::default().with_reading(EnvironmentalReading::standard());
        let rho = ctx.density_quantity().unwrap();
        assert_eq!(rho.value, ctx.density().unwrap());
    }

    #[test]
    fn co2_and_approximate_queries() {
        let ctx = MeasurementContext::default().with_reading(EnvironmentalReading::standard());
        assert!(ctx.density_with_co2(0.0005).unwrap() > ctx.density().unwrap());
        let approx = ctx.approximate_density().unwrap();
        assert!((approx - ctx.density().unwrap()).abs() < 1e-3);
    }
}
