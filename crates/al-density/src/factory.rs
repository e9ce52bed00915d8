//! Model selection and pre-populated contexts.

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::approximate::ApproximateModel;
use crate::cipm::CipmModel;
use crate::context::MeasurementContext;
use crate::error::{DensityError, DensityResult};
use crate::model::DensityModel;
use crate::reading::EnvironmentalReading;
use crate::simple::SimpleModel;

/// Density equations that can be selected by name.
///
/// Deserialization goes through [`FromStr`], so config files accept the same
/// names as the command line and reject unknown ones with
/// [`DensityError::UnknownModel`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String")]
pub enum ModelKind {
    #[default]
    #[serde(rename = "cipm-2007")]
    Cipm2007,
    #[serde(rename = "approximate")]
    Approximate,
    #[serde(rename = "simple")]
    Simple,
}

impl ModelKind {
    pub const ALL: [ModelKind; 3] = [Self::Cipm2007, Self::Approximate, Self::Simple];

    /// Stable name used in config files and on the command line.
    pub fn name(self) -> &'static str {
        match self {
            Self::Cipm2007 => "cipm-2007",
            Self::Approximate => "approximate",
            Self::Simple => "simple",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Self::Cipm2007 => "CIPM-2007 equation for the density of moist air",
            Self::Approximate => "closed-form approximation from t, h and p",
            Self::Simple => "barometric estimate from site height only",
        }
    }
}

impl fmt::Display for ModelKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ModelKind {
    type Err = DensityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "cipm-2007" | "cipm2007" | "cipm" => Ok(Self::Cipm2007),
            "approximate" | "approx" => Ok(Self::Approximate),
            "simple" | "barometric" => Ok(Self::Simple),
            _ => Err(DensityError::UnknownModel {
                name: s.to_string(),
            }),
        }
    }
}

impl TryFrom<String> for ModelKind {
    type Error = DensityError;

    fn try_from(name: String) -> Result<Self, Self::Error> {
        name.parse()
    }
}

/// Build a shared model. `site_height_m` only matters for [`ModelKind::Simple`].
pub fn build_model(kind: ModelKind, site_height_m: Option<f64>) -> Arc<dyn DensityModel> {
    tracing::debug!(model = %kind, ?site_height_m, "building density model");
    match kind {
        ModelKind::Cipm2007 => Arc::new(CipmModel::cipm_2007()),
        ModelKind::Approximate => Arc::new(ApproximateModel),
        ModelKind::Simple => Arc::new(SimpleModel::at_height(site_height_m.unwrap_or(0.0))),
    }
}

/// Context with `kind` installed and standard laboratory air
/// (20 °C, 50 % RH, 101325 Pa).
pub fn standard_context(kind: ModelKind) -> MeasurementContext {
    MeasurementContext::new(build_model(kind, None)).with_reading(EnvironmentalReading::standard())
}

/// Like [`standard_context`], selecting the model by name.
pub fn context_by_name(name: &str) -> DensityResult<MeasurementContext> {
    let kind = name.parse::<ModelKind>().inspect_err(|err| {
        tracing::error!(%err, "cannot build density model");
    })?;
    Ok(standard_context(kind))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_round_trip() {
        for kind in ModelKind::ALL {
            assert_eq!(kind.name().parse::<ModelKind>().unwrap(), kind);
            assert_eq!(kind.to_string(), kind.name());
        }
        assert_eq!("CIPM-2007".parse::<ModelKind>().unwrap(), ModelKind::Cipm2007);
    }

    #[test]
    fn serde_names() {
        let kind: ModelKind = serde_json::from_str("\"approximate\"").unwrap();
        assert_eq!(kind, ModelKind::Approximate);
        assert_eq!(serde_json::to_string(&ModelKind::Cipm2007).unwrap(), "\"cipm-2007\"");

        let err = serde_json::from_str::<ModelKind>("\"cipm-1981\"").unwrap_err();
        assert!(err.to_string().contains("Unknown density model 'cipm-1981'"), "{err}");
    }

    #[test]
    fn unknown_name_is_construction_failure() {
        let err = context_by_name("cipm-1981").unwrap_err();
        assert_eq!(
            err,
            DensityError::UnknownModel {
                name: "cipm-1981".into()
            }
        );
    }

    #[test]
    fn standard_context_defaults() {
        let ctx = standard_context(ModelKind::default());
        assert_eq!(ctx.equation_name(), "CIPM-2007");
        assert_eq!(ctx.reading(), Some(&EnvironmentalReading::standard()));
        assert!((ctx.density().unwrap() - 1.2).abs() < 0.01);
    }

    #[test]
    fn simple_model_height() {
        let model = build_model(ModelKind::Simple, Some(1000.0));
        assert_eq!(model.density(&EnvironmentalReading::standard()), 1.068);
    }

    #[test]
    fn every_kind_is_constructible() {
        for kind in ModelKind::ALL {
            let ctx = standard_context(kind);
            let rho = ctx.density().unwrap();
            assert!(rho.is_finite() && rho > 1.0, "{kind}: {rho}");
        }
    }
}
