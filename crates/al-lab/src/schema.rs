//! Lab configuration schema.

use al_density::{EnvironmentalReading, ModelKind};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LabConfig {
    pub version: u32,
    pub name: String,
    #[serde(default)]
    pub model: ModelKind,
    /// Reference CO₂ mole fraction; CIPM family only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub co2_fraction: Option<f64>,
    /// Site height [m]; used by the barometric model.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height_m: Option<f64>,
    /// Latest reading; standard laboratory air when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reading: Option<EnvironmentalReading>,
    #[serde(default)]
    pub tables: Vec<TableDef>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TableDef {
    pub id: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub description: String,
    pub points: Vec<(f64, f64)>,
}

impl LabConfig {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            version: crate::validate::LATEST_VERSION,
            name: name.into(),
            model: ModelKind::default(),
            co2_fraction: None,
            height_m: None,
            reading: None,
            tables: Vec::new(),
        }
    }
}
