//! al-lab: laboratory configuration files.
//!
//! A lab file names the density model, its reference parameters, the latest
//! air reading and any correction tables. Files are validated on both load
//! and save.

pub mod schema;
pub mod validate;

use std::path::Path;
use std::sync::Arc;

use al_density::{CipmModel, DensityModel, MeasurementContext, ModelKind, build_model};
use al_table::{InterpolationTable, TableError};

pub use schema::*;
pub use validate::{LATEST_VERSION, ValidationError, validate_lab};

pub type LabResult<T> = Result<T, LabError>;

#[derive(thiserror::Error, Debug)]
pub enum LabError {
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("Unknown table: {id}")]
    UnknownTable { id: String },

    #[error("Table error: {0}")]
    Table(#[from] TableError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub fn load_yaml(path: &Path) -> LabResult<LabConfig> {
    let content = std::fs::read_to_string(path)?;
    let lab: LabConfig = serde_yaml::from_str(&content)?;
    validate_lab(&lab)?;
    tracing::info!(path = %path.display(), name = %lab.name, "loaded lab config");
    Ok(lab)
}

pub fn save_yaml(path: &Path, lab: &LabConfig) -> LabResult<()> {
    validate_lab(lab)?;
    let content = serde_yaml::to_string(lab)?;
    std::fs::write(path, content)?;
    Ok(())
}

pub fn load_json(path: &Path) -> LabResult<LabConfig> {
    let content = std::fs::read_to_string(path)?;
    let lab: LabConfig = serde_json::from_str(&content)?;
    validate_lab(&lab)?;
    tracing::info!(path = %path.display(), name = %lab.name, "loaded lab config");
    Ok(lab)
}

pub fn save_json(path: &Path, lab: &LabConfig) -> LabResult<()> {
    validate_lab(lab)?;
    let content = serde_json::to_string_pretty(lab)?;
    std::fs::write(path, content)?;
    Ok(())
}

/// Load by extension: `.json` as JSON, anything else as YAML.
pub fn load(path: &Path) -> LabResult<LabConfig> {
    match path.extension().and_then(|e| e.to_str()) {
        Some(ext) if ext.eq_ignore_ascii_case("json") => load_json(path),
        _ => load_yaml(path),
    }
}

impl LabConfig {
    /// Model described by this lab. The lab's CO₂ content becomes the model's
    /// default; the equation's reference content is left alone.
    pub fn density_model(&self) -> Arc<dyn DensityModel> {
        match (self.model, self.co2_fraction) {
            (ModelKind::Cipm2007, Some(co2_fraction)) => {
                Arc::new(CipmModel::cipm_2007().with_default_co2(co2_fraction))
            }
            (kind, _) => build_model(kind, self.height_m),
        }
    }

    /// Context with this lab's model and its reading (standard air when none
    /// is recorded).
    pub fn context(&self) -> MeasurementContext {
        MeasurementContext::new(self.density_model()).with_reading(self.reading.unwrap_or_default())
    }

    pub fn table(&self, id: &str) -> LabResult<InterpolationTable> {
        let def = self
            .tables
            .iter()
            .find(|t| t.id == id)
            .ok_or_else(|| LabError::UnknownTable { id: id.to_string() })?;
        Ok(InterpolationTable::new(def.points.iter().copied())?)
    }
}
