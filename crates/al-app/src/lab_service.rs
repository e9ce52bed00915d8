//! Lab file loading, validation and table lookups.

use std::path::Path;

use al_density::ModelKind;
use al_lab::LabConfig;

use crate::error::{AppError, AppResult};

/// Summary of a lab file for listing.
#[derive(Debug, Clone, PartialEq)]
pub struct LabSummary {
    pub name: String,
    pub version: u32,
    pub model: ModelKind,
    pub has_reading: bool,
    pub table_ids: Vec<String>,
}

/// Load and validate a lab file (`.json` as JSON, anything else as YAML).
pub fn load_lab(path: &Path) -> AppResult<LabConfig> {
    if !path.exists() {
        return Err(AppError::LabFileRead {
            path: path.to_path_buf(),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "file not found"),
        });
    }
    let lab = al_lab::load(path)?;
    tracing::debug!(tables = lab.tables.len(), model = %lab.model, "lab ready");
    Ok(lab)
}

pub fn summarize(lab: &LabConfig) -> LabSummary {
    LabSummary {
        name: lab.name.clone(),
        version: lab.version,
        model: lab.model,
        has_reading: lab.reading.is_some(),
        table_ids: lab.tables.iter().map(|t| t.id.clone()).collect(),
    }
}

/// Interpolated `(x, value)` pairs from one of the lab's tables.
pub fn lookup(lab: &LabConfig, table_id: &str, xs: &[f64]) -> AppResult<Vec<(f64, f64)>> {
    let table = lab.table(table_id)?;
    let mut out = Vec::with_capacity(xs.len());
    for &x in xs {
        if x < table.min_key().unwrap_or(x) || x > table.max_key().unwrap_or(x) {
            tracing::warn!(table = table_id, x, "extrapolating outside table range");
        }
        out.push((x, table.interpolate(x)?));
    }
    Ok(out)
}
