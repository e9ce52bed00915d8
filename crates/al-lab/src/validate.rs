//! Lab configuration validation.

use std::collections::HashSet;

use al_density::{DensityError, check_co2_fraction};

use crate::schema::{LabConfig, TableDef};

pub const LATEST_VERSION: u32 = 1;

#[derive(thiserror::Error, Debug)]
pub enum ValidationError {
    #[error("Duplicate ID: {id} in {context}")]
    DuplicateId { id: String, context: String },

    #[error("Invalid value: {field} = {value} ({reason})")]
    InvalidValue {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Unsupported version: {version}")]
    UnsupportedVersion { version: u32 },
}

pub fn validate_lab(lab: &LabConfig) -> Result<(), ValidationError> {
    if lab.version > LATEST_VERSION {
        return Err(ValidationError::UnsupportedVersion {
            version: lab.version,
        });
    }

    if lab.name.trim().is_empty() {
        return Err(ValidationError::InvalidValue {
            field: "name".to_string(),
            value: format!("{:?}", lab.name),
            reason: "must not be empty".to_string(),
        });
    }

    if let Some(co2) = lab.co2_fraction {
        check_co2_fraction(co2).map_err(|err| ValidationError::InvalidValue {
            field: "co2_fraction".to_string(),
            value: co2.to_string(),
            reason: err.to_string(),
        })?;
    }

    if let Some(h) = lab.height_m.filter(|h| !h.is_finite()) {
        return Err(ValidationError::InvalidValue {
            field: "height_m".to_string(),
            value: h.to_string(),
            reason: "must be finite".to_string(),
        });
    }

    if let Some(reading) = &lab.reading {
        reading.validate().map_err(|err| {
            let reason = match err {
                DensityError::NonPhysical { what } => what.to_string(),
                other => other.to_string(),
            };
            ValidationError::InvalidValue {
                field: "reading".to_string(),
                value: reading.to_string(),
                reason,
            }
        })?;
    }

    let mut table_ids = HashSet::new();
    for table in &lab.tables {
        if !table_ids.insert(table.id.as_str()) {
            return Err(ValidationError::DuplicateId {
                id: table.id.clone(),
                context: "tables".to_string(),
            });
        }
        validate_table(table)?;
    }

    Ok(())
}

fn validate_table(table: &TableDef) -> Result<(), ValidationError> {
    let field = format!("tables.{}.points", table.id);

    if table.points.len() < 2 {
        return Err(ValidationError::InvalidValue {
            field,
            value: table.points.len().to_string(),
            reason: "at least two points are required".to_string(),
        });
    }

    let mut keys = HashSet::new();
    for &(key, value) in &table.points {
        if !key.is_finite() || !value.is_finite() {
            return Err(ValidationError::InvalidValue {
                field,
                value: format!("[{key}, {value}]"),
                reason: "points must be finite".to_string(),
            });
        }
        // -0.0 and 0.0 are the same key.
        if !keys.insert((key + 0.0).to_bits()) {
            return Err(ValidationError::DuplicateId {
                id: key.to_string(),
                context: field,
            });
        }
    }

    Ok(())
}
