//! CTML records
//!
//! A record is whatever JSON object the registry returned for one trial. Its
//! schema belongs to the registry, so it is carried as an untyped map and
//! written back out as YAML with only the requested top-level fields removed.

use anyhow::{Context, Result};
use serde_json::{Map, Value};
use std::{collections::BTreeSet, fs, path::Path};

/// One trial as returned by the registry
pub type Record = Map<String, Value>;

/// Top-level fields to drop from every record before it is written
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldFilter {
    fields: BTreeSet<String>,
}

impl FieldFilter {
    /// Parse the `--remove-fields` value, a comma-separated list of field names
    pub fn parse(list: &str) -> Self {
        FieldFilter {
            fields: list
                .split(',')
                .filter(|f| !f.is_empty())
                .map(str::to_string)
                .collect(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Remove every listed field present in `record`; absent names are ignored
    pub fn apply(&self, record: &mut Record) {
        for field in &self.fields {
            record.remove(field);
        }
    }
}

/// Serialize a record as block-style YAML
pub fn to_yaml(record: &Record) -> Result<String> {
    Ok(serde_yaml::to_string(record)?)
}

/// Write a record to `path`, replacing any existing file
pub fn write_ctml(record: &Record, path: &Path) -> Result<()> {
    let data = to_yaml(record)?;
    fs::write(path, data).with_context(|| format!("writing CTML file {}", path.display()))?;
    Ok(())
}
