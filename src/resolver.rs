//! The batch loop: resolve every NCT ID of the input and write one CTML file
//! per trial found.

use crate::{
    ctml::{write_ctml, FieldFilter},
    error::PreflightError,
    identifier::{any_well_formed, collect_ids, NctId},
    output_path::ctml_path,
    registry::{Lookup, TrialsClient},
};
use anyhow::Result;
use reqwest::Url;
use std::{
    fmt,
    path::{Path, PathBuf},
};

/// One run of the tool
#[derive(Debug, Clone)]
pub struct BatchRequest {
    /// NCT ID, comma-separated NCT IDs, or a file of comma-separated NCT IDs
    pub input: String,
    /// Existing directory receiving the CTML files
    pub output_dir: PathBuf,
    pub remove_fields: FieldFilter,
}

/// Where a single NCT ID ended up
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// Does not start with `NCT`; never sent to the registry
    Malformed,
    /// Registry answered with an error status or an unusable body
    Rejected { url: Url, body: String },
    /// Registry returned no trial for the ID
    NotFound,
    /// CTML file written
    Written(PathBuf),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Resolution {
    pub id: NctId,
    pub outcome: Outcome,
}

impl fmt::Display for Resolution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.outcome {
            Outcome::Malformed => write!(
                f,
                "## WARNING: \"{}\" is not a valid NCT ID. All IDs should start\n\
                 ##          with the characters \"NCT\". This trial will be skipped.",
                self.id
            ),
            Outcome::Rejected { url, body } => {
                write!(f, "## WARNING: API request {url} was unsuccessful.\n## {body}")
            }
            Outcome::NotFound => write!(f, "## WARNING: Trial not found: {}", self.id.canonical()),
            Outcome::Written(_) => write!(
                f,
                "## INFO: Successfully wrote CTML file for {}",
                self.id.canonical()
            ),
        }
    }
}

/// Per-ID outcomes of a finished batch, in input order
#[derive(Debug, Default)]
pub struct BatchReport {
    pub resolutions: Vec<Resolution>,
}

impl BatchReport {
    /// Paths of the CTML files written, in the order they were written
    pub fn written(&self) -> Vec<&Path> {
        self.resolutions
            .iter()
            .filter_map(|r| match &r.outcome {
                Outcome::Written(path) => Some(path.as_path()),
                _ => None,
            })
            .collect()
    }

    /// Number of IDs that did not produce a file
    pub fn skipped(&self) -> usize {
        self.resolutions.len() - self.written().len()
    }
}

/// Checks made before anything is fetched.
///
/// The output directory must exist and at least one ID must look like an NCT
/// ID; otherwise the whole batch is refused.
pub fn preflight(output_dir: &Path, ids: &[NctId]) -> Result<(), PreflightError> {
    if !output_dir.is_dir() {
        return Err(PreflightError::OutputDirNotFound(output_dir.to_path_buf()));
    }
    if !any_well_formed(ids) {
        return Err(PreflightError::NoValidIds);
    }
    Ok(())
}

/// Resolve a whole batch, printing one status line per ID as it goes.
///
/// Per-ID problems are reported and skipped. Errors are returned for a
/// failed preflight (as [`PreflightError`]), for a request that fails twice
/// in transit, and for I/O failures.
pub async fn run(request: &BatchRequest, client: &TrialsClient) -> Result<BatchReport> {
    let ids = collect_ids(&request.input)?;
    preflight(&request.output_dir, &ids)?;
    tracing::info!(
        count = ids.len(),
        output_dir = %request.output_dir.display(),
        "resolving batch"
    );

    let mut report = BatchReport::default();
    for id in ids {
        let outcome = resolve_one(&id, request, client).await?;
        let resolution = Resolution { id, outcome };
        println!("{resolution}");
        report.resolutions.push(resolution);
    }
    Ok(report)
}

async fn resolve_one(id: &NctId, request: &BatchRequest, client: &TrialsClient) -> Result<Outcome> {
    if !id.is_well_formed() {
        return Ok(Outcome::Malformed);
    }

    let mut record = match client.lookup(id).await? {
        Lookup::Found(record) => record,
        Lookup::NotFound => return Ok(Outcome::NotFound),
        Lookup::Rejected { url, body } => return Ok(Outcome::Rejected { url, body }),
    };

    request.remove_fields.apply(&mut record);
    let path = ctml_path(&request.output_dir, id);
    write_ctml(&record, &path)?;
    tracing::debug!(path = %path.display(), "wrote CTML file");
    Ok(Outcome::Written(path))
}
