use crate::constants::NCT_PREFIX;
use anyhow::{Context, Result};
use std::{fs, path::Path};

/// An NCT ID as given by the user.
///
/// The raw casing is kept for the outbound request; file names and console
/// messages use the uppercased form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NctId {
    raw: String,
}

impl NctId {
    pub fn new(raw: impl Into<String>) -> Self {
        NctId { raw: raw.into() }
    }

    /// The token exactly as it appeared in the input
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// Uppercased form used to name the CTML file
    pub fn canonical(&self) -> String {
        self.raw.to_uppercase()
    }

    /// Whether the token starts with `NCT`, ignoring case.
    ///
    /// Nothing past the prefix is checked.
    pub fn is_well_formed(&self) -> bool {
        self.raw
            .get(..NCT_PREFIX.len())
            .is_some_and(|p| p.eq_ignore_ascii_case(NCT_PREFIX))
    }
}

impl std::fmt::Display for NctId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.raw)
    }
}

/// Turn the `-i` argument into the ordered list of NCT IDs to resolve.
///
/// If `input` names an existing file, every line of it is read as a
/// comma-separated list; otherwise `input` itself is the list. Order and
/// duplicates are preserved and empty tokens are dropped.
pub fn collect_ids(input: &str) -> Result<Vec<NctId>> {
    let path = Path::new(input);
    if path.is_file() {
        let bytes =
            fs::read(path).with_context(|| format!("reading NCT IDs from {}", path.display()))?;
        // Undecodable bytes only spoil the tokens they appear in
        let contents = String::from_utf8_lossy(&bytes);
        Ok(contents
            .lines()
            .flat_map(|line| split_list(line.trim()))
            .collect())
    } else {
        Ok(split_list(input).collect())
    }
}

fn split_list(list: &str) -> impl Iterator<Item = NctId> + '_ {
    list.split(',').filter(|t| !t.is_empty()).map(NctId::new)
}

/// True when at least one ID in the batch looks like an NCT ID
pub fn any_well_formed(ids: &[NctId]) -> bool {
    ids.iter().any(NctId::is_well_formed)
}
