// Utilities for naming the CTML files written for each trial

use crate::{constants::CTML_EXTENSION, identifier::NctId};
use std::path::{Path, PathBuf};

/// File name for a trial: the uppercased NCT ID plus the CTML extension
pub fn ctml_file_name(id: &NctId) -> String {
    format!("{}.{}", id.canonical(), CTML_EXTENSION)
}

/// Full path of the CTML file for `id` inside `output_dir`
pub fn ctml_path(output_dir: &Path, id: &NctId) -> PathBuf {
    output_dir.join(ctml_file_name(id))
}
