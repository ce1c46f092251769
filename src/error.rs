//! Errors that stop a batch before any trial is fetched.
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PreflightError {
    #[error(
        "## ERROR: Output directory {} not found.\n\
         ##        Please specify the output directory you would prefer\n\
         ##        or leave unset to write to your current working directory.",
        .0.display()
    )]
    OutputDirNotFound(PathBuf),

    #[error(
        "## ERROR: There are no valid NCT IDs in your list. All IDs should start\n\
         ##        with the characters \"NCT\". Aborting."
    )]
    NoValidIds,
}
