//! # nci-to-ctml
//!
//! Resolve clinical trial NCT IDs against the NCI Clinical Trials API and
//! write every trial found as a CTML file in YAML format.

use clap::Parser;
use std::path::PathBuf;

pub mod banner;
pub mod config;
pub mod constants;
pub mod ctml;
pub mod error;
pub mod identifier;
pub mod logging;
pub mod output_path;
pub mod registry;
pub mod resolver;

/// Fetch clinical trials from the NCI Clinical Trials API and write them as CTML files
///
/// Each NCT ID found by the API is written to `<OUTPATH>/<NCT ID>.yml`
/// containing everything the API returned for that trial.
#[derive(Parser, Debug)]
#[command(
    name = "nci-to-ctml",
    version,
    about = "Write CTML files for clinical trials fetched from the NCI Clinical Trials API",
    long_about = "Accepts an NCT ID, a comma-separated list of NCT IDs, or a file containing\ncomma-separated lists of NCT IDs, queries the NCI Clinical Trials API and writes one\nCTML file in YAML format per trial with all information returned by the API."
)]
pub struct Cli {
    /// An NCT ID, a comma-separated list of NCT IDs, or the path to a file
    /// containing comma-separated lists of NCT IDs
    #[arg(short = 'i', value_name = "INPATH")]
    pub inpath: String,

    /// Output directory for the CTML files [default: current working directory]
    #[arg(short = 'o', value_name = "OUTPATH")]
    pub outpath: Option<PathBuf>,

    /// Comma-separated list of API fields to exclude from the CTML files
    #[arg(long = "remove-fields", value_name = "FIELDS")]
    pub remove_fields: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_all_options() {
        let cli = Cli::try_parse_from([
            "nci-to-ctml",
            "-i",
            "NCT02194738,NCT00000001",
            "-o",
            "out",
            "--remove-fields",
            "sites,arms",
        ])
        .unwrap();
        assert_eq!(cli.inpath, "NCT02194738,NCT00000001");
        assert_eq!(cli.outpath, Some(PathBuf::from("out")));
        assert_eq!(cli.remove_fields.as_deref(), Some("sites,arms"));
    }

    #[test]
    fn test_input_is_required() {
        assert!(Cli::try_parse_from(["nci-to-ctml", "-o", "out"]).is_err());
    }

    #[test]
    fn test_optional_arguments_default_to_none() {
        let cli = Cli::try_parse_from(["nci-to-ctml", "-i", "NCT1"]).unwrap();
        assert_eq!(cli.outpath, None);
        assert_eq!(cli.remove_fields, None);
    }
}
