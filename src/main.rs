//! # nci-to-ctml
//!
//! Query the NCI Clinical Trials API for one or more NCT IDs and write a CTML
//! file in YAML format for each trial found.
//!
//! ```bash
//! nci-to-ctml -i NCT02194738 -o ./ctml
//!
//! # drop API fields you don't want in the CTML files
//! nci-to-ctml -i NCT02194738,NCT00000001 -o ./ctml --remove-fields sites,arms
//!
//! # read comma-separated NCT IDs from a file, one list per line
//! nci-to-ctml -i trials.txt
//! ```
//!
//! The registry endpoint can be pointed elsewhere with `NCI_CT_API_URL`, and
//! diagnostics are enabled with `RUST_LOG=debug`.

use anyhow::Result;
use clap::Parser;
use nci_to_ctml::{
    banner::completion_banner,
    config::Settings,
    ctml::FieldFilter,
    error::PreflightError,
    logging,
    registry::TrialsClient,
    resolver::{self, BatchRequest},
    Cli,
};

#[tokio::main]
async fn main() -> Result<()> {
    logging::init_logging();
    let cli = Cli::parse();

    let output_dir = match cli.outpath {
        Some(dir) => dir,
        None => std::env::current_dir()?,
    };
    let request = BatchRequest {
        input: cli.inpath,
        output_dir,
        remove_fields: cli
            .remove_fields
            .as_deref()
            .map(FieldFilter::parse)
            .unwrap_or_default(),
    };

    let settings = Settings::from_env()?;
    let client = TrialsClient::new(&settings)?;

    match resolver::run(&request, &client).await {
        Ok(report) => {
            tracing::info!(
                written = report.written().len(),
                skipped = report.skipped(),
                "batch complete"
            );
        }
        Err(err) => {
            // A refused batch is reported, not treated as a failure
            if let Some(preflight) = err.downcast_ref::<PreflightError>() {
                println!("{preflight}");
                return Ok(());
            }
            return Err(err);
        }
    }

    println!(
        "{}",
        completion_banner(chrono::Local::now().naive_local(), &request.output_dir)
    );
    Ok(())
}
