use chrono::NaiveDateTime;
use std::path::Path;

const RULE_WIDTH: usize = 50;

/// Closing lines printed once a batch has run to completion
pub fn completion_banner(finished_at: NaiveDateTime, output_dir: &Path) -> String {
    let rule = format!("## {}", "-".repeat(RULE_WIDTH));
    format!(
        "{rule}\n## Execution complete on {}.\n## CTML files written to {}\n{rule}",
        finished_at.format("%b-%d-%Y %X"),
        output_dir.display()
    )
}
