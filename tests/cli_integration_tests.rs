use std::process::Command;
use tempfile::TempDir;

fn nci_to_ctml() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_nci-to-ctml"));
    // Preflight failures must never reach the network
    cmd.env("NCI_CT_API_URL", "http://127.0.0.1:9/v1/clinical-trials");
    cmd
}

#[test]
fn test_cli_help_command() {
    let output = nci_to_ctml()
        .arg("--help")
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("nci-to-ctml"));
    assert!(stdout.contains("--remove-fields"));
}

#[test]
fn test_cli_requires_input() {
    let output = nci_to_ctml().output().expect("Failed to execute command");
    assert!(!output.status.success());
}

#[test]
fn test_missing_output_dir_exits_cleanly() {
    let temp_dir = TempDir::new().unwrap();
    let missing = temp_dir.path().join("missing");

    let output = nci_to_ctml()
        .args(["-i", "NCT02194738", "-o"])
        .arg(&missing)
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Output directory"));
    assert!(stdout.contains("not found"));
    assert!(!stdout.contains("Execution complete"));
    assert!(!missing.exists());
}

#[test]
fn test_no_valid_ids_exits_cleanly() {
    let temp_dir = TempDir::new().unwrap();

    let output = nci_to_ctml()
        .args(["-i", "BADID,ABC123", "-o"])
        .arg(temp_dir.path())
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("There are no valid NCT IDs"));
    assert!(!stdout.contains("Execution complete"));
    assert_eq!(std::fs::read_dir(temp_dir.path()).unwrap().count(), 0);
}

#[test]
fn test_output_dir_defaults_to_working_directory() {
    let temp_dir = TempDir::new().unwrap();

    // All IDs malformed, so the run stops at preflight after resolving `-o`
    let output = nci_to_ctml()
        .args(["-i", "BADID"])
        .current_dir(temp_dir.path())
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(!stdout.contains("Output directory"));
    assert!(stdout.contains("There are no valid NCT IDs"));
}
