/// Command-line integration tests for npms-score
///
/// These run the built binary and only cover paths that fail or exit
/// before any request to npms.io is made.
use std::path::Path;
use std::process::{Command, Output};
use tempfile::TempDir;

// Helper to run the binary in a directory
fn run_npms_score(args: &[&str], cwd: &Path) -> Output {
    Command::new(env!("CARGO_BIN_EXE_npms-score"))
        .args(args)
        .current_dir(cwd)
        .env("NO_COLOR", "1")
        .output()
        .unwrap_or_else(|e| panic!("Failed to run npms-score {}: {}", args.join(" "), e))
}

#[test]
fn test_help_lists_options() {
    let dir = TempDir::new().unwrap();
    let output = run_npms_score(&["--help"], dir.path());
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    for flag in ["--save-report", "--diff", "--commit", "--quiet", "[PACKAGE]"] {
        assert!(stdout.contains(flag), "help should mention {}\n{}", flag, stdout);
    }
}

#[test]
fn test_version_flag() {
    let dir = TempDir::new().unwrap();
    let output = run_npms_score(&["--version"], dir.path());
    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stdout).contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_commit_without_save_report_exits_with_1() {
    let dir = TempDir::new().unwrap();
    let output = run_npms_score(&["chalk", "--commit"], dir.path());
    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("--save-report"));
}

#[test]
fn test_empty_package_name_exits_with_1() {
    let dir = TempDir::new().unwrap();
    let output = run_npms_score(&["  "], dir.path());
    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("Package name must not be empty"));
}

#[test]
#[ignore] // Depends on no package.json existing above the temp directory
fn test_no_package_found_exits_with_1() {
    let dir = TempDir::new().unwrap();
    let output = run_npms_score(&["--quiet"], dir.path());
    assert_eq!(output.status.code(), Some(1));

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("no package name specified"), "stderr: {}", stderr);
    // Recognized failures carry no context chain
    assert!(!stderr.contains("Caused by"));
}
