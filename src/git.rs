/// Git repository utilities
///
/// This module handles:
/// - Checking whether the saved report is untracked or modified
/// - Committing it
use crate::error::Failed;
use anyhow::Result;
use log::debug;
use std::path::Path;
use std::process::Command;

/// Working-tree state of a single file, from `git status --porcelain`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileStatus {
    Untracked,
    Modified,
    /// Unchanged, or a state we do not act on
    Other,
}

pub fn parse_porcelain_status(output: &str) -> FileStatus {
    let status = output.trim_start();
    if status.starts_with("??") {
        FileStatus::Untracked
    } else if status.starts_with('M') {
        FileStatus::Modified
    } else {
        FileStatus::Other
    }
}

/// Run git and return its trimmed stdout
fn git(args: &[&str]) -> Result<String> {
    debug!("running git {}", args.join(" "));

    let output = Command::new("git")
        .args(args)
        .output()
        .map_err(|e| Failed::with_cause(format!("failed to run git {}", args[0]), e))?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(Failed::with_cause(format!("git {} failed", args[0]), stderr.trim()).into());
    }

    Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
}

pub fn file_status(path: &Path) -> Result<FileStatus> {
    let path = path.to_string_lossy();
    Ok(parse_porcelain_status(&git(&["status", "--porcelain", "--", &*path])?))
}

/// Commit the saved report: add it when untracked, update it when modified
pub fn commit_report(path: &Path) -> Result<()> {
    let status = file_status(path)?;
    debug!("{} is {:?}", path.display(), status);

    let file = path.to_string_lossy();
    match status {
        FileStatus::Untracked => {
            git(&["add", "--", &*file])?;
            git(&["commit", "-m", "Add package score.", "--", &*file])?;
        }
        FileStatus::Modified => {
            git(&["commit", "-m", "Update package score.", "--", &*file])?;
        }
        FileStatus::Other => {}
    }
    Ok(())
}
