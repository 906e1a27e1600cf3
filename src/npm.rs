/// npm command-line utilities
///
/// This module handles:
/// - Asking npm for the currently published version of a package
use crate::error::Failed;
use anyhow::Result;
use log::debug;
use semver::Version;
use std::process::Command;

const FAILURE: &str = "failed to get published package version";

fn npm_program() -> &'static str {
    if cfg!(windows) { "npm.cmd" } else { "npm" }
}

/// Published version of `package_name` according to `npm show`
pub fn published_version(package_name: &str) -> Result<String> {
    debug!("running npm show {} version", package_name);

    let output = Command::new(npm_program())
        .args(["show", package_name, "version"])
        .output()
        .map_err(|e| Failed::with_cause(FAILURE, e))?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(Failed::with_cause(FAILURE, stderr.trim()).into());
    }

    Ok(parse_published_version(&String::from_utf8_lossy(&output.stdout))?)
}

/// Validate the version printed by npm
fn parse_published_version(stdout: &str) -> Result<String, Failed> {
    let version = stdout.trim();
    if version.is_empty() {
        return Err(Failed::with_cause(FAILURE, "npm printed no version"));
    }
    Version::parse(version).map_err(|e| Failed::with_cause(FAILURE, format!("'{}': {}", version, e)))?;
    debug!("published version is {}", version);
    Ok(version.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_trims_output() {
        assert_eq!(parse_published_version("1.2.3\n").unwrap(), "1.2.3");
        assert_eq!(parse_published_version("2.0.0-beta.1").unwrap(), "2.0.0-beta.1");
    }

    #[test]
    fn test_parse_rejects_empty_output() {
        let err = parse_published_version("  \n").unwrap_err();
        assert_eq!(err.to_string(), "failed to get published package version: npm printed no version");
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(parse_published_version("npm ERR! 404").is_err());
    }
}
