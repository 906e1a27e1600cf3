//! Saving and loading the `{query, result}` report wrapper.
//!
//! The file written by `--save-report` is the exact format read back by
//! `--diff`.

use super::types::Report;
use anyhow::{Context, Result};
use log::debug;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fs;
use std::path::Path;

/// Default file for `--save-report` and `--diff` given without a value.
pub const DEFAULT_SCORE_FILE: &str = "package-score.json";

/// A fetched report together with the query that produced it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SavedReport {
    pub query: String,
    /// Verbatim service payload
    pub result: Value,
}

impl SavedReport {
    pub fn report(&self) -> Result<Report> {
        Report::from_value(&self.result)
    }
}

/// Write the wrapper pretty-printed with 2-space indentation.
pub fn save_report(path: &Path, saved: &SavedReport) -> Result<()> {
    debug!("saving report to {}", path.display());
    let json = serde_json::to_string_pretty(saved).context("Failed to serialize report")?;
    fs::write(path, json).with_context(|| format!("Failed to write {}", path.display()))
}

pub fn load_report(path: &Path) -> Result<SavedReport> {
    debug!("loading report from {}", path.display());
    let json = fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))?;
    serde_json::from_str(&json).with_context(|| format!("Failed to parse {}", path.display()))
}

/// Load the reference report, or `None` when the file does not exist.
pub fn load_reference(path: &Path) -> Result<Option<Report>> {
    if !path.exists() {
        debug!("no reference report at {}", path.display());
        return Ok(None);
    }
    load_report(path)?.report().map(Some)
}
