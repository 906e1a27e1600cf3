/// Configuration resolution module
///
/// This module handles:
/// - Resolving the package to score from the CLI or the enclosing package.json
/// - Building an immutable `RunPlan` from CLI arguments
use crate::cli::CliArgs;
use crate::console_format::Style;
use crate::error::Failed;
use crate::manifest;
use anyhow::Result;
use log::debug;
use std::path::{Path, PathBuf};

/// Everything one invocation needs, resolved upfront
#[derive(Debug, Clone, PartialEq)]
pub struct RunPlan {
    pub package: String,
    pub save_report: Option<PathBuf>,
    pub diff: Option<PathBuf>,
    pub commit: bool,
    pub quiet: bool,
    pub style: Style,
}

/// Build a RunPlan from CLI arguments, discovering the package name from
/// `start_dir` upward (no further than `ceiling`) when none was given
pub fn build_run_plan(args: &CliArgs, start_dir: &Path, ceiling: Option<&Path>) -> Result<RunPlan> {
    let package = match &args.package {
        Some(name) => {
            debug!("Using package name from command line: {}", name);
            name.clone()
        }
        None => manifest::find_package_name(start_dir, ceiling).ok_or_else(|| {
            Failed::new("no package name specified and no package.json found in current working directory")
        })?,
    };

    Ok(RunPlan {
        package,
        save_report: args.save_report.clone(),
        diff: args.diff.clone(),
        commit: args.commit,
        quiet: args.quiet,
        style: Style::detect(args.no_color),
    })
}

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;
