// Copyright 2015 The Rust Project Developers. See the COPYRIGHT
// file at the top-level directory of this distribution and at
// http://rust-lang.org/COPYRIGHT.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

mod api;
mod cli;
mod config;
mod console_format;
mod error;
mod git;
mod manifest;
mod npm;
mod report;
mod ui;

use anyhow::{Context, Result};
use log::debug;
use std::env;

fn main() {
    env_logger::init();

    // Parse CLI arguments
    let args = cli::CliArgs::parse_args();

    // Validate arguments
    if let Err(e) = args.validate() {
        ui::print_error(&e);
        std::process::exit(1);
    }

    if let Err(e) = run(&args) {
        match e.downcast_ref::<error::Failed>() {
            // Recognized failure: message only
            Some(failed) => ui::print_error(&failed.to_string()),
            None => ui::print_error(&format!("{:?}", e)),
        }
        std::process::exit(1);
    }
}

fn run(args: &cli::CliArgs) -> Result<()> {
    let cwd = env::current_dir().context("Failed to determine current directory")?;
    let plan = config::build_run_plan(args, &cwd, None)?;
    debug!("run plan: {:?}", plan);

    // Get package score from npms.io
    let saved = api::fetch_package_report(&plan.package)?;

    // Save (and commit) before decoding so a surprising payload is still kept
    if let Some(path) = &plan.save_report {
        report::save_report(path, &saved)?;
        if plan.commit {
            git::commit_report(path)?;
        }
    }
    let current = saved.report()?;
    debug!("{} scored {}", current.name(), console_format::to_percent(current.score.final_score));

    // Load reference report if requested
    let reference = match &plan.diff {
        Some(path) => {
            let reference = report::load_reference(path)?;
            if reference.is_none() {
                ui::print_warning(&format!("cannot display differences, {} not found.", path.display()));
            }
            reference
        }
        None => None,
    };

    // Get published package version from npm
    let published_version = npm::published_version(&plan.package)?;

    if !plan.quiet {
        report::print_score_summary(&current, &published_version, reference.as_ref(), plan.style)?;
    }

    Ok(())
}
