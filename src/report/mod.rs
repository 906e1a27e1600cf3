//! Report module - package report model, persistence and the score summary.
//!
//! This module handles:
//! - Decoding the npms.io payload into typed fields
//! - Saving and loading the `{query, result}` wrapper
//! - Building and printing the score summary
//!
//! Console styling and alignment are handled by the console_format module.
//!
//! # Module Organization
//!
//! - `types` - Typed `Report` model
//! - `store` - Save/load of `SavedReport` files
//! - `render` - `DisplayRow` construction and summary output

mod render;
mod store;
mod types;

pub use store::{DEFAULT_SCORE_FILE, SavedReport, load_reference, save_report};

pub use render::print_score_summary;
