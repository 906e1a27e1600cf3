/// API module for interacting with npms.io
///
/// This module provides the single request the tool makes: fetching the
/// score report of one package.
use crate::error::Failed;
use crate::report::SavedReport;
use anyhow::{Context, Result};
use log::debug;
use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};
use serde_json::Value;

const USER_AGENT: &str = concat!("npms-score/", env!("CARGO_PKG_VERSION"));
const NPMS_PACKAGE_API: &str = "https://api.npms.io/v2/package/";

/// Everything outside the URL unreserved set, so scoped names like
/// `@scope/pkg` stay a single path segment
const PATH_SEGMENT: &AsciiSet = &NON_ALPHANUMERIC.remove(b'-').remove(b'_').remove(b'.').remove(b'~');

lazy_static::lazy_static! {
    static ref NPMS_AGENT: ureq::Agent = ureq::AgentBuilder::new().user_agent(USER_AGENT).build();
}

/// URL of the score report for `package_name`
pub fn package_url(package_name: &str) -> String {
    format!("{}{}", NPMS_PACKAGE_API, utf8_percent_encode(package_name, PATH_SEGMENT))
}

/// Human-readable detail for a failed request: the service's `message`
/// field when it sent one, else the status code
fn error_detail(status: u16, body: &str) -> String {
    serde_json::from_str::<Value>(body)
        .ok()
        .and_then(|v| v.get("message").and_then(|m| m.as_str()).map(str::to_string))
        .unwrap_or_else(|| format!("HTTP {}", status))
}

/// Fetch the score report for a package
pub fn fetch_package_report(package_name: &str) -> Result<SavedReport> {
    let query = package_url(package_name);
    let failure = || format!("failed to get package score for {}", package_name);
    debug!("fetching {}", query);

    let body = match NPMS_AGENT.get(&query).call() {
        Ok(resp) => {
            debug!("got HTTP {} from npms.io", resp.status());
            resp.into_string().map_err(|e| Failed::with_cause(failure(), e))?
        }
        Err(ureq::Error::Status(status, resp)) => {
            let body = resp.into_string().unwrap_or_default();
            debug!("got HTTP {} from npms.io: {}", status, body);
            return Err(Failed::with_cause(failure(), error_detail(status, &body)).into());
        }
        Err(e) => return Err(Failed::with_cause(failure(), e).into()),
    };

    let result: Value = serde_json::from_str(&body).with_context(|| format!("Invalid JSON from {}", query))?;
    Ok(SavedReport { query, result })
}
