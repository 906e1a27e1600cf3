//! Score summary rendering.
//!
//! Turns a current report, the published version and an optional reference
//! report into an ordered list of lines, then writes them through
//! `console_format::TableWriter`. Nothing here touches the network or the
//! filesystem.

use super::types::Report;
use crate::console_format::{Diff, Metric, Style, TableWriter, compute_diff};
use anyhow::{Context, Result};
use chrono::{DateTime, TimeZone};
use std::fmt::Display;
use std::io::{self, Write};
use term::color;

pub const BANNER: &str = "*** npms package score report ***";

const OUTDATED_MARKER: &str = "outdated  ";
const DATE_FORMAT: &str = "%Y-%m-%d";
const TIME_FORMAT: &str = "%H:%M:%S";

/// One labelled value, optionally compared against a reference value.
#[derive(Debug, Clone, PartialEq)]
pub struct DisplayRow {
    pub label: &'static str,
    /// Rendered in bold
    pub emphasis: bool,
    pub value: Metric,
    pub reference: Option<Metric>,
    /// Prefix the value with a red "outdated" marker
    pub outdated: bool,
}

impl DisplayRow {
    pub fn new(label: &'static str, value: Metric) -> Self {
        Self { label, emphasis: false, value, reference: None, outdated: false }
    }

    pub fn compared(label: &'static str, value: Metric, reference: Option<Metric>) -> Self {
        Self { reference, ..Self::new(label, value) }
    }

    /// `None` when there is no reference or nothing changed
    pub fn diff(&self) -> Option<Diff> {
        self.reference.as_ref().and_then(|r| compute_diff(&self.value, r))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Line {
    Rule(char),
    Banner(&'static str),
    Row(DisplayRow),
}

/// Build every summary line in display order.
///
/// Fails when the current or reference report lacks data a row needs.
pub fn build_lines<Tz>(
    report: &Report,
    published_version: &str,
    reference: Option<&Report>,
    tz: &Tz,
) -> Result<Vec<Line>>
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    let mut lines = vec![Line::Rule('-'), Line::Banner(BANNER), Line::Rule('-')];

    // Identity is never diffed
    lines.push(Line::Row(DisplayRow::new("package", Metric::text(report.name()))));

    // Versions
    let rated_version = report.rated_version();
    let outdated = rated_version != published_version;
    let analyzed_at = analyzed_at(report, tz)?;
    lines.push(Line::Row(DisplayRow::new("published", Metric::text(published_version))));
    lines.push(Line::Row(DisplayRow::new("rated", Metric::text(rated_version))));
    lines.push(Line::Row(DisplayRow::new("analyzed on", Metric::text(analyzed_at.format(DATE_FORMAT).to_string()))));
    lines.push(Line::Row(DisplayRow::new("analyzed at", Metric::text(analyzed_at.format(TIME_FORMAT).to_string()))));
    lines.push(Line::Row(DisplayRow::new("up-to-date", Metric::text(if outdated { "no" } else { "yes" }))));

    // npm and GitHub signals
    lines.push(Line::Rule('-'));
    let npm = &report.collected.npm;
    let ref_npm = reference.map(|r| &r.collected.npm);
    let ref_weekly = reference.map(Report::weekly_downloads).transpose()?;
    lines.push(Line::Row(DisplayRow::compared(
        "npm weekly dl",
        Metric::count(report.weekly_downloads()?),
        ref_weekly.map(Metric::count),
    )));
    lines.push(Line::Row(DisplayRow::compared(
        "npm dependents",
        Metric::count(npm.dependents_count),
        ref_npm.map(|n| Metric::count(n.dependents_count)),
    )));
    lines.push(Line::Row(DisplayRow::compared(
        "npm stars",
        Metric::count(npm.stars_count),
        ref_npm.map(|n| Metric::count(n.stars_count)),
    )));

    // Only compared when both sides have a linked repository
    let github = report.collected.github.as_ref();
    let ref_github = github.and(reference.and_then(|r| r.collected.github.as_ref()));
    lines.push(Line::Row(DisplayRow::compared(
        "GitHub forks",
        github.map_or_else(Metric::placeholder, |g| Metric::count(g.forks_count)),
        ref_github.map(|g| Metric::count(g.forks_count)),
    )));
    lines.push(Line::Row(DisplayRow::compared(
        "GitHub stars",
        github.map_or_else(Metric::placeholder, |g| Metric::count(g.stars_count)),
        ref_github.map(|g| Metric::count(g.stars_count)),
    )));

    // Score details
    lines.push(Line::Rule('-'));
    let detail = &report.score.detail;
    let ref_detail = reference.map(|r| &r.score.detail);
    lines.push(Line::Row(DisplayRow::compared(
        "quality",
        Metric::percent(detail.quality),
        ref_detail.map(|d| Metric::percent(d.quality)),
    )));
    lines.push(Line::Row(DisplayRow::compared(
        "popularity",
        Metric::percent(detail.popularity),
        ref_detail.map(|d| Metric::percent(d.popularity)),
    )));
    lines.push(Line::Row(DisplayRow::compared(
        "maintenance",
        Metric::percent(detail.maintenance),
        ref_detail.map(|d| Metric::percent(d.maintenance)),
    )));

    // Total score
    lines.push(Line::Rule('='));
    lines.push(Line::Row(DisplayRow {
        emphasis: true,
        outdated,
        ..DisplayRow::compared(
            "TOTAL SCORE",
            Metric::percent(report.score.final_score),
            reference.map(|r| Metric::percent(r.score.final_score)),
        )
    }));
    lines.push(Line::Rule('='));

    Ok(lines)
}

fn analyzed_at<Tz: TimeZone>(report: &Report, tz: &Tz) -> Result<DateTime<Tz>> {
    let parsed = DateTime::parse_from_rfc3339(&report.analyzed_at)
        .with_context(|| format!("Invalid analyzedAt timestamp '{}'", report.analyzed_at))?;
    Ok(parsed.with_timezone(tz))
}

impl<W: Write> TableWriter<W> {
    pub fn write_lines(&mut self, lines: &[Line]) -> io::Result<()> {
        for line in lines {
            match line {
                Line::Rule(ch) => self.write_rule(*ch)?,
                Line::Banner(title) => self.write_banner(title)?,
                Line::Row(row) => self.write_display_row(row)?,
            }
        }
        Ok(())
    }

    pub fn write_display_row(&mut self, row: &DisplayRow) -> io::Result<()> {
        let style = self.style();
        let label = if row.emphasis { style.bold(row.label) } else { row.label.to_string() };
        let value = if row.outdated {
            format!("{}{}", style.fg(OUTDATED_MARKER, color::RED), row.value)
        } else {
            row.value.to_string()
        };
        let diff = row.diff().map(|d| d.render(style));
        self.write_row(&label, &value, diff.as_deref())
    }
}

/// Render the summary into a string
pub fn render_score_summary<Tz>(
    report: &Report,
    published_version: &str,
    reference: Option<&Report>,
    tz: &Tz,
    style: Style,
) -> Result<String>
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    let lines = build_lines(report, published_version, reference, tz)?;
    let mut writer = TableWriter::new(Vec::new(), style);
    writer.write_lines(&lines)?;
    String::from_utf8(writer.into_inner()).context("Summary is not valid UTF-8")
}

/// Print the summary to stdout using the local time zone
pub fn print_score_summary(
    report: &Report,
    published_version: &str,
    reference: Option<&Report>,
    style: Style,
) -> Result<()> {
    let summary = render_score_summary(report, published_version, reference, &chrono::Local, style)?;
    io::stdout().lock().write_all(summary.as_bytes())?;
    Ok(())
}

#[cfg(test)]
#[path = "render_test.rs"]
mod render_test;
