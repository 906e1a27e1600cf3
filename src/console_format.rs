/// Console formatting module - Pure rendering concerns
///
/// This module handles all console output formatting including:
/// - Percent conversion and the tagged `Metric` values shown in the summary
/// - Diffs between a value and its reference value
/// - ANSI styling
/// - Padding that ignores invisible escape sequences
///
/// It accepts pre-built rows from the report module and renders them to any
/// `std::io::Write` destination through `TableWriter`.
use std::fmt;
use std::io::{self, IsTerminal, Write};
use term::color::{self, Color};
use unicode_width::UnicodeWidthStr;

/// Visible width of the label column
pub const LABEL_WIDTH: usize = 16;
/// Visible width of the right-aligned value column
pub const VALUE_WIDTH: usize = 14;
/// Visible width of the right-aligned diff column
pub const DIFF_WIDTH: usize = 10;
/// Length of horizontal rules
pub const RULE_WIDTH: usize = 33;

const LABEL_SEPARATOR: &str = " : ";

//
// Styling
//

/// ANSI styling switch. A plain style returns text untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Style {
    use_colors: bool,
}

impl Style {
    pub fn new(use_colors: bool) -> Self {
        Self { use_colors }
    }

    pub fn plain() -> Self {
        Self::new(false)
    }

    /// Colours on unless disabled explicitly, by `NO_COLOR`, by output that
    /// is not a terminal, or by a terminal without colour support
    pub fn detect(no_color: bool) -> Self {
        let no_color_env = std::env::var_os("NO_COLOR").is_some_and(|v| !v.is_empty());
        let is_tty = io::stdout().is_terminal();
        // Only consult terminfo for a real terminal
        let term_supports_color = is_tty && term::stdout().map(|t| t.supports_color()).unwrap_or(false);
        Self::new(colors_enabled(no_color || no_color_env, is_tty, term_supports_color))
    }

    /// Wrap `text` in SGR codes for the given foreground and weight
    pub fn paint(&self, text: &str, fg: Option<Color>, bold: bool) -> String {
        if !self.use_colors || (fg.is_none() && !bold) {
            return text.to_string();
        }
        let mut codes = Vec::new();
        if bold {
            codes.push("1".to_string());
        }
        if let Some(c) = fg {
            codes.push(sgr_foreground(c).to_string());
        }
        format!("\x1b[{}m{}\x1b[0m", codes.join(";"), text)
    }

    pub fn fg(&self, text: &str, fg: Color) -> String {
        self.paint(text, Some(fg), false)
    }

    pub fn bold(&self, text: &str) -> String {
        self.paint(text, None, true)
    }
}

/// Colour decision from what `Style::detect` found about the environment
pub fn colors_enabled(disabled: bool, is_tty: bool, term_supports_color: bool) -> bool {
    !disabled && is_tty && term_supports_color
}

/// Map a `term` palette index to its SGR foreground code
fn sgr_foreground(c: Color) -> u32 {
    if c < 8 { 30 + c } else { 90 + (c - 8) % 8 }
}

//
// Values
//

/// Round `fraction * 100` half-up to whole percentage points
pub fn percent_points(fraction: f64) -> i64 {
    (fraction * 100.0 + 0.5).floor() as i64
}

/// Format a fraction as a whole percentage, e.g. `0.5` -> `"50%"`
pub fn to_percent(fraction: f64) -> String {
    format!("{}%", percent_points(fraction))
}

/// A value shown in the summary, tagged with how it may be compared
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Metric {
    /// Whole percentage points
    Percent(i64),
    /// Plain integral quantity (downloads, stars, ...)
    Count(i64),
    /// Free text; never diffed
    Text(String),
}

impl Metric {
    pub fn percent(fraction: f64) -> Self {
        Metric::Percent(percent_points(fraction))
    }

    pub fn count(n: u64) -> Self {
        Metric::Count(i64::try_from(n).unwrap_or(i64::MAX))
    }

    pub fn text(s: impl Into<String>) -> Self {
        Metric::Text(s.into())
    }

    /// Stand-in for data the report does not carry
    pub fn placeholder() -> Self {
        Metric::text("-")
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Metric::Percent(p) => write!(f, "{}%", p),
            Metric::Count(n) => write!(f, "{}", n),
            Metric::Text(s) => f.write_str(s),
        }
    }
}

//
// Diffs
//

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiffUnit {
    /// Difference of two percentages
    PercentagePoints,
    Plain,
}

/// Non-zero difference between a value and its reference
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Diff {
    pub delta: i64,
    pub unit: DiffUnit,
}

impl Diff {
    pub fn is_improvement(&self) -> bool {
        self.delta > 0
    }

    /// `+d` in green or `-d` in red, then `" pp"` for percentage points or
    /// three spaces so plain diffs line up with them
    pub fn render(&self, style: Style) -> String {
        let number = if self.is_improvement() {
            style.fg(&format!("+{}", self.delta), color::GREEN)
        } else {
            style.fg(&format!("-{}", self.delta.unsigned_abs()), color::RED)
        };
        match self.unit {
            DiffUnit::PercentagePoints => format!("{} pp", number),
            DiffUnit::Plain => format!("{}   ", number),
        }
    }
}

impl fmt::Display for Diff {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(Style::plain()))
    }
}

/// Difference of `value` against `reference`, or `None` when they are
/// equal or not comparable
pub fn compute_diff(value: &Metric, reference: &Metric) -> Option<Diff> {
    let (delta, unit) = match (value, reference) {
        (Metric::Percent(a), Metric::Percent(b)) => (a.saturating_sub(*b), DiffUnit::PercentagePoints),
        (Metric::Count(a), Metric::Count(b)) => (a.saturating_sub(*b), DiffUnit::Plain),
        _ => return None,
    };
    (delta != 0).then_some(Diff { delta, unit })
}

//
// Text Formatting Utilities
//

/// Remove CSI (`ESC [ ... final`) and OSC (`ESC ] ... BEL`/`ESC \`) sequences
pub fn strip_ansi(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut chars = s.chars().peekable();

    while let Some(c) = chars.next() {
        if c != '\x1b' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('[') => {
                for c in chars.by_ref() {
                    if ('@'..='~').contains(&c) {
                        break;
                    }
                }
            }
            Some(']') => {
                while let Some(c) = chars.next() {
                    if c == '\x07' {
                        break;
                    }
                    if c == '\x1b' && chars.peek() == Some(&'\\') {
                        chars.next();
                        break;
                    }
                }
            }
            // Two-character escape, or a trailing ESC
            _ => {}
        }
    }

    out
}

/// Display width of `s` ignoring escape sequences
pub fn visible_length(s: &str) -> usize {
    UnicodeWidthStr::width(strip_ansi(s).as_str())
}

/// Left-pad with spaces to a visible width; never truncates
pub fn pad_start(s: &str, width: usize) -> String {
    let visible = visible_length(s);
    if visible >= width {
        return s.to_string();
    }
    format!("{}{}", " ".repeat(width - visible), s)
}

/// Right-pad with spaces to a visible width; never truncates
pub fn pad_end(s: &str, width: usize) -> String {
    let visible = visible_length(s);
    if visible >= width {
        return s.to_string();
    }
    format!("{}{}", s, " ".repeat(width - visible))
}

//
// Table output
//

/// Writer for the summary table - configurable for color/plain text
pub struct TableWriter<W: Write> {
    writer: W,
    style: Style,
}

impl<W: Write> TableWriter<W> {
    pub fn new(writer: W, style: Style) -> Self {
        Self { writer, style }
    }

    pub fn style(&self) -> Style {
        self.style
    }

    /// Horizontal rule made of `ch`
    pub fn write_rule(&mut self, ch: char) -> io::Result<()> {
        let rule = ch.to_string().repeat(RULE_WIDTH);
        writeln!(self.writer, "{}", self.style.paint(&rule, Some(color::BRIGHT_BLACK), true))
    }

    pub fn write_banner(&mut self, title: &str) -> io::Result<()> {
        writeln!(self.writer, "{}", self.style.paint(title, Some(color::YELLOW), true))
    }

    /// Label, separator, right-aligned value and, when given, the diff
    pub fn write_row(&mut self, label: &str, value: &str, diff: Option<&str>) -> io::Result<()> {
        let separator = self.style.paint(LABEL_SEPARATOR, Some(color::BRIGHT_BLACK), true);
        write!(self.writer, "{}{}{}", pad_end(label, LABEL_WIDTH), separator, pad_start(value, VALUE_WIDTH))?;
        if let Some(d) = diff {
            write!(self.writer, " {}", pad_start(d, DIFF_WIDTH))?;
        }
        writeln!(self.writer)
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

#[cfg(test)]
#[path = "console_format_test.rs"]
mod console_format_test;
