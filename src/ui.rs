/// User interface and status output utilities
///
/// This module handles:
/// - Colored terminal text on stderr
/// - Error and warning message formatting
use std::io::Write;

const PROGRAM: &str = env!("CARGO_PKG_NAME");

/// Print colored text to stderr, with fallback to plain text
fn eprint_color(s: &str, fg: term::color::Color) {
    if !really_print_color(s, fg) {
        eprint!("{}", s);
    }

    fn really_print_color(s: &str, fg: term::color::Color) -> bool {
        match term::stderr() {
            Some(mut t) => {
                if t.fg(fg).is_err() {
                    return false;
                }
                let _ = t.attr(term::Attr::Bold);
                if write!(t, "{}", s).is_err() {
                    return false;
                }
                let _ = t.reset();
                true
            }
            None => false,
        }
    }
}

/// Print an error message with a colored program-name prefix
pub fn print_error(msg: &str) {
    eprint_color(PROGRAM, term::color::BRIGHT_RED);
    eprintln!(": {}", msg);
}

/// Print a warning to stderr and keep going
pub fn print_warning(msg: &str) {
    eprint_color("Warning", term::color::BRIGHT_YELLOW);
    eprintln!(": {}", msg);
}
