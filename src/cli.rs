use crate::report::DEFAULT_SCORE_FILE;
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug, Clone)]
#[command(name = "npms-score")]
#[command(about = "Show the npms.io score of an npm package, optionally saved and compared with an earlier report")]
#[command(version)]
pub struct CliArgs {
    /// Name of the package to score. Uses the package of the current directory when omitted
    #[arg(value_name = "PACKAGE")]
    pub package: Option<String>,

    /// Save the report to a file (default: package-score.json)
    /// Use the --save-report=FILE form when also giving a package name
    #[arg(long, short = 's', value_name = "FILE", num_args = 0..=1, default_missing_value = DEFAULT_SCORE_FILE)]
    pub save_report: Option<PathBuf>,

    /// Show differences against a saved report (default: package-score.json)
    #[arg(long, short = 'd', value_name = "FILE", num_args = 0..=1, default_missing_value = DEFAULT_SCORE_FILE)]
    pub diff: Option<PathBuf>,

    /// Commit the saved report with git
    #[arg(long, short = 'c', requires = "save_report")]
    pub commit: bool,

    /// Quiet mode: do not print the summary
    #[arg(long, short = 'q')]
    pub quiet: bool,

    /// Disable colored output (NO_COLOR is honored as well)
    #[arg(long)]
    pub no_color: bool,
}

impl CliArgs {
    /// Parse command-line arguments; usage errors exit with status 1
    pub fn parse_args() -> Self {
        let mut args = CliArgs::try_parse().unwrap_or_else(|e| {
            if !e.use_stderr() {
                // --help and --version
                e.exit();
            }
            let _ = e.print();
            std::process::exit(1);
        });
        args.package = args.package.map(|p| p.trim().to_string());
        args
    }

    /// Validate argument combinations
    pub fn validate(&self) -> Result<(), String> {
        if self.package.as_deref() == Some("") {
            return Err("Package name must not be empty".to_string());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(argv: &[&str]) -> Result<CliArgs, clap::Error> {
        CliArgs::try_parse_from(std::iter::once("npms-score").chain(argv.iter().copied()))
    }

    #[test]
    fn test_defaults() {
        let args = parse(&[]).unwrap();
        assert_eq!(args.package, None);
        assert_eq!(args.save_report, None);
        assert_eq!(args.diff, None);
        assert!(!args.commit && !args.quiet && !args.no_color);
    }

    #[test]
    fn test_optional_file_values() {
        let args = parse(&["--save-report", "--diff=old.json", "chalk"]).unwrap();
        assert_eq!(args.package.as_deref(), Some("chalk"));
        assert_eq!(args.save_report, Some(PathBuf::from(DEFAULT_SCORE_FILE)));
        assert_eq!(args.diff, Some(PathBuf::from("old.json")));
    }

    #[test]
    fn test_short_flags() {
        let args = parse(&["chalk", "-s", "-d", "-q"]).unwrap();
        assert_eq!(args.save_report, Some(PathBuf::from(DEFAULT_SCORE_FILE)));
        assert_eq!(args.diff, Some(PathBuf::from(DEFAULT_SCORE_FILE)));
        assert!(args.quiet);
    }

    #[test]
    fn test_commit_requires_save_report() {
        assert!(parse(&["--commit"]).is_err());
        assert!(parse(&["--save-report", "--commit"]).unwrap().commit);
    }

    #[test]
    fn test_validate_empty_package_fails() {
        let mut args = parse(&[]).unwrap();
        args.package = Some(String::new());
        assert!(args.validate().is_err());
        args.package = Some("chalk".to_string());
        assert!(args.validate().is_ok());
    }
}
