//! Command-line argument definition and processing.

use std::path::PathBuf;

use clap::Parser;

/// Candidex - A fast, friendly TUI for browsing and filtering job candidates
#[derive(Parser, Debug)]
#[command(name = "candidex")]
#[command(version)]
#[command(about = "A fast, friendly TUI for browsing, searching and filtering job candidate records", long_about = None)]
pub struct Args {
    /// Path to the candidate dataset JSON file (default: bundled sample)
    #[arg(long)]
    pub data: Option<PathBuf>,

    /// Initial sort direction over registration date (descending, ascending)
    #[arg(long)]
    pub sort: Option<String>,

    /// Set the logging level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    pub log_level: String,

    /// Enable verbose output (equivalent to --log-level debug)
    #[arg(short, long)]
    pub verbose: bool,

    /// Validate the dataset file and exit without starting the TUI
    #[arg(long)]
    pub check_data: bool,
}

/// What: Handle command-line modes that bypass the TUI.
///
/// Inputs:
/// - `args`: Parsed command-line arguments
/// - `data_path`: Resolved dataset path
///
/// Output:
/// - `Some(exit_code)` when a CLI mode handled the invocation and the
///   process should exit; `None` to continue into the TUI.
#[must_use]
pub fn process_args(args: &Args, data_path: &std::path::Path) -> Option<i32> {
    if args.check_data {
        return Some(match crate::data::load_candidates(data_path) {
            Ok(cands) => {
                println!("{}: {} candidates", data_path.display(), cands.len());
                0
            }
            Err(e) => {
                eprintln!("{e}");
                1
            }
        });
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    /// What: Argument parsing accepts the supported flags
    ///
    /// - Input: Full flag set; empty invocation
    /// - Output: Fields populated; defaults otherwise
    fn args_parse_supported_flags() {
        let args = Args::parse_from([
            "candidex",
            "--data",
            "/tmp/c.json",
            "--sort",
            "ascending",
            "--log-level",
            "debug",
            "--check-data",
        ]);
        assert_eq!(args.data, Some(PathBuf::from("/tmp/c.json")));
        assert_eq!(args.sort.as_deref(), Some("ascending"));
        assert_eq!(args.log_level, "debug");
        assert!(args.check_data);
        assert!(!args.verbose);

        let args = Args::parse_from(["candidex"]);
        assert_eq!(args.data, None);
        assert_eq!(args.log_level, "info");
        assert!(!args.check_data);
    }

    #[test]
    /// What: check-data mode validates the bundled sample and reports failure
    ///
    /// - Input: --check-data against the sample, then a missing path
    /// - Output: Exit code 0, then 1; None without the flag
    fn args_process_check_data_mode() {
        let args = Args::parse_from(["candidex", "--check-data"]);
        let sample = crate::data::resolve_data_path(None, None);
        assert_eq!(process_args(&args, &sample), Some(0));
        assert_eq!(
            process_args(&args, std::path::Path::new("/nope.json")),
            Some(1)
        );

        let args = Args::parse_from(["candidex"]);
        assert_eq!(process_args(&args, &sample), None);
    }
}
