use std::path::PathBuf;
use std::time::Duration;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "staydel",
    version = env!("CARGO_PKG_VERSION"),
    about = "Deferred, reversible file deletion"
)]
pub struct Cli {
    /// Enable verbose progress output and debug logging.
    #[arg(long, short = 'v', default_value_t = false)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Mark files for deletion, or for keeping with --keep.
    ///
    /// Marked files are left untouched until a sweep reads the marks.
    Mark {
        /// Keep the files instead of deleting them.
        #[arg(long, short = 'k', default_value_t = false)]
        keep: bool,

        /// Files to mark.
        #[arg(required = true)]
        files: Vec<PathBuf>,
    },

    /// Mark every file named by the given list files for deletion.
    #[command(name = "mark-from")]
    MarkFrom {
        /// Files containing one path per line; blank lines and `#` comments
        /// are skipped.
        #[arg(required = true)]
        lists: Vec<PathBuf>,
    },

    /// Sweep directory trees, applying the accumulated marks.
    Sweep {
        /// Number of sweep rounds; 0 sweeps once, immediately.
        #[arg(long, default_value_t = 0)]
        repeats: u32,

        /// Length of one scheduling window, e.g. "15m" or "2h". Each round
        /// sweeps at a random offset within its window.
        #[arg(long, default_value = "1h", value_parser = humantime::parse_duration)]
        period: Duration,

        /// Age in months after which marker records are purged.
        #[arg(long, default_value_t = 6)]
        expiry_months: u32,

        /// Emit per-step progress lines.
        #[arg(long, default_value_t = false)]
        verbose: bool,

        /// Directories to sweep, or files listing directories to sweep.
        #[arg(required = true)]
        paths: Vec<PathBuf>,
    },

    /// Generate PowerShell wrapper scripts for scheduled sweeps.
    #[command(name = "gen-scripts")]
    GenScripts {
        /// Files listing the directories to generate wrappers for.
        #[arg(required = true)]
        lists: Vec<PathBuf>,
    },
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_mark_defaults_to_delete() {
        let cli = Cli::parse_from(["staydel", "mark", "a.txt", "b.txt"]);

        let Command::Mark { keep, files } = cli.command else {
            panic!("expected mark command");
        };
        assert!(!keep);
        assert_eq!(files, vec![PathBuf::from("a.txt"), PathBuf::from("b.txt")]);
    }

    #[test]
    fn test_mark_keep_flag() {
        let cli = Cli::parse_from(["staydel", "mark", "--keep", "a.txt"]);

        let Command::Mark { keep, .. } = cli.command else {
            panic!("expected mark command");
        };
        assert!(keep);
    }

    #[test]
    fn test_sweep_parses_period_and_repeats() {
        let cli = Cli::parse_from([
            "staydel", "sweep", "--repeats", "3", "--period", "15m", "/data",
        ]);

        let Command::Sweep {
            repeats,
            period,
            expiry_months,
            paths,
            ..
        } = cli.command
        else {
            panic!("expected sweep command");
        };
        assert_eq!(repeats, 3);
        assert_eq!(period, Duration::from_secs(15 * 60));
        assert_eq!(expiry_months, 6);
        assert_eq!(paths, vec![PathBuf::from("/data")]);
    }

    #[test]
    fn test_sweep_requires_at_least_one_path() {
        assert!(Cli::try_parse_from(["staydel", "sweep"]).is_err());
    }

    #[test]
    fn test_gen_scripts_takes_list_files() {
        let cli = Cli::parse_from(["staydel", "gen-scripts", "roots.txt"]);

        let Command::GenScripts { lists } = cli.command else {
            panic!("expected gen-scripts command");
        };
        assert_eq!(lists, vec![PathBuf::from("roots.txt")]);
    }
}
