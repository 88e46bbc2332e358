//! Command-line options.

use clap::Parser;
use emptrack_core::activity::{DEFAULT_ACTIVITY_THRESHOLD, DEFAULT_WINDOW_MONTHS};
use emptrack_core::ActivityPolicy;
use std::path::PathBuf;

/// Seed the staffing store and print comparative reports.
#[derive(Debug, Parser)]
#[command(name = "emptrack", version, about)]
pub struct Cli {
    /// SQLite database file; created when missing.
    #[arg(long, default_value = "emptrack.db")]
    pub db: PathBuf,

    /// Employees need strictly more recent projects than this.
    #[arg(long, default_value_t = DEFAULT_ACTIVITY_THRESHOLD)]
    pub threshold: u32,

    /// Trailing window length in calendar months.
    #[arg(long, default_value_t = DEFAULT_WINDOW_MONTHS)]
    pub window_months: u32,

    /// Absolute directory for rolling log files. Logging is off when unset.
    #[arg(long)]
    pub log_dir: Option<String>,

    /// trace|debug|info|warn|error. Defaults by build mode.
    #[arg(long, requires = "log_dir")]
    pub log_level: Option<String>,
}

impl Cli {
    pub fn policy(&self) -> ActivityPolicy {
        ActivityPolicy {
            threshold: self.threshold,
            window_months: self.window_months,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Cli;
    use clap::Parser;
    use emptrack_core::ActivityPolicy;
    use std::path::PathBuf;

    #[test]
    fn defaults_match_demo_policy() {
        let cli = Cli::try_parse_from(["emptrack"]).unwrap();
        assert_eq!(cli.db, PathBuf::from("emptrack.db"));
        assert_eq!(cli.policy(), ActivityPolicy::default());
        assert!(cli.log_dir.is_none());
    }

    #[test]
    fn flags_override_policy() {
        let cli = Cli::try_parse_from([
            "emptrack",
            "--db",
            "/tmp/staff.db",
            "--threshold",
            "1",
            "--window-months",
            "12",
        ])
        .unwrap();
        assert_eq!(cli.db, PathBuf::from("/tmp/staff.db"));
        assert_eq!(
            cli.policy(),
            ActivityPolicy {
                threshold: 1,
                window_months: 12,
            }
        );
    }

    #[test]
    fn log_level_needs_log_dir() {
        assert!(Cli::try_parse_from(["emptrack", "--log-level", "debug"]).is_err());

        let cli = Cli::try_parse_from([
            "emptrack",
            "--log-dir",
            "/tmp/emptrack-logs",
            "--log-level",
            "debug",
        ])
        .unwrap();
        assert_eq!(cli.log_level.as_deref(), Some("debug"));
    }

    #[test]
    fn negative_threshold_is_rejected() {
        assert!(Cli::try_parse_from(["emptrack", "--threshold", "-1"]).is_err());
    }
}
