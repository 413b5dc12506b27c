use stderrlog::{LogLevelNum, Timestamp};

/// Crates whose log records are shown.
const LOG_MODULES: &[&str] = &["rxf", "regex_facade"];

/// Logging setup arg group.
#[derive(clap::Args, Debug)]
pub struct LogArgs {
    /// Silence log messages.
    #[clap(short, long)]
    pub quiet: bool,

    /// Raise log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Enable timestamped logging.
    #[clap(long)]
    pub ts: bool,
}

/// Map a verbosity count onto a level, starting from `base`.
fn log_level(
    base: u8,
    verbose: u8,
) -> LogLevelNum {
    match base.saturating_add(verbose) {
        0 => LogLevelNum::Off,
        1 => LogLevelNum::Error,
        2 => LogLevelNum::Warn,
        3 => LogLevelNum::Info,
        4 => LogLevelNum::Debug,
        _ => LogLevelNum::Trace,
    }
}

impl LogArgs {
    /// Install the stderr logger.
    ///
    /// `base` is the level used without `-v`; warnings (level 2) by default,
    /// so engine runtime failures are visible.
    pub fn setup_logging(
        &self,
        base: u8,
    ) -> Result<(), Box<dyn std::error::Error>> {
        stderrlog::new()
            .modules(LOG_MODULES.iter().copied())
            .quiet(self.quiet)
            .verbosity(log_level(base, self.verbose))
            .timestamp(if self.ts {
                Timestamp::Second
            } else {
                Timestamp::Off
            })
            .init()?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_level() {
        assert!(matches!(log_level(0, 0), LogLevelNum::Off));
        assert!(matches!(log_level(2, 0), LogLevelNum::Warn));
        assert!(matches!(log_level(2, 1), LogLevelNum::Info));
        assert!(matches!(log_level(2, 2), LogLevelNum::Debug));
        assert!(matches!(log_level(2, 200), LogLevelNum::Trace));
    }
}
