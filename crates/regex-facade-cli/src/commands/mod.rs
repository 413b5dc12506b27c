mod all;
mod groups;
mod is_match;

use std::io::Write;

use crate::logging::LogArgs;

/// Subcommands for rxf.
///
/// Each subcommand reports whether anything matched; `main` turns that into
/// the exit status.
#[derive(clap::Subcommand, Debug)]
pub enum Commands {
    /// Print `true`/`false` for each input.
    Match(is_match::MatchArgs),

    /// Print every match in each input, one per line.
    All(all::AllArgs),

    /// Print the groups of the first match in each input, one per line.
    Groups(groups::GroupsArgs),
}

impl Commands {
    fn logging(&self) -> &LogArgs {
        match self {
            Commands::Match(cmd) => &cmd.logging,
            Commands::All(cmd) => &cmd.logging,
            Commands::Groups(cmd) => &cmd.logging,
        }
    }

    /// Run the subcommand against stdout.
    pub fn run(&self) -> Result<bool, Box<dyn std::error::Error>> {
        self.logging().setup_logging(2)?;
        self.write_results(&mut std::io::stdout().lock())
    }

    /// Write the subcommand's output to `out`.
    ///
    /// ## Returns
    /// Whether anything matched.
    pub fn write_results<W: Write>(
        &self,
        out: &mut W,
    ) -> Result<bool, Box<dyn std::error::Error>> {
        match self {
            Commands::Match(cmd) => cmd.write_results(out),
            Commands::All(cmd) => cmd.write_results(out),
            Commands::Groups(cmd) => cmd.write_results(out),
        }
    }
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use crate::Args;

    fn run_captured(args: &[&str]) -> (bool, String) {
        let args = Args::parse_from(std::iter::once("rxf").chain(args.iter().copied()));
        let mut out = Vec::new();
        let matched = args.command.write_results(&mut out).unwrap();
        (matched, String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_match_command() {
        assert_eq!(
            run_captured(&["match", "b", "abc", "xyz"]),
            (true, "true\nfalse\n".to_string())
        );
        assert_eq!(
            run_captured(&["match", "q", "abc"]),
            (false, "false\n".to_string())
        );
    }

    #[test]
    fn test_all_command() {
        assert_eq!(
            run_captured(&["all", "X", "aXbXc", "abc"]),
            (true, "X\nX\n".to_string())
        );
        assert_eq!(
            run_captured(&["all", "--anchored", r"\d", "12a3"]),
            (true, "1\n2\n".to_string())
        );
        assert_eq!(run_captured(&["all", "X", "abc"]), (false, String::new()));
    }

    #[test]
    fn test_all_command_utf16_ranges() {
        assert_eq!(
            run_captured(&["all", "--utf16-ranges", r"\p{So}", "a\u{1f600}b\u{2603}"]),
            (true, "1..3\t\u{1f600}\n4..5\t\u{2603}\n".to_string())
        );
    }

    #[test]
    fn test_groups_command() {
        assert_eq!(
            run_captured(&["groups", r"(\d+)-(\d+)", "10-20", "none"]),
            (true, "10-20\n10\n20\n".to_string())
        );
        assert_eq!(
            run_captured(&["groups", r"(\d+)-(\d+)", "none"]),
            (false, String::new())
        );
    }

    #[test]
    fn test_bad_pattern_is_an_error() {
        let args = crate::Args::parse_from(["rxf", "match", "(", "abc"]);
        assert!(args.command.write_results(&mut Vec::new()).is_err());
    }
}
