use regex_facade::{
    EngineFlag,
    EngineOptions,
    MatchFlag,
    MatchOptions,
    RegexFacade,
    RegexPattern,
};

/// Engine selection for the pattern.
#[derive(Debug, Clone, Copy, Default, clap::ValueEnum)]
pub enum EngineChoice {
    /// Try `regex`, fall back to `fancy_regex`.
    #[default]
    Adaptive,

    /// Only the `regex` engine.
    Basic,

    /// Only the `fancy_regex` engine.
    Fancy,
}

/// Pattern and engine flag arg group.
#[derive(clap::Args, Debug)]
pub struct PatternArgs {
    /// The regex pattern.
    pattern: String,

    /// Which engine compiles the pattern.
    #[arg(long, value_enum, default_value_t)]
    engine: EngineChoice,

    /// Match case-insensitively.
    #[arg(short = 'i', long)]
    case_insensitive: bool,

    /// Let `^` and `$` match at line boundaries.
    #[arg(short = 'm', long)]
    multiline: bool,

    /// Let `.` match newlines.
    #[arg(short = 's', long)]
    dot_all: bool,

    /// Ignore whitespace and `#` comments in the pattern.
    #[arg(short = 'x', long)]
    extended: bool,

    /// Treat the pattern as a literal string.
    #[arg(long)]
    literal: bool,

    /// Matches must start at the beginning of the input, each following the last.
    #[arg(long)]
    anchored: bool,
}

impl PatternArgs {
    /// The engine flags selected on the command line.
    pub fn engine_options(&self) -> EngineOptions {
        let mut options = EngineOptions::empty();
        options.set(EngineFlag::CaseInsensitive, self.case_insensitive);
        options.set(EngineFlag::AnchorsMatchLines, self.multiline);
        options.set(EngineFlag::DotMatchesLineSeparators, self.dot_all);
        options.set(EngineFlag::AllowCommentsAndWhitespace, self.extended);
        options.set(EngineFlag::IgnoreMetacharacters, self.literal);
        options
    }

    /// The match flags selected on the command line.
    pub fn match_options(&self) -> MatchOptions {
        let mut options = MatchOptions::new();
        options.set(MatchFlag::Anchored, self.anchored);
        options
    }

    /// The engine-labeled pattern.
    pub fn regex_pattern(&self) -> RegexPattern {
        let pattern = self.pattern.clone();
        match self.engine {
            EngineChoice::Adaptive => RegexPattern::Adaptive(pattern),
            EngineChoice::Basic => RegexPattern::Basic(pattern),
            EngineChoice::Fancy => RegexPattern::Fancy(pattern),
        }
    }

    /// Compile the facade.
    pub fn build(&self) -> Result<RegexFacade, Box<dyn std::error::Error>> {
        let facade = RegexFacade::new(self.regex_pattern(), self.engine_options())?;
        log::info!(
            "compiled {:?} with {:?} engine",
            facade.pattern(),
            facade.engine()
        );
        Ok(facade)
    }
}

#[cfg(test)]
mod tests {
    use clap::Parser;
    use regex_facade::regex::RegexEngine;

    use super::*;

    #[derive(clap::Parser, Debug)]
    struct TestCli {
        #[command(flatten)]
        pattern: PatternArgs,
    }

    fn parse(args: &[&str]) -> PatternArgs {
        TestCli::parse_from(std::iter::once("rxf").chain(args.iter().copied())).pattern
    }

    #[test]
    fn test_flags_map_to_options() {
        let args = parse(&["-i", "-m", "--literal", "--anchored", "a.b"]);
        let options = args.engine_options();
        assert!(options.contains(EngineFlag::CaseInsensitive));
        assert!(options.contains(EngineFlag::AnchorsMatchLines));
        assert!(options.contains(EngineFlag::IgnoreMetacharacters));
        assert!(!options.contains(EngineFlag::DotMatchesLineSeparators));

        let match_options = args.match_options();
        assert!(match_options.contains(MatchFlag::Anchored));

        let facade = args.build().unwrap();
        assert!(facade.is_match("A.Bz", match_options));
        assert!(!facade.is_match("xA.B", match_options));
        assert!(!facade.is_match("aXb", match_options));

        assert!(parse(&["a"]).match_options().is_empty());
    }

    #[test]
    fn test_engine_choice() {
        let args = parse(&["--engine", "fancy", "abc"]);
        assert_eq!(args.regex_pattern(), RegexPattern::Fancy("abc".to_string()));
        assert_eq!(args.build().unwrap().engine(), Some(RegexEngine::Fancy));

        let args = parse(&["abc"]);
        assert_eq!(args.regex_pattern(), RegexPattern::Adaptive("abc".to_string()));

        let args = parse(&["--engine", "basic", r"(\w)\1"]);
        assert!(args.build().is_err());
    }
}
