use std::io::Write;

use crate::{input::InputArgs, logging::LogArgs, pattern_args::PatternArgs};

/// Args for the match command.
#[derive(clap::Args, Debug)]
pub struct MatchArgs {
    #[clap(flatten)]
    pub logging: LogArgs,

    #[command(flatten)]
    pattern: PatternArgs,

    #[command(flatten)]
    input: InputArgs,
}

impl MatchArgs {
    pub fn write_results<W: Write>(
        &self,
        out: &mut W,
    ) -> Result<bool, Box<dyn std::error::Error>> {
        let facade = self.pattern.build()?;
        let options = self.pattern.match_options();

        let mut any = false;
        for input in self.input.read_inputs()? {
            let matched = facade.is_match(&input, options);
            any |= matched;
            writeln!(out, "{matched}")?;
        }
        Ok(any)
    }
}
