use std::io::Write;

use crate::{input::InputArgs, logging::LogArgs, pattern_args::PatternArgs};

/// Args for the groups command.
#[derive(clap::Args, Debug)]
pub struct GroupsArgs {
    #[clap(flatten)]
    pub logging: LogArgs,

    #[command(flatten)]
    pattern: PatternArgs,

    #[command(flatten)]
    input: InputArgs,
}

impl GroupsArgs {
    pub fn write_results<W: Write>(
        &self,
        out: &mut W,
    ) -> Result<bool, Box<dyn std::error::Error>> {
        let facade = self.pattern.build()?;
        let options = self.pattern.match_options();

        let mut any = false;
        for input in self.input.read_inputs()? {
            let groups = facade.first_match_groups(&input, options);
            if groups.is_empty() {
                log::debug!("no match in {input:?}");
                continue;
            }
            any = true;
            for group in groups {
                writeln!(out, "{group}")?;
            }
        }
        Ok(any)
    }
}
