use std::io::Write;

use crate::{input::InputArgs, logging::LogArgs, pattern_args::PatternArgs};

/// Args for the all command.
#[derive(clap::Args, Debug)]
pub struct AllArgs {
    #[clap(flatten)]
    pub logging: LogArgs,

    #[command(flatten)]
    pattern: PatternArgs,

    #[command(flatten)]
    input: InputArgs,

    /// Prefix each match with its UTF-16 `start..end` range.
    #[arg(long)]
    utf16_ranges: bool,
}

impl AllArgs {
    pub fn write_results<W: Write>(
        &self,
        out: &mut W,
    ) -> Result<bool, Box<dyn std::error::Error>> {
        let facade = self.pattern.build()?;
        let options = self.pattern.match_options();

        let mut any = false;
        for input in self.input.read_inputs()? {
            if !self.utf16_ranges {
                for m in facade.all_matches(&input, options) {
                    any = true;
                    writeln!(out, "{m}")?;
                }
                continue;
            }

            for span in facade.match_spans(&input, options) {
                let Some(range) = span.utf16_range(&input) else {
                    return Err(format!("span {:?} is not on a char boundary", span.range()).into());
                };
                any = true;
                writeln!(
                    out,
                    "{}..{}\t{}",
                    range.start,
                    range.end,
                    &input[span.range()]
                )?;
            }
        }
        Ok(any)
    }
}
