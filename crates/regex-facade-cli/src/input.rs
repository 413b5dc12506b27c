use std::io::{BufRead, BufReader};

/// Input text arg group.
#[derive(clap::Args, Debug)]
pub struct InputArgs {
    /// Input strings; stdin lines are read when none are given.
    inputs: Vec<String>,
}

impl InputArgs {
    /// Collect the inputs to match against.
    pub fn read_inputs(&self) -> Result<Vec<String>, Box<dyn std::error::Error>> {
        if !self.inputs.is_empty() {
            return Ok(self.inputs.clone());
        }

        log::debug!("reading inputs from stdin");
        let reader = BufReader::new(std::io::stdin().lock());
        let lines = reader.lines().collect::<Result<Vec<_>, _>>()?;
        Ok(lines)
    }
}
