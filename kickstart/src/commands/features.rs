use clap::Args;
use eyre::Result;

use crate::{
    ops,
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct FeaturesCommand {}

impl FeaturesCommand {
    pub fn run(&self) -> Result<()> {
        ops::features().render(&mut TerminalOutput::new());
        Ok(())
    }
}
