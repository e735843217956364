use clap::Args;
use eyre::Result;

use crate::{
    ops,
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct VersionsCommand {}

impl VersionsCommand {
    pub fn run(&self) -> Result<()> {
        ops::versions().render(&mut TerminalOutput::new());
        Ok(())
    }
}
