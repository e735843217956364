use clap::Args;
use eyre::Result;
use kickstart_features::BuildSystem;

use super::UnwrapOrExit;
use crate::{
    ops,
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct ExplainCommand {
    /// Feature id, see `kickstart features`
    pub feature: String,

    /// Build system whose base feature is shown
    #[arg(long, default_value_t = BuildSystem::Gradle)]
    pub build: BuildSystem,
}

impl ExplainCommand {
    pub fn run(&self) -> Result<()> {
        let report = ops::explain(&self.feature, self.build).unwrap_or_exit();
        report.render(&mut TerminalOutput::new());
        Ok(())
    }
}
