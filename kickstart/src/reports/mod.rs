//! Report data structures for commands.
//!
//! Commands build reports, then render them to an Output target.

mod catalogue;
mod explain;
mod generate;
mod output;

pub use catalogue::{FeatureEntry, FeaturesReport, VersionEntry, VersionsReport};
pub use explain::ExplainReport;
pub use generate::{
    ArchivedResult, GenerateReport, MaterializeResult, PreviewFile, PreviewResult, WrittenResult,
};
#[cfg(test)]
pub use output::BufferOutput;
pub use output::{Report, TerminalOutput};
