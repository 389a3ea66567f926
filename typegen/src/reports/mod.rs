//! Report data structures for commands.
//!
//! Commands build reports, then render them to an Output target.

mod check;
mod generate;
mod output;

pub use check::{CheckReport, CollectionSummary};
pub use generate::{Destination, GenerateReport};
#[cfg(test)]
pub use output::BufferOutput;
pub use output::{Report, TerminalOutput};
