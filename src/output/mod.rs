//! Report model and output formatting

pub mod formatter;
pub mod report;

pub use report::{MatchReport, ReportMetadata};
