//! Argument parsing and report generation

pub mod parser;
pub mod report;

pub use report::{comparison_report, ComparisonReport, ReportRow};
