//! Display module for formatting inspections as a JSON report.
pub mod report;
pub use report::*;
