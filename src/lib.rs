//! Biggest - find the largest files in folders and subfolders

pub mod diagnostics;
pub mod output;
pub mod tracker;
pub mod walker;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use diagnostics::{CollectSink, Diagnostic, DiagnosticSink, NullSink, StderrSink};
pub use output::{OutputConfig, ScanReport, format_number, print_report, write_report};
pub use tracker::{DEFAULT_CAPACITY, FileEntry, MAX_CAPACITY, MIN_CAPACITY, TopFiles};
pub use walker::{NodeKind, ScanState, Walker, WalkerConfig};
