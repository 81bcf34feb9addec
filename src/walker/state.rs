//! Mutable state threaded through a walk

use crate::output::ScanReport;
use crate::tracker::TopFiles;

/// Tracker plus the file and folder counters for one run.
#[derive(Debug, Clone, Default)]
pub struct ScanState {
    pub tracker: TopFiles,
    pub total_files: u64,
    pub total_folders: u64,
}

impl ScanState {
    pub fn new(capacity: usize) -> Self {
        Self {
            tracker: TopFiles::new(capacity),
            total_files: 0,
            total_folders: 0,
        }
    }

    /// True when no file or folder was found at all.
    pub fn found_nothing(&self) -> bool {
        self.total_files == 0 && self.total_folders == 0
    }

    /// Record one regular file. Only files the tracker would accept pay for
    /// resolving their path.
    pub fn record_file<F>(&mut self, size: u64, resolve: F)
    where
        F: FnOnce() -> String,
    {
        self.total_files += 1;
        if self.tracker.would_accept(size) {
            self.tracker.observe(resolve(), size);
        }
    }

    pub fn record_folder(&mut self) {
        self.total_folders += 1;
    }

    pub fn into_report(self) -> ScanReport {
        ScanReport {
            total_files: self.total_files,
            total_folders: self.total_folders,
            largest: self.tracker.into_results(),
        }
    }
}
