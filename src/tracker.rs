//! Bounded top-N tracking of the largest files seen during a walk
//!
//! `TopFiles` keeps at most `capacity` entries in an ordered set. Once it has
//! had to evict, the size of the evicted entry becomes a floor: anything
//! smaller is rejected without touching the set.

use std::collections::BTreeSet;

use serde::Serialize;

/// Number of files reported when the caller does not choose.
pub const DEFAULT_CAPACITY: usize = 5;
/// Smallest accepted report count.
pub const MIN_CAPACITY: usize = 1;
/// Largest accepted report count.
pub const MAX_CAPACITY: usize = 999;

/// One file considered for the result.
///
/// Field order matters: the derived ordering compares `size` first and then
/// `path`, so the first entry in a sorted set is the next one to evict.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct FileEntry {
    pub size: u64,
    pub path: String,
}

impl FileEntry {
    pub fn new(path: impl Into<String>, size: u64) -> Self {
        Self {
            size,
            path: path.into(),
        }
    }
}

/// Fixed-capacity collection of the largest entries observed so far.
#[derive(Debug, Clone)]
pub struct TopFiles {
    capacity: usize,
    entries: BTreeSet<FileEntry>,
    /// `None` until the first eviction; accept everything until then.
    threshold: Option<u64>,
}

impl TopFiles {
    /// Create an empty tracker. A capacity of zero is treated as one.
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity: capacity.max(MIN_CAPACITY),
            entries: BTreeSet::new(),
            threshold: None,
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Current rejection floor, if one has been established.
    pub fn threshold(&self) -> Option<u64> {
        self.threshold
    }

    /// Check whether a file of `size` bytes is worth inserting.
    ///
    /// Callers can use this to skip expensive work (such as resolving a
    /// canonical path) for files that would be rejected anyway.
    pub fn would_accept(&self, size: u64) -> bool {
        self.threshold.is_none_or(|floor| size >= floor)
    }

    /// Offer one file to the tracker.
    ///
    /// Returns `true` if the entry is retained after the call.
    pub fn observe(&mut self, path: impl Into<String>, size: u64) -> bool {
        if !self.would_accept(size) {
            return false;
        }

        let entry = FileEntry::new(path, size);
        self.entries.insert(entry.clone());

        // Sizes come off the front in non-decreasing order, so the last
        // evicted size is always a sound floor.
        while self.entries.len() > self.capacity {
            if let Some(evicted) = self.entries.pop_first() {
                self.threshold = Some(evicted.size);
            }
        }

        self.entries.contains(&entry)
    }

    /// Retained entries, smallest first.
    pub fn results(&self) -> Vec<FileEntry> {
        self.entries.iter().cloned().collect()
    }

    /// Iterate over retained entries, smallest first.
    pub fn iter(&self) -> impl Iterator<Item = &FileEntry> {
        self.entries.iter()
    }

    /// Consume the tracker, returning entries smallest first.
    pub fn into_results(self) -> Vec<FileEntry> {
        self.entries.into_iter().collect()
    }
}

impl Default for TopFiles {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}
