//! Test utilities for building temporary folder trees.
//!
//! This module is only compiled for tests and benchmarks.

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A temporary folder tree for testing.
///
/// Files are created with an exact byte size so ranking can be asserted.
/// The tree is removed when dropped.
pub struct TestTree {
    dir: TempDir,
}

impl TestTree {
    /// Create a new empty temporary directory.
    pub fn new() -> Self {
        let dir = TempDir::new().expect("Failed to create temp dir");
        Self { dir }
    }

    /// Get the path to the temporary directory.
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Add a file of exactly `size` bytes.
    ///
    /// Creates parent directories as needed. The file is sparse where the
    /// platform allows it, so large sizes are cheap.
    pub fn add_file(&self, path: &str, size: u64) -> PathBuf {
        let full_path = self.dir.path().join(path);
        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent dirs");
        }
        let file = fs::File::create(&full_path).expect("Failed to create file");
        file.set_len(size).expect("Failed to set file length");
        full_path
    }

    /// Populate `count` files spread over `folders` subfolders with
    /// increasing sizes.
    pub fn populate(&self, count: usize, folders: usize) {
        let folders = folders.max(1);
        for i in 0..count {
            let rel = format!("dir_{}/file_{}.bin", i % folders, i);
            self.add_file(&rel, (i as u64 * 37) % 4096);
        }
    }
}

impl Default for TestTree {
    fn default() -> Self {
        Self::new()
    }
}
