//! Test harness for biggest integration tests

use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};
use tempfile::TempDir;

pub struct TestTree {
    dir: TempDir,
}

impl TestTree {
    pub fn new() -> Self {
        let dir = TempDir::new().expect("Failed to create temp dir");
        Self { dir }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn add_file(&self, path: &str, size: u64) -> PathBuf {
        let full_path = self.dir.path().join(path);
        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent dirs");
        }
        let file = fs::File::create(&full_path).expect("Failed to create file");
        file.set_len(size).expect("Failed to size file");
        full_path
    }

    pub fn add_dir(&self, path: &str) -> PathBuf {
        let full_path = self.dir.path().join(path);
        fs::create_dir_all(&full_path).expect("Failed to create dir");
        full_path
    }

    /// Canonical path string, as it appears in the report.
    pub fn canonical(&self, path: &str) -> String {
        fs::canonicalize(self.dir.path().join(path))
            .expect("Failed to canonicalize")
            .to_string_lossy()
            .into_owned()
    }
}

pub fn run_biggest(dir: &Path, args: &[&str]) -> (String, String, bool) {
    let binary = env!("CARGO_BIN_EXE_biggest");
    let output = Command::new(binary)
        .args(args)
        .current_dir(dir)
        .env("NO_COLOR", "1")
        .output()
        .expect("Failed to run biggest");

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let success = output.status.success();

    (stdout, stderr, success)
}

/// Run with stdout redirected; returns stderr and the exit code.
pub fn run_biggest_with_stdout(dir: &Path, args: &[&str], stdout: Stdio) -> (String, Option<i32>) {
    let binary = env!("CARGO_BIN_EXE_biggest");
    let output = Command::new(binary)
        .args(args)
        .current_dir(dir)
        .env("NO_COLOR", "1")
        .stdout(stdout)
        .output()
        .expect("Failed to run biggest");

    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    (stderr, output.status.code())
}

/// Lines of the report that name a file, in printed order.
pub fn report_lines(stdout: &str) -> Vec<&str> {
    stdout
        .lines()
        .filter(|line| line.contains(" bytes for "))
        .map(str::trim)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_harness_creates_temp_dir() {
        let tree = TestTree::new();
        assert!(tree.path().exists());
    }

    #[test]
    fn test_harness_add_file_with_size() {
        let tree = TestTree::new();
        let file_path = tree.add_file("nested/data.bin", 1234);
        assert_eq!(fs::metadata(file_path).unwrap().len(), 1234);
    }
}
