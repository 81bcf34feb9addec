//! Shared utility functions for walking

use std::ffi::OsStr;
use std::fs;
use std::path::Path;

use glob::Pattern;

/// Compiled `--ignore` patterns.
///
/// A name is ignored when it equals a pattern literally or matches it as a
/// glob. Patterns that fail to compile still match literally.
#[derive(Debug, Clone, Default)]
pub struct IgnoreSet {
    patterns: Vec<(String, Option<Pattern>)>,
}

impl IgnoreSet {
    pub fn new(patterns: &[String]) -> Self {
        Self {
            patterns: patterns
                .iter()
                .map(|p| (p.clone(), Pattern::new(p).ok()))
                .collect(),
        }
    }

    /// Check an entry name (not a full path) against the patterns.
    pub fn matches(&self, name: &OsStr) -> bool {
        if self.patterns.is_empty() {
            return false;
        }
        let name = name.to_string_lossy();
        self.patterns.iter().any(|(raw, compiled)| {
            *raw == name || compiled.as_ref().is_some_and(|p| p.matches(&name))
        })
    }
}

/// Canonical absolute form of `path`, or the path as given if that fails.
pub fn resolve_path(path: &Path) -> String {
    match fs::canonicalize(path) {
        Ok(full) => full.to_string_lossy().into_owned(),
        Err(_) => path.to_string_lossy().into_owned(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_ignore_set_glob_syntax() {
        let set = IgnoreSet::new(&[
            "*.iso".to_string(),
            "cache?".to_string(),
            "[ab].log".to_string(),
        ]);
        assert!(set.matches(OsStr::new("ubuntu.iso")));
        assert!(!set.matches(OsStr::new("ubuntu.img")));
        assert!(set.matches(OsStr::new("cache1")));
        assert!(!set.matches(OsStr::new("cache12")));
        assert!(set.matches(OsStr::new("a.log")));
        assert!(!set.matches(OsStr::new("c.log")));
    }

    #[test]
    fn test_ignore_set_literal_and_glob() {
        let set = IgnoreSet::new(&["node_modules".to_string(), "*.tmp".to_string()]);
        assert!(set.matches(OsStr::new("node_modules")));
        assert!(set.matches(OsStr::new("scratch.tmp")));
        assert!(!set.matches(OsStr::new("src")));
    }

    #[test]
    fn test_ignore_set_invalid_pattern_matches_literally() {
        let set = IgnoreSet::new(&["[oops".to_string()]);
        assert!(set.matches(OsStr::new("[oops")));
        assert!(!set.matches(OsStr::new("oops")));
    }

    #[test]
    fn test_empty_ignore_set() {
        let set = IgnoreSet::default();
        assert!(!set.matches(OsStr::new("anything")));
    }

    #[test]
    fn test_resolve_existing_path_is_absolute() {
        let dir = TempDir::new().unwrap();
        let file = dir.path().join("f.txt");
        fs::write(&file, "x").unwrap();

        let resolved = resolve_path(&file);
        assert!(Path::new(&resolved).is_absolute());
        assert!(resolved.ends_with("f.txt"));
    }

    #[test]
    fn test_resolve_missing_path_falls_back() {
        let resolved = resolve_path(Path::new("no/such/file.bin"));
        assert_eq!(resolved, "no/such/file.bin");
    }
}
