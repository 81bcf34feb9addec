//! Configuration types for the walker

/// Configuration for walking behavior.
#[derive(Debug, Clone)]
pub struct WalkerConfig {
    /// Descend into subfolders of the given folders.
    pub recurse: bool,
    /// Maximum number of folder levels to descend below each root.
    /// `None` means unlimited.
    pub max_depth: Option<usize>,
    /// Glob patterns matched against entry names; matches are skipped.
    pub ignore_patterns: Vec<String>,
}

impl WalkerConfig {
    /// Whether a subfolder `depth` levels below its root should be visited.
    pub fn descends_into(&self, depth: usize) -> bool {
        self.recurse && self.max_depth.is_none_or(|max| depth <= max)
    }
}

impl Default for WalkerConfig {
    fn default() -> Self {
        Self {
            recurse: true,
            max_depth: None,
            ignore_patterns: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_descends_everywhere() {
        let config = WalkerConfig::default();
        assert!(config.descends_into(1));
        assert!(config.descends_into(10_000));
    }

    #[test]
    fn test_no_recurse_wins_over_depth() {
        let config = WalkerConfig {
            recurse: false,
            max_depth: Some(5),
            ..Default::default()
        };
        assert!(!config.descends_into(1));
    }

    #[test]
    fn test_depth_cap() {
        let config = WalkerConfig {
            max_depth: Some(2),
            ..Default::default()
        };
        assert!(config.descends_into(1));
        assert!(config.descends_into(2));
        assert!(!config.descends_into(3));
    }
}
