//! Classification of filesystem entries

use std::fs;
use std::path::Path;

/// What a path turned out to be when the walker looked at it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    File { size: u64 },
    Folder,
    /// Missing, a broken link, or a special file such as a device or socket.
    Other,
}

impl NodeKind {
    /// Classify `path`, following symbolic links.
    pub fn of(path: &Path) -> Self {
        match fs::metadata(path) {
            Ok(meta) if meta.is_dir() => NodeKind::Folder,
            Ok(meta) if meta.is_file() => NodeKind::File { size: meta.len() },
            _ => NodeKind::Other,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_classify_file_folder_missing() {
        let dir = TempDir::new().unwrap();
        let file = dir.path().join("data.bin");
        fs::write(&file, [0u8; 12]).unwrap();

        assert_eq!(NodeKind::of(dir.path()), NodeKind::Folder);
        assert_eq!(NodeKind::of(&file), NodeKind::File { size: 12 });
        assert_eq!(NodeKind::of(&dir.path().join("missing")), NodeKind::Other);
    }

    #[test]
    #[cfg(unix)]
    fn test_classify_broken_link_is_other() {
        let dir = TempDir::new().unwrap();
        let link = dir.path().join("dangling");
        std::os::unix::fs::symlink("nowhere", &link).unwrap();

        assert_eq!(NodeKind::of(&link), NodeKind::Other);
    }
}
