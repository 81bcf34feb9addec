//! Walker - depth-first visit of files and folders

use std::fs;
use std::path::Path;

use crate::diagnostics::{Diagnostic, DiagnosticSink};

use super::config::WalkerConfig;
use super::node::NodeKind;
use super::state::ScanState;
use super::utils::{IgnoreSet, resolve_path};

/// Depth-first walker over file and folder arguments.
///
/// Problems with individual entries never stop the walk; they are reported
/// to the sink and the entry is skipped or treated as empty.
pub struct Walker {
    config: WalkerConfig,
    ignore: IgnoreSet,
}

impl Walker {
    pub fn new(config: WalkerConfig) -> Self {
        let ignore = IgnoreSet::new(&config.ignore_patterns);
        Self { config, ignore }
    }

    /// Visit every root in order.
    pub fn scan<P, S>(&self, roots: &[P], state: &mut ScanState, sink: &mut S)
    where
        P: AsRef<Path>,
        S: DiagnosticSink + ?Sized,
    {
        for root in roots {
            self.visit(root.as_ref(), state, sink);
        }
    }

    /// Visit one file or folder given directly by the caller.
    ///
    /// A root that is a symbolic link to a folder is followed.
    pub fn visit<S>(&self, target: &Path, state: &mut ScanState, sink: &mut S)
    where
        S: DiagnosticSink + ?Sized,
    {
        match NodeKind::of(target) {
            NodeKind::Folder => self.visit_folder(target, 0, state, sink),
            NodeKind::File { size } => visit_file(target, size, state),
            NodeKind::Other => sink.emit(Diagnostic::NotFileOrFolder(target.to_path_buf())),
        }
    }

    fn visit_folder<S>(&self, path: &Path, depth: usize, state: &mut ScanState, sink: &mut S)
    where
        S: DiagnosticSink + ?Sized,
    {
        state.record_folder();
        sink.emit(Diagnostic::ScanningFolder(path.to_path_buf()));

        let entries = match fs::read_dir(path) {
            Ok(e) => e,
            Err(e) => {
                sink.emit(Diagnostic::ProtectedFolder {
                    path: path.to_path_buf(),
                    reason: e.to_string(),
                });
                return;
            }
        };

        // Enumeration order is whatever the OS returns.
        for entry in entries.filter_map(|e| e.ok()) {
            if self.ignore.matches(&entry.file_name()) {
                continue;
            }

            let child = entry.path();
            let is_link = entry.file_type().is_ok_and(|t| t.is_symlink());

            match NodeKind::of(&child) {
                NodeKind::Folder if is_link => sink.emit(Diagnostic::LinkedFolder(child)),
                NodeKind::Folder => {
                    if self.config.descends_into(depth + 1) {
                        self.visit_folder(&child, depth + 1, state, sink);
                    } else {
                        sink.emit(Diagnostic::IgnoringSubfolder(child));
                    }
                }
                NodeKind::File { size } => visit_file(&child, size, state),
                // Vanished, special, or a dangling link: skip without comment.
                NodeKind::Other => {}
            }
        }
    }
}

impl Default for Walker {
    fn default() -> Self {
        Self::new(WalkerConfig::default())
    }
}

fn visit_file(path: &Path, size: u64, state: &mut ScanState) {
    state.record_file(size, || resolve_path(path));
}
