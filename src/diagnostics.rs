//! Non-fatal events reported while walking
//!
//! Nothing the walker runs into is fatal. Each problem becomes a `Diagnostic`
//! handed to a `DiagnosticSink`, and the walk carries on. The CLI writes them
//! to stderr so the report on stdout can be captured on its own.

use std::fmt;
use std::io::Write;
use std::path::PathBuf;

use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

/// Something worth telling the user about during a walk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Diagnostic {
    /// A folder is about to be enumerated.
    ScanningFolder(PathBuf),
    /// A folder could not be listed and was treated as empty.
    ProtectedFolder { path: PathBuf, reason: String },
    /// A subfolder was skipped because recursion is off or the depth cap was hit.
    IgnoringSubfolder(PathBuf),
    /// A symbolic link to a folder was not followed.
    LinkedFolder(PathBuf),
    /// A path argument was neither a regular file nor a folder.
    NotFileOrFolder(PathBuf),
}

impl Diagnostic {
    /// Progress lines are informational; everything else is a warning.
    pub fn is_warning(&self) -> bool {
        !matches!(self, Diagnostic::ScanningFolder(_))
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Diagnostic::ScanningFolder(path) => write!(f, "Scanning folder: {}", path.display()),
            Diagnostic::ProtectedFolder { path, reason } => {
                write!(f, "Protected folder: {} ({})", path.display(), reason)
            }
            Diagnostic::IgnoringSubfolder(path) => {
                write!(f, "Ignoring subfolder: {}", path.display())
            }
            Diagnostic::LinkedFolder(path) => {
                write!(f, "Ignoring linked folder: {}", path.display())
            }
            Diagnostic::NotFileOrFolder(path) => {
                write!(f, "Not a file or folder: {}", path.display())
            }
        }
    }
}

/// Receiver for walk diagnostics.
pub trait DiagnosticSink {
    fn emit(&mut self, diagnostic: Diagnostic);
}

/// Writes diagnostics to stderr, warnings highlighted when color is on.
pub struct StderrSink {
    stream: StandardStream,
    quiet: bool,
}

impl StderrSink {
    pub fn new(use_color: bool) -> Self {
        let color_choice = if use_color {
            ColorChoice::Auto
        } else {
            ColorChoice::Never
        };
        Self {
            stream: StandardStream::stderr(color_choice),
            quiet: false,
        }
    }

    /// Drop "Scanning folder" progress lines; warnings still get through.
    pub fn quiet(mut self, quiet: bool) -> Self {
        self.quiet = quiet;
        self
    }

    fn write_line(&mut self, diagnostic: &Diagnostic) -> std::io::Result<()> {
        if diagnostic.is_warning() {
            let mut spec = ColorSpec::new();
            spec.set_fg(Some(Color::Yellow));
            self.stream.set_color(&spec)?;
            write!(self.stream, "{}", diagnostic)?;
            self.stream.reset()?;
            writeln!(self.stream)
        } else {
            writeln!(self.stream, "{}", diagnostic)
        }
    }
}

impl DiagnosticSink for StderrSink {
    fn emit(&mut self, diagnostic: Diagnostic) {
        if self.quiet && !diagnostic.is_warning() {
            return;
        }
        // A closed stderr must not stop the walk.
        let _ = self.write_line(&diagnostic);
    }
}

/// Keeps every diagnostic in memory.
#[derive(Debug, Default)]
pub struct CollectSink {
    pub diagnostics: Vec<Diagnostic>,
}

impl CollectSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Warnings only, in the order they were emitted.
    pub fn warnings(&self) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics.iter().filter(|d| d.is_warning())
    }
}

impl DiagnosticSink for CollectSink {
    fn emit(&mut self, diagnostic: Diagnostic) {
        self.diagnostics.push(diagnostic);
    }
}

/// Discards everything.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullSink;

impl DiagnosticSink for NullSink {
    fn emit(&mut self, _diagnostic: Diagnostic) {}
}
