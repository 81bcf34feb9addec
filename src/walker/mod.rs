//! Filesystem walking that feeds the largest-file tracker
//!
//! The walker visits each path given on the command line, depth first. Folders
//! are enumerated (and recursed into when enabled), files are counted and
//! offered to the `TopFiles` tracker held in a `ScanState`.

mod config;
mod node;
mod state;
mod utils;
mod walker;

pub use config::WalkerConfig;
pub use node::NodeKind;
pub use state::ScanState;
pub use utils::{IgnoreSet, resolve_path};
pub use walker::Walker;
