//! CLI entry point for biggest

use std::io::IsTerminal;
use std::path::PathBuf;
use std::process;

use biggest::{
    DEFAULT_CAPACITY, MAX_CAPACITY, MIN_CAPACITY, OutputConfig, ScanState, StderrSink, Walker,
    WalkerConfig, print_report,
};
use clap::{Parser, ValueEnum};

/// Color output mode
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
enum ColorMode {
    /// Auto-detect based on terminal and environment
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

/// Determine whether to use color on a stream, given whether it is a terminal.
fn should_use_color(mode: ColorMode, is_terminal: bool) -> bool {
    match mode {
        ColorMode::Always => true,
        ColorMode::Never => false,
        ColorMode::Auto => {
            // Respect NO_COLOR environment variable (https://no-color.org/)
            if std::env::var_os("NO_COLOR").is_some() {
                return false;
            }
            if std::env::var_os("FORCE_COLOR").is_some() {
                return true;
            }
            if std::env::var("TERM").map(|t| t == "dumb").unwrap_or(false) {
                return false;
            }
            is_terminal
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "biggest")]
#[command(about = "Find the largest files in folders and subfolders")]
#[command(version)]
#[command(arg_required_else_help = true)]
#[command(after_help = "The report goes to stdout; progress and warnings go to stderr.")]
struct Args {
    /// Files or folders to search
    #[arg(value_name = "PATH", required = true)]
    paths: Vec<PathBuf>,

    /// Number of large files to report
    #[arg(
        short = 'n',
        long = "number",
        value_name = "N",
        default_value_t = DEFAULT_CAPACITY as u16,
        value_parser = clap::value_parser!(u16).range(MIN_CAPACITY as i64..=MAX_CAPACITY as i64)
    )]
    number: u16,

    /// Do only the given files or folders, no subfolders
    #[arg(short = 's', long = "shallow")]
    shallow: bool,

    /// Descend at most DEPTH folder levels below each path
    #[arg(short = 'L', long = "level", value_name = "DEPTH", conflicts_with = "shallow")]
    level: Option<usize>,

    /// Skip files and folders whose name matches pattern (can be used multiple times)
    #[arg(short = 'I', long = "ignore", value_name = "GLOB")]
    ignore: Vec<String>,

    /// Hide "Scanning folder" progress lines (warnings are still shown)
    #[arg(short = 'q', long = "quiet")]
    quiet: bool,

    /// Output in JSON format
    #[arg(long = "json")]
    json: bool,

    /// Control color output: auto, always, never
    #[arg(long = "color", value_name = "WHEN", default_value = "auto")]
    color: ColorMode,
}

fn main() {
    let args = Args::parse();

    let walker = Walker::new(WalkerConfig {
        recurse: !args.shallow,
        max_depth: args.level,
        ignore_patterns: args.ignore.clone(),
    });

    let mut state = ScanState::new(usize::from(args.number));
    let mut sink = StderrSink::new(should_use_color(
        args.color,
        std::io::stderr().is_terminal(),
    ))
    .quiet(args.quiet);

    walker.scan(&args.paths, &mut state, &mut sink);

    let found_nothing = state.found_nothing();
    let report = state.into_report();

    let output_config = OutputConfig {
        use_color: !args.json && should_use_color(args.color, std::io::stdout().is_terminal()),
        json: args.json,
    };

    if let Err(e) = print_report(&report, &output_config) {
        eprintln!("biggest: error writing output: {}", e);
        process::exit(1);
    }

    if found_nothing {
        eprintln!("biggest: no files or folders found; see 'biggest --help'");
    }
}
