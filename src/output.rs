//! Report rendering: plain/colored text and JSON

use std::io::{self, Write};

use serde::Serialize;
use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

use crate::tracker::FileEntry;

/// Final result of a run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ScanReport {
    pub total_files: u64,
    pub total_folders: u64,
    /// Largest files, smallest of them first.
    pub largest: Vec<FileEntry>,
}

/// Configuration for report output.
#[derive(Debug, Clone, Default)]
pub struct OutputConfig {
    pub use_color: bool,
    pub json: bool,
}

/// Print the report to stdout in the configured format.
pub fn print_report(report: &ScanReport, config: &OutputConfig) -> io::Result<()> {
    if config.json {
        return print_report_json(report);
    }
    let color_choice = if config.use_color {
        ColorChoice::Auto
    } else {
        ColorChoice::Never
    };
    let mut stdout = StandardStream::stdout(color_choice);
    write_report(&mut stdout, report)?;
    stdout.flush()
}

/// Write the text report to any color-capable writer.
pub fn write_report<W: WriteColor>(out: &mut W, report: &ScanReport) -> io::Result<()> {
    let mut bold = ColorSpec::new();
    bold.set_bold(true);

    writeln!(out)?;
    out.set_color(&bold)?;
    write!(
        out,
        "Found {} largest files from {} files in {} folders.",
        report.largest.len(),
        format_number(report.total_files),
        format_number(report.total_folders)
    )?;
    out.reset()?;
    writeln!(out)?;

    let mut size_color = ColorSpec::new();
    size_color.set_fg(Some(Color::Cyan));

    for entry in &report.largest {
        write!(out, "  ")?;
        out.set_color(&size_color)?;
        write!(out, "{}", format_number(entry.size))?;
        out.reset()?;
        writeln!(out, " bytes for {}", entry.path)?;
    }

    Ok(())
}

/// Print the report as pretty JSON.
pub fn print_report_json(report: &ScanReport) -> io::Result<()> {
    let json = serde_json::to_string_pretty(report).map_err(io::Error::other)?;
    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{}", json)?;
    stdout.flush()
}

/// Format a number with thousand separators.
pub fn format_number(n: u64) -> String {
    let digits = n.to_string();
    let mut result = String::with_capacity(digits.len() + digits.len() / 3);

    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            result.push(',');
        }
        result.push(c);
    }

    result
}
