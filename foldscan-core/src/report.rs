use std::fs;
use std::path::PathBuf;

use chrono::{Local, NaiveDateTime};
use tracing::debug;

use crate::error::{Result, ScanError};
use crate::paths::absolute_path;
use crate::scanner::ScanStatistics;
use crate::size::format_size;

/// Report file written when no output path is given
pub const DEFAULT_OUTPUT_PATH: &str = "folder_report.txt";

const WIDTH: usize = 60;
const TITLE: &str = "           FOLDER SCAN REPORT";
const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";
const NO_FILES: &str = "(none — folder has no files)";

// Breakdown table column widths
const EXT_WIDTH: usize = 20;
const COUNT_WIDTH: usize = 6;
const SIZE_WIDTH: usize = 12;

/// Where the rendered report goes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportConfig {
    pub output_path: PathBuf,
}

impl ReportConfig {
    pub fn new(output_path: impl Into<PathBuf>) -> Self {
        Self {
            output_path: output_path.into(),
        }
    }
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self::new(DEFAULT_OUTPUT_PATH)
    }
}

/// Render the report stamped with the current local time
pub fn render(stats: &ScanStatistics) -> String {
    render_at(stats, Local::now().naive_local())
}

/// Render the fixed-layout text report for a scan.
///
/// Lines are joined with `\n` and there is no trailing newline.
pub fn render_at(stats: &ScanStatistics, scanned_at: NaiveDateTime) -> String {
    let heavy = "=".repeat(WIDTH);
    let light = "-".repeat(WIDTH);

    let mut lines: Vec<String> = Vec::new();
    lines.push(heavy.clone());
    lines.push(TITLE.to_string());
    lines.push(heavy.clone());
    lines.push(format!("Folder:       {}", stats.folder.display()));
    if let Some(filter) = &stats.extension_filter {
        lines.push(format!("Filter:       *{} files only", filter));
    }
    lines.push(format!(
        "Scanned at:   {}",
        scanned_at.format(TIMESTAMP_FORMAT)
    ));
    lines.push(light.clone());
    lines.push(format!("Total files:  {}", stats.total_files));
    lines.push(format!("Total size:   {}", format_size(stats.total_size)));

    match &stats.largest_file {
        Some(largest) => lines.push(format!(
            "Largest file: {} ({})",
            largest.name,
            format_size(largest.size)
        )),
        None => lines.push(format!("Largest file: {}", NO_FILES)),
    }

    lines.push(light);
    lines.push("FILE TYPES BREAKDOWN".to_string());
    lines.push(table_row("Extension", "Count", "Size"));
    lines.push(table_row(
        &"-".repeat(EXT_WIDTH),
        &"-".repeat(COUNT_WIDTH),
        &"-".repeat(SIZE_WIDTH),
    ));

    for (ext, bucket) in stats.file_types.sorted_by_size() {
        lines.push(table_row(
            ext,
            &bucket.count.to_string(),
            &format_size(bucket.size),
        ));
    }

    lines.push(heavy);
    lines.join("\n")
}

fn table_row(ext: &str, count: &str, size: &str) -> String {
    format!(
        "  {:<ew$} {:>cw$}   {:>sw$}",
        ext,
        count,
        size,
        ew = EXT_WIDTH,
        cw = COUNT_WIDTH,
        sw = SIZE_WIDTH
    )
}

/// Write the report followed by a newline, replacing any existing file.
///
/// Returns the absolute path of the written file.
pub fn write_report(report: &str, config: &ReportConfig) -> Result<PathBuf> {
    let path = &config.output_path;
    let write_err = |source| ScanError::WriteReport {
        path: path.clone(),
        source,
    };

    fs::write(path, format!("{}\n", report)).map_err(write_err)?;
    let absolute = absolute_path(path).map_err(write_err)?;

    debug!(path = %absolute.display(), bytes = report.len() + 1, "report written");
    Ok(absolute)
}
