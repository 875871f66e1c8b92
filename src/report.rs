//! # Report Module
//!
//! This module provides the per-file records produced by a run and the
//! generation of machine-readable reports (JSON, CSV) from them.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use chrono::Local;
use serde::Serialize;

/// Header status of a file after a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FileStatus {
  /// The file already started with the header
  #[serde(rename = "ok")]
  HasHeader,
  /// The file does not start with the header
  Missing,
  /// The header was inserted into the file during this run
  Inserted,
}

impl FileStatus {
  pub const fn as_str(self) -> &'static str {
    match self {
      Self::HasHeader => "ok",
      Self::Missing => "missing",
      Self::Inserted => "inserted",
    }
  }
}

/// Information about a scanned file for reporting
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileReport {
  /// Path to the file
  #[serde(serialize_with = "serialize_path")]
  pub path: PathBuf,
  /// Header status of the file
  pub status: FileStatus,
}

impl FileReport {
  pub const fn new(path: PathBuf, status: FileStatus) -> Self {
    Self { path, status }
  }

  /// Whether the file carries the header once the run is over.
  pub const fn has_header(&self) -> bool {
    matches!(self.status, FileStatus::HasHeader | FileStatus::Inserted)
  }
}

fn serialize_path<S>(path: &Path, serializer: S) -> Result<S::Ok, S::Error>
where
  S: serde::Serializer,
{
  serializer.serialize_str(&path.to_string_lossy())
}

/// Totals for a run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ProcessingSummary {
  /// Number of candidate files scanned
  pub total_files: usize,
  /// Files that already had the header
  pub files_with_header: usize,
  /// Files still lacking the header
  pub files_missing_header: usize,
  /// Files the header was inserted into
  pub headers_inserted: usize,
  #[serde(skip)]
  pub processing_time: Duration,
}

impl ProcessingSummary {
  /// Create a summary from file reports.
  ///
  /// Each file is expected to appear once, with its final status.
  pub fn from_reports(reports: &[FileReport], processing_time: Duration) -> Self {
    let count = |status: FileStatus| reports.iter().filter(|r| r.status == status).count();

    Self {
      total_files: reports.len(),
      files_with_header: count(FileStatus::HasHeader),
      files_missing_header: count(FileStatus::Missing),
      headers_inserted: count(FileStatus::Inserted),
      processing_time,
    }
  }
}

/// Supported report formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportFormat {
  /// JSON format for machine readability
  Json,
  /// CSV format for spreadsheet compatibility
  Csv,
}

impl std::fmt::Display for ReportFormat {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    match self {
      ReportFormat::Json => write!(f, "JSON"),
      ReportFormat::Csv => write!(f, "CSV"),
    }
  }
}

#[derive(Serialize)]
struct JsonReport<'a> {
  generated_at: String,
  processing_time_secs: f64,
  summary: &'a ProcessingSummary,
  files: &'a [FileReport],
}

/// Report Generator for writing run results to disk
pub struct ReportGenerator<'a> {
  /// Format of the report to generate
  format: ReportFormat,
  /// Path where the report will be saved
  output_path: &'a Path,
}

impl<'a> ReportGenerator<'a> {
  pub const fn new(format: ReportFormat, output_path: &'a Path) -> Self {
    Self { format, output_path }
  }

  /// Generate a report from a collection of file reports and write it to the
  /// output path.
  pub fn generate(&self, files: &[FileReport], summary: &ProcessingSummary) -> Result<()> {
    let content = self.render(files, summary)?;

    fs::write(self.output_path, content)
      .with_context(|| format!("Failed to write report to {}", self.output_path.display()))
  }

  /// Render the report content without writing it.
  pub fn render(&self, files: &[FileReport], summary: &ProcessingSummary) -> Result<String> {
    match self.format {
      ReportFormat::Json => Self::render_json(files, summary),
      ReportFormat::Csv => Ok(Self::render_csv(files)),
    }
  }

  fn render_json(files: &[FileReport], summary: &ProcessingSummary) -> Result<String> {
    let report = JsonReport {
      generated_at: Local::now().to_rfc3339(),
      processing_time_secs: summary.processing_time.as_secs_f64(),
      summary,
      files,
    };

    serde_json::to_string_pretty(&report).with_context(|| "Failed to serialize JSON report")
  }

  fn render_csv(files: &[FileReport]) -> String {
    let mut csv = String::from("path,has_header,status\n");

    for file in files {
      csv.push_str(&format!(
        "{},{},{}\n",
        escape_csv(&file.path.to_string_lossy()),
        file.has_header(),
        file.status.as_str()
      ));
    }

    csv
  }
}

/// Quote a CSV field when it contains a separator, quote or newline.
fn escape_csv(field: &str) -> String {
  if field.contains([',', '"', '\n', '\r']) {
    format!("\"{}\"", field.replace('"', "\"\""))
  } else {
    field.to_string()
  }
}
