//! # Processor Module
//!
//! This module contains the core functionality: finding the files under a
//! root that lack the reference header and, in insert mode, prepending the
//! header to them.
//!
//! The module is organized into several submodules:
//! - [`file_io`] - File reading and writing with line-ending normalisation
//! - [`file_collector`] - Recursive directory traversal
//! - [`matcher`] - The [`HeaderMatcher`], which classifies files
//! - [`inserter`] - The [`HeaderInserter`], which rewrites files
//!
//! The [`Processor`] composes them into the two phases of a run: a pure
//! [`scan`](Processor::scan) followed by an optional
//! [`apply`](Processor::apply).

mod file_collector;
mod file_io;
mod inserter;
mod matcher;

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

pub use file_collector::FileCollector;
pub use file_io::FileIO;
pub use inserter::HeaderInserter;
pub use matcher::HeaderMatcher;
use tracing::debug;

use crate::error::HeaderError;
use crate::file_filter::ExtensionFilter;
use crate::header::{Header, MatchMode};
use crate::report::{FileReport, FileStatus, ProcessingSummary};

/// Configuration for creating a Processor instance.
#[derive(Debug, Clone)]
pub struct ProcessorConfig {
  pub header: Header,
  pub match_mode: MatchMode,
  pub extension_filter: ExtensionFilter,
  /// Insert the header into every file the scan reports as missing it
  pub insert_mode: bool,
  /// Files never treated as candidates, such as the loaded config file
  pub excluded_paths: Vec<PathBuf>,
}

impl ProcessorConfig {
  /// Creates a report-only, full-match configuration over every extension.
  ///
  /// Use struct update syntax to override specific fields:
  /// ```ignore
  /// ProcessorConfig {
  ///     insert_mode: true,
  ///     ..ProcessorConfig::new(header)
  /// }
  /// ```
  pub fn new(header: Header) -> Self {
    Self {
      header,
      match_mode: MatchMode::FullMatch,
      extension_filter: ExtensionFilter::Any,
      insert_mode: false,
      excluded_paths: Vec::new(),
    }
  }
}

/// Result of the scan phase.
#[derive(Debug, Clone, Default)]
pub struct ScanOutcome {
  /// Every candidate file with its header status
  pub reports: Vec<FileReport>,
  /// The candidate files lacking the header
  pub missing: BTreeSet<PathBuf>,
}

/// Result of a complete run.
#[derive(Debug, Clone)]
pub struct RunOutcome {
  /// Every candidate file with its final status
  pub reports: Vec<FileReport>,
  pub summary: ProcessingSummary,
}

impl RunOutcome {
  /// Files that still lack the header after the run.
  pub fn missing(&self) -> impl Iterator<Item = &FileReport> {
    self.reports.iter().filter(|r| r.status == FileStatus::Missing)
  }

  /// Files the header was inserted into.
  pub fn inserted(&self) -> impl Iterator<Item = &FileReport> {
    self.reports.iter().filter(|r| r.status == FileStatus::Inserted)
  }
}

/// Processor for checking and inserting headers.
pub struct Processor {
  matcher: HeaderMatcher,
  inserter: HeaderInserter,
  extension_filter: ExtensionFilter,
  insert_mode: bool,
  excluded_paths: Vec<PathBuf>,
}

impl Processor {
  pub fn new(config: ProcessorConfig) -> Self {
    Self {
      matcher: HeaderMatcher::new(config.header.clone(), config.match_mode),
      inserter: HeaderInserter::new(config.header),
      extension_filter: config.extension_filter,
      insert_mode: config.insert_mode,
      excluded_paths: config.excluded_paths.iter().map(|p| canonical(p)).collect(),
    }
  }

  pub const fn matcher(&self) -> &HeaderMatcher {
    &self.matcher
  }

  pub const fn is_insert_mode(&self) -> bool {
    self.insert_mode
  }

  /// Classifies every candidate under `root`. Never modifies a file.
  pub fn scan(&self, root: &Path) -> Result<ScanOutcome, HeaderError> {
    let reports: Vec<FileReport> = self
      .matcher
      .classify(root, &self.extension_filter)?
      .into_iter()
      .filter(|report| !self.is_excluded(&report.path))
      .collect();
    let missing = reports
      .iter()
      .filter(|r| r.status == FileStatus::Missing)
      .map(|r| r.path.clone())
      .collect();

    Ok(ScanOutcome { reports, missing })
  }

  fn is_excluded(&self, path: &Path) -> bool {
    let excluded = self
      .excluded_paths
      .iter()
      .filter(|excluded| excluded.file_name() == path.file_name())
      .any(|excluded| *excluded == canonical(path));

    if excluded {
      debug!("Skipping excluded file {}", path.display());
    }
    excluded
  }

  /// Inserts the header into exactly the files `outcome` reports as missing
  /// it. Does nothing unless insert mode is on.
  pub fn apply(&self, outcome: &ScanOutcome) -> Result<Vec<FileReport>, HeaderError> {
    if !self.insert_mode {
      debug!("Insert mode is off, leaving {} files untouched", outcome.missing.len());
      return Ok(Vec::new());
    }

    self.inserter.insert_header(&outcome.missing)
  }

  /// Runs both phases over `root`.
  pub fn run(&self, root: &Path) -> Result<RunOutcome, HeaderError> {
    let start_time = Instant::now();

    let outcome = self.scan(root)?;
    let inserted: BTreeSet<PathBuf> = self.apply(&outcome)?.into_iter().map(|r| r.path).collect();

    let reports: Vec<FileReport> = outcome
      .reports
      .into_iter()
      .map(|report| {
        if inserted.contains(&report.path) {
          FileReport::new(report.path, FileStatus::Inserted)
        } else {
          report
        }
      })
      .collect();

    let elapsed: Duration = start_time.elapsed();
    let summary = ProcessingSummary::from_reports(&reports, elapsed);

    Ok(RunOutcome { reports, summary })
  }
}

/// Resolves `path` for comparison, falling back to the path as given.
fn canonical(path: &Path) -> PathBuf {
  std::fs::canonicalize(path).unwrap_or_else(|_| path.to_path_buf())
}
