//! # Header Matcher
//!
//! Classifies the files under a root by whether they already start with the
//! reference header.

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use super::file_collector::FileCollector;
use super::file_io::FileIO;
use crate::error::HeaderError;
use crate::file_filter::ExtensionFilter;
use crate::header::{Header, MatchMode};
use crate::header_detection::{HeaderDetector, PrefixHeaderDetector};
use crate::report::{FileReport, FileStatus};

/// Decides which files lack the header.
#[derive(Debug, Clone)]
pub struct HeaderMatcher {
  header: Header,
  mode: MatchMode,
  detector: PrefixHeaderDetector,
}

impl HeaderMatcher {
  pub fn new(header: Header, mode: MatchMode) -> Self {
    let detector = PrefixHeaderDetector::new(&header, mode);
    Self { header, mode, detector }
  }

  pub const fn header(&self) -> &Header {
    &self.header
  }

  pub const fn mode(&self) -> MatchMode {
    self.mode
  }

  /// The prefix detector built from the header and mode.
  pub const fn detector(&self) -> &PrefixHeaderDetector {
    &self.detector
  }

  /// Checks a single piece of (normalised) content.
  pub fn has_header(&self, content: &str) -> bool {
    self.detector.has_header(content)
  }

  /// Recursively lists the files under `root_dir` that do not start with the
  /// header.
  ///
  /// # Errors
  ///
  /// Fails on an unusable root or on the first file or directory that cannot
  /// be read; no partial result is returned.
  pub fn list_files_without_header(
    &self,
    root_dir: &Path,
    extensions: &ExtensionFilter,
  ) -> Result<BTreeSet<PathBuf>, HeaderError> {
    let missing = self
      .classify(root_dir, extensions)?
      .into_iter()
      .filter(|report| report.status == FileStatus::Missing)
      .map(|report| report.path)
      .collect();

    Ok(missing)
  }

  /// Reports the header status of every candidate file under `root_dir`.
  pub fn classify(&self, root_dir: &Path, extensions: &ExtensionFilter) -> Result<Vec<FileReport>, HeaderError> {
    if self.mode == MatchMode::FirstLineOnly {
      debug!("Matching only against first line of header: '{}'", self.detector.prefix());
    }

    self.classify_with(&self.detector, root_dir, extensions)
  }

  /// Same as [`classify`](Self::classify) with a caller-supplied detector.
  pub fn classify_with(
    &self,
    detector: &dyn HeaderDetector,
    root_dir: &Path,
    extensions: &ExtensionFilter,
  ) -> Result<Vec<FileReport>, HeaderError> {
    debug!(
      "Searching {} for files matching {:?} lacking header from {}",
      root_dir.display(),
      extensions,
      self.header.source().map_or_else(|| "<memory>".into(), |p| p.display().to_string())
    );

    let files = FileCollector::new(extensions).traverse_directory(root_dir)?;

    let mut reports = Vec::with_capacity(files.len());
    for path in files {
      let content = FileIO::read_content(&path, self.header.line_ending())?;
      let status = if detector.has_header(&content) {
        FileStatus::HasHeader
      } else {
        debug!("{} does not start with the header", path.display());
        FileStatus::Missing
      };
      reports.push(FileReport::new(path, status));
    }

    let missing = reports.iter().filter(|r| r.status == FileStatus::Missing).count();
    info!("Found {} of {} files that lack the header", missing, reports.len());

    Ok(reports)
  }
}
