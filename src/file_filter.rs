//! # File Filter Module
//!
//! This module contains components for deciding which files under the scan
//! root are candidates for header checking.

use std::path::Path;

/// Extension argument meaning "every file, whatever its extension".
pub const WILDCARD_EXTENSION: &str = "*";

/// Result of a file filtering operation.
#[derive(Debug)]
pub struct FilterResult {
  /// Whether the file should be processed
  pub should_process: bool,
  /// Reason why the file should not be processed (if any)
  pub reason: Option<String>,
}

impl FilterResult {
  /// Creates a new FilterResult indicating the file should be processed.
  pub const fn process() -> Self {
    Self {
      should_process: true,
      reason: None,
    }
  }

  /// Creates a new FilterResult indicating the file should be skipped.
  pub fn skip(reason: impl Into<String>) -> Self {
    Self {
      should_process: false,
      reason: Some(reason.into()),
    }
  }
}

/// Trait for components that filter files based on certain criteria.
pub trait FileFilter {
  /// Determines whether a file should be processed.
  fn should_process(&self, path: &Path) -> FilterResult;
}

/// Filter on the file name's extension.
///
/// Matching is an exact, case-sensitive suffix match after a literal dot, so
/// `java` matches `Main.java` but not `Main.JAVA` or `java`, and `tar.gz`
/// matches `dist.tar.gz`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ExtensionFilter {
  /// Every file matches, including files without an extension.
  #[default]
  Any,
  /// Only files ending in one of these extensions match. An empty list
  /// matches nothing.
  Only(Vec<String>),
}

impl ExtensionFilter {
  /// Builds a filter from extension arguments.
  ///
  /// `None` or a list containing [`WILDCARD_EXTENSION`] yields
  /// [`ExtensionFilter::Any`]; anything else is kept as supplied.
  pub fn from_extensions(extensions: Option<Vec<String>>) -> Self {
    match extensions {
      None => Self::Any,
      Some(exts) if exts.iter().any(|e| e == WILDCARD_EXTENSION) => Self::Any,
      Some(exts) => Self::Only(exts),
    }
  }

  pub const fn is_any(&self) -> bool {
    matches!(self, Self::Any)
  }

  /// Checks whether a path passes the filter.
  pub fn matches(&self, path: &Path) -> bool {
    match self {
      Self::Any => true,
      Self::Only(exts) => {
        let Some(file_name) = path.file_name() else {
          return false;
        };
        let file_name = file_name.to_string_lossy();
        exts.iter().any(|ext| {
          file_name
            .strip_suffix(ext.as_str())
            .is_some_and(|stem| stem.ends_with('.'))
        })
      }
    }
  }
}

impl FileFilter for ExtensionFilter {
  fn should_process(&self, path: &Path) -> FilterResult {
    if self.matches(path) {
      FilterResult::process()
    } else {
      FilterResult::skip("Extension not selected")
    }
  }
}
