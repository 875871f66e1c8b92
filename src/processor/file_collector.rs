//! # File Collector Module
//!
//! This module enumerates the candidate files under a scan root.

use std::path::{Path, PathBuf};

use tracing::{debug, trace};
use walkdir::WalkDir;

use crate::error::HeaderError;
use crate::file_filter::{ExtensionFilter, FileFilter};

/// File collector for recursive directory traversal.
///
/// Traversal is sequential and sorted by file name within each directory.
/// Symbolic links to directories are not descended into; symbolic links to
/// regular files are collected like the files themselves.
pub struct FileCollector<'a> {
  /// Filter applied to every file found
  extension_filter: &'a ExtensionFilter,
}

impl<'a> FileCollector<'a> {
  pub const fn new(extension_filter: &'a ExtensionFilter) -> Self {
    Self { extension_filter }
  }

  /// Checks that `root` exists, is a directory and can be listed.
  ///
  /// # Errors
  ///
  /// Returns [`HeaderError::InvalidRoot`] otherwise.
  pub fn validate_root(root: &Path) -> Result<(), HeaderError> {
    let invalid = |reason: String| HeaderError::InvalidRoot {
      path: root.to_path_buf(),
      reason,
    };

    let metadata = std::fs::metadata(root).map_err(|e| invalid(e.to_string()))?;
    if !metadata.is_dir() {
      return Err(invalid("not a directory".to_string()));
    }
    std::fs::read_dir(root).map_err(|e| invalid(e.to_string()))?;

    Ok(())
  }

  /// Traverses `root` recursively and collects every file passing the
  /// extension filter.
  ///
  /// # Errors
  ///
  /// Returns [`HeaderError::InvalidRoot`] if the root is unusable and
  /// [`HeaderError::Walk`] on the first directory entry that cannot be read.
  pub fn traverse_directory(&self, root: &Path) -> Result<Vec<PathBuf>, HeaderError> {
    Self::validate_root(root)?;

    debug!("Scanning directory: {}", root.display());
    let start_time = std::time::Instant::now();

    let mut files = Vec::new();
    for entry in WalkDir::new(root).sort_by_file_name() {
      let entry = entry.map_err(|source| HeaderError::Walk {
        path: source.path().unwrap_or(root).to_path_buf(),
        source,
      })?;

      if !is_regular_file(&entry) {
        continue;
      }

      let result = self.extension_filter.should_process(entry.path());
      if result.should_process {
        files.push(entry.into_path());
      } else {
        trace!(
          "Skipping: {} ({})",
          entry.path().display(),
          result.reason.as_deref().unwrap_or("filtered")
        );
      }
    }

    debug!(
      "Found {} files in {}ms",
      files.len(),
      start_time.elapsed().as_millis()
    );

    Ok(files)
  }
}

/// Regular files, and symlinks whose target is one.
fn is_regular_file(entry: &walkdir::DirEntry) -> bool {
  let file_type = entry.file_type();
  file_type.is_file() || (file_type.is_symlink() && entry.path().is_file())
}
