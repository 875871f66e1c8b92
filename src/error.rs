//! # Error Module
//!
//! Errors raised while loading the header, scanning a tree or inserting the
//! header into files. Every variant names the path it concerns, and the I/O
//! variants keep the underlying cause as their source.

use std::io;
use std::path::{Path, PathBuf};

/// Broad category of a [`HeaderError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
  /// The header file or root directory is unusable; nothing was scanned.
  Configuration,
  /// A candidate file or directory could not be read during a scan.
  Read,
  /// A file could not be rewritten during insertion.
  Write,
}

/// Error type for header loading, scanning and insertion.
#[derive(Debug, thiserror::Error)]
pub enum HeaderError {
  /// The header file could not be opened or read.
  #[error("Failed to read header file '{}': {source}", path.display())]
  HeaderUnreadable { path: PathBuf, source: io::Error },

  /// The header file exists but contains no text.
  #[error("Header file '{}' is empty", path.display())]
  EmptyHeader { path: PathBuf },

  /// The scan root is missing or is not a directory.
  #[error("Root directory '{}' is not a readable directory: {reason}", path.display())]
  InvalidRoot { path: PathBuf, reason: String },

  /// Listing the contents of a directory failed part way through a scan.
  #[error("Failed to list files under '{}': {source}", path.display())]
  Walk { path: PathBuf, source: walkdir::Error },

  /// A file could not be opened or read.
  #[error("Failed to read '{}': {source}", path.display())]
  Read { path: PathBuf, source: io::Error },

  /// A file could not be rewritten.
  #[error("Failed to write '{}': {source}", path.display())]
  Write { path: PathBuf, source: io::Error },
}

impl HeaderError {
  pub const fn kind(&self) -> ErrorKind {
    match self {
      Self::HeaderUnreadable { .. } | Self::EmptyHeader { .. } | Self::InvalidRoot { .. } => ErrorKind::Configuration,
      Self::Walk { .. } | Self::Read { .. } => ErrorKind::Read,
      Self::Write { .. } => ErrorKind::Write,
    }
  }

  /// The file or directory the error is about.
  pub fn path(&self) -> &Path {
    match self {
      Self::HeaderUnreadable { path, .. }
      | Self::EmptyHeader { path }
      | Self::InvalidRoot { path, .. }
      | Self::Walk { path, .. }
      | Self::Read { path, .. }
      | Self::Write { path, .. } => path,
    }
  }
}
