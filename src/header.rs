//! # Header Module
//!
//! The reference header every compliant file must begin with, together with
//! the [`MatchMode`] that decides how much of it a file has to carry and the
//! [`LineEnding`] used to normalise text read from disk.
//!
//! ## Example
//!
//! ```rust
//! use headertool::header::{Header, LineEnding, MatchMode};
//!
//! let header = Header::parse("Copyright 2013 Example\r\nAll rights reserved.", LineEnding::Lf).unwrap();
//!
//! assert_eq!(header.text(), "Copyright 2013 Example\nAll rights reserved.\n");
//! assert_eq!(header.match_prefix(MatchMode::FirstLineOnly), "Copyright 2013 Example");
//! ```

use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use clap::ValueEnum;
use serde::Deserialize;
use tracing::debug;

use crate::error::HeaderError;
use crate::processor::FileIO;

/// Line terminator used when text is read back from disk.
///
/// Every line of the header and of each candidate file is re-joined with this
/// terminator, so content from files with mixed line endings compares equal
/// to the header.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LineEnding {
  /// `\r\n` on Windows, `\n` everywhere else
  #[default]
  Native,
  /// `\n`
  Lf,
  /// `\r\n`
  #[value(name = "crlf")]
  CrLf,
}

impl LineEnding {
  pub const fn as_str(self) -> &'static str {
    match self {
      Self::Native => {
        if cfg!(windows) {
          "\r\n"
        } else {
          "\n"
        }
      }
      Self::Lf => "\n",
      Self::CrLf => "\r\n",
    }
  }
}

/// How much of the header a file has to start with.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MatchMode {
  /// The file must start with the entire header text.
  #[default]
  FullMatch,
  /// The file must start with the first line of the header only.
  ///
  /// Useful when headers carry a copyright year: a file whose header names a
  /// different year still counts as having one.
  FirstLineOnly,
}

impl fmt::Display for MatchMode {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Self::FullMatch => write!(f, "full match"),
      Self::FirstLineOnly => write!(f, "first line only"),
    }
  }
}

/// Immutable header text, normalised to a single line terminator.
///
/// Cloning is cheap; the text is shared.
#[derive(Debug, Clone)]
pub struct Header {
  text: Arc<str>,
  line_ending: LineEnding,
  source: Option<PathBuf>,
}

impl Header {
  /// Loads the header from a file.
  ///
  /// # Errors
  ///
  /// Returns [`HeaderError::HeaderUnreadable`] if the file cannot be read and
  /// [`HeaderError::EmptyHeader`] if it contains no text.
  pub fn load(path: &Path, line_ending: LineEnding) -> Result<Self, HeaderError> {
    debug!("Loading header from {}", path.display());

    let content = FileIO::read_content(path, line_ending).map_err(|e| match e {
      HeaderError::Read { path, source } => HeaderError::HeaderUnreadable { path, source },
      other => other,
    })?;

    let mut header = Self::parse(&content, line_ending).ok_or_else(|| HeaderError::EmptyHeader {
      path: path.to_path_buf(),
    })?;
    header.source = Some(path.to_path_buf());

    Ok(header)
  }

  /// Builds a header from in-memory text, normalising its line terminators.
  ///
  /// Returns `None` for empty text.
  pub fn parse(text: &str, line_ending: LineEnding) -> Option<Self> {
    let normalized = FileIO::normalize_line_endings(text, line_ending.as_str());
    if normalized.is_empty() {
      return None;
    }

    Some(Self {
      text: Arc::from(normalized),
      line_ending,
      source: None,
    })
  }

  /// The full header text, always ending with the line terminator.
  pub fn text(&self) -> &str {
    &self.text
  }

  /// The header text up to (not including) its first line terminator.
  pub fn first_line(&self) -> &str {
    self.text.split(self.line_ending.as_str()).next().unwrap_or_default()
  }

  /// The string a file has to start with under the given mode.
  pub fn match_prefix(&self, mode: MatchMode) -> &str {
    match mode {
      MatchMode::FullMatch => self.text(),
      MatchMode::FirstLineOnly => self.first_line(),
    }
  }

  pub const fn line_ending(&self) -> LineEnding {
    self.line_ending
  }

  /// The file the header was loaded from, if any.
  pub fn source(&self) -> Option<&Path> {
    self.source.as_deref()
  }
}
