//! # File I/O Module
//!
//! This module provides the file reading and writing shared by the header
//! matcher and the header inserter. It encapsulates synchronous file
//! operations; every handle is opened, consumed and closed within a single
//! call.

use std::io::Read as _;
use std::path::Path;

use tracing::trace;

use crate::error::HeaderError;
use crate::header::LineEnding;

/// File I/O operations for the processor.
///
/// This struct provides static methods for reading and writing files.
pub struct FileIO;

impl FileIO {
  /// Reads a whole file as text with every line re-joined by `line_ending`.
  ///
  /// Lines may end in `\n`, `\r\n` or a lone `\r`. Every line, the last one
  /// included, is followed by the configured terminator in the result, so a
  /// file without a trailing newline gains one and an empty file reads as
  /// the empty string. Invalid UTF-8 is replaced with U+FFFD.
  ///
  /// # Errors
  ///
  /// Returns [`HeaderError::Read`] if the file cannot be opened or read to
  /// completion.
  pub fn read_content(path: &Path, line_ending: LineEnding) -> Result<String, HeaderError> {
    trace!("Reading contents of {}", path.display());

    let read_error = |source| HeaderError::Read {
      path: path.to_path_buf(),
      source,
    };

    let bytes = {
      let mut file = std::fs::File::open(path).map_err(read_error)?;
      let mut bytes = Vec::new();
      file.read_to_end(&mut bytes).map_err(read_error)?;
      bytes
    };

    let text = String::from_utf8_lossy(&bytes);
    Ok(Self::normalize_line_endings(&text, line_ending.as_str()))
  }

  /// Splits `text` into lines and appends `terminator` to each of them.
  pub fn normalize_line_endings(text: &str, terminator: &str) -> String {
    let mut normalized = String::with_capacity(text.len() + terminator.len());
    let mut rest = text;

    while !rest.is_empty() {
      match rest.find(['\n', '\r']) {
        Some(index) => {
          normalized.push_str(&rest[..index]);
          normalized.push_str(terminator);

          let skip = if rest[index..].starts_with("\r\n") { 2 } else { 1 };
          rest = &rest[index + skip..];
        }
        None => {
          normalized.push_str(rest);
          normalized.push_str(terminator);
          rest = "";
        }
      }
    }

    normalized
  }

  /// Replaces the content of a file.
  ///
  /// # Errors
  ///
  /// Returns [`HeaderError::Write`] if the file cannot be opened for writing
  /// or the write does not complete.
  pub fn write_file(path: &Path, content: &str) -> Result<(), HeaderError> {
    std::fs::write(path, content).map_err(|source| HeaderError::Write {
      path: path.to_path_buf(),
      source,
    })
  }
}
