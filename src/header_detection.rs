//! # Header Detection Module
//!
//! This module contains the interface and default implementation for deciding
//! whether file content already carries the reference header. It allows the
//! detection rule to be replaced without touching the matcher.

use crate::header::{Header, MatchMode};

/// Trait for header detectors.
///
/// Implementations decide whether a file already starts with the header based
/// on its (line-ending normalised) content.
pub trait HeaderDetector {
  /// Checks if the content already has the header.
  fn has_header(&self, content: &str) -> bool;
}

/// Default header detection: a plain prefix comparison.
///
/// The prefix is computed once from a [`Header`] and [`MatchMode`] and then
/// reused for every file of a scan. Comparison is case-sensitive and nothing
/// is trimmed, so content shorter than the prefix never matches.
#[derive(Debug, Clone)]
pub struct PrefixHeaderDetector {
  prefix: String,
}

impl PrefixHeaderDetector {
  pub fn new(header: &Header, mode: MatchMode) -> Self {
    Self {
      prefix: header.match_prefix(mode).to_string(),
    }
  }

  /// The string content has to start with.
  pub fn prefix(&self) -> &str {
    &self.prefix
  }
}

impl HeaderDetector for PrefixHeaderDetector {
  fn has_header(&self, content: &str) -> bool {
    content.starts_with(&self.prefix)
  }
}
