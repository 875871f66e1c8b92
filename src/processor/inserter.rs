//! # Header Inserter
//!
//! Prepends the reference header to files known to lack it.

use std::path::Path;

use tracing::{debug, info};

use super::file_io::FileIO;
use crate::error::HeaderError;
use crate::header::Header;
use crate::report::{FileReport, FileStatus};

/// Rewrites files so they start with the header.
///
/// The inserter does not check whether a file already carries the header;
/// inserting twice duplicates it. Gate calls through
/// [`HeaderMatcher`](super::HeaderMatcher).
#[derive(Debug, Clone)]
pub struct HeaderInserter {
  header: Header,
}

impl HeaderInserter {
  pub const fn new(header: Header) -> Self {
    Self { header }
  }

  /// Inserts the header at the start of each file, in the order given.
  ///
  /// Each file is read through [`FileIO::read_content`] and rewritten as the
  /// header text immediately followed by that content.
  ///
  /// # Errors
  ///
  /// Stops at the first file that cannot be read or written. Files before it
  /// stay modified; it and every later file are left untouched.
  pub fn insert_header<I, P>(&self, files: I) -> Result<Vec<FileReport>, HeaderError>
  where
    I: IntoIterator<Item = P>,
    P: AsRef<Path>,
  {
    let files: Vec<P> = files.into_iter().collect();
    info!(
      "Inserting header from {} into {} files",
      self.header.source().map_or_else(|| "<memory>".into(), |p| p.display().to_string()),
      files.len()
    );

    let mut reports = Vec::with_capacity(files.len());
    for file in &files {
      let path = file.as_ref();
      self.insert_into(path)?;
      reports.push(FileReport::new(path.to_path_buf(), FileStatus::Inserted));
    }

    Ok(reports)
  }

  fn insert_into(&self, path: &Path) -> Result<(), HeaderError> {
    let original = FileIO::read_content(path, self.header.line_ending())?;
    debug!("Read {} bytes from {}", original.len(), path.display());

    let mut content = String::with_capacity(self.header.text().len() + original.len());
    content.push_str(self.header.text());
    content.push_str(&original);

    FileIO::write_file(path, &content)?;
    info!("Added header to {}", path.display());

    Ok(())
  }
}
