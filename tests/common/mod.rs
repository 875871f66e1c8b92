#![allow(dead_code)]

use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

use anyhow::{Context, Result};
use headertool::header::{Header, LineEnding};
use tempfile::TempDir;

/// Header used by every fixture tree.
pub const HEADER: &str = "/*\n *    Copyright 2013 Example Author\n *\n *    Licensed under the Apache License, Version 2.0\n */\n";

/// Shares the first line of [`HEADER`] but differs afterwards.
pub const DIFFERENT_HEADER: &str = "/*\n *    Copyright 2013 Someone Else\n */\n";

pub const HEADER_FILENAME: &str = "java-header.txt";

/// A temporary directory holding a header file and a `root` tree to scan.
pub struct Fixture {
  pub temp_dir: TempDir,
}

impl Fixture {
  /// Builds the standard tree:
  ///
  /// ```text
  /// root/subA/subA1/{Header,NoHeader,DifferentHeader}.java
  /// root/subA/subA1/{header,no-header,different-header}.txt
  /// root/subA/subA2/ (same six files)
  /// root/subB/{Header,NoHeader}.java, {header,no-header}.txt
  /// root/subC/subC1/ (same four files)
  /// root/emptySub/
  /// ```
  pub fn new() -> Result<Self> {
    let temp_dir = tempfile::tempdir()?;
    fs::write(temp_dir.path().join(HEADER_FILENAME), HEADER)?;

    let fixture = Self { temp_dir };
    for dir in ["subA/subA1", "subA/subA2"] {
      fixture.write_set(dir, true)?;
    }
    for dir in ["subB", "subC/subC1"] {
      fixture.write_set(dir, false)?;
    }
    fs::create_dir_all(fixture.root().join("emptySub"))?;

    Ok(fixture)
  }

  fn write_set(&self, dir: &str, with_different: bool) -> Result<()> {
    let dir = self.root().join(dir);
    fs::create_dir_all(&dir).with_context(|| format!("create {}", dir.display()))?;

    fs::write(dir.join("Header.java"), format!("{HEADER}package test;\n\nclass Header {{}}\n"))?;
    fs::write(dir.join("NoHeader.java"), "package test;\n\nclass NoHeader {}\n")?;
    fs::write(dir.join("header.txt"), format!("{HEADER}some text\n"))?;
    fs::write(dir.join("no-header.txt"), "some text\n")?;

    if with_different {
      fs::write(
        dir.join("DifferentHeader.java"),
        format!("{DIFFERENT_HEADER}package test;\n\nclass DifferentHeader {{}}\n"),
      )?;
      fs::write(dir.join("different-header.txt"), format!("{DIFFERENT_HEADER}some text\n"))?;
    }

    Ok(())
  }

  pub fn root(&self) -> PathBuf {
    self.temp_dir.path().join("root")
  }

  pub fn header_path(&self) -> PathBuf {
    self.temp_dir.path().join(HEADER_FILENAME)
  }

  pub fn header(&self) -> Result<Header> {
    Ok(Header::load(&self.header_path(), LineEnding::Lf)?)
  }

  /// Absolute paths for the given paths relative to `root`.
  pub fn paths(&self, relative: &[&str]) -> BTreeSet<PathBuf> {
    relative.iter().map(|r| self.root().join(r)).collect()
  }
}

/// Observable state of one file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileState {
  pub path: PathBuf,
  pub content: Vec<u8>,
  pub len: u64,
  pub modified: SystemTime,
}

impl FileState {
  pub fn read(path: &Path) -> Result<Self> {
    let metadata = fs::metadata(path)?;
    Ok(Self {
      path: path.to_path_buf(),
      content: fs::read(path)?,
      len: metadata.len(),
      modified: metadata.modified()?,
    })
  }
}

/// Every regular file under `dir` with its content, size and modification
/// time, in path order.
pub fn snapshot(dir: &Path) -> Result<Vec<FileState>> {
  let mut files = Vec::new();
  for entry in walkdir::WalkDir::new(dir).sort_by_file_name() {
    let entry = entry?;
    if entry.file_type().is_file() {
      files.push(FileState::read(entry.path())?);
    }
  }
  Ok(files)
}
