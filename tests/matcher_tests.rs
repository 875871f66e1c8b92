mod common;

use std::collections::BTreeSet;
use std::fs;
use std::path::PathBuf;

use anyhow::Result;
use common::{Fixture, HEADER, snapshot};
use headertool::error::{ErrorKind, HeaderError};
use headertool::file_filter::ExtensionFilter;
use headertool::header::{Header, LineEnding, MatchMode};
use headertool::processor::HeaderMatcher;

fn java_only() -> ExtensionFilter {
  ExtensionFilter::from_extensions(Some(vec!["java".to_string()]))
}

#[test]
fn test_full_match_reports_every_file_lacking_header() -> Result<()> {
  let fixture = Fixture::new()?;
  let matcher = HeaderMatcher::new(fixture.header()?, MatchMode::FullMatch);

  let missing = matcher.list_files_without_header(&fixture.root(), &ExtensionFilter::Any)?;

  let expected = fixture.paths(&[
    "subA/subA1/NoHeader.java",
    "subA/subA1/DifferentHeader.java",
    "subA/subA1/no-header.txt",
    "subA/subA1/different-header.txt",
    "subA/subA2/NoHeader.java",
    "subA/subA2/DifferentHeader.java",
    "subA/subA2/no-header.txt",
    "subA/subA2/different-header.txt",
    "subB/NoHeader.java",
    "subB/no-header.txt",
    "subC/subC1/NoHeader.java",
    "subC/subC1/no-header.txt",
  ]);
  assert_eq!(missing, expected);

  Ok(())
}

#[test]
fn test_first_line_only_accepts_different_header() -> Result<()> {
  let fixture = Fixture::new()?;
  let matcher = HeaderMatcher::new(fixture.header()?, MatchMode::FirstLineOnly);

  let missing = matcher.list_files_without_header(&fixture.root(), &ExtensionFilter::Any)?;

  let expected = fixture.paths(&[
    "subA/subA1/NoHeader.java",
    "subA/subA1/no-header.txt",
    "subA/subA2/NoHeader.java",
    "subA/subA2/no-header.txt",
    "subB/NoHeader.java",
    "subB/no-header.txt",
    "subC/subC1/NoHeader.java",
    "subC/subC1/no-header.txt",
  ]);
  assert_eq!(missing, expected);

  Ok(())
}

#[test]
fn test_extension_filter_limits_report() -> Result<()> {
  let fixture = Fixture::new()?;
  let matcher = HeaderMatcher::new(fixture.header()?, MatchMode::FullMatch);

  let missing = matcher.list_files_without_header(&fixture.root(), &java_only())?;

  assert_eq!(missing.len(), 6);
  assert!(
    missing
      .iter()
      .all(|p| p.extension().is_some_and(|ext| ext == "java"))
  );

  Ok(())
}

#[test]
fn test_subdirectory_root() -> Result<()> {
  let fixture = Fixture::new()?;
  let matcher = HeaderMatcher::new(fixture.header()?, MatchMode::FirstLineOnly);

  let missing = matcher.list_files_without_header(&fixture.root().join("subC"), &java_only())?;

  assert_eq!(missing, fixture.paths(&["subC/subC1/NoHeader.java"]));

  Ok(())
}

#[test]
fn test_empty_directory_reports_nothing() -> Result<()> {
  let fixture = Fixture::new()?;
  let matcher = HeaderMatcher::new(fixture.header()?, MatchMode::FullMatch);

  let missing = matcher.list_files_without_header(&fixture.root().join("emptySub"), &ExtensionFilter::Any)?;

  assert!(missing.is_empty());

  Ok(())
}

#[test]
fn test_unmatched_extension_reports_nothing() -> Result<()> {
  let fixture = Fixture::new()?;
  let matcher = HeaderMatcher::new(fixture.header()?, MatchMode::FullMatch);
  let filter = ExtensionFilter::from_extensions(Some(vec!["xml".to_string()]));

  let missing = matcher.list_files_without_header(&fixture.root(), &filter)?;

  assert!(missing.is_empty());

  Ok(())
}

#[test]
fn test_wildcard_includes_extensionless_files() -> Result<()> {
  let fixture = Fixture::new()?;
  fs::write(fixture.root().join("subB/Makefile"), "all:\n")?;
  let matcher = HeaderMatcher::new(fixture.header()?, MatchMode::FullMatch);
  let filter = ExtensionFilter::from_extensions(Some(vec!["java".to_string(), "*".to_string()]));

  let missing = matcher.list_files_without_header(&fixture.root(), &filter)?;

  assert!(missing.contains(&fixture.root().join("subB/Makefile")));
  assert_eq!(missing.len(), 13);

  Ok(())
}

#[test]
fn test_scan_leaves_tree_untouched() -> Result<()> {
  let fixture = Fixture::new()?;
  let before = snapshot(&fixture.root())?;
  let matcher = HeaderMatcher::new(fixture.header()?, MatchMode::FullMatch);

  matcher.list_files_without_header(&fixture.root(), &ExtensionFilter::Any)?;

  assert_eq!(snapshot(&fixture.root())?, before);

  Ok(())
}

#[test]
fn test_crlf_files_match_lf_header_after_normalisation() -> Result<()> {
  let fixture = Fixture::new()?;
  let crlf_file = fixture.root().join("subB/Windows.java");
  fs::write(&crlf_file, format!("{}class Windows {{}}\r\n", HEADER.replace('\n', "\r\n")))?;
  let matcher = HeaderMatcher::new(fixture.header()?, MatchMode::FullMatch);

  let missing = matcher.list_files_without_header(&fixture.root(), &java_only())?;

  assert!(!missing.contains(&crlf_file));

  Ok(())
}

#[test]
fn test_nested_example_tree() -> Result<()> {
  let temp_dir = tempfile::tempdir()?;
  fs::create_dir_all(temp_dir.path().join("a/b"))?;
  fs::write(temp_dir.path().join("a/X.java"), "class X {}\n")?;
  fs::write(temp_dir.path().join("a/b/Y.txt"), format!("{HEADER}y\n"))?;

  let header = Header::parse(HEADER, LineEnding::Lf).expect("non-empty header");
  let matcher = HeaderMatcher::new(header, MatchMode::FullMatch);

  let missing = matcher.list_files_without_header(temp_dir.path(), &ExtensionFilter::Any)?;

  assert_eq!(missing, BTreeSet::from([temp_dir.path().join("a/X.java")]));

  Ok(())
}

#[test]
fn test_missing_root_is_configuration_error() -> Result<()> {
  let fixture = Fixture::new()?;
  let matcher = HeaderMatcher::new(fixture.header()?, MatchMode::FullMatch);
  let missing_root: PathBuf = fixture.root().join("does-not-exist");

  let err = matcher
    .list_files_without_header(&missing_root, &ExtensionFilter::Any)
    .expect_err("missing root should fail");

  assert!(matches!(err, HeaderError::InvalidRoot { .. }));
  assert_eq!(err.kind(), ErrorKind::Configuration);
  assert_eq!(err.path(), missing_root.as_path());

  Ok(())
}

#[test]
fn test_file_as_root_is_configuration_error() -> Result<()> {
  let fixture = Fixture::new()?;
  let matcher = HeaderMatcher::new(fixture.header()?, MatchMode::FullMatch);

  let err = matcher
    .list_files_without_header(&fixture.root().join("subB/Header.java"), &ExtensionFilter::Any)
    .expect_err("file root should fail");

  assert_eq!(err.kind(), ErrorKind::Configuration);

  Ok(())
}

#[cfg(unix)]
#[test]
fn test_symlinked_file_is_reported() -> Result<()> {
  let fixture = Fixture::new()?;
  let outside = tempfile::tempdir()?;
  let target = outside.path().join("Real.java");
  fs::write(&target, "class Real {}\n")?;
  let link = fixture.root().join("subB/Link.java");
  std::os::unix::fs::symlink(&target, &link)?;
  let matcher = HeaderMatcher::new(fixture.header()?, MatchMode::FullMatch);

  let missing = matcher.list_files_without_header(&fixture.root(), &java_only())?;

  assert!(missing.contains(&link));
  assert_eq!(missing.len(), 7);

  Ok(())
}

#[cfg(unix)]
#[test]
fn test_unreadable_file_aborts_scan() -> Result<()> {
  use std::os::unix::fs::PermissionsExt;

  let fixture = Fixture::new()?;
  let locked = fixture.root().join("subB/NoHeader.java");
  fs::set_permissions(&locked, fs::Permissions::from_mode(0o000))?;

  // Permission bits do not bind a privileged user.
  if fs::File::open(&locked).is_ok() {
    fs::set_permissions(&locked, fs::Permissions::from_mode(0o644))?;
    return Ok(());
  }

  let matcher = HeaderMatcher::new(fixture.header()?, MatchMode::FullMatch);
  let result = matcher.list_files_without_header(&fixture.root(), &ExtensionFilter::Any);
  fs::set_permissions(&locked, fs::Permissions::from_mode(0o644))?;

  let err = result.expect_err("unreadable file should abort the scan");
  assert!(matches!(err, HeaderError::Read { .. }));
  assert_eq!(err.kind(), ErrorKind::Read);
  assert_eq!(err.path(), locked.as_path());

  Ok(())
}
