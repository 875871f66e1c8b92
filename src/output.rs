//! # Output Module
//!
//! This module centralizes all user-facing output for the headertool.
//! It provides consistent formatting, colors, and symbols for terminal output.
//!
//! Quiet mode prints nothing but the paths of files lacking the header, one
//! per line, so the output can be piped into other tools.

use std::path::Path;

use owo_colors::{OwoColorize, Stream};

use crate::logging::{is_quiet, is_verbose};
use crate::report::{FileReport, ProcessingSummary};

/// Symbols used in output
pub mod symbols {
  /// Success/has header
  pub const SUCCESS: &str = "\u{2713}"; // ✓
  /// Missing header
  pub const FAILURE: &str = "\u{2717}"; // ✗
}

/// Maximum number of files to show in the default output before truncating
const DEFAULT_FILE_LIST_LIMIT: usize = 20;

/// Print the initial "Checking N files..." or "Processing N files..." message.
pub fn print_start_message(root: &Path, insert_mode: bool) {
  if is_quiet() {
    return;
  }

  let verb = if insert_mode { "Processing" } else { "Checking" };
  println!("{} files under {}...", verb, root.display());
}

/// Print a blank line for visual separation (respects quiet mode).
pub fn print_blank_line() {
  if !is_quiet() {
    println!();
  }
}

/// Print the list of files lacking the header.
///
/// Shows up to `DEFAULT_FILE_LIST_LIMIT` files unless verbose. In quiet mode
/// every path is printed, bare.
pub fn print_missing_files(files: &[&FileReport], root: Option<&Path>) {
  if files.is_empty() {
    return;
  }

  if is_quiet() {
    for file in files {
      println!("{}", make_relative_path(&file.path, root));
    }
    return;
  }

  let count = files.len();
  let header = format!(
    "{} {} {} missing the header:",
    symbols::FAILURE.if_supports_color(Stream::Stdout, |s| s.red()),
    count,
    if count == 1 { "file" } else { "files" }
  );
  println!("{}", header);

  print_file_list(files, root);
}

/// Print the list of files the header was inserted into.
pub fn print_inserted_files(files: &[&FileReport], root: Option<&Path>) {
  if is_quiet() || files.is_empty() {
    return;
  }

  let count = files.len();
  let header = format!(
    "{} Added header to {} {}:",
    symbols::SUCCESS.if_supports_color(Stream::Stdout, |s| s.green()),
    count,
    if count == 1 { "file" } else { "files" }
  );
  println!("{}", header);

  print_file_list(files, root);
}

fn print_file_list(files: &[&FileReport], root: Option<&Path>) {
  let count = files.len();
  let limit = if is_verbose() { count } else { DEFAULT_FILE_LIST_LIMIT };

  for file in files.iter().take(limit) {
    println!("  {}", make_relative_path(&file.path, root));
  }

  if count > limit {
    let more = format!("... and {} more (use -v to see all)", count - limit);
    println!("  {}", more.if_supports_color(Stream::Stdout, |s| s.dimmed()));
  }
}

/// Print the success message when every file has the header.
pub fn print_all_files_ok() {
  if is_quiet() {
    return;
  }

  println!(
    "{} All files have the header.",
    symbols::SUCCESS.if_supports_color(Stream::Stdout, |s| s.green())
  );
}

/// Print the processing summary.
///
/// Format: "Summary: X OK, Y missing" (plus "Z added" in insert mode).
/// In verbose mode, also shows timing.
pub fn print_summary(summary: &ProcessingSummary, insert_mode: bool) {
  if is_quiet() {
    return;
  }

  let ok_str = summary.files_with_header.if_supports_color(Stream::Stdout, |s| s.cyan());
  let missing = summary.files_missing_header;
  let missing_str = if missing > 0 {
    missing.if_supports_color(Stream::Stdout, |s| s.red()).to_string()
  } else {
    missing.if_supports_color(Stream::Stdout, |s| s.cyan()).to_string()
  };

  let mut summary_line = format!("Summary: {} OK, {} missing", ok_str, missing_str);

  if insert_mode {
    summary_line.push_str(&format!(
      ", {} added",
      summary.headers_inserted.if_supports_color(Stream::Stdout, |s| s.green())
    ));
  }

  if is_verbose() {
    summary_line.push_str(&format!(" ({:.2}s)", summary.processing_time.as_secs_f64()));
  }

  println!("{}", summary_line);
}

/// Print a hint for the user about what to do next.
pub fn print_hint(message: &str) {
  if is_quiet() {
    return;
  }

  println!("{}", message.if_supports_color(Stream::Stdout, |s| s.yellow()));
}

/// Make a path relative to the scan root for display.
fn make_relative_path(path: &Path, root: Option<&Path>) -> String {
  let relative = root.and_then(|root| {
    path
      .strip_prefix(root)
      .ok()
      .map(Path::to_path_buf)
      .or_else(|| pathdiff::diff_paths(path, root))
  });

  match relative {
    Some(relative) if !relative.as_os_str().is_empty() => relative.to_string_lossy().to_string(),
    _ => path.to_string_lossy().to_string(),
  }
}
