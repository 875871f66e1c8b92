//! # Check Command
//!
//! This module implements the check/insert command for reference headers.

use std::path::{Path, PathBuf};
use std::process;

use anyhow::{Context, Result};
use clap::Args;
use tracing::debug;

use crate::config::{Config, load_config, validate_extension};
use crate::file_filter::ExtensionFilter;
use crate::header::{Header, LineEnding, MatchMode};
use crate::info_log;
use crate::logging::{ColorMode, init_tracing, set_quiet, set_verbose};
use crate::output::{
  print_all_files_ok, print_blank_line, print_hint, print_inserted_files, print_missing_files, print_start_message,
  print_summary,
};
use crate::processor::{Processor, ProcessorConfig, RunOutcome};
use crate::report::{FileReport, ReportFormat, ReportGenerator};

/// Arguments for the check command
#[derive(Args, Debug, Default)]
pub struct CheckArgs {
  /// Directory scanned recursively for candidate files
  #[arg(value_name = "ROOT_DIR")]
  pub root_dir: PathBuf,

  /// File holding the reference header
  #[arg(value_name = "HEADER_FILE")]
  pub header_file: PathBuf,

  /// Extensions to check, without the dot. `*` checks every file.
  #[arg(value_name = "EXTENSIONS")]
  pub extensions: Vec<String>,

  /// Insert the header into every file that lacks it
  #[arg(long, visible_alias = "insert-mode")]
  pub insert: bool,

  /// Only match the first line of the header
  #[arg(long, visible_alias = "first-line-match")]
  pub first_line_only: bool,

  /// Line terminator used when reading the header and the files
  /// [default: native]
  #[arg(long, value_name = "ENDING", value_enum)]
  pub line_ending: Option<LineEnding>,

  /// Path to config file (default: .headertool.toml in the root directory)
  #[arg(long, value_name = "FILE")]
  pub config: Option<PathBuf>,

  /// Ignore config file even if present
  #[arg(long)]
  pub no_config: bool,

  /// Generate a JSON report of header status and save to the specified path
  #[arg(long, value_name = "OUTPUT")]
  pub report_json: Option<PathBuf>,

  /// Generate a CSV report of header status and save to the specified path
  #[arg(long, value_name = "OUTPUT")]
  pub report_csv: Option<PathBuf>,

  /// Exit with status 1 when files lack the header and nothing was inserted
  #[arg(long)]
  pub fail_on_missing: bool,

  /// Increase verbosity (-v info, -vv debug, -vvv trace)
  #[arg(short, long, action = clap::ArgAction::Count)]
  pub verbose: u8,

  /// Only print the paths of files lacking the header
  #[arg(short, long, conflicts_with = "verbose")]
  pub quiet: bool,

  /// Control when to use colored output (auto, never, always)
  #[arg(
    long,
    value_name = "WHEN",
    num_args = 0..=1,
    default_value_t = ColorMode::Auto,
    default_missing_value = "always",
    value_enum
  )]
  pub colors: ColorMode,
}

/// Settings resolved from the command line and the config file.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Settings {
  extension_filter: ExtensionFilter,
  match_mode: MatchMode,
  line_ending: LineEnding,
}

impl Settings {
  /// Command-line values win. Boolean flags can only switch a mode on.
  fn resolve(args: &CheckArgs, config: Option<&Config>) -> Self {
    let extension_filter = if !args.extensions.is_empty() {
      ExtensionFilter::from_extensions(Some(args.extensions.clone()))
    } else {
      config.map(Config::extension_filter).unwrap_or_default()
    };

    let first_line_only = args.first_line_only || config.is_some_and(|c| c.first_line_only);
    let match_mode = if first_line_only {
      MatchMode::FirstLineOnly
    } else {
      MatchMode::FullMatch
    };

    let line_ending = args
      .line_ending
      .or_else(|| config.and_then(|c| c.line_ending))
      .unwrap_or_default();

    Self {
      extension_filter,
      match_mode,
      line_ending,
    }
  }
}

/// Run the check command with the given arguments
pub fn run_check(args: CheckArgs) -> Result<()> {
  init_tracing(args.quiet, args.verbose);

  if args.verbose > 0 {
    set_verbose();
  } else if args.quiet {
    set_quiet();
  }
  args.colors.apply();

  for ext in &args.extensions {
    validate_extension(ext)?;
  }

  let config = load_config(args.config.as_deref(), &args.root_dir, args.no_config)?;
  if config.is_some() {
    debug!("Using configuration file for defaults");
  }

  let settings = Settings::resolve(&args, config.as_ref());
  debug!(
    "Match mode: {}, line ending: {}, filter: {:?}",
    settings.match_mode,
    settings.line_ending.as_str(),
    settings.extension_filter
  );

  let header = Header::load(&args.header_file, settings.line_ending)
    .with_context(|| format!("Failed to load header from {}", args.header_file.display()))?;

  let processor = Processor::new(ProcessorConfig {
    header,
    match_mode: settings.match_mode,
    extension_filter: settings.extension_filter,
    insert_mode: args.insert,
    excluded_paths: config.and_then(|c| c.source).into_iter().collect(),
  });

  print_start_message(&args.root_dir, args.insert);

  let outcome = processor
    .run(&args.root_dir)
    .with_context(|| format!("Failed to process {}", args.root_dir.display()))?;

  print_outcome(&outcome, &args.root_dir, args.insert);

  write_reports(&args, &outcome);

  let has_missing = outcome.summary.files_missing_header > 0;
  if args.fail_on_missing && has_missing {
    process::exit(1);
  }

  Ok(())
}

fn print_outcome(outcome: &RunOutcome, root: &Path, insert_mode: bool) {
  let missing: Vec<&FileReport> = outcome.missing().collect();
  let inserted: Vec<&FileReport> = outcome.inserted().collect();

  print_blank_line();

  if !missing.is_empty() {
    print_missing_files(&missing, Some(root));
  } else if !inserted.is_empty() {
    print_inserted_files(&inserted, Some(root));
  } else {
    print_all_files_ok();
  }

  print_blank_line();
  print_summary(&outcome.summary, insert_mode);

  if !insert_mode && !missing.is_empty() {
    print_blank_line();
    print_hint("Run with --insert to add missing headers.");
  }
}

fn write_reports(args: &CheckArgs, outcome: &RunOutcome) {
  let requested = [
    (ReportFormat::Json, args.report_json.as_deref()),
    (ReportFormat::Csv, args.report_csv.as_deref()),
  ];

  for (format, output_path) in requested {
    let Some(output_path) = output_path else {
      continue;
    };

    let report_generator = ReportGenerator::new(format, output_path);
    if let Err(e) = report_generator.generate(&outcome.reports, &outcome.summary) {
      eprintln!("Error generating {} report: {:#}", format, e);
    } else {
      info_log!("Generated {} report at {}", format, output_path.display());
    }
  }
}
