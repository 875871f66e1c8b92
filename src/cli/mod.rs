//! # CLI Module
//!
//! This module contains the command-line interface implementation.
//! It uses clap for argument parsing.

mod check;

pub use check::{CheckArgs, run_check};
use clap::Parser;
use clap::builder::styling::{AnsiColor, Color, Style, Styles};

const CUSTOM_STYLES: Styles = Styles::styled()
  .header(Style::new().fg_color(Some(Color::Ansi(AnsiColor::Green))).bold())
  .usage(Style::new().fg_color(Some(Color::Ansi(AnsiColor::Green))).bold())
  .literal(Style::new().fg_color(Some(Color::Ansi(AnsiColor::Blue))).bold())
  .placeholder(Style::new().fg_color(Some(Color::Ansi(AnsiColor::Cyan))))
  .error(Style::new().fg_color(Some(Color::Ansi(AnsiColor::Red))).bold())
  .valid(Style::new().fg_color(Some(Color::Ansi(AnsiColor::Green))))
  .invalid(Style::new().fg_color(Some(Color::Ansi(AnsiColor::Yellow))));

const VERSION: &str = concat!(env!("CARGO_PKG_VERSION"), " (", env!("GIT_HASH"), ")");

/// Top-level CLI arguments
#[derive(Parser, Debug)]
#[command(
  author,
  version = VERSION,
  about,
  styles = CUSTOM_STYLES,
  after_help = "Examples:
  # List every .java and .xml file under src/ that lacks the header
  headertool src/ HEADER.txt java xml

  # Insert the header into every file that lacks it
  headertool --insert src/ HEADER.txt java

  # Check every file, matching only the header's first line
  headertool --first-line-only src/ HEADER.txt '*'

  # Print bare paths for scripting and fail when any file lacks the header
  headertool -q --fail-on-missing src/ HEADER.txt java

  # Write a JSON report of header status
  headertool --report-json report.json src/ HEADER.txt java
",
  help_template = "{before-help}{name} v{version}
{about-section}
{usage-heading} {usage}

{all-args}{after-help}
"
)]
pub struct Cli {
  #[command(flatten)]
  pub check_args: CheckArgs,
}

impl Cli {
  /// Parse CLI arguments and return the Cli struct
  pub fn parse_args() -> Self {
    Self::parse()
  }
}
