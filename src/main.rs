//! # headertool
//!
//! A tool that finds source files lacking a reference header and optionally
//! inserts it.

use anyhow::Result;
use headertool::cli::{Cli, run_check};

fn main() -> Result<()> {
  let cli = Cli::parse_args();

  run_check(cli.check_args)
}
