//! # Logging Module
//!
//! Two channels of diagnostics:
//!
//! * `tracing` events emitted by the scanner and inserter, rendered by the
//!   subscriber installed with [`init_tracing`] (stderr, filtered by `-v`,
//!   `-q` or `RUST_LOG`);
//! * the [`verbose_log!`](crate::verbose_log) and [`info_log!`](crate::info_log)
//!   macros for messages addressed to the person running the tool.
//!
//! Output mode (normal, quiet, verbose) and colour choice are process-wide and
//! set once by the command before any file is touched.
//!
//! ```rust
//! use headertool::logging::{ColorMode, set_verbose};
//! use headertool::{info_log, verbose_log};
//!
//! set_verbose();
//! ColorMode::Never.apply();
//!
//! verbose_log!("config: {}", ".headertool.toml");
//! info_log!("Generated JSON report at {}", "report.json");
//! ```

mod modes;

pub use modes::{ColorMode, init_tracing, is_quiet, is_verbose, set_quiet, set_verbose};
use owo_colors::{OwoColorize, Stream};

/// `eprintln!` that only fires in verbose mode.
#[macro_export]
macro_rules! verbose_log {
  ($($arg:tt)*) => {
    if $crate::logging::is_verbose() {
      eprintln!($($arg)*);
    }
  };
}

/// Highlighted status line on stdout, silenced by `-q`.
#[macro_export]
macro_rules! info_log {
  ($($arg:tt)*) => {
    if !$crate::logging::is_quiet() {
      $crate::logging::print_info_log(&format!($($arg)*));
    }
  };
}

#[doc(hidden)]
pub fn print_info_log(message: &str) {
  println!("{}", message.if_supports_color(Stream::Stdout, |m| m.yellow()));
}
