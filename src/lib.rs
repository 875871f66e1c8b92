//! # headertool
//!
//! A tool that ensures source files begin with a reference header by scanning
//! a directory tree recursively.
//!
//! `headertool` reports every file that does not start with the header and,
//! in insert mode, prepends the header to exactly those files. Files that
//! already carry the header are never touched.
//!
//! ## Features
//!
//! * Recursive scan of a root directory in a deterministic order
//! * Extension filtering, with `*` selecting every file
//! * Full-header or first-line-only matching
//! * Report-only mode (the default) that never modifies a file
//! * JSON and CSV reports
//!
//! ## Usage as a Library
//!
//! ```rust,no_run
//! use std::path::Path;
//!
//! use headertool::file_filter::ExtensionFilter;
//! use headertool::header::{Header, LineEnding};
//! use headertool::processor::{Processor, ProcessorConfig};
//!
//! fn main() -> anyhow::Result<()> {
//!     let header = Header::load(Path::new("HEADER.txt"), LineEnding::Native)?;
//!
//!     let processor = Processor::new(ProcessorConfig {
//!         extension_filter: ExtensionFilter::from_extensions(Some(vec!["java".to_string()])),
//!         ..ProcessorConfig::new(header)
//!     });
//!
//!     let outcome = processor.scan(Path::new("src"))?;
//!     for path in &outcome.missing {
//!         println!("{}", path.display());
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Modules
//!
//! * [`processor`] - Scanning and header insertion
//! * [`header`] - The reference header and matching modes
//! * [`logging`] - Logging utilities for verbose output
//!
//! [`processor`]: crate::processor
//! [`header`]: crate::header
//! [`logging`]: crate::logging

pub mod cli;
pub mod config;
pub mod error;
pub mod file_filter;
pub mod header;
pub mod header_detection;
pub mod logging;
pub mod output;
pub mod processor;
pub mod report;
