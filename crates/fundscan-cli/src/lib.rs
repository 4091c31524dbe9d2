//! Fundscan CLI library
//!
//! Wires configuration, the completion provider, the extractor and the
//! report writer into a sequential per-document pipeline.

#![warn(missing_docs)]

pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
pub mod pipeline;

pub use cli::{Cli, OverflowArg};
pub use config::{ConfigError, Settings};
pub use error::{CliError, Result};
pub use pipeline::{discover_pdfs, Pipeline, PipelineError};
