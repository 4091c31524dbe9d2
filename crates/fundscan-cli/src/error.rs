//! Error types for the CLI application.

use crate::config::ConfigError;
use crate::pipeline::PipelineError;
use thiserror::Error;

/// Result type alias for CLI operations.
pub type Result<T> = std::result::Result<T, CliError>;

/// CLI-specific errors.
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Completion provider could not be set up
    #[error("LLM error: {0}")]
    Llm(#[from] fundscan_llm::LlmError),

    /// Extractor could not be set up
    #[error("Extractor error: {0}")]
    Extractor(#[from] fundscan_extractor::ExtractorError),

    /// Document processing failed
    #[error(transparent)]
    Pipeline(#[from] PipelineError),
}
