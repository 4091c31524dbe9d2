//! Error types for the Extractor

use thiserror::Error;

/// Errors that can occur during extraction
#[derive(Error, Debug)]
pub enum ExtractorError {
    /// Completion provider error
    #[error("LLM error: {0}")]
    Llm(String),

    /// PDF could not be opened or parsed
    #[error("PDF error: {0}")]
    Pdf(String),

    /// A page produced no extractable text
    #[error("Page {page} has no extractable text")]
    EmptyPage {
        /// 0-based page index
        page: usize,
    },

    /// Tokenizer could not be resolved for the model
    #[error("Tokenizer error: {0}")]
    Tokenizer(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}
