//! Configuration for the Extractor

use crate::chunking::OverflowPolicy;
use serde::{Deserialize, Serialize};

/// Default token budget per summary chunk
pub const DEFAULT_CHUNK_TOKEN_LIMIT: usize = 1024;

/// Configuration for the Extractor
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtractorConfig {
    /// Completion model name, also selects the tokenizer
    pub model_name: String,

    /// Candidate article numbers, checked in order
    pub article_nums: Vec<u32>,

    /// Token budget for each summary chunk
    pub chunk_token_limit: usize,

    /// What to do with the fragment that overflows a chunk
    pub overflow_policy: OverflowPolicy,

    /// Output cap for the yes/no detection call
    pub detect_max_tokens: u32,

    /// Output cap for the sentence extraction call
    pub extract_max_tokens: u32,

    /// Output cap for each chunk summary
    pub summary_max_tokens: u32,

    /// Draw a per-page progress bar while scanning
    #[serde(default)]
    pub show_progress: bool,
}

impl ExtractorConfig {
    /// Configuration with default limits for a model and candidate articles
    pub fn new(model_name: impl Into<String>, article_nums: Vec<u32>) -> Self {
        Self {
            model_name: model_name.into(),
            article_nums,
            chunk_token_limit: DEFAULT_CHUNK_TOKEN_LIMIT,
            overflow_policy: OverflowPolicy::default(),
            detect_max_tokens: 2,
            extract_max_tokens: 100,
            summary_max_tokens: 1000,
            show_progress: false,
        }
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.model_name.trim().is_empty() {
            return Err("model_name must not be empty".to_string());
        }
        if self.chunk_token_limit == 0 {
            return Err("chunk_token_limit must be greater than 0".to_string());
        }
        if self.detect_max_tokens == 0 || self.extract_max_tokens == 0 || self.summary_max_tokens == 0 {
            return Err("max token caps must be greater than 0".to_string());
        }
        Ok(())
    }
}
