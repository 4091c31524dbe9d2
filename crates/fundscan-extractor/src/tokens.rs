//! Token counting keyed to the completion model

use crate::error::ExtractorError;
use tiktoken_rs::CoreBPE;

/// Anything that can measure text in tokens
pub trait TokenCount {
    /// Number of tokens `text` occupies
    fn count_tokens(&self, text: &str) -> usize;
}

/// BPE token counter for a specific model
pub struct TokenCounter {
    model: String,
    bpe: CoreBPE,
}

impl TokenCounter {
    /// Resolve the encoding used by `model`
    ///
    /// # Examples
    ///
    /// ```
    /// use fundscan_extractor::TokenCounter;
    ///
    /// let counter = TokenCounter::for_model("gpt-3.5-turbo-instruct").unwrap();
    /// assert!(counter.count("hello world") > 0);
    /// ```
    pub fn for_model(model: &str) -> Result<Self, ExtractorError> {
        let bpe = tiktoken_rs::get_bpe_from_model(model)
            .map_err(|e| ExtractorError::Tokenizer(format!("{}: {}", model, e)))?;

        Ok(Self {
            model: model.to_string(),
            bpe,
        })
    }

    /// Model this counter was built for
    pub fn model(&self) -> &str {
        &self.model
    }

    /// Number of tokens in `text`
    pub fn count(&self, text: &str) -> usize {
        self.bpe.encode_with_special_tokens(text).len()
    }
}

impl TokenCount for TokenCounter {
    fn count_tokens(&self, text: &str) -> usize {
        self.count(text)
    }
}

impl std::fmt::Debug for TokenCounter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenCounter").field("model", &self.model).finish()
    }
}
