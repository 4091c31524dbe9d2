//! Sustainability detection and sentence extraction per page

use crate::config::ExtractorConfig;
use crate::error::ExtractorError;
use crate::prompt::PromptBuilder;
use fundscan_domain::{CompletionProvider, CompletionRequest};
use std::fmt::Display;
use tracing::debug;

/// Asks the completion service about sustainability content on a page
pub struct SustainabilityScanner<'a, P> {
    provider: &'a P,
    config: &'a ExtractorConfig,
}

impl<'a, P> SustainabilityScanner<'a, P>
where
    P: CompletionProvider,
    P::Error: Display,
{
    /// Create a scanner over a provider
    pub fn new(provider: &'a P, config: &'a ExtractorConfig) -> Self {
        Self { provider, config }
    }

    /// Return the page's sustainability sentence, if the service says it has one
    ///
    /// Issues a short yes/no completion first; only when the answer contains
    /// "yes" (case-insensitive) is the extraction completion issued.
    pub fn find_sustainability(&self, page: &str) -> Result<Option<String>, ExtractorError> {
        let prompt = PromptBuilder::new(page).detect_sustainability();
        let answer = self.call(prompt, self.config.detect_max_tokens)?;

        if !answer.to_lowercase().contains("yes") {
            debug!("No sustainability information (answer: {:?})", answer.trim());
            return Ok(None);
        }

        self.get_sustainability(page).map(Some)
    }

    /// Ask for the exact sentence carrying sustainability information
    pub fn get_sustainability(&self, page: &str) -> Result<String, ExtractorError> {
        let prompt = PromptBuilder::new(page).extract_sustainability();
        self.call(prompt, self.config.extract_max_tokens)
    }

    fn call(&self, prompt: String, max_tokens: u32) -> Result<String, ExtractorError> {
        let request = CompletionRequest::new(&self.config.model_name, prompt, max_tokens);
        self.provider
            .complete(&request)
            .map_err(|e| ExtractorError::Llm(e.to_string()))
    }
}
