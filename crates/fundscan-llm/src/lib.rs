//! Fundscan Completion Provider Layer
//!
//! Implementations of the `CompletionProvider` trait from `fundscan-domain`.
//!
//! # Providers
//!
//! - `MockProvider`: Deterministic mock for testing
//! - `OpenAiProvider`: OpenAI-compatible completions API
//!
//! # Examples
//!
//! ```
//! use fundscan_llm::MockProvider;
//! use fundscan_domain::{CompletionProvider, CompletionRequest};
//!
//! let provider = MockProvider::new("Hello from LLM!");
//! let request = CompletionRequest::new("model", "test prompt", 10);
//! assert_eq!(provider.complete(&request).unwrap(), "Hello from LLM!");
//! ```

#![warn(missing_docs)]

pub mod openai;

use fundscan_domain::{CompletionProvider, CompletionRequest};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use thiserror::Error;

pub use openai::OpenAiProvider;

/// Errors that can occur during completion calls
#[derive(Error, Debug)]
pub enum LlmError {
    /// Network or API communication error
    #[error("Communication error: {0}")]
    Communication(String),

    /// Invalid response from the service
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// API key rejected
    #[error("Unauthorized: check OPENAI_TOKEN")]
    Unauthorized,

    /// Rate limit exceeded
    #[error("Rate limit exceeded")]
    RateLimitExceeded,

    /// Model not available
    #[error("Model not available: {0}")]
    ModelNotAvailable(String),

    /// Generic error
    #[error("LLM error: {0}")]
    Other(String),
}

/// Mock completion provider for deterministic testing
///
/// Returns pre-configured responses without making any network calls.
/// Responses are looked up by exact prompt first, then by the first
/// registered substring the prompt contains, then the default response.
///
/// # Examples
///
/// ```
/// use fundscan_llm::MockProvider;
/// use fundscan_domain::{CompletionProvider, CompletionRequest};
///
/// let mut provider = MockProvider::default();
/// provider.add_rule("carbon", "Yes");
/// let request = CompletionRequest::new("m", "Page about carbon output", 2);
/// assert_eq!(provider.complete(&request).unwrap(), "Yes");
/// ```
#[derive(Debug, Clone)]
pub struct MockProvider {
    default_response: String,
    responses: Arc<Mutex<HashMap<String, String>>>,
    rules: Arc<Mutex<Vec<(String, String)>>>,
    requests: Arc<Mutex<Vec<CompletionRequest>>>,
}

const MOCK_ERROR: &str = "ERROR";

impl MockProvider {
    /// Create a new MockProvider with a fixed response for all prompts
    pub fn new(response: impl Into<String>) -> Self {
        Self {
            default_response: response.into(),
            responses: Arc::new(Mutex::new(HashMap::new())),
            rules: Arc::new(Mutex::new(Vec::new())),
            requests: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Add a specific response for an exact prompt
    pub fn add_response(&mut self, prompt: impl Into<String>, response: impl Into<String>) {
        self.responses
            .lock()
            .unwrap()
            .insert(prompt.into(), response.into());
    }

    /// Add a response for any prompt containing `needle`
    ///
    /// Rules are checked in insertion order.
    pub fn add_rule(&mut self, needle: impl Into<String>, response: impl Into<String>) {
        self.rules
            .lock()
            .unwrap()
            .push((needle.into(), response.into()));
    }

    /// Configure to return an error for a specific prompt
    pub fn add_error(&mut self, prompt: impl Into<String>) {
        self.add_response(prompt, MOCK_ERROR);
    }

    /// Configure to return an error for any prompt containing `needle`
    pub fn add_error_rule(&mut self, needle: impl Into<String>) {
        self.add_rule(needle, MOCK_ERROR);
    }

    /// Get the number of times complete was called
    pub fn call_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }

    /// Every request received so far, in call order
    pub fn requests(&self) -> Vec<CompletionRequest> {
        self.requests.lock().unwrap().clone()
    }

    /// Forget recorded requests
    pub fn reset_call_count(&self) {
        self.requests.lock().unwrap().clear();
    }

    fn lookup(&self, prompt: &str) -> String {
        if let Some(response) = self.responses.lock().unwrap().get(prompt) {
            return response.clone();
        }

        self.rules
            .lock()
            .unwrap()
            .iter()
            .find(|(needle, _)| prompt.contains(needle.as_str()))
            .map(|(_, response)| response.clone())
            .unwrap_or_else(|| self.default_response.clone())
    }
}

impl Default for MockProvider {
    fn default() -> Self {
        Self::new("Default mock response")
    }
}

impl CompletionProvider for MockProvider {
    type Error = LlmError;

    fn complete(&self, request: &CompletionRequest) -> Result<String, Self::Error> {
        self.requests.lock().unwrap().push(request.clone());

        let response = self.lookup(&request.prompt);
        if response == MOCK_ERROR {
            return Err(LlmError::Other("Mock error".to_string()));
        }
        Ok(response)
    }
}
