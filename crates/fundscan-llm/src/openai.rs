//! OpenAI Provider Implementation
//!
//! Talks to an OpenAI-compatible completions endpoint
//! (`POST {base_url}/completions`). Calls are blocking and are not retried;
//! a failed call surfaces as an `LlmError` to the caller.

use crate::LlmError;
use fundscan_domain::{CompletionProvider, CompletionRequest};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::debug;

/// Default API base URL
pub const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";

/// Default timeout for completion requests (60 seconds)
pub const DEFAULT_TIMEOUT_SECS: u64 = 60;

/// Completion provider backed by the OpenAI HTTP API
pub struct OpenAiProvider {
    base_url: String,
    api_key: String,
    client: reqwest::blocking::Client,
}

/// Request body for the completions API
#[derive(Debug, Serialize)]
struct CompletionBody<'a> {
    model: &'a str,
    prompt: &'a str,
    max_tokens: u32,
    temperature: f32,
}

/// Response from the completions API
#[derive(Debug, Deserialize)]
struct CompletionResponse {
    choices: Vec<CompletionChoice>,
}

#[derive(Debug, Deserialize)]
struct CompletionChoice {
    text: String,
}

impl OpenAiProvider {
    /// Create a provider against the public API with the default timeout
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use fundscan_llm::OpenAiProvider;
    ///
    /// let provider = OpenAiProvider::new("sk-...").unwrap();
    /// ```
    pub fn new(api_key: impl Into<String>) -> Result<Self, LlmError> {
        Self::with_timeout(api_key, Duration::from_secs(DEFAULT_TIMEOUT_SECS))
    }

    /// Create a provider with an explicit request timeout
    pub fn with_timeout(api_key: impl Into<String>, timeout: Duration) -> Result<Self, LlmError> {
        let client = reqwest::blocking::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| LlmError::Other(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            api_key: api_key.into(),
            client,
        })
    }

    /// Point the provider at another OpenAI-compatible server
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    fn endpoint(&self) -> String {
        format!("{}/completions", self.base_url)
    }
}

impl CompletionProvider for OpenAiProvider {
    type Error = LlmError;

    fn complete(&self, request: &CompletionRequest) -> Result<String, Self::Error> {
        let body = CompletionBody {
            model: &request.model,
            prompt: &request.prompt,
            max_tokens: request.max_tokens,
            temperature: request.temperature,
        };

        debug!(
            "Completion request: model={}, max_tokens={}, prompt {} chars",
            request.model,
            request.max_tokens,
            request.prompt.len()
        );

        let response = self
            .client
            .post(self.endpoint())
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .map_err(|e| LlmError::Communication(format!("Request failed: {}", e)))?;

        let status = response.status();
        let text = response
            .text()
            .map_err(|e| LlmError::Communication(format!("Failed to read body: {}", e)))?;

        if status.is_success() {
            return parse_completion(&text);
        }

        Err(match status {
            reqwest::StatusCode::UNAUTHORIZED => LlmError::Unauthorized,
            reqwest::StatusCode::NOT_FOUND => LlmError::ModelNotAvailable(request.model.clone()),
            reqwest::StatusCode::TOO_MANY_REQUESTS => LlmError::RateLimitExceeded,
            _ => LlmError::Communication(format!("HTTP {}: {}", status, text)),
        })
    }
}

/// Pull the first choice's text out of a completions response body
fn parse_completion(body: &str) -> Result<String, LlmError> {
    let response: CompletionResponse = serde_json::from_str(body)
        .map_err(|e| LlmError::InvalidResponse(format!("Failed to parse response: {}", e)))?;

    response
        .choices
        .into_iter()
        .next()
        .map(|choice| choice.text)
        .ok_or_else(|| LlmError::InvalidResponse("Response has no choices".to_string()))
}
