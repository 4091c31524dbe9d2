//! Trait definitions for external interactions
//!
//! These traits define the boundaries between domain logic and infrastructure.
//! Infrastructure implementations live in other crates.

/// A single request to the text-completion service
#[derive(Debug, Clone, PartialEq)]
pub struct CompletionRequest {
    /// Model name the service should run
    pub model: String,
    /// Full prompt text
    pub prompt: String,
    /// Cap on generated tokens
    pub max_tokens: u32,
    /// Sampling temperature
    pub temperature: f32,
}

impl CompletionRequest {
    /// Create a deterministic (temperature 0) request
    pub fn new(model: impl Into<String>, prompt: impl Into<String>, max_tokens: u32) -> Self {
        Self {
            model: model.into(),
            prompt: prompt.into(),
            max_tokens,
            temperature: 0.0,
        }
    }
}

/// Trait for text-completion providers
///
/// Implemented by the infrastructure layer (fundscan-llm). Calls block until
/// the service answers.
pub trait CompletionProvider {
    /// Error type for completion operations
    type Error;

    /// Return the completion text for a request
    fn complete(&self, request: &CompletionRequest) -> Result<String, Self::Error>;
}

impl<P: CompletionProvider + ?Sized> CompletionProvider for &P {
    type Error = P::Error;

    fn complete(&self, request: &CompletionRequest) -> Result<String, Self::Error> {
        (**self).complete(request)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_is_deterministic() {
        let request = CompletionRequest::new("model", "prompt", 2);
        assert_eq!(request.temperature, 0.0);
        assert_eq!(request.max_tokens, 2);
        assert_eq!(request.model, "model");
        assert_eq!(request.prompt, "prompt");
    }
}
