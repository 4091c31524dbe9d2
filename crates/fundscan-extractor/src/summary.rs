//! Chunked summarization of collected sustainability snippets

use crate::chunking::Chunker;
use crate::config::ExtractorConfig;
use crate::error::ExtractorError;
use crate::prompt::PromptBuilder;
use crate::tokens::TokenCount;
use fundscan_domain::{CompletionProvider, CompletionRequest};
use std::fmt::Display;
use tracing::{debug, info};

/// Summarizes snippets chunk by chunk under a token budget
pub struct Summarizer<'a, P, T: TokenCount> {
    provider: &'a P,
    counter: &'a T,
    config: &'a ExtractorConfig,
}

impl<'a, P, T> Summarizer<'a, P, T>
where
    P: CompletionProvider,
    P::Error: Display,
    T: TokenCount,
{
    /// Create a summarizer
    pub fn new(provider: &'a P, counter: &'a T, config: &'a ExtractorConfig) -> Self {
        Self {
            provider,
            counter,
            config,
        }
    }

    /// Summarize all snippets into a list of sentences
    ///
    /// Each snippet is one chunking fragment. Chunk summaries are joined with
    /// single spaces and split on `". "`, in chunk order.
    pub fn get_sust_summary<S: AsRef<str>>(&self, snippets: &[S]) -> Result<Vec<String>, ExtractorError> {
        let chunker = Chunker::new(self.counter, self.config.chunk_token_limit)
            .with_policy(self.config.overflow_policy);

        let mut summaries = Vec::new();
        for (idx, chunk) in chunker.chunk(snippets).enumerate() {
            debug!("Summarizing chunk {} ({} chars)", idx + 1, chunk.len());

            let request = CompletionRequest::new(
                &self.config.model_name,
                PromptBuilder::new(&chunk).summarize(),
                self.config.summary_max_tokens,
            );
            let summary = self
                .provider
                .complete(&request)
                .map_err(|e| ExtractorError::Llm(e.to_string()))?;
            summaries.push(summary);
        }

        info!("Summarized {} snippets in {} chunks", snippets.len(), summaries.len());

        if summaries.is_empty() {
            return Ok(Vec::new());
        }
        Ok(split_sentences(&summaries.join(" ")))
    }
}

/// Split a summary into sentence-like pieces on the literal `". "`
///
/// # Examples
///
/// ```
/// use fundscan_extractor::split_sentences;
///
/// assert_eq!(split_sentences("One. Two. Three."), vec!["One", "Two", "Three."]);
/// ```
pub fn split_sentences(summary: &str) -> Vec<String> {
    summary.split(". ").map(str::to_string).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use fundscan_llm::MockProvider;

    struct CharTokens;

    impl TokenCount for CharTokens {
        fn count_tokens(&self, text: &str) -> usize {
            text.chars().count()
        }
    }

    #[test]
    fn test_no_snippets_no_calls() {
        let provider = MockProvider::new("unused");
        let config = ExtractorConfig::new("m", vec![8]);
        let summarizer = Summarizer::new(&provider, &CharTokens, &config);

        let summary = summarizer.get_sust_summary::<String>(&[]).unwrap();
        assert!(summary.is_empty());
        assert_eq!(provider.call_count(), 0);
    }

    #[test]
    fn test_single_chunk_summary() {
        let provider = MockProvider::new("The fund tracks emissions. It reports yearly.");
        let config = ExtractorConfig::new("m", vec![8]);
        let summarizer = Summarizer::new(&provider, &CharTokens, &config);

        let summary = summarizer
            .get_sust_summary(&["Carbon is tracked.", "Reports are yearly."])
            .unwrap();

        assert_eq!(summary, vec!["The fund tracks emissions", "It reports yearly."]);
        assert_eq!(provider.call_count(), 1);

        let request = &provider.requests()[0];
        assert_eq!(request.max_tokens, 1000);
        assert!(request.prompt.contains("Carbon is tracked.Reports are yearly."));
    }

    #[test]
    fn test_multi_chunk_summaries_joined_in_order() {
        let mut provider = MockProvider::default();
        provider.add_rule("first", "Alpha. Beta.");
        provider.add_rule("second", "Gamma.");
        let mut config = ExtractorConfig::new("m", vec![8]);
        config.chunk_token_limit = 10;
        let summarizer = Summarizer::new(&provider, &CharTokens, &config);

        let summary = summarizer.get_sust_summary(&["first", "second"]).unwrap();

        assert_eq!(provider.call_count(), 2);
        assert_eq!(summary, vec!["Alpha", "Beta", "Gamma."]);
    }

    #[test]
    fn test_provider_error_aborts() {
        let mut provider = MockProvider::default();
        provider.add_error_rule("write a brief summary");
        let config = ExtractorConfig::new("m", vec![8]);
        let summarizer = Summarizer::new(&provider, &CharTokens, &config);

        let result = summarizer.get_sust_summary(&["snippet"]);
        assert!(matches!(result, Err(ExtractorError::Llm(_))));
    }

    #[test]
    fn test_split_sentences_keeps_empty_tail() {
        assert_eq!(split_sentences("A. "), vec!["A", ""]);
    }
}
