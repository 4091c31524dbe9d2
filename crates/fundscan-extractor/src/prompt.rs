//! Prompt text for the completion service

/// Builds the three prompts sent about a piece of text
pub struct PromptBuilder<'a> {
    text: &'a str,
}

impl<'a> PromptBuilder<'a> {
    /// Create a prompt builder over page or chunk text
    pub fn new(text: &'a str) -> Self {
        Self { text }
    }

    /// Yes/no question: does the text carry sustainability information
    pub fn detect_sustainability(&self) -> String {
        self.wrap(DETECT_QUESTION)
    }

    /// Ask for the exact sentence carrying sustainability information
    pub fn extract_sustainability(&self) -> String {
        self.wrap(EXTRACT_QUESTION)
    }

    /// Ask for a brief summary of the text
    pub fn summarize(&self) -> String {
        self.wrap(SUMMARY_QUESTION)
    }

    fn wrap(&self, question: &str) -> String {
        format!("Given the information {}, {}\ntext: ", self.text, question)
    }
}

const DETECT_QUESTION: &str = "is there information about sustainability?";

const EXTRACT_QUESTION: &str = "find exact sentence which contains information about sustainability.";

const SUMMARY_QUESTION: &str = "write a brief summary.";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect_prompt() {
        let prompt = PromptBuilder::new("Our fund invests in wind.").detect_sustainability();
        assert!(prompt.starts_with("Given the information Our fund invests in wind.,"));
        assert!(prompt.contains("is there information about sustainability?"));
        assert!(prompt.ends_with("text: "));
    }

    #[test]
    fn test_extract_prompt() {
        let prompt = PromptBuilder::new("page").extract_sustainability();
        assert!(prompt.contains("find exact sentence"));
        assert!(prompt.contains("page"));
    }

    #[test]
    fn test_summary_prompt() {
        let prompt = PromptBuilder::new("chunk of snippets").summarize();
        assert!(prompt.contains("chunk of snippets"));
        assert!(prompt.contains("write a brief summary."));
    }

    #[test]
    fn test_prompts_are_distinct() {
        let builder = PromptBuilder::new("same text");
        assert_ne!(builder.detect_sustainability(), builder.extract_sustainability());
        assert_ne!(builder.extract_sustainability(), builder.summarize());
    }
}
