//! Token-budgeted chunking of text fragments

use crate::tokens::TokenCount;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// Granularity a text is cut into before chunking
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ChunkUnit {
    /// One fragment per character
    Character,
    /// Split after every ". "
    Sentence,
    /// Split after every blank line
    Paragraph,
    /// The whole text is a single fragment
    Fragment,
}

impl ChunkUnit {
    /// Cut `text` into fragments; concatenating them gives back `text`
    pub fn split(self, text: &str) -> Vec<&str> {
        match self {
            ChunkUnit::Character => text
                .char_indices()
                .map(|(i, c)| &text[i..i + c.len_utf8()])
                .collect(),
            ChunkUnit::Sentence => text.split_inclusive(". ").collect(),
            ChunkUnit::Paragraph => text.split_inclusive("\n\n").collect(),
            ChunkUnit::Fragment if text.is_empty() => Vec::new(),
            ChunkUnit::Fragment => vec![text],
        }
    }
}

/// What happens to the fragment that would push a chunk over budget
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum OverflowPolicy {
    /// Close the chunk and start the next one with the fragment
    #[default]
    CarryOver,
    /// Close the chunk and discard the fragment
    Drop,
}

/// Groups fragments into chunks that stay under a token budget
///
/// A fragment joins the running chunk while
/// `running_tokens + tokens(fragment) < budget`, with each fragment counted
/// on its own.
pub struct Chunker<'a, T: TokenCount> {
    counter: &'a T,
    budget: usize,
    policy: OverflowPolicy,
}

impl<'a, T: TokenCount> Chunker<'a, T> {
    /// Create a chunker with the default `CarryOver` policy
    pub fn new(counter: &'a T, budget: usize) -> Self {
        Self {
            counter,
            budget,
            policy: OverflowPolicy::default(),
        }
    }

    /// Use a different overflow policy
    pub fn with_policy(mut self, policy: OverflowPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Chunk fragments supplied by the caller
    pub fn chunk<I>(&self, fragments: I) -> Chunks<'a, T, I::IntoIter>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        Chunks {
            counter: self.counter,
            budget: self.budget,
            policy: self.policy,
            fragments: fragments.into_iter(),
            chunk: String::new(),
            tokens: 0,
            pending: None,
        }
    }

    /// Cut `text` by `unit`, then chunk the pieces
    pub fn chunk_text<'t>(
        &self,
        text: &'t str,
        unit: ChunkUnit,
    ) -> Chunks<'a, T, std::vec::IntoIter<&'t str>> {
        self.chunk(unit.split(text))
    }
}

/// Lazy sequence of chunks produced by [`Chunker`]
///
/// Never yields an empty chunk.
pub struct Chunks<'a, T: TokenCount, I> {
    counter: &'a T,
    budget: usize,
    policy: OverflowPolicy,
    fragments: I,
    chunk: String,
    tokens: usize,
    pending: Option<String>,
}

impl<T, I> Iterator for Chunks<'_, T, I>
where
    T: TokenCount,
    I: Iterator,
    I::Item: AsRef<str>,
{
    type Item = String;

    fn next(&mut self) -> Option<String> {
        if let Some(oversized) = self.pending.take() {
            return Some(oversized);
        }

        for item in self.fragments.by_ref() {
            let fragment = item.as_ref();
            let tokens = self.counter.count_tokens(fragment);

            if self.tokens + tokens < self.budget {
                self.chunk.push_str(fragment);
                self.tokens += tokens;
                continue;
            }

            let full = std::mem::take(&mut self.chunk);
            self.tokens = 0;

            match self.policy {
                OverflowPolicy::Drop => {
                    debug!(tokens, "Dropping fragment that overflowed the chunk");
                }
                OverflowPolicy::CarryOver if tokens < self.budget => {
                    self.chunk.push_str(fragment);
                    self.tokens = tokens;
                }
                OverflowPolicy::CarryOver => {
                    warn!(
                        tokens,
                        budget = self.budget,
                        "Fragment exceeds the token budget on its own, emitting it alone"
                    );
                    if full.is_empty() {
                        return Some(fragment.to_string());
                    }
                    self.pending = Some(fragment.to_string());
                }
            }

            if !full.is_empty() {
                return Some(full);
            }
        }

        if self.chunk.is_empty() {
            None
        } else {
            self.tokens = 0;
            Some(std::mem::take(&mut self.chunk))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// One token per character keeps the arithmetic obvious
    struct CharTokens;

    impl TokenCount for CharTokens {
        fn count_tokens(&self, text: &str) -> usize {
            text.chars().count()
        }
    }

    #[test]
    fn test_under_budget_is_single_chunk() {
        let chunker = Chunker::new(&CharTokens, 100);
        let chunks: Vec<_> = chunker.chunk(["abc", "def", "ghi"]).collect();
        assert_eq!(chunks, vec!["abcdefghi"]);
    }

    #[test]
    fn test_empty_input_yields_nothing() {
        let chunker = Chunker::new(&CharTokens, 10);
        let fragments: Vec<String> = Vec::new();
        assert_eq!(chunker.chunk(fragments).count(), 0);
        assert_eq!(chunker.chunk_text("", ChunkUnit::Sentence).count(), 0);
    }

    #[test]
    fn test_budget_is_exclusive() {
        // 5 + 5 == 10 is not < 10
        let chunker = Chunker::new(&CharTokens, 10);
        let chunks: Vec<_> = chunker.chunk(["aaaaa", "bbbbb"]).collect();
        assert_eq!(chunks, vec!["aaaaa", "bbbbb"]);
    }

    #[test]
    fn test_carry_over_keeps_every_fragment() {
        let chunker = Chunker::new(&CharTokens, 8);
        let fragments = ["aaa", "bbb", "ccc", "ddd", "eeee"];
        let chunks: Vec<_> = chunker.chunk(fragments).collect();

        assert_eq!(chunks, vec!["aaabbb", "cccddd", "eeee"]);
        assert_eq!(chunks.concat(), fragments.concat());
    }

    #[test]
    fn test_drop_policy_discards_overflowing_fragment() {
        let chunker = Chunker::new(&CharTokens, 8).with_policy(OverflowPolicy::Drop);
        let chunks: Vec<_> = chunker.chunk(["aaa", "bbb", "ccc", "ddd", "e"]).collect();

        assert_eq!(chunks, vec!["aaabbb", "ddde"]);
    }

    #[test]
    fn test_drop_policy_never_yields_empty_chunk() {
        let chunker = Chunker::new(&CharTokens, 4).with_policy(OverflowPolicy::Drop);
        let chunks: Vec<_> = chunker.chunk(["toolong", "ab"]).collect();

        assert_eq!(chunks, vec!["ab"]);
    }

    #[test]
    fn test_oversized_fragment_is_emitted_alone() {
        let chunker = Chunker::new(&CharTokens, 5);
        let chunks: Vec<_> = chunker.chunk(["ab", "0123456789", "cd"]).collect();

        assert_eq!(chunks, vec!["ab", "0123456789", "cd"]);
    }

    #[test]
    fn test_oversized_first_fragment() {
        let chunker = Chunker::new(&CharTokens, 5);
        let chunks: Vec<_> = chunker.chunk(["0123456789", "ab"]).collect();

        assert_eq!(chunks, vec!["0123456789", "ab"]);
    }

    #[test]
    fn test_chunks_is_lazy() {
        let chunker = Chunker::new(&CharTokens, 4);
        let mut chunks = chunker.chunk(["aa", "bb", "cc"]);

        assert_eq!(chunks.next().as_deref(), Some("aa"));
        assert_eq!(chunks.next().as_deref(), Some("bb"));
        assert_eq!(chunks.next().as_deref(), Some("cc"));
        assert_eq!(chunks.next(), None);
        assert_eq!(chunks.next(), None);
    }

    #[test]
    fn test_split_by_character() {
        assert_eq!(ChunkUnit::Character.split("aé"), vec!["a", "é"]);
    }

    #[test]
    fn test_split_by_sentence() {
        let parts = ChunkUnit::Sentence.split("One. Two. Three");
        assert_eq!(parts, vec!["One. ", "Two. ", "Three"]);
    }

    #[test]
    fn test_split_by_paragraph() {
        let parts = ChunkUnit::Paragraph.split("a\n\nb");
        assert_eq!(parts, vec!["a\n\n", "b"]);
    }

    #[test]
    fn test_chunk_text_by_sentence() {
        let chunker = Chunker::new(&CharTokens, 12);
        let chunks: Vec<_> = chunker
            .chunk_text("One. Two. Three. Four.", ChunkUnit::Sentence)
            .collect();

        assert_eq!(chunks, vec!["One. Two. ", "Three. ", "Four."]);
    }

    #[test]
    fn test_with_real_tokenizer() {
        let counter = crate::TokenCounter::for_model("gpt-4").unwrap();
        let chunker = Chunker::new(&counter, 1024);
        let fragments = vec!["We disclose our carbon footprint annually.".to_string(); 3];
        let chunks: Vec<_> = chunker.chunk(&fragments).collect();

        assert_eq!(chunks, vec![fragments.concat()]);
    }
}
