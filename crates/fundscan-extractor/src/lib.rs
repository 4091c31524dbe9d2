//! Fundscan Extractor
//!
//! Reads fund documents and pulls out the two things a disclosure report
//! needs: the regulatory article the fund is classified under, and the
//! sustainability statements spread across its pages.
//!
//! # Architecture
//!
//! ```text
//! PDF → pages → { ArticleFinder, SustainabilityScanner } → Summarizer
//!                                        ↓
//!                               CompletionProvider
//! ```
//!
//! # Example Usage
//!
//! ```no_run
//! use fundscan_extractor::{extract_pages, Extractor, ExtractorConfig};
//! use fundscan_llm::MockProvider;
//! use std::path::Path;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = ExtractorConfig::new("gpt-3.5-turbo-instruct", vec![8, 9]);
//! let extractor = Extractor::new(MockProvider::new("No"), config)?;
//!
//! let document = extract_pages(Path::new("fund.pdf"))?;
//! for page in &document.pages {
//!     if let Some(found) = extractor.find_article(&page.text, page.index) {
//!         println!("{}", found);
//!     }
//! }
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]

mod error;
mod config;
mod pages;
mod tokens;
mod chunking;
mod prompt;
mod article;
mod sustainability;
mod summary;
mod progress;
mod extractor;

#[cfg(any(test, feature = "test-util"))]
pub mod testing;


pub use error::ExtractorError;
pub use config::ExtractorConfig;
pub use pages::extract_pages;
pub use tokens::{TokenCount, TokenCounter};
pub use chunking::{ChunkUnit, Chunker, Chunks, OverflowPolicy};
pub use prompt::PromptBuilder;
pub use article::ArticleFinder;
pub use sustainability::SustainabilityScanner;
pub use summary::{split_sentences, Summarizer};
pub use extractor::{DocumentScan, Extractor};
