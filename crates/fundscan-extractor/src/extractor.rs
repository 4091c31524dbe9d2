//! Core Extractor implementation

use crate::article::ArticleFinder;
use crate::config::ExtractorConfig;
use crate::error::ExtractorError;
use crate::progress::page_progress;
use crate::summary::Summarizer;
use crate::sustainability::SustainabilityScanner;
use crate::tokens::TokenCounter;
use fundscan_domain::{ArticleMatch, CompletionProvider, Document};
use std::fmt::Display;
use tracing::{debug, info};

/// Everything collected from one pass over a document
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DocumentScan {
    /// Article matches, in page order
    pub article_results: Vec<ArticleMatch>,
    /// Sustainability snippets, in page order
    pub sust_results: Vec<String>,
}

impl DocumentScan {
    /// Distinct article numbers found, in first-seen order
    pub fn distinct_articles(&self) -> Vec<u32> {
        let mut seen = Vec::new();
        for found in &self.article_results {
            if !seen.contains(&found.n_article) {
                seen.push(found.n_article);
            }
        }
        seen
    }
}

/// Runs article classification, sustainability extraction and summarization
/// against one completion provider
pub struct Extractor<P> {
    provider: P,
    counter: TokenCounter,
    finder: ArticleFinder,
    config: ExtractorConfig,
}

impl<P> Extractor<P>
where
    P: CompletionProvider,
    P::Error: Display,
{
    /// Create a new Extractor
    ///
    /// Validates the configuration and resolves the tokenizer for the model.
    pub fn new(provider: P, config: ExtractorConfig) -> Result<Self, ExtractorError> {
        config.validate().map_err(ExtractorError::Config)?;
        let counter = TokenCounter::for_model(&config.model_name)?;
        let finder = ArticleFinder::new(config.article_nums.clone());

        Ok(Self {
            provider,
            counter,
            finder,
            config,
        })
    }

    /// Active configuration
    pub fn config(&self) -> &ExtractorConfig {
        &self.config
    }

    /// Underlying completion provider
    pub fn provider(&self) -> &P {
        &self.provider
    }

    /// Classification statement on a page, if any
    pub fn find_article(&self, page: &str, page_num: usize) -> Option<ArticleMatch> {
        self.finder.find_article(page, page_num)
    }

    /// Sustainability sentence on a page, if the service finds one
    pub fn find_sustainability(&self, page: &str) -> Result<Option<String>, ExtractorError> {
        SustainabilityScanner::new(&self.provider, &self.config).find_sustainability(page)
    }

    /// Summary sentences for the collected snippets
    pub fn get_sust_summary<S: AsRef<str>>(&self, snippets: &[S]) -> Result<Vec<String>, ExtractorError> {
        Summarizer::new(&self.provider, &self.counter, &self.config).get_sust_summary(snippets)
    }

    /// Run both page-level checks over every page of a document
    ///
    /// Blank extraction replies are not collected.
    pub fn scan_document(&self, document: &Document) -> Result<DocumentScan, ExtractorError> {
        info!("Collecting data from {} pages of {}...", document.page_count(), document.name);

        let progress = page_progress(document.page_count(), self.config.show_progress);
        progress.set_message(document.name.clone());

        let mut scan = DocumentScan::default();
        for page in &document.pages {
            debug!("Page {}/{}", page.index + 1, document.page_count());

            let sust_info = self.find_sustainability(&page.text)?;
            if let Some(article_info) = self.find_article(&page.text, page.index) {
                scan.article_results.push(article_info);
            }
            match sust_info {
                Some(sust_info) if !sust_info.trim().is_empty() => scan.sust_results.push(sust_info),
                Some(_) => debug!("Page {}: blank sustainability sentence skipped", page.index),
                None => {}
            }
            progress.inc(1);
        }
        progress.finish_and_clear();

        info!(
            "Data collected: {} article matches, {} sustainability snippets",
            scan.article_results.len(),
            scan.sust_results.len()
        );
        Ok(scan)
    }
}
