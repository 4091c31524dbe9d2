//! Per-document orchestration.
//!
//! Each document runs start to finish before the next one begins. The first
//! error stops the whole batch.

use fundscan_domain::{CompletionProvider, Document};
use fundscan_extractor::{extract_pages, Extractor, ExtractorError};
use fundscan_report::{Report, ReportError, ReportWriter};
use std::fmt::Display;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{info, warn};

/// Errors that abort processing of a document
#[derive(Debug, Error)]
pub enum PipelineError {
    /// Extraction, classification or summarization failed
    #[error("{document}: {source}")]
    Extractor {
        /// Document name
        document: String,
        /// Underlying error
        source: ExtractorError,
    },

    /// More than one distinct article number matched the classification pattern
    #[error("{document}: several article numbers fit into used pattern: {articles:?}")]
    ConflictingArticles {
        /// Document name
        document: String,
        /// Distinct article numbers, in first-seen order
        articles: Vec<u32>,
    },

    /// Input directory could not be listed
    #[error("Cannot read input directory {}: {source}", dir.display())]
    InputDir {
        /// Directory that was scanned
        dir: PathBuf,
        /// Underlying error
        source: std::io::Error,
    },

    /// Report could not be written
    #[error("{document}: {source}")]
    Report {
        /// Document name
        document: String,
        /// Underlying error
        source: ReportError,
    },
}

/// Drives extraction and reporting for a batch of documents
pub struct Pipeline<P> {
    extractor: Extractor<P>,
    writer: ReportWriter,
}

impl<P> Pipeline<P>
where
    P: CompletionProvider,
    P::Error: Display,
{
    /// Create a pipeline
    pub fn new(extractor: Extractor<P>, writer: ReportWriter) -> Self {
        Self { extractor, writer }
    }

    /// Underlying extractor
    pub fn extractor(&self) -> &Extractor<P> {
        &self.extractor
    }

    /// Process every `*.pdf` in `input_dir`, sorted by path
    pub fn run_dir(&self, input_dir: &Path) -> Result<Vec<PathBuf>, PipelineError> {
        let paths = discover_pdfs(input_dir).map_err(|source| PipelineError::InputDir {
            dir: input_dir.to_path_buf(),
            source,
        })?;
        if paths.is_empty() {
            warn!("No PDF files found in {}", input_dir.display());
        }
        self.run(&paths)
    }

    /// Process every path in order, stopping at the first failure
    pub fn run(&self, paths: &[PathBuf]) -> Result<Vec<PathBuf>, PipelineError> {
        info!("Processing {} documents", paths.len());

        let mut written = Vec::with_capacity(paths.len());
        for path in paths {
            written.push(self.process_path(path)?);
        }
        Ok(written)
    }

    /// Extract a PDF and write its report
    pub fn process_path(&self, path: &Path) -> Result<PathBuf, PipelineError> {
        let document = extract_pages(path).map_err(|source| PipelineError::Extractor {
            document: path.display().to_string(),
            source,
        })?;
        self.process_document(&document)
    }

    /// Classify, summarize and report an already extracted document
    pub fn process_document(&self, document: &Document) -> Result<PathBuf, PipelineError> {
        let extractor_error = |source| PipelineError::Extractor {
            document: document.name.clone(),
            source,
        };

        let scan = self
            .extractor
            .scan_document(document)
            .map_err(extractor_error)?;

        let articles = scan.distinct_articles();
        if articles.len() > 1 {
            warn!("Several article numbers fit into used pattern.");
            return Err(PipelineError::ConflictingArticles {
                document: document.name.clone(),
                articles,
            });
        }

        let article = scan.article_results.first().cloned();
        match &article {
            Some(found) => info!("Classified as {}", found),
            None => warn!("No article classification found in {}", document.name),
        }

        let summary = self
            .extractor
            .get_sust_summary(&scan.sust_results)
            .map_err(extractor_error)?;
        info!("Summary of sustainability data collected successfully.");

        let report = Report {
            fund_name: document.name.clone(),
            article,
            summary,
            sust_results: scan.sust_results,
        };

        self.writer
            .make_file(&report)
            .map_err(|source| PipelineError::Report {
                document: document.name.clone(),
                source,
            })
    }
}

/// `*.pdf` files directly inside `dir`, sorted by path
pub fn discover_pdfs(dir: &Path) -> std::io::Result<Vec<PathBuf>> {
    let mut paths = Vec::new();
    for entry in std::fs::read_dir(dir)? {
        let path = entry?.path();
        if path.is_file() && path.extension().is_some_and(|ext| ext == "pdf") {
            paths.push(path);
        }
    }
    paths.sort();
    Ok(paths)
}
