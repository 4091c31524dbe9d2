//! Fundscan Domain Layer
//!
//! Core value types and trait interfaces shared by every other Fundscan crate.
//! It has no external dependencies; infrastructure lives elsewhere.
//!
//! ## Key Concepts
//!
//! - **Document**: an ordered sequence of pages read from one PDF
//! - **Page**: a 0-based index paired with single-line extracted text
//! - **ArticleMatch**: the regulatory article a page classifies the fund under
//! - **CompletionRequest**: one call to the external text-completion service

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod article;
pub mod document;
pub mod traits;

// Re-exports for convenience
pub use article::ArticleMatch;
pub use document::{Document, Page};
pub use traits::{CompletionProvider, CompletionRequest};
