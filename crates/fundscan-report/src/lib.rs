//! Fundscan Report Writer
//!
//! Renders one fund's classification, summary and sources into a two-sheet
//! workbook with a fixed cell layout:
//!
//! ```text
//! General Info                         Sources
//! A1 fund name                         A1 Article {n}
//! A2 Article 8 | B2 Yes/No | C2 src    A2 source citation
//! A3 Article 9 | B3 Yes/No | C3 src    A3 Other sustainability data
//! A5 Other sustainability data         A4.. every snippet
//! A6.. summary sentences
//! ```

#![warn(missing_docs)]

mod writer;

pub use writer::{build_workbook, Report, ReportError, ReportWriter};
