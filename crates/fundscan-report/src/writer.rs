//! Workbook layout and file output

use fundscan_domain::ArticleMatch;
use rust_xlsxwriter::{Format, Workbook, Worksheet, XlsxError};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::info;

const GENERAL_SHEET: &str = "General Info";
const SOURCES_SHEET: &str = "Sources";
const OTHER_DATA_HEADER: &str = "Other sustainability data";
const NOT_CLASSIFIED: &str = "No article classification found";

/// First row (0-based) of the summary sentences on "General Info" (A6)
const SUMMARY_FIRST_ROW: u32 = 5;
/// First row (0-based) of the snippets on "Sources" (A4)
const SNIPPETS_FIRST_ROW: u32 = 3;

/// Errors that can occur while writing a report
#[derive(Error, Debug)]
pub enum ReportError {
    /// Workbook could not be built or saved
    #[error("Spreadsheet error: {0}")]
    Xlsx(#[from] XlsxError),

    /// Output directory could not be created
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Everything that goes into one fund's workbook
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Report {
    /// Fund name, also the output file stem
    pub fund_name: String,
    /// Canonical classification match, if one was found
    pub article: Option<ArticleMatch>,
    /// Summary sentences
    pub summary: Vec<String>,
    /// Every collected sustainability snippet, in collection order
    pub sust_results: Vec<String>,
}

/// Writes reports into an output directory
#[derive(Debug, Clone)]
pub struct ReportWriter {
    output_dir: PathBuf,
}

impl ReportWriter {
    /// Create a writer for `output_dir`; the directory is created on first write
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
        }
    }

    /// Directory reports are written to
    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Path the report for `fund_name` is written to
    pub fn report_path(&self, fund_name: &str) -> PathBuf {
        self.output_dir.join(format!("{}.xlsx", fund_name))
    }

    /// Write `{output_dir}/{fund_name}.xlsx`, replacing any existing file
    pub fn make_file(&self, report: &Report) -> Result<PathBuf, ReportError> {
        let mut workbook = build_workbook(report)?;

        fs::create_dir_all(&self.output_dir)?;
        let path = self.report_path(&report.fund_name);
        workbook.save(&path)?;

        info!("File {}.xlsx created successfully.", report.fund_name);
        Ok(path)
    }
}

/// Lay out the two report sheets in memory
pub fn build_workbook(report: &Report) -> Result<Workbook, ReportError> {
    let bold = Format::new().set_bold();
    let citation = report.article.as_ref().map(ArticleMatch::citation);
    let n_article = report.article.as_ref().map(|found| found.n_article);

    let mut general = Worksheet::new();
    general.set_name(GENERAL_SHEET)?;
    general.write_string_with_format(0, 0, &report.fund_name, &bold)?;
    general.write_string_with_format(1, 0, "Article 8", &bold)?;
    general.write_string_with_format(2, 0, "Article 9", &bold)?;
    general.write_string_with_format(1, 1, yes_no(n_article == Some(8)), &bold)?;
    general.write_string_with_format(2, 1, yes_no(n_article == Some(9)), &bold)?;
    if let Some(citation) = &citation {
        match n_article {
            Some(8) => {
                general.write_string(1, 2, citation)?;
            }
            Some(9) => {
                general.write_string(2, 2, citation)?;
            }
            _ => {}
        }
    }
    general.write_string_with_format(4, 0, OTHER_DATA_HEADER, &bold)?;
    for (row, sentence) in (SUMMARY_FIRST_ROW..).zip(&report.summary) {
        general.write_string(row, 0, sentence)?;
    }

    let mut sources = Worksheet::new();
    sources.set_name(SOURCES_SHEET)?;
    match (n_article, &citation) {
        (Some(n), Some(citation)) => {
            sources.write_string_with_format(0, 0, format!("Article {}", n), &bold)?;
            sources.write_string(1, 0, citation)?;
        }
        _ => {
            sources.write_string_with_format(0, 0, NOT_CLASSIFIED, &bold)?;
        }
    }
    sources.write_string_with_format(2, 0, OTHER_DATA_HEADER, &bold)?;
    for (row, snippet) in (SNIPPETS_FIRST_ROW..).zip(&report.sust_results) {
        sources.write_string(row, 0, snippet)?;
    }

    let mut workbook = Workbook::new();
    workbook.push_worksheet(general);
    workbook.push_worksheet(sources);
    Ok(workbook)
}

fn yes_no(flag: bool) -> &'static str {
    if flag {
        "Yes"
    } else {
        "No"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use calamine::{open_workbook_from_rs, Data, Range, Reader, Xlsx};
    use std::io::Cursor;

    fn article(n: u32) -> ArticleMatch {
        ArticleMatch {
            page: 0,
            n_article: n,
            sentence: vec![format!("The fund is classified under Article {} of the regulation", n)],
        }
    }

    fn report(article: Option<ArticleMatch>) -> Report {
        Report {
            fund_name: "Green Fund".to_string(),
            article,
            summary: vec!["The fund tracks emissions".to_string(), "It reports yearly.".to_string()],
            sust_results: vec![
                "We disclose our carbon footprint annually.".to_string(),
                "We exclude coal.".to_string(),
            ],
        }
    }

    fn sheets(report: &Report) -> (Range<Data>, Range<Data>) {
        let mut workbook = build_workbook(report).unwrap();
        let buffer = workbook.save_to_buffer().unwrap();
        let mut xlsx: Xlsx<_> = open_workbook_from_rs(Cursor::new(buffer)).unwrap();

        assert_eq!(xlsx.sheet_names(), vec![GENERAL_SHEET.to_string(), SOURCES_SHEET.to_string()]);
        let general = xlsx.worksheet_range(GENERAL_SHEET).unwrap();
        let sources = xlsx.worksheet_range(SOURCES_SHEET).unwrap();
        (general, sources)
    }

    /// Cell text by 0-based (row, col); empty cells read as None
    fn cell(range: &Range<Data>, row: u32, col: u32) -> Option<String> {
        match range.get_value((row, col)) {
            None | Some(Data::Empty) => None,
            Some(value) => Some(value.to_string()),
        }
    }

    #[test]
    fn test_article_8_layout() {
        let (general, sources) = sheets(&report(Some(article(8))));
        let citation = "Source: page 0: The fund is classified under Article 8 of the regulation";

        assert_eq!(cell(&general, 0, 0).as_deref(), Some("Green Fund"));
        assert_eq!(cell(&general, 1, 0).as_deref(), Some("Article 8"));
        assert_eq!(cell(&general, 2, 0).as_deref(), Some("Article 9"));
        assert_eq!(cell(&general, 1, 1).as_deref(), Some("Yes"));
        assert_eq!(cell(&general, 2, 1).as_deref(), Some("No"));
        assert_eq!(cell(&general, 1, 2).as_deref(), Some(citation));
        assert_eq!(cell(&general, 2, 2), None);
        assert_eq!(cell(&general, 4, 0).as_deref(), Some("Other sustainability data"));
        assert_eq!(cell(&general, 5, 0).as_deref(), Some("The fund tracks emissions"));
        assert_eq!(cell(&general, 6, 0).as_deref(), Some("It reports yearly."));

        assert_eq!(cell(&sources, 0, 0).as_deref(), Some("Article 8"));
        assert_eq!(cell(&sources, 1, 0).as_deref(), Some(citation));
        assert_eq!(cell(&sources, 2, 0).as_deref(), Some("Other sustainability data"));
        assert_eq!(
            cell(&sources, 3, 0).as_deref(),
            Some("We disclose our carbon footprint annually.")
        );
        assert_eq!(cell(&sources, 4, 0).as_deref(), Some("We exclude coal."));
    }

    #[test]
    fn test_article_9_layout() {
        let (general, sources) = sheets(&report(Some(article(9))));

        assert_eq!(cell(&general, 1, 1).as_deref(), Some("No"));
        assert_eq!(cell(&general, 2, 1).as_deref(), Some("Yes"));
        assert_eq!(cell(&general, 1, 2), None);
        assert!(cell(&general, 2, 2).unwrap().starts_with("Source: page 0:"));
        assert_eq!(cell(&sources, 0, 0).as_deref(), Some("Article 9"));
    }

    #[test]
    fn test_unclassified_layout() {
        let (general, sources) = sheets(&report(None));

        assert_eq!(cell(&general, 1, 1).as_deref(), Some("No"));
        assert_eq!(cell(&general, 2, 1).as_deref(), Some("No"));
        assert_eq!(cell(&general, 1, 2), None);
        assert_eq!(cell(&general, 2, 2), None);
        assert_eq!(cell(&sources, 0, 0).as_deref(), Some(NOT_CLASSIFIED));
        assert_eq!(cell(&sources, 1, 0), None);
        assert_eq!(cell(&sources, 3, 0).as_deref(), Some("We disclose our carbon footprint annually."));
    }

    #[test]
    fn test_make_file_creates_directory_and_overwrites() {
        let dir = tempfile::tempdir().unwrap();
        let writer = ReportWriter::new(dir.path().join("out").join("nested"));

        let first = writer.make_file(&report(Some(article(8)))).unwrap();
        assert_eq!(first, dir.path().join("out").join("nested").join("Green Fund.xlsx"));
        assert!(first.exists());

        let second = writer.make_file(&report(Some(article(9)))).unwrap();
        assert_eq!(first, second);

        let mut xlsx: Xlsx<_> = calamine::open_workbook(&second).unwrap();
        let general = xlsx.worksheet_range(GENERAL_SHEET).unwrap();
        assert_eq!(cell(&general, 2, 1).as_deref(), Some("Yes"));
    }
}
