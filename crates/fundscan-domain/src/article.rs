//! Regulatory article classification results

use std::fmt;

/// A page on which the fund states the article it is classified under
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArticleMatch {
    /// 0-based page index the match was found on
    pub page: usize,
    /// Article number, e.g. 8 or 9
    pub n_article: u32,
    /// Every sentence on the page that states the classification
    pub sentence: Vec<String>,
}

impl ArticleMatch {
    /// Source citation shown next to the classification in the report
    ///
    /// # Examples
    ///
    /// ```
    /// use fundscan_domain::ArticleMatch;
    ///
    /// let m = ArticleMatch {
    ///     page: 0,
    ///     n_article: 8,
    ///     sentence: vec!["The fund is classified under Article 8".to_string()],
    /// };
    /// assert_eq!(m.citation(), "Source: page 0: The fund is classified under Article 8");
    /// ```
    pub fn citation(&self) -> String {
        let first = self.sentence.first().map(String::as_str).unwrap_or("");
        format!("Source: page {}: {}", self.page, first)
    }
}

impl fmt::Display for ArticleMatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Article {} (page {})", self.n_article, self.page)
    }
}
