//! Regulatory article classification by sentence template

use fundscan_domain::ArticleMatch;
use tracing::debug;

/// Finds the sentence stating which article a fund is classified under
///
/// Candidates are tried in configuration order and the first one that
/// matches wins.
#[derive(Debug, Clone)]
pub struct ArticleFinder {
    article_nums: Vec<u32>,
}

impl ArticleFinder {
    /// Create a finder over candidate article numbers
    pub fn new(article_nums: Vec<u32>) -> Self {
        Self { article_nums }
    }

    /// Candidate article numbers, in the order they are tried
    pub fn candidates(&self) -> &[u32] {
        &self.article_nums
    }

    /// Look for a classification statement on one page
    ///
    /// A candidate `n` matches when the page mentions `article n` and at
    /// least one `.`-delimited sentence contains `classified under article n`
    /// (both case-insensitive). Matching sentences are returned trimmed.
    ///
    /// # Examples
    ///
    /// ```
    /// use fundscan_extractor::ArticleFinder;
    ///
    /// let finder = ArticleFinder::new(vec![8, 9]);
    /// let page = "The fund is classified under Article 9 of SFDR. Other text.";
    /// let found = finder.find_article(page, 3).unwrap();
    /// assert_eq!(found.n_article, 9);
    /// assert_eq!(found.page, 3);
    /// ```
    pub fn find_article(&self, page: &str, page_num: usize) -> Option<ArticleMatch> {
        let lowered = page.to_lowercase();

        for &n in &self.article_nums {
            if !lowered.contains(&format!("article {}", n)) {
                continue;
            }

            let template = format!("classified under article {}", n);
            let sentence: Vec<String> = page
                .split('.')
                .filter(|sent| sent.to_lowercase().contains(&template))
                .map(|sent| sent.trim().to_string())
                .collect();

            if sentence.is_empty() {
                debug!("Page {} mentions article {} without a classification sentence", page_num, n);
                continue;
            }

            return Some(ArticleMatch {
                page: page_num,
                n_article: n,
                sentence,
            });
        }

        None
    }
}
