//! Documents and their pages

/// One page of extracted text
///
/// Every `\n` in the extracted text is replaced by a space, so a page is
/// always a single line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page {
    /// 0-based page index
    pub index: usize,
    /// Page text with newlines replaced by spaces
    pub text: String,
}

impl Page {
    /// Create a page, replacing each `\n` with a space
    ///
    /// # Examples
    ///
    /// ```
    /// use fundscan_domain::Page;
    ///
    /// let page = Page::new(0, "first line\nsecond line");
    /// assert_eq!(page.text, "first line second line");
    /// ```
    pub fn new(index: usize, text: impl AsRef<str>) -> Self {
        Self {
            index,
            text: join_lines(text.as_ref()),
        }
    }
}

/// A fund document, identified by the stem of its file name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    /// File name stem, reused as the report name
    pub name: String,
    /// Pages in document order
    pub pages: Vec<Page>,
}

impl Document {
    /// Build a document from page texts already in page order
    pub fn from_texts<I, S>(name: impl Into<String>, texts: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let pages = texts
            .into_iter()
            .enumerate()
            .map(|(index, text)| Page::new(index, text))
            .collect();

        Self {
            name: name.into(),
            pages,
        }
    }

    /// Number of pages
    pub fn page_count(&self) -> usize {
        self.pages.len()
    }
}

fn join_lines(text: &str) -> String {
    text.replace('\n', " ")
}
