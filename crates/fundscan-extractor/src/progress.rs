//! Per-page progress display

use indicatif::{ProgressBar, ProgressStyle};

const PAGE_TEMPLATE: &str = "{spinner} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} {msg}";

/// Progress bar over `len` pages; hidden unless `visible`
pub(crate) fn page_progress(len: usize, visible: bool) -> ProgressBar {
    if !visible {
        return ProgressBar::hidden();
    }

    let bar = ProgressBar::new(len as u64);
    if let Ok(style) = ProgressStyle::with_template(PAGE_TEMPLATE) {
        bar.set_style(style.progress_chars("=>-"));
    }
    bar
}
