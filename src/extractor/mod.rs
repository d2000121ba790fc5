pub mod cleaner;
pub mod model;
pub mod reader;
pub mod reject;

#[cfg(test)]
mod tests;

pub use model::{ExtractedContent, MAX_CONTENT_LENGTH, TRUNCATION_MARKER};
pub use reject::{MIN_CONTENT_LENGTH, is_too_short};

use scraper::Html;
use tracing::debug;

/// Pulls the title and main prose out of a page. No I/O; identical input
/// always yields identical output.
pub fn extract(html: &str) -> ExtractedContent {
    // 1. Parse
    let mut document = Html::parse_document(html);

    // 2. Drop navigation, ads, comments and friends
    cleaner::strip_boilerplate(&mut document);

    // 3. Title
    let title = reader::select_title(&document);

    // 4-6. Main content region, normalized
    let selection = reader::select_body(&document);
    debug!(
        selector = selection.selector.unwrap_or("body"),
        chars = selection.text.chars().count(),
        "selected content region"
    );

    // 7. Bound the length
    ExtractedContent {
        title,
        body: cleaner::truncate_content(selection.text),
    }
}
