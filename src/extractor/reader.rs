use scraper::{ElementRef, Html, Selector};

use crate::extractor::{
    cleaner::normalize_text,
    model::{BodySelection, DEFAULT_TITLE},
};

/// A content candidate must carry at least this many characters to be taken.
pub const MIN_SELECTOR_TEXT_LENGTH: usize = 300;

/// Consulted in order after `<title>` and `<h1>`.
pub const TITLE_SELECTORS: &[&str] = &[
    "title",
    "h1",
    ".post-title",
    ".entry-title",
    ".article-title",
    ".blog-post-title",
    ".single-title",
    ".headline",
];

/// Priority list, not a ranking: the first candidate over the threshold wins
/// even when a later selector would produce more text.
pub const CONTENT_SELECTORS: &[&str] = &[
    "article",
    ".post-content",
    ".entry-content",
    ".content",
    "main",
    "[role='main']",
    ".article-content",
    ".article-body",
    ".post-body",
    ".post-entry",
    ".blog-post",
    ".blog-content",
    ".single-post",
    ".story-body",
    ".td-post-content",
    ".main-content",
    "#main-content",
    "#content",
    ".post",
    ".entry",
    ".hentry",
];

pub fn select_title(document: &Html) -> String {
    let root = document.root_element();

    for selector_str in TITLE_SELECTORS {
        let Ok(selector) = Selector::parse(selector_str) else {
            continue;
        };
        if let Some(title) = root
            .select(&selector)
            .map(|element| collapse(&element_text(element)))
            .find(|title| !title.is_empty())
        {
            return title;
        }
    }

    DEFAULT_TITLE.to_string()
}

pub fn select_body(document: &Html) -> BodySelection {
    let root = document.root_element();

    for selector_str in CONTENT_SELECTORS {
        let Ok(selector) = Selector::parse(selector_str) else {
            continue;
        };
        for element in root.select(&selector) {
            let text = normalize_text(&element_text(element));
            if text.chars().count() >= MIN_SELECTOR_TEXT_LENGTH {
                return BodySelection {
                    text,
                    selector: Some(*selector_str),
                };
            }
        }
    }

    // Last resort: whatever survived boilerplate removal in <body>
    let body = Selector::parse("body")
        .ok()
        .and_then(|selector| root.select(&selector).next())
        .unwrap_or(root);

    BodySelection {
        text: normalize_text(&element_text(body)),
        selector: None,
    }
}

// Text nodes are joined with spaces so adjacent block elements don't fuse words.
fn element_text(element: ElementRef<'_>) -> String {
    element.text().collect::<Vec<_>>().join(" ")
}

fn collapse(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}
