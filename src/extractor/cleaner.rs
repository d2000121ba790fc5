use regex::Regex;
use scraper::{Html, Selector};
use std::sync::LazyLock;

use crate::extractor::model::{MAX_CONTENT_LENGTH, TRUNCATION_MARKER};

/// Regions that never hold article prose. Matching subtrees are detached from
/// the document before anything reads its text.
pub const BOILERPLATE_SELECTORS: &[&str] = &[
    "script",
    "style",
    "noscript",
    "template",
    "iframe",
    "svg",
    "nav",
    "header",
    "footer",
    "aside",
    "[role='navigation']",
    "[role='banner']",
    "[role='contentinfo']",
    ".sidebar",
    "#sidebar",
    ".widget",
    ".comments",
    "#comments",
    ".comment-section",
    ".comment-respond",
    ".ads",
    ".ad",
    ".advertisement",
    "[class*='advert']",
    ".social-share",
    ".share-buttons",
    ".sharedaddy",
    ".newsletter",
    ".subscribe",
    ".popup",
    ".modal",
    ".cookie-banner",
];

static WHITESPACE_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").unwrap());

// word characters, whitespace, common punctuation, brackets and quotes
static DISALLOWED_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"[^\w\s.,!?;:'"()\[\]{}\-‘’“”]"#).unwrap());

pub fn strip_boilerplate(document: &mut Html) {
    for selector_str in BOILERPLATE_SELECTORS {
        let Ok(selector) = Selector::parse(selector_str) else {
            continue;
        };

        // Walk from the root so subtrees detached by an earlier selector are skipped.
        let ids: Vec<_> = document
            .root_element()
            .select(&selector)
            .filter(|element| !matches!(element.value().name(), "html" | "body"))
            .map(|element| element.id())
            .collect();

        for id in ids {
            if let Some(mut node) = document.tree.get_mut(id) {
                node.detach();
            }
        }
    }
}

/// Collapses all whitespace (blank lines included) to single spaces and drops
/// characters outside the prose whitelist.
pub fn normalize_text(text: &str) -> String {
    let collapsed = WHITESPACE_REGEX.replace_all(text, " ");
    let stripped = DISALLOWED_REGEX.replace_all(&collapsed, "");
    WHITESPACE_REGEX
        .replace_all(stripped.trim(), " ")
        .into_owned()
}

pub fn truncate_content(text: String) -> String {
    if text.chars().count() <= MAX_CONTENT_LENGTH {
        return text;
    }

    let mut truncated: String = text.chars().take(MAX_CONTENT_LENGTH).collect();
    truncated.push_str(TRUNCATION_MARKER);
    truncated
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_removes_boilerplate_regions() {
        let mut document = Html::parse_document(
            r#"<html><body>
                <nav>Home | About</nav>
                <header><p>Site banner</p></header>
                <div class="post-content"><p>Real prose</p><div class="social-share">Tweet this</div></div>
                <aside>Popular posts</aside>
                <script>var tracking = 1;</script>
                <footer>Copyright</footer>
            </body></html>"#,
        );

        strip_boilerplate(&mut document);

        let text: String = document.root_element().text().collect();
        assert!(text.contains("Real prose"));
        for gone in [
            "Home | About",
            "Site banner",
            "Tweet this",
            "Popular posts",
            "tracking",
            "Copyright",
        ] {
            assert!(!text.contains(gone), "{} should have been removed", gone);
        }
    }

    #[test]
    fn test_all_boilerplate_selectors_parse() {
        for selector in BOILERPLATE_SELECTORS {
            assert!(Selector::parse(selector).is_ok(), "{}", selector);
        }
    }

    #[test]
    fn test_normalize_collapses_whitespace() {
        let text = "  Hello    world  \n\n\n  Test\t\tline  ";
        assert_eq!(normalize_text(text), "Hello world Test line");
    }

    #[test]
    fn test_normalize_strips_non_prose_characters() {
        let text = "Price: $40 >> buy now! ★★★ (limited) [sic] \"quoted\" it's — done.";
        assert_eq!(
            normalize_text(text),
            "Price: 40 buy now! (limited) [sic] \"quoted\" it's done."
        );
    }

    #[test]
    fn test_normalize_keeps_unicode_letters() {
        assert_eq!(normalize_text("Café naïve"), "Café naïve");
    }

    #[test]
    fn test_truncate_appends_marker_only_when_over_limit() {
        let exact = "a".repeat(MAX_CONTENT_LENGTH);
        assert_eq!(truncate_content(exact.clone()), exact);

        let long = "é".repeat(MAX_CONTENT_LENGTH + 50);
        let truncated = truncate_content(long);
        assert_eq!(
            truncated.chars().count(),
            MAX_CONTENT_LENGTH + TRUNCATION_MARKER.chars().count()
        );
        assert!(truncated.ends_with(TRUNCATION_MARKER));
    }
}
