use std::fs;

use crate::extractor::{
    MAX_CONTENT_LENGTH, TRUNCATION_MARKER, extract, is_too_short, model::DEFAULT_TITLE,
};

fn fixture(name: &str) -> String {
    fs::read_to_string(format!("src/extractor/tests/fixtures/{}", name))
        .expect("Failed to read test fixture")
}

#[test]
fn test_extract_blog_post() {
    let content = extract(&fixture("blog.html"));

    assert!(content.title.contains("How to Build Better Software"));
    assert!(content.body.contains("Building better software"));
    assert!(content.body.contains("Key Principles"));
    assert!(content.body.contains("Good tests make refactoring cheap"));

    // boilerplate never reaches the body
    assert!(!content.body.contains("Share on Twitter"));
    assert!(!content.body.contains("casino"));
    assert!(!content.body.contains("Popular posts"));
    assert!(!content.body.contains("newsletter"));
    assert!(!content.body.contains("All rights reserved"));
    assert!(!is_too_short(&content.body));
}

#[test]
fn test_extract_article_element() {
    let content = extract(&fixture("article.html"));

    assert_eq!(content.title, "A Slow Morning in Lahore");
    assert!(content.body.starts_with("A Slow Morning in Lahore The old city wakes up slowly."));
    assert!(content.body.contains("By ten o'clock the lanes were full"));
    assert!(!content.body.contains("Photos and words"));
    assert!(!content.body.contains('\n'));
}

#[test]
fn test_script_only_page_is_too_short() {
    let content = extract(&fixture("short.html"));

    assert_eq!(content.title, "Loading");
    assert_eq!(content.body, "Please enable JavaScript to view this page.");
    assert!(is_too_short(&content.body));
}

#[test]
fn test_long_article_is_truncated() {
    let html = format!(
        "<html><head><title>Long</title></head><body><article><p>{}</p></article></body></html>",
        "All work and no play makes for a very long article. ".repeat(400)
    );
    let content = extract(&html);

    assert_eq!(
        content.content_length(),
        MAX_CONTENT_LENGTH + TRUNCATION_MARKER.len()
    );
    assert!(content.body.ends_with(TRUNCATION_MARKER));
}

#[test]
fn test_extraction_is_deterministic() {
    let html = fixture("blog.html");
    assert_eq!(extract(&html), extract(&html));
}

#[test]
fn test_malformed_html() {
    let html = "<html><head><title>Broken</title><body><p>Unclosed tags<div>More content";
    let content = extract(html);

    // Should handle malformed HTML gracefully
    assert_eq!(content.title, "Broken");
    assert_eq!(content.body, "Unclosed tags More content");
}

#[test]
fn test_body_matching_boilerplate_class_is_kept() {
    let html = format!(
        "<html><head><title>Sponsored</title></head><body class=\"advertiser-page\"><div class=\"ad\">Buy now</div><p>{}</p></body></html>",
        "Our advertisers fund this blog, but the words here are ours. ".repeat(3)
    );
    let content = extract(&html);

    assert!(content.body.starts_with("Our advertisers fund this blog"));
    assert!(!content.body.contains("Buy now"));
    assert!(!content.body.contains("Sponsored"));
}

#[test]
fn test_empty_document() {
    let content = extract("");
    assert_eq!(content.title, DEFAULT_TITLE);
    assert!(content.body.is_empty());
}

#[cfg(feature = "fuzz")]
mod fuzz {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn test_extract_never_panics(html in ".*") {
            let _ = extract(&html);
        }

        #[test]
        fn test_body_is_bounded(paragraph in "[a-zA-Z ,.]{0,200}", repeat in 0usize..120) {
            let html = format!(
                "<html><body><article><p>{}</p></article></body></html>",
                paragraph.repeat(repeat)
            );
            let content = extract(&html);
            let limit = MAX_CONTENT_LENGTH + TRUNCATION_MARKER.len();
            prop_assert!(content.content_length() <= limit);
            if content.content_length() > MAX_CONTENT_LENGTH {
                prop_assert!(content.body.ends_with(TRUNCATION_MARKER));
            }
        }

        #[test]
        fn test_extract_is_idempotent(html in "<html><body>(<p>[a-z ]{0,80}</p>){0,20}</body></html>") {
            prop_assert_eq!(extract(&html), extract(&html));
        }
    }
}
