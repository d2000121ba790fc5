use crate::fetcher::types::{Charset, FetchResult};
use encoding_rs::Encoding;
use regex::Regex;
use std::sync::LazyLock;
use tracing::warn;
use url::Url;

static CHARSET_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"(?i)charset\s*=\s*["']?([^"'\s;]+)"#).unwrap());

static META_CHARSET_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"(?i)<meta\s+[^>]*?charset\s*=\s*["']?([^"'\s/>]+)"#).unwrap());

static META_HTTP_EQUIV_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)<meta\s+[^>]*?http-equiv\s*=\s*["']?content-type["']?[^>]*?content\s*=\s*["']?[^"'>]*?charset\s*=\s*([^"'\s;/>]+)"#).unwrap()
});

/// Bytes of the head scanned for `<meta>` charset declarations.
const META_SCAN_LIMIT: usize = 4096;

pub fn decode_page(source_url: Url, body_bytes: &[u8], content_type: &str) -> FetchResult {
    let charset = detect_charset(content_type, body_bytes);
    let html = decode_to_utf8(body_bytes, &charset);

    FetchResult {
        html,
        source_url,
        charset,
    }
}

fn charset_from_captures(regex: &Regex, haystack: &str) -> Option<Charset> {
    let label = regex.captures(haystack)?.get(1)?.as_str().to_lowercase();
    Encoding::for_label(label.as_bytes()).map(Charset::from_encoding)
}

fn detect_charset(content_type: &str, body_bytes: &[u8]) -> Charset {
    // 1. Content-Type header
    if let Some(charset) = charset_from_captures(&CHARSET_REGEX, content_type) {
        return charset;
    }

    // 2. <meta charset> / <meta http-equiv> near the top of the document
    let search_bytes = &body_bytes[..body_bytes.len().min(META_SCAN_LIMIT)];
    let search_str = String::from_utf8_lossy(search_bytes);

    if let Some(charset) = charset_from_captures(&META_CHARSET_REGEX, &search_str) {
        return charset;
    }
    if let Some(charset) = charset_from_captures(&META_HTTP_EQUIV_REGEX, &search_str) {
        return charset;
    }

    // 3. Heuristic detection
    let mut detector = chardetng::EncodingDetector::new();
    detector.feed(search_bytes, body_bytes.len() <= META_SCAN_LIMIT);
    Charset::from_encoding(detector.guess(None, true))
}

/// Malformed sequences become U+FFFD, the way browsers render them.
fn decode_to_utf8(body_bytes: &[u8], charset: &Charset) -> String {
    let encoding = charset.encoding();
    let (decoded, _encoding, had_errors) = encoding.decode(body_bytes);

    if had_errors {
        warn!(
            encoding = encoding.name(),
            "page contains bytes invalid for its encoding; replaced"
        );
    }

    decoded.into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect_charset_from_content_type() {
        let content_type = "text/html; charset=utf-8";
        let body = b"<html><head><title>Test</title></head></html>";

        assert_eq!(detect_charset(content_type, body), Charset::Utf8);
    }

    #[test]
    fn test_detect_charset_from_meta_tag() {
        let body = b"<html><head><meta charset=\"iso-8859-1\"><title>Test</title></head></html>";

        // ISO-8859-1 gets mapped to Windows1252 by encoding_rs since it's a superset
        assert_eq!(detect_charset("text/html", body), Charset::Windows1252);
    }

    #[test]
    fn test_detect_charset_from_meta_http_equiv() {
        let body = b"<html><head><meta http-equiv=\"Content-Type\" content=\"text/html; charset=windows-1252\"><title>Test</title></head></html>";

        assert_eq!(detect_charset("text/html", body), Charset::Windows1252);
    }

    #[test]
    fn test_decode_windows_1252_page() {
        // "café" with a Latin-1 é
        let body = b"<html><head><meta charset=\"windows-1252\"></head><body>caf\xe9</body></html>";
        let url = Url::parse("https://example.com/post").unwrap();

        let page = decode_page(url.clone(), body, "text/html");
        assert!(page.html.contains("café"));
        assert_eq!(page.source_url, url);
    }

    #[test]
    fn test_invalid_utf8_is_replaced() {
        let body = b"<html><body>\xff\xfe broken</body></html>";
        let html = decode_to_utf8(body, &Charset::Utf8);
        assert_eq!(html, "<html><body>\u{FFFD}\u{FFFD} broken</body></html>");
    }
}
