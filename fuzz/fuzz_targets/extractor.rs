#![no_main]

use libfuzzer_sys::fuzz_target;

use blogsum::extractor::{MAX_CONTENT_LENGTH, TRUNCATION_MARKER, extract};

fuzz_target!(|data: &[u8]| {
    // Convert raw bytes to string, handling invalid UTF-8 gracefully
    let html = String::from_utf8_lossy(data);

    // The extractor should never panic regardless of input
    let content = extract(&html);
    assert!(content.content_length() <= MAX_CONTENT_LENGTH + TRUNCATION_MARKER.len());
});
