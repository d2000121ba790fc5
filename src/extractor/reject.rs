/// Bodies shorter than this (in characters) are not worth summarizing.
pub const MIN_CONTENT_LENGTH: usize = 100;

pub fn is_too_short(body: &str) -> bool {
    body.chars().count() < MIN_CONTENT_LENGTH
}
