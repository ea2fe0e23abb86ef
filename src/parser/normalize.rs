// src/parser/normalize.rs
//! Text normalization applied before annotation.
//!
//! Resume exports carry a lot of layout noise (bullets, box-drawing
//! characters, stray control bytes). Everything outside a fixed allow-list
//! is dropped and whitespace runs are collapsed to a single space.

/// Chinese punctuation kept through normalization.
const ALLOWED_PUNCTUATION: &[char] = &[
    '，', '。', '；', '：', '？', '！', '、', '（', '）', '《', '》', '【', '】',
];

fn is_allowed(c: char) -> bool {
    ('\u{4e00}'..='\u{9fa5}').contains(&c)
        || c.is_ascii_alphanumeric()
        || ALLOWED_PUNCTUATION.contains(&c)
}

/// Cleans raw resume text: keeps CJK ideographs, ASCII letters/digits and
/// allow-listed Chinese punctuation, collapses whitespace runs to one space
/// and trims the ends. Pure and deterministic; never fails.
pub fn clean_text(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut pending_space = false;
    for c in text.chars() {
        if c.is_whitespace() {
            // Leading whitespace never flushes, which also handles the trim.
            if !out.is_empty() {
                pending_space = true;
            }
            continue;
        }
        if is_allowed(c) {
            if pending_space {
                out.push(' ');
                pending_space = false;
            }
            out.push(c);
        }
    }
    out
}
