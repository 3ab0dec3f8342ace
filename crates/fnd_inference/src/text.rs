//! Text normalization and segmentation.
//!
//! [`normalize`] is the tokenizer every model component agrees on: it is
//! total, deterministic and idempotent, so feeding its space-joined output
//! back in yields the same tokens.

use unicode_segmentation::UnicodeSegmentation;

/// Tokens shorter than this (in chars) carry no signal.
pub const MIN_TOKEN_CHARS: usize = 2;

/// English stop words. Must stay sorted for the binary search.
pub const STOP_WORDS: &[&str] = &[
    "a", "about", "above", "after", "again", "against", "all", "am", "an", "and", "any", "are",
    "as", "at", "be", "because", "been", "before", "being", "below", "between", "both", "but",
    "by", "can", "could", "did", "do", "does", "doing", "down", "during", "each", "few", "for",
    "from", "further", "had", "has", "have", "having", "he", "her", "here", "hers", "herself",
    "him", "himself", "his", "how", "i", "if", "in", "into", "is", "it", "its", "itself", "just",
    "me", "more", "most", "my", "myself", "no", "nor", "not", "now", "of", "off", "on", "once",
    "only", "or", "other", "our", "ours", "ourselves", "out", "over", "own", "same", "she",
    "should", "so", "some", "such", "than", "that", "the", "their", "theirs", "them",
    "themselves", "then", "there", "these", "they", "this", "those", "through", "to", "too",
    "under", "until", "up", "very", "was", "we", "were", "what", "when", "where", "which",
    "while", "who", "whom", "why", "will", "with", "would", "you", "your", "yours", "yourself",
    "yourselves",
];

pub fn is_stop_word(token: &str) -> bool {
    STOP_WORDS.binary_search(&token).is_ok()
}

/// Lowercase, strip markup and punctuation, drop stop words.
pub fn normalize(text: &str) -> Vec<String> {
    strip_markup(&text.to_lowercase())
        .split(|c: char| !c.is_alphanumeric())
        .filter(|token| token.chars().count() >= MIN_TOKEN_CHARS && !is_stop_word(token))
        .map(str::to_string)
        .collect()
}

/// Replace `<...>` spans with a space. An unterminated `<` is kept as text.
pub fn strip_markup(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut rest = text;
    while let Some(start) = rest.find('<') {
        match rest[start..].find('>') {
            Some(end) => {
                out.push_str(&rest[..start]);
                out.push(' ');
                rest = &rest[start + end + 1..];
            }
            None => break,
        }
    }
    out.push_str(rest);
    out
}

/// Words as a reader would count them, punctuation excluded.
pub fn words(text: &str) -> Vec<&str> {
    text.unicode_words().collect()
}

/// Non-empty sentences, trimmed.
pub fn sentences(text: &str) -> Vec<&str> {
    text.unicode_sentences()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect()
}
