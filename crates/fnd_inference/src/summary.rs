use crate::text::sentences;

pub const TOO_SHORT_SUMMARY: &str = "Text too short for meaningful summary";

/// Extractive summary: the leading `max_sentences` sentences.
pub fn summarize(text: &str, min_chars: usize, max_sentences: usize) -> String {
    if text.chars().count() < min_chars {
        return TOO_SHORT_SUMMARY.to_string();
    }
    sentences(text)
        .into_iter()
        .take(max_sentences)
        .collect::<Vec<_>>()
        .join(" ")
}
