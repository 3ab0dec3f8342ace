//! Surface credibility cues counted in raw text.

use fnd_core::TextSignals;

use crate::text::{sentences, words};

pub const SENSATIONAL_WORDS: &[&str] = &[
    "shocking", "miracle", "secret", "breaking", "urgent", "fraud", "scandal",
];

pub const RELIABLE_INDICATORS: &[&str] = &[
    "according", "research", "study", "experts", "official", "confirmed",
];

/// Counts are by substring, so "scandalous" counts as sensational.
pub fn extract_signals(text: &str) -> TextSignals {
    let lowered: Vec<String> = words(text).into_iter().map(str::to_lowercase).collect();
    let sentence_count = sentences(text).len();

    let count_matching = |needles: &[&str]| {
        lowered
            .iter()
            .filter(|word| needles.iter().any(|needle| word.contains(needle)))
            .count()
    };

    TextSignals {
        word_count: lowered.len(),
        sentence_count,
        avg_sentence_length: if sentence_count > 0 {
            lowered.len() as f64 / sentence_count as f64
        } else {
            0.0
        },
        exclamation_count: text.matches('!').count(),
        sensational_word_count: count_matching(SENSATIONAL_WORDS),
        reliable_indicator_count: count_matching(RELIABLE_INDICATORS),
    }
}
