use std::path::PathBuf;

pub mod corpus;
pub mod features;
pub mod interpret;
pub mod models;
pub mod pipeline;
pub mod signals;
pub mod summary;
pub mod text;

pub const DEFAULT_MIN_CHARS: usize = 20;
pub const DEFAULT_SUMMARY_MIN_CHARS: usize = 100;
pub const DEFAULT_SUMMARY_SENTENCES: usize = 3;
pub const DEFAULT_TOP_TERMS: usize = 5;

#[derive(Debug, Clone)]
pub struct Config {
    /// Trained model artifact. `None` trains on the built-in corpus.
    pub model_path: Option<PathBuf>,
    /// Shortest content `Detector::analyze` accepts.
    pub min_chars: usize,
    pub summary_min_chars: usize,
    pub summary_sentences: usize,
    /// How many contributing terms to report.
    pub top_terms: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            model_path: None,
            min_chars: DEFAULT_MIN_CHARS,
            summary_min_chars: DEFAULT_SUMMARY_MIN_CHARS,
            summary_sentences: DEFAULT_SUMMARY_SENTENCES,
            top_terms: DEFAULT_TOP_TERMS,
        }
    }
}

pub mod prelude {
    pub use super::Config;
    pub use super::pipeline::{create_detector, Detector};
    pub use fnd_core::{Article, ClassificationResult, Error, Label, Result};
}

pub use pipeline::{create_detector, Detector};
