use fnd_core::{Label, Result};

use crate::corpus::TrainingSample;
use crate::features::TfIdfVectorizer;
use crate::text::normalize;

pub mod artifact;
pub mod naive_bayes;

pub use artifact::{ModelArtifact, MODEL_FORMAT_VERSION};
pub use naive_bayes::{label_for, NaiveBayes, DECISION_THRESHOLD, DEFAULT_ALPHA};

/// Fit vocabulary and classifier on labelled samples.
pub fn train(samples: &[TrainingSample]) -> Result<(TfIdfVectorizer, NaiveBayes)> {
    let documents: Vec<Vec<String>> = samples.iter().map(|s| normalize(&s.text)).collect();
    let vectorizer = TfIdfVectorizer::fit(&documents);

    let labelled: Vec<(_, Label)> = documents
        .iter()
        .zip(samples)
        .map(|(tokens, sample)| (vectorizer.transform(tokens), sample.label))
        .collect();
    let model = NaiveBayes::fit(&labelled, DEFAULT_ALPHA)?;

    tracing::debug!(
        "Trained naive bayes on {} samples ({} terms)",
        samples.len(),
        vectorizer.vocabulary_size()
    );
    Ok((vectorizer, model))
}
