use std::fs;
use std::path::Path;

use fnd_core::{Classifier, Error, Label, Result};
use serde::{Deserialize, Serialize};

use super::naive_bayes::NaiveBayes;
use crate::features::TfIdfVectorizer;

pub const MODEL_FORMAT_VERSION: u32 = 1;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassParams<T> {
    pub real: T,
    pub fake: T,
}

/// On-disk form of a trained vocabulary and model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelArtifact {
    pub format_version: u32,
    pub vocabulary: Vec<String>,
    pub idf: Vec<f64>,
    pub class_log_prior: ClassParams<f64>,
    pub feature_log_prob: ClassParams<Vec<f64>>,
}

impl ModelArtifact {
    pub fn from_model(vectorizer: &TfIdfVectorizer, model: &NaiveBayes) -> Self {
        Self {
            format_version: MODEL_FORMAT_VERSION,
            vocabulary: vectorizer.terms().to_vec(),
            idf: vectorizer.idf().to_vec(),
            class_log_prior: ClassParams {
                real: model.log_prior(Label::Real),
                fake: model.log_prior(Label::Fake),
            },
            feature_log_prob: ClassParams {
                real: model.feature_log_probs(Label::Real).to_vec(),
                fake: model.feature_log_probs(Label::Fake).to_vec(),
            },
        }
    }

    /// Check version and that every parameter row matches the vocabulary.
    pub fn validate(&self) -> Result<()> {
        if self.format_version != MODEL_FORMAT_VERSION {
            return Err(Error::Configuration(format!(
                "unsupported model format version {} (expected {})",
                self.format_version, MODEL_FORMAT_VERSION
            )));
        }
        let expected = self.vocabulary.len();
        for (name, len) in [
            ("idf", self.idf.len()),
            ("feature_log_prob.real", self.feature_log_prob.real.len()),
            ("feature_log_prob.fake", self.feature_log_prob.fake.len()),
        ] {
            if len != expected {
                return Err(Error::Configuration(format!(
                    "{} has {} entries but the vocabulary has {} terms",
                    name, len, expected
                )));
            }
        }
        Ok(())
    }

    pub fn into_parts(self) -> Result<(TfIdfVectorizer, NaiveBayes)> {
        self.validate()?;
        let vectorizer = TfIdfVectorizer::from_parts(self.vocabulary, self.idf)?;
        let model = NaiveBayes::from_parts(
            self.class_log_prior.real,
            self.class_log_prior.fake,
            self.feature_log_prob.real,
            self.feature_log_prob.fake,
        )?;
        debug_assert_eq!(vectorizer.vocabulary_size(), model.dimension());
        Ok((vectorizer, model))
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path)?;
        let artifact: Self = serde_json::from_str(&raw).map_err(|e| {
            Error::Configuration(format!("cannot parse model {}: {}", path.display(), e))
        })?;
        artifact.validate()?;
        tracing::debug!(
            "Loaded model artifact {} ({} terms)",
            path.display(),
            artifact.vocabulary.len()
        );
        Ok(artifact)
    }

    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        Ok(())
    }
}
