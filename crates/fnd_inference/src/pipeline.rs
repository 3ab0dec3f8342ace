use std::cmp::Ordering;
use std::fmt;
use std::sync::Arc;

use fnd_core::{
    AnalysisReport, Article, ClassificationResult, Classifier, Error, FeatureVector, Result,
    TermContribution,
};

use crate::corpus::{builtin_samples, TrainingSample};
use crate::features::TfIdfVectorizer;
use crate::interpret::{interpret, neutral};
use crate::models::{train, ModelArtifact};
use crate::signals::extract_signals;
use crate::summary::summarize;
use crate::text::normalize;
use crate::Config;

pub const TOO_SHORT_FOR_ANALYSIS: &str = "Text too short for analysis";

/// Normalizer -> TF-IDF -> classifier -> interpreter, over read-only state.
#[derive(Clone)]
pub struct Detector {
    vectorizer: Arc<TfIdfVectorizer>,
    model: Arc<dyn Classifier>,
    config: Config,
}

impl fmt::Debug for Detector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Detector")
            .field("vectorizer", &self.vectorizer)
            .field("model", &self.model.name())
            .field("config", &self.config)
            .finish()
    }
}

impl Detector {
    /// Fails if the vocabulary and the model disagree on dimensionality.
    pub fn new(vectorizer: TfIdfVectorizer, model: Arc<dyn Classifier>, config: Config) -> Result<Self> {
        if vectorizer.vocabulary_size() != model.dimension() {
            return Err(Error::Configuration(format!(
                "vocabulary has {} terms but model {} expects {} features",
                vectorizer.vocabulary_size(),
                model.name(),
                model.dimension()
            )));
        }
        Ok(Self {
            vectorizer: Arc::new(vectorizer),
            model,
            config,
        })
    }

    pub fn train(samples: &[TrainingSample], config: Config) -> Result<Self> {
        let (vectorizer, model) = train(samples)?;
        Self::new(vectorizer, Arc::new(model), config)
    }

    pub fn from_artifact(artifact: ModelArtifact, config: Config) -> Result<Self> {
        let (vectorizer, model) = artifact.into_parts()?;
        Self::new(vectorizer, Arc::new(model), config)
    }

    /// Load the configured model file, or train on the built-in corpus.
    pub fn from_config(config: &Config) -> Result<Self> {
        match &config.model_path {
            Some(path) => {
                let artifact = ModelArtifact::load(path)?;
                tracing::info!("Loaded model from {}", path.display());
                Self::from_artifact(artifact, config.clone())
            }
            None => {
                let samples = builtin_samples();
                tracing::info!("Training on built-in corpus ({} samples)", samples.len());
                Self::train(&samples, config.clone())
            }
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn model_name(&self) -> &str {
        self.model.name()
    }

    pub fn vocabulary_size(&self) -> usize {
        self.vectorizer.vocabulary_size()
    }

    pub fn features(&self, text: &str) -> FeatureVector {
        self.vectorizer.transform(&normalize(text))
    }

    fn score(&self, tokens: &[String]) -> Result<ClassificationResult> {
        if tokens.is_empty() {
            return Ok(neutral());
        }
        let features = self.vectorizer.transform(tokens);
        let prediction = self.model.predict(&features)?;
        Ok(interpret(prediction.label, prediction.confidence()))
    }

    pub fn try_classify(&self, text: &str) -> Result<ClassificationResult> {
        self.score(&normalize(text))
    }

    /// Never fails: text without tokens, and internal failures, yield the
    /// neutral result.
    pub fn classify(&self, text: &str) -> ClassificationResult {
        self.try_classify(text).unwrap_or_else(|e| {
            tracing::error!("Classification failed, returning neutral result: {}", e);
            neutral()
        })
    }

    /// Vocabulary terms that moved the verdict most, strongest first.
    pub fn top_terms(&self, text: &str, limit: usize) -> Result<Vec<TermContribution>> {
        let features = self.features(text);
        let weights = self.model.term_weights(&features)?;
        let mut contributions: Vec<TermContribution> = weights
            .into_iter()
            .enumerate()
            .filter(|(_, weight)| *weight != 0.0)
            .filter_map(|(idx, weight)| {
                self.vectorizer.term(idx).map(|term| TermContribution {
                    term: term.to_string(),
                    weight,
                })
            })
            .collect();
        contributions.sort_by(|a, b| {
            b.weight
                .abs()
                .partial_cmp(&a.weight.abs())
                .unwrap_or(Ordering::Equal)
                .then_with(|| a.term.cmp(&b.term))
        });
        contributions.truncate(limit);
        Ok(contributions)
    }

    /// Full analysis of one article, as shown to the student.
    pub fn analyze(&self, article: &Article) -> Result<AnalysisReport> {
        let content = article.content.as_str();
        if content.chars().count() < self.config.min_chars {
            return Err(Error::Input(TOO_SHORT_FOR_ANALYSIS.to_string()));
        }

        let result = self.try_classify(content)?;
        let top_terms = self.top_terms(content, self.config.top_terms)?;
        tracing::debug!(
            "Analyzed '{}': {} ({:.3})",
            article.title,
            result.label,
            result.confidence
        );

        Ok(AnalysisReport {
            title: article.title.clone(),
            summary: summarize(content, self.config.summary_min_chars, self.config.summary_sentences),
            result,
            signals: extract_signals(content),
            top_terms,
            word_count: content.split_whitespace().count(),
            char_count: content.chars().count(),
        })
    }
}

pub fn create_detector(config: &Config) -> Result<Detector> {
    Detector::from_config(config)
}
