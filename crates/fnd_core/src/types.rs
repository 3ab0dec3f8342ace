use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

use crate::Error;

pub const PASTED_TEXT_TITLE: &str = "Pasted Text Analysis";

/// A submitted article. Lives for the duration of one analysis call.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Article {
    pub title: String,
    pub content: String,
    pub source: Option<String>,
    pub url: Option<String>,
}

impl Article {
    /// Article built from text pasted by the user.
    pub fn pasted(content: impl Into<String>) -> Self {
        Self {
            title: PASTED_TEXT_TITLE.to_string(),
            content: content.into(),
            source: None,
            url: None,
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Label {
    #[serde(alias = "reliable")]
    Real,
    Fake,
}

impl Label {
    pub fn as_str(&self) -> &'static str {
        match self {
            Label::Real => "real",
            Label::Fake => "fake",
        }
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Label {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "real" | "reliable" => Ok(Label::Real),
            "fake" => Ok(Label::Fake),
            other => Err(Error::Input(format!("Unknown label: {}", other))),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CredibilityBand {
    Low,
    Uncertain,
    High,
}

impl fmt::Display for CredibilityBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            CredibilityBand::Low => "low",
            CredibilityBand::Uncertain => "uncertain",
            CredibilityBand::High => "high",
        };
        f.write_str(name)
    }
}

/// TF-IDF weights, one slot per vocabulary term.
#[derive(Debug, Clone, PartialEq)]
pub struct FeatureVector(Vec<f64>);

impl FeatureVector {
    pub fn new(values: Vec<f64>) -> Self {
        Self(values)
    }

    pub fn zeros(len: usize) -> Self {
        Self(vec![0.0; len])
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// True when no vocabulary term was seen.
    pub fn is_zero(&self) -> bool {
        self.0.iter().all(|v| *v == 0.0)
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.0
    }
}

/// Raw model output before interpretation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Prediction {
    pub label: Label,
    /// Posterior probability of the `real` class.
    pub real_probability: f64,
}

impl Prediction {
    /// Posterior probability of the predicted label.
    pub fn confidence(&self) -> f64 {
        match self.label {
            Label::Real => self.real_probability,
            Label::Fake => 1.0 - self.real_probability,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SubScores {
    pub credibility: f64,
    pub reliability: f64,
    pub trustworthiness: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassificationResult {
    pub label: Label,
    pub confidence: f64,
    pub real_probability: f64,
    pub band: CredibilityBand,
    pub scores: SubScores,
}

/// Surface cues counted in the raw text, shown next to the verdict.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TextSignals {
    pub word_count: usize,
    pub sentence_count: usize,
    pub avg_sentence_length: f64,
    pub exclamation_count: usize,
    pub sensational_word_count: usize,
    pub reliable_indicator_count: usize,
}

/// How much one vocabulary term pushed the verdict. Positive leans real.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TermContribution {
    pub term: String,
    pub weight: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisReport {
    pub title: String,
    pub summary: String,
    pub result: ClassificationResult,
    pub signals: TextSignals,
    pub top_terms: Vec<TermContribution>,
    pub word_count: usize,
    pub char_count: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub id: Uuid,
    pub timestamp: DateTime<Utc>,
    pub title: String,
    pub content: String,
    pub source: Option<String>,
    pub result: ClassificationResult,
}

impl HistoryEntry {
    pub fn new(article: &Article, result: ClassificationResult) -> Self {
        Self {
            id: Uuid::new_v4(),
            timestamp: Utc::now(),
            title: article.title.clone(),
            content: article.content.clone(),
            source: article.source.clone(),
            result,
        }
    }
}
