pub mod error;
pub mod guide;
pub mod models;
pub mod storage;
pub mod types;

pub use error::{Error, Result};
pub use models::Classifier;
pub use storage::HistoryStore;
pub use types::{
    AnalysisReport, Article, ClassificationResult, CredibilityBand, FeatureVector, HistoryEntry,
    Label, Prediction, SubScores, TermContribution, TextSignals,
};
