use std::fmt;
use crate::types::{FeatureVector, Prediction};
use crate::Result;

pub trait Classifier: Send + Sync + fmt::Debug {
    fn name(&self) -> &str;

    /// Length of the feature vectors this model accepts.
    fn dimension(&self) -> usize;

    /// Score a feature vector. Fails only on a dimension mismatch.
    fn predict(&self, features: &FeatureVector) -> Result<Prediction>;

    /// Per-term push toward `real` (positive) or `fake` (negative),
    /// indexed like the feature vector. Empty when the model can't tell.
    fn term_weights(&self, _features: &FeatureVector) -> Result<Vec<f64>> {
        Ok(Vec::new())
    }
}
