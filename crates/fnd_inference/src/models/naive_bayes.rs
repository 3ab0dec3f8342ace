use fnd_core::{Classifier, Error, FeatureVector, Label, Prediction, Result};

/// Laplace smoothing applied to every feature count.
pub const DEFAULT_ALPHA: f64 = 1.0;

/// `real_probability >= DECISION_THRESHOLD` is labelled real, so an exact
/// tie resolves to real.
pub const DECISION_THRESHOLD: f64 = 0.5;

pub fn label_for(real_probability: f64) -> Label {
    if real_probability >= DECISION_THRESHOLD {
        Label::Real
    } else {
        Label::Fake
    }
}

/// Multinomial Naive Bayes over TF-IDF weighted counts.
#[derive(Debug, Clone, PartialEq)]
pub struct NaiveBayes {
    real_log_prior: f64,
    fake_log_prior: f64,
    real_log_probs: Vec<f64>,
    fake_log_probs: Vec<f64>,
}

impl NaiveBayes {
    /// Fit on labelled feature vectors of equal length.
    pub fn fit(samples: &[(FeatureVector, Label)], alpha: f64) -> Result<Self> {
        let dimension = samples
            .first()
            .map(|(features, _)| features.len())
            .ok_or_else(|| Error::Input("Training samples cannot be empty".to_string()))?;

        let mut real_counts = vec![0.0; dimension];
        let mut fake_counts = vec![0.0; dimension];
        let mut n_real = 0usize;
        let mut n_fake = 0usize;

        for (features, label) in samples {
            if features.len() != dimension {
                return Err(Error::Input(format!(
                    "training vector has {} features, expected {}",
                    features.len(),
                    dimension
                )));
            }
            let counts = match label {
                Label::Real => {
                    n_real += 1;
                    &mut real_counts
                }
                Label::Fake => {
                    n_fake += 1;
                    &mut fake_counts
                }
            };
            for (count, value) in counts.iter_mut().zip(features.as_slice()) {
                *count += value;
            }
        }

        if n_real == 0 || n_fake == 0 {
            return Err(Error::Input(
                "Training samples must include both real and fake examples".to_string(),
            ));
        }

        let total = (n_real + n_fake) as f64;
        Ok(Self {
            real_log_prior: (n_real as f64 / total).ln(),
            fake_log_prior: (n_fake as f64 / total).ln(),
            real_log_probs: smoothed_log_probs(&real_counts, alpha),
            fake_log_probs: smoothed_log_probs(&fake_counts, alpha),
        })
    }

    pub fn from_parts(
        real_log_prior: f64,
        fake_log_prior: f64,
        real_log_probs: Vec<f64>,
        fake_log_probs: Vec<f64>,
    ) -> Result<Self> {
        if real_log_probs.len() != fake_log_probs.len() {
            return Err(Error::Configuration(format!(
                "class parameter rows differ in length: real={} fake={}",
                real_log_probs.len(),
                fake_log_probs.len()
            )));
        }
        let finite = [real_log_prior, fake_log_prior]
            .iter()
            .chain(&real_log_probs)
            .chain(&fake_log_probs)
            .all(|v| v.is_finite());
        if !finite {
            return Err(Error::Configuration("model parameters must be finite".to_string()));
        }
        Ok(Self {
            real_log_prior,
            fake_log_prior,
            real_log_probs,
            fake_log_probs,
        })
    }

    pub fn log_prior(&self, label: Label) -> f64 {
        match label {
            Label::Real => self.real_log_prior,
            Label::Fake => self.fake_log_prior,
        }
    }

    pub fn feature_log_probs(&self, label: Label) -> &[f64] {
        match label {
            Label::Real => &self.real_log_probs,
            Label::Fake => &self.fake_log_probs,
        }
    }

    fn check_dimension(&self, features: &FeatureVector) -> Result<()> {
        if features.len() != self.dimension() {
            return Err(Error::Configuration(format!(
                "feature vector has {} entries, model expects {}",
                features.len(),
                self.dimension()
            )));
        }
        Ok(())
    }
}

fn smoothed_log_probs(counts: &[f64], alpha: f64) -> Vec<f64> {
    let denominator = counts.iter().sum::<f64>() + alpha * counts.len() as f64;
    counts
        .iter()
        .map(|count| ((count + alpha) / denominator).ln())
        .collect()
}

fn dot(a: &[f64], b: &[f64]) -> f64 {
    a.iter().zip(b).map(|(x, y)| x * y).sum()
}

impl Classifier for NaiveBayes {
    fn name(&self) -> &str {
        "naive-bayes"
    }

    fn dimension(&self) -> usize {
        self.real_log_probs.len()
    }

    fn predict(&self, features: &FeatureVector) -> Result<Prediction> {
        self.check_dimension(features)?;
        let x = features.as_slice();

        let real_score = self.real_log_prior + dot(x, &self.real_log_probs);
        let fake_score = self.fake_log_prior + dot(x, &self.fake_log_probs);

        // Convert log scores to probability
        let max_score = real_score.max(fake_score);
        let real_exp = (real_score - max_score).exp();
        let fake_exp = (fake_score - max_score).exp();
        let real_probability = real_exp / (real_exp + fake_exp);

        if !real_probability.is_finite() {
            return Err(Error::Internal(format!(
                "posterior is not finite (real={}, fake={})",
                real_score, fake_score
            )));
        }
        let real_probability = real_probability.clamp(0.0, 1.0);

        Ok(Prediction {
            label: label_for(real_probability),
            real_probability,
        })
    }

    fn term_weights(&self, features: &FeatureVector) -> Result<Vec<f64>> {
        self.check_dimension(features)?;
        Ok(features
            .as_slice()
            .iter()
            .zip(self.real_log_probs.iter().zip(&self.fake_log_probs))
            .map(|(x, (real, fake))| x * (real - fake))
            .collect())
    }
}
