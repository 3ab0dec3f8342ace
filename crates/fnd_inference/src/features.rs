//! TF-IDF feature extraction over a frozen vocabulary.

use std::collections::{BTreeMap, HashMap, HashSet};

use fnd_core::{Error, FeatureVector, Result};

/// Maps token sequences onto fixed-length TF-IDF vectors.
///
/// The vocabulary is fitted once. Terms are ordered lexicographically so the
/// same corpus always yields the same feature layout.
#[derive(Clone)]
pub struct TfIdfVectorizer {
    /// Term -> index.
    vocabulary: HashMap<String, usize>,
    /// Index -> term.
    terms: Vec<String>,
    /// Inverse document frequency per term.
    idf: Vec<f64>,
}

impl std::fmt::Debug for TfIdfVectorizer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TfIdfVectorizer")
            .field("vocabulary_size", &self.terms.len())
            .finish()
    }
}

impl TfIdfVectorizer {
    /// Fit vocabulary and IDF weights on already-normalized documents.
    pub fn fit(documents: &[Vec<String>]) -> Self {
        let n_documents = documents.len() as f64;
        let mut document_frequency: BTreeMap<&str, usize> = BTreeMap::new();

        for doc in documents {
            let unique: HashSet<&str> = doc.iter().map(String::as_str).collect();
            for token in unique {
                *document_frequency.entry(token).or_insert(0) += 1;
            }
        }

        let mut terms = Vec::with_capacity(document_frequency.len());
        let mut idf = Vec::with_capacity(document_frequency.len());
        for (term, df) in document_frequency {
            // IDF = ln((N + 1) / (df + 1)) + 1
            idf.push(((n_documents + 1.0) / (df as f64 + 1.0)).ln() + 1.0);
            terms.push(term.to_string());
        }

        Self::build(terms, idf)
    }

    /// Rebuild a fitted vectorizer, e.g. from a model artifact.
    pub fn from_parts(terms: Vec<String>, idf: Vec<f64>) -> Result<Self> {
        if terms.len() != idf.len() {
            return Err(Error::Configuration(format!(
                "vocabulary has {} terms but {} IDF weights",
                terms.len(),
                idf.len()
            )));
        }
        if let Some(bad) = idf.iter().find(|w| !w.is_finite() || **w < 0.0) {
            return Err(Error::Configuration(format!("invalid IDF weight: {}", bad)));
        }
        let vectorizer = Self::build(terms, idf);
        if vectorizer.vocabulary.len() != vectorizer.terms.len() {
            return Err(Error::Configuration("vocabulary contains duplicate terms".to_string()));
        }
        Ok(vectorizer)
    }

    fn build(terms: Vec<String>, idf: Vec<f64>) -> Self {
        let vocabulary = terms
            .iter()
            .enumerate()
            .map(|(idx, term)| (term.clone(), idx))
            .collect();
        Self { vocabulary, terms, idf }
    }

    /// Raw term counts scaled by IDF. Unknown tokens are ignored.
    pub fn transform(&self, tokens: &[String]) -> FeatureVector {
        let mut values = vec![0.0; self.terms.len()];
        for token in tokens {
            if let Some(&idx) = self.vocabulary.get(token) {
                values[idx] += 1.0;
            }
        }
        for (value, weight) in values.iter_mut().zip(&self.idf) {
            *value *= weight;
        }
        FeatureVector::new(values)
    }

    pub fn vocabulary_size(&self) -> usize {
        self.terms.len()
    }

    pub fn terms(&self) -> &[String] {
        &self.terms
    }

    pub fn idf(&self) -> &[f64] {
        &self.idf
    }

    pub fn term(&self, idx: usize) -> Option<&str> {
        self.terms.get(idx).map(String::as_str)
    }
}
