//! Labelled training data.

use std::fs;
use std::path::Path;

use fnd_core::{Error, Label, Result};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrainingSample {
    pub text: String,
    pub label: Label,
}

impl TrainingSample {
    pub fn new(text: impl Into<String>, label: Label) -> Self {
        Self {
            text: text.into(),
            label,
        }
    }
}

const BUILTIN: &[(&str, Label)] = &[
    ("Breaking! Shocking miracle cure discovered", Label::Fake),
    ("Secret government conspiracy revealed", Label::Fake),
    ("Experts say climate change is real", Label::Real),
    ("Research indicates vaccine is safe", Label::Real),
    ("NASA confirms water on Mars", Label::Real),
    ("Scandal leaked shocking fraud exposed", Label::Fake),
    ("According to university study data shows", Label::Real),
    ("Peer-reviewed research confirms safety", Label::Real),
    ("Government officially announced policy", Label::Real),
    ("Fraud alert shocking news click here", Label::Fake),
    ("Doctors hate this one weird trick to lose weight overnight", Label::Fake),
    ("You won't believe what celebrities are hiding from you", Label::Fake),
    ("Urgent warning share this before it gets deleted", Label::Fake),
    ("Miracle pill melts fat instantly, insiders say", Label::Fake),
    ("Shocking secret the media refuses to report", Label::Fake),
    ("Anonymous insider exposes hidden plot to control minds", Label::Fake),
    ("Click here to claim your free prize now", Label::Fake),
    ("Leaked memo proves massive cover-up, share now", Label::Fake),
    ("The central bank reported quarterly inflation figures on Tuesday", Label::Real),
    ("Scientists published findings in a peer-reviewed journal", Label::Real),
    ("Officials confirmed the election results after a routine audit", Label::Real),
    ("According to the health ministry, hospital admissions declined", Label::Real),
    ("A university study found moderate exercise improves sleep", Label::Real),
    ("The city council approved the annual budget after public hearings", Label::Real),
];

/// Small balanced headline corpus used when no model file is given.
pub fn builtin_samples() -> Vec<TrainingSample> {
    BUILTIN
        .iter()
        .map(|(text, label)| TrainingSample::new(*text, *label))
        .collect()
}

/// Read one JSON object per line: `{"text": "...", "label": "fake"}`.
/// Blank lines are skipped.
pub fn load_samples(path: impl AsRef<Path>) -> Result<Vec<TrainingSample>> {
    let path = path.as_ref();
    let raw = fs::read_to_string(path)?;
    let mut samples = Vec::new();
    for (lineno, line) in raw.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        let sample: TrainingSample = serde_json::from_str(line).map_err(|e| {
            Error::Input(format!("{}:{}: {}", path.display(), lineno + 1, e))
        })?;
        samples.push(sample);
    }
    Ok(samples)
}
