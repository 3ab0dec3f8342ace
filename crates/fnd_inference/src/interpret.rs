//! Fixed mapping from a verdict to the credibility breakdown.
//!
//! Nothing here is learned. With `c` the credibility (posterior of `real`):
//!
//! * band: `low` below 0.35, `high` from 0.65, `uncertain` in between
//! * reliability: `0.5 + 2 * (c - 0.5) * |c - 0.5|`
//! * trustworthiness: `(c + anchor) / 2`, anchor 0.0 / 0.5 / 1.0 per band

use fnd_core::{ClassificationResult, CredibilityBand, Label, SubScores};

use crate::models::label_for;

pub const LOW_BAND_UPPER: f64 = 0.35;
pub const HIGH_BAND_LOWER: f64 = 0.65;

pub fn band_for(credibility: f64) -> CredibilityBand {
    if credibility < LOW_BAND_UPPER {
        CredibilityBand::Low
    } else if credibility >= HIGH_BAND_LOWER {
        CredibilityBand::High
    } else {
        CredibilityBand::Uncertain
    }
}

fn band_anchor(band: CredibilityBand) -> f64 {
    match band {
        CredibilityBand::Low => 0.0,
        CredibilityBand::Uncertain => 0.5,
        CredibilityBand::High => 1.0,
    }
}

fn unit(value: f64) -> f64 {
    if value.is_nan() {
        0.5
    } else {
        value.clamp(0.0, 1.0)
    }
}

/// Build the result for a label and the confidence in that label.
///
/// The label is re-derived from the implied real probability, so an
/// inconsistent pair such as `(Fake, 0.3)` comes back as `(Real, 0.7)`.
pub fn interpret(label: Label, confidence: f64) -> ClassificationResult {
    let confidence = unit(confidence);
    let real_probability = match label {
        Label::Real => confidence,
        Label::Fake => 1.0 - confidence,
    };
    let label = label_for(real_probability);
    let confidence = match label {
        Label::Real => real_probability,
        Label::Fake => 1.0 - real_probability,
    };

    let credibility = real_probability;
    let band = band_for(credibility);
    let distance = credibility - 0.5;
    let scores = SubScores {
        credibility,
        reliability: unit(0.5 + 2.0 * distance * distance.abs()),
        trustworthiness: unit((credibility + band_anchor(band)) / 2.0),
    };

    ClassificationResult {
        label,
        confidence,
        real_probability,
        band,
        scores,
    }
}

/// Result used when there is nothing to classify.
pub fn neutral() -> ClassificationResult {
    interpret(Label::Real, 0.5)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_extremes() {
        let real = interpret(Label::Real, 1.0);
        assert_eq!(real.band, CredibilityBand::High);
        assert_eq!(real.scores.credibility, 1.0);
        assert_eq!(real.scores.reliability, 1.0);
        assert_eq!(real.scores.trustworthiness, 1.0);

        let fake = interpret(Label::Fake, 1.0);
        assert_eq!(fake.label, Label::Fake);
        assert_eq!(fake.band, CredibilityBand::Low);
        assert_eq!(fake.scores.credibility, 0.0);
        assert_eq!(fake.scores.reliability, 0.0);
        assert_eq!(fake.scores.trustworthiness, 0.0);
    }

    #[test]
    fn test_neutral() {
        let result = neutral();
        assert_eq!(result.label, Label::Real);
        assert_eq!(result.confidence, 0.5);
        assert_eq!(result.band, CredibilityBand::Uncertain);
        assert_eq!(result.scores.reliability, 0.5);
        assert_eq!(result.scores.trustworthiness, 0.5);
    }

    #[test]
    fn test_fake_at_tie_resolves_real() {
        let result = interpret(Label::Fake, 0.5);
        assert_eq!(result.label, Label::Real);
        assert_eq!(result.real_probability, 0.5);
    }

    #[test]
    fn test_inconsistent_pair_is_relabelled() {
        let result = interpret(Label::Fake, 0.3);
        assert_eq!(result.label, Label::Real);
        assert!((result.confidence - 0.7).abs() < 1e-12);
    }

    #[test]
    fn test_fake_credibility_is_complement() {
        let result = interpret(Label::Fake, 0.8);
        assert!((result.scores.credibility - 0.2).abs() < 1e-12);
        assert_eq!(result.band, CredibilityBand::Low);
        // 0.5 + 2 * (-0.3) * 0.3
        assert!((result.scores.reliability - 0.32).abs() < 1e-12);
        assert!((result.scores.trustworthiness - 0.1).abs() < 1e-12);
    }

    #[test]
    fn test_band_edges() {
        assert_eq!(band_for(0.3499), CredibilityBand::Low);
        assert_eq!(band_for(0.35), CredibilityBand::Uncertain);
        assert_eq!(band_for(0.65), CredibilityBand::High);
    }

    #[test]
    fn test_out_of_range_input_clamped() {
        let result = interpret(Label::Real, 7.0);
        assert_eq!(result.confidence, 1.0);
        let result = interpret(Label::Real, f64::NAN);
        assert_eq!(result, neutral());
    }

    proptest! {
        #[test]
        fn prop_scores_in_unit_interval(confidence in -1.0f64..2.0, fake in any::<bool>()) {
            let label = if fake { Label::Fake } else { Label::Real };
            let result = interpret(label, confidence);
            for value in [
                result.confidence,
                result.real_probability,
                result.scores.credibility,
                result.scores.reliability,
                result.scores.trustworthiness,
            ] {
                prop_assert!((0.0..=1.0).contains(&value));
            }
            prop_assert_eq!(result.label, label_for(result.real_probability));
        }

        #[test]
        fn prop_interpret_is_pure(confidence in 0.0f64..=1.0, fake in any::<bool>()) {
            let label = if fake { Label::Fake } else { Label::Real };
            prop_assert_eq!(interpret(label, confidence), interpret(label, confidence));
        }
    }
}
