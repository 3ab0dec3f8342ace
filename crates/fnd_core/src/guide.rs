//! Static learning material shown alongside analyses.

use serde::Serialize;
use std::fmt::Write;

#[derive(Debug, Clone, Serialize)]
pub struct LearningGuide {
    pub title: &'static str,
    pub red_flags: &'static [&'static str],
    pub reliable_signs: &'static [&'static str],
    pub verification_tips: &'static [&'static str],
    pub closing: &'static str,
}

pub const GUIDE: LearningGuide = LearningGuide {
    title: "How to Spot Fake News",
    red_flags: &[
        "Excessive capitalization or punctuation!!!",
        "Emotional or sensational language designed to provoke fear or anger.",
        "Vague claims or information with no supporting evidence.",
        "Unfamiliar or suspicious sources.",
        "Headlines that seem too shocking to be true.",
    ],
    reliable_signs: &[
        "Clear and credible sources cited.",
        "Multiple references or citations to verified information.",
        "Neutral, factual, and balanced language.",
        "Author and publication credentials are available.",
        "Supporting evidence such as images, studies, or links.",
    ],
    verification_tips: &[
        "Cross-check information with multiple trusted sources.",
        "Verify images and videos using reverse image search tools.",
        "Check the publication date for timeliness.",
        "Question sensational claims and headlines.",
        "Use reliable fact-checking websites like Snopes or FactCheck.org.",
    ],
    closing: "Stay alert, think critically, and don't share until you verify!",
};

impl LearningGuide {
    pub fn render_text(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "{}\n", self.title);
        for (heading, items) in [
            ("Red flags to watch for:", self.red_flags),
            ("Signs of reliable news:", self.reliable_signs),
            ("Tips for verifying news:", self.verification_tips),
        ] {
            let _ = writeln!(out, "{}", heading);
            for item in items {
                let _ = writeln!(out, "  - {}", item);
            }
            out.push('\n');
        }
        out.push_str(self.closing);
        out.push('\n');
        out
    }
}
