//! Plain-text output for the terminal.

use std::fmt::Write;

use fnd_core::{AnalysisReport, HistoryEntry, Label};

fn verdict(label: Label) -> &'static str {
    match label {
        Label::Real => "✅ Reliable",
        Label::Fake => "🚨 Fake News",
    }
}

pub fn report(report: &AnalysisReport) -> String {
    let result = &report.result;
    let signals = &report.signals;
    let mut out = String::new();

    let _ = writeln!(out, "📖 {}", report.title);
    let _ = writeln!(out, "   {} words, {} characters", report.word_count, report.char_count);
    let _ = writeln!(
        out,
        "\n{} ({:.1}% confidence, credibility {})",
        verdict(result.label),
        result.confidence * 100.0,
        result.band
    );
    let _ = writeln!(
        out,
        "   credibility {:.2} | reliability {:.2} | trustworthiness {:.2}",
        result.scores.credibility, result.scores.reliability, result.scores.trustworthiness
    );
    let _ = writeln!(out, "\n📋 Summary\n   {}", report.summary);
    let _ = writeln!(
        out,
        "\n🔎 Signals\n   {} sentences, {:.1} words per sentence, {} exclamation marks\n   {} sensational words, {} reliable indicators",
        signals.sentence_count,
        signals.avg_sentence_length,
        signals.exclamation_count,
        signals.sensational_word_count,
        signals.reliable_indicator_count
    );
    if !report.top_terms.is_empty() {
        let terms: Vec<String> = report
            .top_terms
            .iter()
            .map(|t| format!("{} ({:+.2})", t.term, t.weight))
            .collect();
        let _ = writeln!(out, "\n🧮 Top terms\n   {}", terms.join(", "));
    }
    out
}

pub fn history(entries: &[HistoryEntry]) -> String {
    if entries.is_empty() {
        return "No analyses yet\n".to_string();
    }
    let mut out = String::new();
    for (i, entry) in entries.iter().enumerate() {
        let _ = writeln!(
            out,
            "{:>3}. {}  {:<14} {:>5.1}%  {}",
            i + 1,
            entry.timestamp.format("%Y-%m-%d %H:%M"),
            verdict(entry.result.label),
            entry.result.confidence * 100.0,
            entry.title
        );
    }
    out
}
