//! Downloadable history: one JSON object per line.

use std::io::Write;

use fnd_core::{HistoryEntry, Result};

/// Write `entries` as JSON lines, returning how many were written.
pub fn export_jsonl<W: Write>(entries: &[HistoryEntry], out: &mut W) -> Result<usize> {
    for entry in entries {
        serde_json::to_writer(&mut *out, entry)?;
        out.write_all(b"\n")?;
    }
    out.flush()?;
    Ok(entries.len())
}

pub fn to_jsonl(entries: &[HistoryEntry]) -> Result<String> {
    let mut buf = Vec::new();
    export_jsonl(entries, &mut buf)?;
    Ok(String::from_utf8_lossy(&buf).into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backends::test_utils::entry;
    use fnd_core::Label;

    #[test]
    fn test_one_line_per_entry() {
        let entries = vec![
            entry("first", Label::Real, 0.9),
            entry("second", Label::Fake, 0.8),
        ];
        let text = to_jsonl(&entries).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(text.ends_with('\n'));

        let parsed: serde_json::Value = serde_json::from_str(lines[1]).unwrap();
        assert_eq!(parsed["title"], "second");
        assert_eq!(parsed["result"]["label"], "fake");
        assert!(parsed["timestamp"].is_string());
    }

    #[test]
    fn test_empty_export() {
        let mut buf = Vec::new();
        assert_eq!(export_jsonl(&[], &mut buf).unwrap(), 0);
        assert!(buf.is_empty());
    }
}
