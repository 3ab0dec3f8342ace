use async_trait::async_trait;
use fnd_core::{Error, HistoryEntry, HistoryStore, Result};
use std::io::SeekFrom;
use std::path::{Path, PathBuf};
use tokio::fs::{self, File, OpenOptions};
use tokio::io::{AsyncReadExt, AsyncSeekExt, AsyncWriteExt};
use tokio::sync::RwLock;

/// History persisted as one JSON object per line.
///
/// A line without its trailing newline is an append that never finished.
/// `list` skips it and the next `record` cuts it off before writing.
#[derive(Debug)]
pub struct JsonLinesHistory {
    path: PathBuf,
    // appends take it exclusively, reads shared
    lock: RwLock<()>,
}

impl JsonLinesHistory {
    /// Open (creating if needed) the history file at `path`.
    pub async fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).await?;
        }
        OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .await?;
        Ok(Self {
            path,
            lock: RwLock::new(()),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn ends_with_newline(&self) -> Result<bool> {
        let mut file = File::open(&self.path).await?;
        if file.metadata().await?.len() == 0 {
            return Ok(true);
        }
        file.seek(SeekFrom::End(-1)).await?;
        let mut last = [0u8; 1];
        file.read_exact(&mut last).await?;
        Ok(last[0] == b'\n')
    }

    /// Truncate the file back to its last complete line.
    async fn drop_torn_tail(&self) -> Result<()> {
        let raw = fs::read(&self.path).await?;
        let keep = raw
            .iter()
            .rposition(|b| *b == b'\n')
            .map_or(0, |idx| idx + 1);
        tracing::warn!(
            "{}: discarding {} bytes of an incomplete history entry",
            self.path.display(),
            raw.len() - keep
        );
        let file = OpenOptions::new().write(true).open(&self.path).await?;
        file.set_len(keep as u64).await?;
        Ok(())
    }
}

#[async_trait]
impl HistoryStore for JsonLinesHistory {
    async fn record(&self, entry: HistoryEntry) -> Result<()> {
        let mut line = serde_json::to_string(&entry)?;
        line.push('\n');

        let _guard = self.lock.write().await;
        if !self.ends_with_newline().await? {
            self.drop_torn_tail().await?;
        }
        let mut file = OpenOptions::new().append(true).open(&self.path).await?;
        file.write_all(line.as_bytes()).await?;
        file.flush().await?;
        Ok(())
    }

    async fn list(&self) -> Result<Vec<HistoryEntry>> {
        let raw = {
            let _guard = self.lock.read().await;
            fs::read_to_string(&self.path).await?
        };
        let torn_tail = !raw.is_empty() && !raw.ends_with('\n');
        let lines: Vec<&str> = raw.lines().collect();
        let last = lines.len().saturating_sub(1);

        let mut entries = Vec::with_capacity(lines.len());
        for (idx, line) in lines.into_iter().enumerate() {
            if line.trim().is_empty() {
                continue;
            }
            match serde_json::from_str(line) {
                Ok(entry) => entries.push(entry),
                Err(e) if torn_tail && idx == last => {
                    tracing::warn!(
                        "{}:{}: skipping incomplete history entry: {}",
                        self.path.display(),
                        idx + 1,
                        e
                    );
                }
                Err(e) => {
                    return Err(Error::Storage(format!(
                        "{}:{}: corrupt history entry: {}",
                        self.path.display(),
                        idx + 1,
                        e
                    )))
                }
            }
        }
        Ok(entries)
    }

    fn name(&self) -> &str {
        "jsonl"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backends::test_utils::entry;
    use fnd_core::Label;

    #[tokio::test]
    async fn test_persists_across_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("history.jsonl");

        let history = JsonLinesHistory::open(&path).await.unwrap();
        let entries = vec![
            entry("a", Label::Real, 0.9),
            entry("b", Label::Fake, 0.95),
            entry("c", Label::Real, 0.55),
        ];
        for e in &entries {
            history.record(e.clone()).await.unwrap();
        }
        assert_eq!(history.len().await.unwrap(), 3);

        let reopened = JsonLinesHistory::open(&path).await.unwrap();
        let listed = reopened.list().await.unwrap();
        let ids: Vec<_> = listed.iter().map(|e| e.id).collect();
        let expected: Vec<_> = entries.iter().map(|e| e.id).collect();
        assert_eq!(ids, expected);
        assert_eq!(listed[1].title, "b");
        assert_eq!(listed[1].result.label, Label::Fake);
        assert_eq!(listed[0].timestamp, entries[0].timestamp);
    }

    #[tokio::test]
    async fn test_corrupt_line_reported() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("history.jsonl");
        let history = JsonLinesHistory::open(&path).await.unwrap();
        history.record(entry("ok", Label::Real, 0.9)).await.unwrap();
        std::fs::write(
            &path,
            format!("{}\n{{not json\n", std::fs::read_to_string(&path).unwrap().trim_end()),
        )
        .unwrap();

        let err = history.list().await.unwrap_err();
        assert!(matches!(err, Error::Storage(_)));
        assert!(err.to_string().contains(":2:"));
    }

    #[tokio::test]
    async fn test_torn_tail_is_skipped_then_repaired() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("history.jsonl");
        let history = JsonLinesHistory::open(&path).await.unwrap();
        for title in ["a", "b", "c"] {
            history.record(entry(title, Label::Real, 0.9)).await.unwrap();
        }

        let mut file = std::fs::OpenOptions::new().append(true).open(&path).unwrap();
        std::io::Write::write_all(&mut file, br#"{"id":"abc","timest"#).unwrap();
        drop(file);

        assert_eq!(history.list().await.unwrap().len(), 3);

        let next = entry("d", Label::Fake, 0.8);
        history.record(next.clone()).await.unwrap();
        let listed = history.list().await.unwrap();
        assert_eq!(listed.len(), 4);
        assert_eq!(listed[3].id, next.id);

        let raw = std::fs::read_to_string(&path).unwrap();
        assert!(!raw.contains("timest\""));
        assert_eq!(raw.lines().count(), 4);
    }

    #[tokio::test]
    async fn test_concurrent_appends_keep_every_entry() {
        let dir = tempfile::tempdir().unwrap();
        let history = std::sync::Arc::new(
            JsonLinesHistory::open(dir.path().join("history.jsonl"))
                .await
                .unwrap(),
        );

        let tasks: Vec<_> = (0..8)
            .map(|i| {
                let history = history.clone();
                tokio::spawn(async move {
                    history
                        .record(entry(&format!("entry {}", i), Label::Real, 0.9))
                        .await
                })
            })
            .collect();
        for task in tasks {
            task.await.unwrap().unwrap();
        }
        assert_eq!(history.list().await.unwrap().len(), 8);
    }
}
