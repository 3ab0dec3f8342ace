use async_trait::async_trait;
use crate::types::{Article, ClassificationResult, HistoryEntry};
use crate::Result;

/// Append-only log of past analyses.
#[async_trait]
pub trait HistoryStore: Send + Sync {
    /// Append an entry. Entries are never mutated afterwards.
    async fn record(&self, entry: HistoryEntry) -> Result<()>;

    /// Stamp and append one analysis, returning the stored entry.
    async fn record_analysis(
        &self,
        article: &Article,
        result: ClassificationResult,
    ) -> Result<HistoryEntry> {
        let entry = HistoryEntry::new(article, result);
        self.record(entry.clone()).await?;
        Ok(entry)
    }

    /// Snapshot of every entry in insertion order.
    async fn list(&self) -> Result<Vec<HistoryEntry>>;

    async fn len(&self) -> Result<usize> {
        Ok(self.list().await?.len())
    }

    /// Backend name used in logs.
    fn name(&self) -> &str;
}
