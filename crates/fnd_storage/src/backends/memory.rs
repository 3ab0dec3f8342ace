use async_trait::async_trait;
use fnd_core::{HistoryEntry, HistoryStore, Result};
use std::sync::Arc;
use tokio::sync::RwLock;

/// Session-scoped history kept in process memory.
#[derive(Debug, Clone, Default)]
pub struct MemoryHistory {
    entries: Arc<RwLock<Vec<HistoryEntry>>>,
}

impl MemoryHistory {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl HistoryStore for MemoryHistory {
    async fn record(&self, entry: HistoryEntry) -> Result<()> {
        let mut entries = self.entries.write().await;
        entries.push(entry);
        Ok(())
    }

    async fn list(&self) -> Result<Vec<HistoryEntry>> {
        let entries = self.entries.read().await;
        Ok(entries.clone())
    }

    async fn len(&self) -> Result<usize> {
        Ok(self.entries.read().await.len())
    }

    fn name(&self) -> &str {
        "memory"
    }
}
