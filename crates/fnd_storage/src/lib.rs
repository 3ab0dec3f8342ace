use std::path::Path;
use std::sync::Arc;

use fnd_core::{Error, HistoryStore, Result};

pub mod backends;
pub mod export;

pub use backends::*;
pub use export::{export_jsonl, to_jsonl};

pub const DEFAULT_HISTORY_PATH: &str = "fnd_history.jsonl";

/// Available backend names, as accepted by [`create_store`].
pub const BACKENDS: &[&str] = &["memory", "jsonl"];

/// Open a history backend by name.
pub async fn create_store(kind: &str, path: Option<&Path>) -> Result<Arc<dyn HistoryStore>> {
    let store: Arc<dyn HistoryStore> = match kind {
        "memory" => Arc::new(MemoryHistory::new()),
        "jsonl" => {
            let path = path.unwrap_or_else(|| Path::new(DEFAULT_HISTORY_PATH));
            Arc::new(JsonLinesHistory::open(path).await?)
        }
        other => {
            return Err(Error::Storage(format!(
                "Unknown storage backend '{}' (available: {})",
                other,
                BACKENDS.join(", ")
            )))
        }
    };
    tracing::debug!("History backend ready: {}", store.name());
    Ok(store)
}

pub mod prelude {
    pub use super::backends::*;
    pub use super::create_store;
    pub use fnd_core::HistoryStore;
}
