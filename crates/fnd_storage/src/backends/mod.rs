pub mod jsonl;
pub mod memory;

pub use jsonl::JsonLinesHistory;
pub use memory::MemoryHistory;
