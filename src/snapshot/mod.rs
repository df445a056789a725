//! Flat text snapshot store: `--- <key> ---` delimiter lines, each followed
//! by a JSON document. The file is read in full and rescanned on every cache
//! miss; there is no index.

pub mod scan;
pub mod store;


pub use scan::{find_relaxed, find_section, Section};
pub use store::SnapshotStore;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("snapshot I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("section body is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("no section for key: {0}")]
    NotFound(String),
}
