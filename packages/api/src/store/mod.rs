use async_trait::async_trait;

use crate::error::OperationResult;
use crate::types::{ImageRecord, PendingFile};

pub mod http;
pub mod memory;

pub use http::HttpImageStore;
pub use memory::MemoryImageStore;

/// Remote image storage as seen by the client.
///
/// Each call issues exactly one request: no retries, no caching. Failures are
/// returned as values, never panics. Implementations hold no state shared
/// between calls, so concurrent calls need no coordination.
#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
pub trait ImageStore: Send + Sync {
    /// `GET /` health check; the body is handed back untouched.
    async fn ping(&self) -> OperationResult<serde_json::Value>;

    /// All stored images in server order, unique by object key.
    async fn fetch_all(&self) -> OperationResult<Vec<ImageRecord>>;

    /// Store one file and return the record the server created for it.
    async fn upload(&self, file: PendingFile) -> OperationResult<ImageRecord>;

    /// Delete by object key, returning the server's confirmation message.
    async fn remove(&self, object_key: &str) -> OperationResult<String>;
}
