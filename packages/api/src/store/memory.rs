use super::ImageStore;
use crate::error::{GalleryError, OperationResult};
use crate::types::{ImageRecord, PendingFile};
use async_trait::async_trait;
use base64::Engine as _;
use std::sync::{Mutex, MutexGuard};

#[derive(Debug, Default)]
struct Inner {
    records: Vec<ImageRecord>,
    next_seq: u64,
    requests: usize,
    fail_next: Option<GalleryError>,
}

/// In-process store used in local mode and tests.
///
/// Images are served back as `data:` URLs so they render without a backend.
#[derive(Debug, Default)]
pub struct MemoryImageStore {
    inner: Mutex<Inner>,
}

impl MemoryImageStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_records(records: Vec<ImageRecord>) -> Self {
        let store = Self::new();
        store.lock().records = records;
        store
    }

    /// Make the next request fail with `err` instead of touching the store.
    pub fn fail_next(&self, err: GalleryError) {
        self.lock().fail_next = Some(err);
    }

    /// Number of requests received, including failed ones.
    pub fn request_count(&self) -> usize {
        self.lock().requests
    }

    pub fn stored(&self) -> Vec<ImageRecord> {
        self.lock().records.clone()
    }

    fn lock(&self) -> MutexGuard<'_, Inner> {
        // A poisoned lock only means a test panicked mid-call; the data is still usable.
        self.inner.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// Count the request and consume any injected failure.
    fn begin(&self) -> Result<MutexGuard<'_, Inner>, GalleryError> {
        let mut inner = self.lock();
        inner.requests += 1;
        match inner.fail_next.take() {
            Some(err) => {
                tracing::warn!("memory store: injected failure: {err}");
                Err(err)
            }
            None => Ok(inner),
        }
    }
}

#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
impl ImageStore for MemoryImageStore {
    async fn ping(&self) -> OperationResult<serde_json::Value> {
        let inner = self.begin()?;
        Ok(serde_json::json!({
            "data": "Hello World!",
            "images": inner.records.len(),
        }))
    }

    async fn fetch_all(&self) -> OperationResult<Vec<ImageRecord>> {
        let inner = self.begin()?;
        Ok(inner.records.clone())
    }

    async fn upload(&self, file: PendingFile) -> OperationResult<ImageRecord> {
        if file.is_empty() {
            return Err(GalleryError::Validation("no file selected".into()));
        }
        let mut inner = self.begin()?;

        inner.next_seq += 1;
        let object_key = format!(
            "images/{}_{}_{}",
            chrono::Utc::now().format("%d-%m-%Y_%H:%M:%S"),
            inner.next_seq,
            file.name
        );
        let content_type = file
            .content_type
            .as_deref()
            .filter(|ct| !ct.is_empty())
            .unwrap_or("application/octet-stream");
        let public_url = format!(
            "data:{content_type};base64,{}",
            base64::engine::general_purpose::STANDARD.encode(&file.bytes)
        );

        let record = ImageRecord {
            public_url,
            object_key,
        };
        inner.records.push(record.clone());
        tracing::debug!("memory store: stored {}", record.object_key);
        Ok(record)
    }

    async fn remove(&self, object_key: &str) -> OperationResult<String> {
        if object_key.trim().is_empty() {
            return Err(GalleryError::Validation("object key must not be empty".into()));
        }
        let mut inner = self.begin()?;
        inner.records.retain(|r| r.object_key != object_key);
        Ok("Object deleted.".to_string())
    }
}
