//! Client-side core of the gallery: typed access to the image backend and
//! the state kept in sync with it.
//!
//! Nothing here depends on the UI, so the same code runs in the browser and
//! in native tests.

pub mod collection;
pub mod config;
pub mod error;
pub mod store;
pub mod sync;
pub mod types;
pub mod upload;


use std::sync::Arc;

pub use collection::ImageCollection;
pub use config::{AppMode, ClientConfig};
pub use error::{GalleryError, OperationResult};
pub use store::{HttpImageStore, ImageStore, MemoryImageStore};
pub use types::{ImageRecord, PendingFile};
pub use upload::{UploadFlow, UploadNotice, UploadState};

/// Pick the store implementation for `config.mode`.
pub fn store_from_config(config: &ClientConfig) -> Arc<dyn ImageStore> {
    match config.mode {
        AppMode::Local => {
            tracing::info!("Store: in-memory (local mode)");
            Arc::new(MemoryImageStore::new())
        }
        AppMode::Remote => {
            if !config.has_base_url() {
                tracing::warn!(
                    "Store: {} is not set; requests will fail",
                    config::API_URL_VAR
                );
            } else {
                tracing::info!("Store: HTTP backend at {}", config.base_url);
            }
            Arc::new(HttpImageStore::new(config.clone()))
        }
    }
}
