//! Remote operations that fold their result into the collection.
//!
//! Each function suspends once, on the store call, and then applies its
//! single mutation capability at most once. Failures never mutate.
//! Concurrent calls are not ordered against each other: whichever resolves
//! last wins until the next refresh.

use crate::error::OperationResult;
use crate::store::ImageStore;
use crate::types::ImageRecord;

/// List the store and hand the result to `replace_all`. Returns the count.
pub async fn refresh<S>(
    store: &S,
    replace_all: impl FnOnce(Vec<ImageRecord>),
) -> OperationResult<usize>
where
    S: ImageStore + ?Sized,
{
    match store.fetch_all().await {
        Ok(records) => {
            let count = records.len();
            replace_all(records);
            tracing::info!("refreshed gallery: {count} images");
            Ok(count)
        }
        Err(err) => {
            tracing::warn!("refresh failed: {err}");
            Err(err)
        }
    }
}

/// Delete `object_key` remotely, then hand it to `remove`. Returns the
/// server's confirmation.
pub async fn delete<S>(
    store: &S,
    object_key: &str,
    remove: impl FnOnce(&str),
) -> OperationResult<String>
where
    S: ImageStore + ?Sized,
{
    match store.remove(object_key).await {
        Ok(message) => {
            remove(object_key);
            tracing::info!("deleted {object_key}: {message}");
            Ok(message)
        }
        Err(err) => {
            tracing::warn!("delete of {object_key} failed: {err}");
            Err(err)
        }
    }
}
