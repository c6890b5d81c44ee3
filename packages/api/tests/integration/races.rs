//! Concurrent operations are independent; the last one to resolve wins.

use api::store::ImageStore;
use api::sync;
use api::{ImageCollection, ImageRecord, MemoryImageStore, OperationResult, PendingFile, UploadFlow};
use async_trait::async_trait;
use futures::channel::oneshot;
use std::cell::RefCell;
use std::sync::Mutex;

/// Reads the listing immediately but holds the response until released,
/// like a slow network leg.
struct SlowListStore {
    inner: MemoryImageStore,
    gate: Mutex<Option<oneshot::Receiver<()>>>,
}

impl SlowListStore {
    fn new(inner: MemoryImageStore) -> (Self, oneshot::Sender<()>) {
        let (tx, rx) = oneshot::channel();
        let store = Self {
            inner,
            gate: Mutex::new(Some(rx)),
        };
        (store, tx)
    }
}

#[async_trait]
impl ImageStore for SlowListStore {
    async fn ping(&self) -> OperationResult<serde_json::Value> {
        self.inner.ping().await
    }

    async fn fetch_all(&self) -> OperationResult<Vec<ImageRecord>> {
        let listing = self.inner.fetch_all().await;
        let gate = self.gate.lock().unwrap().take();
        if let Some(gate) = gate {
            let _ = gate.await;
        }
        listing
    }

    async fn upload(&self, file: PendingFile) -> OperationResult<ImageRecord> {
        self.inner.upload(file).await
    }

    async fn remove(&self, object_key: &str) -> OperationResult<String> {
        self.inner.remove(object_key).await
    }
}

fn keys(collection: &RefCell<ImageCollection>) -> Vec<String> {
    collection
        .borrow()
        .snapshot()
        .iter()
        .map(|r| r.object_key.clone())
        .collect()
}

#[tokio::test]
async fn stale_listing_resolving_after_delete_wins_until_next_refresh() {
    let records = vec![ImageRecord::new("u/a", "a"), ImageRecord::new("u/b", "b")];
    let (store, release) = SlowListStore::new(MemoryImageStore::with_records(records.clone()));
    let collection = RefCell::new(ImageCollection::new());
    collection.borrow_mut().replace_all(records);

    let refresh = sync::refresh(&store, |r| collection.borrow_mut().replace_all(r));
    let delete_then_release = async {
        let result = sync::delete(&store, "a", |key| {
            collection.borrow_mut().remove(key);
        })
        .await;
        let seen = keys(&collection);
        let _ = release.send(());
        (result, seen)
    };

    let (refreshed, (deleted, after_delete)) = futures::join!(refresh, delete_then_release);

    assert_eq!(refreshed.unwrap(), 2);
    assert!(deleted.is_ok());
    assert_eq!(after_delete, ["b"]);
    // The listing was taken before the delete and landed after it.
    assert_eq!(keys(&collection), ["a", "b"]);

    sync::refresh(&store, |r| collection.borrow_mut().replace_all(r))
        .await
        .unwrap();
    assert_eq!(keys(&collection), ["b"]);
}

#[tokio::test]
async fn upload_racing_refresh_may_duplicate_until_next_refresh() {
    let (store, release) = SlowListStore::new(MemoryImageStore::new());
    let collection = RefCell::new(ImageCollection::new());
    let mut flow = UploadFlow::new();
    let file = PendingFile::new("c.png", None, vec![1, 2]);
    flow.select_file(Some(file)).unwrap();

    // The listing is taken first and held while the upload lands.
    let first_refresh = sync::refresh(&store, |r| collection.borrow_mut().replace_all(r));
    let upload_then_release = async {
        let notice = flow
            .submit(&store, |r| collection.borrow_mut().append(r))
            .await
            .unwrap();
        let _ = release.send(());
        notice
    };
    let (first, notice) = futures::join!(first_refresh, upload_then_release);

    assert!(notice.is_success());
    // The held listing predates the upload and overwrote the appended record.
    assert_eq!(first.unwrap(), 0);
    assert!(collection.borrow().is_empty());

    // A duplicate can appear when an append lands on a listing that already
    // has the record; it is tolerated.
    sync::refresh(&store, |r| collection.borrow_mut().replace_all(r))
        .await
        .unwrap();
    if let api::UploadNotice::Uploaded(record) = notice {
        collection.borrow_mut().append(record);
    }
    assert_eq!(collection.borrow().len(), 2);

    sync::refresh(&store, |r| collection.borrow_mut().replace_all(r))
        .await
        .unwrap();
    assert_eq!(collection.borrow().len(), 1);
}

#[tokio::test]
async fn independent_operations_each_apply_once() {
    let store = MemoryImageStore::with_records(vec![ImageRecord::new("u/a", "a")]);
    let collection = RefCell::new(ImageCollection::new());
    let replace_calls = RefCell::new(0);
    let remove_calls = RefCell::new(0);

    let (listed, removed) = futures::join!(
        sync::refresh(&store, |r| {
            *replace_calls.borrow_mut() += 1;
            collection.borrow_mut().replace_all(r);
        }),
        sync::delete(&store, "missing", |key| {
            *remove_calls.borrow_mut() += 1;
            collection.borrow_mut().remove(key);
        }),
    );

    assert!(listed.is_ok() && removed.is_ok());
    assert_eq!(*replace_calls.borrow(), 1);
    assert_eq!(*remove_calls.borrow(), 1);
    assert_eq!(keys(&collection), ["a"]);
    assert_eq!(store.request_count(), 2);
}
