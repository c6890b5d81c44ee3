//! End-to-end behaviour of the client against a mocked backend.

use api::config::{AppMode, ClientConfig};
use api::sync;
use api::{
    GalleryError, HttpImageStore, ImageCollection, ImageRecord, MemoryImageStore, PendingFile,
    UploadFlow, UploadNotice, UploadState,
};
use mockito::Matcher;

fn store_for(server: &mockito::ServerGuard) -> HttpImageStore {
    HttpImageStore::new(ClientConfig {
        mode: AppMode::Remote,
        base_url: server.url(),
    })
}

fn valid_file() -> PendingFile {
    PendingFile::new("b.png", Some("image/png".into()), b"not really a png".to_vec())
}

#[tokio::test]
async fn listing_fills_collection_exactly() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("GET", "/list")
        .with_status(200)
        .with_body(r#"{"data":[{"public_url":"https://x/a.png","object_key":"a"}]}"#)
        .create_async()
        .await;
    let store = store_for(&server);
    let mut collection = ImageCollection::new();

    sync::refresh(&store, |records| collection.replace_all(records))
        .await
        .unwrap();

    assert_eq!(
        collection.snapshot(),
        &[ImageRecord::new("https://x/a.png", "a")]
    );
}

#[tokio::test]
async fn upload_appends_after_existing_records() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("GET", "/list")
        .with_status(200)
        .with_body(r#"{"data":[{"public_url":"https://x/a.png","object_key":"a"}]}"#)
        .create_async()
        .await;
    let upload = server
        .mock("POST", "/upload")
        .match_body(Matcher::Regex(r#"name="image""#.into()))
        .with_status(200)
        .with_body(r#"{"data":{"public_url":"https://x/b.png","object_key":"b"}}"#)
        .create_async()
        .await;
    let store = store_for(&server);
    let mut collection = ImageCollection::new();
    sync::refresh(&store, |records| collection.replace_all(records))
        .await
        .unwrap();

    let mut flow = UploadFlow::new();
    flow.select_file(Some(valid_file())).unwrap();
    let notice = flow
        .submit(&store, |record| collection.append(record))
        .await
        .expect("armed flow submits");

    upload.assert_async().await;
    assert!(notice.is_success());
    let keys: Vec<_> = collection
        .snapshot()
        .iter()
        .map(|r| r.object_key.as_str())
        .collect();
    assert_eq!(keys, ["a", "b"]);
    assert_eq!(flow.state(), &UploadState::Idle);
}

#[tokio::test]
async fn submit_while_idle_issues_no_request() {
    let mut server = mockito::Server::new_async().await;
    let upload = server
        .mock("POST", "/upload")
        .expect(0)
        .create_async()
        .await;
    let store = store_for(&server);
    let mut collection = ImageCollection::new();
    collection.append(ImageRecord::new("https://x/a.png", "a"));
    let before = collection.clone();

    let mut flow = UploadFlow::new();
    let notice = flow.submit(&store, |record| collection.append(record)).await;

    assert!(notice.is_none());
    assert_eq!(collection, before);
    upload.assert_async().await;
}

#[tokio::test]
async fn delete_removes_then_repeat_is_harmless() {
    let store = MemoryImageStore::with_records(vec![
        ImageRecord::new("https://x/a.png", "a"),
        ImageRecord::new("https://x/c.png", "c"),
    ]);
    let mut collection = ImageCollection::new();
    sync::refresh(&store, |records| collection.replace_all(records))
        .await
        .unwrap();

    sync::delete(&store, "a", |key| {
        collection.remove(key);
    })
    .await
    .unwrap();
    assert!(!collection.contains("a"));
    let after_first = collection.clone();

    sync::delete(&store, "a", |key| {
        collection.remove(key);
    })
    .await
    .unwrap();
    assert_eq!(collection, after_first);
}

#[tokio::test]
async fn rejected_upload_reports_reason_and_keeps_collection() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("POST", "/upload")
        .with_status(500)
        .with_body(r#"{"data":null,"error":"An error occured during image upload: quota exceeded"}"#)
        .create_async()
        .await;
    let store = store_for(&server);
    let mut collection = ImageCollection::new();
    collection.append(ImageRecord::new("https://x/a.png", "a"));
    let before = collection.clone();

    let mut flow = UploadFlow::new();
    flow.select_file(Some(valid_file())).unwrap();
    let notice = flow
        .submit(&store, |record| collection.append(record))
        .await
        .unwrap();

    assert_eq!(collection, before);
    assert_eq!(flow.state(), &UploadState::Idle);
    match notice {
        UploadNotice::Failed(reason) => assert!(reason.contains("quota exceeded")),
        other => panic!("expected failure notice, got {other:?}"),
    }
}

#[tokio::test]
async fn unreachable_backend_fails_every_operation() {
    // Port 9 (discard) is closed on CI machines; the connection is refused.
    let store = HttpImageStore::new(ClientConfig {
        mode: AppMode::Remote,
        base_url: "http://127.0.0.1:9".into(),
    });
    let mut collection = ImageCollection::new();

    let err = sync::refresh(&store, |records| collection.replace_all(records))
        .await
        .unwrap_err();
    assert!(matches!(err, GalleryError::Transport(_)));

    let mut flow = UploadFlow::new();
    flow.select_file(Some(valid_file())).unwrap();
    let notice = flow
        .submit(&store, |record| collection.append(record))
        .await
        .unwrap();
    assert!(!notice.is_success());
    assert!(collection.is_empty());
}
