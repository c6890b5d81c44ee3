use std::sync::Arc;

use api::{sync, ImageCollection, ImageStore, PendingFile, UploadFlow};
use dioxus::prelude::*;

use crate::upload_form::clear_file_input;
use crate::{Lang, Toasts, UploadStatus};

/// Session view: sole owner of the image collection and the upload flow.
///
/// Children never get write access to either. The upload form sees an
/// `UploadStatus` and reports selection and submit clicks back; the grid
/// reports delete clicks. Every store call and toast is raised from here.
#[component]
pub fn Gallery() -> Element {
    let handle = crate::use_store();
    let toasts = crate::use_toasts();
    let lang = crate::use_lang()();

    let mut collection = use_signal(ImageCollection::new);
    let mut flow = use_signal(UploadFlow::new);
    let refreshing = use_signal(|| false);

    let store_for_mount = handle.store.clone();
    use_hook(move || spawn_refresh(store_for_mount, collection, refreshing, toasts, lang));

    let store_for_refresh = handle.store.clone();
    let store_for_upload = handle.store.clone();
    let store_for_delete = handle.store.clone();
    let status = UploadStatus::of(&flow.read());
    let records = collection.read().snapshot().to_vec();

    rsx! {
        div { class: "gallery",
            crate::HealthCheck {}

            crate::UploadForm {
                status,
                on_select: move |selection: Option<PendingFile>| {
                    if let Err(err) = flow.write().select_file(selection) {
                        toasts.info(crate::t(lang, "toast.selection_title"), Some(err.reason()));
                    }
                },
                on_submit: move |_: ()| {
                    // Idle or already submitting: nothing to send.
                    let Some(file) = flow.write().begin_submit() else {
                        return;
                    };
                    let store = store_for_upload.clone();
                    spawn(async move {
                        let result = store.upload(file).await;
                        let notice = flow
                            .write()
                            .complete(result, |record| collection.write().append(record));
                        toasts.upload(lang, &notice);
                        clear_file_input().await;
                    });
                },
            }

            div { class: "panel",
                div { class: "panel_header",
                    h2 { {crate::t(lang, "gallery.title")} }
                    button {
                        class: "btn",
                        r#type: "button",
                        disabled: refreshing(),
                        onclick: move |_| {
                            spawn_refresh(store_for_refresh.clone(), collection, refreshing, toasts, lang);
                        },
                        {crate::t(lang, "gallery.refresh")}
                    }
                }
                if refreshing() && records.is_empty() {
                    p { class: "hint", {crate::t(lang, "gallery.loading")} }
                } else {
                    crate::ImageGrid {
                        records,
                        on_delete: move |key: String| {
                            let store = store_for_delete.clone();
                            spawn(async move {
                                let result = sync::delete(store.as_ref(), &key, |k| {
                                    collection.write().remove(k);
                                })
                                .await;
                                match result {
                                    Ok(message) => toasts.success(
                                        crate::t(lang, "toast.delete_ok_title"),
                                        Some(message),
                                    ),
                                    Err(err) => {
                                        toasts.failure(lang, "toast.delete_failed_title", &err.reason())
                                    }
                                }
                            });
                        },
                    }
                }
            }
        }
    }
}

/// Reload the whole collection from the store in the background.
fn spawn_refresh(
    store: Arc<dyn ImageStore>,
    mut collection: Signal<ImageCollection>,
    mut refreshing: Signal<bool>,
    toasts: Toasts,
    lang: Lang,
) {
    spawn(async move {
        refreshing.set(true);
        let result = sync::refresh(store.as_ref(), |records| {
            collection.write().replace_all(records)
        })
        .await;
        refreshing.set(false);

        if let Err(err) = result {
            toasts.failure(lang, "toast.list_failed_title", &err.reason());
        }
    });
}
