use std::collections::VecDeque;

use api::UploadNotice;
use dioxus::prelude::*;

use crate::Lang;

/// How long a success toast stays up before it dismisses itself.
#[cfg(target_arch = "wasm32")]
const SUCCESS_TOAST_MS: u32 = 4_000;

/// Oldest toasts fall off once this many are on screen.
const MAX_VISIBLE: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Error,
    Info,
    Success,
}

impl ToastKind {
    fn class(self) -> &'static str {
        match self {
            ToastKind::Error => "toast toast_error",
            ToastKind::Info => "toast toast_info",
            ToastKind::Success => "toast toast_success",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub id: u64,
    pub title: String,
    pub body: Option<String>,
    pub kind: ToastKind,
}

/// Bounded queue of visible toasts, newest last.
#[derive(Debug, Clone, PartialEq)]
pub struct ToastQueue {
    items: VecDeque<Toast>,
    next_id: u64,
    capacity: usize,
}

impl Default for ToastQueue {
    fn default() -> Self {
        Self::with_capacity(MAX_VISIBLE)
    }
}

impl ToastQueue {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            items: VecDeque::with_capacity(capacity),
            next_id: 1,
            capacity: capacity.max(1),
        }
    }

    /// Queue a toast and return its id, evicting the oldest when full.
    pub fn push(&mut self, title: String, body: Option<String>, kind: ToastKind) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        while self.items.len() >= self.capacity {
            self.items.pop_front();
        }
        self.items.push_back(Toast {
            id,
            title,
            body,
            kind,
        });
        id
    }

    /// `false` when the toast was already gone (evicted or dismissed).
    pub fn dismiss(&mut self, id: u64) -> bool {
        match self.items.iter().position(|toast| toast.id == id) {
            Some(idx) => self.items.remove(idx).is_some(),
            None => false,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &Toast> {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Body line for a failed operation: `Details: <reason>`.
fn details(lang: Lang, reason: &str) -> String {
    format!("{} {reason}", crate::t(lang, "toast.details"))
}

/// Handle for raising user notifications. Cheap to copy into tasks.
#[derive(Clone, Copy)]
pub struct Toasts {
    queue: Signal<ToastQueue>,
}

impl Toasts {
    pub fn push(&self, title: String, body: Option<String>, kind: ToastKind) -> u64 {
        let mut queue = self.queue;
        let id = queue.write().push(title, body, kind);
        id
    }

    pub fn dismiss(&self, id: u64) {
        let mut queue = self.queue;
        queue.write().dismiss(id);
    }

    pub fn error(&self, title: String, body: Option<String>) {
        self.push(title, body, ToastKind::Error);
    }

    pub fn info(&self, title: String, body: Option<String>) {
        self.push(title, body, ToastKind::Info);
    }

    pub fn success(&self, title: String, body: Option<String>) {
        let id = self.push(title, body, ToastKind::Success);

        #[cfg(target_arch = "wasm32")]
        {
            let this = *self;
            spawn(async move {
                gloo_timers::future::TimeoutFuture::new(SUCCESS_TOAST_MS).await;
                this.dismiss(id);
            });
        }
        #[cfg(not(target_arch = "wasm32"))]
        let _ = id;
    }

    /// Error toast titled by `title_key`, with the reason under "Details:".
    pub fn failure(&self, lang: Lang, title_key: &str, reason: &str) {
        self.error(crate::t(lang, title_key), Some(details(lang, reason)));
    }

    /// Report a finished upload: the file name on success, the reason otherwise.
    pub fn upload(&self, lang: Lang, notice: &UploadNotice) {
        match notice {
            UploadNotice::Uploaded(record) => self.success(
                crate::t(lang, "toast.upload_ok_title"),
                Some(record.display_name().to_string()),
            ),
            UploadNotice::Failed(reason) => self.failure(lang, "toast.upload_failed_title", reason),
        }
    }
}

pub fn use_toasts() -> Toasts {
    use_context::<Toasts>()
}

#[component]
pub fn ToastProvider(children: Element) -> Element {
    let queue = use_signal(ToastQueue::default);
    use_context_provider(|| Toasts { queue });

    rsx! {
        {children}
        ToastViewport { queue }
    }
}

#[component]
fn ToastViewport(queue: Signal<ToastQueue>) -> Element {
    let lang = crate::use_lang()();
    let items: Vec<Toast> = queue.read().iter().cloned().collect();
    rsx! {
        div { class: "toast_region", role: "status", "aria-live": "polite",
            for toast in items {
                div { key: "{toast.id}", class: toast.kind.class(),
                    div { class: "toast_content",
                        div { class: "toast_title", "{toast.title}" }
                        if let Some(body) = &toast.body {
                            pre { class: "toast_body", "{body}" }
                        }
                    }
                    button {
                        class: "toast_close",
                        onclick: {
                            let id = toast.id;
                            let mut queue = queue;
                            move |_| {
                                queue.write().dismiss(id);
                            }
                        },
                        {crate::t(lang, "toast.dismiss")}
                    }
                }
            }
        }
    }
}
