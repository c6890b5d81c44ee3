use api::{PendingFile, UploadFlow};
use base64::Engine as _;
use dioxus::logger::tracing;
use dioxus::prelude::*;
use serde::Deserialize;

const FILE_INPUT_ID: &str = "gallery_file_input";

/// File selection as handed over by the browser.
#[derive(Debug, Deserialize)]
struct SelectedFile {
    name: String,
    #[serde(rename = "type", default)]
    content_type: String,
    data: String,
}

impl SelectedFile {
    fn into_pending(self) -> Option<PendingFile> {
        let bytes = base64::engine::general_purpose::STANDARD
            .decode(self.data.as_bytes())
            .map_err(|e| tracing::warn!("could not decode selected file: {e}"))
            .ok()?;
        let content_type = Some(self.content_type).filter(|ct| !ct.is_empty());
        Some(PendingFile::new(self.name, content_type, bytes))
    }
}

/// Parse the JSON produced by the file-reading script. Empty means the
/// selection was cancelled.
fn parse_selection(raw: &str) -> Option<PendingFile> {
    if raw.trim().is_empty() {
        return None;
    }
    serde_json::from_str::<SelectedFile>(raw)
        .map_err(|e| tracing::warn!("unexpected file selection payload: {e}"))
        .ok()
        .and_then(SelectedFile::into_pending)
}

/// Read the first selected file of the input as `{name, type, data}` JSON.
async fn read_selected_file() -> Option<PendingFile> {
    let js = format!(
        r#"(async function(){{
            const el = document.getElementById("{FILE_INPUT_ID}");
            if(!el || !el.files || !el.files[0]) return "";
            const f = el.files[0];
            const bytes = new Uint8Array(await f.arrayBuffer());
            let bin = "";
            for (let i = 0; i < bytes.length; i += 0x8000) {{
                bin += String.fromCharCode.apply(null, bytes.subarray(i, i + 0x8000));
            }}
            return JSON.stringify({{ name: f.name, type: f.type || "", data: btoa(bin) }});
        }})()"#
    );

    let raw = document::eval(&js)
        .await
        .ok()
        .and_then(|v| v.as_str().map(|s| s.to_string()))
        .unwrap_or_default();
    parse_selection(&raw)
}

/// Reset the picker once a submission has finished.
pub(crate) async fn clear_file_input() {
    let _ = document::eval(&format!(
        r#"(function(){{ const el = document.getElementById("{FILE_INPUT_ID}"); if(el) el.value = ""; return ""; }})()"#
    ))
    .await;
}

/// What the form shows, derived from the upload flow by its owner.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct UploadStatus {
    pub can_submit: bool,
    pub submitting: bool,
    pub armed_name: Option<String>,
}

impl UploadStatus {
    pub fn of(flow: &UploadFlow) -> Self {
        Self {
            can_submit: flow.can_submit(),
            submitting: flow.is_submitting(),
            armed_name: flow.armed_file().map(|f| f.name.clone()),
        }
    }
}

/// File picker plus submit button.
///
/// Read-only view of the upload flow: the selection goes out through
/// `on_select` and the submit click through `on_submit`.
#[component]
pub fn UploadForm(
    status: UploadStatus,
    on_select: EventHandler<Option<PendingFile>>,
    on_submit: EventHandler<()>,
) -> Element {
    let lang = crate::use_lang()();

    rsx! {
        div { class: "panel upload_form",
            label { r#for: FILE_INPUT_ID, {crate::t(lang, "upload.label")} }
            input {
                id: FILE_INPUT_ID,
                r#type: "file",
                accept: "image/*",
                disabled: status.submitting,
                onchange: move |_| {
                    spawn(async move {
                        on_select.call(read_selected_file().await);
                    });
                },
            }
            button {
                class: "btn primary",
                r#type: "button",
                disabled: !status.can_submit,
                onclick: move |_| on_submit.call(()),
                if status.submitting {
                    {crate::t(lang, "upload.submitting")}
                } else {
                    {crate::t(lang, "upload.submit")}
                }
            }
            if let Some(name) = &status.armed_name {
                p { class: "hint", {format!("{} {name}", crate::t(lang, "upload.armed"))} }
            }
        }
    }
}
