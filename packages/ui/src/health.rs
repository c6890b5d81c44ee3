use api::AppMode;
use dioxus::prelude::*;

/// Shows where requests go and offers a `GET /` test call.
#[component]
pub fn HealthCheck() -> Element {
    let handle = crate::use_store();
    let toasts = crate::use_toasts();
    let lang = crate::use_lang()();

    let target = match handle.config.mode {
        AppMode::Local => crate::t(lang, "backend.local"),
        AppMode::Remote if handle.config.has_base_url() => handle.config.base_url.clone(),
        AppMode::Remote => crate::t(lang, "backend.unset"),
    };

    rsx! {
        div { class: "backend_bar",
            p { class: "hint", {format!("{} {target}", crate::t(lang, "backend.url"))} }
            button {
                class: "btn",
                r#type: "button",
                onclick: move |_| {
                    let store = handle.store.clone();
                    spawn(async move {
                        match store.ping().await {
                            Ok(value) => {
                                let body = serde_json::to_string_pretty(&value)
                                    .unwrap_or_else(|_| value.to_string());
                                toasts.info(crate::t(lang, "toast.ping_title"), Some(body));
                            }
                            Err(err) => {
                                toasts.failure(lang, "toast.ping_failed_title", &err.reason())
                            }
                        }
                    });
                },
                {crate::t(lang, "backend.test_call")}
            }
        }
    }
}
