use api::{AppMode, ClientConfig};
use dioxus::logger::tracing::{info, warn};
use dioxus::prelude::*;

use views::Home;

mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(WebNavbar)]
    #[route("/")]
    Home {},
}

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    // `launch` installs the tracing subscriber (console in the browser).
    dioxus::launch(App);
}

fn log_runtime_config(config: &ClientConfig) {
    match config.mode {
        AppMode::Local => info!("startup: APP_MODE=local, images are kept in memory"),
        AppMode::Remote if config.has_base_url() => {
            info!("startup: {}={}", api::config::API_URL_VAR, config.base_url)
        }
        AppMode::Remote => warn!(
            "startup: WARNING missing {}; every request will fail",
            api::config::API_URL_VAR
        ),
    }
}

#[component]
fn App() -> Element {
    let config = use_hook(|| {
        let config = ClientConfig::from_env();
        log_runtime_config(&config);
        config
    });

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        ui::GalleryTheme {}
        ui::I18nProvider {
            ui::ToastProvider {
                ui::StoreProvider { config,
                    Router::<Route> {}
                }
            }
        }
    }
}

#[component]
fn WebNavbar() -> Element {
    let lang_signal = ui::use_lang();
    let lang = lang_signal();

    rsx! {
        div { class: "gallery_nav",
            div { class: "gallery_nav_inner",
                Link { class: "brand", to: Route::Home {}, {ui::t(lang, "app.name")} }
                button {
                    class: "btn",
                    r#type: "button",
                    onclick: move |_| ui::set_lang(lang_signal, lang.other()),
                    {ui::t(lang, "lang.switch")}
                }
            }
        }
        div { class: "gallery_container", Outlet::<Route> {} }
    }
}
