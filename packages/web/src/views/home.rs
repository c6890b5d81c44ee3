use dioxus::prelude::*;

#[component]
pub fn Home() -> Element {
    rsx! { ui::Gallery {} }
}
