use dioxus::prelude::*;

const GALLERY_CSS: Asset = asset!("/assets/styling/gallery.css");

#[component]
pub fn GalleryTheme() -> Element {
    rsx! { document::Link { rel: "stylesheet", href: GALLERY_CSS } }
}
