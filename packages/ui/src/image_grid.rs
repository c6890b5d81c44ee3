use std::collections::HashMap;

use api::ImageRecord;
use dioxus::prelude::*;

/// One render key per tile: the object key, with `#n` appended to the n-th
/// repeat so an upload racing a refresh still renders every tile.
fn tile_keys(records: &[ImageRecord]) -> Vec<String> {
    let mut seen: HashMap<&str, usize> = HashMap::new();
    records
        .iter()
        .map(|record| {
            let key = record.object_key.as_str();
            let count = seen.entry(key).or_insert(0);
            let tile_key = match *count {
                0 => key.to_string(),
                n => format!("{key}#{n}"),
            };
            *count += 1;
            tile_key
        })
        .collect()
}

/// Renders a snapshot of the collection. Deletion goes back to the owner
/// through `on_delete` with the object key.
#[component]
pub fn ImageGrid(records: Vec<ImageRecord>, on_delete: EventHandler<String>) -> Element {
    let lang = crate::use_lang()();
    let keys = tile_keys(&records);

    rsx! {
        if records.is_empty() {
            p { class: "hint", {crate::t(lang, "gallery.empty")} }
        }
        div { class: "image_grid",
            for (tile_key, record) in keys.into_iter().zip(records.iter()) {
                figure { key: "{tile_key}", class: "image_tile",
                    img { src: "{record.public_url}", alt: record.display_name().to_string(), loading: "lazy" }
                    figcaption {
                        span { class: "hint", {record.display_name().to_string()} }
                        button {
                            class: "btn danger",
                            r#type: "button",
                            onclick: {
                                let key = record.object_key.clone();
                                move |_| on_delete.call(key.clone())
                            },
                            {crate::t(lang, "gallery.delete")}
                        }
                    }
                }
            }
        }
    }
}
