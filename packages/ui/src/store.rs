use std::sync::Arc;

use api::{ClientConfig, ImageStore};
use dioxus::prelude::*;

/// Store and configuration shared with the component tree.
#[derive(Clone)]
pub struct StoreHandle {
    pub store: Arc<dyn ImageStore>,
    pub config: ClientConfig,
}

impl StoreHandle {
    pub fn from_config(config: ClientConfig) -> Self {
        Self {
            store: api::store_from_config(&config),
            config,
        }
    }
}

pub fn use_store() -> StoreHandle {
    use_context::<StoreHandle>()
}

/// Build the store for `config` once and share it with every descendant.
#[component]
pub fn StoreProvider(config: ClientConfig, children: Element) -> Element {
    use_context_provider(|| StoreHandle::from_config(config));
    rsx! { {children} }
}
