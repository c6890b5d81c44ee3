/// Environment variable holding the backend base URL.
pub const API_URL_VAR: &str = "GALLERY_API_URL";

/// Environment variable selecting the store implementation.
pub const APP_MODE_VAR: &str = "APP_MODE";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppMode {
    /// In-memory store, no backend required.
    Local,
    /// HTTP backend at `base_url`.
    Remote,
}

impl AppMode {
    pub fn from_env() -> Self {
        Self::parse(std::env::var(APP_MODE_VAR).ok().as_deref())
    }

    fn parse(value: Option<&str>) -> Self {
        match value.unwrap_or_default().trim().to_lowercase().as_str() {
            "local" => AppMode::Local,
            _ => AppMode::Remote,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub mode: AppMode,
    /// May be empty; requests then fail with a transport error.
    pub base_url: String,
}

impl ClientConfig {
    /// Resolve from the process environment, falling back to values baked in
    /// at build time (the only source available in the browser).
    pub fn from_env() -> Self {
        #[cfg(not(target_arch = "wasm32"))]
        let _ = dotenvy::dotenv();

        Self::from_lookup(|key| {
            std::env::var(key).ok().or_else(|| match key {
                API_URL_VAR => option_env!("GALLERY_API_URL").map(str::to_string),
                APP_MODE_VAR => option_env!("APP_MODE").map(str::to_string),
                _ => None,
            })
        })
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mode = AppMode::parse(lookup(APP_MODE_VAR).as_deref());
        let base_url = lookup(API_URL_VAR)
            .map(|v| v.trim().trim_end_matches('/').to_string())
            .unwrap_or_default();
        Self { mode, base_url }
    }

    pub fn has_base_url(&self) -> bool {
        !self.base_url.is_empty()
    }

    /// Join `path` onto the base URL.
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }
}
