use dioxus::prelude::*;

const LANG_STORAGE_KEY: &str = "gallery_lang";

/// Supported languages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lang {
    En,
    Fr,
}

impl Lang {
    pub fn code(self) -> &'static str {
        match self {
            Lang::En => "en",
            Lang::Fr => "fr",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        let code = code.trim().to_ascii_lowercase();
        match code.split(['-', '_']).next().unwrap_or_default() {
            "en" => Some(Lang::En),
            "fr" => Some(Lang::Fr),
            _ => None,
        }
    }

    pub fn other(self) -> Self {
        match self {
            Lang::En => Lang::Fr,
            Lang::Fr => Lang::En,
        }
    }
}

/// Provide `Signal<Lang>` to the component tree, defaulting to English.
#[component]
pub fn I18nProvider(children: Element) -> Element {
    let mut lang = use_signal(|| Lang::En);
    use_context_provider(|| lang);

    // Best-effort: load from localStorage or browser language after mount.
    use_effect(move || {
        spawn(async move {
            let js = format!(
                r#"
            (function(){{
              try {{
                const saved = localStorage.getItem("{LANG_STORAGE_KEY}");
                if(saved && typeof saved === "string" && saved.length > 0) return saved;
              }} catch(e) {{}}
              try {{ return (navigator.language || "en"); }} catch(e) {{}}
              return "en";
            }})()
            "#
            );
            if let Ok(v) = document::eval(&js).await {
                if let Some(next) = v.as_str().and_then(Lang::from_code) {
                    lang.set(next);
                }
            }
        });
    });

    rsx! { {children} }
}

pub fn use_lang() -> Signal<Lang> {
    if let Some(sig) = try_use_context::<Signal<Lang>>() {
        return sig;
    }

    dioxus::logger::tracing::warn!("missing I18nProvider context, using local Lang::En signal");
    use_signal(|| Lang::En)
}

/// Switch language and remember the choice.
pub fn set_lang(mut lang_signal: Signal<Lang>, lang: Lang) {
    lang_signal.set(lang);
    spawn(async move {
        let _ = document::eval(&format!(
            r#"(function(){{ try {{ localStorage.setItem("{LANG_STORAGE_KEY}","{}"); }} catch(e) {{}} return ""; }})()"#,
            lang.code()
        ))
        .await;
    });
}

/// Translate a key for a given language. Falls back to English, then the key.
pub fn t(lang: Lang, key: &str) -> String {
    match (lang, key) {
        (Lang::En, "app.name") => "Image Gallery".to_string(),
        (Lang::Fr, "app.name") => "Galerie d'images".to_string(),
        (Lang::En, "lang.switch") => "Français".to_string(),
        (Lang::Fr, "lang.switch") => "English".to_string(),

        // Backend
        (Lang::En, "backend.url") => "Backend url:".to_string(),
        (Lang::Fr, "backend.url") => "URL du serveur :".to_string(),
        (Lang::En, "backend.unset") => "(not configured)".to_string(),
        (Lang::Fr, "backend.unset") => "(non configurée)".to_string(),
        (Lang::En, "backend.local") => "local (in memory)".to_string(),
        (Lang::Fr, "backend.local") => "local (en mémoire)".to_string(),
        (Lang::En, "backend.test_call") => "Test call".to_string(),
        (Lang::Fr, "backend.test_call") => "Appel de test".to_string(),

        // Gallery
        (Lang::En, "gallery.title") => "Gallery".to_string(),
        (Lang::Fr, "gallery.title") => "Galerie".to_string(),
        (Lang::En, "gallery.refresh") => "Refresh".to_string(),
        (Lang::Fr, "gallery.refresh") => "Actualiser".to_string(),
        (Lang::En, "gallery.loading") => "Loading…".to_string(),
        (Lang::Fr, "gallery.loading") => "Chargement…".to_string(),
        (Lang::En, "gallery.empty") => "No images yet.".to_string(),
        (Lang::Fr, "gallery.empty") => "Aucune image pour l'instant.".to_string(),
        (Lang::En, "gallery.delete") => "Delete".to_string(),
        (Lang::Fr, "gallery.delete") => "Supprimer".to_string(),

        // Upload
        (Lang::En, "upload.label") => "Upload an image".to_string(),
        (Lang::Fr, "upload.label") => "Téléverser une image".to_string(),
        (Lang::En, "upload.submit") => "Upload Image".to_string(),
        (Lang::Fr, "upload.submit") => "Téléverser".to_string(),
        (Lang::En, "upload.submitting") => "Uploading…".to_string(),
        (Lang::Fr, "upload.submitting") => "Envoi…".to_string(),
        (Lang::En, "upload.armed") => "Ready:".to_string(),
        (Lang::Fr, "upload.armed") => "Prêt :".to_string(),

        // Toasts
        (Lang::En, "toast.details") => "Details:".to_string(),
        (Lang::Fr, "toast.details") => "Détails :".to_string(),
        (Lang::En, "toast.upload_ok_title") => "Image uploaded successfully".to_string(),
        (Lang::Fr, "toast.upload_ok_title") => "Image téléversée".to_string(),
        (Lang::En, "toast.upload_failed_title") => "Error uploading image".to_string(),
        (Lang::Fr, "toast.upload_failed_title") => "Échec du téléversement".to_string(),
        (Lang::En, "toast.selection_title") => "File not selected".to_string(),
        (Lang::Fr, "toast.selection_title") => "Aucun fichier sélectionné".to_string(),
        (Lang::En, "toast.list_failed_title") => "Could not load images".to_string(),
        (Lang::Fr, "toast.list_failed_title") => "Impossible de charger les images".to_string(),
        (Lang::En, "toast.delete_ok_title") => "Image deleted".to_string(),
        (Lang::Fr, "toast.delete_ok_title") => "Image supprimée".to_string(),
        (Lang::En, "toast.delete_failed_title") => "Could not delete image".to_string(),
        (Lang::Fr, "toast.delete_failed_title") => "Impossible de supprimer l'image".to_string(),
        (Lang::En, "toast.ping_title") => "Backend responded".to_string(),
        (Lang::Fr, "toast.ping_title") => "Le serveur a répondu".to_string(),
        (Lang::En, "toast.ping_failed_title") => "Backend unreachable".to_string(),
        (Lang::Fr, "toast.ping_failed_title") => "Serveur injoignable".to_string(),
        (Lang::En, "toast.dismiss") => "Dismiss".to_string(),
        (Lang::Fr, "toast.dismiss") => "Fermer".to_string(),

        // Fallback: use English string if present, else show key.
        (Lang::Fr, k) => t(Lang::En, k),
        (Lang::En, _) => key.to_string(),
    }
}
