//! This crate contains all shared UI for the gallery.

mod gallery;
pub use gallery::Gallery;

mod upload_form;
pub use upload_form::{UploadForm, UploadStatus};

mod image_grid;
pub use image_grid::ImageGrid;

mod health;
pub use health::HealthCheck;

mod store;
pub use store::{use_store, StoreHandle, StoreProvider};

mod theme;
pub use theme::GalleryTheme;

mod toast;
pub use toast::{use_toasts, Toast, ToastKind, ToastProvider, ToastQueue, Toasts};

mod i18n;
pub use i18n::{set_lang, t, use_lang, I18nProvider, Lang};
