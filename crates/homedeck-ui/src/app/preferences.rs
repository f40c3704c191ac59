//! Persistence helpers for UI preferences.

use crate::core::preferences::{IMAGE_PREFIX_KEY, LANG_KEY, THEME_KEY, UiPreferences};
use crate::core::theme::ThemeName;
use gloo::console;
use gloo::storage::{LocalStorage, Storage};
use gloo::utils::window;
use serde::Serialize;

pub(crate) fn load_preferences() -> UiPreferences {
    let theme = LocalStorage::get::<String>(THEME_KEY).ok();
    let lang = LocalStorage::get::<String>(LANG_KEY).ok();
    let image_prefix = LocalStorage::get::<String>(IMAGE_PREFIX_KEY).ok();
    let browser_lang = window().navigator().language();
    UiPreferences::from_stored(
        theme.as_deref(),
        lang.as_deref(),
        image_prefix.as_deref(),
        browser_lang.as_deref(),
    )
}

pub(crate) fn persist_theme(theme: ThemeName) {
    set_storage(THEME_KEY, theme.as_str());
}

pub(crate) fn persist_lang(lang: &str) {
    set_storage(LANG_KEY, lang);
}

fn set_storage<T: Serialize>(key: &'static str, value: T) {
    if let Err(err) = LocalStorage::set(key, value) {
        log_storage_error("set", key, &err.to_string());
    }
}

fn log_storage_error(operation: &'static str, key: &'static str, detail: &str) {
    console::error!("storage operation failed", operation, key, detail);
}
