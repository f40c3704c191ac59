//! UI preferences and the parsing rules for their stored values.
//!
//! # Design
//! - Stored values are untrusted; every parser degrades to a default.
//! - Storage access lives in the wasm shell; this module stays pure.

use crate::core::theme::ThemeName;
use homedeck_objects::icon::DEFAULT_IMAGE_PREFIX;
use homedeck_objects::object::FALLBACK_LANG;

/// Storage key for the theme name.
pub const THEME_KEY: &str = "homedeck.theme";
/// Storage key for the display language.
pub const LANG_KEY: &str = "homedeck.lang";
/// Storage key for the adapter image prefix.
pub const IMAGE_PREFIX_KEY: &str = "homedeck.image_prefix";

/// Preferences that shape how objects are rendered.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UiPreferences {
    /// Selected theme.
    pub theme: ThemeName,
    /// Language used for object names.
    pub lang: String,
    /// Prefix for adapter image paths.
    pub image_prefix: String,
}

impl Default for UiPreferences {
    fn default() -> Self {
        Self {
            theme: ThemeName::default(),
            lang: FALLBACK_LANG.to_string(),
            image_prefix: DEFAULT_IMAGE_PREFIX.to_string(),
        }
    }
}

/// Reduce a language tag (`de-AT`, `pt_BR`) to its lowercase primary subtag.
///
/// Returns `None` unless the subtag is two or three ASCII letters.
#[must_use]
pub fn normalize_lang(tag: &str) -> Option<String> {
    let primary = tag.trim().split(['-', '_']).next()?;
    let valid = (2..=3).contains(&primary.len())
        && primary.chars().all(|c| c.is_ascii_alphabetic());
    valid.then(|| primary.to_ascii_lowercase())
}

/// Clean an image prefix: trimmed and without trailing slashes.
///
/// Blank values become `.`; a bare `/` stays the server root.
#[must_use]
pub fn normalize_image_prefix(value: &str) -> String {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return DEFAULT_IMAGE_PREFIX.to_string();
    }
    match trimmed.trim_end_matches('/') {
        "" => "/".to_string(),
        prefix => prefix.to_string(),
    }
}

impl UiPreferences {
    /// Build preferences from raw stored values.
    ///
    /// `browser_lang` is consulted when no valid language was stored.
    #[must_use]
    pub fn from_stored(
        theme: Option<&str>,
        lang: Option<&str>,
        image_prefix: Option<&str>,
        browser_lang: Option<&str>,
    ) -> Self {
        let defaults = Self::default();
        Self {
            theme: theme.map_or(defaults.theme, ThemeName::parse),
            lang: lang
                .and_then(normalize_lang)
                .or_else(|| browser_lang.and_then(normalize_lang))
                .unwrap_or(defaults.lang),
            image_prefix: image_prefix.map_or(defaults.image_prefix, normalize_image_prefix),
        }
    }
}
