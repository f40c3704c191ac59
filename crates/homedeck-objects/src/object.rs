//! Domain objects as delivered by the object store.
//!
//! # Design
//! - Mirror the wire shape (`_id`, `type`, `common`) and ignore unknown fields.
//! - Treat a missing identifier as empty; resolvers read empty as "absent".
//! - Keep name resolution here so every view localises names the same way.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Language used when the requested translation is missing.
pub const FALLBACK_LANG: &str = "en";

/// Configuration/state record identified by a dotted hierarchical path.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DomainObject {
    /// Dotted identifier, e.g. `system.adapter.hue.0`.
    #[serde(rename = "_id", default)]
    pub id: String,
    /// Object type (`state`, `channel`, `instance`, `meta`, ...).
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    /// Shared metadata block.
    #[serde(default)]
    pub common: CommonMeta,
}

/// The `common` metadata block of a [`DomainObject`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommonMeta {
    /// Icon reference: glyph, data URL or file name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    /// CSS colour associated with the object.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    /// Display name, plain or per-language.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<ObjectName>,
}

/// Mapping from language code to display string.
pub type LocalizedName = BTreeMap<String, String>;

/// Display name of an object.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ObjectName {
    /// Single name for every language.
    Plain(String),
    /// Translations keyed by language code.
    Localized(LocalizedName),
}

impl ObjectName {
    /// Resolve the name for `lang`, falling back to English and then to the first
    /// translation in key order.
    #[must_use]
    pub fn resolve(&self, lang: &str) -> Option<&str> {
        match self {
            Self::Plain(name) => Some(name.as_str()),
            Self::Localized(names) => names
                .get(lang)
                .or_else(|| names.get(FALLBACK_LANG))
                .or_else(|| names.values().next())
                .map(String::as_str),
        }
    }
}

impl From<&str> for ObjectName {
    fn from(value: &str) -> Self {
        Self::Plain(value.to_string())
    }
}

impl DomainObject {
    /// Build an object with only an identifier set.
    #[must_use]
    pub fn with_id(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Self::default()
        }
    }

    /// Whether the object carries an identifier.
    #[must_use]
    pub fn has_id(&self) -> bool {
        !self.id.is_empty()
    }

    /// Type tag as a string slice.
    #[must_use]
    pub fn kind(&self) -> Option<&str> {
        self.kind.as_deref()
    }

    /// Non-empty icon value from the metadata.
    #[must_use]
    pub fn icon(&self) -> Option<&str> {
        self.common.icon.as_deref().filter(|icon| !icon.is_empty())
    }

    /// Non-empty colour value from the metadata.
    #[must_use]
    pub fn color(&self) -> Option<&str> {
        self.common.color.as_deref().filter(|color| !color.is_empty())
    }

    /// Human readable name for `lang`.
    ///
    /// Objects without a usable name fall back to the last identifier segment.
    #[must_use]
    pub fn display_name(&self, lang: &str) -> String {
        self.common
            .name
            .as_ref()
            .and_then(|name| name.resolve(lang))
            .filter(|name| !name.is_empty())
            .map_or_else(|| self.last_segment().to_string(), ToString::to_string)
    }

    fn last_segment(&self) -> &str {
        self.id.rsplit('.').next().unwrap_or_default()
    }
}
