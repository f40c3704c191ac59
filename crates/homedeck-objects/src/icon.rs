//! Icon resolution for domain objects.
//!
//! # Design
//! - Built-in icons come from an ordered rule table; the first matching rule wins.
//! - Icon references are classified once into [`IconSpec`] instead of being sniffed at
//!   every use site.
//! - Source resolution only synthesises paths; fetching is the browser's job.

use crate::object::{DomainObject, FALLBACK_LANG};
use tracing::debug;

/// Path prefix used when the caller does not supply one.
pub const DEFAULT_IMAGE_PREFIX: &str = ".";

/// Built-in vector icons selected from an object's identifier.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SymbolicIcon {
    /// System configuration and design documents.
    System,
    /// User data root.
    Photo,
    /// Alias root.
    Alias,
    /// User groups.
    Group,
    /// Users.
    User,
    /// Hosts.
    Host,
    /// Connection indicators.
    Connection,
    /// Info channels.
    Info,
    /// Meta objects (file storage descriptors).
    Meta,
}

impl SymbolicIcon {
    /// Stable identifier used for CSS hooks and test ids.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::System => "system",
            Self::Photo => "photo",
            Self::Alias => "alias",
            Self::Group => "group",
            Self::User => "user",
            Self::Host => "host",
            Self::Connection => "connection",
            Self::Info => "info",
            Self::Meta => "meta",
        }
    }
}

type IconRule = (fn(&DomainObject) -> bool, SymbolicIcon);

/// Evaluated top to bottom. Narrow identifiers come before the suffix rules.
const ICON_RULES: &[IconRule] = &[
    (is_system_root, SymbolicIcon::System),
    (is_userdata_root, SymbolicIcon::Photo),
    (is_alias_root, SymbolicIcon::Alias),
    (|obj| obj.id == "system.adapter", SymbolicIcon::System),
    (|obj| obj.id == "system.group", SymbolicIcon::Group),
    (|obj| obj.id == "system.user", SymbolicIcon::User),
    (|obj| obj.id == "system.host", SymbolicIcon::Host),
    (is_connection, SymbolicIcon::Connection),
    (|obj| obj.id.ends_with(".info"), SymbolicIcon::Info),
    (|obj| obj.kind() == Some("meta"), SymbolicIcon::Meta),
];

fn is_system_root(obj: &DomainObject) -> bool {
    obj.id.starts_with("_design/") || obj.id == "system"
}

fn is_userdata_root(obj: &DomainObject) -> bool {
    matches!(obj.id.as_str(), "0_userdata" | "0_userdata.0")
}

fn is_alias_root(obj: &DomainObject) -> bool {
    matches!(obj.id.as_str(), "alias" | "alias.0")
}

fn is_connection(obj: &DomainObject) -> bool {
    obj.id.ends_with(".connection") || obj.id.ends_with(".connected")
}

/// Pick the built-in icon for an object, if any.
///
/// Objects without an identifier never get an icon.
#[must_use]
pub fn system_icon(obj: Option<&DomainObject>) -> Option<SymbolicIcon> {
    let obj = obj.filter(|obj| obj.has_id())?;
    ICON_RULES
        .iter()
        .find(|(matches, _)| matches(obj))
        .map(|(_, icon)| *icon)
}

/// Classified icon reference.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum IconSpec {
    /// One or two UTF-16 code units, rendered as text.
    Glyph(String),
    /// `data:image/svg...` URL rendered as inline markup.
    InlineSvg(String),
    /// Any other `data:image/...` URL.
    InlineImage(String),
    /// Relative or absolute image URL.
    Url(String),
}

impl IconSpec {
    /// Classify a raw icon string. Empty strings are not icons.
    #[must_use]
    pub fn classify(raw: &str) -> Option<Self> {
        if raw.is_empty() {
            return None;
        }
        let spec = if raw.encode_utf16().count() < 3 {
            Self::Glyph(raw.to_string())
        } else if raw.starts_with("data:image/svg") {
            Self::InlineSvg(raw.to_string())
        } else if raw.starts_with("data:image/") {
            Self::InlineImage(raw.to_string())
        } else {
            Self::Url(raw.to_string())
        };
        Some(spec)
    }

    /// The raw string this icon was classified from.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Glyph(value)
            | Self::InlineSvg(value)
            | Self::InlineImage(value)
            | Self::Url(value) => value,
        }
    }
}

/// Resolve the image source for an object's `common.icon`.
///
/// Data URLs are returned unchanged. File references are mapped below
/// `{prefix}/adapter/`, using the adapter name for instance and adapter objects and
/// the owning adapter segment of the identifier otherwise. Icons without a file
/// extension are rejected.
#[must_use]
pub fn icon_source(obj: Option<&DomainObject>, prefix: Option<&str>) -> Option<String> {
    let obj = obj?;
    let icon = obj.icon()?;
    if icon.starts_with("data:image/") {
        return Some(icon.to_string());
    }
    if !icon.contains('.') {
        debug!(id = %obj.id, icon, "icon without extension ignored");
        return None;
    }
    let prefix = prefix
        .filter(|prefix| !prefix.is_empty())
        .unwrap_or(DEFAULT_IMAGE_PREFIX)
        .trim_end_matches('/');

    if matches!(obj.kind(), Some("instance" | "adapter")) {
        let Some(adapter) = obj
            .common
            .name
            .as_ref()
            .and_then(|name| name.resolve(FALLBACK_LANG))
            .filter(|name| !name.is_empty())
        else {
            debug!(id = %obj.id, "adapter icon without adapter name ignored");
            return None;
        };
        return Some(format!("{prefix}/adapter/{adapter}/{icon}"));
    }

    let base = if obj.id.starts_with("system.adapter.") {
        obj.id.splitn(3, '.').nth(2)
    } else {
        obj.id.split('.').next()
    };
    let Some(base) = base.filter(|base| !base.is_empty()) else {
        debug!(id = %obj.id, icon, "icon owner could not be derived from id");
        return None;
    };
    Some(format!("{prefix}/adapter/{}", join_icon(base, icon)))
}

fn join_icon(base: &str, icon: &str) -> String {
    if icon.starts_with('/') {
        format!("{base}{icon}")
    } else {
        format!("{base}/{icon}")
    }
}
