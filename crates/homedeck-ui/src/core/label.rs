//! Normalisation of "text with icon" inputs into a render-ready item.
//!
//! # Design
//! - Accept the three input shapes (plain id, lookup key, object) as one enum.
//! - Resolve everything to a [`LabeledItem`] before any rendering happens.
//! - Keep the branch order stable: lookup, plain text, empty, object.

use crate::core::color::{invert_color, inverted_text_color};
use crate::core::theme::ThemeMode;
use homedeck_objects::DomainObject;
use std::collections::BTreeMap;

/// Layout of the label container: a single clipped line with the icon beside the text.
pub const LABEL_STYLE: &str = "border-radius: 3px; padding: 0 3px; line-height: 20px; \
white-space: nowrap; overflow: hidden; display: flex; align-items: center;";

/// Edge length of the icon inside a label.
pub const LABEL_ICON_SIZE: u32 = 16;

/// Box of the icon inside a label.
pub const LABEL_ICON_STYLE: &str =
    "width: 16px; height: 16px; margin-right: 8px; vertical-align: middle;";

/// Name box; ellipsised when the label is clipped.
pub const LABEL_TEXT_STYLE: &str =
    "display: inline-block; overflow: hidden; text-overflow: ellipsis;";

/// Namespace stripped from names found through a lookup.
pub const GROUP_PREFIX: &str = "system.group.";

/// Namespaces stripped from names of object inputs, in application order.
pub const OBJECT_NAME_PREFIXES: [&str; 4] = [
    "system.group.",
    "system.user.",
    "enum.rooms.",
    "enum.functions.",
];

/// Value shown by a labelled icon.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum LabelSource {
    /// Identifier or lookup key, possibly without its namespace prefix.
    Text(String),
    /// A full domain object.
    Object(DomainObject),
    /// Nothing to show.
    #[default]
    Empty,
}

impl From<&str> for LabelSource {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for LabelSource {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<DomainObject> for LabelSource {
    fn from(value: DomainObject) -> Self {
        Self::Object(value)
    }
}

impl<T: Into<Self>> From<Option<T>> for LabelSource {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Empty, Into::into)
    }
}

/// Objects a text value is looked up in.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Lookup {
    /// Ordered objects, scanned by identifier.
    List(Vec<DomainObject>),
    /// Objects keyed by identifier.
    Options(BTreeMap<String, DomainObject>),
}

impl Lookup {
    fn find(&self, id: &str) -> Option<&DomainObject> {
        match self {
            Self::List(objects) => objects.iter().find(|obj| obj.id == id),
            Self::Options(objects) => objects.get(id),
        }
    }
}

/// Inputs for [`normalize_item`].
#[derive(Clone, Copy, Debug)]
pub struct LabelRequest<'a> {
    /// Value to label.
    pub source: &'a LabelSource,
    /// Optional lookup for text values.
    pub lookup: Option<&'a Lookup>,
    /// Prefix prepended to text values to form identifiers.
    pub remove_prefix: &'a str,
    /// Icon that wins over object metadata.
    pub icon: Option<&'a str>,
    /// Colour that wins over object metadata.
    pub color: Option<&'a str>,
    /// Language for object names.
    pub lang: &'a str,
}

impl<'a> LabelRequest<'a> {
    /// Request with no lookup, prefix or overrides.
    #[must_use]
    pub const fn new(source: &'a LabelSource, lang: &'a str) -> Self {
        Self {
            source,
            lookup: None,
            remove_prefix: "",
            icon: None,
            color: None,
            lang,
        }
    }
}

/// Render-ready label record.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LabeledItem {
    /// Display text.
    pub name: String,
    /// Identifier the label stands for.
    pub value: String,
    /// Icon reference, if any.
    pub icon: Option<String>,
    /// Background colour, if any.
    pub color: Option<String>,
}

/// Resolve a label input into a [`LabeledItem`].
#[must_use]
pub fn normalize_item(request: &LabelRequest<'_>) -> LabeledItem {
    let icon_override = request.icon.filter(|icon| !icon.is_empty());
    let color_override = request.color.filter(|color| !color.is_empty());
    let overrides_only = |name: String, value: String| LabeledItem {
        name,
        value,
        icon: icon_override.map(ToString::to_string),
        color: color_override.map(ToString::to_string),
    };

    match request.source {
        LabelSource::Text(text) => {
            let id = format!("{}{text}", request.remove_prefix);
            match request.lookup {
                Some(lookup) => match lookup.find(&id) {
                    Some(obj) => LabeledItem {
                        name: strip_first(&obj.display_name(request.lang), GROUP_PREFIX),
                        value: obj.id.clone(),
                        icon: icon_override.or_else(|| obj.icon()).map(ToString::to_string),
                        color: color_override
                            .or_else(|| obj.color())
                            .map(ToString::to_string),
                    },
                    // List misses drop the overrides; keyed misses keep them.
                    None if matches!(lookup, Lookup::List(_)) => LabeledItem {
                        name: text.clone(),
                        value: id,
                        icon: None,
                        color: None,
                    },
                    None => overrides_only(text.clone(), id),
                },
                None => overrides_only(text.clone(), id),
            }
        }
        LabelSource::Empty => overrides_only(String::new(), String::new()),
        LabelSource::Object(obj) => {
            let name = OBJECT_NAME_PREFIXES
                .iter()
                .fold(obj.display_name(request.lang), |name, prefix| {
                    strip_first(&name, prefix)
                });
            LabeledItem {
                name,
                value: obj.id.clone(),
                icon: icon_override.or_else(|| obj.icon()).map(ToString::to_string),
                color: color_override
                    .or_else(|| obj.color())
                    .map(ToString::to_string),
            }
        }
    }
}

fn strip_first(name: &str, prefix: &str) -> String {
    name.replacen(prefix, "", 1)
}

/// Inline style for a coloured label.
///
/// The border uses the inverted colour, the text the softened contrast colour for
/// `mode`, and the background the raw colour. Parts derived from a malformed colour
/// are left out. Returns `None` for items without a colour.
#[must_use]
pub fn label_style(item: &LabeledItem, mode: ThemeMode) -> Option<String> {
    let color = item.color.as_deref()?;
    let mut style = String::new();
    match invert_color(color) {
        Ok(border) => style.push_str(&format!("border: 1px solid {border}; ")),
        Err(err) => tracing::warn!(%err, value = %item.value, "label border colour skipped"),
    }
    match inverted_text_color(color, mode, true) {
        Ok(Some(text)) => style.push_str(&format!("color: {text}; ")),
        Ok(None) => {}
        Err(err) => tracing::warn!(%err, value = %item.value, "label text colour skipped"),
    }
    style.push_str(&format!("background-color: {color};"));
    Some(style)
}

/// Full inline style of a label container.
///
/// The caller's `extra` declarations follow the base layout and precede the colour
/// declarations, so colours always win.
#[must_use]
pub fn label_container_style(
    item: &LabeledItem,
    mode: ThemeMode,
    extra: Option<&str>,
) -> String {
    let mut style = LABEL_STYLE.to_string();
    for part in [
        extra.map(str::trim).filter(|extra| !extra.is_empty()).map(ToString::to_string),
        label_style(item, mode),
    ]
    .into_iter()
    .flatten()
    {
        style.push(' ');
        style.push_str(&part);
    }
    style
}

/// Tooltip of a label: the caller's title unless blank, else the item's identifier.
#[must_use]
pub fn label_title(title: Option<&str>, item: &LabeledItem) -> String {
    title
        .filter(|title| !title.is_empty())
        .map_or_else(|| item.value.clone(), ToString::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;
    use homedeck_objects::ObjectName;

    fn named(id: &str, name: &str) -> DomainObject {
        let mut obj = DomainObject::with_id(id);
        obj.common.name = Some(ObjectName::from(name));
        obj
    }

    fn group_list() -> Lookup {
        let mut admin = named("system.group.admin", "Admin");
        admin.common.icon = Some("admin.png".to_string());
        admin.common.color = Some("#ff0000".to_string());
        Lookup::List(vec![named("system.group.user", "User"), admin])
    }

    #[test]
    fn list_hit_uses_object_fields() {
        let source = LabelSource::from("admin");
        let lookup = group_list();
        let item = normalize_item(&LabelRequest {
            lookup: Some(&lookup),
            remove_prefix: GROUP_PREFIX,
            ..LabelRequest::new(&source, "en")
        });
        assert_eq!(item.name, "Admin");
        assert_eq!(item.value, "system.group.admin");
        assert_eq!(item.icon.as_deref(), Some("admin.png"));
        assert_eq!(item.color.as_deref(), Some("#ff0000"));
    }

    #[test]
    fn overrides_win_over_metadata() {
        let source = LabelSource::from("admin");
        let lookup = group_list();
        let item = normalize_item(&LabelRequest {
            lookup: Some(&lookup),
            remove_prefix: GROUP_PREFIX,
            icon: Some("🔑"),
            color: Some("#00ff00"),
            ..LabelRequest::new(&source, "en")
        });
        assert_eq!(item.icon.as_deref(), Some("🔑"));
        assert_eq!(item.color.as_deref(), Some("#00ff00"));
    }

    #[test]
    fn lookup_names_lose_group_namespace() {
        let source = LabelSource::from("guests");
        let lookup = Lookup::List(vec![DomainObject::with_id("system.group.guests")]);
        let item = normalize_item(&LabelRequest {
            lookup: Some(&lookup),
            remove_prefix: GROUP_PREFIX,
            ..LabelRequest::new(&source, "en")
        });
        assert_eq!(item.name, "guests");

        let prefixed = named("system.group.ops", "system.group.ops");
        let lookup = Lookup::List(vec![prefixed]);
        let source = LabelSource::from("system.group.ops");
        let item = normalize_item(&LabelRequest {
            lookup: Some(&lookup),
            ..LabelRequest::new(&source, "en")
        });
        assert_eq!(item.name, "ops");
    }

    #[test]
    fn list_miss_drops_overrides() {
        let source = LabelSource::from("nobody");
        let lookup = group_list();
        let item = normalize_item(&LabelRequest {
            lookup: Some(&lookup),
            remove_prefix: GROUP_PREFIX,
            icon: Some("x.png"),
            color: Some("#123456"),
            ..LabelRequest::new(&source, "en")
        });
        assert_eq!(
            item,
            LabeledItem {
                name: "nobody".to_string(),
                value: "system.group.nobody".to_string(),
                icon: None,
                color: None,
            }
        );
    }

    #[test]
    fn options_lookup_by_key() {
        let mut options = BTreeMap::new();
        options.insert(
            "enum.rooms.kitchen".to_string(),
            named("enum.rooms.kitchen", "Kitchen"),
        );
        let lookup = Lookup::Options(options);

        let hit_source = LabelSource::from("kitchen");
        let hit = normalize_item(&LabelRequest {
            lookup: Some(&lookup),
            remove_prefix: "enum.rooms.",
            color: Some("#abcdef"),
            ..LabelRequest::new(&hit_source, "en")
        });
        assert_eq!(hit.name, "Kitchen");
        assert_eq!(hit.value, "enum.rooms.kitchen");
        assert_eq!(hit.color.as_deref(), Some("#abcdef"));

        let miss_source = LabelSource::from("attic");
        let miss = normalize_item(&LabelRequest {
            lookup: Some(&lookup),
            remove_prefix: "enum.rooms.",
            icon: Some("attic.png"),
            ..LabelRequest::new(&miss_source, "en")
        });
        assert_eq!(miss.name, "attic");
        assert_eq!(miss.value, "enum.rooms.attic");
        assert_eq!(miss.icon.as_deref(), Some("attic.png"));
    }

    #[test]
    fn plain_text_keeps_overrides() {
        let source = LabelSource::from("hue.0");
        let item = normalize_item(&LabelRequest {
            remove_prefix: "system.adapter.",
            icon: Some("hue.png"),
            ..LabelRequest::new(&source, "en")
        });
        assert_eq!(item.name, "hue.0");
        assert_eq!(item.value, "system.adapter.hue.0");
        assert_eq!(item.icon.as_deref(), Some("hue.png"));
        assert_eq!(item.color, None);
    }

    #[test]
    fn empty_source_yields_blank_item() {
        let source = LabelSource::from(None::<&str>);
        let item = normalize_item(&LabelRequest {
            color: Some("#fff"),
            ..LabelRequest::new(&source, "en")
        });
        assert_eq!(item.name, "");
        assert_eq!(item.value, "");
        assert_eq!(item.color.as_deref(), Some("#fff"));
    }

    #[test]
    fn object_names_lose_known_namespaces() {
        for (id, expected) in [
            ("system.group.admin", "admin"),
            ("system.user.jane", "jane"),
            ("enum.rooms.kitchen", "kitchen"),
            ("enum.functions.light", "light"),
        ] {
            let source = LabelSource::from(named(id, id));
            let item = normalize_item(&LabelRequest::new(&source, "en"));
            assert_eq!(item.name, expected);
            assert_eq!(item.value, id);
        }
    }

    #[test]
    fn object_input_is_idempotent() {
        let mut obj = named("hue.0.lights.desk", "Desk lamp");
        obj.common.icon = Some("lamp.png".to_string());
        let source = LabelSource::from(obj);
        let first = normalize_item(&LabelRequest::new(&source, "en"));

        let mut echoed = DomainObject::with_id(first.value.clone());
        echoed.common.icon.clone_from(&first.icon);
        let source = LabelSource::from(echoed);
        let second = normalize_item(&LabelRequest::new(&source, "en"));
        assert_eq!(second.value, first.value);
        assert_eq!(second.icon, first.icon);
    }

    #[test]
    fn coloured_items_get_inverted_border_and_text() {
        let item = LabeledItem {
            name: "Admin".to_string(),
            value: "system.group.admin".to_string(),
            icon: None,
            color: Some("#112233".to_string()),
        };
        assert_eq!(
            label_style(&item, ThemeMode::Light).as_deref(),
            Some("border: 1px solid #eeddcc; color: #DDD; background-color: #112233;")
        );
        assert_eq!(label_style(&LabeledItem::default(), ThemeMode::Dark), None);
    }

    #[test]
    fn malformed_colour_keeps_background_only() {
        let item = LabeledItem {
            color: Some("tomato".to_string()),
            ..LabeledItem::default()
        };
        assert_eq!(
            label_style(&item, ThemeMode::Dark).as_deref(),
            Some("background-color: tomato;")
        );
    }

    #[test]
    fn container_style_clips_to_one_line() {
        let style = label_container_style(&LabeledItem::default(), ThemeMode::Light, None);
        assert_eq!(style, LABEL_STYLE);
        for decl in ["white-space: nowrap;", "overflow: hidden;", "display: flex;"] {
            assert!(style.contains(decl), "missing {decl}");
        }
        assert!(LABEL_TEXT_STYLE.contains("display: inline-block;"));
        assert!(LABEL_TEXT_STYLE.contains("text-overflow: ellipsis;"));
        assert!(LABEL_ICON_STYLE.starts_with(&format!("width: {LABEL_ICON_SIZE}px;")));
    }

    #[test]
    fn colour_declarations_follow_caller_style() {
        let item = LabeledItem {
            color: Some("#112233".to_string()),
            ..LabeledItem::default()
        };
        let style = label_container_style(&item, ThemeMode::Dark, Some("background-color: red;"));
        let caller = style.find("background-color: red;").expect("caller style kept");
        let colour = style.find("background-color: #112233;").expect("colour style kept");
        assert!(style.starts_with(LABEL_STYLE));
        assert!(caller < colour);
        assert!(style.ends_with("background-color: #112233;"));
    }

    #[test]
    fn blank_title_falls_back_to_value() {
        let item = LabeledItem {
            value: "system.group.admin".to_string(),
            ..LabeledItem::default()
        };
        assert_eq!(label_title(None, &item), "system.group.admin");
        assert_eq!(label_title(Some(""), &item), "system.group.admin");
        assert_eq!(label_title(Some("Admins"), &item), "Admins");
    }
}
