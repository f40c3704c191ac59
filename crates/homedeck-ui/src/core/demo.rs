//! Sample object tree rendered by the showcase shell.

use homedeck_objects::DomainObject;
use serde_json::json;

/// Parse the showcase objects.
///
/// # Errors
/// Returns a [`serde_json::Error`] if the fixture no longer matches the object model.
pub fn demo_objects() -> Result<Vec<DomainObject>, serde_json::Error> {
    serde_json::from_value(json!([
        { "_id": "system", "type": "folder", "common": { "name": "System" } },
        { "_id": "system.adapter", "type": "folder", "common": { "name": "Adapters" } },
        {
            "_id": "system.adapter.hue.0",
            "type": "instance",
            "common": { "name": "hue", "icon": "hue.png", "color": "#1f7ab8" }
        },
        { "_id": "system.group", "type": "folder", "common": { "name": "Groups" } },
        {
            "_id": "system.group.administrator",
            "type": "group",
            "common": {
                "name": { "en": "Administrator", "de": "Administrator" },
                "icon": "👑",
                "color": "#ffcc00"
            }
        },
        {
            "_id": "system.group.user",
            "type": "group",
            "common": { "name": { "en": "User", "de": "Benutzer" } }
        },
        { "_id": "system.user", "type": "folder", "common": { "name": "Users" } },
        { "_id": "system.host", "type": "folder", "common": { "name": "Hosts" } },
        { "_id": "0_userdata.0", "type": "meta", "common": { "name": "User files" } },
        { "_id": "alias.0", "type": "folder", "common": { "name": "Aliases" } },
        {
            "_id": "hue.0.info.connection",
            "type": "state",
            "common": { "name": { "en": "Connected to bridge", "de": "Mit Bridge verbunden" } }
        },
        { "_id": "hue.0.info", "type": "channel", "common": { "name": "Information" } },
        {
            "_id": "enum.rooms.living_room",
            "type": "enum",
            "common": {
                "name": { "en": "Living room", "de": "Wohnzimmer" },
                "icon": "data:image/svg+xml;utf8,%3Csvg%20xmlns%3D%22http%3A%2F%2Fwww.w3.org%2F2000%2Fsvg%22%20viewBox%3D%220%200%2024%2024%22%3E%3Cpath%20d%3D%22M3%2010l9-7%209%207v10H3z%22%2F%3E%3C%2Fsvg%3E",
                "color": "#2e7d32"
            }
        },
        {
            "_id": "enum.functions.light",
            "type": "enum",
            "common": { "name": { "en": "Light", "de": "Licht" }, "icon": "💡" }
        }
    ]))
}
