//! Theme factory and colour tokens for the Homedeck admin UI.
//!
//! # Design
//! - One factory builds every named theme; unknown names get the light theme.
//! - Themes resolve to concrete colour strings so components never consult defaults.
//! - Dark themes derive their paper elevations from the background colour.

use crate::core::color::{Rgb, Tone};
use serde::Serialize;

/// A single color token with a stable name and hex value.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct ColorToken {
    /// Semantic identifier for the shade (e.g., "500").
    pub name: &'static str,
    /// Hex RGB value for the shade.
    pub hex: &'static str,
}

/// Collection of related tokens (e.g., orange shades).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Palette {
    /// Palette identifier.
    pub id: &'static str,
    /// Ordered list of shades from lightest to darkest.
    pub shades: &'static [ColorToken],
}

impl Palette {
    /// Look up a shade by name.
    #[must_use]
    pub fn shade(&self, name: &str) -> Option<&'static str> {
        self.shades
            .iter()
            .find(|token| token.name == name)
            .map(|token| token.hex)
    }
}

/// Orange 100.
pub const ORANGE_100: ColorToken = ColorToken {
    name: "100",
    hex: "#ffe0b2",
};
/// Orange 200.
pub const ORANGE_200: ColorToken = ColorToken {
    name: "200",
    hex: "#ffcc80",
};
/// Orange 300.
pub const ORANGE_300: ColorToken = ColorToken {
    name: "300",
    hex: "#ffb74d",
};
/// Orange 400.
pub const ORANGE_400: ColorToken = ColorToken {
    name: "400",
    hex: "#ffa726",
};
/// Link colours.
pub const ORANGE: Palette = Palette {
    id: "orange",
    shades: &[ORANGE_100, ORANGE_200, ORANGE_300, ORANGE_400],
};

/// Grey 300.
pub const GREY_300: ColorToken = ColorToken {
    name: "300",
    hex: "#e0e0e0",
};
/// Grey 400.
pub const GREY_400: ColorToken = ColorToken {
    name: "400",
    hex: "#bdbdbd",
};
/// Grey button colours.
pub const GREY: Palette = Palette {
    id: "grey",
    shades: &[GREY_300, GREY_400],
};

/// Overlay blended into dark backgrounds for raised surfaces.
const ELEVATION_OVERLAY: Rgb = Rgb {
    r: 255,
    g: 255,
    b: 255,
};
/// Number of paper elevation levels.
pub const ELEVATION_LEVELS: u8 = 24;
const ELEVATION_BASE: f64 = 0.05;
const ELEVATION_STEP: f64 = (16.0 - 5.0) / 23.0 / 100.0;
const HOVER_OPACITY: f64 = 0.04;

/// Light or dark theme preference.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    /// Light theme mode.
    Light,
    /// Dark theme mode.
    Dark,
}

impl ThemeMode {
    /// String identifier used in CSS datasets.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }
}

/// Named themes offered in the theme picker.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub enum ThemeName {
    /// Default light theme.
    #[default]
    Light,
    /// Dark grey theme.
    Dark,
    /// Dark blue-grey theme.
    Blue,
    /// Light theme with a coloured app bar.
    Colored,
    /// Light theme in PT brand colours.
    Pt,
    /// Light theme in DX brand colours.
    Dx,
}

impl ThemeName {
    /// All themes in picker order.
    #[must_use]
    pub const fn all() -> [Self; 6] {
        [
            Self::Light,
            Self::Dark,
            Self::Blue,
            Self::Colored,
            Self::Pt,
            Self::Dx,
        ]
    }

    /// Stored identifier of the theme.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
            Self::Blue => "blue",
            Self::Colored => "colored",
            Self::Pt => "PT",
            Self::Dx => "DX",
        }
    }

    /// Parse a stored identifier. Unknown identifiers select the light theme.
    #[must_use]
    pub fn parse(value: &str) -> Self {
        match value {
            "dark" => Self::Dark,
            "blue" => Self::Blue,
            "colored" => Self::Colored,
            "PT" => Self::Pt,
            "DX" => Self::Dx,
            _ => Self::Light,
        }
    }

    /// Light or dark base of the theme.
    #[must_use]
    pub const fn mode(self) -> ThemeMode {
        match self {
            Self::Dark | Self::Blue => ThemeMode::Dark,
            Self::Light | Self::Colored | Self::Pt | Self::Dx => ThemeMode::Light,
        }
    }
}

/// Surface colours.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct BackgroundColors {
    /// Paper (cards, dialogs).
    pub paper: &'static str,
    /// Page background.
    pub default: &'static str,
}

/// Text colours.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct TextColors {
    /// Primary text.
    pub primary: &'static str,
    /// Secondary text.
    pub secondary: &'static str,
    /// Disabled text.
    pub disabled: &'static str,
}

/// Grey shades used by neutral buttons.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct GreyShades {
    /// Resting colour.
    pub main: &'static str,
    /// Pressed/darker colour.
    pub dark: &'static str,
}

/// Resolved palette of a theme.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ThemePalette {
    /// Light or dark base.
    pub mode: ThemeMode,
    /// Surface colours.
    pub background: BackgroundColors,
    /// Primary brand colour.
    pub primary: &'static str,
    /// Secondary brand colour.
    pub secondary: &'static str,
    /// Highlight for expert-mode controls.
    pub expert: &'static str,
    /// Text colours.
    pub text: TextColors,
    /// Neutral button shades.
    pub grey: GreyShades,
}

/// Link appearance.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct LinkStyle {
    /// Resting colour.
    pub color: &'static str,
    /// Hover colour.
    pub hover_color: &'static str,
    /// CSS `text-transform`.
    pub text_transform: &'static str,
    /// CSS `transition`.
    pub transition: &'static str,
}

/// Save toolbar appearance.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SaveToolbar {
    /// Toolbar background (primary colour).
    pub background: &'static str,
    /// Button corner radius in pixels.
    pub button_radius: u8,
    /// Button height in pixels.
    pub button_height: u8,
}

/// Styles for the neutral grey button variants.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct GreyButtonStyles {
    /// Text colour of contained buttons.
    pub contained_color: &'static str,
    /// Text colour of outlined buttons.
    pub outlined_color: &'static str,
    /// Border colour of outlined buttons.
    pub outlined_border: &'static str,
    /// Border colour of disabled outlined buttons.
    pub disabled_border: &'static str,
    /// Hover background for outlined and text buttons.
    pub hover_background: String,
    /// Text colour of text buttons.
    pub text_color: &'static str,
}

/// Fully resolved theme.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Theme {
    /// Requested theme name, verbatim.
    pub name: String,
    /// Theme the name resolved to.
    pub kind: ThemeName,
    /// Palette.
    pub palette: ThemePalette,
    /// App bar background, when the theme overrides it.
    pub app_bar: Option<&'static str>,
    /// Link style.
    pub link: LinkStyle,
    /// Paper backgrounds for elevation 1..=24; empty for light themes.
    pub paper_elevations: Vec<String>,
    /// Main toolbar height in pixels.
    pub toolbar_height: u8,
    /// Save toolbar.
    pub save_toolbar: SaveToolbar,
    /// Grey button variants.
    pub grey_buttons: GreyButtonStyles,
}

struct ThemeSeed {
    mode: ThemeMode,
    background: Option<&'static str>,
    primary: &'static str,
    secondary: &'static str,
    expert: &'static str,
    text: Option<TextColors>,
    app_bar: Option<&'static str>,
}

const fn seed(kind: ThemeName) -> ThemeSeed {
    const WHITE_TEXT: TextColors = TextColors {
        primary: "#ffffff",
        secondary: "#ffffff",
        disabled: "rgba(255, 255, 255, 0.5)",
    };
    match kind {
        ThemeName::Dark => ThemeSeed {
            mode: ThemeMode::Dark,
            background: Some("#121212"),
            primary: "#4dabf5",
            secondary: "#436a93",
            expert: "#14bb00",
            text: Some(WHITE_TEXT),
            app_bar: Some("#272727"),
        },
        ThemeName::Blue => ThemeSeed {
            mode: ThemeMode::Dark,
            background: Some("#151d21"),
            primary: "#4dabf5",
            secondary: "#436a93",
            expert: "#14bb00",
            text: Some(WHITE_TEXT),
            app_bar: Some("#2a3135"),
        },
        ThemeName::Colored => ThemeSeed {
            mode: ThemeMode::Light,
            background: None,
            primary: "#3399CC",
            secondary: "#164477",
            expert: "#96fc96",
            text: None,
            app_bar: Some("#3399CC"),
        },
        ThemeName::Pt => ThemeSeed {
            mode: ThemeMode::Light,
            background: None,
            primary: "#0F99DE",
            secondary: "#88A536",
            expert: "#BD1B24",
            text: None,
            app_bar: Some("#0F99DE"),
        },
        ThemeName::Dx => ThemeSeed {
            mode: ThemeMode::Light,
            background: None,
            primary: "#F5F5F7",
            secondary: "#a9a9a9",
            expert: "#BD1B24",
            text: Some(TextColors {
                primary: "#007AFE",
                secondary: "#007AFE",
                disabled: "#007AFEAA",
            }),
            app_bar: Some("#a9a9a9"),
        },
        ThemeName::Light => ThemeSeed {
            mode: ThemeMode::Light,
            background: None,
            primary: "#3399CC",
            secondary: "#164477",
            expert: "#14bb00",
            text: None,
            app_bar: None,
        },
    }
}

const fn default_text(mode: ThemeMode) -> TextColors {
    match mode {
        ThemeMode::Light => TextColors {
            primary: "rgba(0, 0, 0, 0.87)",
            secondary: "rgba(0, 0, 0, 0.6)",
            disabled: "rgba(0, 0, 0, 0.38)",
        },
        ThemeMode::Dark => TextColors {
            primary: "#fff",
            secondary: "rgba(255, 255, 255, 0.7)",
            disabled: "rgba(255, 255, 255, 0.5)",
        },
    }
}

const fn default_background(mode: ThemeMode) -> &'static str {
    match mode {
        ThemeMode::Light => "#fff",
        ThemeMode::Dark => "#121212",
    }
}

impl Theme {
    /// Build the theme for a stored theme name.
    #[must_use]
    pub fn new(name: &str) -> Self {
        let mut theme = Self::for_name(ThemeName::parse(name));
        theme.name = name.to_string();
        theme
    }

    /// Build a named theme.
    #[must_use]
    pub fn for_name(kind: ThemeName) -> Self {
        let seed = seed(kind);
        let mode = seed.mode;
        let background = seed.background.unwrap_or(default_background(mode));
        let text = seed.text.unwrap_or(default_text(mode));
        let (link_color, link_hover) = match mode {
            ThemeMode::Dark => (ORANGE_200.hex, ORANGE_100.hex),
            ThemeMode::Light => (ORANGE_400.hex, ORANGE_300.hex),
        };
        let paper_elevations = match (mode, seed.background) {
            (ThemeMode::Dark, Some(base)) => paper_elevations(base),
            _ => Vec::new(),
        };
        let grey_buttons = grey_buttons(mode, &text);

        Self {
            name: kind.as_str().to_string(),
            kind,
            palette: ThemePalette {
                mode,
                background: BackgroundColors {
                    paper: background,
                    default: background,
                },
                primary: seed.primary,
                secondary: seed.secondary,
                expert: seed.expert,
                text,
                grey: GreyShades {
                    main: GREY_300.hex,
                    dark: GREY_400.hex,
                },
            },
            app_bar: seed.app_bar,
            link: LinkStyle {
                color: link_color,
                hover_color: link_hover,
                text_transform: "uppercase",
                transition: "color .3s ease",
            },
            paper_elevations,
            toolbar_height: 48,
            save_toolbar: SaveToolbar {
                background: seed.primary,
                button_radius: 3,
                button_height: 32,
            },
            grey_buttons,
        }
    }

    /// Flatten the theme into CSS custom properties, in a stable order.
    #[must_use]
    pub fn css_variables(&self) -> Vec<(String, String)> {
        let palette = &self.palette;
        let mut vars: Vec<(String, String)> = [
            ("mode", palette.mode.as_str()),
            ("background-paper", palette.background.paper),
            ("background-default", palette.background.default),
            ("primary", palette.primary),
            ("secondary", palette.secondary),
            ("expert", palette.expert),
            ("text-primary", palette.text.primary),
            ("text-secondary", palette.text.secondary),
            ("text-disabled", palette.text.disabled),
            ("grey-main", palette.grey.main),
            ("grey-dark", palette.grey.dark),
            ("link", self.link.color),
            ("link-hover", self.link.hover_color),
            ("save-toolbar-bg", self.save_toolbar.background),
            ("grey-contained-color", self.grey_buttons.contained_color),
            ("grey-outlined-color", self.grey_buttons.outlined_color),
            ("grey-outlined-border", self.grey_buttons.outlined_border),
            ("grey-disabled-border", self.grey_buttons.disabled_border),
            ("grey-text-color", self.grey_buttons.text_color),
        ]
        .into_iter()
        .map(|(name, value)| (format!("--hd-{name}"), value.to_string()))
        .collect();

        vars.push((
            "--hd-grey-hover-bg".to_string(),
            self.grey_buttons.hover_background.clone(),
        ));
        if let Some(app_bar) = self.app_bar {
            vars.push(("--hd-app-bar".to_string(), app_bar.to_string()));
        }
        vars.push((
            "--hd-toolbar-height".to_string(),
            format!("{}px", self.toolbar_height),
        ));
        vars.push((
            "--hd-save-button-radius".to_string(),
            format!("{}px", self.save_toolbar.button_radius),
        ));
        vars.push((
            "--hd-save-button-height".to_string(),
            format!("{}px", self.save_toolbar.button_height),
        ));
        for (index, color) in self.paper_elevations.iter().enumerate() {
            vars.push((format!("--hd-elevation-{}", index + 1), color.clone()));
        }
        vars
    }

    /// CSS declarations for an inline `style` attribute.
    #[must_use]
    pub fn css_text(&self) -> String {
        self.css_variables()
            .into_iter()
            .map(|(name, value)| format!("{name}: {value};"))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Background of a dark surface at `elevation` (1-based).
#[must_use]
pub fn elevation_color(base: Rgb, overlay: Rgb, elevation: u8) -> String {
    let factor = ELEVATION_STEP.mul_add(f64::from(elevation.saturating_sub(1)), ELEVATION_BASE);
    let blend =
        |channel: u8, overlay: u8| to_channel(f64::from(overlay).mul_add(factor, f64::from(channel)));
    Rgb {
        r: blend(base.r, overlay.r),
        g: blend(base.g, overlay.g),
        b: blend(base.b, overlay.b),
    }
    .to_hex()
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn to_channel(value: f64) -> u8 {
    // Clamped first; the cast cannot wrap.
    value.round().clamp(0.0, 255.0) as u8
}

fn paper_elevations(background: &str) -> Vec<String> {
    let Ok(base) = Rgb::parse(background) else {
        tracing::warn!(background, "theme background is not a colour; skipping elevations");
        return Vec::new();
    };
    (1..=ELEVATION_LEVELS)
        .map(|level| elevation_color(base, ELEVATION_OVERLAY, level))
        .collect()
}

fn grey_buttons(mode: ThemeMode, text: &TextColors) -> GreyButtonStyles {
    let contained_color = match Rgb::parse(GREY_300.hex).map(Rgb::contrast_tone) {
        Ok(Tone::White) => "#fff",
        Ok(Tone::Black) | Err(_) => "rgba(0, 0, 0, 0.87)",
    };
    let (outlined_border, disabled_border) = match mode {
        ThemeMode::Light => ("rgba(0, 0, 0, 0.23)", "rgba(0, 0, 0, 0.12)"),
        ThemeMode::Dark => ("rgba(255, 255, 255, 0.23)", "rgba(255, 255, 255, 0.12)"),
    };
    let hover_background = Rgb::parse(text.primary).map_or_else(
        |err| {
            tracing::warn!(%err, "text colour not parseable; hover background left transparent");
            "transparent".to_string()
        },
        |rgb| rgb.with_alpha(HOVER_OPACITY),
    );
    GreyButtonStyles {
        contained_color,
        outlined_color: text.primary,
        outlined_border,
        disabled_border,
        hover_background,
        text_color: text.primary,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn theme_mode_to_str() {
        assert_eq!(ThemeMode::Light.as_str(), "light");
        assert_eq!(ThemeMode::Dark.as_str(), "dark");
    }

    #[test]
    fn theme_names_round_trip_and_default_to_light() {
        for name in ThemeName::all() {
            assert_eq!(ThemeName::parse(name.as_str()), name);
        }
        assert_eq!(ThemeName::parse("pt"), ThemeName::Light);
        assert_eq!(ThemeName::parse(""), ThemeName::Light);
    }

    #[test]
    fn unknown_name_builds_light_theme_but_keeps_name() {
        let theme = Theme::new("solarized");
        assert_eq!(theme.name, "solarized");
        assert_eq!(theme.kind, ThemeName::Light);
        assert_eq!(theme.palette.primary, "#3399CC");
        assert_eq!(theme.palette.expert, "#14bb00");
        assert_eq!(theme.app_bar, None);
        assert!(theme.paper_elevations.is_empty());
    }

    #[test]
    fn dark_themes_use_dark_palette() {
        let dark = Theme::for_name(ThemeName::Dark);
        assert_eq!(dark.palette.mode, ThemeMode::Dark);
        assert_eq!(dark.palette.background.paper, "#121212");
        assert_eq!(dark.palette.text.primary, "#ffffff");
        assert_eq!(dark.app_bar, Some("#272727"));
        assert_eq!(dark.link.color, ORANGE_200.hex);
        assert_eq!(dark.link.hover_color, ORANGE_100.hex);

        let blue = Theme::for_name(ThemeName::Blue);
        assert_eq!(blue.palette.background.default, "#151d21");
        assert_eq!(blue.app_bar, Some("#2a3135"));
    }

    #[test]
    fn light_variants_carry_brand_colours() {
        let pt = Theme::for_name(ThemeName::Pt);
        assert_eq!(pt.palette.primary, "#0F99DE");
        assert_eq!(pt.palette.secondary, "#88A536");
        assert_eq!(pt.app_bar, Some("#0F99DE"));
        assert_eq!(pt.link.color, ORANGE_400.hex);

        let dx = Theme::for_name(ThemeName::Dx);
        assert_eq!(dx.palette.text.disabled, "#007AFEAA");
        assert_eq!(dx.grey_buttons.hover_background, "rgba(0, 122, 254, 0.04)");

        let colored = Theme::for_name(ThemeName::Colored);
        assert_eq!(colored.palette.expert, "#96fc96");
        assert_eq!(colored.save_toolbar.background, "#3399CC");
    }

    #[test]
    fn every_theme_shares_toolbar_and_grey() {
        for name in ThemeName::all() {
            let theme = Theme::for_name(name);
            assert_eq!(theme.toolbar_height, 48);
            assert_eq!(theme.save_toolbar.button_radius, 3);
            assert_eq!(theme.save_toolbar.button_height, 32);
            assert_eq!(theme.save_toolbar.background, theme.palette.primary);
            assert_eq!(theme.palette.grey.main, GREY.shade("300").unwrap_or_default());
            assert_eq!(theme.grey_buttons.contained_color, "rgba(0, 0, 0, 0.87)");
            assert_eq!(theme.link.text_transform, "uppercase");
        }
    }

    #[test]
    fn dark_elevations_brighten_monotonically() {
        let theme = Theme::for_name(ThemeName::Dark);
        assert_eq!(theme.paper_elevations.len(), usize::from(ELEVATION_LEVELS));
        // 0x12 + 255 * 0.05 = 30.75 -> 31 (0x1f)
        assert_eq!(theme.paper_elevations[0], "#1f1f1f");
        let levels: Vec<Rgb> = theme
            .paper_elevations
            .iter()
            .filter_map(|hex| Rgb::parse(hex).ok())
            .collect();
        assert_eq!(levels.len(), theme.paper_elevations.len());
        assert!(levels.windows(2).all(|pair| pair[0].r <= pair[1].r));
        // 0x12 + 255 * 0.16 = 58.8 -> 59 (0x3b)
        assert_eq!(theme.paper_elevations[23], "#3b3b3b");
    }

    #[test]
    fn elevation_channels_clamp() {
        let white = Rgb {
            r: 250,
            g: 250,
            b: 250,
        };
        assert_eq!(elevation_color(white, ELEVATION_OVERLAY, 24), "#ffffff");
    }

    #[test]
    fn css_variables_cover_palette_and_elevations() {
        let theme = Theme::for_name(ThemeName::Blue);
        let vars = theme.css_variables();
        let lookup = |name: &str| {
            vars.iter()
                .find(|(key, _)| key == name)
                .map(|(_, value)| value.as_str())
        };
        assert_eq!(lookup("--hd-mode"), Some("dark"));
        assert_eq!(lookup("--hd-primary"), Some("#4dabf5"));
        assert_eq!(lookup("--hd-app-bar"), Some("#2a3135"));
        assert_eq!(lookup("--hd-toolbar-height"), Some("48px"));
        assert_eq!(lookup("--hd-grey-hover-bg"), Some("rgba(255, 255, 255, 0.04)"));
        assert!(lookup("--hd-elevation-24").is_some());
        assert!(theme.css_text().starts_with("--hd-mode: dark;"));

        let light = Theme::for_name(ThemeName::Light);
        assert_eq!(
            light
                .css_variables()
                .iter()
                .find(|(key, _)| key == "--hd-app-bar"),
            None
        );
    }

    #[test]
    fn theme_serializes_for_export() {
        let value = serde_json::to_value(Theme::for_name(ThemeName::Dark)).expect("serialize");
        assert_eq!(value["palette"]["mode"], "dark");
        assert_eq!(value["kind"], "Dark");
        assert_eq!(value["paper_elevations"].as_array().map(Vec::len), Some(24));
    }
}
