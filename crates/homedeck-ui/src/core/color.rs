//! Colour parsing and contrast helpers for object colours.
//!
//! # Design
//! - Accept the formats object colours arrive in: `#rgb`, `#rrggbb` (hash optional),
//!   and `rgb()`/`rgba()`.
//! - Report malformed input as [`ColorError`]; callers decide the fallback.

use crate::core::theme::ThemeMode;
use thiserror::Error;

/// Luminance above which black text reads better than white.
const CONTRAST_THRESHOLD: f64 = 186.0;

/// Text colour for light tones in dark surroundings.
pub const SOFT_WHITE: &str = "#DDD";
/// Text colour for dark tones in light surroundings.
pub const SOFT_BLACK: &str = "#222";

/// Colour parsing failures.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ColorError {
    /// No colour given.
    #[error("empty colour")]
    Empty,
    /// Hex colour with a length other than 3 or 6 digits.
    #[error("cannot parse colour `{0}`: expected #rgb or #rrggbb")]
    InvalidHex(String),
    /// `rgb()`/`rgba()` notation with missing or out-of-range channels.
    #[error("cannot parse colour `{0}`: invalid rgb channels")]
    InvalidChannels(String),
}

/// An opaque RGB triple.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rgb {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
}

/// Black or white, whichever contrasts with a colour.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tone {
    /// `#000000`.
    Black,
    /// `#FFFFFF`.
    White,
}

impl Tone {
    /// Hex value of the tone.
    #[must_use]
    pub const fn hex(self) -> &'static str {
        match self {
            Self::Black => "#000000",
            Self::White => "#FFFFFF",
        }
    }
}

impl Rgb {
    /// Parse a CSS colour in hex or `rgb()`/`rgba()` notation. Alpha is dropped.
    ///
    /// # Errors
    /// Returns [`ColorError`] when the value is empty or not in a supported format.
    pub fn parse(value: &str) -> Result<Self, ColorError> {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ColorError::Empty);
        }
        if trimmed.starts_with("rgb") {
            return Self::parse_functional(trimmed);
        }
        let digits = trimmed.strip_prefix('#').unwrap_or(trimmed);
        let expanded: String = match digits.len() {
            3 => digits.chars().flat_map(|c| [c, c]).collect(),
            6 => digits.to_string(),
            _ => return Err(ColorError::InvalidHex(value.to_string())),
        };
        let channel = |index: usize| {
            expanded
                .get(index..index + 2)
                .and_then(|pair| u8::from_str_radix(pair, 16).ok())
                .ok_or_else(|| ColorError::InvalidHex(value.to_string()))
        };
        Ok(Self {
            r: channel(0)?,
            g: channel(2)?,
            b: channel(4)?,
        })
    }

    fn parse_functional(value: &str) -> Result<Self, ColorError> {
        let invalid = || ColorError::InvalidChannels(value.to_string());
        let inner = value
            .split_once('(')
            .and_then(|(_, rest)| rest.strip_suffix(')'))
            .ok_or_else(invalid)?;
        let mut channels = inner
            .split(',')
            .map(|part| part.trim().parse::<u8>().map_err(|_| invalid()));
        let mut next = || channels.next().unwrap_or_else(|| Err(invalid()));
        Ok(Self {
            r: next()?,
            g: next()?,
            b: next()?,
        })
    }

    /// Lowercase `#rrggbb` representation.
    #[must_use]
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// Channel-wise inversion.
    #[must_use]
    pub const fn inverted(self) -> Self {
        Self {
            r: 255 - self.r,
            g: 255 - self.g,
            b: 255 - self.b,
        }
    }

    /// Black for bright colours, white for dark ones.
    #[must_use]
    pub fn contrast_tone(self) -> Tone {
        let luminance = f64::from(self.b).mul_add(
            0.114,
            f64::from(self.r).mul_add(0.299, f64::from(self.g) * 0.587),
        );
        if luminance > CONTRAST_THRESHOLD {
            Tone::Black
        } else {
            Tone::White
        }
    }

    /// `rgba()` string with the given alpha.
    #[must_use]
    pub fn with_alpha(self, alpha: f64) -> String {
        format!("rgba({}, {}, {}, {alpha})", self.r, self.g, self.b)
    }
}

/// Invert a colour, returning `#rrggbb`.
///
/// # Errors
/// Returns [`ColorError`] when the colour cannot be parsed.
pub fn invert_color(color: &str) -> Result<String, ColorError> {
    Rgb::parse(color).map(|rgb| rgb.inverted().to_hex())
}

/// Black or white, whichever is readable on `color`.
///
/// # Errors
/// Returns [`ColorError`] when the colour cannot be parsed.
pub fn contrast_tone(color: &str) -> Result<Tone, ColorError> {
    Rgb::parse(color).map(Rgb::contrast_tone)
}

/// Softened text colour for content drawn on `color`.
///
/// A white contrast tone yields [`SOFT_WHITE`] in dark mode and a black tone yields
/// [`SOFT_BLACK`] in light mode. With `invert` set the opposite mode qualifies too.
/// Returns `None` when no override is needed.
///
/// # Errors
/// Returns [`ColorError`] when the colour cannot be parsed.
pub fn inverted_text_color(
    color: &str,
    mode: ThemeMode,
    invert: bool,
) -> Result<Option<&'static str>, ColorError> {
    let tone = contrast_tone(color)?;
    let text = match (tone, mode) {
        (Tone::White, ThemeMode::Dark) | (Tone::Black, ThemeMode::Light) => true,
        (Tone::White, ThemeMode::Light) | (Tone::Black, ThemeMode::Dark) => invert,
    };
    Ok(text.then_some(match tone {
        Tone::White => SOFT_WHITE,
        Tone::Black => SOFT_BLACK,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_supported_notations() {
        let orange = Rgb {
            r: 0xff,
            g: 0x88,
            b: 0x00,
        };
        assert_eq!(Rgb::parse("#ff8800"), Ok(orange));
        assert_eq!(Rgb::parse("ff8800"), Ok(orange));
        assert_eq!(Rgb::parse("#f80"), Ok(orange));
        assert_eq!(Rgb::parse("rgb(255, 136, 0)"), Ok(orange));
        assert_eq!(Rgb::parse("rgba(255,136,0,0.5)"), Ok(orange));
    }

    #[test]
    fn rejects_malformed_colours() {
        assert_eq!(Rgb::parse(""), Err(ColorError::Empty));
        assert!(matches!(Rgb::parse("#ff88"), Err(ColorError::InvalidHex(_))));
        assert!(matches!(Rgb::parse("#gggggg"), Err(ColorError::InvalidHex(_))));
        assert!(matches!(Rgb::parse("red"), Err(ColorError::InvalidHex(_))));
        assert!(matches!(
            Rgb::parse("rgb(300, 0, 0)"),
            Err(ColorError::InvalidChannels(_))
        ));
        assert!(matches!(
            Rgb::parse("rgb(1, 2)"),
            Err(ColorError::InvalidChannels(_))
        ));
    }

    #[test]
    fn inversion_is_channel_wise_and_padded() {
        assert_eq!(invert_color("#ff8800").as_deref(), Ok("#0077ff"));
        assert_eq!(invert_color("#fff").as_deref(), Ok("#000000"));
        assert_eq!(invert_color("#0f0f0f").as_deref(), Ok("#f0f0f0"));
    }

    #[test]
    fn contrast_tone_uses_luminance_threshold() {
        assert_eq!(contrast_tone("#ffffff"), Ok(Tone::Black));
        assert_eq!(contrast_tone("#ffff00"), Ok(Tone::Black));
        assert_eq!(contrast_tone("#000080"), Ok(Tone::White));
        assert_eq!(contrast_tone("#a0a0a0"), Ok(Tone::White));
        assert_eq!(contrast_tone("#bbbbbb"), Ok(Tone::Black));
    }

    #[test]
    fn inverted_text_depends_on_mode() {
        // Dark colour: white tone.
        assert_eq!(
            inverted_text_color("#112233", ThemeMode::Dark, false),
            Ok(Some(SOFT_WHITE))
        );
        assert_eq!(
            inverted_text_color("#112233", ThemeMode::Light, false),
            Ok(None)
        );
        assert_eq!(
            inverted_text_color("#112233", ThemeMode::Light, true),
            Ok(Some(SOFT_WHITE))
        );
        // Light colour: black tone.
        assert_eq!(
            inverted_text_color("#eeeeee", ThemeMode::Light, false),
            Ok(Some(SOFT_BLACK))
        );
        assert_eq!(
            inverted_text_color("#eeeeee", ThemeMode::Dark, true),
            Ok(Some(SOFT_BLACK))
        );
        assert!(inverted_text_color("nope", ThemeMode::Dark, true).is_err());
    }

    #[test]
    fn alpha_formatting() {
        let white = Rgb {
            r: 255,
            g: 255,
            b: 255,
        };
        assert_eq!(white.with_alpha(0.04), "rgba(255, 255, 255, 0.04)");
    }
}
