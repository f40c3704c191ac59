//! Layout rules of the icon display primitive, kept DOM-free for testing.

use homedeck_objects::IconSpec;

/// Edge length used when no size is requested.
pub const DEFAULT_ICON_SIZE: u32 = 28;

/// Base style applied to glyph icons.
const GLYPH_STYLE: &str = "height: 27px; margin-top: -8px;";

/// How an icon value is drawn.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum IconRender {
    /// Text glyph.
    Glyph(String),
    /// Inline SVG markup source with its box.
    InlineSvg {
        /// The data URL.
        src: String,
        /// Width in pixels.
        width: u32,
        /// Height in pixels.
        height: u32,
    },
    /// `<img>` element.
    Image(String),
}

/// Choose how to draw a raw icon string. Empty strings draw nothing.
#[must_use]
pub fn plan_icon(raw: &str, width: Option<u32>, height: Option<u32>) -> Option<IconRender> {
    let render = match IconSpec::classify(raw)? {
        IconSpec::Glyph(glyph) => IconRender::Glyph(glyph),
        IconSpec::InlineSvg(src) => {
            let (width, height) = icon_dimensions(width, height);
            IconRender::InlineSvg { src, width, height }
        }
        IconSpec::InlineImage(src) | IconSpec::Url(src) => IconRender::Image(src),
    };
    Some(render)
}

/// Width and height of an inline SVG; height follows width when unset.
#[must_use]
pub fn icon_dimensions(width: Option<u32>, height: Option<u32>) -> (u32, u32) {
    let width = width.unwrap_or(DEFAULT_ICON_SIZE);
    (width, height.unwrap_or(width))
}

/// Style of a glyph icon; the glyph-specific style wins over the generic one.
#[must_use]
pub fn glyph_style(style_utf8: Option<&str>, style: Option<&str>) -> String {
    match style_utf8.or(style).map(str::trim).filter(|extra| !extra.is_empty()) {
        Some(extra) => format!("{GLYPH_STYLE} {extra}"),
        None => GLYPH_STYLE.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plans_follow_classification() {
        assert_eq!(plan_icon("", None, None), None);
        assert_eq!(
            plan_icon("★", None, None),
            Some(IconRender::Glyph("★".to_string()))
        );
        assert_eq!(
            plan_icon("data:image/svg+xml;base64,PHN2Zy8+", Some(16), None),
            Some(IconRender::InlineSvg {
                src: "data:image/svg+xml;base64,PHN2Zy8+".to_string(),
                width: 16,
                height: 16,
            })
        );
        assert_eq!(
            plan_icon("data:image/png;base64,AAA", None, None),
            Some(IconRender::Image("data:image/png;base64,AAA".to_string()))
        );
        assert_eq!(
            plan_icon("./adapter/hue/hue.png", None, None),
            Some(IconRender::Image("./adapter/hue/hue.png".to_string()))
        );
    }

    #[test]
    fn svg_box_defaults() {
        assert_eq!(icon_dimensions(None, None), (28, 28));
        assert_eq!(icon_dimensions(Some(20), None), (20, 20));
        assert_eq!(icon_dimensions(None, Some(12)), (28, 12));
    }

    #[test]
    fn glyph_style_prefers_glyph_override() {
        assert_eq!(glyph_style(None, None), GLYPH_STYLE);
        assert_eq!(
            glyph_style(Some("font-size: 20px;"), Some("width: 16px;")),
            "height: 27px; margin-top: -8px; font-size: 20px;"
        );
        assert_eq!(
            glyph_style(None, Some("width: 16px;")),
            "height: 27px; margin-top: -8px; width: 16px;"
        );
    }
}
