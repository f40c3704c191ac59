//! Inline SVG data URL decoding.

use base64::{Engine as _, engine::general_purpose};
use thiserror::Error;

/// Reasons an inline SVG icon cannot be turned into markup.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SvgDecodeError {
    /// The value is not a `data:image/svg...` URL.
    #[error("not an svg data url")]
    NotSvg,
    /// The URL has no `,` separating header and payload.
    #[error("svg data url has no payload")]
    MissingPayload,
    /// The base64 payload could not be decoded.
    #[error("invalid base64 payload: {0}")]
    Base64(#[from] base64::DecodeError),
    /// The payload is not valid UTF-8.
    #[error("svg payload is not utf-8")]
    Utf8,
}

/// Decode a `data:image/svg+xml` URL into SVG markup.
///
/// Both `;base64,` payloads and percent-encoded (or raw) payloads are accepted.
///
/// # Errors
/// Returns [`SvgDecodeError`] when the value is not an SVG data URL or its payload
/// cannot be decoded.
pub fn decode_svg_data_url(url: &str) -> Result<String, SvgDecodeError> {
    if !url.starts_with("data:image/svg") {
        return Err(SvgDecodeError::NotSvg);
    }
    let (header, payload) = url.split_once(',').ok_or(SvgDecodeError::MissingPayload)?;
    if header.split(';').any(|param| param == "base64") {
        let bytes = general_purpose::STANDARD.decode(payload.trim())?;
        return String::from_utf8(bytes).map_err(|_| SvgDecodeError::Utf8);
    }
    urlencoding::decode(payload)
        .map(std::borrow::Cow::into_owned)
        .map_err(|_| SvgDecodeError::Utf8)
}

#[cfg(test)]
mod tests {
    use super::*;

    const MARKUP: &str = "<svg xmlns=\"http://www.w3.org/2000/svg\"/>";

    #[test]
    fn decodes_base64_payload() {
        let encoded = general_purpose::STANDARD.encode(MARKUP);
        let url = format!("data:image/svg+xml;base64,{encoded}");
        assert_eq!(decode_svg_data_url(&url).as_deref(), Ok(MARKUP));
    }

    #[test]
    fn decodes_percent_encoded_payload() {
        let url = format!("data:image/svg+xml;utf8,{}", urlencoding::encode(MARKUP));
        assert_eq!(decode_svg_data_url(&url).as_deref(), Ok(MARKUP));
    }

    #[test]
    fn rejects_other_values() {
        assert_eq!(
            decode_svg_data_url("data:image/png;base64,AAA"),
            Err(SvgDecodeError::NotSvg)
        );
        assert_eq!(
            decode_svg_data_url("data:image/svg+xml;base64"),
            Err(SvgDecodeError::MissingPayload)
        );
        assert!(matches!(
            decode_svg_data_url("data:image/svg+xml;base64,***"),
            Err(SvgDecodeError::Base64(_))
        ));
    }
}
