//! Conversions between [`ContentRange`] and `http` header values.
//!
//! Only a single field value is handled; combining repeated header lines is
//! left to the caller.

use crate::error::{ContentRangeError, Result};
use crate::types::ContentRange;
use http::HeaderValue;

pub use http::header::CONTENT_RANGE;

/// Parse a `Content-Range` header value.
///
/// ```
/// use content_range::protocol::parse_content_range_header;
/// use content_range::ContentRange;
/// use http::HeaderValue;
///
/// let value = HeaderValue::from_static("bytes 0-9/10");
/// assert_eq!(
///     parse_content_range_header(&value).unwrap(),
///     ContentRange::bytes(0, 9, Some(10))
/// );
/// ```
///
/// # Errors
///
/// [`ContentRangeError::InvalidHeaderValue`] if the bytes are not visible
/// ASCII, otherwise as [`parse_content_range`](crate::parse_content_range).
pub fn parse_content_range_header(value: &HeaderValue) -> Result<ContentRange> {
    let value = value.to_str().map_err(|e| {
        tracing::debug!("[ContentRange] Non-ASCII header value: {}", e);
        ContentRangeError::InvalidHeaderValue(e.to_string())
    })?;
    crate::protocol::parser::parse_content_range(value)
}

/// Format a [`ContentRange`] as a header value.
///
/// # Errors
///
/// As [`stringify_content_range`](crate::stringify_content_range).
pub fn format_content_range_header(content_range: &ContentRange) -> Result<HeaderValue> {
    let value = crate::protocol::formatter::stringify_content_range(content_range)?;
    HeaderValue::from_str(&value)
        .map_err(|e| ContentRangeError::InvalidHeaderValue(e.to_string()))
}

impl TryFrom<&HeaderValue> for ContentRange {
    type Error = ContentRangeError;

    fn try_from(value: &HeaderValue) -> Result<Self> {
        parse_content_range_header(value)
    }
}

impl TryFrom<&ContentRange> for HeaderValue {
    type Error = ContentRangeError;

    fn try_from(content_range: &ContentRange) -> Result<Self> {
        format_content_range_header(content_range)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header_name() {
        assert_eq!(CONTENT_RANGE.as_str(), "content-range");
    }

    #[test]
    fn test_parse_content_range_header() {
        let value = HeaderValue::from_static("bytes */1234");
        assert_eq!(
            ContentRange::try_from(&value).unwrap(),
            ContentRange::unsatisfied_bytes(1234)
        );
    }

    #[test]
    fn test_parse_content_range_header_opaque_bytes() {
        let value = HeaderValue::from_bytes(b"bytes 0-1/\xff").unwrap();
        let err = parse_content_range_header(&value).unwrap_err();
        assert!(matches!(err, ContentRangeError::InvalidHeaderValue(_)));
        assert!(err.is_syntax());
    }

    #[test]
    fn test_format_content_range_header() {
        let value = HeaderValue::try_from(&ContentRange::bytes(0, 99, None)).unwrap();
        assert_eq!(value, "bytes 0-99/*");

        let err = HeaderValue::try_from(&ContentRange::bytes(5, 1, None)).unwrap_err();
        assert!(err.is_semantic());
    }
}
