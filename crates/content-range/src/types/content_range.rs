//! The `Content-Range` header field value.
//!
//! A Content-Range pairs a range unit with either a satisfied range
//! (`bytes 0-99/1000`, `bytes 0-99/*`) or an unsatisfied one
//! (`bytes */1000`).
//!
//! # Examples
//!
//! ```
//! use content_range::ContentRange;
//!
//! let range = ContentRange::bytes(0, 99, Some(1000));
//! assert_eq!(range.to_header_value().unwrap(), "bytes 0-99/1000");
//!
//! let parsed: ContentRange = "bytes */1000".parse().unwrap();
//! assert!(parsed.is_unsatisfied_range());
//! assert_eq!(parsed.complete_length(), Some(1000));
//! assert_eq!(parsed.first_pos(), None);
//! ```

use crate::error::{ContentRangeError, Result};
use crate::protocol::constants::units;
use crate::types::{InclRange, Range, RangeResp, UnsatisfiedRange};
use std::str::FromStr;

/// `Content-Range` field value.
///
/// See [RFC 9110 §14.4](https://www.rfc-editor.org/rfc/rfc9110.html#section-14.4).
/// Values are not validated on construction; the serializer checks them.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase")
)]
pub struct ContentRange {
    /// The range unit token (e.g. `"bytes"`).
    pub range_unit: String,

    #[cfg_attr(feature = "serde", serde(flatten))]
    pub range: Range,
}

impl ContentRange {
    #[inline]
    #[must_use]
    pub fn new(range_unit: impl Into<String>, range: impl Into<Range>) -> Self {
        ContentRange {
            range_unit: range_unit.into(),
            range: range.into(),
        }
    }

    /// A satisfied range; `complete_length` of `None` is written as `*`.
    #[inline]
    #[must_use]
    pub fn range_resp(
        range_unit: impl Into<String>,
        first_pos: u64,
        last_pos: u64,
        complete_length: Option<u64>,
    ) -> Self {
        Self::new(
            range_unit,
            RangeResp::new(first_pos, last_pos, complete_length),
        )
    }

    #[inline]
    #[must_use]
    pub fn unsatisfied(range_unit: impl Into<String>, complete_length: u64) -> Self {
        Self::new(range_unit, UnsatisfiedRange::new(complete_length))
    }

    /// Create a bytes range response.
    ///
    /// ```
    /// use content_range::ContentRange;
    ///
    /// let range = ContentRange::bytes(42, 1233, Some(1234));
    /// assert_eq!(range.range_unit, "bytes");
    /// assert_eq!(range.last_pos(), Some(1233));
    /// ```
    #[inline]
    #[must_use]
    pub fn bytes(first_pos: u64, last_pos: u64, complete_length: Option<u64>) -> Self {
        Self::range_resp(units::BYTES, first_pos, last_pos, complete_length)
    }

    /// Create a bytes unsatisfied range, as sent with 416 responses.
    #[inline]
    #[must_use]
    pub fn unsatisfied_bytes(complete_length: u64) -> Self {
        Self::unsatisfied(units::BYTES, complete_length)
    }

    #[inline]
    #[must_use]
    pub fn is_bytes(&self) -> bool {
        self.range_unit == units::BYTES
    }

    #[inline]
    #[must_use]
    pub fn is_range_resp(&self) -> bool {
        self.range.is_resp()
    }

    #[inline]
    #[must_use]
    pub fn is_unsatisfied_range(&self) -> bool {
        self.range.is_unsatisfied()
    }

    #[must_use]
    pub fn first_pos(&self) -> Option<u64> {
        self.incl_range().map(|r| r.first_pos)
    }

    #[must_use]
    pub fn last_pos(&self) -> Option<u64> {
        self.incl_range().map(|r| r.last_pos)
    }

    /// The complete length, or `None` for `*`.
    #[must_use]
    pub fn complete_length(&self) -> Option<u64> {
        self.range.complete_length()
    }

    #[must_use]
    pub fn incl_range(&self) -> Option<InclRange> {
        self.range.incl_range()
    }

    /// Format as a Content-Range header value.
    ///
    /// # Errors
    ///
    /// See [`stringify_content_range`](crate::stringify_content_range).
    pub fn to_header_value(&self) -> Result<String> {
        crate::protocol::formatter::stringify_content_range(self)
    }

    /// Parse from a Content-Range header value.
    ///
    /// # Errors
    ///
    /// See [`parse_content_range`](crate::parse_content_range).
    pub fn from_header_value(value: &str) -> Result<Self> {
        crate::protocol::parser::parse_content_range(value)
    }
}

impl FromStr for ContentRange {
    type Err = ContentRangeError;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_header_value(s)
    }
}

impl TryFrom<&str> for ContentRange {
    type Error = ContentRangeError;

    fn try_from(value: &str) -> Result<Self> {
        Self::from_header_value(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_content_range_bytes() {
        let range = ContentRange::bytes(0, 100, Some(1000));
        assert!(range.is_bytes());
        assert!(range.is_range_resp());
        assert!(!range.is_unsatisfied_range());
        assert_eq!(range.first_pos(), Some(0));
        assert_eq!(range.last_pos(), Some(100));
        assert_eq!(range.complete_length(), Some(1000));
    }

    #[test]
    fn test_content_range_unsatisfied() {
        let range = ContentRange::unsatisfied("items", 5);
        assert!(!range.is_bytes());
        assert!(range.is_unsatisfied_range());
        assert_eq!(range.first_pos(), None);
        assert_eq!(range.last_pos(), None);
        assert_eq!(range.incl_range(), None);
        assert_eq!(range.complete_length(), Some(5));
    }

    #[test]
    fn test_content_range_header_value() {
        let range = ContentRange::bytes(0, 100, None);
        assert_eq!(range.to_header_value().unwrap(), "bytes 0-100/*");
        assert_eq!(ContentRange::from_header_value("bytes 0-100/*").unwrap(), range);
    }

    #[test]
    fn test_content_range_from_str() {
        let range: ContentRange = "bytes */10".parse().unwrap();
        assert_eq!(range, ContentRange::unsatisfied_bytes(10));

        let range = ContentRange::try_from("bytes 1-2/3").unwrap();
        assert_eq!(range, ContentRange::bytes(1, 2, Some(3)));

        assert!("bytes".parse::<ContentRange>().is_err());
    }

    #[test]
    fn test_content_range_hash() {
        use std::collections::HashSet;
        let mut set = HashSet::new();
        set.insert(ContentRange::bytes(0, 1, None));
        set.insert(ContentRange::bytes(0, 1, Some(2)));
        set.insert(ContentRange::unsatisfied_bytes(2));
        set.insert(ContentRange::bytes(0, 1, None));
        assert_eq!(set.len(), 3);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_content_range_structural_json() {
        let table = [
            (
                ContentRange::bytes(42, 1233, Some(1234)),
                r#"{"rangeUnit":"bytes","firstPos":42,"lastPos":1233,"completeLength":1234}"#,
            ),
            (
                ContentRange::bytes(42, 1233, None),
                r#"{"rangeUnit":"bytes","firstPos":42,"lastPos":1233,"completeLength":null}"#,
            ),
            (
                ContentRange::unsatisfied_bytes(1234),
                r#"{"rangeUnit":"bytes","completeLength":1234}"#,
            ),
        ];

        for (value, json) in table {
            assert_eq!(serde_json::to_string(&value).unwrap(), json);
            assert_eq!(serde_json::from_str::<ContentRange>(json).unwrap(), value);
        }
    }
}
