//! Parsing and serialization of the HTTP `Content-Range` header field.
//!
//! Implements the grammar of [RFC 9110 §14.4]:
//!
//! ```text
//! Content-Range       = range-unit SP ( range-resp / unsatisfied-range )
//! range-resp          = incl-range "/" ( complete-length / "*" )
//! incl-range          = first-pos "-" last-pos
//! unsatisfied-range   = "*/" complete-length
//! complete-length     = 1*DIGIT
//! ```
//!
//! # Examples
//!
//! ```
//! use content_range::{parse_content_range, stringify_content_range, ContentRange};
//!
//! let value = parse_content_range("bytes 0-100/1000").unwrap();
//! assert_eq!(value, ContentRange::bytes(0, 100, Some(1000)));
//! assert_eq!(stringify_content_range(&value).unwrap(), "bytes 0-100/1000");
//!
//! let unsatisfied = parse_content_range("bytes */1000").unwrap();
//! assert!(unsatisfied.is_unsatisfied_range());
//! ```
//!
//! [RFC 9110 §14.4]: https://www.rfc-editor.org/rfc/rfc9110#section-14.4

pub mod error;
pub mod protocol;
pub mod types;

#[cfg(test)]
mod fuzzer;

pub use error::{ContentRangeError, Result, SemanticError, SyntaxError};
pub use protocol::constants::Rule;
pub use protocol::formatter::{
    stringify_complete_length, stringify_content_range, stringify_incl_range,
    stringify_range_resp, stringify_unsatisfied_range,
};
pub use protocol::parser::{
    parse_content_length, parse_content_range, parse_first_pos, parse_incl_range,
    parse_last_pos, parse_range_resp, parse_unsatisfied_range,
};
pub use protocol::validate::{
    is_range_resp, is_range_unit_format, is_unsatisfied_range, validate_range_resp,
};
pub use types::{ContentRange, InclRange, Range, RangeResp, UnsatisfiedRange};
