//! Token and semantic validation.

use crate::error::SemanticError;
use crate::types::{ContentRange, RangeResp};
use once_cell::sync::Lazy;
use regex::Regex;

/// RFC 9110 `token` characters.
static RANGE_UNIT_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[!#$%&'*+\-.^_`|~0-9A-Za-z]+$").unwrap());

/// Whether the input is `<range-unit>` format or not.
///
/// Any token is accepted, including units this crate knows nothing about.
#[inline]
#[must_use]
pub fn is_range_unit_format(input: &str) -> bool {
    RANGE_UNIT_REGEX.is_match(input)
}

/// Check the ordering constraints of a range response.
///
/// See [RFC 9110 §14.4](https://www.rfc-editor.org/rfc/rfc9110#section-14.4-10).
/// An unknown complete length (`*`) places no bound on `last_pos`.
pub fn validate_range_resp(range_resp: &RangeResp) -> Result<(), SemanticError> {
    let RangeResp {
        first_pos,
        last_pos,
        complete_length,
    } = *range_resp;

    if last_pos < first_pos {
        return Err(SemanticError::FirstPosExceedsLastPos {
            first_pos,
            last_pos,
        });
    }

    if let Some(complete_length) = complete_length {
        if complete_length <= last_pos {
            return Err(SemanticError::LastPosNotBelowCompleteLength {
                last_pos,
                complete_length,
            });
        }
    }

    Ok(())
}

/// Whether the value carries a range response.
#[inline]
#[must_use]
pub fn is_range_resp(content_range: &ContentRange) -> bool {
    content_range.is_range_resp()
}

/// Whether the value carries an unsatisfied range.
#[inline]
#[must_use]
pub fn is_unsatisfied_range(content_range: &ContentRange) -> bool {
    content_range.is_unsatisfied_range()
}
