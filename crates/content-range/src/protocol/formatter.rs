//! Content-Range serializers.

use crate::error::{ContentRangeError, Result};
use crate::protocol::constants::chars;
use crate::protocol::validate::{is_range_unit_format, validate_range_resp};
use crate::types::{ContentRange, InclRange, Range, RangeResp, UnsatisfiedRange};

/// Serialize a [`ContentRange`] into a header field value.
///
/// ```
/// use content_range::{stringify_content_range, ContentRange};
///
/// let value = ContentRange::bytes(0, 100, None);
/// assert_eq!(stringify_content_range(&value).unwrap(), "bytes 0-100/*");
/// ```
///
/// # Errors
///
/// [`ContentRangeError::InvalidRangeUnit`] if the unit is not a token,
/// [`ContentRangeError::Validation`] if a range response has
/// `first_pos > last_pos` or `last_pos >= complete_length`.
pub fn stringify_content_range(content_range: &ContentRange) -> Result<String> {
    tracing::trace!("[ContentRange] Formatting {:?}", content_range);

    if !is_range_unit_format(&content_range.range_unit) {
        tracing::debug!(
            "[ContentRange] Invalid range unit '{}'",
            content_range.range_unit
        );
        return Err(ContentRangeError::InvalidRangeUnit(
            content_range.range_unit.clone(),
        ));
    }

    let right = match &content_range.range {
        Range::Resp(range_resp) => {
            validate_range_resp(range_resp).inspect_err(|e| {
                tracing::debug!("[ContentRange] {}", e);
            })?;
            stringify_range_resp(range_resp)
        }
        Range::Unsatisfied(unsatisfied_range) => stringify_unsatisfied_range(unsatisfied_range),
    };

    Ok(format!(
        "{}{}{}",
        content_range.range_unit,
        chars::SPACE,
        right
    ))
}

/// Format `incl-range "/" ( complete-length / "*" )`.
///
/// Ordering is not checked here.
#[must_use]
pub fn stringify_range_resp(range_resp: &RangeResp) -> String {
    let right = match range_resp.complete_length {
        Some(complete_length) => stringify_complete_length(complete_length),
        None => chars::STAR.to_string(),
    };

    format!(
        "{}{}{}",
        stringify_incl_range(&range_resp.incl_range()),
        chars::SLASH,
        right
    )
}

#[inline]
#[must_use]
pub fn stringify_incl_range(incl_range: &InclRange) -> String {
    format!(
        "{}{}{}",
        incl_range.first_pos,
        chars::HYPHEN,
        incl_range.last_pos
    )
}

#[inline]
#[must_use]
pub fn stringify_complete_length(complete_length: u64) -> String {
    complete_length.to_string()
}

#[inline]
#[must_use]
pub fn stringify_unsatisfied_range(unsatisfied_range: &UnsatisfiedRange) -> String {
    format!(
        "{}{}",
        chars::UNSATISFIED_PREFIX,
        stringify_complete_length(unsatisfied_range.complete_length)
    )
}
