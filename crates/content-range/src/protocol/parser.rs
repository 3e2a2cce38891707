//! Content-Range parsers.
//!
//! Each parser handles one grammar rule. A composite parser never surfaces
//! an inner failure as-is: it raises its own [`SyntaxError`] scoped to the
//! text it was given and keeps the inner error as the cause.

use crate::error::{ContentRangeError, Result, SyntaxError};
use crate::protocol::constants::{chars, Rule};
use crate::protocol::utils::divide_two;
use crate::protocol::validate::{is_range_unit_format, validate_range_resp};
use crate::types::{ContentRange, InclRange, Range, RangeResp, UnsatisfiedRange};

type ParseResult<T> = std::result::Result<T, SyntaxError>;

/// Parse a `Content-Range` field value.
///
/// ```
/// use content_range::{parse_content_range, ContentRange};
///
/// assert_eq!(
///     parse_content_range("bytes 42-1233/1234").unwrap(),
///     ContentRange::bytes(42, 1233, Some(1234))
/// );
/// assert_eq!(
///     parse_content_range("bytes */1234").unwrap(),
///     ContentRange::unsatisfied_bytes(1234)
/// );
/// ```
///
/// # Errors
///
/// [`ContentRangeError::Syntax`] if the text does not match the grammar,
/// [`ContentRangeError::Semantics`] if it does but the positions are
/// inconsistent (e.g. `"bytes 1-0/*"`).
pub fn parse_content_range(input: &str) -> Result<ContentRange> {
    tracing::trace!("[ContentRange] Parsing '{}'", input);

    let syntax_error = || SyntaxError::new(Rule::ContentRange, input);

    let Some((head, tail)) = divide_two(input, chars::SPACE) else {
        tracing::debug!("[ContentRange] Missing range unit separator: '{}'", input);
        return Err(syntax_error().into());
    };

    if !is_range_unit_format(head) {
        tracing::debug!("[ContentRange] Invalid range unit '{}' in '{}'", head, input);
        return Err(syntax_error().into());
    }

    let range = if is_maybe_unsatisfied_range_format(tail) {
        parse_unsatisfied_range(tail).map(Range::Unsatisfied)
    } else {
        parse_range_resp(tail).map(Range::Resp)
    }
    .map_err(|cause| {
        tracing::debug!("[ContentRange] {}", cause);
        syntax_error().with_cause(cause)
    })?;

    if let Range::Resp(range_resp) = &range {
        validate_range_resp(range_resp).map_err(|source| {
            tracing::debug!("[ContentRange] {} in '{}'", source, input);
            ContentRangeError::Semantics {
                input: input.to_string(),
                source,
            }
        })?;
    }

    Ok(ContentRange::new(head, range))
}

#[inline]
fn is_maybe_unsatisfied_range_format(input: &str) -> bool {
    input.starts_with(chars::UNSATISFIED_PREFIX)
}

/// Parse `"*/" complete-length`.
pub fn parse_unsatisfied_range(input: &str) -> ParseResult<UnsatisfiedRange> {
    let syntax_error = || SyntaxError::new(Rule::UnsatisfiedRange, input);

    let rest = input
        .strip_prefix(chars::UNSATISFIED_PREFIX)
        .ok_or_else(syntax_error)?;
    let complete_length =
        parse_content_length(rest).map_err(|cause| syntax_error().with_cause(cause))?;

    Ok(UnsatisfiedRange { complete_length })
}

/// Parse `incl-range "/" ( complete-length / "*" )`.
pub fn parse_range_resp(input: &str) -> ParseResult<RangeResp> {
    let syntax_error = || SyntaxError::new(Rule::RangeResp, input);

    let (head, tail) = divide_two(input, chars::SLASH).ok_or_else(syntax_error)?;

    let incl_range = parse_incl_range(head).map_err(|cause| syntax_error().with_cause(cause))?;
    let complete_length = if tail == chars::STAR {
        None
    } else {
        Some(parse_content_length(tail).map_err(|cause| syntax_error().with_cause(cause))?)
    };

    Ok(RangeResp::from_incl_range(incl_range, complete_length))
}

/// Parse `first-pos "-" last-pos`.
pub fn parse_incl_range(input: &str) -> ParseResult<InclRange> {
    let syntax_error = || SyntaxError::new(Rule::InclRange, input);

    let (head, tail) = divide_two(input, chars::HYPHEN).ok_or_else(syntax_error)?;
    let first_pos = parse_first_pos(head).map_err(|cause| syntax_error().with_cause(cause))?;
    let last_pos = parse_last_pos(tail).map_err(|cause| syntax_error().with_cause(cause))?;

    Ok(InclRange {
        first_pos,
        last_pos,
    })
}

/// Parse `1*DIGIT`. Leading zeros are allowed; values beyond `u64` are not.
fn parse_non_negative_integer(input: &str) -> ParseResult<u64> {
    if input.is_empty() || !input.bytes().all(|b| b.is_ascii_digit()) {
        return Err(SyntaxError::new(Rule::Digit, input));
    }

    input
        .parse::<u64>()
        .map_err(|_| SyntaxError::new(Rule::Digit, input))
}

fn parse_scoped(rule: Rule, input: &str) -> ParseResult<u64> {
    parse_non_negative_integer(input)
        .map_err(|cause| SyntaxError::new(rule, input).with_cause(cause))
}

/// Parse `<first-pos>`.
///
/// ```
/// use content_range::parse_first_pos;
///
/// assert_eq!(parse_first_pos("007").unwrap(), 7);
/// assert!(parse_first_pos("+7").is_err());
/// ```
pub fn parse_first_pos(input: &str) -> ParseResult<u64> {
    parse_scoped(Rule::FirstPos, input)
}

/// Parse `<last-pos>`.
pub fn parse_last_pos(input: &str) -> ParseResult<u64> {
    parse_scoped(Rule::LastPos, input)
}

/// Parse `<complete-length>`.
pub fn parse_content_length(input: &str) -> ParseResult<u64> {
    parse_scoped(Rule::CompleteLength, input)
}
