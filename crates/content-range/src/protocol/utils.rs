//! String helpers shared by the parsers.

/// Split `input` around the first occurrence of `separator`.
///
/// The separator belongs to neither half. Returns `None` when the separator
/// does not occur. An empty separator matches at the start of `input`.
///
/// ```
/// use content_range::protocol::divide_two;
///
/// assert_eq!(divide_two("abbc", "b"), Some(("a", "bc")));
/// assert_eq!(divide_two("x", "z"), None);
/// ```
#[inline]
#[must_use]
pub fn divide_two<'a>(input: &'a str, separator: &str) -> Option<(&'a str, &'a str)> {
    input.split_once(separator)
}
