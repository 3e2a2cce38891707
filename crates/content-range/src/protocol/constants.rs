//! Grammar constants for the Content-Range field.
//!
//! ```text
//! constants/
//! ├── chars  - Separator characters of the grammar
//! ├── units  - Registered range units
//! └── Rule   - ABNF rule names used in diagnostics
//! ```
//!
//! # Rules
//!
//! | Rule | Grammar |
//! |------|---------|
//! | `<Content-Range>` | `range-unit SP ( range-resp / unsatisfied-range )` |
//! | `<range-resp>` | `incl-range "/" ( complete-length / "*" )` |
//! | `<incl-range>` | `first-pos "-" last-pos` |
//! | `<unsatisfied-range>` | `"*/" complete-length` |
//! | `<first-pos>`, `<last-pos>`, `<complete-length>` | `1*DIGIT` |
//!
//! See [RFC 9110 §14.4](https://www.rfc-editor.org/rfc/rfc9110#section-14.4).

use std::fmt;

// =============================================================================
// Characters
// =============================================================================

/// Separator characters of the grammar.
///
/// # Example
///
/// ```
/// use content_range::protocol::constants::chars;
///
/// assert_eq!(chars::UNSATISFIED_PREFIX, "*/");
/// ```
pub mod chars {
    /// Separates the range unit from the range.
    pub const SPACE: &str = " ";

    /// Separates the range from the complete length.
    pub const SLASH: &str = "/";

    /// Separates first-pos from last-pos.
    pub const HYPHEN: &str = "-";

    /// Unknown complete length.
    pub const STAR: &str = "*";

    /// Leading marker of an unsatisfied range.
    pub const UNSATISFIED_PREFIX: &str = "*/";
}

// =============================================================================
// Range Units
// =============================================================================

/// Range units from the HTTP Range Unit Registry.
///
/// Parsing accepts any token; these are only conveniences.
pub mod units {
    /// Byte ranges (RFC 9110 §14.1.2).
    pub const BYTES: &str = "bytes";
}

// =============================================================================
// ABNF Rules
// =============================================================================

/// ABNF rule names, used to scope syntax errors.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum Rule {
    ContentRange,
    RangeUnit,
    RangeResp,
    UnsatisfiedRange,
    InclRange,
    FirstPos,
    LastPos,
    CompleteLength,
    Digit,
}

impl Rule {
    /// The rule name as written in diagnostics.
    ///
    /// ```
    /// use content_range::Rule;
    ///
    /// assert_eq!(Rule::InclRange.as_str(), "<incl-range>");
    /// ```
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Rule::ContentRange => "<Content-Range>",
            Rule::RangeUnit => "<range-unit>",
            Rule::RangeResp => "<range-resp>",
            Rule::UnsatisfiedRange => "<unsatisfied-range>",
            Rule::InclRange => "<incl-range>",
            Rule::FirstPos => "<first-pos>",
            Rule::LastPos => "<last-pos>",
            Rule::CompleteLength => "<complete-length>",
            Rule::Digit => "<DIGIT>",
        }
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
