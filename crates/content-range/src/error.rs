//! Error types for Content-Range parsing and serialization.

use crate::protocol::constants::Rule;
use thiserror::Error;

/// Result type for Content-Range operations.
pub type Result<T> = std::result::Result<T, ContentRangeError>;

/// The input does not match a grammar rule.
///
/// Every composite rule wraps the failure of the rule beneath it, so the
/// outermost error names the rule the caller asked for while [`cause`]
/// walks down to the rule that actually rejected the text.
///
/// [`cause`]: SyntaxError::cause
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("invalid {rule} syntax. \"{input}\"")]
pub struct SyntaxError {
    rule: Rule,
    input: String,
    #[source]
    cause: Option<Box<SyntaxError>>,
}

impl SyntaxError {
    #[must_use]
    pub fn new(rule: Rule, input: impl Into<String>) -> Self {
        SyntaxError {
            rule,
            input: input.into(),
            cause: None,
        }
    }

    /// Attach the inner rule's failure.
    #[must_use]
    pub fn with_cause(mut self, cause: SyntaxError) -> Self {
        self.cause = Some(Box::new(cause));
        self
    }

    #[inline]
    #[must_use]
    pub fn rule(&self) -> Rule {
        self.rule
    }

    /// The exact text this rule was applied to.
    #[inline]
    #[must_use]
    pub fn input(&self) -> &str {
        &self.input
    }

    #[inline]
    #[must_use]
    pub fn cause(&self) -> Option<&SyntaxError> {
        self.cause.as_deref()
    }

    /// The deepest rule in the chain.
    #[must_use]
    pub fn root_cause(&self) -> &SyntaxError {
        let mut current = self;
        while let Some(inner) = current.cause() {
            current = inner;
        }
        current
    }

    /// Rules from the outermost to the innermost.
    pub fn rules(&self) -> impl Iterator<Item = Rule> + '_ {
        std::iter::successors(Some(self), |e| e.cause()).map(SyntaxError::rule)
    }
}

/// A well-formed range whose positions are inconsistent.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SemanticError {
    #[error(
        "firstPos must be less than or equal to lastPos. firstPos: {first_pos}, lastPos: {last_pos}"
    )]
    FirstPosExceedsLastPos { first_pos: u64, last_pos: u64 },

    #[error(
        "lastPos must be less than completeLength. lastPos: {last_pos}, completeLength: {complete_length}"
    )]
    LastPosNotBelowCompleteLength { last_pos: u64, complete_length: u64 },
}

/// Errors that can occur while parsing or serializing a Content-Range.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ContentRangeError {
    #[error(transparent)]
    Syntax(#[from] SyntaxError),

    #[error("invalid semantics exist. \"{input}\"")]
    Semantics {
        input: String,
        #[source]
        source: SemanticError,
    },

    #[error(transparent)]
    Validation(#[from] SemanticError),

    #[error("rangeUnit is invalid <range-unit> syntax. \"{0}\"")]
    InvalidRangeUnit(String),

    #[error("Invalid header value: {0}")]
    InvalidHeaderValue(String),
}

impl ContentRangeError {
    /// Check if the text itself was malformed.
    #[inline]
    #[must_use]
    pub fn is_syntax(&self) -> bool {
        matches!(
            self,
            ContentRangeError::Syntax(_) | ContentRangeError::InvalidHeaderValue(_)
        )
    }

    /// Check if the value was well-formed but logically inconsistent.
    #[inline]
    #[must_use]
    pub fn is_semantic(&self) -> bool {
        matches!(
            self,
            ContentRangeError::Semantics { .. } | ContentRangeError::Validation(_)
        )
    }

    /// The semantic violation, if any.
    #[must_use]
    pub fn semantic_error(&self) -> Option<&SemanticError> {
        match self {
            ContentRangeError::Semantics { source, .. } => Some(source),
            ContentRangeError::Validation(source) => Some(source),
            _ => None,
        }
    }

    /// The syntax error, if any.
    #[must_use]
    pub fn syntax_error(&self) -> Option<&SyntaxError> {
        match self {
            ContentRangeError::Syntax(err) => Some(err),
            _ => None,
        }
    }
}
