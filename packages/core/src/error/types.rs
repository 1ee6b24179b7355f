//! Concrete error types with their fixed message catalog
//!
//! The message texts are a compatibility surface: callers match on them, so
//! every template lives in exactly one constructor here and nowhere else.

use thiserror::Error;

/// Error raised while compiling a path expression. Never recoverable
/// mid-parse; the caller must re-supply a corrected path.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct PathSyntaxError {
    message: String,
}

impl PathSyntaxError {
    fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// The complete error message.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    pub(crate) fn unexpected_character(c: char) -> Self {
        Self::new(format!("Unexpected character while parsing path: {c}"))
    }

    pub(crate) fn unexpected_end() -> Self {
        Self::new("Unexpected end while parsing path.")
    }

    pub(crate) fn open_indexer() -> Self {
        Self::new("Path ended with open indexer.")
    }

    pub(crate) fn array_index_expected() -> Self {
        Self::new("Array index expected.")
    }

    pub(crate) fn unexpected_indexer_character(c: char) -> Self {
        Self::new(format!(
            "Unexpected character while parsing path indexer: {c}"
        ))
    }

    pub(crate) fn unexpected_character_following_indexer(c: char) -> Self {
        Self::new(format!("Unexpected character following indexer: {c}"))
    }

    pub(crate) fn unexpected_query_character(c: char) -> Self {
        Self::new(format!("Unexpected character while parsing path query: {c}"))
    }

    pub(crate) fn open_query() -> Self {
        Self::new("Path ended with open query.")
    }

    pub(crate) fn unknown_escape_character(c: char) -> Self {
        Self::new(format!("Unknown escape character: \\{c}"))
    }

    pub(crate) fn open_regex() -> Self {
        Self::new("Path ended with an open regex.")
    }
}

/// Error raised while evaluating a compiled path.
///
/// With `error_when_no_match` unset, every condition below except
/// [`EvalError::zero_step`] and [`EvalError::multiple_tokens`] degrades to
/// "contribute zero elements" instead.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct EvalError {
    message: String,
}

impl EvalError {
    fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// The complete error message.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    pub(crate) fn index_not_valid(index: i32, kind: &str) -> Self {
        Self::new(format!("Index {index} not valid on {kind}."))
    }

    pub(crate) fn index_out_of_bounds(index: i32) -> Self {
        Self::new(format!("Index {index} outside the bounds of JArray."))
    }

    pub(crate) fn wildcard_index_not_valid(kind: &str) -> Self {
        Self::new(format!("Index * not valid on {kind}."))
    }

    pub(crate) fn property_missing(name: &str) -> Self {
        Self::new(format!("Property '{name}' does not exist on JObject."))
    }

    pub(crate) fn property_not_valid(name: &str, kind: &str) -> Self {
        Self::new(format!("Property '{name}' not valid on {kind}."))
    }

    pub(crate) fn properties_not_valid(names: &[String], kind: &str) -> Self {
        let quoted: Vec<String> = names.iter().map(|n| format!("'{n}'")).collect();
        Self::new(format!(
            "Properties {} not valid on {kind}.",
            quoted.join(", ")
        ))
    }

    pub(crate) fn slice_not_valid(kind: &str) -> Self {
        Self::new(format!("Array slice is not valid on {kind}."))
    }

    pub(crate) fn empty_slice(start: Option<i32>, end: Option<i32>) -> Self {
        Self::new(format!(
            "Array slice of {} to {} returned no results.",
            bound_text(start),
            bound_text(end)
        ))
    }

    pub(crate) fn zero_step() -> Self {
        Self::new("Step cannot be zero.")
    }

    pub(crate) fn multiple_tokens() -> Self {
        Self::new("Path returned multiple tokens.")
    }
}

fn bound_text(bound: Option<i32>) -> String {
    bound.map_or_else(|| "*".to_string(), |value| value.to_string())
}
