//! One-shot JSONPath selection over `serde_json` documents
//!
//! This crate is the convenience surface over [`docpath_core`]: compile and
//! evaluate in a single call. Hold a [`JsonDocumentPath`] instead when the
//! same expression runs against many documents.
//!
//! ```rust
//! use serde_json::json;
//!
//! let doc = json!({"store": {"book": [{"price": 8}, {"price": 12}]}});
//! let cheap = docpath::select_elements(&doc, "$.store.book[?(@.price < 10)]", false).unwrap();
//! assert_eq!(cheap, vec![&json!({"price": 8})]);
//! ```

#![deny(unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]

use serde_json::Value;

pub use docpath_core::{
    ast::{LogicalOperator, PathFilter, QueryExpression, QueryOperand, QueryOperator},
    error::{Error, EvalError, PathSyntaxError},
    path::JsonDocumentPath,
};

/// Select every element matching `path`, in document order.
///
/// With `error_when_no_match` set, a filter stage that selects nothing
/// reports why instead of producing an empty result.
///
/// # Errors
///
/// Returns [`Error::Syntax`] when the expression does not compile and
/// [`Error::Eval`] for flagged no-match stages.
pub fn select_elements<'doc>(
    root: &'doc Value,
    path: &str,
    error_when_no_match: bool,
) -> Result<Vec<&'doc Value>, Error> {
    let compiled = JsonDocumentPath::compile(path)?;
    let mut elements = Vec::new();
    for item in compiled.evaluate_all(root, error_when_no_match) {
        elements.push(item?);
    }
    Ok(elements)
}

/// Select at most one element matching `path`.
///
/// # Errors
///
/// As [`select_elements`], plus an [`Error::Eval`] when the path matches
/// more than one element.
pub fn select_element<'doc>(
    root: &'doc Value,
    path: &str,
    error_when_no_match: bool,
) -> Result<Option<&'doc Value>, Error> {
    let compiled = JsonDocumentPath::compile(path)?;
    Ok(compiled.evaluate_one(root, error_when_no_match)?)
}
