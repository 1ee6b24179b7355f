//! Compiled path expressions

use serde_json::Value;

use crate::ast::PathFilter;
use crate::error::{EvalError, PathSyntaxError};
use crate::filter::{self, Candidate};
use crate::parser::PathParser;

/// A path expression compiled to its filter pipeline. Compiling is the only
/// fallible-by-syntax step; a compiled path can be evaluated any number of
/// times against any number of documents.
#[derive(Debug, Clone, PartialEq)]
pub struct JsonDocumentPath {
    filters: Vec<PathFilter>,
}

impl JsonDocumentPath {
    /// Compile a path expression.
    ///
    /// # Errors
    ///
    /// Returns a [`PathSyntaxError`] describing the first offending
    /// character or the truncation point of the expression.
    pub fn compile(expression: &str) -> Result<Self, PathSyntaxError> {
        log::trace!("compiling path expression {expression:?}");
        let filters = PathParser::new(expression).parse()?;
        Ok(Self { filters })
    }

    /// The compiled filter pipeline, in application order.
    #[must_use]
    pub fn filters(&self) -> &[PathFilter] {
        &self.filters
    }

    /// Evaluate against `root`, yielding every match lazily in document
    /// order. With `error_when_no_match` set, filter stages that select
    /// nothing yield an [`EvalError`] item instead of going silent.
    pub fn evaluate_all<'a, 'doc: 'a>(
        &'a self,
        root: &'doc Value,
        error_when_no_match: bool,
    ) -> impl Iterator<Item = Result<&'doc Value, EvalError>> + 'a {
        log::trace!("evaluating {} filter stages", self.filters.len());
        filter::evaluate(
            &self.filters,
            root,
            Candidate::unnamed(root),
            error_when_no_match,
        )
        .map(|item| item.map(|candidate| candidate.value))
    }

    /// Evaluate against `root`, expecting at most one match.
    ///
    /// # Errors
    ///
    /// Propagates the first evaluation error, or reports multiple tokens
    /// when a second match shows up. An error on the second item wins over
    /// the multiplicity report.
    pub fn evaluate_one<'doc>(
        &self,
        root: &'doc Value,
        error_when_no_match: bool,
    ) -> Result<Option<&'doc Value>, EvalError> {
        let mut selected = None;
        for item in self.evaluate_all(root, error_when_no_match) {
            let value = item?;
            if selected.is_some() {
                return Err(EvalError::multiple_tokens());
            }
            selected = Some(value);
        }
        Ok(selected)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn compiled_path_is_reusable() {
        let path = JsonDocumentPath::compile("$[0].name").unwrap();
        let first = json!([{"name": "a"}]);
        let second = json!([{"name": "b"}]);
        assert_eq!(
            path.evaluate_one(&first, false).unwrap(),
            Some(&json!("a"))
        );
        assert_eq!(
            path.evaluate_one(&second, false).unwrap(),
            Some(&json!("b"))
        );
    }

    #[test]
    fn evaluate_one_rejects_multiple_matches() {
        let doc = json!([1, 2, 3]);
        let path = JsonDocumentPath::compile("[0,1]").unwrap();
        let error = path.evaluate_one(&doc, false).unwrap_err();
        assert_eq!(error.to_string(), "Path returned multiple tokens.");
    }
}
