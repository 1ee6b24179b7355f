//! Boolean-gated selection: `[?(expr)]` and `..[?(expr)]`

use serde_json::Value;

use super::{empty, Candidate, CandidateStream};
use crate::ast::QueryExpression;
use crate::element::ScanValues;

/// Test the expression against each immediate child; matching children keep
/// their originating property name. Scalar candidates contribute nothing.
pub(super) fn children<'a, 'doc: 'a>(
    candidate: Candidate<'doc>,
    expression: &'a QueryExpression,
    root: &'doc Value,
) -> CandidateStream<'a, 'doc> {
    match candidate.value {
        Value::Array(items) => Box::new(
            items
                .iter()
                .filter(move |value| expression.is_match(root, value))
                .map(|value| Ok(Candidate::unnamed(value))),
        ),
        Value::Object(members) => Box::new(
            members
                .iter()
                .filter(move |(_, value)| expression.is_match(root, value))
                .map(|(name, value)| Ok(Candidate::named(value, name))),
        ),
        _ => empty(),
    }
}

/// As [`children`], but over every scan visit of the candidate's subtree,
/// the candidate itself included.
pub(super) fn descendants<'a, 'doc: 'a>(
    candidate: Candidate<'doc>,
    expression: &'a QueryExpression,
    root: &'doc Value,
) -> CandidateStream<'a, 'doc> {
    Box::new(
        ScanValues::new(candidate.value)
            .filter(move |(_, value)| expression.is_match(root, value))
            .map(|(name, value)| Ok(Candidate { value, name })),
    )
}
