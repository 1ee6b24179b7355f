//! Array indexing: `[n]`, `[*]`, `[1,4]`

use serde_json::Value;

use super::{empty, fail, one, Candidate, CandidateStream};
use crate::element;
use crate::error::EvalError;

pub(super) fn single<'a, 'doc: 'a>(
    candidate: Candidate<'doc>,
    index: Option<i32>,
    error_when_no_match: bool,
) -> CandidateStream<'a, 'doc> {
    match index {
        Some(index) => at_index(candidate.value, index, error_when_no_match),
        None => match candidate.value {
            Value::Array(items) => {
                Box::new(items.iter().map(|value| Ok(Candidate::unnamed(value))))
            }
            other if error_when_no_match => {
                fail(EvalError::wildcard_index_not_valid(element::kind_name(other)))
            }
            _ => empty(),
        },
    }
}

pub(super) fn multiple<'a, 'doc: 'a>(
    candidate: Candidate<'doc>,
    indexes: &'a [i32],
    error_when_no_match: bool,
) -> CandidateStream<'a, 'doc> {
    let value = candidate.value;
    Box::new(
        indexes
            .iter()
            .flat_map(move |&index| at_index(value, index, error_when_no_match)),
    )
}

fn at_index<'a, 'doc: 'a>(
    value: &'doc Value,
    index: i32,
    error_when_no_match: bool,
) -> CandidateStream<'a, 'doc> {
    let Value::Array(items) = value else {
        if error_when_no_match {
            return fail(EvalError::index_not_valid(index, element::kind_name(value)));
        }
        return empty();
    };
    match usize::try_from(index).ok().and_then(|i| items.get(i)) {
        Some(element) => one(Candidate::unnamed(element)),
        None if error_when_no_match => fail(EvalError::index_out_of_bounds(index)),
        None => empty(),
    }
}
