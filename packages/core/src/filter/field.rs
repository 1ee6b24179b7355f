//! Field access: `.name`, `.*`, `['name']`, `['a','b']`

use serde_json::Value;

use super::{empty, fail, one, Candidate, CandidateStream};
use crate::element;
use crate::error::EvalError;

pub(super) fn single<'a, 'doc: 'a>(
    candidate: Candidate<'doc>,
    name: &'a Option<String>,
    error_when_no_match: bool,
) -> CandidateStream<'a, 'doc> {
    let Value::Object(members) = candidate.value else {
        if error_when_no_match {
            return fail(EvalError::property_not_valid(
                name.as_deref().unwrap_or("*"),
                element::kind_name(candidate.value),
            ));
        }
        return empty();
    };
    match name {
        Some(name) => lookup(members, name, error_when_no_match),
        None => Box::new(members.values().map(|value| Ok(Candidate::unnamed(value)))),
    }
}

pub(super) fn multiple<'a, 'doc: 'a>(
    candidate: Candidate<'doc>,
    names: &'a [String],
    error_when_no_match: bool,
) -> CandidateStream<'a, 'doc> {
    let Value::Object(members) = candidate.value else {
        if error_when_no_match {
            return fail(EvalError::properties_not_valid(
                names,
                element::kind_name(candidate.value),
            ));
        }
        return empty();
    };
    Box::new(
        names
            .iter()
            .flat_map(move |name| lookup(members, name, error_when_no_match)),
    )
}

/// A named property yields only when present with a non-null value; both a
/// missing name and a null value report "does not exist" in error mode.
fn lookup<'a, 'doc: 'a>(
    members: &'doc serde_json::Map<String, Value>,
    name: &'a str,
    error_when_no_match: bool,
) -> CandidateStream<'a, 'doc> {
    match members.get_key_value(name) {
        Some((key, value)) if !value.is_null() => one(Candidate::named(value, key)),
        _ if error_when_no_match => fail(EvalError::property_missing(name)),
        _ => empty(),
    }
}
