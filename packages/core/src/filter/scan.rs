//! Recursive descent by name: `..name`, `..*`, `..['a','b']`

use super::{Candidate, CandidateStream};
use crate::element::ScanValues;

/// A named scan emits the value of every property with that name, at any
/// depth. The wildcard emits every node in the subtree (the input candidate
/// included) exactly once.
pub(super) fn single<'a, 'doc: 'a>(
    candidate: Candidate<'doc>,
    name: &'a Option<String>,
) -> CandidateStream<'a, 'doc> {
    Box::new(
        ScanValues::new(candidate.value)
            .filter(move |(visit_name, _)| match name {
                Some(name) => *visit_name == Some(name.as_str()),
                None => visit_name.is_none(),
            })
            .map(|(visit_name, value)| {
                Ok(Candidate {
                    value,
                    name: visit_name,
                })
            }),
    )
}

/// As [`single`], once per matching name, so duplicate names in the list
/// duplicate their matches.
pub(super) fn multiple<'a, 'doc: 'a>(
    candidate: Candidate<'doc>,
    names: &'a [String],
) -> CandidateStream<'a, 'doc> {
    Box::new(
        ScanValues::new(candidate.value).flat_map(move |(visit_name, value)| {
            names
                .iter()
                .filter(move |name| visit_name == Some(name.as_str()))
                .map(move |_| {
                    Ok(Candidate {
                        value,
                        name: visit_name,
                    })
                })
        }),
    )
}
