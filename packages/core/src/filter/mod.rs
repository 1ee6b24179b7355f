//! The filter pipeline
//!
//! A compiled filter list is folded left to right over a lazy candidate
//! stream: each stage consumes the previous stage's stream and produces a
//! new one, so existence tests and single-match accessors short-circuit
//! without traversing the rest of the document. Evaluation errors surface
//! as stream items at the exact position that fails.

mod field;
mod index;
mod query;
mod scan;
mod slice;

use serde_json::Value;

use crate::ast::PathFilter;
use crate::error::EvalError;

/// A value flowing through the pipeline together with the object property
/// name that produced it, when any. Values carry no identity of their own,
/// so name-matching filters test this pair instead.
#[derive(Debug, Clone, Copy)]
pub struct Candidate<'doc> {
    pub value: &'doc Value,
    pub name: Option<&'doc str>,
}

impl<'doc> Candidate<'doc> {
    #[must_use]
    pub fn unnamed(value: &'doc Value) -> Self {
        Self { value, name: None }
    }

    #[must_use]
    pub fn named(value: &'doc Value, name: &'doc str) -> Self {
        Self {
            value,
            name: Some(name),
        }
    }
}

/// Lazy stream of pipeline results. The stream borrows the compiled filters
/// for `'a` and the document for `'doc`.
pub type CandidateStream<'a, 'doc> =
    Box<dyn Iterator<Item = Result<Candidate<'doc>, EvalError>> + 'a>;

fn empty<'a, 'doc: 'a>() -> CandidateStream<'a, 'doc> {
    Box::new(std::iter::empty())
}

fn one<'a, 'doc: 'a>(candidate: Candidate<'doc>) -> CandidateStream<'a, 'doc> {
    Box::new(std::iter::once(Ok(candidate)))
}

fn fail<'a, 'doc: 'a>(error: EvalError) -> CandidateStream<'a, 'doc> {
    Box::new(std::iter::once(Err(error)))
}

/// Evaluate a compiled filter list against `root`, seeding the pipeline
/// with `seed`. Query-expression operands re-enter here with the candidate
/// under test as seed.
pub fn evaluate<'a, 'doc: 'a>(
    filters: &'a [PathFilter],
    root: &'doc Value,
    seed: Candidate<'doc>,
    error_when_no_match: bool,
) -> CandidateStream<'a, 'doc> {
    let mut stream = one(seed);
    for filter in filters {
        stream = apply(filter, root, stream, error_when_no_match);
    }
    stream
}

/// Apply one filter stage to a candidate stream.
pub fn apply<'a, 'doc: 'a>(
    filter: &'a PathFilter,
    root: &'doc Value,
    input: CandidateStream<'a, 'doc>,
    error_when_no_match: bool,
) -> CandidateStream<'a, 'doc> {
    match filter {
        // Root ignores its input entirely, pending errors included.
        PathFilter::Root => one(Candidate::unnamed(root)),
        // A zero step is rejected before any candidate is consumed.
        PathFilter::Slice { step: Some(0), .. } => fail(EvalError::zero_step()),
        _ => Box::new(input.flat_map(move |item| match item {
            Ok(candidate) => expand(filter, root, candidate, error_when_no_match),
            Err(error) => fail(error),
        })),
    }
}

fn expand<'a, 'doc: 'a>(
    filter: &'a PathFilter,
    root: &'doc Value,
    candidate: Candidate<'doc>,
    error_when_no_match: bool,
) -> CandidateStream<'a, 'doc> {
    match filter {
        PathFilter::Root => one(Candidate::unnamed(root)),
        PathFilter::Field(name) => field::single(candidate, name, error_when_no_match),
        PathFilter::FieldMultiple(names) => field::multiple(candidate, names, error_when_no_match),
        PathFilter::Index(index) => index::single(candidate, *index, error_when_no_match),
        PathFilter::IndexMultiple(indexes) => {
            index::multiple(candidate, indexes, error_when_no_match)
        }
        PathFilter::Slice { start, end, step } => {
            slice::apply(candidate, *start, *end, *step, error_when_no_match)
        }
        PathFilter::Scan(name) => scan::single(candidate, name),
        PathFilter::ScanMultiple(names) => scan::multiple(candidate, names),
        PathFilter::Query(expression) => query::children(candidate, expression, root),
        PathFilter::QueryScan(expression) => query::descendants(candidate, expression, root),
    }
}
