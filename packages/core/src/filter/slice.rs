//! Python-style array slices: `[start:end:step]`

use serde_json::Value;

use super::{empty, fail, Candidate, CandidateStream};
use crate::element;
use crate::error::EvalError;

pub(super) fn apply<'a, 'doc: 'a>(
    candidate: Candidate<'doc>,
    start: Option<i32>,
    end: Option<i32>,
    step: Option<i32>,
    error_when_no_match: bool,
) -> CandidateStream<'a, 'doc> {
    let step = step.unwrap_or(1);
    if step == 0 {
        return fail(EvalError::zero_step());
    }
    let Value::Array(items) = candidate.value else {
        if error_when_no_match {
            return fail(EvalError::slice_not_valid(element::kind_name(
                candidate.value,
            )));
        }
        return empty();
    };

    let len = i32::try_from(items.len()).unwrap_or(i32::MAX);
    let forward = step > 0;

    // Defaults depend on direction; negative bounds count from the end and
    // everything is then clamped back into range.
    let mut from = start.unwrap_or(if forward { 0 } else { len - 1 });
    let mut to = end.unwrap_or(if forward { len } else { -1 });
    if start.is_some_and(|s| s < 0) {
        from += len;
    }
    if end.is_some_and(|e| e < 0) {
        to += len;
    }
    from = from.max(if forward { 0 } else { i32::MIN });
    from = from.min(if forward { len } else { len - 1 });
    to = to.clamp(-1, len);

    if !in_range(from, to, forward) {
        if error_when_no_match {
            return fail(EvalError::empty_slice(start, end));
        }
        return empty();
    }
    Box::new(
        std::iter::successors(Some(from), move |&i| i.checked_add(step))
            .take_while(move |&i| in_range(i, to, forward))
            .filter_map(move |i| usize::try_from(i).ok().and_then(|i| items.get(i)))
            .map(|value| Ok(Candidate::unnamed(value))),
    )
}

fn in_range(index: i32, stop: i32, forward: bool) -> bool {
    if forward {
        index < stop
    } else {
        index > stop
    }
}
