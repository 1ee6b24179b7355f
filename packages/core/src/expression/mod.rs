//! Boolean query expression evaluation
//!
//! Operands resolve to value sequences: a literal is a one-element
//! sequence, a sub-path re-enters the filter pipeline seeded with the
//! candidate under test (so `@` paths start at the candidate and `$` paths
//! re-anchor at the root through their leading root filter). Comparison and
//! regex evaluation never raise; malformed or absent operands simply fail
//! to match.

pub mod compare;
pub mod pattern;

use std::cmp::Ordering;

use serde_json::Value;

use crate::ast::{LogicalOperator, QueryExpression, QueryOperand, QueryOperator};
use crate::element;
use crate::filter::{self, Candidate};

impl QueryExpression {
    /// Test this expression against `current`, with `root` available to
    /// `$`-anchored operand paths.
    #[must_use]
    pub fn is_match<'e, 'doc: 'e>(&'e self, root: &'doc Value, current: &'doc Value) -> bool {
        match self {
            QueryExpression::Composite {
                operator,
                expressions,
            } => match operator {
                LogicalOperator::And => expressions.iter().all(|e| e.is_match(root, current)),
                LogicalOperator::Or => expressions.iter().any(|e| e.is_match(root, current)),
            },
            QueryExpression::Boolean {
                operator,
                left,
                right,
            } => boolean_match(*operator, left, right.as_ref(), root, current),
        }
    }
}

fn boolean_match<'e, 'doc: 'e>(
    operator: QueryOperator,
    left: &'e QueryOperand,
    right: Option<&'e QueryOperand>,
    root: &'doc Value,
    current: &'doc Value,
) -> bool {
    if operator == QueryOperator::Exists {
        return resolve(left, root, current).next().is_some();
    }
    let Some(right) = right else {
        return false;
    };
    let mut left_values = resolve(left, root, current).peekable();
    if left_values.peek().is_none() {
        return false;
    }
    // The right side is re-walked per left value; the left stays lazy so
    // the first match short-circuits.
    let right_values: Vec<&Value> = resolve(right, root, current).collect();
    left_values.any(|left_value| {
        right_values
            .iter()
            .any(|right_value| match_values(operator, left_value, right_value))
    })
}

fn resolve<'e, 'doc: 'e>(
    operand: &'e QueryOperand,
    root: &'doc Value,
    current: &'doc Value,
) -> Box<dyn Iterator<Item = &'e Value> + 'e> {
    match operand {
        QueryOperand::Literal(value) => Box::new(std::iter::once(value)),
        QueryOperand::Path(filters) => Box::new(
            filter::evaluate(filters, root, Candidate::unnamed(current), false)
                .filter_map(|item| item.ok().map(|candidate| candidate.value)),
        ),
    }
}

/// Comparisons apply to scalar kinds only. When a container reaches a
/// comparison, the result is `true` for `!=` and `false` for everything
/// else.
fn match_values(operator: QueryOperator, left: &Value, right: &Value) -> bool {
    if element::is_value(left) && element::is_value(right) {
        match operator {
            QueryOperator::Equals => compare::loose_equals(left, right),
            QueryOperator::NotEquals => !compare::loose_equals(left, right),
            QueryOperator::StrictEquals => compare::strict_equals(left, right),
            QueryOperator::StrictNotEquals => !compare::strict_equals(left, right),
            QueryOperator::LessThan => compare::order(left, right) == Ordering::Less,
            QueryOperator::LessThanOrEquals => compare::order(left, right) != Ordering::Greater,
            QueryOperator::GreaterThan => compare::order(left, right) == Ordering::Greater,
            QueryOperator::GreaterThanOrEquals => compare::order(left, right) != Ordering::Less,
            QueryOperator::RegexEquals => pattern::regex_equals(left, right),
            QueryOperator::Exists => true,
        }
    } else {
        matches!(operator, QueryOperator::Exists | QueryOperator::NotEquals)
    }
}
