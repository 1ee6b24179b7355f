//! Equality and ordering over scalar values, with cross-kind coercion

use std::cmp::Ordering;

use serde_json::{Number, Value};

use crate::element;

/// Loose equality used by `==` / `!=`: identical values match, numbers
/// compare numerically across integer/float representations, and a string
/// right operand compares against the left value's string form.
#[must_use]
pub fn loose_equals(value: &Value, query: &Value) -> bool {
    if value == query {
        return true;
    }
    if let (Value::Number(a), Value::Number(b)) = (value, query) {
        return as_f64(a) == as_f64(b);
    }
    let Value::String(query_text) = query else {
        return false;
    };
    element::loose_string_form(value) == query_text.as_str()
}

/// Strict equality used by `===` / `!==`: kinds must match; numbers still
/// compare numerically across integer/float representations.
#[must_use]
pub fn strict_equals(value: &Value, query: &Value) -> bool {
    match (value, query) {
        (Value::Null, Value::Null) => true,
        (Value::Bool(a), Value::Bool(b)) => a == b,
        (Value::Number(a), Value::Number(b)) => as_f64(a) == as_f64(b),
        (Value::String(a), Value::String(b)) => a == b,
        _ => false,
    }
}

/// Ordering used by `<`, `<=`, `>`, `>=`. Numbers and strings coerce into
/// each other when the string parses as a number; every other mixed pair
/// (and a failed parse) is treated as less-than.
#[must_use]
pub fn order(left: &Value, right: &Value) -> Ordering {
    match (left, right) {
        (Value::Null, Value::Null) => Ordering::Equal,
        (Value::Bool(a), Value::Bool(b)) if a == b => Ordering::Equal,
        (Value::Number(a), Value::Number(b)) => order_f64(as_f64(a), as_f64(b)),
        (Value::String(a), Value::String(b)) => a.cmp(b),
        (Value::Number(a), Value::String(b)) => match parse_number(b) {
            Some(parsed) => order_f64(as_f64(a), parsed),
            None => Ordering::Less,
        },
        (Value::String(a), Value::Number(b)) => match parse_number(a) {
            Some(parsed) => order_f64(parsed, as_f64(b)),
            None => Ordering::Less,
        },
        _ => Ordering::Less,
    }
}

fn as_f64(number: &Number) -> f64 {
    number.as_f64().unwrap_or(f64::NAN)
}

fn order_f64(a: f64, b: f64) -> Ordering {
    a.partial_cmp(&b).unwrap_or(Ordering::Less)
}

fn parse_number(text: &str) -> Option<f64> {
    text.trim().parse().ok()
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn loose_equality_coerces_integer_and_float() {
        assert!(loose_equals(&json!(1), &json!(1.0)));
        assert!(loose_equals(&json!(1), &json!("1")));
        assert!(!loose_equals(&json!("1"), &json!(1)));
    }

    #[test]
    fn strict_equality_requires_matching_kinds() {
        assert!(strict_equals(&json!(1), &json!(1.0)));
        assert!(!strict_equals(&json!(1), &json!("1")));
        assert!(strict_equals(&json!(null), &json!(null)));
    }

    #[test]
    fn ordering_coerces_numeric_strings() {
        assert_eq!(order(&json!("26"), &json!(3)), Ordering::Greater);
        assert_eq!(order(&json!(3), &json!("26")), Ordering::Less);
        assert_eq!(order(&json!("3"), &json!(3)), Ordering::Equal);
    }

    #[test]
    fn incomparable_kinds_order_as_less() {
        assert_eq!(order(&json!(null), &json!(3)), Ordering::Less);
        assert_eq!(order(&json!(true), &json!(false)), Ordering::Less);
        assert_eq!(order(&json!("abc"), &json!(3)), Ordering::Less);
    }
}
