//! Traversal and coercion helpers over `serde_json::Value`
//!
//! The evaluator treats the document as an immutable tree without parent
//! pointers: these helpers provide kind classification, ordered child
//! enumeration, and the preorder scan traversal that pairs each visited
//! value with the property name that produced it.

use std::borrow::Cow;

use serde_json::Value;

/// True for scalar and null kinds, false for arrays and objects.
#[inline]
#[must_use]
pub fn is_value(value: &Value) -> bool {
    !is_container(value)
}

/// True for arrays and objects.
#[inline]
#[must_use]
pub fn is_container(value: &Value) -> bool {
    matches!(value, Value::Array(_) | Value::Object(_))
}

/// Kind name as rendered in evaluation error messages.
#[must_use]
pub fn kind_name(value: &Value) -> &'static str {
    match value {
        Value::Object(_) => "JObject",
        Value::Array(_) => "JArray",
        _ => "JValue",
    }
}

/// String form used by loose equality: strings compare as themselves,
/// booleans render capitalized, null renders empty, numbers render as their
/// JSON text.
#[must_use]
pub fn loose_string_form(value: &Value) -> Cow<'_, str> {
    match value {
        Value::Null => Cow::Borrowed(""),
        Value::Bool(true) => Cow::Borrowed("True"),
        Value::Bool(false) => Cow::Borrowed("False"),
        Value::String(text) => Cow::Borrowed(text),
        other => Cow::Owned(other.to_string()),
    }
}

/// Preorder traversal of a value and all of its descendants, pairing each
/// visit with the originating property name.
///
/// Every node is visited once with name `None` (the start value, array
/// elements, and each object property value through its own sub-traversal);
/// object property values are additionally surfaced once as
/// `(Some(name), value)` immediately before their sub-traversal. Name-based
/// scans match on the named visits, wildcard scans on the unnamed ones, and
/// query scans test every visit.
pub struct ScanValues<'doc> {
    stack: Vec<ScanEntry<'doc>>,
}

enum ScanEntry<'doc> {
    /// Emit `(Some(name), value)` without expanding; the paired `Visit`
    /// entry below it performs the expansion.
    Named(&'doc str, &'doc Value),
    /// Emit `(None, value)` and queue the children.
    Visit(&'doc Value),
}

impl<'doc> ScanValues<'doc> {
    #[must_use]
    pub fn new(start: &'doc Value) -> Self {
        Self {
            stack: vec![ScanEntry::Visit(start)],
        }
    }
}

impl<'doc> Iterator for ScanValues<'doc> {
    type Item = (Option<&'doc str>, &'doc Value);

    fn next(&mut self) -> Option<Self::Item> {
        match self.stack.pop()? {
            ScanEntry::Named(name, value) => Some((Some(name), value)),
            ScanEntry::Visit(value) => {
                match value {
                    Value::Array(items) => {
                        self.stack
                            .extend(items.iter().rev().map(ScanEntry::Visit));
                    }
                    Value::Object(members) => {
                        for (name, child) in members.iter().rev() {
                            self.stack.push(ScanEntry::Visit(child));
                            self.stack.push(ScanEntry::Named(name, child));
                        }
                    }
                    _ => {}
                }
                Some((None, value))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn scan_visits_property_values_twice_and_elements_once() {
        let doc = json!({"a": [1, {"b": 2}]});
        let visits: Vec<(Option<&str>, String)> = ScanValues::new(&doc)
            .map(|(name, value)| (name, value.to_string()))
            .collect();

        assert_eq!(
            visits,
            vec![
                (None, doc.to_string()),
                (Some("a"), "[1,{\"b\":2}]".to_string()),
                (None, "[1,{\"b\":2}]".to_string()),
                (None, "1".to_string()),
                (None, "{\"b\":2}".to_string()),
                (Some("b"), "2".to_string()),
                (None, "2".to_string()),
            ]
        );
    }

    #[test]
    fn kind_names() {
        assert_eq!(kind_name(&json!({})), "JObject");
        assert_eq!(kind_name(&json!([])), "JArray");
        assert_eq!(kind_name(&json!("x")), "JValue");
        assert_eq!(kind_name(&json!(null)), "JValue");
    }
}
