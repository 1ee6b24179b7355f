//! `=~` matching against `/pattern/flags` regex literals

use regex::RegexBuilder;
use serde_json::Value;

/// Match `input` against a `/pattern/flags` literal. The flags delimiter is
/// the *last* `/` in the literal, so a pattern may itself contain slashes.
/// Flags `i`, `m` and `s` map onto the engine's equivalents; anything else
/// (including `x`) is ignored. Non-string operands and unbuildable patterns
/// never match.
#[must_use]
pub fn regex_equals(input: &Value, pattern: &Value) -> bool {
    let (Value::String(input), Value::String(literal)) = (input, pattern) else {
        return false;
    };
    literal_matches(literal, input)
}

fn literal_matches(literal: &str, input: &str) -> bool {
    let Some(delimiter) = literal.rfind('/') else {
        return false;
    };
    if delimiter == 0 {
        return false;
    }
    let pattern = &literal[1..delimiter];
    let flags = &literal[delimiter + 1..];

    let mut builder = RegexBuilder::new(pattern);
    for flag in flags.chars() {
        match flag {
            'i' => {
                builder.case_insensitive(true);
            }
            'm' => {
                builder.multi_line(true);
            }
            's' => {
                builder.dot_matches_new_line(true);
            }
            _ => {}
        }
    }
    builder
        .build()
        .map_or(false, |regex| regex.is_match(input))
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn last_slash_splits_pattern_and_flags() {
        let literal = json!("/// comment/");
        assert!(regex_equals(&json!("// comment"), &literal));
        assert!(!regex_equals(&json!("//comment"), &literal));
        assert!(!regex_equals(&json!("/ comment"), &literal));
    }

    #[test]
    fn case_insensitive_flag() {
        assert!(regex_equals(&json!("FOOD"), &json!("/Foo.*d/i")));
        assert!(!regex_equals(&json!("FOOD"), &json!("/foo.*d/")));
    }

    #[test]
    fn slashes_inside_pattern() {
        let literal = json!("/<tag>.*</tag>/i");
        assert!(regex_equals(&json!("<Tag>Test</Tag>"), &literal));
        assert!(!regex_equals(&json!("<tag>Test<tag>"), &literal));
    }

    #[test]
    fn non_string_operands_never_match() {
        assert!(!regex_equals(&json!(3), &json!("/3/")));
        assert!(!regex_equals(&json!("3"), &json!(3)));
    }
}
