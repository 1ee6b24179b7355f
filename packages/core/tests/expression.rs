//! Query expression tests over hand-built expression trees

use docpath_core::{
    LogicalOperator, PathFilter, QueryExpression, QueryOperand, QueryOperator,
};
use serde_json::{json, Value};

fn field_exists(name: &str) -> QueryExpression {
    QueryExpression::Boolean {
        operator: QueryOperator::Exists,
        left: QueryOperand::Path(vec![PathFilter::Field(Some(name.to_string()))]),
        right: None,
    }
}

fn elements_compare(operator: QueryOperator, right: Value) -> QueryExpression {
    QueryExpression::Boolean {
        operator,
        left: QueryOperand::Path(vec![PathFilter::Index(None)]),
        right: Some(QueryOperand::Literal(right)),
    }
}

#[test]
fn and_composite() {
    let expression = QueryExpression::Composite {
        operator: LogicalOperator::And,
        expressions: vec![field_exists("FirstName"), field_exists("LastName")],
    };

    let o1 = json!({"Title": "Title!", "FirstName": "FirstName!", "LastName": "LastName!"});
    assert!(expression.is_match(&o1, &o1));

    let o2 = json!({"Title": "Title!", "FirstName": "FirstName!"});
    assert!(!expression.is_match(&o2, &o2));

    let o3 = json!({"Title": "Title!"});
    assert!(!expression.is_match(&o3, &o3));
}

#[test]
fn or_composite() {
    let expression = QueryExpression::Composite {
        operator: LogicalOperator::Or,
        expressions: vec![field_exists("FirstName"), field_exists("LastName")],
    };

    let o1 = json!({"Title": "Title!", "FirstName": "FirstName!", "LastName": "LastName!"});
    assert!(expression.is_match(&o1, &o1));

    let o2 = json!({"Title": "Title!", "FirstName": "FirstName!"});
    assert!(expression.is_match(&o2, &o2));

    let o3 = json!({"Title": "Title!"});
    assert!(!expression.is_match(&o3, &o3));
}

#[test]
fn regex_equals_over_array_elements() {
    let null = Value::Null;

    let e1 = elements_compare(QueryOperator::RegexEquals, json!("/foo.*d/"));
    assert!(e1.is_match(&null, &json!(["food"])));
    assert!(e1.is_match(&null, &json!(["fooood and drink"])));
    assert!(!e1.is_match(&null, &json!(["FOOD"])));
    assert!(!e1.is_match(&null, &json!(["foo", "foog", "good"])));

    let e2 = elements_compare(QueryOperator::RegexEquals, json!("/Foo.*d/i"));
    assert!(e2.is_match(&null, &json!(["food"])));
    assert!(e2.is_match(&null, &json!(["fooood and drink"])));
    assert!(e2.is_match(&null, &json!(["FOOD"])));
    assert!(!e2.is_match(&null, &json!(["foo", "foog", "good"])));
}

#[test]
fn regex_flag_delimiter_is_the_last_slash() {
    let null = Value::Null;

    let e1 = elements_compare(QueryOperator::RegexEquals, json!("/// comment/"));
    assert!(e1.is_match(&null, &json!(["// comment"])));
    assert!(!e1.is_match(&null, &json!(["//comment", "/ comment"])));

    let e2 = elements_compare(QueryOperator::RegexEquals, json!("/<tag>.*</tag>/i"));
    assert!(e2.is_match(&null, &json!(["<Tag>Test</Tag>", ""])));
    assert!(!e2.is_match(&null, &json!(["<tag>Test<tag>"])));
}

#[test]
fn less_than_operators() {
    let null = Value::Null;

    let e1 = elements_compare(QueryOperator::LessThan, json!(3));
    assert!(e1.is_match(&null, &json!([1, 2, 3, 4, 5])));
    assert!(e1.is_match(&null, &json!([2, 3, 4, 5])));
    assert!(!e1.is_match(&null, &json!([3, 4, 5])));
    assert!(!e1.is_match(&null, &json!([4, 5])));
    assert!(!e1.is_match(&null, &json!(["11", 5])));

    let e2 = elements_compare(QueryOperator::LessThanOrEquals, json!(3));
    assert!(e2.is_match(&null, &json!([1, 2, 3, 4, 5])));
    assert!(e2.is_match(&null, &json!([2, 3, 4, 5])));
    assert!(e2.is_match(&null, &json!([3, 4, 5])));
    assert!(!e2.is_match(&null, &json!([4, 5])));
}

#[test]
fn greater_than_operators() {
    let null = Value::Null;

    let e1 = elements_compare(QueryOperator::GreaterThan, json!(3));
    assert!(e1.is_match(&null, &json!(["2", "26"])));
    assert!(e1.is_match(&null, &json!([2, 26])));
    assert!(!e1.is_match(&null, &json!([2, 3])));
    assert!(!e1.is_match(&null, &json!(["2", "3"])));
    assert!(!e1.is_match(&null, &json!([null, false, true, [], "3"])));

    let e2 = elements_compare(QueryOperator::GreaterThanOrEquals, json!(3));
    assert!(e2.is_match(&null, &json!(["2", "26"])));
    assert!(e2.is_match(&null, &json!([2, 26])));
    assert!(e2.is_match(&null, &json!([2, 3])));
    assert!(e2.is_match(&null, &json!(["2", "3"])));
    assert!(!e2.is_match(&null, &json!([2, 1])));
    assert!(!e2.is_match(&null, &json!(["2", "1"])));
}

#[test]
fn boolean_string_forms_compare_loosely() {
    let doc = json!([{"v": true}, {"v": false}]);
    let expression = QueryExpression::Boolean {
        operator: QueryOperator::Equals,
        left: QueryOperand::Path(vec![PathFilter::Field(Some("v".to_string()))]),
        right: Some(QueryOperand::Literal(json!("True"))),
    };
    assert!(expression.is_match(&doc, &doc[0]));
    assert!(!expression.is_match(&doc, &doc[1]));
}

#[test]
fn missing_left_operand_never_matches() {
    let doc = json!({"other": 1});
    let expression = QueryExpression::Boolean {
        operator: QueryOperator::NotEquals,
        left: QueryOperand::Path(vec![PathFilter::Field(Some("v".to_string()))]),
        right: Some(QueryOperand::Literal(json!(1))),
    };
    assert!(!expression.is_match(&doc, &doc));
}
