//! Syntax trees for compiled paths and boolean filter expressions
//!
//! Everything here is built once by the parser and never mutated afterwards.
//! The filter catalog is grammar-determined and closed, so the variants are
//! matched exhaustively throughout the evaluator.

use serde_json::Value;

/// One stage of a compiled path pipeline.
///
/// Each variant consumes a lazy stream of candidates and produces another;
/// the pipeline is the left-to-right fold of a `Vec<PathFilter>` over the
/// seed stream.
#[derive(Debug, Clone, PartialEq)]
pub enum PathFilter {
    /// `$` — ignores its input and re-anchors the stream at the document root
    Root,
    /// `.name` / `['name']` — object property access; `None` is the `*` wildcard
    Field(Option<String>),
    /// `['a','b']` — several property names, caller order, duplicates kept
    FieldMultiple(Vec<String>),
    /// `[n]` — array index; `None` is the `[*]` wildcard
    Index(Option<i32>),
    /// `[1,4]` — several array indexes, caller order
    IndexMultiple(Vec<i32>),
    /// `[start:end:step]` — Python-style slice; omitted parts are `None`
    Slice {
        start: Option<i32>,
        end: Option<i32>,
        step: Option<i32>,
    },
    /// `..name` / `..*` — recursive descent matched by originating property name
    Scan(Option<String>),
    /// `..['a','b']` — recursive descent over several property names
    ScanMultiple(Vec<String>),
    /// `[?(expr)]` — boolean filter over immediate children
    Query(QueryExpression),
    /// `..[?(expr)]` — boolean filter over self and every descendant
    QueryScan(QueryExpression),
}

/// Comparison operator of a boolean query expression.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueryOperator {
    /// `==` — loose equality with string coercion
    Equals,
    /// `!=` / `<>`
    NotEquals,
    /// bare operand, no comparison — true when the operand resolves non-empty
    Exists,
    /// `<`
    LessThan,
    /// `<=`
    LessThanOrEquals,
    /// `>`
    GreaterThan,
    /// `>=`
    GreaterThanOrEquals,
    /// `=~` — match against a `/pattern/flags` regex literal
    RegexEquals,
    /// `===` — kinds must match, no coercion
    StrictEquals,
    /// `!==`
    StrictNotEquals,
}

/// Logical connective of a composite expression.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogicalOperator {
    /// `&&` — all children must match
    And,
    /// `||` — at least one child must match
    Or,
}

/// Operand of a boolean query expression.
#[derive(Debug, Clone, PartialEq)]
pub enum QueryOperand {
    /// A literal JSON value written in the expression.
    Literal(Value),
    /// An owned `@`- or `$`-rooted sub-path, evaluated per candidate through
    /// the filter pipeline. Root-anchored operands carry a leading
    /// [`PathFilter::Root`].
    Path(Vec<PathFilter>),
}

/// A boolean filter expression inside `[?(...)]`.
///
/// Expression trees are built bottom-up during parsing and exclusively own
/// their operand filter lists; no sharing or cycles are possible.
#[derive(Debug, Clone, PartialEq)]
pub enum QueryExpression {
    /// A single comparison (or existence test when `right` is absent).
    Boolean {
        operator: QueryOperator,
        left: QueryOperand,
        right: Option<QueryOperand>,
    },
    /// An `&&`/`||` combination of sub-expressions, grouped exactly as the
    /// parser accumulated them left to right.
    Composite {
        operator: LogicalOperator,
        expressions: Vec<QueryExpression>,
    },
}
