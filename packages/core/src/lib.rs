//! JSONPath query engine over immutable `serde_json` documents
//!
//! A path expression such as `$.store.book[?(@.price<10)]..author` is
//! compiled once into an ordered pipeline of filters, then evaluated lazily
//! against a document root to produce zero or more matching nodes. A
//! compiled path touches no shared mutable state during evaluation and can
//! be reused freely across threads and documents.
//!
//! # Features
//!
//! - Field, wildcard, multi-field, index, multi-index and slice selectors
//! - Recursive descent (`..`) variants of the name selectors
//! - Boolean filter expressions (`[?(...)]`) with comparison, regex and
//!   logical operators, including `@`/`$`-rooted sub-path operands
//! - Lazy, pull-based evaluation with short-circuiting existence tests
//! - Opt-in evaluation errors via the `error_when_no_match` flag
//!
//! # Examples
//!
//! ```rust
//! use docpath_core::path::JsonDocumentPath;
//! use serde_json::json;
//!
//! let doc = json!({"persons": [{"age": "26"}, {"age": "2"}]});
//! let path = JsonDocumentPath::compile("$.persons[?(@.age > 3)]").unwrap();
//! let matches: Vec<_> = path
//!     .evaluate_all(&doc, false)
//!     .collect::<Result<_, _>>()
//!     .unwrap();
//! assert_eq!(matches.len(), 1);
//! ```

#![deny(unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]

pub mod ast;
pub mod element;
pub mod error;
pub mod expression;
pub mod filter;
pub mod parser;
pub mod path;

pub use self::{
    ast::{LogicalOperator, PathFilter, QueryExpression, QueryOperand, QueryOperator},
    error::{Error, EvalError, PathSyntaxError},
    filter::{Candidate, CandidateStream},
    parser::PathParser,
    path::JsonDocumentPath,
};
