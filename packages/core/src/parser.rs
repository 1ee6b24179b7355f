//! Recursive-descent compiler from path text to an ordered filter list
//!
//! Single pass, left to right, no backtracking. The boolean expression
//! grammar inside `[?(...)]` re-enters the path grammar for `@`/`$`
//! operands, terminated by a comparison operator, `)`, `&&` or `||`.
//! AND/OR chains accumulate left to right as parsed rather than through a
//! precedence table, so `a && b || c` groups as `And(a, Or(b, c))`.

use serde_json::Value;

use crate::ast::{LogicalOperator, PathFilter, QueryExpression, QueryOperand, QueryOperator};
use crate::error::PathSyntaxError;

type Result<T> = std::result::Result<T, PathSyntaxError>;

/// Parser state over the path expression's characters.
pub struct PathParser {
    chars: Vec<char>,
    index: usize,
}

impl PathParser {
    #[must_use]
    pub fn new(expression: &str) -> Self {
        Self {
            chars: expression.chars().collect(),
            index: 0,
        }
    }

    /// Compile the whole expression into a filter list. An empty or
    /// whitespace-only expression compiles to an empty list (the root
    /// itself); a leading `$` is consumed only when followed by `.` or `[`.
    pub fn parse(mut self) -> Result<Vec<PathFilter>> {
        let mut filters = Vec::new();
        self.eat_whitespace();
        if self.index == self.chars.len() {
            return Ok(filters);
        }
        let mut part_start = self.index;
        if self.chars[self.index] == '$' {
            match self.chars.get(self.index + 1) {
                None => return Ok(filters),
                Some(&next) if next == '.' || next == '[' => {
                    self.index += 1;
                    part_start = self.index;
                }
                Some(_) => {}
            }
        }
        if !self.parse_path(&mut filters, part_start, false)? {
            let stopped = self.index;
            self.eat_whitespace();
            if self.index < self.chars.len() {
                return Err(PathSyntaxError::unexpected_character(self.chars[stopped]));
            }
        }
        Ok(filters)
    }

    /// Parse path segments into `filters` until end of input or, in query
    /// context, an expression terminator. Returns whether the whole input
    /// was consumed.
    fn parse_path(
        &mut self,
        filters: &mut Vec<PathFilter>,
        mut part_start: usize,
        in_query: bool,
    ) -> Result<bool> {
        let mut scan = false;
        let mut following_indexer = false;
        let mut following_dot = false;
        let mut ended = false;
        while self.index < self.chars.len() && !ended {
            let current = self.chars[self.index];
            match current {
                '[' | '(' => {
                    if self.index > part_start {
                        let member = self.member_name(part_start, self.index);
                        filters.push(field_or_scan(member, scan));
                        scan = false;
                    }
                    let indexer = self.parse_indexer(current, scan)?;
                    filters.push(indexer);
                    scan = false;
                    part_start = self.index;
                    following_indexer = true;
                    following_dot = false;
                }
                ']' | ')' | ' ' => ended = true,
                '.' => {
                    if self.index > part_start {
                        let member = self.member_name(part_start, self.index);
                        filters.push(field_or_scan(member, scan));
                        scan = false;
                    }
                    if self.chars.get(self.index + 1) == Some(&'.') {
                        scan = true;
                        self.index += 1;
                    }
                    self.index += 1;
                    part_start = self.index;
                    following_indexer = false;
                    following_dot = true;
                }
                other => {
                    if in_query && matches!(other, '=' | '<' | '!' | '>' | '|' | '&') {
                        ended = true;
                    } else if following_indexer {
                        return Err(PathSyntaxError::unexpected_character_following_indexer(
                            other,
                        ));
                    } else {
                        self.index += 1;
                    }
                }
            }
        }
        let at_path_end = self.index == self.chars.len();
        if self.index > part_start {
            let text: String = self.chars[part_start..self.index].iter().collect();
            let trimmed = text.trim_end();
            let member = if trimmed == "*" {
                None
            } else {
                Some(trimmed.to_string())
            };
            filters.push(field_or_scan(member, scan));
        } else if following_dot && (at_path_end || in_query) {
            return Err(PathSyntaxError::unexpected_end());
        }
        Ok(at_path_end)
    }

    fn member_name(&self, start: usize, end: usize) -> Option<String> {
        let text: String = self.chars[start..end].iter().collect();
        if text == "*" {
            None
        } else {
            Some(text)
        }
    }

    /// Dispatch on the first character inside `[`: quoted names, a `?(...)`
    /// query, or the numeric index/slice grammar.
    fn parse_indexer(&mut self, open: char, scan: bool) -> Result<PathFilter> {
        self.index += 1;
        let close = if open == '[' { ']' } else { ')' };
        self.eat_whitespace();
        self.ensure_length(PathSyntaxError::open_indexer)?;
        match self.chars[self.index] {
            '\'' | '"' => self.parse_quoted_field(close, scan),
            '?' => self.parse_query(close, scan),
            _ => self.parse_array_indexer(close),
        }
    }

    fn parse_array_indexer(&mut self, close: char) -> Result<PathFilter> {
        let mut start = self.index;
        let mut end: Option<usize> = None;
        let mut indexes: Vec<i32> = Vec::new();
        let mut colon_count = 0u32;
        let mut slice_start: Option<i32> = None;
        let mut slice_end: Option<i32> = None;
        let mut slice_step: Option<i32> = None;

        while self.index < self.chars.len() {
            let current = self.chars[self.index];
            if current == ' ' {
                end = Some(self.index);
                self.eat_whitespace();
                continue;
            }
            if current == close {
                let length = end.unwrap_or(self.index) - start;
                self.index += 1;
                if !indexes.is_empty() {
                    if length == 0 {
                        return Err(PathSyntaxError::array_index_expected());
                    }
                    indexes.push(self.parse_index(start, length)?);
                    return Ok(PathFilter::IndexMultiple(indexes));
                }
                if colon_count > 0 {
                    if length > 0 {
                        let value = self.parse_index(start, length)?;
                        if colon_count == 1 {
                            slice_end = Some(value);
                        } else {
                            slice_step = Some(value);
                        }
                    }
                    return Ok(PathFilter::Slice {
                        start: slice_start,
                        end: slice_end,
                        step: slice_step,
                    });
                }
                if length == 0 {
                    return Err(PathSyntaxError::array_index_expected());
                }
                let index = self.parse_index(start, length)?;
                return Ok(PathFilter::Index(Some(index)));
            }
            if current == ',' {
                let length = end.unwrap_or(self.index) - start;
                if length == 0 {
                    return Err(PathSyntaxError::array_index_expected());
                }
                indexes.push(self.parse_index(start, length)?);
                self.index += 1;
                self.eat_whitespace();
                start = self.index;
                end = None;
            } else if current == '*' {
                self.index += 1;
                self.eat_whitespace();
                self.ensure_length(PathSyntaxError::open_indexer)?;
                if self.chars[self.index] != close {
                    return Err(PathSyntaxError::unexpected_indexer_character('*'));
                }
                self.index += 1;
                return Ok(PathFilter::Index(None));
            } else if current == ':' {
                let length = end.unwrap_or(self.index) - start;
                if length > 0 {
                    let value = self.parse_index(start, length)?;
                    match colon_count {
                        0 => slice_start = Some(value),
                        1 => slice_end = Some(value),
                        _ => return Err(PathSyntaxError::unexpected_indexer_character(':')),
                    }
                }
                colon_count += 1;
                self.index += 1;
                self.eat_whitespace();
                start = self.index;
                end = None;
            } else if !current.is_ascii_digit() && current != '-' {
                return Err(PathSyntaxError::unexpected_indexer_character(current));
            } else {
                // digits may not resume after embedded whitespace
                if end.is_some() {
                    return Err(PathSyntaxError::unexpected_indexer_character(current));
                }
                self.index += 1;
            }
        }
        Err(PathSyntaxError::open_indexer())
    }

    fn parse_index(&self, start: usize, length: usize) -> Result<i32> {
        let text: String = self.chars[start..start + length].iter().collect();
        text.parse()
            .map_err(|_| PathSyntaxError::array_index_expected())
    }

    fn parse_quoted_field(&mut self, close: char, scan: bool) -> Result<PathFilter> {
        let mut names: Vec<String> = Vec::new();
        while self.index < self.chars.len() {
            let quote = self.chars[self.index];
            let field = self.read_quoted_string(quote)?;
            self.eat_whitespace();
            self.ensure_length(PathSyntaxError::open_indexer)?;
            let current = self.chars[self.index];
            if current == close {
                self.index += 1;
                if names.is_empty() {
                    return Ok(if scan {
                        PathFilter::Scan(Some(field))
                    } else {
                        PathFilter::Field(Some(field))
                    });
                }
                names.push(field);
                return Ok(if scan {
                    PathFilter::ScanMultiple(names)
                } else {
                    PathFilter::FieldMultiple(names)
                });
            }
            if current == ',' {
                self.index += 1;
                self.eat_whitespace();
                names.push(field);
                match self.chars.get(self.index) {
                    Some('\'' | '"') => {}
                    Some(&other) => {
                        return Err(PathSyntaxError::unexpected_indexer_character(other));
                    }
                    None => return Err(PathSyntaxError::open_indexer()),
                }
            } else {
                return Err(PathSyntaxError::unexpected_indexer_character(current));
            }
        }
        Err(PathSyntaxError::open_indexer())
    }

    /// Read a quoted name or string literal; `self.index` sits on the
    /// opening quote. Only `\\`, `\'` and `\"` are recognized escapes.
    fn read_quoted_string(&mut self, quote: char) -> Result<String> {
        let mut text = String::new();
        self.index += 1;
        while self.index < self.chars.len() {
            let current = self.chars[self.index];
            if current == '\\' && self.index + 1 < self.chars.len() {
                self.index += 1;
                let escaped = self.chars[self.index];
                match escaped {
                    '\\' | '\'' | '"' => text.push(escaped),
                    other => return Err(PathSyntaxError::unknown_escape_character(other)),
                }
                self.index += 1;
            } else if current == quote {
                self.index += 1;
                return Ok(text);
            } else {
                self.index += 1;
                text.push(current);
            }
        }
        Err(PathSyntaxError::open_indexer())
    }

    fn parse_query(&mut self, close: char, scan: bool) -> Result<PathFilter> {
        self.index += 1;
        self.ensure_length(PathSyntaxError::open_query)?;
        if self.chars[self.index] != '(' {
            return Err(PathSyntaxError::unexpected_query_character(
                self.chars[self.index],
            ));
        }
        self.index += 1;
        let expression = self.parse_expression()?;
        // parse_expression leaves the index on the closing ')'
        self.index += 1;
        self.eat_whitespace();
        self.ensure_length(PathSyntaxError::open_indexer)?;
        if self.chars[self.index] != close {
            return Err(PathSyntaxError::unexpected_indexer_character(
                self.chars[self.index],
            ));
        }
        self.index += 1;
        Ok(if scan {
            PathFilter::QueryScan(expression)
        } else {
            PathFilter::Query(expression)
        })
    }

    /// Parse the expression body of `[?( ... )]` up to its closing `)`.
    ///
    /// Composites are kept on a stack of open `&&`/`||` groups: a new group
    /// opens whenever the connective changes, and the stack unwinds into a
    /// nested tree at the closing parenthesis. This reproduces left-to-right
    /// accumulation, not operator precedence.
    fn parse_expression(&mut self) -> Result<QueryExpression> {
        let mut stack: Vec<(LogicalOperator, Vec<QueryExpression>)> = Vec::new();
        while self.index < self.chars.len() {
            self.eat_whitespace();
            let left = self.parse_operand()?;
            self.eat_whitespace();
            self.ensure_length(PathSyntaxError::open_query)?;
            let (operator, right) = match self.chars[self.index] {
                ')' | '|' | '&' => (QueryOperator::Exists, None),
                _ => {
                    let operator = self.parse_operator()?;
                    self.eat_whitespace();
                    let right = self.parse_operand()?;
                    (operator, Some(right))
                }
            };
            let expression = QueryExpression::Boolean {
                operator,
                left,
                right,
            };
            self.eat_whitespace();
            self.ensure_length(PathSyntaxError::open_query)?;
            match self.chars[self.index] {
                ')' => {
                    let mut current = expression;
                    while let Some((operator, mut expressions)) = stack.pop() {
                        expressions.push(current);
                        current = QueryExpression::Composite {
                            operator,
                            expressions,
                        };
                    }
                    return Ok(current);
                }
                '&' => {
                    self.match_logical('&')?;
                    push_composite(&mut stack, LogicalOperator::And, expression);
                }
                '|' => {
                    self.match_logical('|')?;
                    push_composite(&mut stack, LogicalOperator::Or, expression);
                }
                other => {
                    return Err(PathSyntaxError::unexpected_query_character(other));
                }
            }
        }
        Err(PathSyntaxError::open_query())
    }

    fn parse_operand(&mut self) -> Result<QueryOperand> {
        self.eat_whitespace();
        self.ensure_length(PathSyntaxError::open_query)?;
        match self.chars[self.index] {
            '@' => {
                self.index += 1;
                self.parse_operand_path(Vec::new())
            }
            '$' => {
                self.index += 1;
                self.parse_operand_path(vec![PathFilter::Root])
            }
            quote @ ('\'' | '"') => Ok(QueryOperand::Literal(Value::String(
                self.read_quoted_string(quote)?,
            ))),
            '/' => Ok(QueryOperand::Literal(Value::String(
                self.read_regex_literal()?,
            ))),
            't' => {
                self.match_keyword("true")?;
                Ok(QueryOperand::Literal(Value::Bool(true)))
            }
            'f' => {
                self.match_keyword("false")?;
                Ok(QueryOperand::Literal(Value::Bool(false)))
            }
            'n' => {
                self.match_keyword("null")?;
                Ok(QueryOperand::Literal(Value::Null))
            }
            digit if digit.is_ascii_digit() || digit == '-' => self.read_number_literal(),
            other => Err(PathSyntaxError::unexpected_query_character(other)),
        }
    }

    fn parse_operand_path(&mut self, mut filters: Vec<PathFilter>) -> Result<QueryOperand> {
        if self.parse_path(&mut filters, self.index, true)? {
            return Err(PathSyntaxError::open_query());
        }
        Ok(QueryOperand::Path(filters))
    }

    fn parse_operator(&mut self) -> Result<QueryOperator> {
        if self.match_text("===") {
            return Ok(QueryOperator::StrictEquals);
        }
        if self.match_text("==") {
            return Ok(QueryOperator::Equals);
        }
        if self.match_text("=~") {
            return Ok(QueryOperator::RegexEquals);
        }
        if self.match_text("!==") {
            return Ok(QueryOperator::StrictNotEquals);
        }
        if self.match_text("!=") || self.match_text("<>") {
            return Ok(QueryOperator::NotEquals);
        }
        if self.match_text("<=") {
            return Ok(QueryOperator::LessThanOrEquals);
        }
        if self.match_text("<") {
            return Ok(QueryOperator::LessThan);
        }
        if self.match_text(">=") {
            return Ok(QueryOperator::GreaterThanOrEquals);
        }
        if self.match_text(">") {
            return Ok(QueryOperator::GreaterThan);
        }
        Err(PathSyntaxError::unexpected_query_character(
            self.chars[self.index],
        ))
    }

    /// Read a `/pattern/flags` literal as its raw text, `self.index` on the
    /// opening `/`. `\`-escapes skip the next character; trailing letters
    /// after the closing `/` are the flags.
    fn read_regex_literal(&mut self) -> Result<String> {
        let start = self.index;
        self.index += 1;
        while self.index < self.chars.len() {
            match self.chars[self.index] {
                '\\' if self.index + 1 < self.chars.len() => self.index += 2,
                '/' => {
                    self.index += 1;
                    while self
                        .chars
                        .get(self.index)
                        .is_some_and(|c| c.is_alphabetic())
                    {
                        self.index += 1;
                    }
                    return Ok(self.chars[start..self.index].iter().collect());
                }
                _ => self.index += 1,
            }
        }
        Err(PathSyntaxError::open_regex())
    }

    fn read_number_literal(&mut self) -> Result<QueryOperand> {
        let start = self.index;
        while self.index < self.chars.len()
            && !matches!(self.chars[self.index], ' ' | ')' | '&' | '|')
        {
            self.index += 1;
        }
        let text: String = self.chars[start..self.index].iter().collect();
        let number = if let Ok(integer) = text.parse::<i64>() {
            Some(serde_json::Number::from(integer))
        } else {
            text.parse::<f64>()
                .ok()
                .and_then(serde_json::Number::from_f64)
        };
        match number {
            Some(number) => Ok(QueryOperand::Literal(Value::Number(number))),
            None => Err(PathSyntaxError::unexpected_query_character(
                self.chars[start],
            )),
        }
    }

    fn match_keyword(&mut self, keyword: &str) -> Result<()> {
        if self.match_text(keyword) {
            Ok(())
        } else {
            Err(PathSyntaxError::unexpected_query_character(
                self.chars[self.index],
            ))
        }
    }

    fn match_logical(&mut self, connective: char) -> Result<()> {
        if self.chars.get(self.index) == Some(&connective)
            && self.chars.get(self.index + 1) == Some(&connective)
        {
            self.index += 2;
            Ok(())
        } else {
            Err(PathSyntaxError::unexpected_query_character(connective))
        }
    }

    fn match_text(&mut self, text: &str) -> bool {
        let candidate = &self.chars[self.index..];
        if candidate.len() >= text.chars().count()
            && text.chars().zip(candidate).all(|(a, &b)| a == b)
        {
            self.index += text.chars().count();
            true
        } else {
            false
        }
    }

    fn eat_whitespace(&mut self) {
        while self.chars.get(self.index) == Some(&' ') {
            self.index += 1;
        }
    }

    fn ensure_length(&self, error: fn() -> PathSyntaxError) -> Result<()> {
        if self.index < self.chars.len() {
            Ok(())
        } else {
            Err(error())
        }
    }
}

fn field_or_scan(member: Option<String>, scan: bool) -> PathFilter {
    if scan {
        PathFilter::Scan(member)
    } else {
        PathFilter::Field(member)
    }
}

fn push_composite(
    stack: &mut Vec<(LogicalOperator, Vec<QueryExpression>)>,
    operator: LogicalOperator,
    expression: QueryExpression,
) {
    match stack.last_mut() {
        Some((top, expressions)) if *top == operator => expressions.push(expression),
        _ => stack.push((operator, vec![expression])),
    }
}
