//! Module for parsing list expressions into Node trees.
//!
//! Grammar: an expression is a signed decimal integer, or a parenthesized,
//! space-separated sequence of expressions. Text that is exactly one
//! parenthesized group denotes that group's contents; any other text is a
//! sequence whose elements form a list.

use std::borrow::Cow;
use std::fmt;

use lazy_static::lazy_static;
use log::{debug, trace};
use regex::Regex;

use self::ParseErrorReason::*;
use crate::config::ParserConfig;
use crate::error::{Error, ErrorKind};
use crate::sexp::{AtomValue, ConsList, HeapNode};


/// Creates a ParseError wrapped in Err.
macro_rules! parse_err {
    ($reason:expr, $offset:expr) => {
        Err(ParseError::new($reason, $offset))
    };
}


/// Parse text with the default configuration.
///
/// Ok(None) is the empty list, as in "()".
pub fn parse(text: &str) -> Result<Option<HeapNode>, ParseError> {
    Parser::new().parse(text)
}

/// Parse text, collapsing every failure to None.
///
/// Note that "()" also yields None; use parse to tell the two apart.
pub fn from_text(text: &str) -> Option<HeapNode> {
    parse(text).ok().flatten()
}


#[derive(Clone, Debug, Default)]
pub struct Parser {
    config: ParserConfig,
}

impl Parser {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: ParserConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ParserConfig {
        &self.config
    }

    pub fn parse(&self, text: &str) -> Result<Option<HeapNode>, ParseError> {
        let result = validate(text).and_then(|()| {
            let normalized = normalize(text);
            self.parse_expr(&normalized, 0, 0)
        });
        if let Err(err) = &result {
            debug!("Rejected {:?}: {}", text, err);
        }
        result
    }

    // Dispatch on text, which begins at offset in the normalized input.
    fn parse_expr(
        &self,
        text: &str,
        offset: usize,
        depth: usize,
    ) -> Result<Option<HeapNode>, ParseError> {
        trace!("Parsing {:?} at depth {}", text, depth);
        if depth > *self.config.max_depth() {
            return parse_err!(DepthOverflow, offset);
        }

        // Surrounding spaces carry no meaning.
        let start = text.len() - text.trim_start_matches(' ').len();
        let trimmed = text.trim_matches(' ');
        let offset = offset + start;

        if trimmed.starts_with('(') {
            let close = matching_paren(trimmed, offset)?;
            if close + 1 == trimmed.len() {
                return self.parse_expr(&trimmed[1..close], offset + 1, depth + 1);
            }
        }
        self.parse_sequence(trimmed, offset, depth)
    }

    // Each element of text becomes one link of the resulting spine.
    fn parse_sequence(
        &self,
        text: &str,
        offset: usize,
        depth: usize,
    ) -> Result<Option<HeapNode>, ParseError> {
        let bytes = text.as_bytes();
        let mut list = ConsList::new();
        let mut pos = 0;

        while pos < bytes.len() {
            match bytes[pos] {
                b' ' => pos += 1,
                b'(' => {
                    let close = pos + matching_paren(&text[pos..], offset + pos)?;
                    let body = &text[pos + 1..close];
                    list.push(self.parse_expr(body, offset + pos + 1, depth + 1)?);
                    pos = close + 1;
                }
                b')' => return parse_err!(UnmatchedClose, offset + pos),
                b'-' | b'0'..=b'9' => {
                    let end = text[pos..]
                        .find(|c: char| c == ' ' || c == '(' || c == ')')
                        .map_or(text.len(), |i| pos + i);
                    list.append(parse_atom(&text[pos..end], offset + pos)?);
                    pos = end;
                }
                c => return parse_err!(InvalidCharacter(c as char), offset + pos),
            }
        }
        Ok(list.release())
    }
}


/// Reject any character outside the grammar's alphabet, and blank input.
fn validate(text: &str) -> Result<(), ParseError> {
    if let Some((i, c)) = text
        .char_indices()
        .find(|&(_, c)| !(c.is_ascii_digit() || c == '-' || c == ' ' || c == '(' || c == ')'))
    {
        return parse_err!(InvalidCharacter(c), i);
    }
    if text.trim_matches(' ').is_empty() {
        return parse_err!(EmptyInput, 0);
    }
    Ok(())
}

/// Insert a space before each '(' that directly follows an atom or ')'.
pub fn normalize(text: &str) -> Cow<'_, str> {
    lazy_static! {
        static ref GLUED_OPEN: Regex = Regex::new(r"([^ (])\(").unwrap();
    }
    GLUED_OPEN.replace_all(text, "$1 (")
}

/// Index of the ')' closing the '(' at the start of text.
fn matching_paren(text: &str, offset: usize) -> Result<usize, ParseError> {
    let mut depth: usize = 0;
    for (i, b) in text.bytes().enumerate() {
        match b {
            b'(' => depth += 1,
            b')' => {
                if depth == 0 {
                    return parse_err!(UnmatchedClose, offset + i);
                }
                depth -= 1;
                if depth == 0 {
                    return Ok(i);
                }
            }
            _ => {}
        }
    }
    parse_err!(UnmatchedOpen, offset)
}

fn parse_atom(token: &str, offset: usize) -> Result<AtomValue, ParseError> {
    lazy_static! {
        static ref INTEGER: Regex = Regex::new(r"^-?[0-9]+$").unwrap();
    }

    if !INTEGER.is_match(token) {
        return parse_err!(InvalidAtom(token.to_string()), offset);
    }
    token
        .parse::<AtomValue>()
        .map_err(|_| ParseError::new(IntegerOverflow(token.to_string()), offset))
}


#[derive(Clone, Debug, PartialEq)]
pub enum ParseErrorReason {
    EmptyInput,
    /// The empty list where a Node is required.
    EmptyList,
    InvalidCharacter(char),
    InvalidAtom(String),
    IntegerOverflow(String),
    UnmatchedOpen,
    UnmatchedClose,
    DepthOverflow,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ParseError {
    reason: ParseErrorReason,
    // Byte offset into the normalized input.
    offset: usize,
}

impl ParseError {
    pub fn new(reason: ParseErrorReason, offset: usize) -> Self {
        Self { reason, offset }
    }

    pub fn reason(&self) -> &ParseErrorReason {
        &self.reason
    }

    pub fn offset(&self) -> usize {
        self.offset
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.describe())
    }
}

impl std::error::Error for ParseError {}

impl ErrorKind for ParseError {
    fn name(&self) -> &'static str {
        "ParseError"
    }

    fn describe(&self) -> String {
        let what = match &self.reason {
            EmptyInput => "empty input".to_string(),
            EmptyList => "empty list".to_string(),
            InvalidCharacter(c) => format!("invalid character {:?}", c),
            InvalidAtom(token) => format!("invalid atom {:?}", token),
            IntegerOverflow(token) => format!("integer out of range {:?}", token),
            UnmatchedOpen => "unmatched '('".to_string(),
            UnmatchedClose => "unmatched ')'".to_string(),
            DepthOverflow => "nesting too deep".to_string(),
        };
        format!("{} at offset {}", what, self.offset)
    }
}

impl From<ParseError> for Error {
    fn from(err: ParseError) -> Self {
        Error::new(Box::new(err))
    }
}


#[cfg(test)]
#[path = "./parser_test.rs"]
mod parser_test;
