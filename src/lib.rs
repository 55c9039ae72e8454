//! Minimal S-expression engine over integer atoms.
//!
//! Trees are built from cons cells (see sexp::Node), parsed from text with
//! parser::parse, and rendered back to canonical text through Display.
//!
//! Note that this crate does *not* setup logging; clients should take care of
//! that. See: https://github.com/rust-lang/log#in-executables.

#[macro_use]
pub mod error;
#[macro_use]
pub mod sexp;

pub mod config;
pub mod parser;
pub mod std_error;

pub mod prelude {
    pub use crate::config::ParserConfig;
    pub use crate::error::{Error, ErrorKind};
    pub use crate::parser::{from_text, parse, ParseError, ParseErrorReason, Parser};
    pub use crate::sexp::{
        atom, cons, deep_copy, first, fold, free, is_atomic, length, list_of, rest, sum, to_text,
        value, AtomValue, Cons, ConsList, HeapNode, IntoElement, Node,
    };
    pub use crate::std_error::StdError;
    // Macros.
    pub use crate::list;
}
