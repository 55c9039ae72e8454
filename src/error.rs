//! Representation of errors raised by conscell.
//!
//! Recoverable errors (malformed text, io) are values: anything implementing
//! ErrorKind can be carried by an Error. Contract violations are not errors
//! in this sense; they go through fatal! and never return.

use std::fmt;

#[doc(hidden)]
pub use ::log;


/// Reports a contract violation and panics.
///
/// Reserved for programmer misuse (e.g. reading the value of a Pair), never
/// for malformed input.
#[macro_export]
macro_rules! fatal {
    ($($arg:tt)+) => {{
        $crate::error::log::error!("Fatal error: {}", format_args!($($arg)+));
        panic!("Fatal error: {}", format_args!($($arg)+))
    }};
}


pub struct Error {
    kind: Box<dyn ErrorKind>,
}

pub trait ErrorKind: fmt::Debug {
    /// Short, stable name of the error category.
    fn name(&self) -> &'static str;

    fn describe(&self) -> String;
}


impl Error {
    pub fn new(kind: Box<dyn ErrorKind>) -> Self {
        Self { kind }
    }

    pub fn kind(&self) -> &dyn ErrorKind {
        &*self.kind
    }

    pub fn consume(self) -> Box<dyn ErrorKind> {
        self.kind
    }
}

impl PartialEq for Error {
    /// Compare kind.
    fn eq(&self, other: &Self) -> bool {
        self.kind().name() == other.kind().name()
            && self.kind().describe() == other.kind().describe()
    }
}

impl fmt::Display for dyn ErrorKind + '_ {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.name(), self.describe())
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.kind())
    }
}

impl fmt::Debug for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.kind)
    }
}


impl std::error::Error for Error {}
