use crate::error::{Error, ErrorKind};


/// Encapsulation of Errors in rust's std module.
#[derive(Debug)]
pub enum StdError {
    Io(std::io::Error),
}

impl ErrorKind for StdError {
    fn name(&self) -> &'static str {
        match self {
            Self::Io(_) => "IoError",
        }
    }

    fn describe(&self) -> String {
        match self {
            Self::Io(err) => err.to_string(),
        }
    }
}

/// Allow for io::Errors to be used seamlessly with conscell::Errors.
impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::new(Box::new(StdError::Io(err)))
    }
}
