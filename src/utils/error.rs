use std::error;
use std::fmt;
use std::result;

use log::SetLoggerError;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ErrorKind {
    ActorNotFound,
    InvalidArgument,
    Logger,
}

#[derive(Debug)]
pub struct Error {
    kind: ErrorKind,
    error_message: String,
}

pub type Result<T> = result::Result<T, Error>;

impl Error {
    pub fn new(kind: ErrorKind, error_message: String) -> Error {
        Error {
            kind: kind,
            error_message: error_message,
        }
    }

    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    pub fn message(&self) -> &str {
        &self.error_message
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.error_message)
    }
}

impl error::Error for Error {}

impl From<SetLoggerError> for Error {
    fn from(e: SetLoggerError) -> Error {
        Error::new(ErrorKind::Logger, format!("Failed to set up logger: {}", e))
    }
}

impl From<clap::Error> for Error {
    fn from(e: clap::Error) -> Error {
        Error::new(ErrorKind::InvalidArgument, e.to_string())
    }
}
