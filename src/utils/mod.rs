mod error;

pub use self::error::{Error, ErrorKind, Result};
