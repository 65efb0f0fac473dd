mod adhoc;
mod driver;
mod invalid_result;
mod invalid_schema;

use adhoc::AdhocError;
use driver::DriverError;
use invalid_result::InvalidResult;
use invalid_schema::InvalidSchema;
use std::sync::Arc;

/// Builds an error from a format string.
#[macro_export]
macro_rules! err {
    ($($arg:tt)*) => {
        $crate::Error::from_args(format_args!($($arg)*))
    };
}

/// An error raised by a pivot operation.
///
/// Pivot operations add no failure modes of their own; most errors are
/// driver errors passed through untouched. The error is one pointer wide and
/// cheap to clone.
#[derive(Clone)]
pub struct Error {
    kind: Arc<ErrorKind>,
}

impl Error {
    fn kind(&self) -> &ErrorKind {
        &self.kind
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self.kind() {
            ErrorKind::Driver(err) => Some(err),
            _ => None,
        }
    }
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        core::fmt::Display::fmt(self.kind(), f)
    }
}

impl core::fmt::Debug for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        if f.alternate() {
            f.debug_struct("Error").field("kind", self.kind()).finish()
        } else {
            core::fmt::Display::fmt(self, f)
        }
    }
}

#[derive(Debug)]
enum ErrorKind {
    Adhoc(AdhocError),
    Driver(DriverError),
    InvalidResult(InvalidResult),
    InvalidSchema(InvalidSchema),
}

impl core::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        use self::ErrorKind::*;

        match self {
            Adhoc(err) => core::fmt::Display::fmt(err, f),
            Driver(err) => core::fmt::Display::fmt(err, f),
            InvalidResult(err) => core::fmt::Display::fmt(err, f),
            InvalidSchema(err) => core::fmt::Display::fmt(err, f),
        }
    }
}

impl From<ErrorKind> for Error {
    fn from(kind: ErrorKind) -> Error {
        Error {
            kind: Arc::new(kind),
        }
    }
}
