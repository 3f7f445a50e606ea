use failure::{Backtrace, Context, Fail};
use std::fmt;

#[derive(Debug)]
pub(crate) struct Error {
    inner: Context<ErrorKind>,
}

#[derive(Debug, Clone, PartialEq, Fail)]
pub(crate) enum ErrorKind {
    #[fail(display = "unknown form: {}", _0)]
    UnknownForm(String),
    #[fail(display = "unbound variable: {}", _0)]
    UnboundVariable(String),
    #[fail(display = "type mismatch: {}", _0)]
    TypeMismatch(String),
    #[fail(display = "recursion limit of {} frames exceeded", _0)]
    RecursionLimit(usize),
}

impl Error {
    pub(crate) fn kind(&self) -> &ErrorKind {
        self.inner.get_context()
    }
}

impl Fail for Error {
    fn cause(&self) -> Option<&dyn Fail> {
        self.inner.cause()
    }

    fn backtrace(&self) -> Option<&Backtrace> {
        self.inner.backtrace()
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.inner, f)
    }
}

impl From<ErrorKind> for Error {
    fn from(kind: ErrorKind) -> Error {
        Error {
            inner: Context::new(kind),
        }
    }
}

impl From<Context<ErrorKind>> for Error {
    fn from(inner: Context<ErrorKind>) -> Error {
        Error { inner }
    }
}
