mod adhoc;
mod bad_request;
mod error_data;
mod internal;
mod method_not_allowed;
mod not_found;
mod permission_denied;
mod request_failure;
mod transport;
mod unauthorized;
mod unavailable;
mod unexpected;
mod unexpected_format;

pub use error_data::{ErrorData, Failure, PathSegment};

use adhoc::AdhocError;
use request_failure::RequestFailure;
use std::sync::Arc;
use transport::TransportError;
use unavailable::UnavailableError;
use unexpected::UnexpectedError;
use unexpected_format::UnexpectedFormatError;

use crate::RequestResult;

/// Returns early with an adhoc [`Error`] built from a format string.
#[macro_export]
macro_rules! bail {
    ($($arg:tt)*) => {
        return Err($crate::Error::from_args(format_args!($($arg)*)))
    };
}

/// Builds an adhoc [`Error`] from a format string.
#[macro_export]
macro_rules! err {
    ($($arg:tt)*) => {
        $crate::Error::from_args(format_args!($($arg)*))
    };
}

/// An error that can occur in Tessel.
///
/// Errors raised from an HTTP exchange carry the [`RequestResult`] of that
/// exchange, reachable through [`Error::request_result`].
#[derive(Clone)]
pub struct Error {
    inner: Option<Arc<ErrorInner>>,
}

#[derive(Debug)]
struct ErrorInner {
    kind: ErrorKind,
    cause: Option<Error>,
}

impl Error {
    /// Adds context to this error.
    ///
    /// Context is displayed in reverse order: the most recently added context is shown first,
    /// followed by earlier context, ending with the root cause.
    #[inline(always)]
    pub fn context(self, consequent: impl IntoError) -> Error {
        self.context_impl(consequent.into_error())
    }

    #[inline(never)]
    #[cold]
    fn context_impl(self, consequent: Error) -> Error {
        let mut err = consequent;
        if err.inner.is_none() {
            err = Error::from(ErrorKind::Unknown);
        }
        let inner = err.inner.as_mut().unwrap();
        assert!(
            inner.cause.is_none(),
            "consequent error must not already have a cause"
        );
        Arc::get_mut(inner).unwrap().cause = Some(self);
        err
    }

    /// The error this one was raised in the context of, if any.
    pub fn cause(&self) -> Option<&Error> {
        self.inner.as_ref().and_then(|inner| inner.cause.as_ref())
    }

    fn chain(&self) -> impl Iterator<Item = &Error> {
        let mut err = self;
        core::iter::once(err).chain(core::iter::from_fn(move || {
            err = err.cause()?;
            Some(err)
        }))
    }

    fn kind(&self) -> &ErrorKind {
        self.inner
            .as_ref()
            .map(|inner| &inner.kind)
            .unwrap_or(&ErrorKind::Unknown)
    }

    fn request_failure(&self) -> Option<&RequestFailure> {
        use self::ErrorKind::*;

        match self.kind() {
            BadRequest(failure)
            | Unauthorized(failure)
            | PermissionDenied(failure)
            | NotFound(failure)
            | MethodNotAllowed(failure)
            | Internal(failure) => Some(failure),
            Unavailable(err) => err.failure.as_ref(),
            _ => None,
        }
    }

    /// The structured errors decoded from the response's error envelope.
    ///
    /// Empty for errors that did not come from a well-formed error envelope.
    pub fn errors(&self) -> &[ErrorData] {
        self.request_failure()
            .map(|failure| &failure.errors[..])
            .unwrap_or(&[])
    }

    /// Code of the first error in the envelope.
    pub fn code(&self) -> Option<&str> {
        self.errors().first().map(|data| &data.code[..])
    }

    /// Description of the first error in the envelope.
    pub fn description(&self) -> Option<&str> {
        self.errors().first().map(|data| &data.description[..])
    }

    /// The HTTP exchange this error was raised from.
    pub fn request_result(&self) -> Option<&RequestResult> {
        match self.kind() {
            ErrorKind::Unexpected(err) => Some(&err.result),
            _ => self.request_failure().map(|failure| &*failure.result),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self.kind() {
            ErrorKind::Transport(err) => Some(err),
            ErrorKind::Anyhow(err) => Some(err.as_ref()),
            _ => None,
        }
    }
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        let mut it = self.chain().peekable();
        while let Some(err) = it.next() {
            core::fmt::Display::fmt(err.kind(), f)?;
            if it.peek().is_some() {
                f.write_str(": ")?;
            }
        }
        Ok(())
    }
}

impl core::fmt::Debug for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        if !f.alternate() {
            core::fmt::Display::fmt(self, f)
        } else {
            let Some(ref inner) = self.inner else {
                return f.debug_struct("Error").field("kind", &"None").finish();
            };
            f.debug_struct("Error")
                .field("kind", &inner.kind)
                .field("cause", &inner.cause)
                .finish()
        }
    }
}

#[derive(Debug)]
enum ErrorKind {
    Anyhow(anyhow::Error),
    Adhoc(AdhocError),
    BadRequest(RequestFailure),
    Unauthorized(RequestFailure),
    PermissionDenied(RequestFailure),
    NotFound(RequestFailure),
    MethodNotAllowed(RequestFailure),
    Internal(RequestFailure),
    Unavailable(UnavailableError),
    Unexpected(UnexpectedError),
    UnexpectedFormat(UnexpectedFormatError),
    Transport(TransportError),
    Unknown,
}

impl core::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        use self::ErrorKind::*;

        match self {
            Anyhow(err) => core::fmt::Display::fmt(err, f),
            Adhoc(err) => core::fmt::Display::fmt(err, f),
            BadRequest(failure) => write!(f, "bad request: {failure}"),
            Unauthorized(failure) => write!(f, "unauthorized: {failure}"),
            PermissionDenied(failure) => write!(f, "permission denied: {failure}"),
            NotFound(failure) => write!(f, "not found: {failure}"),
            MethodNotAllowed(failure) => write!(f, "method not allowed: {failure}"),
            Internal(failure) => write!(f, "internal error: {failure}"),
            Unavailable(err) => core::fmt::Display::fmt(err, f),
            Unexpected(err) => core::fmt::Display::fmt(err, f),
            UnexpectedFormat(err) => core::fmt::Display::fmt(err, f),
            Transport(err) => core::fmt::Display::fmt(err, f),
            Unknown => f.write_str("unknown tessel error"),
        }
    }
}

impl From<ErrorKind> for Error {
    fn from(kind: ErrorKind) -> Error {
        Error {
            inner: Some(Arc::new(ErrorInner { kind, cause: None })),
        }
    }
}

impl From<anyhow::Error> for Error {
    fn from(err: anyhow::Error) -> Error {
        Error::from(ErrorKind::Anyhow(err))
    }
}

/// Trait for types that can be converted into an Error.
pub trait IntoError {
    /// Converts this type into an Error.
    fn into_error(self) -> Error;
}

impl IntoError for Error {
    #[inline(always)]
    fn into_error(self) -> Error {
        self
    }
}
