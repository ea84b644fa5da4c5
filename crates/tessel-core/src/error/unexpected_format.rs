use super::Error;

/// Error when a wire value cannot be decoded.
///
/// This occurs when:
/// - An object carries more than one reserved `@` tag
/// - A reserved tag is mixed with ordinary keys
/// - A tag's payload has the wrong shape (`{"@ts": 5}`, bad base64, ...)
#[derive(Debug)]
pub(super) struct UnexpectedFormatError {
    message: Box<str>,
}

impl std::error::Error for UnexpectedFormatError {}

impl core::fmt::Display for UnexpectedFormatError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "unexpected format: {}", self.message)
    }
}

impl Error {
    /// Creates an unexpected format error.
    pub fn unexpected_format(message: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::UnexpectedFormat(UnexpectedFormatError {
            message: message.into().into(),
        }))
    }

    /// Returns `true` if this error is an unexpected format error.
    pub fn is_unexpected_format(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::UnexpectedFormat(_))
    }
}
