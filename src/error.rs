//! Error reporting for the HTTP client.
//!
//! Failures are classified by [`ErrorKind`] and carry a short diagnostic
//! message in fixed-capacity storage. Two errors compare equal when their
//! kinds match; the message is informational only.

use core::fmt::Write;

use heapless::String;

/// Maximum length of the diagnostic text carried by an [`Error`].
pub const MAX_ERROR_LEN: usize = 64;

/// Classifies why a connection attempt or an in-flight request failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Transport failure, request serialization overflow, or a malformed
    /// response from the peer.
    Client,
    /// The server went silent: no response data arrived within the idle
    /// threshold after the connection was established.
    RequestTimeout,
    /// The transport gave up waiting for the peer to acknowledge data that
    /// was already sent.
    NetworkTimeout,
}

/// A failure recorded by the client and reported through its error callback.
///
/// The absence of an error is expressed as `Option<Error>::None`, never as a
/// dedicated variant.
#[derive(Debug, Clone)]
pub struct Error {
    kind: ErrorKind,
    message: String<MAX_ERROR_LEN>,
}

impl Error {
    /// Creates an error of the given kind. Messages longer than
    /// [`MAX_ERROR_LEN`] are truncated.
    pub fn new(kind: ErrorKind, message: &str) -> Self {
        let mut text = String::new();
        for c in message.chars() {
            if text.push(c).is_err() {
                break;
            }
        }
        Self {
            kind,
            message: text,
        }
    }

    /// Builds a timeout error with a `<reason> after <millis>` diagnostic.
    pub(crate) fn timeout(kind: ErrorKind, reason: &str, millis: u32) -> Self {
        let mut text = String::new();
        let _ = write!(text, "{} after {}", reason, millis);
        Self {
            kind,
            message: text,
        }
    }

    /// The failure classification.
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// Human-readable diagnostic text. Not part of equality.
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl PartialEq for Error {
    fn eq(&self, other: &Self) -> bool {
        self.kind == other.kind
    }
}

impl PartialEq<ErrorKind> for Error {
    fn eq(&self, other: &ErrorKind) -> bool {
        self.kind == *other
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for ErrorKind {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            ErrorKind::Client => defmt::write!(fmt, "Client"),
            ErrorKind::RequestTimeout => defmt::write!(fmt, "RequestTimeout"),
            ErrorKind::NetworkTimeout => defmt::write!(fmt, "NetworkTimeout"),
        }
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for Error {
    fn format(&self, fmt: defmt::Formatter) {
        defmt::write!(fmt, "{}: {}", self.kind, self.message.as_str());
    }
}
