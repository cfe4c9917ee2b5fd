//! Error types for the redsnap library.

use std::fmt;

/// Result type used throughout the library.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while fetching, parsing, or saving a thread.
///
/// Missing or malformed *fields* inside a thread are never errors; they
/// degrade to the documented defaults. Only the overall response shape and
/// the surrounding I/O can fail.
#[derive(Debug)]
pub enum Error {
    /// The given URL does not point at a Reddit thread.
    InvalidUrl(String),

    /// The API response does not have the expected two-listing shape.
    Structure(&'static str),

    /// HTTP failure while talking to Reddit, including non-success
    /// statuses and bodies that are not JSON.
    Http(reqwest::Error),

    /// Serialization failure while rendering the output document.
    Json(serde_json::Error),

    /// I/O failure while writing the output file.
    Io(std::io::Error),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidUrl(url) => write!(f, "not a Reddit thread URL: {url}"),
            Error::Structure(msg) => write!(f, "unexpected response shape: {msg}"),
            Error::Http(err) => write!(f, "request failed: {err}"),
            Error::Json(err) => write!(f, "could not serialize thread: {err}"),
            Error::Io(err) => write!(f, "could not write output: {err}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Http(err) => Some(err),
            Error::Json(err) => Some(err),
            Error::Io(err) => Some(err),
            Error::InvalidUrl(_) | Error::Structure(_) => None,
        }
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        Error::Http(err)
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Json(err)
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err)
    }
}
