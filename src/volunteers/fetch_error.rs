use std::error::Error;
use std::fmt;

/// The single failure kind of a volunteer fetch.
///
/// Transport errors, non-success statuses and payload mismatches all
/// collapse into one human-readable message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchFailure {
    message: String,
}

impl FetchFailure {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    pub fn network(err: impl fmt::Display) -> Self {
        Self::new(format!("Network error: {err}"))
    }

    pub fn status(code: u16) -> Self {
        Self::new(format!("Request failed with status code {code}"))
    }

    pub fn payload(err: impl fmt::Display) -> Self {
        Self::new(format!("Unexpected response payload: {err}"))
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for FetchFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

impl Error for FetchFailure {}
