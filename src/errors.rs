use std::error::Error;
use std::fmt;

// ---------------------------------------------
// Error Handling
// ---------------------------------------------
//
// The engine core is infallible; errors only come out of the validation
// layer (illegal player moves) and coordinate parsing.

#[derive(Debug, Clone)]
pub struct TrackerError(String);

pub type TrackerResult<T> = std::result::Result<T, TrackerError>;

impl From<String> for TrackerError {
    fn from(s: String) -> TrackerError {
        TrackerError(s)
    }
}

impl From<&str> for TrackerError {
    fn from(s: &str) -> TrackerError {
        TrackerError(s.to_string())
    }
}

impl Error for TrackerError {}

impl fmt::Display for TrackerError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Tracker error: {}", self.0)
    }
}
