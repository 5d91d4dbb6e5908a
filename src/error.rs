//! Error types for fader configuration and parsing
//!
//! Fade requests themselves never fail. Only the fallible surfaces
//! (settings validation, TOML files, state names) report errors.

use std::fmt;
use std::io;
use thiserror::Error;

/// Result alias used across the crate
pub type Result<T> = std::result::Result<T, FaderError>;

/// A settings file that could not be parsed, with its location
#[derive(Error, Debug)]
pub struct ParseError {
    pub filename: String,
    pub message: String,
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Failed to parse {}: {}", self.filename, self.message)
    }
}

#[derive(Error, Debug)]
pub enum FaderError {
    /// A volume bound outside [0, 1] or not finite
    #[error("{name} must be within [0, 1], got {value}")]
    InvalidBound { name: &'static str, value: f32 },

    /// A fade duration that is negative or not finite
    #[error("time_to_fade must be a finite, non-negative number of seconds, got {0}")]
    InvalidDuration(f32),

    /// An unrecognized fade state name or index
    #[error("Invalid FadeState: {0}")]
    InvalidState(String),

    /// An unrecognized easing curve name
    #[error("Unknown fade curve: {0}")]
    UnknownCurve(String),

    #[error(transparent)]
    Parse(ParseError),

    #[error(transparent)]
    TomlDe(#[from] toml::de::Error),

    #[error(transparent)]
    TomlSer(#[from] toml::ser::Error),

    #[error(transparent)]
    Io(#[from] io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bound_message() {
        let err = FaderError::InvalidBound {
            name: "faded_in_value",
            value: 1.5,
        };
        assert_eq!(err.to_string(), "faded_in_value must be within [0, 1], got 1.5");
    }

    #[test]
    fn test_parse_error_message() {
        let err = FaderError::Parse(ParseError {
            filename: "fader.toml".to_string(),
            message: "expected `=`".to_string(),
        });
        assert_eq!(err.to_string(), "Failed to parse fader.toml: expected `=`");
    }

    #[test]
    fn test_io_conversion() {
        let io_err = io::Error::new(io::ErrorKind::PermissionDenied, "denied");
        let err: FaderError = io_err.into();
        assert!(matches!(err, FaderError::Io(_)));
    }
}
