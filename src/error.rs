//! Error types and handling infrastructure for handctl.
//!
//! The codec itself is total: decode, encode, expand and the reserved-combination
//! checks never fail. Errors only come from the edges of the crate: parsing key
//! tokens and register literals, constructing named features, and loading
//! configuration files.

use thiserror::Error;

/// The main error type for handctl operations.
#[derive(Error, Debug)]
pub enum HandctlError {
    /// A required argument was absent or malformed
    #[error("Invalid argument: {message}")]
    InvalidArgument { message: String },

    /// A key token did not name any input key
    #[error("Unknown key token: {token}")]
    UnknownKey { token: String },

    /// A register literal could not be parsed into a single byte
    #[error("Invalid register value: {message}")]
    InvalidRegister { message: String },

    /// Configuration related errors
    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    /// File system related errors while reading configuration
    #[error("File operation failed: {message}")]
    FileError {
        message: String,
        #[source]
        source: std::io::Error,
    },
}

/// Standard Result type for handctl operations.
pub type Result<T> = std::result::Result<T, HandctlError>;

impl HandctlError {
    /// Create an InvalidArgument error with a descriptive message
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            message: message.into(),
        }
    }

    /// Create an UnknownKey error for the offending token
    pub fn unknown_key(token: impl Into<String>) -> Self {
        Self::UnknownKey {
            token: token.into(),
        }
    }

    /// Create an InvalidRegister error with a descriptive message
    pub fn invalid_register(message: impl Into<String>) -> Self {
        Self::InvalidRegister {
            message: message.into(),
        }
    }

    /// Create a ConfigError with a descriptive message
    pub fn config(message: impl Into<String>) -> Self {
        Self::ConfigError {
            message: message.into(),
        }
    }

    /// Create a FileError from an io::Error with additional context
    pub fn file_error(message: impl Into<String>, source: std::io::Error) -> Self {
        Self::FileError {
            message: message.into(),
            source,
        }
    }
}

impl From<std::io::Error> for HandctlError {
    fn from(err: std::io::Error) -> Self {
        match err.kind() {
            std::io::ErrorKind::NotFound => Self::FileError {
                message: "File not found".to_string(),
                source: err,
            },
            std::io::ErrorKind::PermissionDenied => Self::FileError {
                message: "Permission denied".to_string(),
                source: err,
            },
            _ => Self::FileError {
                message: "IO operation failed".to_string(),
                source: err,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_messages() {
        let unknown = HandctlError::unknown_key("nnn");
        assert_eq!(unknown.to_string(), "Unknown key token: nnn");

        let register = HandctlError::invalid_register("0x1FF does not fit in a byte");
        assert_eq!(
            register.to_string(),
            "Invalid register value: 0x1FF does not fit in a byte"
        );

        let argument = HandctlError::invalid_argument("feature identifier is empty");
        assert_eq!(
            argument.to_string(),
            "Invalid argument: feature identifier is empty"
        );
    }

    #[test]
    fn test_error_constructors() {
        assert!(matches!(
            HandctlError::config("bad toml"),
            HandctlError::ConfigError { .. }
        ));
        assert!(matches!(
            HandctlError::unknown_key("x"),
            HandctlError::UnknownKey { .. }
        ));
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err: HandctlError = io_err.into();

        match err {
            HandctlError::FileError { message, .. } => {
                assert_eq!(message, "File not found");
            }
            _ => panic!("Expected FileError variant"),
        }
    }
}
