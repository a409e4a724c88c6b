//! Error handling types

use thiserror::Error;

/// Result type alias for operations that can fail
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for opconf
///
/// The first three variants form the option validation taxonomy. They are
/// raised synchronously while an operation's options are being parsed, before
/// anything is sent.
#[derive(Error, Debug)]
pub enum Error {
    /// Option name outside the fixed set of operation options
    #[error("Unknown option: {key}")]
    UnknownOption {
        /// The unrecognized option name
        key: String,
    },

    /// Option value has the wrong type
    #[error("Invalid type for option '{key}': expected {expected}, found {found}")]
    InvalidType {
        /// The option name
        key: String,
        /// Human readable description of the expected type
        expected: &'static str,
        /// Human readable description of the supplied type
        found: String,
    },

    /// Option value has the right type but fails a range or format constraint
    #[error("Invalid value for option '{key}': {message}")]
    InvalidValue {
        /// The option name
        key: String,
        /// Description of the violated constraint
        message: String,
    },

    /// Invalid argument provided to a function
    #[error("Invalid argument: {message}")]
    InvalidArgument {
        /// Description of the invalid argument
        message: String,
    },

    /// Configuration-related error
    #[error("Configuration error: {message}")]
    Configuration {
        /// Description of the configuration error
        message: String,
        /// Optional source error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// I/O operation error (with context)
    #[error("I/O error: {message}")]
    Io {
        /// Description of the I/O error
        message: String,
        /// Optional source error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// JSON parsing or serialization error
    #[error("JSON parsing error: {source}")]
    Json {
        /// The underlying JSON error
        #[from]
        source: serde_json::Error,
    },
}

// Option validation errors
impl Error {
    /// Create an unknown option error
    pub fn unknown_option<S: Into<String>>(key: S) -> Self {
        Self::UnknownOption { key: key.into() }
    }

    /// Create an invalid type error
    pub fn invalid_type<K: Into<String>, F: Into<String>>(
        key: K,
        expected: &'static str,
        found: F,
    ) -> Self {
        Self::InvalidType {
            key: key.into(),
            expected,
            found: found.into(),
        }
    }

    /// Create an invalid value error
    pub fn invalid_value<K: Into<String>, M: Into<String>>(key: K, message: M) -> Self {
        Self::InvalidValue {
            key: key.into(),
            message: message.into(),
        }
    }

    /// Name of the offending option, for validation errors
    pub fn option_key(&self) -> Option<&str> {
        match self {
            Self::UnknownOption { key }
            | Self::InvalidType { key, .. }
            | Self::InvalidValue { key, .. } => Some(key),
            _ => None,
        }
    }

    /// Whether this error came from option validation
    pub fn is_validation(&self) -> bool {
        self.option_key().is_some()
    }
}

// Basic error creation methods
impl Error {
    /// Create an invalid argument error
    pub fn invalid_argument<S: Into<String>>(message: S) -> Self {
        Self::InvalidArgument {
            message: message.into(),
        }
    }

    /// Create a configuration error
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Configuration {
            message: message.into(),
            source: None,
        }
    }

    /// Create a configuration error with source
    pub fn config_with_source<S: Into<String>, E: std::error::Error + Send + Sync + 'static>(
        message: S,
        source: E,
    ) -> Self {
        Self::Configuration {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create an I/O error with source
    pub fn io_with_source<S: Into<String>, E: std::error::Error + Send + Sync + 'static>(
        message: S,
        source: E,
    ) -> Self {
        Self::Io {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }
}
