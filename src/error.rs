// SPDX-License-Identifier: MPL-2.0
//! Application error type.
//!
//! The comparison slider itself cannot fail; errors only come from reading
//! image files and settings. Each variant maps to a Fluent message key so the
//! UI can show a localized explanation.

use thiserror::Error;

#[derive(Debug, Clone, Error)]
pub enum Error {
    #[error("I/O Error: {0}")]
    Io(String),
    #[error("Decode Error: {0}")]
    Decode(String),
    #[error("Config Error: {0}")]
    Config(String),
}

impl Error {
    /// Returns the i18n message key for this error type.
    pub fn i18n_key(&self) -> &'static str {
        match self {
            Error::Io(_) => "error-load-io",
            Error::Decode(_) => "error-load-decode",
            Error::Config(_) => "error-config",
        }
    }

    /// Returns the underlying detail message without the category prefix.
    pub fn details(&self) -> &str {
        match self {
            Error::Io(msg) | Error::Decode(msg) | Error::Config(msg) => msg,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<image_rs::ImageError> for Error {
    fn from(err: image_rs::ImageError) -> Self {
        match err {
            image_rs::ImageError::IoError(io) => Error::Io(io.to_string()),
            other => Error::Decode(other.to_string()),
        }
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_formats_io_error() {
        let err = Error::Io("disk failure".to_string());
        assert_eq!(format!("{}", err), "I/O Error: disk failure");
    }

    #[test]
    fn from_io_error_produces_io_variant() {
        let io_error = std::io::Error::other("boom");
        let err: Error = io_error.into();
        match err {
            Error::Io(message) => assert!(message.contains("boom")),
            _ => panic!("expected Io variant"),
        }
    }

    #[test]
    fn image_io_errors_stay_io() {
        let err: Error = image_rs::ImageError::IoError(std::io::Error::other("gone")).into();
        assert!(matches!(err, Error::Io(_)));
    }

    #[test]
    fn config_error_formats_properly() {
        let err = Error::Config("bad field".into());
        assert_eq!(format!("{}", err), "Config Error: bad field");
        assert_eq!(err.details(), "bad field");
    }

    #[test]
    fn i18n_keys_are_distinct() {
        assert_eq!(Error::Io(String::new()).i18n_key(), "error-load-io");
        assert_eq!(Error::Decode(String::new()).i18n_key(), "error-load-decode");
        assert_eq!(Error::Config(String::new()).i18n_key(), "error-config");
    }
}
