//! Error types for the example-users crate.
//!
//! This module defines semantic error enums for loading avatar pools and
//! demo settings, following the project's error handling conventions with
//! `thiserror`.

use camino::Utf8PathBuf;
use thiserror::Error;

/// Errors that can occur when loading an avatar pool.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PhotoPoolError {
    /// The pool file could not be read.
    #[error("failed to read photo pool at '{path}': {message}")]
    Io {
        /// Path to the pool file.
        path: Utf8PathBuf,
        /// Description of the I/O error.
        message: String,
    },

    /// The pool JSON is not an array of strings.
    #[error("invalid photo pool JSON: {message}")]
    Parse {
        /// Description of the parse error.
        message: String,
    },

    /// An entry is not an absolute `http` or `https` URL.
    #[error("invalid photo URL at index {index}: '{value}'")]
    InvalidUrl {
        /// Index of the invalid entry.
        index: usize,
        /// The rejected value.
        value: String,
    },
}

/// Errors that can occur while loading demo settings.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SettingsError {
    /// Configuration sources could not be merged.
    #[error("failed to load settings: {message}")]
    Load {
        /// Description of the loader failure.
        message: String,
    },

    /// The configured photo pool path is not valid UTF-8.
    #[error("photo pool path is not valid UTF-8: {path}")]
    NonUtf8Path {
        /// Lossy rendering of the offending path.
        path: String,
    },

    /// The configured photo pool could not be loaded.
    #[error("photo pool error: {0}")]
    PhotoPool(#[from] PhotoPoolError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn photo_pool_io_formats_correctly() {
        let err = PhotoPoolError::Io {
            path: Utf8PathBuf::from("/tmp/photos.json"),
            message: "file not found".to_owned(),
        };
        assert_eq!(
            err.to_string(),
            "failed to read photo pool at '/tmp/photos.json': file not found"
        );
    }

    #[test]
    fn photo_pool_invalid_url_formats_correctly() {
        let err = PhotoPoolError::InvalidUrl {
            index: 3,
            value: "nope".to_owned(),
        };
        assert_eq!(err.to_string(), "invalid photo URL at index 3: 'nope'");
    }

    #[test]
    fn settings_wraps_photo_pool_errors() {
        let err = SettingsError::from(PhotoPoolError::Parse {
            message: "expected array".to_owned(),
        });
        assert_eq!(
            err.to_string(),
            "photo pool error: invalid photo pool JSON: expected array"
        );
    }
}
