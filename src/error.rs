//! Error types for the confpath library.
//!
//! This module provides the error hierarchy for all operations in the
//! confpath library, using `thiserror` for ergonomic error handling.

use thiserror::Error;

/// Result type alias for operations that may fail with a confpath error.
///
/// # Examples
///
/// ```
/// use confpath::Result;
///
/// fn example_operation() -> Result<usize> {
///     Ok(3)
/// }
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for the confpath library.
///
/// Path resolution itself is designed to be infallible apart from
/// tokenization: an unknown field, a wrong namespace, or an empty path all
/// fold into the [`Classification::NotExists`](crate::Classification)
/// verdict rather than an error. The only resolution-time failure is a
/// syntactically broken path (unmatched `[`). The remaining variants cover
/// loading of property sources.
#[derive(Debug, Error)]
pub enum Error {
    /// A property path could not be tokenized.
    #[error("invalid property path '{path}': {reason}")]
    InvalidPath {
        /// The offending path string.
        path: String,
        /// The reason the path is invalid.
        reason: String,
    },

    /// An I/O error occurred while reading a property source.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A YAML property source could not be parsed.
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// A JSON property source could not be parsed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Check if this error indicates a syntactically invalid property path.
    ///
    /// # Examples
    ///
    /// ```
    /// use confpath::Error;
    ///
    /// let err = Error::InvalidPath {
    ///     path: "a[b".to_string(),
    ///     reason: "unmatched '['".to_string(),
    /// };
    /// assert!(err.is_invalid_path());
    /// ```
    #[must_use]
    pub fn is_invalid_path(&self) -> bool {
        matches!(self, Self::InvalidPath { .. })
    }
}
