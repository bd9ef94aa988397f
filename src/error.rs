//! Error handling for the storefront
//!
//! The page itself has no error states. These errors come from the ambient
//! layer: loading and saving preferences, and the start-up catalog check.

use thiserror::Error;

/// Main error type for storefront operations
#[derive(Error, Debug)]
pub enum StorefrontError {
    /// Errors related to preference loading/saving
    #[error("Configuration error: {0}")]
    Config(String),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// A product record breaks a catalog invariant
    #[error("Catalog error for product {id}: {message}")]
    Catalog { id: u32, message: String },

    /// Generic errors with context
    #[error("{context}: {source}")]
    WithContext {
        context: String,
        #[source]
        source: Box<StorefrontError>,
    },
}

impl StorefrontError {
    /// Add context to an error
    pub fn with_context(self, context: impl Into<String>) -> Self {
        StorefrontError::WithContext {
            context: context.into(),
            source: Box::new(self),
        }
    }
}

/// Result type alias for storefront operations
pub type Result<T> = std::result::Result<T, StorefrontError>;

/// Extension trait for adding context to Results
pub trait ResultExt<T> {
    /// Add context to an error result
    fn context(self, context: impl Into<String>) -> Result<T>;

    /// Add context lazily to an error result
    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String;
}

impl<T, E> ResultExt<T> for std::result::Result<T, E>
where
    E: Into<StorefrontError>,
{
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| e.into().with_context(context))
    }

    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| e.into().with_context(f()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = StorefrontError::Config("Invalid font scale".to_string());
        assert_eq!(err.to_string(), "Configuration error: Invalid font scale");
    }

    #[test]
    fn test_error_with_context() {
        let err = StorefrontError::Config("test".to_string());
        let with_ctx = err.with_context("Failed to load preferences");
        assert!(with_ctx.to_string().contains("Failed to load preferences"));
    }

    #[test]
    fn test_catalog_error() {
        let err = StorefrontError::Catalog {
            id: 7,
            message: "duplicate id".to_string(),
        };
        assert!(err.to_string().contains("product 7"));
        assert!(err.to_string().contains("duplicate id"));
    }

    #[test]
    fn test_result_ext_on_io_error() {
        let res: std::result::Result<(), std::io::Error> =
            Err(std::io::Error::new(std::io::ErrorKind::NotFound, "gone"));
        let err = res.context("Reading app state").unwrap_err();
        assert!(matches!(err, StorefrontError::WithContext { .. }));
        assert!(err.to_string().starts_with("Reading app state"));
    }
}
