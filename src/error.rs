//! Error types for content resolution

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for content operations.
pub type Result<T> = std::result::Result<T, ContentError>;

/// Errors raised while resolving lesson documents.
#[derive(Error, Debug)]
pub enum ContentError {
    /// No document exists for the requested slug.
    #[error("no lesson found for slug `{slug}`")]
    NotFound { slug: String },

    /// Front-matter is malformed or missing a required field.
    #[error("front-matter error in {}: {message}", .path.display())]
    Frontmatter { path: PathBuf, message: String },

    /// Two source documents resolve to the same slug.
    #[error("duplicate slug `{slug}`: {} conflicts with {}", .second.display(), .first.display())]
    DuplicateSlug {
        slug: String,
        first: PathBuf,
        second: PathBuf,
    },

    /// File system I/O error.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

impl ContentError {
    /// Create a `NotFound` error for a slug.
    pub fn not_found(slug: impl Into<String>) -> Self {
        Self::NotFound { slug: slug.into() }
    }

    /// Create a front-matter error with file location.
    pub fn frontmatter(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::Frontmatter {
            path: path.into(),
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_message() {
        let err = ContentError::not_found("missing-slug");
        assert_eq!(err.to_string(), "no lesson found for slug `missing-slug`");
    }

    #[test]
    fn test_frontmatter_message() {
        let err = ContentError::frontmatter("lessons/intro.md", "missing `title`");
        assert!(err.to_string().contains("lessons/intro.md"));
        assert!(err.to_string().contains("missing `title`"));
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err: ContentError = io_err.into();
        assert!(err.to_string().contains("io error"));
    }
}
