//! Errors raised while building or querying a version catalog.

use crate::types::EntryKind;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Alias '{alias}' is not declared in the catalog")]
    NotFound { alias: String },

    #[error("Alias '{alias}' is declared as a {found}, not a {requested}")]
    WrongKind {
        alias: String,
        requested: EntryKind,
        found: EntryKind,
    },

    #[error("Duplicate {kind} alias '{alias}'")]
    DuplicateAlias { alias: String, kind: EntryKind },

    #[error("Invalid alias '{alias}': {reason}")]
    InvalidAlias { alias: String, reason: String },

    #[error("Invalid entry '{alias}' in [{section}]: {message}")]
    InvalidEntry {
        section: String,
        alias: String,
        message: String,
    },

    #[error("Failed to parse catalog: {message}")]
    Parse { message: String },

    #[error("Catalog file too large: {size} bytes (max: {limit} bytes)")]
    TooLarge { size: u64, limit: u64 },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, CatalogError>;

impl CatalogError {
    pub(crate) fn not_found(alias: impl Into<String>) -> Self {
        Self::NotFound {
            alias: alias.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_display() {
        let err = CatalogError::not_found("androidx.room.ktx");
        assert_eq!(
            err.to_string(),
            "Alias 'androidx.room.ktx' is not declared in the catalog"
        );
    }

    #[test]
    fn test_wrong_kind_display() {
        let err = CatalogError::WrongKind {
            alias: "room".into(),
            requested: EntryKind::Library,
            found: EntryKind::Version,
        };
        assert_eq!(
            err.to_string(),
            "Alias 'room' is declared as a version, not a library"
        );
    }

    #[test]
    fn test_duplicate_alias_display() {
        let err = CatalogError::DuplicateAlias {
            alias: "eventbus".into(),
            kind: EntryKind::Library,
        };
        assert!(err.to_string().contains("eventbus"));
    }

    #[test]
    fn test_invalid_entry_display() {
        let err = CatalogError::InvalidEntry {
            section: "libraries".into(),
            alias: "lottie".into(),
            message: "missing module".into(),
        };
        assert_eq!(
            err.to_string(),
            "Invalid entry 'lottie' in [libraries]: missing module"
        );
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::from(std::io::ErrorKind::NotFound);
        let err: CatalogError = io_err.into();
        assert!(matches!(err, CatalogError::Io(_)));
    }
}
