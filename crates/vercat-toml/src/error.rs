//! Errors specific to the TOML catalog format.

use thiserror::Error;
use vercat_core::CatalogError;

#[derive(Error, Debug)]
pub enum TomlCatalogError {
    #[error("Failed to parse version catalog: {message}")]
    ParseError { message: String },

    #[error("Invalid entry '{alias}' in [{section}]: {message}")]
    InvalidEntry {
        section: &'static str,
        alias: String,
        message: String,
    },

    #[error(transparent)]
    Catalog(#[from] CatalogError),
}

pub type Result<T> = std::result::Result<T, TomlCatalogError>;

impl TomlCatalogError {
    pub(crate) fn invalid(
        section: &'static str,
        alias: &str,
        message: impl Into<String>,
    ) -> Self {
        Self::InvalidEntry {
            section,
            alias: alias.to_string(),
            message: message.into(),
        }
    }
}

impl From<toml_edit::TomlError> for TomlCatalogError {
    fn from(err: toml_edit::TomlError) -> Self {
        Self::ParseError {
            message: err.to_string(),
        }
    }
}

impl From<TomlCatalogError> for CatalogError {
    fn from(err: TomlCatalogError) -> Self {
        match err {
            TomlCatalogError::ParseError { message } => Self::Parse { message },
            TomlCatalogError::InvalidEntry {
                section,
                alias,
                message,
            } => Self::InvalidEntry {
                section: section.to_string(),
                alias,
                message,
            },
            TomlCatalogError::Catalog(e) => e,
        }
    }
}
