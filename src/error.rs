// SPDX-License-Identifier: MPL-2.0
use thiserror::Error;

#[derive(Debug, Clone, Error)]
pub enum Error {
    #[error("I/O Error: {0}")]
    Io(String),
    #[error("Config Error: {0}")]
    Config(String),
    #[error("Catalog Error: {0}")]
    Catalog(#[from] CatalogError),
}

/// Reasons a catalog source is rejected by the content loader.
/// Used to provide user-friendly, localized error messages.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CatalogError {
    /// The source is not valid JSON, or a record does not match the schema.
    #[error("{source_name}: {message}")]
    Parse {
        source_name: String,
        message: String,
    },

    /// A record has an empty required text field.
    #[error("{source_name}: product #{index} has an empty `{field}`")]
    MissingField {
        source_name: String,
        index: usize,
        field: &'static str,
    },

    /// A record has a negative or non-finite price.
    #[error("{source_name}: product `{slug}` has an invalid price")]
    InvalidPrice { source_name: String, slug: String },

    /// A source (file, directory or bundle) yields no product records.
    #[error("{0}: no product records found")]
    EmptySource(String),
}

impl CatalogError {
    /// Returns the i18n message key for this error type.
    pub fn i18n_key(&self) -> &'static str {
        match self {
            CatalogError::Parse { .. } => "error-catalog-parse",
            CatalogError::MissingField { .. } => "error-catalog-missing-field",
            CatalogError::InvalidPrice { .. } => "error-catalog-invalid-price",
            CatalogError::EmptySource(_) => "error-catalog-empty",
        }
    }
}

impl Error {
    /// Returns the i18n message key used when this error reaches the UI.
    pub fn i18n_key(&self) -> &'static str {
        match self {
            Error::Io(_) => "error-io",
            Error::Config(_) => "error-config",
            Error::Catalog(err) => err.i18n_key(),
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
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
    fn config_error_formats_properly() {
        let err = Error::Config("bad field".into());
        assert_eq!(format!("{}", err), "Config Error: bad field");
    }

    #[test]
    fn catalog_error_wraps_with_context() {
        let err: Error = CatalogError::InvalidPrice {
            source_name: "chairs.json".into(),
            slug: "kursi-jati".into(),
        }
        .into();
        assert_eq!(
            format!("{}", err),
            "Catalog Error: chairs.json: product `kursi-jati` has an invalid price"
        );
    }

    #[test]
    fn catalog_error_i18n_keys() {
        assert_eq!(
            CatalogError::EmptySource("dir".into()).i18n_key(),
            "error-catalog-empty"
        );
        assert_eq!(
            Error::from(CatalogError::Parse {
                source_name: "a".into(),
                message: "b".into()
            })
            .i18n_key(),
            "error-catalog-parse"
        );
        assert_eq!(Error::Io("x".into()).i18n_key(), "error-io");
    }
}
