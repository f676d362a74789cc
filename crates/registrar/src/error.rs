//! Registrar error types with clear, actionable messages.
//!
//! Every error names the content type key or taxonomy id involved so a
//! broken configuration can be traced back to the entry that caused it.

use thiserror::Error;

/// Malformed input configuration, raised while the registrar is being built.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A type key maps to something other than an options mapping.
    #[error("type key required: options for '{key}' must be a mapping, got {found}")]
    NotAMapping { key: String, found: String },

    /// A type key normalises to the empty string.
    #[error("type key required: content type keys must not be empty")]
    EmptyTypeKey,

    /// The configuration root is neither a type name nor a mapping.
    #[error("configuration must be a type name or a mapping of type keys, got {found}")]
    InvalidRoot { found: String },

    /// A configuration file could not be read.
    #[error("failed to read configuration file {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// A configuration file could not be parsed.
    #[error("failed to parse configuration file {path}: {details}")]
    Parse { path: String, details: String },

    /// The file extension does not map to a known format.
    #[error("configuration file {path}: unsupported format, expected .yml, .yaml, .toml or .json")]
    UnsupportedFormat { path: String },
}

impl ConfigError {
    /// Create a not-a-mapping error describing the offending value.
    pub fn not_a_mapping(key: impl Into<String>, value: &serde_json::Value) -> Self {
        Self::NotAMapping {
            key: key.into(),
            found: value_kind(value).to_string(),
        }
    }

    /// Create an invalid-root error describing the offending value.
    pub fn invalid_root(value: &serde_json::Value) -> Self {
        Self::InvalidRoot {
            found: value_kind(value).to_string(),
        }
    }

    /// Create a parse error for a file.
    pub fn parse(path: impl Into<String>, details: impl ToString) -> Self {
        Self::Parse {
            path: path.into(),
            details: details.to_string(),
        }
    }
}

/// Failure reported by the host's registration API.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct HostError {
    pub message: String,
}

impl HostError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Errors surfaced by the registrar.
#[derive(Debug, Error)]
pub enum RegistrarError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// The host refused a content type. Registration stops at this entry.
    #[error("content type '{key}': registration failed: {source}")]
    ContentTypeRegistration {
        key: String,
        #[source]
        source: HostError,
    },

    /// The host refused a taxonomy. Registration stops at this entry.
    #[error("taxonomy '{taxonomy}' (content type '{owner}'): registration failed: {source}")]
    TaxonomyRegistration {
        taxonomy: String,
        owner: String,
        #[source]
        source: HostError,
    },

    /// A lookup named a type the registrar was not configured with.
    #[error("content type '{key}' is not configured (known: {known})")]
    UnknownType { key: String, known: String },

    #[error("failed to serialize resolved configuration: {0}")]
    Serialize(#[from] serde_json::Error),
}

impl RegistrarError {
    /// The host's own message, when the failure came from the host.
    pub fn host_message(&self) -> Option<&str> {
        match self {
            Self::ContentTypeRegistration { source, .. }
            | Self::TaxonomyRegistration { source, .. } => Some(&source.message),
            Self::Config(_) | Self::UnknownType { .. } | Self::Serialize(_) => None,
        }
    }
}

/// Result type alias using RegistrarError.
pub type RegistrarResult<T> = Result<T, RegistrarError>;

fn value_kind(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "a boolean",
        serde_json::Value::Number(_) => "a number",
        serde_json::Value::String(_) => "a string",
        serde_json::Value::Array(_) => "a list",
        serde_json::Value::Object(_) => "a mapping",
    }
}
