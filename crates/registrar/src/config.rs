//! Registrar input: the type configuration and registrar-wide settings.
//!
//! Configuration arrives either from code (a `serde_json::Value` or a
//! [`ConfigInput`]) or from a YAML/TOML/JSON file via [`load_config_file`].

use std::path::Path;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

use crate::error::ConfigError;
use crate::host::ArgBag;

/// Generic term controller the host uses for taxonomy REST endpoints.
pub const DEFAULT_TERM_CONTROLLER: &str = "WP_REST_Terms_Controller";

/// Content type configuration as handed to [`crate::Registrar::new`].
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigInput {
    /// A single type name with no options.
    Single(String),
    /// Type key -> options, in declaration order.
    Types(Vec<(String, ArgBag)>),
}

impl ConfigInput {
    /// Interpret a JSON value as a type configuration.
    ///
    /// A string names a single type; a mapping lists types whose options
    /// must themselves be mappings.
    pub fn from_value(value: &Value) -> Result<Self, ConfigError> {
        match value {
            Value::String(name) => Ok(Self::Single(name.clone())),
            Value::Object(map) => map
                .iter()
                .map(|(key, options)| match options {
                    Value::Object(options) => Ok((key.clone(), options.clone())),
                    other => Err(ConfigError::not_a_mapping(key, other)),
                })
                .collect::<Result<Vec<_>, _>>()
                .map(Self::Types),
            other => Err(ConfigError::invalid_root(other)),
        }
    }
}

/// Registrar-wide settings (the constructor's option override).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RegistrarSettings {
    /// Merged shallowly over the built-in content type defaults.
    pub type_defaults: ArgBag,
    /// Fallback `rest_controller_class` for taxonomies.
    pub term_controller: String,
}

impl Default for RegistrarSettings {
    fn default() -> Self {
        Self {
            type_defaults: ArgBag::new(),
            term_controller: DEFAULT_TERM_CONTROLLER.to_string(),
        }
    }
}

/// A configuration document split into settings and type configuration.
#[derive(Debug, Clone)]
pub struct ConfigFile {
    pub settings: RegistrarSettings,
    pub types: Value,
}

/// Load a configuration file, choosing the parser by extension.
///
/// A document with a top-level `types` entry may also carry a `settings`
/// table; any other document is the type mapping itself.
pub fn load_config_file(path: &Path) -> Result<ConfigFile, ConfigError> {
    let shown = path.display().to_string();
    let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: shown.clone(),
        source,
    })?;

    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase)
        .unwrap_or_default();

    let document: Value = match extension.as_str() {
        "yml" | "yaml" => {
            serde_yml::from_str(&raw).map_err(|e| ConfigError::parse(&shown, e))?
        }
        "toml" => toml::from_str(&raw).map_err(|e| ConfigError::parse(&shown, e))?,
        "json" => serde_json::from_str(&raw).map_err(|e| ConfigError::parse(&shown, e))?,
        _ => return Err(ConfigError::UnsupportedFormat { path: shown }),
    };

    debug!(path = %shown, format = %extension, "loaded configuration file");
    split_document(document, &shown)
}

/// Separate an optional `settings` table from the type configuration.
pub fn split_document(document: Value, path: &str) -> Result<ConfigFile, ConfigError> {
    match document {
        Value::Object(mut map) if map.contains_key("types") => {
            let settings = match map.remove("settings") {
                Some(raw) => {
                    serde_json::from_value(raw).map_err(|e| ConfigError::parse(path, e))?
                }
                None => RegistrarSettings::default(),
            };
            let types = map.remove("types").unwrap_or(Value::Null);
            Ok(ConfigFile { settings, types })
        }
        other => Ok(ConfigFile {
            settings: RegistrarSettings::default(),
            types: other,
        }),
    }
}

/// A string option, or `None` if it is missing or not a string.
pub(crate) fn string_option<'a>(options: &'a ArgBag, key: &str) -> Option<&'a str> {
    options.get(key).and_then(Value::as_str)
}

/// A boolean option, or `default` if it is missing or not a boolean.
pub(crate) fn bool_option(options: &ArgBag, key: &str, default: bool) -> bool {
    options.get(key).and_then(Value::as_bool).unwrap_or(default)
}
