//! Taxonomy declarations and their resolved argument bags.

use serde::Serialize;
use serde_json::Value;
use tracing::{debug, warn};

use crate::config::{bool_option, string_option};
use crate::host::ArgBag;
use crate::labels::{humanize, merge_labels, taxonomy_labels};

/// Option keys consumed while resolving; they never reach the host bag.
const CONSUMED_OPTIONS: &[&str] = &["name", "singular_name", "post_types", "labels"];

/// Visibility flags that default to `true` unless set explicitly.
const DEFAULT_ON_FLAGS: &[&str] = &[
    "hierarchical",
    "public",
    "show_ui",
    "show_in_nav_menus",
    "show_tagcloud",
    "show_admin_column",
    "show_in_quick_edit",
    "show_in_rest",
];

/// A taxonomy as declared under a content type's `taxonomy` option.
#[derive(Debug, Clone, PartialEq)]
pub enum TaxonomyDecl {
    /// `{ genre: { ...options } }`
    Keyed { id: String, options: ArgBag },
    /// `[genre, mood]`
    Positional(String),
}

impl TaxonomyDecl {
    pub fn id(&self) -> &str {
        match self {
            Self::Keyed { id, .. } | Self::Positional(id) => id,
        }
    }

    /// Read the declarations from a `taxonomy` option value.
    ///
    /// Mappings yield keyed entries, lists and bare strings yield positional
    /// ones. Malformed entries are skipped or defaulted, never rejected.
    pub fn parse_all(owner: &str, value: &Value) -> Vec<Self> {
        match value {
            Value::Object(map) => map
                .iter()
                .map(|(id, options)| {
                    let options = match options {
                        Value::Object(options) => options.clone(),
                        _ => {
                            if !options.is_null() {
                                warn!(
                                    type_key = %owner,
                                    taxonomy = %id,
                                    "taxonomy options are not a mapping, using defaults"
                                );
                            }
                            ArgBag::new()
                        }
                    };
                    Self::Keyed {
                        id: id.clone(),
                        options,
                    }
                })
                .collect(),
            Value::Array(items) => items
                .iter()
                .filter_map(|item| match item {
                    Value::String(id) => Some(Self::Positional(id.clone())),
                    other => {
                        warn!(
                            type_key = %owner,
                            entry = %other,
                            "skipping taxonomy entry that is not a name"
                        );
                        None
                    }
                })
                .collect(),
            Value::String(id) => vec![Self::Positional(id.clone())],
            Value::Null => Vec::new(),
            other => {
                warn!(type_key = %owner, value = %other, "ignoring malformed taxonomy option");
                Vec::new()
            }
        }
    }
}

/// A fully resolved taxonomy, ready to hand to the host.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Taxonomy {
    id: String,
    name: String,
    singular_name: String,
    post_types: Vec<String>,
    args: ArgBag,
}

impl Taxonomy {
    /// Resolve a declaration made under the content type `owner`.
    pub fn resolve(decl: &TaxonomyDecl, owner: &str, term_controller: &str) -> Self {
        let empty = ArgBag::new();
        let (id, options) = match decl {
            TaxonomyDecl::Keyed { id, options } => (id.as_str(), options),
            TaxonomyDecl::Positional(id) => (id.as_str(), &empty),
        };

        let display = humanize(id);
        let singular_name = string_option(options, "singular_name")
            .map(str::to_string)
            .unwrap_or_else(|| display.clone());
        let name = string_option(options, "name")
            .map(str::to_string)
            .unwrap_or_else(|| format!("{display}s"));
        let post_types = post_types_option(options).unwrap_or_else(|| vec![owner.to_string()]);

        let labels = merge_labels(
            taxonomy_labels(&name, &singular_name),
            options.get("labels").and_then(Value::as_object),
        );

        let mut args = ArgBag::new();
        args.insert("labels".into(), Value::Object(labels));
        for flag in DEFAULT_ON_FLAGS {
            args.insert((*flag).into(), Value::Bool(bool_option(options, flag, true)));
        }
        args.insert(
            "meta_box_cb".into(),
            options.get("meta_box_cb").cloned().unwrap_or(Value::Null),
        );
        args.insert(
            "update_count_callback".into(),
            options
                .get("update_count_callback")
                .cloned()
                .unwrap_or_else(|| Value::String(String::new())),
        );
        args.insert(
            "rest_base".into(),
            Value::String(string_option(options, "rest_base").unwrap_or(id).to_string()),
        );
        args.insert(
            "rest_controller_class".into(),
            Value::String(
                string_option(options, "rest_controller_class")
                    .unwrap_or(term_controller)
                    .to_string(),
            ),
        );
        args.insert(
            "query_var".into(),
            options
                .get("query_var")
                .cloned()
                .unwrap_or_else(|| Value::String(id.to_string())),
        );
        args.insert(
            "rewrite".into(),
            options.get("rewrite").cloned().unwrap_or(Value::Bool(true)),
        );
        args.insert(
            "sort".into(),
            options
                .get("sort")
                .cloned()
                .unwrap_or_else(|| Value::String(String::new())),
        );

        // Anything else the caller set is handed through untouched.
        for (key, value) in options {
            if !CONSUMED_OPTIONS.contains(&key.as_str()) && !args.contains_key(key) {
                args.insert(key.clone(), value.clone());
            }
        }

        debug!(taxonomy = %id, owner = %owner, post_types = ?post_types, "resolved taxonomy");

        Self {
            id: id.to_string(),
            name,
            singular_name,
            post_types,
            args,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn singular_name(&self) -> &str {
        &self.singular_name
    }

    /// Content type keys the taxonomy is attached to.
    pub fn post_types(&self) -> &[String] {
        &self.post_types
    }

    pub fn labels(&self) -> Option<&ArgBag> {
        self.args.get("labels").and_then(Value::as_object)
    }

    /// Argument bag handed to the host.
    pub fn args(&self) -> &ArgBag {
        &self.args
    }
}

fn post_types_option(options: &ArgBag) -> Option<Vec<String>> {
    match options.get("post_types")? {
        Value::String(key) => Some(vec![key.clone()]),
        Value::Array(keys) => {
            let keys: Vec<String> = keys
                .iter()
                .filter_map(Value::as_str)
                .map(str::to_string)
                .collect();
            (!keys.is_empty()).then_some(keys)
        }
        _ => None,
    }
}
