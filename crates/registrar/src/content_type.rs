//! Content type resolution.
//!
//! Turns a type key plus its compact options into the full argument bag the
//! host's registration call takes. Resolution happens once, when the type is
//! added; the result is never mutated afterwards.

use serde::Serialize;
use serde_json::{Value, json};
use tracing::debug;

use crate::config::{RegistrarSettings, string_option};
use crate::error::ConfigError;
use crate::host::ArgBag;
use crate::labels::{capitalize_words, content_type_labels, merge_labels};
use crate::taxonomy::{Taxonomy, TaxonomyDecl};

/// Features enabled for every type unless `supports` is overridden.
pub const DEFAULT_SUPPORTS: &[&str] = &[
    "title",
    "editor",
    "excerpt",
    "author",
    "thumbnail",
    "comments",
    "trackbacks",
    "custom-fields",
    "revisions",
    "page-attributes",
    "post-formats",
];

/// Admin menu icon used when none is configured.
pub const DEFAULT_MENU_ICON: &str = "dashicons-admin-generic";

/// Built-in content type defaults, lowest merge priority.
pub fn builtin_defaults() -> ArgBag {
    let defaults = json!({
        "description": "",
        "public": true,
        "publicly_queryable": true,
        "show_ui": true,
        "show_in_menu": true,
        "query_var": true,
        "capability_type": "post",
        "has_archive": true,
        "hierarchical": false,
        "menu_position": null,
        "supports": DEFAULT_SUPPORTS,
        "menu_icon": DEFAULT_MENU_ICON,
        "show_in_nav_menus": true,
    });
    match defaults {
        Value::Object(map) => map,
        _ => ArgBag::new(),
    }
}

/// Lowercase a type key and replace spaces with underscores.
pub fn normalize_key(key: &str) -> String {
    key.replace(' ', "_").to_lowercase()
}

/// URL slug for a normalised key: underscores become hyphens.
pub fn slug_from_key(key: &str) -> String {
    key.replace('_', "-")
}

/// A resolved content type.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ContentType {
    key: String,
    slug: String,
    singular: String,
    plural: String,
    menu_name: String,
    args: ArgBag,
    taxonomies: Vec<Taxonomy>,
}

impl ContentType {
    /// Resolve `key` and its options against the registrar settings.
    pub fn resolve(
        key: &str,
        options: &ArgBag,
        settings: &RegistrarSettings,
    ) -> Result<Self, ConfigError> {
        let key = normalize_key(key);
        if key.is_empty() {
            return Err(ConfigError::EmptyTypeKey);
        }

        let slug = string_option(options, "slug")
            .map(str::to_string)
            .unwrap_or_else(|| slug_from_key(&key));
        let singular = string_option(options, "singular")
            .map(str::to_string)
            .unwrap_or_else(|| key.replace('_', " "));
        let plural = string_option(options, "plural")
            .map(str::to_string)
            .unwrap_or_else(|| format!("{}s", capitalize_words(&singular)));
        let menu_name = string_option(options, "menu_name")
            .or_else(|| string_option(options, "plural"))
            .map(str::to_string)
            .unwrap_or_else(|| singular.replace('_', " "));

        let labels = merge_labels(
            content_type_labels(&singular, &plural, &menu_name),
            options.get("labels").and_then(Value::as_object),
        );

        // Defaults, then user options, then the computed fields. The computed
        // values already honour the user's own string overrides.
        let mut args = builtin_defaults();
        args.extend(settings.type_defaults.clone());
        args.extend(options.clone());
        args.insert("slug".into(), Value::String(slug.clone()));
        args.insert("singular".into(), Value::String(singular.clone()));
        args.insert("plural".into(), Value::String(plural.clone()));
        args.insert("menu_name".into(), Value::String(menu_name.clone()));
        args.insert("labels".into(), Value::Object(labels));
        if !options.contains_key("rewrite") {
            args.insert("rewrite".into(), json!({ "slug": slug }));
        }

        let taxonomies = options
            .get("taxonomy")
            .map(|value| TaxonomyDecl::parse_all(&key, value))
            .unwrap_or_default()
            .iter()
            .map(|decl| Taxonomy::resolve(decl, &key, &settings.term_controller))
            .collect();

        debug!(
            type_key = %key,
            slug = %slug,
            singular = %singular,
            plural = %plural,
            "resolved content type"
        );

        Ok(Self {
            key,
            slug,
            singular,
            plural,
            menu_name,
            args,
            taxonomies,
        })
    }

    /// Normalised type key, as registered with the host.
    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn slug(&self) -> &str {
        &self.slug
    }

    pub fn singular(&self) -> &str {
        &self.singular
    }

    pub fn plural(&self) -> &str {
        &self.plural
    }

    pub fn menu_name(&self) -> &str {
        &self.menu_name
    }

    /// Final label dictionary.
    pub fn labels(&self) -> Option<&ArgBag> {
        self.args.get("labels").and_then(Value::as_object)
    }

    /// Full argument bag handed to the host.
    pub fn args(&self) -> &ArgBag {
        &self.args
    }

    /// A single resolved argument.
    pub fn arg(&self, name: &str) -> Option<&Value> {
        self.args.get(name)
    }

    /// Whether front-end links (view, preview) make sense for this type.
    pub fn is_public(&self) -> bool {
        self.arg("public").is_some_and(is_truthy)
    }

    /// Resolved taxonomies declared under this type, in declaration order.
    pub fn taxonomies(&self) -> &[Taxonomy] {
        &self.taxonomies
    }
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|n| n != 0.0),
        Value::String(s) => !s.is_empty() && s != "0",
        Value::Array(a) => !a.is_empty(),
        Value::Object(o) => !o.is_empty(),
    }
}
