//! Content registrar test utilities.
//!
//! Helpers for integration testing: host doubles that record or refuse
//! registrations, configuration builders, and assertion utilities.

use content_registrar::{ArgBag, ContentHost, Handle, HostError};
use serde_json::Value as JsonValue;

/// A registration call received by a host double.
#[derive(Debug, Clone, PartialEq)]
pub enum HostCall {
    ContentType {
        key: String,
        args: ArgBag,
    },
    Taxonomy {
        id: String,
        owners: Vec<String>,
        args: ArgBag,
    },
}

impl HostCall {
    /// Content type key or taxonomy id.
    pub fn name(&self) -> &str {
        match self {
            Self::ContentType { key, .. } => key,
            Self::Taxonomy { id, .. } => id,
        }
    }

    pub fn args(&self) -> &ArgBag {
        match self {
            Self::ContentType { args, .. } | Self::Taxonomy { args, .. } => args,
        }
    }

    pub fn is_content_type(&self) -> bool {
        matches!(self, Self::ContentType { .. })
    }
}

/// Host double that accepts everything and records each call in order.
///
/// Names listed with [`RecordingHost::fail_on`] are refused with the given
/// message instead; the refused call is still recorded.
#[derive(Debug, Clone, Default)]
pub struct RecordingHost {
    pub calls: Vec<HostCall>,
    failures: Vec<(String, String)>,
}

impl RecordingHost {
    pub fn new() -> Self {
        Self::default()
    }

    /// Refuse the content type or taxonomy called `name`.
    pub fn fail_on(mut self, name: &str, message: &str) -> Self {
        self.failures.push((name.to_string(), message.to_string()));
        self
    }

    /// Content type keys registered so far, in call order.
    pub fn content_type_keys(&self) -> Vec<&str> {
        self.calls
            .iter()
            .filter(|c| c.is_content_type())
            .map(HostCall::name)
            .collect()
    }

    /// Taxonomy ids registered so far, in call order.
    pub fn taxonomy_ids(&self) -> Vec<&str> {
        self.calls
            .iter()
            .filter(|c| !c.is_content_type())
            .map(HostCall::name)
            .collect()
    }

    /// The most recent call for `name`.
    pub fn call_for(&self, name: &str) -> Option<&HostCall> {
        self.calls.iter().rev().find(|c| c.name() == name)
    }

    fn outcome(&self, name: &str, args: &ArgBag) -> Result<Handle, HostError> {
        match self.failures.iter().find(|(n, _)| n == name) {
            Some((_, message)) => Err(HostError::new(message.clone())),
            None => Ok(Handle::new(name, args.clone())),
        }
    }
}

impl ContentHost for RecordingHost {
    fn register_content_type(&mut self, key: &str, args: &ArgBag) -> Result<Handle, HostError> {
        self.calls.push(HostCall::ContentType {
            key: key.to_string(),
            args: args.clone(),
        });
        self.outcome(key, args)
    }

    fn register_taxonomy(
        &mut self,
        id: &str,
        owners: &[String],
        args: &ArgBag,
    ) -> Result<Handle, HostError> {
        self.calls.push(HostCall::Taxonomy {
            id: id.to_string(),
            owners: owners.to_vec(),
            args: args.clone(),
        });
        self.outcome(id, args)
    }
}

/// Start building options for a content type.
pub fn test_type(key: &str) -> TestType {
    TestType {
        key: key.to_string(),
        options: ArgBag::new(),
    }
}

/// A content type configuration builder for test fixtures.
#[derive(Debug, Clone)]
pub struct TestType {
    pub key: String,
    pub options: ArgBag,
}

impl TestType {
    /// Set singular and plural display names.
    pub fn named(self, singular: &str, plural: &str) -> Self {
        self.with_option("singular", singular.into())
            .with_option("plural", plural.into())
    }

    /// Mark the type as not publicly viewable.
    pub fn private(self) -> Self {
        self.with_option("public", JsonValue::Bool(false))
    }

    /// Override a single label.
    pub fn with_label(mut self, name: &str, value: &str) -> Self {
        let labels = self
            .options
            .entry("labels")
            .or_insert_with(|| JsonValue::Object(ArgBag::new()));
        if let Some(labels) = labels.as_object_mut() {
            labels.insert(name.to_string(), value.into());
        }
        self
    }

    /// Declare a keyed taxonomy.
    pub fn with_taxonomy(mut self, id: &str, options: JsonValue) -> Self {
        let taxonomies = self
            .options
            .entry("taxonomy")
            .or_insert_with(|| JsonValue::Object(ArgBag::new()));
        if let Some(taxonomies) = taxonomies.as_object_mut() {
            taxonomies.insert(id.to_string(), options);
        }
        self
    }

    /// Set any other option.
    pub fn with_option(mut self, name: &str, value: JsonValue) -> Self {
        self.options.insert(name.to_string(), value);
        self
    }

    /// The `(key, options)` pair the registrar expects.
    pub fn build(self) -> (String, ArgBag) {
        (self.key, self.options)
    }
}

/// Combine builders into a configuration mapping.
pub fn config_of(types: impl IntoIterator<Item = TestType>) -> JsonValue {
    JsonValue::Object(
        types
            .into_iter()
            .map(|t| (t.key, JsonValue::Object(t.options)))
            .collect(),
    )
}

/// Assertion helpers for argument bags and messages.
pub mod assert {
    use content_registrar::ArgBag;
    use serde_json::Value;

    /// Assert that a bag has a specific key.
    pub fn has_key(bag: &ArgBag, key: &str) {
        assert!(
            bag.contains_key(key),
            "Expected bag to have key '{key}', got keys: {:?}",
            bag.keys().collect::<Vec<_>>()
        );
    }

    /// Assert that a bag entry equals the expected value.
    pub fn arg_eq(bag: &ArgBag, key: &str, expected: &Value) {
        assert_eq!(
            bag.get(key),
            Some(expected),
            "argument '{key}' mismatch"
        );
    }

    /// Assert that a string contains a substring.
    pub fn contains(haystack: &str, needle: &str) {
        assert!(
            haystack.contains(needle),
            "Expected string to contain '{needle}'\nActual: {haystack}"
        );
    }

    /// Assert that a string does not contain a substring.
    pub fn not_contains(haystack: &str, needle: &str) {
        assert!(
            !haystack.contains(needle),
            "Expected string to NOT contain '{needle}'\nActual: {haystack}"
        );
    }
}

/// Ready-made configurations.
pub mod configs {
    use serde_json::{Value, json};

    /// A reviews type with a genre taxonomy.
    pub fn movie_reviews() -> Value {
        json!({
            "movie_review": {
                "singular": "Review",
                "plural": "Reviews",
                "taxonomy": {
                    "genre": { "post_types": ["movie_review"] }
                }
            }
        })
    }

    /// Three types with positional taxonomies, declared out of alphabetical order.
    pub fn library() -> Value {
        json!({
            "periodical": { "taxonomy": ["publisher"] },
            "Book": { "taxonomy": ["author_name", "shelf"] },
            "audio_book": { "public": false }
        })
    }
}
