//! The registrar: resolved content types and their registration.
//!
//! Types are resolved when added and kept in insertion order. Nothing is
//! sent to the host until [`Registrar::register_all`] runs, normally from the
//! init tap.

use std::sync::Arc;

use serde_json::Value;
use tracing::{error, info};

use crate::config::{ConfigInput, RegistrarSettings};
use crate::content_type::{ContentType, normalize_key};
use crate::error::{RegistrarError, RegistrarResult};
use crate::hooks::{DEFAULT_WEIGHT, Hooks};
use crate::host::{ArgBag, ContentHost, Handle};
use crate::messages::{
    BulkCounts, BulkMessages, MessageContext, StatusMessages, bulk_messages_for,
    status_messages_for,
};

/// Outcome of registering one content type and its taxonomies.
#[derive(Debug, Clone, PartialEq)]
pub struct Registration {
    pub content_type: Handle,
    pub taxonomies: Vec<Handle>,
}

/// Content type registrar.
#[derive(Debug, Clone, Default)]
pub struct Registrar {
    settings: RegistrarSettings,
    types: Vec<ContentType>,
}

impl Registrar {
    /// Build a registrar from a configuration.
    pub fn new(config: ConfigInput, settings: RegistrarSettings) -> RegistrarResult<Self> {
        let mut registrar = Self {
            settings,
            types: Vec::new(),
        };

        match config {
            ConfigInput::Single(key) => {
                registrar.add_single(&key, &ArgBag::new())?;
            }
            ConfigInput::Types(types) => {
                for (key, options) in &types {
                    registrar.add_single(key, options)?;
                }
            }
        }

        Ok(registrar)
    }

    /// Build a registrar from a JSON value: a type name or a mapping of
    /// type keys to options.
    pub fn from_value(config: &Value, settings: RegistrarSettings) -> RegistrarResult<Self> {
        let input = ConfigInput::from_value(config)?;
        Self::new(input, settings)
    }

    /// Resolve and store one content type.
    ///
    /// Adding a key that already exists replaces the earlier entry but keeps
    /// its position.
    pub fn add_single(&mut self, key: &str, options: &ArgBag) -> RegistrarResult<&ContentType> {
        let resolved = ContentType::resolve(key, options, &self.settings)?;
        let index = match self.position(resolved.key()) {
            Some(index) => {
                self.types[index] = resolved;
                index
            }
            None => {
                self.types.push(resolved);
                self.types.len() - 1
            }
        };
        Ok(&self.types[index])
    }

    /// Register every content type, then its taxonomies, with the host.
    ///
    /// Stops at the first failure; entries after it are not attempted.
    pub fn register_all(&self, host: &mut dyn ContentHost) -> RegistrarResult<Vec<Registration>> {
        let mut registrations = Vec::with_capacity(self.types.len());

        for ty in &self.types {
            let content_type = host
                .register_content_type(ty.key(), ty.args())
                .map_err(|source| {
                    error!(
                        type_key = %ty.key(),
                        error = %source,
                        "content type registration failed"
                    );
                    RegistrarError::ContentTypeRegistration {
                        key: ty.key().to_string(),
                        source,
                    }
                })?;
            info!(type_key = %ty.key(), "registered content type");

            let mut taxonomies = Vec::with_capacity(ty.taxonomies().len());
            for taxonomy in ty.taxonomies() {
                let handle = host
                    .register_taxonomy(taxonomy.id(), taxonomy.post_types(), taxonomy.args())
                    .map_err(|source| {
                        error!(
                            type_key = %ty.key(),
                            taxonomy = %taxonomy.id(),
                            error = %source,
                            "taxonomy registration failed"
                        );
                        RegistrarError::TaxonomyRegistration {
                            taxonomy: taxonomy.id().to_string(),
                            owner: ty.key().to_string(),
                            source,
                        }
                    })?;
                info!(type_key = %ty.key(), taxonomy = %taxonomy.id(), "registered taxonomy");
                taxonomies.push(handle);
            }

            registrations.push(Registration {
                content_type,
                taxonomies,
            });
        }

        Ok(registrations)
    }

    /// Attach registration and the message filters to a hook bus.
    pub fn subscribe(self: Arc<Self>, hooks: &mut Hooks) {
        let registrar = Arc::clone(&self);
        hooks.on_init(DEFAULT_WEIGHT, move |host| {
            registrar.register_all(host).map(|_| ())
        });

        let registrar = Arc::clone(&self);
        hooks.on_status_messages(DEFAULT_WEIGHT, move |messages, ctx| {
            registrar.status_messages(messages, ctx)
        });

        hooks.on_bulk_messages(DEFAULT_WEIGHT, move |messages, counts| {
            self.bulk_messages(messages, counts)
        });
    }

    /// Replace the status messages of the type currently being edited.
    ///
    /// Messages of other types, and indices this filter does not produce,
    /// pass through untouched. Index 5 is dropped without a revision and
    /// index 9 without a publication date.
    pub fn status_messages(
        &self,
        mut messages: StatusMessages,
        ctx: &MessageContext,
    ) -> StatusMessages {
        for ty in self.types.iter().filter(|ty| ty.key() == ctx.item_type) {
            let table = messages.entry(ty.key().to_string()).or_default();
            if ctx.revision.is_none() {
                table.remove(&5);
            }
            if ctx.scheduled_for.is_none() {
                table.remove(&9);
            }
            table.extend(status_messages_for(ty, ctx));
        }
        messages
    }

    /// Add bulk action messages for every configured type.
    pub fn bulk_messages(&self, mut messages: BulkMessages, counts: &BulkCounts) -> BulkMessages {
        for ty in &self.types {
            messages
                .entry(ty.key().to_string())
                .or_default()
                .extend(bulk_messages_for(ty, counts));
        }
        messages
    }

    /// Placeholder for the title field: "{singular} Title" for configured
    /// types, the incoming title otherwise.
    pub fn title_placeholder(&self, current_type: &str, title: &str) -> String {
        match self.get(current_type) {
            Some(ty) => format!("{} Title", ty.singular()),
            None => title.to_string(),
        }
    }

    /// Look up a type by key. The key is normalised first.
    pub fn get(&self, key: &str) -> Option<&ContentType> {
        self.position(&normalize_key(key)).map(|i| &self.types[i])
    }

    /// All types in insertion order.
    pub fn types(&self) -> &[ContentType] {
        &self.types
    }

    /// Type keys in insertion order.
    pub fn type_keys(&self) -> Vec<&str> {
        self.types.iter().map(ContentType::key).collect()
    }

    pub fn settings(&self) -> &RegistrarSettings {
        &self.settings
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }

    fn position(&self, key: &str) -> Option<usize> {
        self.types.iter().position(|ty| ty.key() == key)
    }
}
