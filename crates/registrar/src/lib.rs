//! Content Registrar
//!
//! Turns a compact content-type configuration into the full argument bags a
//! host CMS expects, registers the types and their taxonomies through the
//! [`ContentHost`] trait, and rewrites the host's generic admin notices with
//! the configured labels.
//!
//! ```ignore
//! let registrar = Registrar::from_value(
//!     &json!({ "movie_review": { "singular": "Review", "plural": "Reviews" } }),
//!     RegistrarSettings::default(),
//! )?;
//!
//! let registrar = Arc::new(registrar);
//! let mut hooks = Hooks::new();
//! Arc::clone(&registrar).subscribe(&mut hooks);
//! hooks.fire_init(&mut host)?;
//! ```

pub mod config;
pub mod content_type;
pub mod error;
pub mod hooks;
pub mod host;
pub mod inspect;
pub mod labels;
pub mod messages;
pub mod registrar;
pub mod taxonomy;

pub use config::{ConfigInput, RegistrarSettings, load_config_file};
pub use content_type::ContentType;
pub use error::{ConfigError, HostError, RegistrarError, RegistrarResult};
pub use hooks::Hooks;
pub use host::{ArgBag, ContentHost, Handle};
pub use messages::{BulkCounts, BulkMessages, MessageContext, StatusMessages};
pub use registrar::{Registrar, Registration};
pub use taxonomy::{Taxonomy, TaxonomyDecl};
