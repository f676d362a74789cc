//! The host CMS collaborator.
//!
//! The registrar never stores content or renders pages itself. It hands the
//! resolved argument bags to whatever implements [`ContentHost`], the same way
//! plugins hand definitions to the kernel across the tap boundary.

use crate::error::HostError;

/// Argument bag passed to the host's registration calls.
///
/// Keys keep their insertion order (serde_json `preserve_order`).
pub type ArgBag = serde_json::Map<String, serde_json::Value>;

/// What the host hands back for a successful registration.
#[derive(Debug, Clone, PartialEq)]
pub struct Handle {
    /// Registered machine name (content type key or taxonomy id).
    pub name: String,
    /// Arguments as the host stored them.
    pub args: ArgBag,
}

impl Handle {
    pub fn new(name: impl Into<String>, args: ArgBag) -> Self {
        Self {
            name: name.into(),
            args,
        }
    }
}

/// Registration API of the host CMS.
///
/// Both calls are synchronous and either succeed or return a [`HostError`]
/// carrying a human-readable message.
pub trait ContentHost {
    /// Register a content type under `key`.
    fn register_content_type(&mut self, key: &str, args: &ArgBag) -> Result<Handle, HostError>;

    /// Register a taxonomy `id` against the content types in `owners`.
    fn register_taxonomy(
        &mut self,
        id: &str,
        owners: &[String],
        args: &ArgBag,
    ) -> Result<Handle, HostError>;
}
