//! Hook bus for lifecycle and admin-text extension points.
//!
//! Handlers subscribe to a named tap with a weight. When a tap fires, its
//! handlers run in weight order (lower = earlier); equal weights keep
//! subscription order.

use tracing::{debug, info};

use crate::error::RegistrarResult;
use crate::host::ContentHost;
use crate::messages::{BulkCounts, BulkMessages, MessageContext, StatusMessages};

/// Fired once when the host system initialises.
pub const TAP_INIT: &str = "tap_init";
/// Filters the per-type numbered status messages.
pub const TAP_STATUS_MESSAGES: &str = "tap_status_messages";
/// Filters the per-type bulk action messages.
pub const TAP_BULK_MESSAGES: &str = "tap_bulk_messages";

/// All taps the bus knows about.
pub const KNOWN_TAPS: &[&str] = &[TAP_INIT, TAP_STATUS_MESSAGES, TAP_BULK_MESSAGES];

/// Default handler weight.
pub const DEFAULT_WEIGHT: i32 = 10;

type InitHandler = Box<dyn FnMut(&mut dyn ContentHost) -> RegistrarResult<()>>;
type StatusFilter = Box<dyn Fn(StatusMessages, &MessageContext) -> StatusMessages>;
type BulkFilter = Box<dyn Fn(BulkMessages, &BulkCounts) -> BulkMessages>;

struct Weighted<T> {
    weight: i32,
    handler: T,
}

/// Subscription registry for the three taps.
#[derive(Default)]
pub struct Hooks {
    init: Vec<Weighted<InitHandler>>,
    status: Vec<Weighted<StatusFilter>>,
    bulk: Vec<Weighted<BulkFilter>>,
    init_fired: bool,
}

impl std::fmt::Debug for Hooks {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Hooks")
            .field("init", &self.init.len())
            .field("status", &self.status.len())
            .field("bulk", &self.bulk.len())
            .field("init_fired", &self.init_fired)
            .finish()
    }
}

impl Hooks {
    pub fn new() -> Self {
        Self::default()
    }

    /// Subscribe an initialisation handler.
    pub fn on_init<F>(&mut self, weight: i32, handler: F)
    where
        F: FnMut(&mut dyn ContentHost) -> RegistrarResult<()> + 'static,
    {
        insert_weighted(&mut self.init, weight, Box::new(handler));
    }

    /// Subscribe a status message filter.
    pub fn on_status_messages<F>(&mut self, weight: i32, filter: F)
    where
        F: Fn(StatusMessages, &MessageContext) -> StatusMessages + 'static,
    {
        insert_weighted(&mut self.status, weight, Box::new(filter));
    }

    /// Subscribe a bulk message filter.
    pub fn on_bulk_messages<F>(&mut self, weight: i32, filter: F)
    where
        F: Fn(BulkMessages, &BulkCounts) -> BulkMessages + 'static,
    {
        insert_weighted(&mut self.bulk, weight, Box::new(filter));
    }

    /// Run the init handlers, at most once per bus.
    ///
    /// Returns `Ok(false)` if init already fired. The first failing handler
    /// stops the rest and its error is returned.
    pub fn fire_init(&mut self, host: &mut dyn ContentHost) -> RegistrarResult<bool> {
        if self.init_fired {
            debug!(tap = TAP_INIT, "init already fired, skipping");
            return Ok(false);
        }
        self.init_fired = true;

        info!(tap = TAP_INIT, handlers = self.init.len(), "firing init");
        for entry in &mut self.init {
            (entry.handler)(&mut *host)?;
        }
        Ok(true)
    }

    /// Whether [`Hooks::fire_init`] has already run.
    pub fn init_fired(&self) -> bool {
        self.init_fired
    }

    /// Pass status messages through every subscribed filter.
    pub fn filter_status_messages(
        &self,
        messages: StatusMessages,
        ctx: &MessageContext,
    ) -> StatusMessages {
        self.status
            .iter()
            .fold(messages, |messages, entry| (entry.handler)(messages, ctx))
    }

    /// Pass bulk messages through every subscribed filter.
    pub fn filter_bulk_messages(
        &self,
        messages: BulkMessages,
        counts: &BulkCounts,
    ) -> BulkMessages {
        self.bulk
            .iter()
            .fold(messages, |messages, entry| (entry.handler)(messages, counts))
    }

    /// Number of handlers subscribed to a tap.
    pub fn handler_count(&self, tap_name: &str) -> usize {
        match tap_name {
            TAP_INIT => self.init.len(),
            TAP_STATUS_MESSAGES => self.status.len(),
            TAP_BULK_MESSAGES => self.bulk.len(),
            _ => 0,
        }
    }

    /// Check if anything subscribed to a tap.
    pub fn has_tap(&self, tap_name: &str) -> bool {
        self.handler_count(tap_name) > 0
    }
}

/// Insert after every entry of lower or equal weight.
fn insert_weighted<T>(list: &mut Vec<Weighted<T>>, weight: i32, handler: T) {
    let pos = list.partition_point(|e| e.weight <= weight);
    list.insert(pos, Weighted { weight, handler });
}
