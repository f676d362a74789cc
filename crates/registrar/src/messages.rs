//! Admin notices rewritten with a type's own labels.
//!
//! The host shows generic "Post updated." style notices. These filters
//! replace them for configured types, so an editor sees "Review updated."
//! instead.

use std::collections::BTreeMap;

use chrono::NaiveDateTime;

use crate::content_type::ContentType;

/// Per-type numbered status messages: type key -> index -> message.
pub type StatusMessages = BTreeMap<String, BTreeMap<u8, String>>;

/// Per-type bulk messages: type key -> outcome -> message.
pub type BulkMessages = BTreeMap<String, BTreeMap<String, String>>;

/// Date format for scheduled items, e.g. `Mar 4, 2026 @ 9:05`.
pub const SCHEDULE_DATE_FORMAT: &str = "%b %-d, %Y @ %-H:%M";

/// The item currently being edited in the admin UI.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MessageContext {
    /// Content type key of the item.
    pub item_type: String,
    /// Public URL of the item, if it has one yet.
    pub permalink: Option<String>,
    /// Publication date for scheduled items.
    pub scheduled_for: Option<NaiveDateTime>,
    /// Title of the revision just restored, if any.
    pub revision: Option<String>,
}

impl MessageContext {
    pub fn new(item_type: impl Into<String>) -> Self {
        Self {
            item_type: item_type.into(),
            ..Self::default()
        }
    }

    pub fn with_permalink(mut self, permalink: impl Into<String>) -> Self {
        self.permalink = Some(permalink.into());
        self
    }

    pub fn with_scheduled_for(mut self, date: NaiveDateTime) -> Self {
        self.scheduled_for = Some(date);
        self
    }

    pub fn with_revision(mut self, revision: impl Into<String>) -> Self {
        self.revision = Some(revision.into());
        self
    }
}

/// Item counts per bulk outcome.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BulkCounts {
    pub updated: u64,
    pub locked: u64,
    pub deleted: u64,
    pub trashed: u64,
    pub untrashed: u64,
}

/// Numbered status messages for one type.
///
/// Indices 2 and 3 are fixed by the host. Index 5 only exists while a
/// revision is being restored, index 9 only once a publication date is known.
///
/// Messages link to the item or its preview only when the type has a truthy
/// `public` argument *and* the context carries a permalink. A public type
/// without a permalink gets the same plain text as a private one.
pub fn status_messages_for(ty: &ContentType, ctx: &MessageContext) -> BTreeMap<u8, String> {
    let singular = ty.singular();
    let mut messages = BTreeMap::new();

    messages.insert(0, String::new());
    messages.insert(2, "Custom field updated.".to_string());
    messages.insert(3, "Custom field deleted.".to_string());
    messages.insert(4, format!("{singular} updated."));
    if let Some(revision) = &ctx.revision {
        messages.insert(5, format!("{singular} restored to revision from {revision}"));
    }
    messages.insert(7, format!("{singular} saved."));

    let scheduled = ctx
        .scheduled_for
        .map(|date| date.format(SCHEDULE_DATE_FORMAT).to_string());

    match ctx.permalink.as_deref().filter(|_| ty.is_public()) {
        Some(permalink) => {
            let view = escape_attr(permalink);
            let preview = escape_attr(&with_preview_query(permalink));
            messages.insert(
                1,
                format!(r#"{singular} updated. <a href="{view}">View {singular}</a>"#),
            );
            messages.insert(
                6,
                format!(r#"{singular} published. <a href="{view}">View {singular}</a>"#),
            );
            messages.insert(
                8,
                format!(
                    r#"{singular} submitted. <a target="_blank" href="{preview}">Preview {singular}</a>"#
                ),
            );
            if let Some(scheduled) = &scheduled {
                messages.insert(
                    9,
                    format!(
                        r#"{singular} scheduled for: <strong>{scheduled}</strong>. <a target="_blank" href="{view}">Preview {singular}</a>"#
                    ),
                );
            }
            messages.insert(
                10,
                format!(
                    r#"{singular} draft updated. <a target="_blank" href="{preview}">Preview {singular}</a>"#
                ),
            );
        }
        None => {
            messages.insert(1, format!("{singular} updated."));
            messages.insert(6, format!("{singular} published."));
            messages.insert(8, format!("{singular} submitted."));
            if let Some(scheduled) = &scheduled {
                messages.insert(
                    9,
                    format!("{singular} scheduled for: <strong>{scheduled}</strong>."),
                );
            }
            messages.insert(10, format!("{singular} draft updated."));
        }
    }

    messages
}

/// Bulk outcome messages for one type.
pub fn bulk_messages_for(ty: &ContentType, counts: &BulkCounts) -> BTreeMap<String, String> {
    let (singular, plural) = (ty.singular(), ty.plural());
    let outcomes = [
        (
            "updated",
            counts.updated,
            "{n} {label} updated.",
            "{n} {label} updated.",
        ),
        (
            "locked",
            counts.locked,
            "{n} {label} not updated, somebody is editing it.",
            "{n} {label} not updated, somebody is editing them.",
        ),
        (
            "deleted",
            counts.deleted,
            "{n} {label} permanently deleted.",
            "{n} {label} permanently deleted.",
        ),
        (
            "trashed",
            counts.trashed,
            "{n} {label} moved to the Trash.",
            "{n} {label} moved to the Trash.",
        ),
        (
            "untrashed",
            counts.untrashed,
            "{n} {label} restored from the Trash.",
            "{n} {label} restored from the Trash.",
        ),
    ];

    outcomes
        .into_iter()
        .map(|(outcome, count, one, many)| {
            let (template, label) = if count == 1 {
                (one, singular)
            } else {
                (many, plural)
            };
            let message = template
                .replace("{n}", &count.to_string())
                .replace("{label}", label);
            (outcome.to_string(), message)
        })
        .collect()
}

/// Append `preview=true` to a URL's query string.
fn with_preview_query(url: &str) -> String {
    let (base, fragment) = match url.split_once('#') {
        Some((base, fragment)) => (base, Some(fragment)),
        None => (url, None),
    };
    let separator = if base.contains('?') { '&' } else { '?' };
    match fragment {
        Some(fragment) => format!("{base}{separator}preview=true#{fragment}"),
        None => format!("{base}{separator}preview=true"),
    }
}

/// Escape a URL for use inside a double-quoted HTML attribute.
fn escape_attr(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#039;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            c => out.push(c),
        }
    }
    out
}
