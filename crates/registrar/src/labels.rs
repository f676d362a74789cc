//! Label dictionaries for content types and taxonomies.
//!
//! Both dictionaries are pure functions of the display names they are built
//! from. Overrides are applied afterwards with [`merge_labels`].

use serde_json::Value;

use crate::host::ArgBag;

/// Uppercase the first character of every whitespace-delimited word.
///
/// The rest of each word is left as it is, so `"movie review"` becomes
/// `"Movie Review"` and `"iPhone app"` becomes `"IPhone App"`.
pub fn capitalize_words(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut at_word_start = true;
    for c in s.chars() {
        if at_word_start {
            out.extend(c.to_uppercase());
        } else {
            out.push(c);
        }
        at_word_start = c.is_whitespace();
    }
    out
}

/// Turn a machine name into a display name: `"film_genre"` -> `"Film Genre"`.
pub fn humanize(id: &str) -> String {
    capitalize_words(&id.replace(['_', '-'], " "))
}

/// Label dictionary for a content type.
pub fn content_type_labels(singular: &str, plural: &str, menu_name: &str) -> ArgBag {
    let lower_singular = singular.to_lowercase();
    let lower_plural = plural.to_lowercase();

    let entries = [
        ("name", plural.to_string()),
        ("singular_name", singular.to_string()),
        ("menu_name", menu_name.to_string()),
        ("new_item", format!("New {singular}")),
        ("add_new_item", format!("Add new {singular}")),
        ("edit_item", format!("Edit {singular}")),
        ("view_item", format!("View {singular}")),
        ("view_items", format!("View {plural}")),
        ("search_items", format!("Search {plural}")),
        ("not_found", format!("No {lower_plural} found")),
        ("not_found_in_trash", format!("No {lower_plural} found in trash")),
        ("all_items", format!("All {plural}")),
        ("archives", format!("{singular} Archives")),
        ("attributes", format!("{singular} Attributes")),
        ("insert_into_item", format!("Insert into {lower_singular}")),
        ("uploaded_to_this_item", format!("Uploaded to this {lower_singular}")),
        // Hierarchical types only.
        ("parent_item", format!("Parent {singular}")),
        ("parent_item_colon", format!("Parent {singular}:")),
        // Only shown when the host's archive title is filtered.
        ("archive_title", plural.to_string()),
    ];

    to_bag(entries)
}

/// Label dictionary for a taxonomy.
pub fn taxonomy_labels(name: &str, singular_name: &str) -> ArgBag {
    let lower_name = name.to_lowercase();

    let entries = [
        ("name", name.to_string()),
        ("singular_name", singular_name.to_string()),
        ("menu_name", name.to_string()),
        ("all_items", format!("All {name}")),
        ("edit_item", format!("Edit {singular_name}")),
        ("view_item", format!("View {singular_name}")),
        ("update_item", format!("Update {singular_name}")),
        ("add_new_item", format!("Add New {singular_name}")),
        ("new_item_name", format!("New {singular_name} Name")),
        ("parent_item", format!("Parent {singular_name}")),
        ("parent_item_colon", format!("Parent {singular_name}:")),
        ("search_items", format!("Search {name}")),
        ("popular_items", format!("Popular {name}")),
        (
            "separate_items_with_commas",
            format!("Separate {lower_name} with commas"),
        ),
        ("add_or_remove_items", format!("Add or remove {lower_name}")),
        ("not_found", format!("No {lower_name} found.")),
    ];

    to_bag(entries)
}

/// Apply label overrides key by key. Override values win; keys present on
/// only one side pass through.
pub fn merge_labels(mut defaults: ArgBag, overrides: Option<&ArgBag>) -> ArgBag {
    if let Some(overrides) = overrides {
        for (key, value) in overrides {
            defaults.insert(key.clone(), value.clone());
        }
    }
    defaults
}

fn to_bag<const N: usize>(entries: [(&str, String); N]) -> ArgBag {
    entries
        .into_iter()
        .map(|(key, value)| (key.to_string(), Value::String(value)))
        .collect()
}
