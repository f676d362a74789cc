//! Read-only rendering of resolved types, used by the `registrar` binary.
//!
//! Nothing here talks to a host. The output is exactly what
//! [`crate::Registrar::register_all`] would hand over: each type's key,
//! derived names and argument bag, plus its resolved taxonomies.

use tracing::debug;

use crate::content_type::ContentType;
use crate::error::{RegistrarError, RegistrarResult};
use crate::registrar::Registrar;

/// Pick the types to show: one by key, or all of them in insertion order.
pub fn select<'a>(
    registrar: &'a Registrar,
    type_key: Option<&str>,
) -> RegistrarResult<Vec<&'a ContentType>> {
    match type_key {
        Some(key) => registrar
            .get(key)
            .map(|ty| vec![ty])
            .ok_or_else(|| RegistrarError::UnknownType {
                key: key.to_string(),
                known: registrar.type_keys().join(", "),
            }),
        None => Ok(registrar.types().iter().collect()),
    }
}

/// Render the selected types as JSON, pretty-printed unless `compact`.
pub fn render(
    registrar: &Registrar,
    type_key: Option<&str>,
    compact: bool,
) -> RegistrarResult<String> {
    let selected = select(registrar, type_key)?;
    debug!(types = selected.len(), compact, "rendering resolved types");

    let rendered = if compact {
        serde_json::to_string(&selected)?
    } else {
        serde_json::to_string_pretty(&selected)?
    };
    Ok(rendered)
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use crate::config::RegistrarSettings;
    use serde_json::{Value, json};

    fn registrar() -> Registrar {
        Registrar::from_value(
            &json!({
                "movie_review": {
                    "singular": "Review",
                    "plural": "Reviews",
                    "taxonomy": ["genre"]
                },
                "book": {}
            }),
            RegistrarSettings::default(),
        )
        .unwrap()
    }

    #[test]
    fn all_types_in_insertion_order() {
        let out: Value = serde_json::from_str(&render(&registrar(), None, false).unwrap()).unwrap();
        let keys: Vec<&str> = out
            .as_array()
            .unwrap()
            .iter()
            .map(|ty| ty["key"].as_str().unwrap())
            .collect();
        assert_eq!(keys, vec!["movie_review", "book"]);
    }

    #[test]
    fn single_type_carries_args_and_taxonomies() {
        let out: Value =
            serde_json::from_str(&render(&registrar(), Some("Movie Review"), false).unwrap())
                .unwrap();
        let types = out.as_array().unwrap();
        assert_eq!(types.len(), 1);

        let ty = &types[0];
        assert_eq!(ty["slug"], "movie-review");
        assert_eq!(ty["menu_name"], "Reviews");
        assert_eq!(ty["args"]["labels"]["name"], "Reviews");
        assert_eq!(ty["taxonomies"][0]["id"], "genre");
        assert_eq!(ty["taxonomies"][0]["post_types"], json!(["movie_review"]));
        assert_eq!(ty["taxonomies"][0]["args"]["hierarchical"], true);
    }

    #[test]
    fn unknown_type_lists_known_keys() {
        let err = render(&registrar(), Some("podcast"), false).unwrap_err();
        assert!(matches!(err, RegistrarError::UnknownType { ref key, .. } if key == "podcast"));
        let msg = err.to_string();
        assert!(msg.contains("'podcast'"));
        assert!(msg.contains("movie_review, book"));
    }

    #[test]
    fn compact_output_is_one_line() {
        let registrar = registrar();
        let compact = render(&registrar, Some("book"), true).unwrap();
        let pretty = render(&registrar, Some("book"), false).unwrap();

        assert!(!compact.contains('\n'));
        assert!(pretty.contains('\n'));
        assert_eq!(
            serde_json::from_str::<Value>(&compact).unwrap(),
            serde_json::from_str::<Value>(&pretty).unwrap()
        );
    }
}
