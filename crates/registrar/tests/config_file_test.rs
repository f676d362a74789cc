#![allow(clippy::unwrap_used, clippy::expect_used)]
//! Configuration file loading tests.

use std::path::PathBuf;

use content_registrar::{ConfigError, Registrar, RegistrarError, inspect, load_config_file};

/// Write `contents` to a fresh file under the target temp dir.
fn write_fixture(name: &str, contents: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("content-registrar-{}", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();
    let path = dir.join(name);
    std::fs::write(&path, contents).unwrap();
    path
}

#[test]
fn yaml_with_settings() {
    let path = write_fixture(
        "reviews.yml",
        r#"
settings:
  type_defaults:
    menu_icon: dashicons-video-alt
types:
  movie_review:
    singular: Review
    plural: Reviews
    taxonomy:
      genre:
        post_types: [movie_review]
  Festival Entry: {}
"#,
    );

    let file = load_config_file(&path).unwrap();
    let registrar = Registrar::from_value(&file.types, file.settings).unwrap();

    assert_eq!(registrar.type_keys(), vec!["movie_review", "festival_entry"]);
    let review = registrar.get("movie_review").unwrap();
    assert_eq!(review.args()["menu_icon"], "dashicons-video-alt");
    assert_eq!(review.taxonomies()[0].name(), "Genres");
    assert_eq!(registrar.get("festival_entry").unwrap().slug(), "festival-entry");
}

#[test]
fn toml_plain_mapping() {
    let path = write_fixture(
        "library.toml",
        r#"
[book]
singular = "Book"
supports = ["title", "editor"]

[book.labels]
menu_name = "Library"
"#,
    );

    let file = load_config_file(&path).unwrap();
    let registrar = Registrar::from_value(&file.types, file.settings).unwrap();

    let book = registrar.get("book").unwrap();
    assert_eq!(book.plural(), "Books");
    assert_eq!(book.labels().unwrap()["menu_name"], "Library");
    assert_eq!(book.args()["supports"], serde_json::json!(["title", "editor"]));
}

#[test]
fn json_single_type_name() {
    let path = write_fixture("single.json", r#""Podcast Episode""#);

    let file = load_config_file(&path).unwrap();
    let registrar = Registrar::from_value(&file.types, file.settings).unwrap();
    assert_eq!(registrar.type_keys(), vec!["podcast_episode"]);
}

#[test]
fn unknown_extension_is_rejected() {
    let path = write_fixture("types.ini", "[book]");
    let err = load_config_file(&path).unwrap_err();
    assert!(matches!(err, ConfigError::UnsupportedFormat { .. }));
}

#[test]
fn missing_file_is_a_read_error() {
    let err = load_config_file(&PathBuf::from("/nonexistent/registrar/types.yml")).unwrap_err();
    assert!(matches!(err, ConfigError::Read { .. }));
}

#[test]
fn broken_yaml_is_a_parse_error() {
    let path = write_fixture("broken.yaml", "book: [unclosed");
    let err = load_config_file(&path).unwrap_err();
    assert!(matches!(err, ConfigError::Parse { .. }));
    assert!(err.to_string().contains("broken.yaml"));
}

#[test]
fn loaded_file_renders_for_inspection() {
    let path = write_fixture(
        "inspect.json",
        r#"{ "movie_review": { "singular": "Review", "taxonomy": ["genre"] }, "book": {} }"#,
    );

    let file = load_config_file(&path).unwrap();
    let registrar = Registrar::from_value(&file.types, file.settings).unwrap();

    let rendered = inspect::render(&registrar, Some("movie_review"), true).unwrap();
    let out: serde_json::Value = serde_json::from_str(&rendered).unwrap();
    assert_eq!(out[0]["key"], "movie_review");
    assert_eq!(out[0]["args"]["rewrite"]["slug"], "movie-review");
    assert_eq!(out[0]["taxonomies"][0]["name"], "Genres");

    let err = inspect::render(&registrar, Some("podcast"), true).unwrap_err();
    assert!(matches!(err, RegistrarError::UnknownType { .. }));
}
