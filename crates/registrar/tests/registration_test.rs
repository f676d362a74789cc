#![allow(clippy::unwrap_used, clippy::expect_used)]
//! Registration integration tests.
//!
//! Drives a registrar against a recording host and checks what the host saw.

use std::sync::Arc;

use content_registrar::{Hooks, Registrar, RegistrarError, RegistrarSettings};
use content_registrar_test_utils::{
    HostCall, RecordingHost, assert, config_of, configs, test_type,
};
use serde_json::json;

// -------------------------------------------------------------------------
// Content types
// -------------------------------------------------------------------------

#[test]
fn registers_each_type_once_in_insertion_order() {
    let registrar = Registrar::from_value(&configs::library(), RegistrarSettings::default()).unwrap();
    let mut host = RecordingHost::new();

    let registrations = registrar.register_all(&mut host).unwrap();

    assert_eq!(
        host.content_type_keys(),
        vec!["periodical", "book", "audio_book"]
    );
    assert_eq!(registrations.len(), 3);
    assert_eq!(registrations[1].content_type.name, "book");
}

#[test]
fn host_receives_the_resolved_bag() {
    let registrar =
        Registrar::from_value(&configs::movie_reviews(), RegistrarSettings::default()).unwrap();
    let mut host = RecordingHost::new();
    registrar.register_all(&mut host).unwrap();

    let call = host.call_for("movie_review").unwrap();
    let args = call.args();
    assert::arg_eq(args, "slug", &json!("movie-review"));
    assert::arg_eq(args, "rewrite", &json!({ "slug": "movie-review" }));
    assert::arg_eq(args, "capability_type", &json!("post"));
    assert_eq!(args["labels"]["search_items"], "Search Reviews");
    assert_eq!(args["labels"]["not_found"], "No reviews found");
}

#[test]
fn taxonomies_follow_their_type() {
    let registrar = Registrar::from_value(&configs::library(), RegistrarSettings::default()).unwrap();
    let mut host = RecordingHost::new();
    registrar.register_all(&mut host).unwrap();

    let order: Vec<&str> = host.calls.iter().map(HostCall::name).collect();
    assert_eq!(
        order,
        vec!["periodical", "publisher", "book", "author_name", "shelf", "audio_book"]
    );

    let Some(HostCall::Taxonomy { owners, args, .. }) = host.call_for("author_name") else {
        panic!("author_name was not registered as a taxonomy");
    };
    assert_eq!(owners, &vec!["book".to_string()]);
    assert_eq!(args["labels"]["name"], "Author Names");
    assert_eq!(args["rest_base"], "author_name");
}

#[test]
fn genre_taxonomy_resolution() {
    let registrar =
        Registrar::from_value(&configs::movie_reviews(), RegistrarSettings::default()).unwrap();
    let mut host = RecordingHost::new();
    let registrations = registrar.register_all(&mut host).unwrap();

    let genre = &registrations[0].taxonomies[0];
    assert_eq!(genre.name, "genre");
    assert_eq!(genre.args["labels"]["name"], "Genres");
    assert_eq!(genre.args["labels"]["singular_name"], "Genre");
    assert_eq!(genre.args["rest_base"], "genre");
}

// -------------------------------------------------------------------------
// Failures
// -------------------------------------------------------------------------

#[test]
fn malformed_config_never_reaches_the_host() {
    let host = RecordingHost::new();
    let result = Registrar::from_value(
        &json!({ "book": {}, "movie": "not-a-map" }),
        RegistrarSettings::default(),
    );

    assert!(matches!(result, Err(RegistrarError::Config(_))));
    assert!(host.calls.is_empty());
}

#[test]
fn host_failure_stops_registration() {
    let registrar = Registrar::from_value(&configs::library(), RegistrarSettings::default()).unwrap();
    let mut host = RecordingHost::new().fail_on("book", "Post type key is reserved");

    let err = registrar.register_all(&mut host).unwrap_err();

    assert!(matches!(err, RegistrarError::ContentTypeRegistration { ref key, .. } if key == "book"));
    assert_eq!(err.host_message(), Some("Post type key is reserved"));
    // Nothing after the failing entry was attempted.
    assert_eq!(host.content_type_keys(), vec!["periodical", "book"]);
    assert!(!host.taxonomy_ids().contains(&"author_name"));
}

#[test]
fn taxonomy_failure_names_owner() {
    let registrar = Registrar::from_value(&configs::library(), RegistrarSettings::default()).unwrap();
    let mut host = RecordingHost::new().fail_on("shelf", "Taxonomy names must be at most 32 characters");

    let err = registrar.register_all(&mut host).unwrap_err();
    let msg = err.to_string();
    assert::contains(&msg, "'shelf'");
    assert::contains(&msg, "'book'");
    assert!(host.call_for("audio_book").is_none());
}

// -------------------------------------------------------------------------
// Hook bus
// -------------------------------------------------------------------------

#[test]
fn init_tap_registers_once() {
    let registrar = Arc::new(
        Registrar::from_value(
            &config_of([
                test_type("movie_review").named("Review", "Reviews"),
                test_type("book"),
            ]),
            RegistrarSettings::default(),
        )
        .unwrap(),
    );
    let mut hooks = Hooks::new();
    Arc::clone(&registrar).subscribe(&mut hooks);

    let mut host = RecordingHost::new();
    assert!(hooks.fire_init(&mut host).unwrap());
    assert!(!hooks.fire_init(&mut host).unwrap());

    assert_eq!(host.content_type_keys(), vec!["movie_review", "book"]);
}

#[test]
fn init_tap_surfaces_host_failure() {
    let registrar = Arc::new(
        Registrar::from_value(&configs::movie_reviews(), RegistrarSettings::default()).unwrap(),
    );
    let mut hooks = Hooks::new();
    registrar.subscribe(&mut hooks);

    let mut host = RecordingHost::new().fail_on("genre", "invalid taxonomy");
    let err = hooks.fire_init(&mut host).unwrap_err();
    assert_eq!(err.host_message(), Some("invalid taxonomy"));
}

#[test]
fn settings_change_defaults_for_every_type() {
    let settings: RegistrarSettings = serde_json::from_value(json!({
        "type_defaults": { "show_in_rest": true, "menu_icon": "dashicons-video-alt" },
        "term_controller": "Genre_Terms_Controller"
    }))
    .unwrap();

    let registrar = Registrar::from_value(&configs::movie_reviews(), settings).unwrap();
    let mut host = RecordingHost::new();
    registrar.register_all(&mut host).unwrap();

    let review = host.call_for("movie_review").unwrap();
    assert::arg_eq(review.args(), "show_in_rest", &json!(true));
    assert::arg_eq(review.args(), "menu_icon", &json!("dashicons-video-alt"));

    let genre = host.call_for("genre").unwrap();
    assert::arg_eq(
        genre.args(),
        "rest_controller_class",
        &json!("Genre_Terms_Controller"),
    );
}
