//! Screens waiting for a store that arrives late, or never.

use super::sample_store;
use crate::model::{InputError, Route};
use crate::test_harness::AcceptanceTestHarness;
use crossterm::event::KeyCode;
use std::path::PathBuf;
use std::time::{Duration, Instant};

#[test]
fn home_shows_loading_until_store_arrives() {
    let mut harness = AcceptanceTestHarness::pending(Route::Home);
    harness.tick(Instant::now());

    let before = harness.render_to_string();
    assert!(before.contains("Loading events..."));
    assert!(harness.state().home.featured.is_none());

    harness.deliver(Ok(sample_store()), Instant::now());

    let after = harness.render_to_string();
    assert!(!after.contains("Loading events..."));
    assert!(after.contains("Jazz Night"));
    assert_eq!(harness.state().bootstrap().render_count(), 1);
}

#[test]
fn fallback_tick_does_not_render_twice() {
    let mut harness = AcceptanceTestHarness::pending(Route::Events { search: None });
    let now = Instant::now();
    harness.deliver(Ok(sample_store()), now);
    assert_eq!(harness.state().bootstrap().render_count(), 1);

    harness.tick(now + Duration::from_secs(5));

    assert_eq!(harness.state().bootstrap().render_count(), 1);
    assert!(harness.render_to_string().contains("Found 8 events"));
}

#[test]
fn failed_load_is_shown_on_store_screens() {
    let mut harness = AcceptanceTestHarness::pending(Route::Events { search: None });
    harness.deliver(
        Err(InputError::FileNotFound {
            path: PathBuf::from("events.json"),
        }),
        Instant::now(),
    );

    let screen = harness.render_to_string();
    assert!(screen.contains("Could not load events: File not found: events.json"));

    // Screens without the store keep working
    harness.send_key(KeyCode::Char('3'));
    assert!(harness.render_to_string().contains("About Us"));
}

#[test]
fn screen_opened_while_loading_renders_on_delivery() {
    let mut harness = AcceptanceTestHarness::pending(Route::Home);
    harness.send_key(KeyCode::Char('2'));
    assert!(harness.render_to_string().contains("Loading events..."));

    harness.deliver(Ok(sample_store()), Instant::now());

    assert!(harness.state().listing.loaded);
    assert!(harness.render_to_string().contains("Found 8 events"));
}
