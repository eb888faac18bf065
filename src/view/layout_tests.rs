//! Tests for the screen frame.

use super::*;
use crate::model::{EventStore, InputError};
use crate::state::{SortMode, Timings};
use crate::test_harness::{buffer_to_string, record_in};
use ratatui::backend::TestBackend;
use ratatui::Terminal;
use std::sync::Arc;
use std::time::Instant;

// ===== Test Helpers =====

fn render(state: &AppState) -> String {
    let palette = Palette::default();
    let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
    terminal
        .draw(|frame| render_layout(frame, state, &palette))
        .unwrap();
    buffer_to_string(terminal.backend().buffer())
}

fn state_at(route: Route) -> AppState {
    AppState::new(route, Timings::default(), SortMode::DateAsc, Instant::now())
}

fn store() -> Arc<EventStore> {
    let mut jazz = record_in(1, "Jazz Night", "2025-01-10", "music", "Addis Ababa");
    jazz.is_featured = true;
    Arc::new(EventStore::from_records(vec![
        jazz,
        record_in(2, "Gallery Walk", "2025-02-05", "art", "Hawassa"),
    ]))
}

// ===== Tests =====

#[test]
fn nav_bar_shows_screens_and_location() {
    let screen = render(&state_at(Route::About));
    let first_line = screen.lines().next().unwrap();
    assert!(first_line.contains("eventboard"));
    assert!(first_line.contains("1 Home"));
    assert!(first_line.contains("4 Contact"));
    assert!(first_line.contains("about-us.html"));
}

#[test]
fn home_shows_loading_until_store_arrives() {
    let mut state = state_at(Route::Home);
    assert!(render(&state).contains("Loading events..."));

    state.on_store_ready(store());
    let screen = render(&state);
    assert!(!screen.contains("Loading events..."));
    assert!(screen.contains("Jazz Night"));
}

#[test]
fn failed_store_replaces_loading_indicator() {
    let mut state = state_at(Route::Events { search: None });
    state.on_store_failed(&InputError::NoInput);
    let screen = render(&state);
    assert!(screen.contains("Could not load events"));
    assert!(!screen.contains("Loading events..."));
}

#[test]
fn banner_is_drawn_under_nav_bar() {
    let mut state = state_at(Route::Contact);
    state.banner = Some(crate::state::Banner {
        text: "Thank you!".to_string(),
        expires_at: Instant::now(),
    });
    let screen = render(&state);
    assert!(screen.lines().nth(1).unwrap().contains("Thank you!"));
}

#[test]
fn status_hints_follow_input_mode() {
    let mut state = state_at(Route::Home);
    assert!(status_hints(&state).contains("/: search"));

    state.input_mode = InputMode::HomeSearch;
    assert_eq!(status_hints(&state), "Enter: search events | Esc: cancel");

    state.input_mode = InputMode::Listing(ListingInput::FromDate);
    assert!(status_hints(&state).starts_with("YYYY-MM-DD"));
}

#[test]
fn status_hints_on_forms_mention_submit() {
    let state = state_at(Route::Contact);
    assert!(status_hints(&state).contains("Enter: submit"));
}

#[test]
fn help_overlay_draws_on_top() {
    let mut state = state_at(Route::Home);
    state.help_visible = true;
    let screen = render(&state);
    assert!(screen.contains("Keyboard Shortcuts"));
    assert!(screen.contains("Press Esc or ? to close"));
}
