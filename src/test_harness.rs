//! Acceptance Test Harness for TUI testing
//!
//! Provides a high-level API for acceptance testing user stories by wrapping
//! TuiApp<TestBackend> with convenient methods for simulating user interactions.
//! Also hosts the record builders shared by unit tests.

use crate::config::keybindings::KeyBindings;
use crate::model::{EventId, EventRecord, EventStore, InputError, Route};
use crate::source::{readiness, ReadyNotifier, StoreLoader};
use crate::state::{AppState, Timings};
use crate::view::TuiApp;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::backend::TestBackend;
use ratatui::Terminal;
use std::time::Instant;

/// Minimal record in the "music" category in Addis Ababa.
pub(crate) fn record(id: i64, title: &str, date: &str) -> EventRecord {
    record_in(id, title, date, "music", "Addis Ababa")
}

/// Minimal record with an explicit category and city.
pub(crate) fn record_in(
    id: i64,
    title: &str,
    date: &str,
    category: &str,
    city: &str,
) -> EventRecord {
    EventRecord {
        id: EventId::new(id),
        title: title.to_string(),
        category: category.to_string(),
        city: city.to_string(),
        date: date.to_string(),
        time: "18:00".to_string(),
        location_name: "Community Hall".to_string(),
        organizer: None,
        image_url: None,
        description: None,
        extended_description: None,
        is_featured: false,
    }
}

/// Convert a ratatui buffer to a string representation for snapshot testing.
///
/// Captures the visual output character by character, preserving layout.
/// Trailing whitespace and empty lines are removed to keep snapshots clean.
pub(crate) fn buffer_to_string(buffer: &ratatui::buffer::Buffer) -> String {
    let area = buffer.area();
    let mut lines = Vec::new();

    for y in area.top()..area.bottom() {
        let mut line = String::new();
        for x in area.left()..area.right() {
            let cell = &buffer[(x, y)];
            line.push_str(cell.symbol());
        }
        let trimmed = line.trim_end();
        if !trimmed.is_empty() {
            lines.push(trimmed.to_string());
        }
    }

    lines.join("\n")
}

/// Test harness for acceptance testing
///
/// Wraps TuiApp<TestBackend> to provide a clean API for simulating user
/// interactions in acceptance tests.
pub struct AcceptanceTestHarness {
    app: TuiApp<TestBackend>,
    notifier: Option<ReadyNotifier>,
    running: bool,
}

impl AcceptanceTestHarness {
    /// App on `start` with `store` already delivered, at 100x30.
    pub fn with_store(store: EventStore, start: Route) -> Self {
        Self::with_store_and_size(store, start, 100, 30)
    }

    /// App on `start` with `store` already delivered, at a custom size.
    ///
    /// One tick runs so the store reaches the state before the first key.
    pub fn with_store_and_size(store: EventStore, start: Route, width: u16, height: u16) -> Self {
        let (loader, signal) = StoreLoader::preloaded(store);
        let mut harness = Self::build(start, loader, signal, None, width, height);
        harness.tick(Instant::now());
        harness
    }

    /// App on `start` whose store has not arrived yet.
    ///
    /// Use [`deliver`](Self::deliver) to hand it over.
    pub fn pending(start: Route) -> Self {
        let (notifier, signal) = readiness::channel();
        let (loader, _) = StoreLoader::preloaded(EventStore::default());
        Self::build(start, loader, signal, Some(notifier), 100, 30)
    }

    fn build(
        start: Route,
        loader: StoreLoader,
        signal: crate::source::ReadySignal,
        notifier: Option<ReadyNotifier>,
        width: u16,
        height: u16,
    ) -> Self {
        let terminal =
            Terminal::new(TestBackend::new(width, height)).expect("TestBackend never fails");
        let app_state = AppState::new(start, Timings::default(), Default::default(), Instant::now());
        let app = TuiApp::new_for_test(terminal, app_state, loader, signal, KeyBindings::default());
        Self {
            app,
            notifier,
            running: true,
        }
    }

    /// Deliver the load result of a [`pending`](Self::pending) harness and
    /// tick once at `now`.
    pub fn deliver(&mut self, result: Result<EventStore, InputError>, now: Instant) {
        if let Some(notifier) = self.notifier.take() {
            notifier.notify(result);
        }
        self.tick(now);
    }

    /// Run one event loop tick at `now`.
    pub fn tick(&mut self, now: Instant) {
        self.app.tick_test(now);
    }

    /// Send a single key event
    ///
    /// Returns true if the app quit as a result of this key.
    pub fn send_key(&mut self, key: KeyCode) -> bool {
        self.send_key_with_mods(key, KeyModifiers::NONE)
    }

    /// Send key with modifiers (e.g., Ctrl+C)
    pub fn send_key_with_mods(&mut self, key: KeyCode, mods: KeyModifiers) -> bool {
        if !self.running {
            return true; // Already quit
        }

        let quit = self.app.handle_key_test(KeyEvent::new(key, mods));
        if quit {
            self.running = false;
        }
        quit
    }

    /// Type text (sends individual character key events)
    pub fn type_text(&mut self, text: &str) {
        for ch in text.chars() {
            if self.send_key(KeyCode::Char(ch)) {
                break; // Quit encountered
            }
        }
    }

    /// Access app state for assertions
    pub fn state(&self) -> &AppState {
        self.app.app_state()
    }

    /// Check if app is still running
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Render the current frame to a string
    ///
    /// # Panics
    /// Panics if rendering fails (should never happen with TestBackend)
    pub fn render_to_string(&mut self) -> String {
        self.app
            .render_test()
            .expect("Rendering should succeed in test harness");
        buffer_to_string(self.app.terminal().backend().buffer())
    }
}
