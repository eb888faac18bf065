//! Application state and transitions.
//!
//! AppState is the root state type containing all UI state. Every transition
//! takes the current instant explicitly, so timing behavior (fallback
//! attempts, simulated submissions, banner expiry) is testable without a
//! clock.

use crate::model::{EventId, EventRecord, EventStore, InputError, KeyAction, Route};
use crate::state::bootstrap::{Attempt, Bootstrap, Trigger, DEFAULT_FALLBACK_DELAY};
use crate::state::detail::{DetailState, RsvpState};
use crate::state::forms::{FormKind, FormState, SubmitOutcome, DEFAULT_SUBMIT_DELAY};
use crate::state::home::HomeState;
use crate::state::listing::{ListingInput, ListingState};
use crate::state::pipeline::SortMode;
use crate::state::text_input::{apply_edit_key, EditOutcome, TextInput};
use crossterm::event::{KeyCode, KeyEvent};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::{debug, info, warn};

/// Default lifetime of a success banner.
pub const DEFAULT_BANNER_DURATION: Duration = Duration::from_millis(5000);

/// Delays that drive the timed parts of the UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timings {
    /// Delay before the fallback bootstrap attempt.
    pub fallback_delay: Duration,
    /// Simulated submission delay.
    pub submit_delay: Duration,
    /// How long a success banner stays up.
    pub banner_duration: Duration,
}

impl Default for Timings {
    fn default() -> Self {
        Self {
            fallback_delay: DEFAULT_FALLBACK_DELAY,
            submit_delay: DEFAULT_SUBMIT_DELAY,
            banner_duration: DEFAULT_BANNER_DURATION,
        }
    }
}

/// Which text control receives typed characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputMode {
    /// Keys are bound actions.
    #[default]
    Normal,
    /// Typing into the home search box.
    HomeSearch,
    /// Typing into a listing filter control.
    Listing(ListingInput),
}

/// Timed success message shown after a simulated submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Banner {
    /// Message text.
    pub text: String,
    /// The banner disappears on the first tick at or after this instant.
    pub expires_at: Instant,
}

/// Application state. Pure data, no I/O.
#[derive(Debug, Clone)]
pub struct AppState {
    route: Route,
    history: Vec<Route>,
    store: Option<Arc<EventStore>>,
    load_error: Option<String>,
    bootstrap: Bootstrap,
    timings: Timings,
    default_sort: SortMode,

    /// Home screen.
    pub home: HomeState,
    /// Events listing.
    pub listing: ListingState,
    /// Event detail.
    pub detail: DetailState,
    /// RSVP form and its event.
    pub rsvp: RsvpState,
    /// Contact form.
    pub contact: FormState,

    /// Where typed characters go.
    pub input_mode: InputMode,
    /// Scratch buffer for listing inputs while editing.
    pub edit_buffer: TextInput,
    /// Current success banner, if any.
    pub banner: Option<Banner>,
    /// Whether the help overlay is visible.
    pub help_visible: bool,
}

impl AppState {
    /// State showing `start`, with no store yet.
    pub fn new(start: Route, timings: Timings, default_sort: SortMode, now: Instant) -> Self {
        let mut state = Self {
            route: Route::Home,
            history: Vec::new(),
            store: None,
            load_error: None,
            bootstrap: Bootstrap::new(timings.fallback_delay),
            timings,
            default_sort,
            home: HomeState::default(),
            listing: ListingState::new(default_sort),
            detail: DetailState::default(),
            rsvp: RsvpState::default(),
            contact: FormState::new(FormKind::Contact),
            input_mode: InputMode::Normal,
            edit_buffer: TextInput::default(),
            banner: None,
            help_visible: false,
        };
        state.activate(start, now);
        state
    }

    /// Screen on display.
    pub fn route(&self) -> &Route {
        &self.route
    }

    /// The store, once delivered.
    pub fn store(&self) -> Option<&EventStore> {
        self.store.as_deref()
    }

    /// Why the store failed to load, if it did.
    pub fn load_error(&self) -> Option<&str> {
        self.load_error.as_deref()
    }

    /// Bootstrap state of the active screen.
    pub fn bootstrap(&self) -> &Bootstrap {
        &self.bootstrap
    }

    /// Delays in effect.
    pub fn timings(&self) -> Timings {
        self.timings
    }

    /// Number of screens "back" can return through.
    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    /// Look up a record in the store.
    pub fn record(&self, id: EventId) -> Option<&EventRecord> {
        self.store()?.get(id)
    }

    // ===== Store delivery =====

    /// The readiness signal delivered the store.
    pub fn on_store_ready(&mut self, store: Arc<EventStore>) {
        info!(records = store.len(), "Store ready");
        self.store = Some(store);
        self.load_error = None;
        self.attempt(Trigger::DataReady);
    }

    /// The readiness signal delivered a failure.
    pub fn on_store_failed(&mut self, error: &InputError) {
        warn!("Store failed to load: {error}");
        self.load_error = Some(error.to_string());
    }

    /// Advance timers: fallback attempt, due submissions, banner expiry.
    pub fn on_tick(&mut self, now: Instant) {
        if self.bootstrap.fallback_due(now) {
            self.attempt(Trigger::Fallback);
        }

        if self.rsvp.form.poll(now).is_some() {
            let title = self
                .rsvp
                .event_id()
                .and_then(|id| self.record(id))
                .map(|e| e.title.clone())
                .unwrap_or_default();
            self.show_banner(
                format!("RSVP Confirmed! Thank you for registering for {title}."),
                now,
            );
        }
        if self.contact.poll(now).is_some() {
            self.show_banner(
                "Thank you! Your message has been sent. We'll get back to you soon!".to_string(),
                now,
            );
        }

        if self.banner.as_ref().is_some_and(|b| now >= b.expires_at) {
            self.banner = None;
        }
    }

    fn show_banner(&mut self, text: String, now: Instant) {
        self.banner = Some(Banner {
            text,
            expires_at: now + self.timings.banner_duration,
        });
    }

    // ===== Navigation =====

    /// Show `route`, remembering the current screen for "back".
    pub fn navigate(&mut self, route: Route, now: Instant) {
        let previous = std::mem::replace(&mut self.route, route.clone());
        self.history.push(previous);
        self.activate(route, now);
    }

    /// Return to the previous screen. Returns false when there is none.
    pub fn back(&mut self, now: Instant) -> bool {
        match self.history.pop() {
            Some(route) => {
                self.activate(route, now);
                true
            }
            None => false,
        }
    }

    fn activate(&mut self, route: Route, now: Instant) {
        info!(location = %route, "Screen activated");
        self.route = route;
        self.input_mode = InputMode::Normal;
        self.help_visible = false;

        match &self.route {
            Route::Home => self.home.reset(),
            Route::Events { .. } => self.listing = ListingState::new(self.default_sort),
            Route::Detail { .. } => self.detail.reset(),
            Route::Rsvp { .. } => self.rsvp.reset(),
            Route::Contact | Route::About => {}
        }

        self.bootstrap.activate(now);
        self.attempt(Trigger::PageReady);
    }

    /// Consume the store for the active screen if it has not been yet.
    ///
    /// Returns `None` for screens that do not depend on the store.
    fn attempt(&mut self, trigger: Trigger) -> Option<Attempt> {
        let Self {
            route,
            store,
            bootstrap,
            home,
            listing,
            detail,
            rsvp,
            ..
        } = self;
        let store = store.as_deref();

        let outcome = match route {
            Route::Home => bootstrap.attempt(trigger, store, |s| home.load(s)),
            Route::Events { search } => {
                bootstrap.attempt(trigger, store, |s| listing.load(s, search.as_deref()))
            }
            Route::Detail { id } => {
                bootstrap.attempt(trigger, store, |s| detail.load(s, id.as_deref()))
            }
            Route::Rsvp { id } => bootstrap.attempt(trigger, store, |s| rsvp.load(s, id.as_deref())),
            Route::Contact | Route::About => return None,
        };
        Some(outcome)
    }

    // ===== Actions =====

    /// Apply a bound action. `Quit` is left to the caller.
    pub fn apply_action(&mut self, action: KeyAction, now: Instant) {
        debug!(?action, location = %self.route, "Key action");
        match action {
            KeyAction::GoHome => self.navigate(Route::Home, now),
            KeyAction::GoEvents => self.navigate(Route::Events { search: None }, now),
            KeyAction::GoAbout => self.navigate(Route::About, now),
            KeyAction::GoContact => self.navigate(Route::Contact, now),
            KeyAction::OpenRsvp => {
                if let Some(id) = self.detail_event_on_screen() {
                    self.navigate(rsvp_route(id), now);
                }
            }
            KeyAction::Back => {
                self.back(now);
            }
            KeyAction::SelectNext => self.select_next(),
            KeyAction::SelectPrev => self.select_prev(),
            KeyAction::OpenSelected => {
                if let Some(id) = self.selected_card() {
                    self.navigate(detail_route(id), now);
                }
            }
            KeyAction::StartSearch => match self.route {
                Route::Home => self.input_mode = InputMode::HomeSearch,
                Route::Events { .. } => self.begin_listing_input(ListingInput::Search),
                _ => {}
            },
            KeyAction::EditFromDate => self.begin_listing_input(ListingInput::FromDate),
            KeyAction::EditToDate => self.begin_listing_input(ListingInput::ToDate),
            KeyAction::GoToPage => self.begin_listing_input(ListingInput::Page),
            KeyAction::CycleCategory
            | KeyAction::CycleCity
            | KeyAction::CycleSort
            | KeyAction::ClearFilters => self.change_filter(action),
            KeyAction::NextPage
            | KeyAction::PrevPage
            | KeyAction::FirstPage
            | KeyAction::LastPage => self.change_page(action),
            KeyAction::Help => self.help_visible = !self.help_visible,
            KeyAction::Quit => {}
        }
    }

    fn on_listing(&self) -> bool {
        matches!(self.route, Route::Events { .. }) && self.listing.loaded
    }

    fn detail_event_on_screen(&self) -> Option<EventId> {
        match self.route {
            Route::Detail { .. } => self.detail.event_id(),
            _ => None,
        }
    }

    fn select_next(&mut self) {
        match self.route {
            Route::Home => self.home.select_next(),
            Route::Events { .. } => {
                if let Some(store) = self.store.as_deref() {
                    self.listing.select_next(store);
                }
            }
            Route::Detail { .. } => self.detail.select_next(),
            _ => {}
        }
    }

    fn select_prev(&mut self) {
        match self.route {
            Route::Home => self.home.select_prev(),
            Route::Events { .. } => self.listing.select_prev(),
            Route::Detail { .. } => self.detail.select_prev(),
            _ => {}
        }
    }

    fn selected_card(&self) -> Option<EventId> {
        match self.route {
            Route::Home => self.home.selected_id(),
            Route::Events { .. } => self
                .store
                .as_deref()
                .and_then(|store| self.listing.selected_id(store)),
            Route::Detail { .. } => self.detail.selected_similar(),
            _ => None,
        }
    }

    fn begin_listing_input(&mut self, target: ListingInput) {
        if !self.on_listing() {
            return;
        }
        self.edit_buffer = self.listing.input_for(target);
        self.input_mode = InputMode::Listing(target);
    }

    fn change_filter(&mut self, action: KeyAction) {
        if !self.on_listing() {
            return;
        }
        let Some(store) = self.store.clone() else {
            return;
        };
        let listing = &mut self.listing;
        match action {
            KeyAction::CycleCategory => listing.filter.cycle_category(&listing.categories),
            KeyAction::CycleCity => listing.filter.cycle_city(&listing.cities),
            KeyAction::CycleSort => listing.filter.cycle_sort(),
            KeyAction::ClearFilters => {
                listing.filter.clear();
                listing.notice = None;
            }
            _ => return,
        }
        listing.after_filter_change(&store);
    }

    fn change_page(&mut self, action: KeyAction) {
        if !self.on_listing() {
            return;
        }
        let Some(store) = self.store.clone() else {
            return;
        };
        let total = self.listing.listing(&store).total();
        let filter = &mut self.listing.filter;
        match action {
            KeyAction::NextPage => {
                filter.next_page(total);
            }
            KeyAction::PrevPage => {
                filter.prev_page();
            }
            KeyAction::FirstPage => filter.first_page(),
            KeyAction::LastPage => filter.last_page(total),
            _ => return,
        }
        self.listing.selected = 0;
    }

    // ===== Text input =====

    /// Route a key to the active text control.
    ///
    /// Returns false when no text control is active.
    pub fn handle_input_key(&mut self, key: KeyEvent, now: Instant) -> bool {
        match self.input_mode {
            InputMode::Normal => false,
            InputMode::HomeSearch => {
                match key.code {
                    KeyCode::Enter => {
                        self.input_mode = InputMode::Normal;
                        if let Some(route) = self.home.search_route() {
                            self.navigate(route, now);
                        }
                    }
                    KeyCode::Esc => self.input_mode = InputMode::Normal,
                    _ => {
                        apply_edit_key(&mut self.home.search, key);
                    }
                }
                true
            }
            InputMode::Listing(target) => {
                self.handle_listing_input(target, key);
                true
            }
        }
    }

    fn handle_listing_input(&mut self, target: ListingInput, key: KeyEvent) {
        let Some(store) = self.store.clone() else {
            self.input_mode = InputMode::Normal;
            return;
        };
        match (target, key.code) {
            (ListingInput::Search, KeyCode::Enter | KeyCode::Esc) => {
                self.input_mode = InputMode::Normal;
            }
            (ListingInput::Search, _) => {
                if apply_edit_key(&mut self.edit_buffer, key) == EditOutcome::Changed {
                    self.listing.filter.set_search(self.edit_buffer.text());
                    self.listing.after_filter_change(&store);
                }
            }
            (_, KeyCode::Enter) => {
                let text = self.edit_buffer.text().to_string();
                let total = self.listing.listing(&store).total();
                if self.listing.commit_input(target, &text, total).is_ok() {
                    self.listing.after_filter_change(&store);
                    self.input_mode = InputMode::Normal;
                }
            }
            (_, KeyCode::Esc) => {
                self.listing.notice = None;
                self.input_mode = InputMode::Normal;
            }
            (_, _) => {
                apply_edit_key(&mut self.edit_buffer, key);
            }
        }
    }

    // ===== Forms =====

    /// The form on screen, if any.
    pub fn active_form(&self) -> Option<&FormState> {
        match self.route {
            Route::Rsvp { .. } => Some(&self.rsvp.form),
            Route::Contact => Some(&self.contact),
            _ => None,
        }
    }

    fn active_form_mut(&mut self) -> Option<&mut FormState> {
        match self.route {
            Route::Rsvp { .. } => Some(&mut self.rsvp.form),
            Route::Contact => Some(&mut self.contact),
            _ => None,
        }
    }

    /// Route a key to the form on screen.
    ///
    /// Tab/Down and Shift+Tab/Up move between fields, Enter submits, Esc goes
    /// back. Returns false when no form is on screen or the key was not
    /// consumed.
    pub fn handle_form_key(&mut self, key: KeyEvent, now: Instant) -> bool {
        if self.active_form().is_none() {
            return false;
        }
        match key.code {
            KeyCode::Esc => {
                self.back(now);
                true
            }
            KeyCode::Enter => {
                self.submit_form(now);
                true
            }
            KeyCode::Tab | KeyCode::Down => {
                if let Some(form) = self.active_form_mut() {
                    form.focus_next();
                }
                true
            }
            KeyCode::BackTab | KeyCode::Up => {
                if let Some(form) = self.active_form_mut() {
                    form.focus_prev();
                }
                true
            }
            _ => self
                .active_form_mut()
                .is_some_and(|form| form.handle_key(key) != EditOutcome::Ignored),
        }
    }

    /// Submit the form on screen.
    ///
    /// An RSVP for an event that was not found is refused.
    pub fn submit_form(&mut self, now: Instant) -> Option<SubmitOutcome> {
        if matches!(self.route, Route::Rsvp { .. }) && self.rsvp.event_id().is_none() {
            debug!("RSVP submission refused: no event");
            return None;
        }
        let delay = self.timings.submit_delay;
        let outcome = self.active_form_mut()?.submit(now, delay);
        debug!(?outcome, "Form submit");
        Some(outcome)
    }
}

/// Route of the detail screen for `id`.
pub fn detail_route(id: EventId) -> Route {
    Route::Detail {
        id: Some(id.to_string()),
    }
}

/// Route of the RSVP screen for `id`.
pub fn rsvp_route(id: EventId) -> Route {
    Route::Rsvp {
        id: Some(id.to_string()),
    }
}

#[cfg(test)]
#[path = "app_state_tests.rs"]
mod tests;
