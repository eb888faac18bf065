//! Detail and RSVP screen state.
//!
//! Both screens resolve the `id` parameter against the store exactly once per
//! activation. The lookup result, record or error, is definitive.

use crate::model::{EventId, EventStore, LookupError};
use crate::state::forms::{FormKind, FormState};
use crate::state::lookup;

/// Resolved detail screen content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DetailContent {
    /// The record and its similar events.
    Found {
        /// The located record.
        id: EventId,
        /// Up to three related records, in source order.
        similar: Vec<EventId>,
    },
    /// The lookup failed; the message replaces the screen.
    Error(String),
}

/// Detail screen state.
#[derive(Debug, Clone, Default)]
pub struct DetailState {
    /// `None` until the store has been consumed.
    pub content: Option<DetailContent>,
    /// Index of the selected similar-event card.
    pub selected: usize,
}

impl DetailState {
    /// Resolve `selector` against `store`.
    pub fn load(&mut self, store: &EventStore, selector: Option<&str>) {
        let events = store.events();
        self.selected = 0;
        self.content = Some(match lookup::find_by_selector(events, selector) {
            Ok(record) => DetailContent::Found {
                id: record.id,
                similar: lookup::similar(events, record)
                    .into_iter()
                    .map(|e| e.id)
                    .collect(),
            },
            Err(err) => DetailContent::Error(lookup::detail_error_message(&err, events)),
        });
    }

    /// Forget the resolved content.
    pub fn reset(&mut self) {
        self.content = None;
        self.selected = 0;
    }

    /// Id of the record on screen.
    pub fn event_id(&self) -> Option<EventId> {
        match &self.content {
            Some(DetailContent::Found { id, .. }) => Some(*id),
            _ => None,
        }
    }

    fn similar(&self) -> &[EventId] {
        match &self.content {
            Some(DetailContent::Found { similar, .. }) => similar,
            _ => &[],
        }
    }

    /// Id of the selected similar event.
    pub fn selected_similar(&self) -> Option<EventId> {
        self.similar().get(self.selected).copied()
    }

    /// Select the next similar event. Clamps at the last.
    pub fn select_next(&mut self) {
        if self.selected + 1 < self.similar().len() {
            self.selected += 1;
        }
    }

    /// Select the previous similar event. Clamps at the first.
    pub fn select_prev(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }
}

/// RSVP screen state.
#[derive(Debug, Clone)]
pub struct RsvpState {
    /// Lookup result; `None` until the store has been consumed.
    pub event: Option<Result<EventId, LookupError>>,
    /// The RSVP form.
    pub form: FormState,
}

impl Default for RsvpState {
    fn default() -> Self {
        Self {
            event: None,
            form: FormState::new(FormKind::Rsvp),
        }
    }
}

impl RsvpState {
    /// Resolve `selector` against `store`.
    pub fn load(&mut self, store: &EventStore, selector: Option<&str>) {
        self.event = Some(lookup::find_by_selector(store.events(), selector).map(|e| e.id));
    }

    /// Forget the lookup and reset the form.
    pub fn reset(&mut self) {
        self.event = None;
        self.form.reset();
    }

    /// Id of the event being booked, once found.
    pub fn event_id(&self) -> Option<EventId> {
        self.event.as_ref()?.as_ref().ok().copied()
    }
}
