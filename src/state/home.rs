//! Home screen state: featured cards and the home search box.

use crate::model::{EventId, EventStore, Route};
use crate::state::lookup;
use crate::state::text_input::TextInput;

/// Featured subset and search text of the home screen.
#[derive(Debug, Clone, Default)]
pub struct HomeState {
    /// Featured record ids. `None` until the store has been consumed.
    pub featured: Option<Vec<EventId>>,
    /// Index of the selected featured card.
    pub selected: usize,
    /// Home search box.
    pub search: TextInput,
}

impl HomeState {
    /// Fill the featured subset from `store`.
    pub fn load(&mut self, store: &EventStore) {
        let featured: Vec<EventId> = lookup::featured(store.events())
            .into_iter()
            .map(|e| e.id)
            .collect();
        self.selected = self.selected.min(featured.len().saturating_sub(1));
        self.featured = Some(featured);
    }

    /// Forget the featured subset, e.g. on re-activation.
    pub fn reset(&mut self) {
        self.featured = None;
        self.selected = 0;
    }

    /// Id of the selected featured card.
    pub fn selected_id(&self) -> Option<EventId> {
        self.featured.as_ref()?.get(self.selected).copied()
    }

    /// Select the next featured card. Clamps at the last.
    pub fn select_next(&mut self) {
        let count = self.featured.as_ref().map_or(0, Vec::len);
        if self.selected + 1 < count {
            self.selected += 1;
        }
    }

    /// Select the previous featured card. Clamps at the first.
    pub fn select_prev(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    /// Listing route for the typed search, or `None` when the trimmed text
    /// is empty.
    pub fn search_route(&self) -> Option<Route> {
        let text = self.search.text().trim();
        (!text.is_empty()).then(|| Route::Events {
            search: Some(text.to_string()),
        })
    }
}
