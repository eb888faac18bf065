//! Events listing screen state.
//!
//! The filter panel edits a [`FilterState`]; the page itself is never cached.
//! Views call [`ListingState::listing`] which re-runs the pipeline.

use crate::model::{EventId, EventStore};
use crate::state::filter::{FilterError, FilterState};
use crate::state::pipeline::{self, Listing, SortMode};
use crate::state::text_input::TextInput;

/// Text control currently being edited on the listing screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListingInput {
    /// Live search; every keystroke re-runs the pipeline.
    Search,
    /// "From" date, applied on Enter.
    FromDate,
    /// "To" date, applied on Enter.
    ToDate,
    /// Page number, jumped to on Enter.
    Page,
}

/// Filter panel, facet options and card selection.
#[derive(Debug, Clone, Default)]
pub struct ListingState {
    /// Active filters, sort and page.
    pub filter: FilterState,
    /// Distinct categories in the store.
    pub categories: Vec<String>,
    /// Distinct cities in the store.
    pub cities: Vec<String>,
    /// Index of the selected card on the current page.
    pub selected: usize,
    /// Last date or page input rejection, shown under the input.
    pub notice: Option<String>,
    /// True once the store has been consumed.
    pub loaded: bool,
}

impl ListingState {
    /// Listing with `sort` as the default ordering.
    pub fn new(sort: SortMode) -> Self {
        Self {
            filter: FilterState::with_default_sort(sort),
            ..Self::default()
        }
    }

    /// Take facet options from `store` and apply an initial search.
    pub fn load(&mut self, store: &EventStore, initial_search: Option<&str>) {
        self.categories = store.categories();
        self.cities = store.cities();
        if let Some(search) = initial_search {
            self.filter.set_search(search);
        }
        self.selected = 0;
        self.loaded = true;
    }

    /// Run the pipeline over `store`.
    pub fn listing<'a>(&self, store: &'a EventStore) -> Listing<'a> {
        pipeline::run(store.events(), &self.filter)
    }

    /// Id of the selected card on the current page.
    pub fn selected_id(&self, store: &EventStore) -> Option<EventId> {
        self.listing(store)
            .items()
            .get(self.selected)
            .map(|e| e.id)
    }

    /// Apply a filter change and reset the card selection.
    pub fn after_filter_change(&mut self, store: &EventStore) {
        self.selected = 0;
        let total = self.listing(store).total();
        self.filter.clamp_page(total);
    }

    /// Move the card selection within the current page.
    pub fn select_next(&mut self, store: &EventStore) {
        let count = self.listing(store).items().len();
        if self.selected + 1 < count {
            self.selected += 1;
        }
    }

    /// Move the card selection back. Clamps at the first card.
    pub fn select_prev(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    /// Commit text typed into a date or page input. `filtered_count` bounds
    /// the page number.
    ///
    /// # Errors
    ///
    /// Returns the rejection when the text is not a date or page in range;
    /// the notice is also set so the panel can show it.
    pub fn commit_input(
        &mut self,
        target: ListingInput,
        text: &str,
        filtered_count: usize,
    ) -> Result<(), FilterError> {
        let result = match target {
            ListingInput::FromDate => self.filter.set_from_date(text),
            ListingInput::ToDate => self.filter.set_to_date(text),
            ListingInput::Page => self.filter.set_page_from_input(text, filtered_count),
            ListingInput::Search => {
                self.filter.set_search(text);
                Ok(())
            }
        };
        self.notice = result.as_ref().err().map(ToString::to_string);
        result
    }

    /// Seed an input with the current value of its control.
    pub fn input_for(&self, target: ListingInput) -> TextInput {
        let current = match target {
            ListingInput::Search => self.filter.search(),
            ListingInput::FromDate => self.filter.from_date().unwrap_or_default(),
            ListingInput::ToDate => self.filter.to_date().unwrap_or_default(),
            ListingInput::Page => "",
        };
        TextInput::with_text(current)
    }
}
