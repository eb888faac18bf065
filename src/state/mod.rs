//! UI state machine (pure).
//!
//! All state transitions are pure functions testable without TUI.

pub mod app_state;
pub mod bootstrap;
pub mod detail;
pub mod filter;
pub mod forms;
pub mod home;
pub mod listing;
pub mod lookup;
pub mod pipeline;
pub mod text_input;

// Re-export for convenience
pub use app_state::{detail_route, rsvp_route, AppState, Banner, InputMode, Timings};
pub use bootstrap::{Attempt, Bootstrap, Trigger};
pub use detail::{DetailContent, DetailState, RsvpState};
pub use filter::{FilterError, FilterState};
pub use forms::{FieldError, FieldKind, FieldSpec, FormKind, FormState, SubmitOutcome, Submission};
pub use home::HomeState;
pub use listing::{ListingInput, ListingState};
pub use pipeline::{Listing, ListingPage, SortMode, PAGE_SIZE};
pub use text_input::{EditOutcome, TextInput};
