//! Internal test modules - whitebox tests with crate access
//!
//! Harness-based acceptance tests drive the full TuiApp with a TestBackend.

use crate::model::EventStore;
use crate::test_harness::record_in;

mod acceptance_bootstrap;
mod acceptance_forms;

/// Eight events over three cities and three categories, two featured.
pub(crate) fn sample_store() -> EventStore {
    let mut records = vec![
        record_in(1, "Jazz Night", "2025-01-10", "music", "Addis Ababa"),
        record_in(2, "Gallery Walk", "2025-02-05", "art", "Hawassa"),
        record_in(3, "Choir Evening", "2025-02-10", "music", "Bahir Dar"),
        record_in(4, "Coffee Ceremony", "2025-03-01", "food", "Addis Ababa"),
        record_in(5, "Street Food Fair", "2025-03-15", "food", "Hawassa"),
        record_in(6, "Mural Workshop", "2025-04-02", "art", "Addis Ababa"),
        record_in(7, "Krar Masterclass", "2025-04-20", "music", "Hawassa"),
        record_in(8, "Poetry Jazz", "2025-05-05", "art", "Bahir Dar"),
    ];
    records[0].is_featured = true;
    records[3].is_featured = true;
    EventStore::from_records(records)
}
