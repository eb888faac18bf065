//! Record subsets used outside the listing: featured, similar, and the
//! single-record lookup behind the detail and RSVP screens.

use crate::model::{EventId, EventRecord, LookupError};
use tracing::debug;

/// Maximum number of similar events shown on the detail screen.
pub const SIMILAR_LIMIT: usize = 3;

/// Records flagged as featured, in source order.
pub fn featured(events: &[EventRecord]) -> Vec<&EventRecord> {
    events.iter().filter(|e| e.is_featured).collect()
}

/// Up to [`SIMILAR_LIMIT`] records sharing a category or a city with
/// `current`, excluding `current` itself, in source order.
pub fn similar<'a>(events: &'a [EventRecord], current: &EventRecord) -> Vec<&'a EventRecord> {
    events
        .iter()
        .filter(|e| e.id != current.id)
        .filter(|e| e.category == current.category || e.city == current.city)
        .take(SIMILAR_LIMIT)
        .collect()
}

/// Parse the `id` parameter.
///
/// Leading whitespace is skipped, an optional sign is accepted, and the
/// leading run of decimal digits is read: `"3abc"` is 3. Returns `None` when
/// there are no digits or the number does not fit.
pub fn parse_selector(raw: &str) -> Option<EventId> {
    let trimmed = raw.trim_start();
    let (negative, rest) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };
    let digits_end = rest
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(rest.len());
    let digits = &rest[..digits_end];
    if digits.is_empty() {
        return None;
    }
    let magnitude: i64 = digits.parse().ok()?;
    Some(EventId::new(if negative { -magnitude } else { magnitude }))
}

/// Find the record named by `selector`.
///
/// # Errors
///
/// Returns `LookupError::MissingSelector` when there is no selector and
/// `LookupError::NotFound` when it names no record.
pub fn find_by_selector<'a>(
    events: &'a [EventRecord],
    selector: Option<&str>,
) -> Result<&'a EventRecord, LookupError> {
    let raw = selector.ok_or(LookupError::MissingSelector)?;
    let not_found = || LookupError::NotFound {
        selector: raw.to_string(),
    };

    let id = parse_selector(raw).ok_or_else(not_found)?;
    let found = events.iter().find(|e| e.id == id).ok_or_else(not_found);
    debug!(selector = raw, found = found.is_ok(), "Event lookup");
    found
}

/// Message shown on the detail screen when a lookup fails.
///
/// A missing record lists the titles that do exist.
pub fn detail_error_message(error: &LookupError, events: &[EventRecord]) -> String {
    match error {
        LookupError::MissingSelector => error.to_string(),
        LookupError::NotFound { .. } => {
            let titles: Vec<&str> = events.iter().map(|e| e.title.as_str()).collect();
            format!("Event not found. Available events: {}", titles.join(", "))
        }
    }
}
