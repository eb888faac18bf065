//! Filter-sort-paginate pipeline (pure).
//!
//! Takes the full event sequence plus a [`FilterState`] and produces the page
//! of records to render. Nothing here mutates records or keeps state between
//! calls; the listing screen re-runs the whole pipeline after every filter or
//! pagination change.

use crate::model::{parse_iso_date, EventRecord};
use crate::state::filter::FilterState;
use chrono::NaiveDate;
use icu_collator::{Collator, CollatorOptions};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

/// Records per listing page.
pub const PAGE_SIZE: usize = 6;

/// Ordering applied to the filtered records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SortMode {
    /// Oldest first (`date-asc`).
    #[default]
    DateAsc,
    /// Newest first (`date-desc`).
    DateDesc,
    /// Title A-Z (`title-asc`).
    TitleAsc,
    /// Title Z-A (`title-desc`).
    TitleDesc,
    /// Unrecognized key: records keep their source order.
    Unsorted,
}

impl SortMode {
    /// The modes offered by the sort control, in cycle order.
    pub const SELECTABLE: [SortMode; 4] = [
        SortMode::DateAsc,
        SortMode::DateDesc,
        SortMode::TitleAsc,
        SortMode::TitleDesc,
    ];

    /// Parse a sort key. Unknown keys map to [`SortMode::Unsorted`].
    pub fn from_key(key: &str) -> Self {
        match key {
            "date-asc" => SortMode::DateAsc,
            "date-desc" => SortMode::DateDesc,
            "title-asc" => SortMode::TitleAsc,
            "title-desc" => SortMode::TitleDesc,
            _ => SortMode::Unsorted,
        }
    }

    /// Wire key of this mode.
    pub fn key(self) -> &'static str {
        match self {
            SortMode::DateAsc => "date-asc",
            SortMode::DateDesc => "date-desc",
            SortMode::TitleAsc => "title-asc",
            SortMode::TitleDesc => "title-desc",
            SortMode::Unsorted => "unsorted",
        }
    }

    /// Label shown in the filter panel.
    pub fn label(self) -> &'static str {
        match self {
            SortMode::DateAsc => "Date (Oldest first)",
            SortMode::DateDesc => "Date (Newest first)",
            SortMode::TitleAsc => "Title (A-Z)",
            SortMode::TitleDesc => "Title (Z-A)",
            SortMode::Unsorted => "Unsorted",
        }
    }

    /// Next selectable mode, wrapping around.
    pub fn next(self) -> Self {
        let index = Self::SELECTABLE
            .iter()
            .position(|m| *m == self)
            .map_or(0, |i| (i + 1) % Self::SELECTABLE.len());
        Self::SELECTABLE[index]
    }
}

impl FromStr for SortMode {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from_key(s))
    }
}

impl fmt::Display for SortMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// True when `event` satisfies every active predicate of `filter`.
///
/// Empty search text and unset options are inactive. Date bounds compare the
/// raw ISO strings.
pub fn matches(event: &EventRecord, filter: &FilterState) -> bool {
    let search = filter.search();
    if !search.is_empty() && !event.title.to_lowercase().contains(&search.to_lowercase()) {
        return false;
    }
    if filter.category().is_some_and(|c| event.category != c) {
        return false;
    }
    if filter.city().is_some_and(|c| event.city != c) {
        return false;
    }
    if filter.from_date().is_some_and(|from| event.date.as_str() < from) {
        return false;
    }
    if filter.to_date().is_some_and(|to| event.date.as_str() > to) {
        return false;
    }
    true
}

/// Records that satisfy `filter`, in source order.
pub fn filter_events<'a>(events: &'a [EventRecord], filter: &FilterState) -> Vec<&'a EventRecord> {
    events.iter().filter(|e| matches(e, filter)).collect()
}

/// Sort in place. The sort is stable: ties keep their relative order.
pub fn sort_events(events: &mut [&EventRecord], mode: SortMode) {
    match mode {
        SortMode::DateAsc => events.sort_by(|a, b| date_key(a).cmp(&date_key(b))),
        SortMode::DateDesc => events.sort_by(|a, b| date_key(b).cmp(&date_key(a))),
        SortMode::TitleAsc => events.sort_by(|a, b| compare_titles(&a.title, &b.title)),
        SortMode::TitleDesc => events.sort_by(|a, b| compare_titles(&b.title, &a.title)),
        SortMode::Unsorted => {}
    }
}

// Unparsable dates sort before every real date.
fn date_key(event: &EventRecord) -> Option<NaiveDate> {
    parse_iso_date(&event.date)
}

thread_local! {
    static TITLE_COLLATOR: Option<Collator> =
        Collator::try_new(&Default::default(), CollatorOptions::new()).ok();
}

/// Title order: Unicode collation, so accents and case rank as secondary
/// differences (`"Éthio"` before `"Zumba"`, `"apple"` before `"Apple"`).
pub fn compare_titles(a: &str, b: &str) -> Ordering {
    TITLE_COLLATOR.with(|collator| match collator {
        Some(collator) => collator.compare(a, b),
        None => a
            .to_lowercase()
            .cmp(&b.to_lowercase())
            .then_with(|| a.cmp(b)),
    })
}

/// Number of pages needed for `count` records. Zero records need zero pages.
pub fn total_pages(count: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 0;
    }
    count.div_ceil(page_size)
}

/// The slice `[(page-1)*size, page*size)`, truncated to the input.
///
/// Page numbers are 1-based; page 0 is treated as page 1. Out-of-range pages
/// yield an empty slice.
pub fn paginate<T>(items: &[T], page: usize, page_size: usize) -> &[T] {
    let start = page.saturating_sub(1).saturating_mul(page_size);
    if start >= items.len() {
        return &[];
    }
    let end = start.saturating_add(page_size).min(items.len());
    &items[start..end]
}

/// One rendered page of the listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListingPage<'a> {
    /// Records on this page, in display order.
    pub items: Vec<&'a EventRecord>,
    /// Number of records that passed the filters.
    pub total: usize,
    /// Current page, 1-based.
    pub page: usize,
    /// Number of pages.
    pub page_count: usize,
}

impl ListingPage<'_> {
    /// True when a previous page exists.
    pub fn has_prev(&self) -> bool {
        self.page > 1
    }

    /// True when a next page exists.
    pub fn has_next(&self) -> bool {
        self.page < self.page_count
    }
}

/// Pipeline output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Listing<'a> {
    /// Nothing passed the filters; render the empty state.
    NoResults,
    /// A page of results.
    Page(ListingPage<'a>),
}

impl<'a> Listing<'a> {
    /// Number of records that passed the filters.
    pub fn total(&self) -> usize {
        match self {
            Listing::NoResults => 0,
            Listing::Page(page) => page.total,
        }
    }

    /// Records on the current page.
    pub fn items(&self) -> &[&'a EventRecord] {
        match self {
            Listing::NoResults => &[],
            Listing::Page(page) => &page.items,
        }
    }
}

/// Run filter, sort and paginate.
///
/// The requested page is clamped to the available range, so the result is
/// never an empty page while records matched.
pub fn run<'a>(events: &'a [EventRecord], filter: &FilterState) -> Listing<'a> {
    let mut filtered = filter_events(events, filter);
    if filtered.is_empty() {
        return Listing::NoResults;
    }
    sort_events(&mut filtered, filter.sort());

    let total = filtered.len();
    let page_count = total_pages(total, PAGE_SIZE);
    let page = filter.page().clamp(1, page_count);
    let items = paginate(&filtered, page, PAGE_SIZE).to_vec();

    Listing::Page(ListingPage {
        items,
        total,
        page,
        page_count,
    })
}

#[cfg(test)]
#[path = "pipeline_tests.rs"]
mod tests;
