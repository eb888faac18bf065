//! Listing filter state.
//!
//! Every mutation that changes which records match resets the page to 1.

use crate::model::date::{parse_iso_date, ISO_DATE_FORMAT};
use crate::state::pipeline::{total_pages, SortMode, PAGE_SIZE};
use thiserror::Error;

/// Rejected date-range input.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FilterError {
    /// The text is not a `YYYY-MM-DD` date.
    #[error("Invalid date {input:?}, expected YYYY-MM-DD")]
    InvalidDate {
        /// Text as typed.
        input: String,
    },
    /// The text is not a page number in range.
    #[error("Invalid page {input:?}, expected 1-{page_count}")]
    InvalidPage {
        /// Text as typed.
        input: String,
        /// Pages available.
        page_count: usize,
    },
}

/// Filter, sort and pagination parameters of the listing screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterState {
    search: String,
    category: Option<String>,
    city: Option<String>,
    from_date: Option<String>,
    to_date: Option<String>,
    sort: SortMode,
    default_sort: SortMode,
    page: usize,
}

impl Default for FilterState {
    fn default() -> Self {
        Self::with_default_sort(SortMode::default())
    }
}

impl FilterState {
    /// Empty filters using `sort` as the default ordering.
    pub fn with_default_sort(sort: SortMode) -> Self {
        Self {
            search: String::new(),
            category: None,
            city: None,
            from_date: None,
            to_date: None,
            sort,
            default_sort: sort,
            page: 1,
        }
    }

    /// Search text as typed.
    pub fn search(&self) -> &str {
        &self.search
    }

    /// Selected category, `None` for all.
    pub fn category(&self) -> Option<&str> {
        self.category.as_deref()
    }

    /// Selected city, `None` for all.
    pub fn city(&self) -> Option<&str> {
        self.city.as_deref()
    }

    /// Lower date bound (inclusive).
    pub fn from_date(&self) -> Option<&str> {
        self.from_date.as_deref()
    }

    /// Upper date bound (inclusive).
    pub fn to_date(&self) -> Option<&str> {
        self.to_date.as_deref()
    }

    /// Active sort mode.
    pub fn sort(&self) -> SortMode {
        self.sort
    }

    /// Current page, 1-based.
    pub fn page(&self) -> usize {
        self.page
    }

    /// True when no filter is active and the sort is the default.
    pub fn is_default(&self) -> bool {
        *self == Self::with_default_sort(self.default_sort)
    }

    /// Replace the search text. The text is used as typed.
    pub fn set_search(&mut self, text: impl Into<String>) {
        self.search = text.into();
        self.page = 1;
    }

    /// Select a category. `None` or empty selects all.
    pub fn set_category(&mut self, category: Option<String>) {
        self.category = category.filter(|c| !c.is_empty());
        self.page = 1;
    }

    /// Select a city. `None` or empty selects all.
    pub fn set_city(&mut self, city: Option<String>) {
        self.city = city.filter(|c| !c.is_empty());
        self.page = 1;
    }

    /// Step the category through `options`, then back to "all".
    pub fn cycle_category(&mut self, options: &[String]) {
        let next = cycle_option(self.category.as_deref(), options);
        self.set_category(next);
    }

    /// Step the city through `options`, then back to "all".
    pub fn cycle_city(&mut self, options: &[String]) {
        let next = cycle_option(self.city.as_deref(), options);
        self.set_city(next);
    }

    /// Set the lower date bound. Empty input clears it.
    ///
    /// # Errors
    ///
    /// Returns `FilterError::InvalidDate` and leaves the state unchanged when
    /// the text is not a date.
    pub fn set_from_date(&mut self, input: &str) -> Result<(), FilterError> {
        self.from_date = normalize_date(input)?;
        self.page = 1;
        Ok(())
    }

    /// Set the upper date bound. Empty input clears it.
    ///
    /// # Errors
    ///
    /// Returns `FilterError::InvalidDate` and leaves the state unchanged when
    /// the text is not a date.
    pub fn set_to_date(&mut self, input: &str) -> Result<(), FilterError> {
        self.to_date = normalize_date(input)?;
        self.page = 1;
        Ok(())
    }

    /// Change the sort mode.
    pub fn set_sort(&mut self, sort: SortMode) {
        self.sort = sort;
        self.page = 1;
    }

    /// Step to the next selectable sort mode.
    pub fn cycle_sort(&mut self) {
        self.set_sort(self.sort.next());
    }

    /// Reset every filter, the sort and the page.
    pub fn clear(&mut self) {
        *self = Self::with_default_sort(self.default_sort);
    }

    /// Jump to `page`, clamped to `[1, max(1, page_count)]`.
    pub fn go_to_page(&mut self, page: usize, page_count: usize) {
        self.page = page.clamp(1, page_count.max(1));
    }

    /// Jump to the page number typed in `input`.
    ///
    /// # Errors
    ///
    /// Returns `FilterError::InvalidPage` and leaves the page unchanged when
    /// `input` is not a number in `[1, page_count]`.
    pub fn set_page_from_input(
        &mut self,
        input: &str,
        filtered_count: usize,
    ) -> Result<(), FilterError> {
        let page_count = total_pages(filtered_count, PAGE_SIZE);
        match input.trim().parse::<usize>() {
            Ok(page) if (1..=page_count).contains(&page) => {
                self.page = page;
                Ok(())
            }
            _ => Err(FilterError::InvalidPage {
                input: input.to_string(),
                page_count,
            }),
        }
    }

    /// Advance one page. Returns false when already on the last page.
    pub fn next_page(&mut self, filtered_count: usize) -> bool {
        let page_count = total_pages(filtered_count, PAGE_SIZE);
        if self.page >= page_count {
            return false;
        }
        self.page += 1;
        true
    }

    /// Go back one page. Returns false when already on the first page.
    pub fn prev_page(&mut self) -> bool {
        if self.page <= 1 {
            return false;
        }
        self.page -= 1;
        true
    }

    /// Jump to page 1.
    pub fn first_page(&mut self) {
        self.page = 1;
    }

    /// Jump to the last page for `filtered_count` records.
    pub fn last_page(&mut self, filtered_count: usize) {
        let page_count = total_pages(filtered_count, PAGE_SIZE);
        self.go_to_page(page_count, page_count);
    }

    /// Pull the page back into range after the filtered count shrank.
    pub fn clamp_page(&mut self, filtered_count: usize) {
        let page_count = total_pages(filtered_count, PAGE_SIZE);
        self.go_to_page(self.page, page_count);
    }
}

fn normalize_date(input: &str) -> Result<Option<String>, FilterError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    parse_iso_date(trimmed)
        .map(|date| Some(date.format(ISO_DATE_FORMAT).to_string()))
        .ok_or_else(|| FilterError::InvalidDate {
            input: input.to_string(),
        })
}

// None -> options[0] -> ... -> options[n-1] -> None
fn cycle_option(current: Option<&str>, options: &[String]) -> Option<String> {
    let next_index = match current {
        None => 0,
        Some(value) => match options.iter().position(|o| o == value) {
            Some(i) => i + 1,
            None => 0,
        },
    };
    options.get(next_index).cloned()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn options() -> Vec<String> {
        vec!["art".to_string(), "music".to_string()]
    }

    #[test]
    fn default_state_has_no_filters() {
        let filter = FilterState::default();
        assert_eq!(filter.search(), "");
        assert_eq!(filter.category(), None);
        assert_eq!(filter.sort(), SortMode::DateAsc);
        assert_eq!(filter.page(), 1);
        assert!(filter.is_default());
    }

    #[test]
    fn filter_changes_reset_page() {
        let mut filter = FilterState::default();
        filter.go_to_page(3, 5);
        filter.set_search("jazz");
        assert_eq!(filter.page(), 1);

        filter.go_to_page(3, 5);
        filter.cycle_category(&options());
        assert_eq!(filter.page(), 1);

        filter.go_to_page(3, 5);
        filter.cycle_sort();
        assert_eq!(filter.page(), 1);

        filter.go_to_page(3, 5);
        filter.set_from_date("2025-01-01").unwrap();
        assert_eq!(filter.page(), 1);
    }

    #[test]
    fn category_cycles_through_options_and_back_to_all() {
        let mut filter = FilterState::default();
        filter.cycle_category(&options());
        assert_eq!(filter.category(), Some("art"));
        filter.cycle_category(&options());
        assert_eq!(filter.category(), Some("music"));
        filter.cycle_category(&options());
        assert_eq!(filter.category(), None);
    }

    #[test]
    fn cycling_with_no_options_stays_unset() {
        let mut filter = FilterState::default();
        filter.cycle_city(&[]);
        assert_eq!(filter.city(), None);
    }

    #[test]
    fn invalid_date_is_rejected_and_keeps_previous_value() {
        let mut filter = FilterState::default();
        filter.set_from_date("2025-01-10").unwrap();
        let err = filter.set_from_date("10/01/2025").unwrap_err();
        assert_eq!(
            err,
            FilterError::InvalidDate {
                input: "10/01/2025".into()
            }
        );
        assert_eq!(filter.from_date(), Some("2025-01-10"));
    }

    #[test]
    fn empty_date_clears_bound() {
        let mut filter = FilterState::default();
        filter.set_to_date("2025-03-01").unwrap();
        filter.set_to_date("  ").unwrap();
        assert_eq!(filter.to_date(), None);
    }

    #[test]
    fn clear_restores_defaults_including_configured_sort() {
        let mut filter = FilterState::with_default_sort(SortMode::TitleAsc);
        filter.set_search("x");
        filter.set_city(Some("Hawassa".into()));
        filter.set_sort(SortMode::DateDesc);
        filter.clear();
        assert!(filter.is_default());
        assert_eq!(filter.sort(), SortMode::TitleAsc);
    }

    #[test]
    fn page_navigation_respects_bounds() {
        let mut filter = FilterState::default();
        assert!(!filter.prev_page());
        assert!(filter.next_page(13));
        assert!(filter.next_page(13));
        assert_eq!(filter.page(), 3);
        assert!(!filter.next_page(13), "13 records make 3 pages");
        filter.first_page();
        assert_eq!(filter.page(), 1);
        filter.last_page(13);
        assert_eq!(filter.page(), 3);
    }

    #[test]
    fn clamp_page_keeps_page_in_range() {
        let mut filter = FilterState::default();
        filter.go_to_page(4, 4);
        filter.clamp_page(7);
        assert_eq!(filter.page(), 2);
        filter.clamp_page(0);
        assert_eq!(filter.page(), 1);
    }
}
