//! Events listing: filter panel, result count, card grid, pagination.

use super::card::{render_card_grid, CardVariant};
use super::constants::{FILTER_PANEL_HEIGHT, INPUT_HEIGHT, PAGINATION_HEIGHT};
use super::input_box::InputBox;
use super::layout::render_pending;
use super::styles::Palette;
use crate::state::{AppState, FilterState, InputMode, Listing, ListingInput, ListingPage};
use ratatui::{
    layout::{Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Render the events screen: filter panel, result count, card grid and pagination.
pub fn render_listing(frame: &mut Frame, area: Rect, state: &AppState, palette: &Palette) {
    let store = match state.store() {
        Some(store) if state.listing.loaded => store,
        _ => {
            render_pending(frame, area, state, "Loading events...", palette);
            return;
        }
    };
    let listing = state.listing.listing(store);

    let editing = match state.input_mode {
        InputMode::Listing(target) => Some(target),
        _ => None,
    };
    let paginated = matches!(&listing, Listing::Page(page) if page.page_count > 1);

    let [filter_area, input_area, count_area, grid_area, pagination_area] = Layout::vertical([
        Constraint::Length(FILTER_PANEL_HEIGHT),
        Constraint::Length(if editing.is_some() { INPUT_HEIGHT } else { 0 }),
        Constraint::Length(1),
        Constraint::Min(0),
        Constraint::Length(if paginated { PAGINATION_HEIGHT } else { 0 }),
    ])
    .areas(area);

    frame.render_widget(filter_panel(&state.listing.filter, palette), filter_area);

    if let Some(target) = editing {
        let input = InputBox::new(&state.edit_buffer, input_title(target), palette)
            .focused(true)
            .error(state.listing.notice.clone());
        frame.render_widget(input, input_area);
    }

    frame.render_widget(
        Paragraph::new(format!("Found {} events", listing.total())).style(palette.heading),
        count_area,
    );

    match &listing {
        Listing::NoResults => {
            frame.render_widget(
                Paragraph::new("No events found.").style(palette.muted),
                grid_area,
            );
        }
        Listing::Page(page) => {
            render_card_grid(
                frame,
                grid_area,
                &page.items,
                CardVariant::Listing,
                Some(state.listing.selected),
                palette,
            );
            if paginated {
                frame.render_widget(Paragraph::new(pagination_line(page, palette)), pagination_area);
            }
        }
    }
}

fn input_title(target: ListingInput) -> &'static str {
    match target {
        ListingInput::Search => " Search ",
        ListingInput::FromDate => " From date (YYYY-MM-DD) ",
        ListingInput::ToDate => " To date (YYYY-MM-DD) ",
        ListingInput::Page => " Go to page ",
    }
}

fn control<'a>(key: &'a str, label: &'a str, value: String, palette: &Palette) -> Vec<Span<'a>> {
    vec![
        Span::styled(key, palette.key),
        Span::raw(" "),
        Span::styled(label, palette.muted),
        Span::raw(value),
        Span::raw("   "),
    ]
}

fn filter_panel<'a>(filter: &FilterState, palette: &Palette) -> Paragraph<'a> {
    let or_dash = |value: Option<&str>| value.unwrap_or("—").to_string();
    let or_all = |value: Option<&str>| value.unwrap_or("All").to_string();
    let search = if filter.search().is_empty() {
        "—".to_string()
    } else {
        filter.search().to_string()
    };

    let first = [
        control("/", "Search: ", search, palette),
        control("c", "Category: ", or_all(filter.category()), palette),
        control("l", "Location: ", or_all(filter.city()), palette),
    ]
    .concat();
    let second = [
        control("f", "From: ", or_dash(filter.from_date()), palette),
        control("t", "To: ", or_dash(filter.to_date()), palette),
        control("s", "Sort: ", filter.sort().label().to_string(), palette),
        control("x", "Clear filters", String::new(), palette),
    ]
    .concat();

    Paragraph::new(vec![Line::from(first), Line::from(second)]).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(palette.border)
            .title(" Filters "),
    )
}

/// `‹ Prev  1 [2] 3  Next ›` with the ends disabled on the first and last page.
pub fn pagination_line<'a>(page: &ListingPage<'_>, palette: &Palette) -> Line<'a> {
    let end_style = |enabled: bool| if enabled { palette.key } else { palette.disabled };

    let mut spans = vec![Span::styled("‹ Prev", end_style(page.has_prev())), Span::raw("  ")];
    for number in 1..=page.page_count {
        if number == page.page {
            spans.push(Span::styled(format!("[{number}]"), palette.active));
        } else {
            spans.push(Span::raw(format!(" {number} ")));
        }
    }
    spans.push(Span::raw("  "));
    spans.push(Span::styled("Next ›", end_style(page.has_next())));
    Line::from(spans)
}
