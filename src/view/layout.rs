//! Screen frame: navigation bar, banner, body, status bar.
//!
//! Pure layout logic. The body is delegated to the renderer of the screen
//! on display.

use super::constants::{BANNER_HEIGHT, NAV_BAR_HEIGHT, STATUS_BAR_HEIGHT};
use super::styles::Palette;
use super::{about, detail, form, help, home, listing};
use crate::model::Route;
use crate::state::{AppState, InputMode, ListingInput};
use ratatui::{
    layout::{Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
    Frame,
};

/// Render the whole frame for the current state.
pub fn render_layout(frame: &mut Frame, state: &AppState, palette: &Palette) {
    let banner_height = if state.banner.is_some() {
        BANNER_HEIGHT
    } else {
        0
    };

    let [nav_area, banner_area, body_area, status_area] = Layout::vertical([
        Constraint::Length(NAV_BAR_HEIGHT),
        Constraint::Length(banner_height),
        Constraint::Min(0),
        Constraint::Length(STATUS_BAR_HEIGHT),
    ])
    .areas(frame.area());

    render_nav_bar(frame, nav_area, state.route(), palette);

    if let Some(banner) = &state.banner {
        let paragraph = Paragraph::new(format!(" {} ", banner.text)).style(palette.banner);
        frame.render_widget(paragraph, banner_area);
    }

    let body = body_area.inner(ratatui::layout::Margin::new(1, 0));
    match state.route() {
        Route::Home => home::render_home(frame, body, state, palette),
        Route::Events { .. } => listing::render_listing(frame, body, state, palette),
        Route::Detail { .. } => detail::render_detail(frame, body, state, palette),
        Route::Rsvp { .. } => form::render_rsvp(frame, body, state, palette),
        Route::Contact => form::render_contact(frame, body, state, palette),
        Route::About => about::render_about(frame, body, palette),
    }

    let hints = Paragraph::new(Line::from(status_hints(state))).style(palette.muted);
    frame.render_widget(hints, status_area);

    if state.help_visible {
        help::render_help_overlay(frame, palette);
    }
}

/// Top-level screens reachable from the navigation bar.
const NAV_ITEMS: [(&str, &str); 4] = [
    ("1", "Home"),
    ("2", "Events"),
    ("3", "About"),
    ("4", "Contact"),
];

fn render_nav_bar(frame: &mut Frame, area: Rect, route: &Route, palette: &Palette) {
    let mut spans = vec![Span::styled(" eventboard ", palette.heading), Span::raw(" ")];

    for (key, label) in NAV_ITEMS {
        let style = if route.title() == label {
            palette.active
        } else {
            palette.muted
        };
        spans.push(Span::styled(format!(" {key} {label} "), style));
    }

    spans.push(Span::styled(format!("  {}", route.location()), palette.muted));
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

/// Keyboard hints for the status bar, by screen and input mode.
pub fn status_hints(state: &AppState) -> &'static str {
    match state.input_mode {
        InputMode::HomeSearch => "Enter: search events | Esc: cancel",
        InputMode::Listing(ListingInput::Search) => "Type to filter | Enter/Esc: done",
        InputMode::Listing(ListingInput::Page) => "Page number | Enter: go | Esc: cancel",
        InputMode::Listing(_) => "YYYY-MM-DD, empty clears | Enter: apply | Esc: cancel",
        InputMode::Normal => match state.route() {
            Route::Home => "/: search | j/k: select | Enter: open | 2: all events | ?: help | q: quit",
            Route::Events { .. } => {
                "/: search | c/l/s: filters | f/t: dates | x: clear | [/]: page | Enter: open | ?: help"
            }
            Route::Detail { .. } => "r: RSVP | j/k: similar | Enter: open | b: back | ?: help | q: quit",
            Route::Rsvp { .. } | Route::Contact => {
                "Tab/Shift+Tab: field | ←/→: choose | Enter: submit | Esc: back | Ctrl+C: quit"
            }
            Route::About => "1-4: screens | b: back | ?: help | q: quit",
        },
    }
}

/// Body shown while a screen waits for the store, or after it failed.
pub(super) fn render_pending(
    frame: &mut Frame,
    area: Rect,
    state: &AppState,
    loading: &str,
    palette: &Palette,
) {
    let line = match state.load_error() {
        Some(error) => Line::from(Span::styled(
            format!("Could not load events: {error}"),
            palette.error,
        )),
        None => Line::from(Span::styled(loading.to_string(), palette.muted)),
    };
    frame.render_widget(Paragraph::new(line).wrap(Wrap { trim: true }), area);
}

// ===== Tests =====

#[cfg(test)]
#[path = "layout_tests.rs"]
mod tests;
