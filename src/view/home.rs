//! Home screen: hero text, search box and featured events.

use super::card::{render_card_grid, CardVariant};
use super::constants::INPUT_HEIGHT;
use super::input_box::InputBox;
use super::layout::render_pending;
use super::styles::Palette;
use crate::model::EventRecord;
use crate::state::{AppState, InputMode};
use ratatui::{
    layout::{Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Render the home screen: search box and featured cards.
pub fn render_home(frame: &mut Frame, area: Rect, state: &AppState, palette: &Palette) {
    let [hero_area, search_area, heading_area, grid_area] = Layout::vertical([
        Constraint::Length(2),
        Constraint::Length(INPUT_HEIGHT),
        Constraint::Length(1),
        Constraint::Min(0),
    ])
    .areas(area);

    let hero = Paragraph::new(vec![
        Line::from(Span::styled("Discover Community Events", palette.heading)),
        Line::from(Span::styled(
            "Concerts, exhibitions, markets and meetups near you.",
            palette.muted,
        )),
    ]);
    frame.render_widget(hero, hero_area);

    let search = InputBox::new(&state.home.search, " Search events ", palette)
        .focused(state.input_mode == InputMode::HomeSearch);
    frame.render_widget(search, search_area);

    frame.render_widget(
        Paragraph::new(Span::styled("Featured Events", palette.heading)),
        heading_area,
    );

    match &state.home.featured {
        None => render_pending(frame, grid_area, state, "Loading events...", palette),
        Some(ids) if ids.is_empty() => {
            frame.render_widget(
                Paragraph::new("No featured events right now.").style(palette.muted),
                grid_area,
            );
        }
        Some(ids) => {
            let events: Vec<&EventRecord> = ids.iter().filter_map(|id| state.record(*id)).collect();
            render_card_grid(
                frame,
                grid_area,
                &events,
                CardVariant::Featured,
                Some(state.home.selected),
                palette,
            );
        }
    }
}
