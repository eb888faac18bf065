//! Event detail screen.

use super::card::{render_card_grid, CardVariant};
use super::constants::{DETAIL_SIDEBAR_WIDTH, SIMILAR_CARD_HEIGHT};
use super::layout::render_pending;
use super::styles::Palette;
use crate::model::event::ADMISSION;
use crate::model::{format_date, EventId, EventRecord};
use crate::state::{AppState, DetailContent};
use ratatui::{
    layout::{Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Render the detail screen: record, facts sidebar and similar events.
///
/// Lookup errors replace the whole body with their message.
pub fn render_detail(frame: &mut Frame, area: Rect, state: &AppState, palette: &Palette) {
    let (id, similar) = match &state.detail.content {
        None => {
            render_pending(frame, area, state, "Loading event details...", palette);
            return;
        }
        Some(DetailContent::Error(message)) => {
            render_error(frame, area, message, palette);
            return;
        }
        Some(DetailContent::Found { id, similar }) => (*id, similar),
    };
    let Some(event) = state.record(id) else {
        render_pending(frame, area, state, "Loading event details...", palette);
        return;
    };

    let [main_area, heading_area, similar_area] = Layout::vertical([
        Constraint::Min(0),
        Constraint::Length(1),
        Constraint::Length(SIMILAR_CARD_HEIGHT),
    ])
    .areas(area);
    let [body_area, sidebar_area] =
        Layout::horizontal([Constraint::Min(0), Constraint::Length(DETAIL_SIDEBAR_WIDTH)])
            .areas(main_area);

    frame.render_widget(
        Paragraph::new(body_lines(event, palette)).wrap(Wrap { trim: false }),
        body_area,
    );
    frame.render_widget(sidebar(event, palette), sidebar_area);

    frame.render_widget(
        Paragraph::new(Span::styled("Similar Events", palette.heading)),
        heading_area,
    );
    render_similar(frame, similar_area, state, similar, palette);
}

fn render_error(frame: &mut Frame, area: Rect, message: &str, palette: &Palette) {
    let lines = vec![
        Line::from(Span::styled(message.to_string(), palette.error)),
        Line::default(),
        Line::from(vec![
            Span::styled("b", palette.key),
            Span::styled(" back   ", palette.muted),
            Span::styled("2", palette.key),
            Span::styled(" all events", palette.muted),
        ]),
    ];
    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: true }), area);
}

fn body_lines<'a>(event: &'a EventRecord, palette: &Palette) -> Vec<Line<'a>> {
    vec![
        Line::from(Span::styled(format!(" {} ", event.category), palette.badge)),
        Line::from(Span::styled(event.title.as_str(), palette.heading)),
        Line::from(format!("{} • {}", format_date(&event.date), event.time)),
        Line::from(format!("{}, {}", event.location_name, event.city)),
        Line::default(),
        Line::from(event.description_or_default()),
        Line::from(event.extended_description_or_default()),
        Line::default(),
        Line::from(Span::styled(
            format!("Image: {}", event.image_or_placeholder()),
            palette.muted,
        )),
        Line::from(Span::styled(
            format!("Link:  {}", event.detail_location()),
            palette.muted,
        )),
        Line::default(),
        Line::from(vec![
            Span::styled("r", palette.key),
            Span::raw(" ✓ RSVP Now"),
        ]),
    ]
}

fn fact<'a>(label: &'a str, value: String, palette: &Palette) -> Line<'a> {
    Line::from(vec![
        Span::styled(format!("{label:<11}"), palette.muted),
        Span::raw(value),
    ])
}

fn sidebar<'a>(event: &'a EventRecord, palette: &Palette) -> Paragraph<'a> {
    let lines = vec![
        fact("Date", format_date(&event.date), palette),
        fact("Time", event.time.clone(), palette),
        fact("Location", event.location_name.clone(), palette),
        fact("City", event.city.clone(), palette),
        fact("Organizer", event.organizer_or_default().to_string(), palette),
        Line::from(vec![
            Span::styled(format!("{:<11}", "Admission"), palette.muted),
            Span::styled(format!(" {ADMISSION} "), palette.badge),
        ]),
    ];

    Paragraph::new(lines).wrap(Wrap { trim: true }).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(palette.border)
            .title(" Event Details "),
    )
}

fn render_similar(
    frame: &mut Frame,
    area: Rect,
    state: &AppState,
    similar: &[EventId],
    palette: &Palette,
) {
    let events: Vec<&EventRecord> = similar.iter().filter_map(|id| state.record(*id)).collect();
    if events.is_empty() {
        frame.render_widget(
            Paragraph::new("No similar events found.").style(palette.muted),
            area,
        );
        return;
    }
    render_card_grid(
        frame,
        area,
        &events,
        CardVariant::Similar,
        Some(state.detail.selected),
        palette,
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{EventStore, Route};
    use crate::state::{SortMode, Timings};
    use crate::test_harness::{buffer_to_string, record_in};
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;
    use std::sync::Arc;
    use std::time::Instant;

    fn render(id: Option<&str>) -> String {
        let mut jazz = record_in(1, "Jazz Night", "2025-01-10", "music", "Addis Ababa");
        jazz.organizer = Some("Fendika Collective".into());
        let records = vec![
            jazz,
            record_in(2, "Gallery Walk", "2025-02-05", "art", "Hawassa"),
            record_in(3, "Choir Evening", "2025-02-10", "music", "Bahir Dar"),
        ];
        let mut state = AppState::new(
            Route::Detail {
                id: id.map(str::to_string),
            },
            Timings::default(),
            SortMode::DateAsc,
            Instant::now(),
        );
        state.on_store_ready(Arc::new(EventStore::from_records(records)));

        let palette = Palette::default();
        let mut terminal = Terminal::new(TestBackend::new(100, 26)).unwrap();
        terminal
            .draw(|frame| render_detail(frame, frame.area(), &state, &palette))
            .unwrap();
        buffer_to_string(terminal.backend().buffer())
    }

    #[test]
    fn found_event_shows_record_sidebar_and_similar() {
        let screen = render(Some("1"));
        assert!(screen.contains("Jazz Night"));
        assert!(screen.contains("Fri, Jan 10, 2025"));
        assert!(screen.contains("Fendika Collective"));
        assert!(screen.contains("FREE"));
        assert!(screen.contains("landingpage.html?id=1"));
        assert!(screen.contains("Join us for an amazing community event!"));
        assert!(screen.contains("Similar Events"));
        assert!(screen.contains("Choir Evening"));
        assert!(!screen.contains("Gallery Walk"));
    }

    #[test]
    fn no_similar_events_message() {
        let screen = render(Some("2"));
        assert!(screen.contains("No similar events found."));
        assert!(screen.contains("Community Organizer"));
    }

    #[test]
    fn unknown_id_lists_available_titles() {
        let screen = render(Some("42"));
        assert!(screen.contains("Event not found. Available events: Jazz Night, Gallery Walk,"));
        assert!(!screen.contains("Similar Events"));
    }

    #[test]
    fn missing_id_asks_to_choose() {
        let screen = render(None);
        assert!(screen.contains("No event selected. Please go back and choose an event."));
    }
}
