//! Event card widget.
//!
//! Every screen renders records through [`EventCard`]; the variant picks
//! which facts the card shows.

use super::constants::{CARD_HEIGHT, GRID_COLUMNS, SIMILAR_CARD_HEIGHT};
use super::styles::Palette;
use crate::model::{format_date, EventRecord};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
    Frame,
};

/// Where a card is shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardVariant {
    /// Home screen: category badge, featured marker, date, venue, city.
    Featured,
    /// Listing grid: category badge, date, venue, city.
    Listing,
    /// Detail screen's similar events: date and venue.
    Similar,
}

impl CardVariant {
    /// Rows one card occupies, borders included.
    pub fn height(self) -> u16 {
        match self {
            CardVariant::Featured | CardVariant::Listing => CARD_HEIGHT,
            CardVariant::Similar => SIMILAR_CARD_HEIGHT,
        }
    }
}

/// A single event rendered as a bordered card titled with the event title.
pub struct EventCard<'a> {
    event: &'a EventRecord,
    variant: CardVariant,
    selected: bool,
    palette: &'a Palette,
}

impl<'a> EventCard<'a> {
    /// Create an unselected card.
    pub fn new(event: &'a EventRecord, variant: CardVariant, palette: &'a Palette) -> Self {
        Self {
            event,
            variant,
            selected: false,
            palette,
        }
    }

    /// Highlight the card as the current selection.
    pub fn selected(mut self, selected: bool) -> Self {
        self.selected = selected;
        self
    }

    fn lines(&self) -> Vec<Line<'a>> {
        let event = self.event;
        let date = format_date(&event.date);

        match self.variant {
            CardVariant::Similar => vec![
                Line::from(date),
                Line::from(event.location_name.as_str()),
            ],
            CardVariant::Featured | CardVariant::Listing => {
                let mut badge = vec![Span::styled(
                    format!(" {} ", event.category),
                    self.palette.badge,
                )];
                if self.variant == CardVariant::Featured && event.is_featured {
                    badge.push(Span::raw(" "));
                    badge.push(Span::styled("★ Featured", self.palette.featured));
                }
                vec![
                    Line::from(badge),
                    Line::from(format!("{date} • {}", event.time)),
                    Line::from(event.location_name.as_str()),
                    Line::from(Span::styled(event.city.as_str(), self.palette.muted)),
                ]
            }
        }
    }
}

impl Widget for EventCard<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let border_style = if self.selected {
            self.palette.selected
        } else {
            self.palette.border
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(border_style)
            .title(Span::styled(
                format!(" {} ", self.event.title),
                self.palette.heading,
            ));

        Paragraph::new(self.lines()).block(block).render(area, buf);
    }
}

/// First grid row to draw so that the selected card's row is visible.
pub fn first_visible_row(selected: Option<usize>, visible_rows: usize) -> usize {
    let Some(selected) = selected else {
        return 0;
    };
    let row = selected / GRID_COLUMNS;
    row.saturating_sub(visible_rows.saturating_sub(1))
}

/// Lay cards out in rows of [`GRID_COLUMNS`].
///
/// When not every row fits, rows scroll so the selected card stays on screen.
pub fn render_card_grid(
    frame: &mut Frame,
    area: Rect,
    events: &[&EventRecord],
    variant: CardVariant,
    selected: Option<usize>,
    palette: &Palette,
) {
    if events.is_empty() || area.height == 0 {
        return;
    }

    let card_height = variant.height();
    let visible_rows = usize::from((area.height / card_height).max(1));
    let first_row = first_visible_row(selected, visible_rows);

    let rows = events.chunks(GRID_COLUMNS).enumerate().skip(first_row);
    for (offset, (row_index, row)) in rows.take(visible_rows).enumerate() {
        let y = area.y + card_height * offset as u16;
        let height = card_height.min(area.bottom().saturating_sub(y));
        let row_area = Rect::new(area.x, y, area.width, height);
        let columns = Layout::horizontal([Constraint::Ratio(1, GRID_COLUMNS as u32); GRID_COLUMNS])
            .split(row_area);

        for (column, event) in row.iter().enumerate() {
            let index = row_index * GRID_COLUMNS + column;
            let card =
                EventCard::new(event, variant, palette).selected(selected == Some(index));
            frame.render_widget(card, columns[column]);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_harness::{buffer_to_string, record_in};
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    fn render_card(event: &EventRecord, variant: CardVariant, width: u16) -> String {
        let palette = Palette::default();
        let mut terminal = Terminal::new(TestBackend::new(width, variant.height())).unwrap();
        terminal
            .draw(|frame| {
                frame.render_widget(EventCard::new(event, variant, &palette), frame.area());
            })
            .unwrap();
        buffer_to_string(terminal.backend().buffer())
    }

    fn jazz() -> EventRecord {
        let mut event = record_in(1, "Jazz Night", "2025-01-10", "music", "Addis Ababa");
        event.time = "19:00".into();
        event.location_name = "Fendika".into();
        event.is_featured = true;
        event
    }

    #[test]
    fn listing_card_shows_core_facts() {
        let screen = render_card(&jazz(), CardVariant::Listing, 40);
        assert!(screen.contains("Jazz Night"));
        assert!(screen.contains(" music "));
        assert!(screen.contains("Fri, Jan 10, 2025 • 19:00"));
        assert!(screen.contains("Fendika"));
        assert!(screen.contains("Addis Ababa"));
        assert!(!screen.contains("Featured"), "listing cards carry no marker");
    }

    #[test]
    fn featured_card_shows_marker() {
        let screen = render_card(&jazz(), CardVariant::Featured, 40);
        assert!(screen.contains("★ Featured"));
    }

    #[test]
    fn similar_card_is_compact() {
        let screen = render_card(&jazz(), CardVariant::Similar, 40);
        assert!(screen.contains("Fri, Jan 10, 2025"));
        assert!(screen.contains("Fendika"));
        assert!(!screen.contains("Addis Ababa"));
        assert!(!screen.contains(" music "));
    }

    #[test]
    fn first_visible_row_follows_selection() {
        assert_eq!(first_visible_row(None, 1), 0);
        assert_eq!(first_visible_row(Some(2), 1), 0);
        assert_eq!(first_visible_row(Some(3), 1), 1);
        assert_eq!(first_visible_row(Some(7), 2), 1);
        assert_eq!(first_visible_row(Some(4), 3), 0);
    }

    #[test]
    fn grid_scrolls_to_selected_row() {
        let events: Vec<EventRecord> = (1..=6)
            .map(|i| record_in(i, &format!("Card {i}"), "2025-01-01", "art", "X"))
            .collect();
        let refs: Vec<&EventRecord> = events.iter().collect();
        let palette = Palette::default();
        let mut terminal = Terminal::new(TestBackend::new(90, CARD_HEIGHT)).unwrap();

        terminal
            .draw(|frame| {
                render_card_grid(
                    frame,
                    frame.area(),
                    &refs,
                    CardVariant::Listing,
                    Some(4),
                    &palette,
                );
            })
            .unwrap();

        let screen = buffer_to_string(terminal.backend().buffer());
        assert!(screen.contains("Card 5"));
        assert!(!screen.contains("Card 1"));
    }
}
