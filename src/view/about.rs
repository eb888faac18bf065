//! About screen. Static text.

use super::styles::Palette;
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
    Frame,
};

/// Render the static about page.
pub fn render_about(frame: &mut Frame, area: Rect, palette: &Palette) {
    let lines = vec![
        Line::from(Span::styled("About Us", palette.heading)),
        Line::default(),
        Line::from(
            "We bring people together around the music, art, food and ideas that make a \
             city feel like home. Every event listed here is free to attend.",
        ),
        Line::default(),
        Line::from(Span::styled("Our Mission", palette.heading)),
        Line::from(
            "Make it easy to discover what is happening nearby and to show up: browse the \
             listing, RSVP in a few keystrokes, and meet your neighbours.",
        ),
        Line::default(),
        Line::from(Span::styled("Get Involved", palette.heading)),
        Line::from(vec![
            Span::raw("Organizing something? Press "),
            Span::styled("4", palette.key),
            Span::raw(" to reach us through the contact form."),
        ]),
    ];
    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: true }), area);
}
