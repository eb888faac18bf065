//! RSVP and contact forms.

use super::constants::{INPUT_HEIGHT, RSVP_PREVIEW_WIDTH};
use super::input_box::InputBox;
use super::styles::Palette;
use crate::model::event::ADMISSION;
use crate::model::{format_date, EventRecord};
use crate::state::{AppState, FieldKind, FormState};
use ratatui::{
    layout::{Constraint, Layout, Margin, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Event preview on the left, RSVP form on the right.
pub fn render_rsvp(frame: &mut Frame, area: Rect, state: &AppState, palette: &Palette) {
    let [preview_area, form_area] =
        Layout::horizontal([Constraint::Length(RSVP_PREVIEW_WIDTH), Constraint::Min(0)])
            .areas(area);

    let preview: Vec<Line> = match &state.rsvp.event {
        None => match state.load_error() {
            Some(error) => vec![Line::from(Span::styled(
                format!("Could not load events: {error}"),
                palette.error,
            ))],
            None => vec![Line::from(Span::styled(
                "Loading event details...",
                palette.muted,
            ))],
        },
        Some(Err(error)) => vec![Line::from(Span::styled(error.to_string(), palette.error))],
        Some(Ok(id)) => match state.record(*id) {
            Some(event) => preview_lines(event, palette),
            None => Vec::new(),
        },
    };
    frame.render_widget(
        Paragraph::new(preview).wrap(Wrap { trim: true }).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(palette.border)
                .title(" Event "),
        ),
        preview_area,
    );

    let enabled = state.rsvp.event_id().is_some();
    let form_area = form_area.inner(Margin::new(1, 0));
    render_form(frame, form_area, &state.rsvp.form, enabled, palette);
}

fn preview_lines<'a>(event: &'a EventRecord, palette: &Palette) -> Vec<Line<'a>> {
    let item = |label: &'a str, value: String| {
        Line::from(vec![Span::styled(label, palette.muted), Span::raw(value)])
    };
    vec![
        Line::from(Span::styled(event.title.as_str(), palette.heading)),
        Line::default(),
        item("Date: ", format_date(&event.date)),
        item("Time: ", event.time.clone()),
        item("Location: ", event.location_name.clone()),
        item("City: ", event.city.clone()),
        item("Organizer: ", event.organizer_or_default().to_string()),
        Line::default(),
        Line::from(Span::styled(format!("Admission: {ADMISSION}"), palette.badge)),
    ]
}

/// Contact form under a short introduction.
pub fn render_contact(frame: &mut Frame, area: Rect, state: &AppState, palette: &Palette) {
    let [intro_area, form_area] =
        Layout::vertical([Constraint::Length(2), Constraint::Min(0)]).areas(area);

    frame.render_widget(
        Paragraph::new(vec![
            Line::from(Span::styled("Contact the Organizers", palette.heading)),
            Line::from(Span::styled(
                "Questions, partnerships or feedback: we read every message.",
                palette.muted,
            )),
        ]),
        intro_area,
    );
    render_form(frame, form_area, &state.contact, true, palette);
}

fn render_form(
    frame: &mut Frame,
    area: Rect,
    form: &FormState,
    enabled: bool,
    palette: &Palette,
) {
    let fields = form.fields();
    let mut constraints: Vec<Constraint> = fields
        .iter()
        .map(|_| Constraint::Length(INPUT_HEIGHT))
        .collect();
    constraints.push(Constraint::Length(1));
    constraints.push(Constraint::Min(0));
    let areas = Layout::vertical(constraints).split(area);

    for (index, field) in fields.iter().enumerate() {
        let marker = if field.spec.required { " *" } else { "" };
        let title = format!(" {}{marker} ", field.spec.label);
        let focused = index == form.focus();
        let error = field.error.map(|e| e.to_string());

        let shown;
        let widget = match field.spec.kind {
            FieldKind::Choice(_) => {
                shown = format!("‹ {} ›", field.value());
                InputBox::with_text(&shown, 0, &title, palette)
                    .focused(focused)
                    .hide_cursor()
            }
            _ => InputBox::new(&field.input, &title, palette).focused(focused && !form.is_busy()),
        };
        frame.render_widget(widget.error(error), areas[index]);
    }

    let (idle, busy) = form.kind().submit_labels();
    let (label, style) = if form.is_busy() {
        (busy, palette.disabled)
    } else if enabled {
        (idle, palette.key)
    } else {
        (idle, palette.disabled)
    };
    frame.render_widget(
        Paragraph::new(Line::from(vec![
            Span::styled(format!("[ {label} ]"), style),
            Span::styled("  Enter", palette.key),
            Span::styled(" to submit", palette.muted),
        ])),
        areas[fields.len()],
    );
}
