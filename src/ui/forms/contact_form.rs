//! Contact form rendering

use super::field_renderer::{draw_field, draw_field_error};
use crate::app::App;
use crate::flow::FieldId;
use crate::state::FormFocus;
use crate::ui::components::{render_button, BUTTON_HEIGHT};
use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::Color,
    Frame,
};

/// Draw the name and phone fields with the submit button
pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::vertical([
        Constraint::Length(3),             // Name
        Constraint::Length(1),             // Name error
        Constraint::Length(3),             // Phone
        Constraint::Length(1),             // Phone error
        Constraint::Length(1),             // Spacing
        Constraint::Length(BUTTON_HEIGHT), // Submit
        Constraint::Min(0),
    ])
    .split(area);

    let focus = app.form.focus();
    let fields = app.controller.fields();
    let errors = app.controller.errors();

    for (field, field_area, error_area) in [
        (FieldId::Name, chunks[0], chunks[1]),
        (FieldId::Phone, chunks[2], chunks[3]),
    ] {
        let error = errors.get(field);
        draw_field(
            frame,
            field_area,
            field,
            fields.get(field),
            focus.is_field(field),
            error.is_some(),
        );
        draw_field_error(frame, error_area, error);
    }

    render_button(
        frame,
        chunks[5],
        "Send information →",
        focus == FormFocus::Submit,
        Some(Color::Magenta),
    );
}
