//! Views for every step after the form is submitted

use crate::app::App;
use crate::flow::FlowState;
use crate::state::ConfirmChoice;
use crate::ui::components::{render_button, BUTTON_HEIGHT};
use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
    Frame,
};
use std::time::Duration;

const SPINNER: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];
const SPINNER_INTERVAL: Duration = Duration::from_millis(80);

/// A button on a step view
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepButton {
    pub label: &'static str,
    pub accent: Color,
    pub selected: bool,
}

/// Everything a non-form step shows
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepContent {
    pub icon: &'static str,
    pub icon_color: Color,
    pub title: &'static str,
    pub message: String,
    pub buttons: Vec<StepButton>,
}

/// Content for `state`. `None` for the idle form, which has its own renderer.
pub fn step_content(state: FlowState, phone: &str, choice: ConfirmChoice) -> Option<StepContent> {
    let content = match state {
        FlowState::Idle => return None,
        FlowState::Submitting => StepContent {
            icon: SPINNER[0],
            icon_color: Color::Magenta,
            title: "Sending message...",
            message: "We are processing your information".to_string(),
            buttons: Vec::new(),
        },
        FlowState::Checking => StepContent {
            icon: "💬",
            icon_color: Color::Green,
            title: "Did you receive our WhatsApp message?",
            message: format!("You should have received a message at {phone}"),
            buttons: vec![
                StepButton {
                    label: ConfirmChoice::Received.label(),
                    accent: Color::Green,
                    selected: choice == ConfirmChoice::Received,
                },
                StepButton {
                    label: ConfirmChoice::NotReceived.label(),
                    accent: Color::Gray,
                    selected: choice == ConfirmChoice::NotReceived,
                },
            ],
        },
        FlowState::Success => StepContent {
            icon: "✔",
            icon_color: Color::Green,
            title: "Perfect!",
            message: "We will get in touch with you soon".to_string(),
            buttons: Vec::new(),
        },
        FlowState::Retry => StepContent {
            icon: "✖",
            icon_color: Color::Red,
            title: "Don't worry",
            message: "We will try to send you the message again".to_string(),
            buttons: vec![StepButton {
                label: "Try again",
                accent: Color::Magenta,
                selected: true,
            }],
        },
        FlowState::Complete => StepContent {
            icon: "✔",
            icon_color: Color::Green,
            title: "All set!",
            message: "You are registered and connected via WhatsApp".to_string(),
            buttons: vec![StepButton {
                label: "Back to start",
                accent: Color::Cyan,
                selected: true,
            }],
        },
    };
    Some(content)
}

/// Spinner glyph for the time spent in the current step
fn spinner_frame(elapsed: Duration) -> &'static str {
    let index = (elapsed.as_millis() / SPINNER_INTERVAL.as_millis()) as usize;
    SPINNER[index % SPINNER.len()]
}

/// Draw the current non-form step
pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let state = app.state();
    let Some(mut content) = step_content(state, &app.controller.fields().phone, app.confirm_choice)
    else {
        return;
    };

    if state == FlowState::Submitting {
        content.icon = spinner_frame(app.now.saturating_duration_since(app.state_entered));
    }

    let button_height = if content.buttons.is_empty() {
        0
    } else {
        BUTTON_HEIGHT
    };

    let chunks = Layout::vertical([
        Constraint::Length(2),             // Icon
        Constraint::Length(2),             // Title
        Constraint::Length(3),             // Message
        Constraint::Length(button_height), // Buttons
        Constraint::Min(0),
    ])
    .split(area);

    frame.render_widget(
        Paragraph::new(Span::styled(
            content.icon,
            Style::default()
                .fg(content.icon_color)
                .add_modifier(Modifier::BOLD),
        ))
        .alignment(Alignment::Center),
        chunks[0],
    );

    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(
            content.title,
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        )))
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true }),
        chunks[1],
    );

    frame.render_widget(
        Paragraph::new(Span::styled(
            content.message,
            Style::default().fg(Color::Gray),
        ))
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true }),
        chunks[2],
    );

    if content.buttons.is_empty() {
        return;
    }

    let constraints = vec![Constraint::Fill(1); content.buttons.len()];
    let button_areas = Layout::horizontal(constraints)
        .spacing(1)
        .split(chunks[3]);
    for (button, button_area) in content.buttons.iter().zip(button_areas.iter()) {
        render_button(
            frame,
            *button_area,
            button.label,
            button.selected,
            Some(button.accent),
        );
    }
}
