//! Layout components (card, header, status bar)

use crate::app::App;
use crate::flow::FlowState;
use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Padding, Paragraph},
    Frame,
};

const CARD_WIDTH: u16 = 60;
const CARD_HEIGHT: u16 = 24;
/// Icon, title, subtitle and a blank line
const HEADER_HEIGHT: u16 = 4;

/// Split the screen into the content area and the status bar
pub fn create_layout(area: Rect) -> (Rect, Rect) {
    let chunks = Layout::vertical([
        Constraint::Min(0),    // Content
        Constraint::Length(1), // Status bar
    ])
    .split(area);

    (chunks[0], chunks[1])
}

/// Centered card rectangle inside `area`
pub fn card_area(area: Rect) -> Rect {
    let width = CARD_WIDTH.min(area.width);
    let height = CARD_HEIGHT.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

/// Draw the card frame and header; returns the area left for the body
pub fn draw_card(frame: &mut Frame, area: Rect, state: FlowState) -> Rect {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::Magenta))
        .padding(Padding::horizontal(2));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks =
        Layout::vertical([Constraint::Length(HEADER_HEIGHT), Constraint::Min(0)]).split(inner);

    let (icon, title, subtitle) = header_text(state);
    let header = Paragraph::new(vec![
        Line::from(Span::styled(icon, Style::default().fg(Color::Magenta))),
        Line::from(Span::styled(
            title,
            Style::default()
                .fg(Color::Magenta)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(subtitle, Style::default().fg(Color::DarkGray))),
    ])
    .alignment(Alignment::Center);
    frame.render_widget(header, chunks[0]);

    chunks[1]
}

/// Header icon, title and subtitle for the current step
pub fn header_text(state: FlowState) -> (&'static str, &'static str, &'static str) {
    if state.is_idle() {
        (
            "👤",
            "Contact form",
            "Fill in your details so we can get in touch",
        )
    } else {
        (
            "💬",
            "WhatsApp verification",
            "Confirm you received the message",
        )
    }
}

/// Push `area` down by `offset` rows for the entrance animation
pub fn offset_area(area: Rect, offset: u16) -> Rect {
    let offset = offset.min(area.height);
    Rect {
        y: area.y + offset,
        height: area.height - offset,
        ..area
    }
}

/// Draw the status bar with key hints
pub fn draw_status_bar(frame: &mut Frame, area: Rect, app: &App) {
    let hints = get_view_hints(app.state());

    let mut spans = vec![Span::styled(
        format!(" {hints}"),
        Style::default().fg(Color::White),
    )];

    if !app.controller.notifier().is_empty() {
        spans.push(Span::raw(" | "));
        spans.push(Span::styled("^X:dismiss", Style::default().fg(Color::Gray)));
    }

    let status = Paragraph::new(Line::from(spans)).style(Style::default().bg(Color::DarkGray));
    frame.render_widget(status, area);

    // Quit hint on the right
    let quit_hint = " ^C:quit ";
    let quit_area = Rect {
        x: area.x + area.width.saturating_sub(quit_hint.len() as u16),
        y: area.y,
        width: (quit_hint.len() as u16).min(area.width),
        height: 1,
    };
    let quit_widget =
        Paragraph::new(quit_hint).style(Style::default().bg(Color::DarkGray).fg(Color::Gray));
    frame.render_widget(quit_widget, quit_area);
}

/// Get keyboard hints for the current step
fn get_view_hints(state: FlowState) -> &'static str {
    match state {
        FlowState::Idle => "Tab:next  Enter:send  Esc:quit",
        FlowState::Submitting => "Sending...",
        FlowState::Checking => "←/→:select  Enter:confirm  y/n:answer",
        FlowState::Success => "Finishing...",
        FlowState::Retry => "Enter:try again",
        FlowState::Complete => "Enter:back to start",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_card_is_centered() {
        let card = card_area(Rect::new(0, 0, 100, 40));
        assert_eq!(card, Rect::new(20, 8, CARD_WIDTH, CARD_HEIGHT));
    }

    #[test]
    fn test_card_shrinks_to_small_terminals() {
        let card = card_area(Rect::new(0, 0, 30, 10));
        assert_eq!(card, Rect::new(0, 0, 30, 10));
    }

    #[test]
    fn test_header_switches_after_idle() {
        assert_eq!(header_text(FlowState::Idle).1, "Contact form");
        for state in [
            FlowState::Submitting,
            FlowState::Checking,
            FlowState::Success,
            FlowState::Retry,
            FlowState::Complete,
        ] {
            assert_eq!(header_text(state).1, "WhatsApp verification");
        }
    }

    #[test]
    fn test_offset_area_clamps() {
        let area = Rect::new(0, 5, 10, 3);
        assert_eq!(offset_area(area, 1), Rect::new(0, 6, 10, 2));
        assert_eq!(offset_area(area, 10), Rect::new(0, 8, 10, 0));
    }
}
