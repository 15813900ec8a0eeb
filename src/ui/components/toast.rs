//! Toast overlay component

use crate::notify::{Toast, Variant};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Padding, Paragraph},
    Frame,
};

/// Maximum width of a toast including borders
const TOAST_WIDTH: u16 = 40;

/// Render toasts stacked in the top-right corner, newest on top
pub fn render_toasts<'a>(frame: &mut Frame, toasts: impl Iterator<Item = &'a Toast>) {
    let area = frame.area();
    let width = TOAST_WIDTH.min(area.width);
    if width < 8 {
        return;
    }
    let text_width = (width - 4) as usize; // borders + 1 char padding each side

    let mut y = area.y;
    for toast in toasts {
        let lines = toast_lines(toast, text_width);
        let height = lines.len() as u16 + 2;
        if y + height > area.y + area.height {
            break;
        }

        let toast_area = Rect {
            x: area.x + area.width - width,
            y,
            width,
            height,
        };
        y += height;

        let border_color = match toast.notification.variant {
            Variant::Default => Color::Magenta,
            Variant::Destructive => Color::Red,
        };

        frame.render_widget(Clear, toast_area);
        let paragraph = Paragraph::new(lines).block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(border_color))
                .padding(Padding::horizontal(1)),
        );
        frame.render_widget(paragraph, toast_area);
    }
}

fn toast_lines(toast: &Toast, width: usize) -> Vec<Line<'static>> {
    let notification = &toast.notification;
    let title_color = match notification.variant {
        Variant::Default => Color::White,
        Variant::Destructive => Color::Red,
    };

    let mut lines = vec![Line::from(Span::styled(
        notification.title.clone(),
        Style::default()
            .fg(title_color)
            .add_modifier(Modifier::BOLD),
    ))];

    if !notification.description.is_empty() {
        lines.extend(
            wrap_text(&notification.description, width)
                .into_iter()
                .map(|l| Line::from(Span::styled(l, Style::default().fg(Color::Gray)))),
        );
    }

    if let Some(action) = &notification.action {
        lines.push(Line::from(Span::styled(
            format!("[{action}]"),
            Style::default().fg(Color::Cyan),
        )));
    }

    lines
}

/// Wrap text to fit within a maximum width
fn wrap_text(text: &str, max_width: usize) -> Vec<String> {
    let mut lines = Vec::new();

    for paragraph in text.split('\n') {
        if paragraph.is_empty() {
            lines.push(String::new());
            continue;
        }

        let mut current_line = String::new();
        for word in paragraph.split_whitespace() {
            let current_len = current_line.chars().count();
            let word_len = word.chars().count();
            if current_len + word_len + 1 > max_width && !current_line.is_empty() {
                lines.push(current_line);
                current_line = String::new();
            }
            if !current_line.is_empty() {
                current_line.push(' ');
            }
            current_line.push_str(word);
        }
        if !current_line.is_empty() {
            lines.push(current_line);
        }
    }

    if lines.is_empty() {
        lines.push(String::new());
    }

    lines
}
