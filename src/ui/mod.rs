//! UI module for rendering the TUI

mod components;
mod forms;
mod layout;
mod steps;

use crate::app::App;
use ratatui::Frame;

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let (content_area, status_area) = layout::create_layout(frame.area());

    let card = layout::card_area(content_area);
    let body = layout::draw_card(frame, card, app.state());
    let body = layout::offset_area(body, app.transition.offset);

    if app.state().is_idle() {
        forms::draw_contact_form(frame, body, app);
    } else {
        steps::draw(frame, body, app);
    }

    layout::draw_status_bar(frame, status_area, app);

    // Toasts go on top of everything
    components::render_toasts(frame, app.controller.notifier().visible());
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::tests::{fill_form, instant_app, press};
    use crossterm::event::KeyCode;
    use ratatui::{backend::TestBackend, Terminal};
    use std::time::Instant;

    fn buffer_to_string(buf: &ratatui::buffer::Buffer) -> String {
        let mut s = String::new();
        for y in 0..buf.area.height {
            for x in 0..buf.area.width {
                s.push_str(buf[(x, y)].symbol());
            }
            s.push('\n');
        }
        s
    }

    fn render(app: &App) -> String {
        let backend = TestBackend::new(100, 30);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|frame| draw(frame, app)).unwrap();
        buffer_to_string(terminal.backend().buffer())
    }

    #[test]
    fn test_renders_contact_form() {
        let app = instant_app();
        let output = render(&app);
        assert!(output.contains("Contact form"), "should show title");
        assert!(output.contains("Full name"), "should show name field");
        assert!(output.contains("Phone number"), "should show phone field");
        assert!(output.contains("Send information"), "should show submit");
    }

    #[test]
    fn test_renders_inline_errors() {
        let mut app = instant_app();
        press(&mut app, KeyCode::Enter);
        let output = render(&app);
        assert!(output.contains("name required"));
        assert!(output.contains("phone required"));
        assert!(output.contains("Check the form"), "should show toast");
    }

    #[test]
    fn test_renders_confirmation_prompt_with_phone() {
        let mut app = instant_app();
        fill_form(&mut app);
        press(&mut app, KeyCode::Enter);
        app.tick(Instant::now());

        let output = render(&app);
        assert!(output.contains("WhatsApp verification"));
        assert!(output.contains("+34"), "should show the phone");
        assert!(output.contains("678"), "should show the phone");
        assert!(output.contains("Yes, I got it"));
    }

    #[test]
    fn test_renders_retry() {
        let mut app = instant_app();
        fill_form(&mut app);
        press(&mut app, KeyCode::Enter);
        app.tick(Instant::now());
        press(&mut app, KeyCode::Char('n'));

        let output = render(&app);
        assert!(output.contains("Don't worry"));
        assert!(output.contains("Try again"));
    }

    #[test]
    fn test_renders_in_tiny_terminal() {
        let app = instant_app();
        let backend = TestBackend::new(10, 4);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|frame| draw(frame, &app)).unwrap();
    }
}
