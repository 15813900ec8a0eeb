//! Application state and key handling

use crate::config::ContactConfig;
use crate::flow::{FieldId, FlowController, FlowError, FlowState, SystemClock};
use crate::notify::ToastCenter;
use crate::state::{ConfirmChoice, ContactForm, Form, FormFocus, ViewTransition};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::time::{Duration, Instant};

/// Redraw interval while something is animating (~60fps)
const ANIMATION_FRAME: Duration = Duration::from_millis(16);
/// Redraw interval while idle
const IDLE_FRAME: Duration = Duration::from_millis(100);

/// Main application struct
pub struct App {
    /// Contact session
    pub controller: FlowController<ToastCenter>,
    /// Focus on the idle form
    pub form: ContactForm,
    /// Highlighted answer on the confirmation prompt
    pub confirm_choice: ConfirmChoice,
    /// Slide-in of the current view
    pub transition: ViewTransition,
    /// Frame time of the last tick
    pub now: Instant,
    /// When the current flow state was entered
    pub state_entered: Instant,
    animations: bool,
    last_state: FlowState,
    /// Whether the app should quit
    quit: bool,
}

impl App {
    /// Create a new App instance
    pub fn new(config: &ContactConfig) -> Self {
        let now = Instant::now();
        let toasts = ToastCenter::new(SystemClock, config.toast_duration(), config.max_toasts);
        let controller = FlowController::new(toasts, SystemClock, config.into());

        Self {
            controller,
            form: ContactForm::new(),
            confirm_choice: ConfirmChoice::default(),
            transition: Self::enter_transition(config.animations, now),
            now,
            state_entered: now,
            animations: config.animations,
            last_state: FlowState::Idle,
            quit: false,
        }
    }

    fn enter_transition(animations: bool, now: Instant) -> ViewTransition {
        if animations {
            ViewTransition::new(now)
        } else {
            ViewTransition::settled(now)
        }
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    pub fn state(&self) -> FlowState {
        self.controller.state()
    }

    /// Advance timers and animations to `now`
    pub fn tick(&mut self, now: Instant) {
        self.now = now;
        self.controller.tick();
        self.controller.notifier_mut().prune();
        self.sync_view();
        self.transition.update(now);
    }

    /// How long the event loop may block before the next tick is needed
    pub fn poll_timeout(&self) -> Duration {
        let animating =
            !self.transition.is_settled() || self.state() == FlowState::Submitting;
        let frame = if animating { ANIMATION_FRAME } else { IDLE_FRAME };

        [
            self.controller.next_deadline(),
            self.controller.notifier().next_expiry(),
        ]
        .into_iter()
        .flatten()
        .map(|deadline| deadline.saturating_duration_since(self.now))
        .fold(frame, Duration::min)
    }

    /// Restart the entrance animation and reset focus when the step changes
    fn sync_view(&mut self) {
        let state = self.controller.state();
        if state == self.last_state {
            return;
        }
        self.last_state = state;
        self.state_entered = self.now;
        self.transition = Self::enter_transition(self.animations, self.now);

        match state {
            FlowState::Idle => self.form.reset(),
            FlowState::Checking => self.confirm_choice = ConfirmChoice::default(),
            _ => {}
        }
    }

    /// Handle a key press
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            match key.code {
                KeyCode::Char('c') => self.quit = true,
                KeyCode::Char('x') => self.controller.notifier_mut().dismiss_all(),
                _ => {}
            }
            return;
        }

        let result = match self.controller.state() {
            FlowState::Idle => self.handle_form_key(key),
            FlowState::Checking => self.handle_checking_key(key),
            FlowState::Retry => self.handle_button_key(key, |app| app.controller.retry()),
            FlowState::Complete => self.handle_button_key(key, |app| app.controller.restart()),
            FlowState::Submitting | FlowState::Success => {
                if key.code == KeyCode::Esc {
                    self.quit = true;
                }
                Ok(())
            }
        };

        if let Err(err) = result {
            tracing::debug!("ignored key: {err}");
        }
        self.sync_view();
    }

    fn handle_form_key(&mut self, key: KeyEvent) -> Result<(), FlowError> {
        match key.code {
            KeyCode::Esc => self.quit = true,
            KeyCode::Tab | KeyCode::Down => self.form.next_field(),
            KeyCode::BackTab | KeyCode::Up => self.form.prev_field(),
            KeyCode::Enter => self.submit_form()?,
            KeyCode::Backspace => {
                if let Some(field) = self.form.focus().field() {
                    self.controller.edit_field(field, |value| {
                        value.pop();
                    });
                }
            }
            KeyCode::Char(c) => match self.form.focus() {
                FormFocus::Field(field) => {
                    self.controller.edit_field(field, |value| value.push(c));
                }
                FormFocus::Submit if c == ' ' => self.submit_form()?,
                FormFocus::Submit => {}
            },
            _ => {}
        }
        Ok(())
    }

    fn submit_form(&mut self) -> Result<(), FlowError> {
        let validation = self.controller.submit()?;
        if !validation.valid {
            self.focus_first_error();
        }
        Ok(())
    }

    fn focus_first_error(&mut self) {
        let errors = self.controller.errors();
        let target = [FieldId::Name, FieldId::Phone]
            .into_iter()
            .find(|field| errors.get(*field).is_some());

        if let Some(field) = target {
            if let Some(index) = FormFocus::ORDER.iter().position(|f| f.is_field(field)) {
                self.form.set_active_field(index);
            }
        }
    }

    fn handle_checking_key(&mut self, key: KeyEvent) -> Result<(), FlowError> {
        match key.code {
            KeyCode::Esc => self.quit = true,
            KeyCode::Left | KeyCode::Right | KeyCode::Tab | KeyCode::BackTab => {
                self.confirm_choice.toggle()
            }
            KeyCode::Char('y') | KeyCode::Char('Y') => {
                self.controller.confirm_received()?;
            }
            KeyCode::Char('n') | KeyCode::Char('N') => {
                self.controller.confirm_not_received()?;
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                match self.confirm_choice {
                    ConfirmChoice::Received => self.controller.confirm_received()?,
                    ConfirmChoice::NotReceived => self.controller.confirm_not_received()?,
                };
            }
            _ => {}
        }
        Ok(())
    }

    /// Views with a single button: Enter or Space presses it
    fn handle_button_key(
        &mut self,
        key: KeyEvent,
        press: impl FnOnce(&mut Self) -> Result<FlowState, FlowError>,
    ) -> Result<(), FlowError> {
        match key.code {
            KeyCode::Esc => self.quit = true,
            KeyCode::Enter | KeyCode::Char(' ') => {
                press(self)?;
            }
            _ => {}
        }
        Ok(())
    }

    /// Cancel pending timers before exit
    pub fn shutdown(&mut self) {
        self.controller.shutdown();
    }
}
