//! Contact session driver.
//!
//! Owns the form fields, validation errors, current state and pending
//! timers. Every user trigger and every elapsed timer goes through
//! `machine::reduce`; this type only applies the effects it returns.

use super::error::FlowError;
use super::machine::{reduce, FlowEffect, FlowEvent, FlowState, TimerKind};
use super::scheduler::{Clock, Scheduler, SystemClock, TaskId};
use super::validator::{validate, FieldId, FormFields, ValidationErrors, ValidationResult};
use crate::config::ContactConfig;
use crate::notify::Notifier;
use std::time::{Duration, Instant};

/// Length of the simulated delays
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FlowTimings {
    pub submit_delay: Duration,
    pub success_delay: Duration,
}

impl FlowTimings {
    fn delay(&self, kind: TimerKind) -> Duration {
        match kind {
            TimerKind::SubmitDelay => self.submit_delay,
            TimerKind::SuccessDelay => self.success_delay,
        }
    }
}

impl Default for FlowTimings {
    fn default() -> Self {
        ContactConfig::default().into()
    }
}

impl From<&ContactConfig> for FlowTimings {
    fn from(config: &ContactConfig) -> Self {
        Self {
            submit_delay: config.submit_delay(),
            success_delay: config.success_delay(),
        }
    }
}

impl From<ContactConfig> for FlowTimings {
    fn from(config: ContactConfig) -> Self {
        Self::from(&config)
    }
}

pub struct FlowController<N: Notifier, C: Clock = SystemClock> {
    state: FlowState,
    fields: FormFields,
    errors: ValidationErrors,
    scheduler: Scheduler,
    timer: Option<TaskId>,
    timings: FlowTimings,
    notifier: N,
    clock: C,
}

impl<N: Notifier, C: Clock> FlowController<N, C> {
    pub fn new(notifier: N, clock: C, timings: FlowTimings) -> Self {
        Self {
            state: FlowState::Idle,
            fields: FormFields::default(),
            errors: ValidationErrors::default(),
            scheduler: Scheduler::new(),
            timer: None,
            timings,
            notifier,
            clock,
        }
    }

    pub fn state(&self) -> FlowState {
        self.state
    }

    pub fn fields(&self) -> &FormFields {
        &self.fields
    }

    pub fn errors(&self) -> &ValidationErrors {
        &self.errors
    }

    pub fn notifier(&self) -> &N {
        &self.notifier
    }

    pub fn notifier_mut(&mut self) -> &mut N {
        &mut self.notifier
    }

    /// Edit a field in place. Ignored outside of `Idle`; returns whether the
    /// edit was applied.
    pub fn edit_field(&mut self, field: FieldId, edit: impl FnOnce(&mut String)) -> bool {
        if !self.state.is_idle() {
            return false;
        }
        edit(self.fields.get_mut(field));
        true
    }

    /// Validate the current fields and move to `Submitting` if they pass.
    ///
    /// An invalid form is not an error: the state stays `Idle` and the
    /// returned result carries the messages, which are also exposed through
    /// `errors()`.
    pub fn submit(&mut self) -> Result<ValidationResult, FlowError> {
        let validation = validate(&self.fields);
        let step = reduce(
            self.state,
            FlowEvent::Submit {
                valid: validation.valid,
            },
        )?;

        // Re-validation replaces whatever was shown before
        self.errors.clear();
        let exposed = validation.errors.clone();
        self.apply(step.next, step.effects, Some(exposed));

        if validation.valid {
            tracing::info!(phone = %self.fields.normalized_phone(), "contact submitted");
        } else {
            tracing::debug!(errors = ?validation.errors, "validation failed");
        }
        Ok(validation)
    }

    pub fn confirm_received(&mut self) -> Result<FlowState, FlowError> {
        self.dispatch(FlowEvent::ConfirmReceived)
    }

    pub fn confirm_not_received(&mut self) -> Result<FlowState, FlowError> {
        self.dispatch(FlowEvent::ConfirmNotReceived)
    }

    pub fn retry(&mut self) -> Result<FlowState, FlowError> {
        self.dispatch(FlowEvent::Retry)
    }

    pub fn restart(&mut self) -> Result<FlowState, FlowError> {
        self.dispatch(FlowEvent::Restart)
    }

    /// Fire every timer that is due. Returns true if the state changed.
    pub fn tick(&mut self) -> bool {
        if self.scheduler.is_empty() {
            return false;
        }
        let due = self.scheduler.take_due(self.clock.now());
        if due.is_empty() {
            return false;
        }
        self.timer = None;

        let before = self.state;
        for kind in due {
            if let Err(err) = self.dispatch(FlowEvent::TimerElapsed(kind)) {
                tracing::warn!("dropping stale timer: {err}");
            }
        }
        self.state != before
    }

    pub fn next_deadline(&self) -> Option<Instant> {
        self.scheduler.next_deadline()
    }

    /// Cancel pending timers. The state is left as is.
    pub fn shutdown(&mut self) {
        self.timer = None;
        self.scheduler.cancel_all();
    }

    fn dispatch(&mut self, event: FlowEvent) -> Result<FlowState, FlowError> {
        let step = reduce(self.state, event)?;
        self.apply(step.next, step.effects, None);
        Ok(self.state)
    }

    fn apply(
        &mut self,
        next: FlowState,
        effects: Vec<FlowEffect>,
        mut exposed: Option<ValidationErrors>,
    ) {
        if next != self.state {
            tracing::debug!(from = %self.state, to = %next, "flow transition");
        }
        self.state = next;

        for effect in effects {
            match effect {
                FlowEffect::ScheduleTimer(kind) => {
                    let deadline = self.clock.now() + self.timings.delay(kind);
                    self.timer = Some(self.scheduler.schedule(kind, deadline));
                }
                FlowEffect::ExposeErrors => {
                    if let Some(errors) = exposed.take() {
                        self.errors = errors;
                    }
                }
                FlowEffect::ClearSession => {
                    if let Some(id) = self.timer.take() {
                        self.scheduler.cancel(id);
                    }
                    self.fields.clear();
                    self.errors.clear();
                }
                FlowEffect::Notify(notification) => self.notifier.notify(notification),
            }
        }
    }
}
