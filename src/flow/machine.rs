//! Contact flow state machine.
//!
//! `reduce` is the only place transitions are defined. It never touches the
//! form, timers or notifier; it returns the next state together with the
//! effects the controller has to apply.

use super::error::FlowError;
use crate::notify::Notification;
use std::fmt;

/// Step of the contact/confirmation sequence currently on screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FlowState {
    #[default]
    Idle,
    Submitting,
    Checking,
    Success,
    Retry,
    Complete,
}

impl FlowState {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Submitting => "submitting",
            Self::Checking => "checking",
            Self::Success => "success",
            Self::Retry => "retry",
            Self::Complete => "complete",
        }
    }

    /// Whether the form fields are editable
    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }
}

impl fmt::Display for FlowState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Simulated delays
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TimerKind {
    /// submitting -> checking
    SubmitDelay,
    /// success -> complete
    SuccessDelay,
}

/// Inputs to the state machine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlowEvent {
    /// Submit pressed; carries the outcome of validating the current fields
    Submit { valid: bool },
    TimerElapsed(TimerKind),
    ConfirmReceived,
    ConfirmNotReceived,
    Retry,
    Restart,
}

impl fmt::Display for FlowEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Submit { .. } => f.write_str("submit"),
            Self::TimerElapsed(TimerKind::SubmitDelay) => f.write_str("submit delay"),
            Self::TimerElapsed(TimerKind::SuccessDelay) => f.write_str("success delay"),
            Self::ConfirmReceived => f.write_str("confirm received"),
            Self::ConfirmNotReceived => f.write_str("confirm not received"),
            Self::Retry => f.write_str("retry"),
            Self::Restart => f.write_str("restart"),
        }
    }
}

/// Side effects requested by a transition
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FlowEffect {
    ScheduleTimer(TimerKind),
    /// Keep the validation errors visible on the form
    ExposeErrors,
    /// Empty the form fields and errors
    ClearSession,
    Notify(Notification),
}

/// Result of a successful transition
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Step {
    pub next: FlowState,
    pub effects: Vec<FlowEffect>,
}

impl Step {
    fn to(next: FlowState) -> Self {
        Self {
            next,
            effects: Vec::new(),
        }
    }

    fn with(mut self, effect: FlowEffect) -> Self {
        self.effects.push(effect);
        self
    }
}

/// Compute the transition for `event` out of `state`.
pub fn reduce(state: FlowState, event: FlowEvent) -> Result<Step, FlowError> {
    use FlowEvent as E;
    use FlowState as S;

    let step = match (state, event) {
        (S::Idle, E::Submit { valid: true }) => {
            Step::to(S::Submitting).with(FlowEffect::ScheduleTimer(TimerKind::SubmitDelay))
        }
        (S::Idle, E::Submit { valid: false }) => Step::to(S::Idle)
            .with(FlowEffect::ExposeErrors)
            .with(FlowEffect::Notify(Notification::destructive(
                "Check the form",
                "Some fields need your attention",
            ))),
        (S::Submitting, E::TimerElapsed(TimerKind::SubmitDelay)) => Step::to(S::Checking),
        (S::Checking, E::ConfirmReceived) => {
            Step::to(S::Success).with(FlowEffect::ScheduleTimer(TimerKind::SuccessDelay))
        }
        (S::Checking, E::ConfirmNotReceived) => {
            Step::to(S::Retry).with(FlowEffect::Notify(
                Notification::new("We'll try again", "The message will be sent again")
                    .with_action("Retry"),
            ))
        }
        (S::Success, E::TimerElapsed(TimerKind::SuccessDelay)) => {
            Step::to(S::Complete).with(FlowEffect::Notify(Notification::new(
                "You're all set",
                "You are registered and connected via WhatsApp",
            )))
        }
        (S::Retry, E::Retry) | (S::Complete, E::Restart) => {
            Step::to(S::Idle).with(FlowEffect::ClearSession)
        }
        (state, event) => return Err(FlowError::Rejected { state, event }),
    };

    Ok(step)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const ALL_STATES: [FlowState; 6] = [
        FlowState::Idle,
        FlowState::Submitting,
        FlowState::Checking,
        FlowState::Success,
        FlowState::Retry,
        FlowState::Complete,
    ];

    const ALL_EVENTS: [FlowEvent; 8] = [
        FlowEvent::Submit { valid: true },
        FlowEvent::Submit { valid: false },
        FlowEvent::TimerElapsed(TimerKind::SubmitDelay),
        FlowEvent::TimerElapsed(TimerKind::SuccessDelay),
        FlowEvent::ConfirmReceived,
        FlowEvent::ConfirmNotReceived,
        FlowEvent::Retry,
        FlowEvent::Restart,
    ];

    fn next(state: FlowState, event: FlowEvent) -> FlowState {
        reduce(state, event).unwrap().next
    }

    #[test]
    fn test_default_is_idle() {
        assert_eq!(FlowState::default(), FlowState::Idle);
    }

    #[test]
    fn test_valid_submit_schedules_delay() {
        let step = reduce(FlowState::Idle, FlowEvent::Submit { valid: true }).unwrap();
        assert_eq!(step.next, FlowState::Submitting);
        assert_eq!(
            step.effects,
            vec![FlowEffect::ScheduleTimer(TimerKind::SubmitDelay)]
        );
    }

    #[test]
    fn test_invalid_submit_stays_idle() {
        let step = reduce(FlowState::Idle, FlowEvent::Submit { valid: false }).unwrap();
        assert_eq!(step.next, FlowState::Idle);
        assert!(step.effects.contains(&FlowEffect::ExposeErrors));
        assert!(!step
            .effects
            .iter()
            .any(|e| matches!(e, FlowEffect::ScheduleTimer(_))));
    }

    #[test]
    fn test_happy_path() {
        let mut state = FlowState::Idle;
        state = next(state, FlowEvent::Submit { valid: true });
        state = next(state, FlowEvent::TimerElapsed(TimerKind::SubmitDelay));
        assert_eq!(state, FlowState::Checking);
        state = next(state, FlowEvent::ConfirmReceived);
        assert_eq!(state, FlowState::Success);
        state = next(state, FlowEvent::TimerElapsed(TimerKind::SuccessDelay));
        assert_eq!(state, FlowState::Complete);
        state = next(state, FlowEvent::Restart);
        assert_eq!(state, FlowState::Idle);
    }

    #[test]
    fn test_received_schedules_completion() {
        let step = reduce(FlowState::Checking, FlowEvent::ConfirmReceived).unwrap();
        assert_eq!(
            step.effects,
            vec![FlowEffect::ScheduleTimer(TimerKind::SuccessDelay)]
        );
    }

    #[test]
    fn test_retry_path_clears_session() {
        let step = reduce(FlowState::Checking, FlowEvent::ConfirmNotReceived).unwrap();
        assert_eq!(step.next, FlowState::Retry);

        let step = reduce(FlowState::Retry, FlowEvent::Retry).unwrap();
        assert_eq!(step.next, FlowState::Idle);
        assert_eq!(step.effects, vec![FlowEffect::ClearSession]);
    }

    #[test]
    fn test_restart_clears_session() {
        let step = reduce(FlowState::Complete, FlowEvent::Restart).unwrap();
        assert_eq!(step.next, FlowState::Idle);
        assert_eq!(step.effects, vec![FlowEffect::ClearSession]);
    }

    #[test]
    fn test_double_submit_is_rejected() {
        for state in ALL_STATES.into_iter().filter(|s| !s.is_idle()) {
            let event = FlowEvent::Submit { valid: true };
            assert_eq!(
                reduce(state, event),
                Err(FlowError::Rejected { state, event })
            );
        }
    }

    #[test]
    fn test_stale_timer_is_rejected() {
        assert!(reduce(
            FlowState::Checking,
            FlowEvent::TimerElapsed(TimerKind::SubmitDelay)
        )
        .is_err());
        assert!(reduce(
            FlowState::Submitting,
            FlowEvent::TimerElapsed(TimerKind::SuccessDelay)
        )
        .is_err());
    }

    #[test]
    fn test_transition_table_is_exhaustive() {
        let mut accepted = 0;
        for state in ALL_STATES {
            for event in ALL_EVENTS {
                if reduce(state, event).is_ok() {
                    accepted += 1;
                }
            }
        }
        // Eight rows in the transition table
        assert_eq!(accepted, 8);
    }

    #[test]
    fn test_submitting_only_reaches_checking() {
        for event in ALL_EVENTS {
            if let Ok(step) = reduce(FlowState::Submitting, event) {
                assert_eq!(step.next, FlowState::Checking);
            }
        }
    }

    #[test]
    fn test_rejection_message() {
        let err = reduce(FlowState::Submitting, FlowEvent::Restart).unwrap_err();
        assert_eq!(err.to_string(), "restart is not accepted while submitting");
    }
}
