//! Timed transitions.
//!
//! Timers are plain deadlines owned by the session. Nothing runs in the
//! background: the event loop asks for `next_deadline`, sleeps at most that
//! long, then drains whatever is due.

use super::machine::TimerKind;
#[cfg(test)]
use std::cell::Cell;
#[cfg(test)]
use std::rc::Rc;
#[cfg(test)]
use std::time::Duration;
use std::time::Instant;

/// Source of the current time
pub trait Clock {
    fn now(&self) -> Instant;
}

/// Wall clock used by the running application
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Instant::now()
    }
}

/// Clock that only moves when told to. Clones share the same time.
#[cfg(test)]
#[derive(Debug, Clone)]
pub struct ManualClock {
    now: Rc<Cell<Instant>>,
}

#[cfg(test)]
impl ManualClock {
    pub fn new() -> Self {
        Self {
            now: Rc::new(Cell::new(Instant::now())),
        }
    }

    pub fn advance(&self, by: Duration) {
        self.now.set(self.now.get() + by);
    }
}

#[cfg(test)]
impl Default for ManualClock {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
impl Clock for ManualClock {
    fn now(&self) -> Instant {
        self.now.get()
    }
}

/// Handle returned by `Scheduler::schedule`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TaskId(u64);

#[derive(Debug, Clone)]
struct ScheduledTask {
    id: TaskId,
    kind: TimerKind,
    deadline: Instant,
}

/// Pending timers ordered by deadline
#[derive(Debug, Default)]
pub struct Scheduler {
    tasks: Vec<ScheduledTask>,
    next_id: u64,
}

impl Scheduler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn schedule(&mut self, kind: TimerKind, deadline: Instant) -> TaskId {
        let id = TaskId(self.next_id);
        self.next_id += 1;

        // Keep sorted; equal deadlines fire in scheduling order
        let pos = self.tasks.partition_point(|t| t.deadline <= deadline);
        self.tasks.insert(pos, ScheduledTask { id, kind, deadline });
        id
    }

    /// Returns false if the task already fired or was cancelled
    pub fn cancel(&mut self, id: TaskId) -> bool {
        let before = self.tasks.len();
        self.tasks.retain(|t| t.id != id);
        self.tasks.len() != before
    }

    pub fn cancel_all(&mut self) {
        self.tasks.clear();
    }

    /// Remove and return every timer whose deadline is at or before `now`
    pub fn take_due(&mut self, now: Instant) -> Vec<TimerKind> {
        let due = self.tasks.partition_point(|t| t.deadline <= now);
        self.tasks.drain(..due).map(|t| t.kind).collect()
    }

    pub fn next_deadline(&self) -> Option<Instant> {
        self.tasks.first().map(|t| t.deadline)
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }
}
