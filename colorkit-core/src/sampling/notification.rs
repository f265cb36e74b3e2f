//! Copy-confirmation notification timing.
//!
//! The notification is shown for [`SHOW_DURATION`], then plays a dismissal
//! phase of [`HIDE_DURATION`] before disappearing. Another copy at any point
//! restarts the show phase and drops the pending transitions. Time is passed
//! in by the caller so the state machine stays synchronous.

use std::time::{Duration, Instant};

pub const SHOW_DURATION: Duration = Duration::from_millis(5000);
pub const HIDE_DURATION: Duration = Duration::from_millis(300);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NotificationState {
    #[default]
    Hidden,
    Showing,
    Hiding,
}

#[derive(Debug, Clone, Default)]
pub struct CopyNotification {
    state: NotificationState,
    deadline: Option<Instant>,
}

impl CopyNotification {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> NotificationState {
        self.state
    }

    pub fn is_visible(&self) -> bool {
        self.state != NotificationState::Hidden
    }

    /// When the current phase ends, if one is pending.
    pub fn deadline(&self) -> Option<Instant> {
        self.deadline
    }

    /// (Re)starts the show phase.
    pub fn show(&mut self, now: Instant) {
        self.state = NotificationState::Showing;
        self.deadline = Some(now + SHOW_DURATION);
    }

    /// Advances through every phase whose deadline has passed.
    pub fn tick(&mut self, now: Instant) -> NotificationState {
        while let Some(deadline) = self.deadline {
            if now < deadline {
                break;
            }
            match self.state {
                NotificationState::Showing => {
                    self.state = NotificationState::Hiding;
                    self.deadline = Some(deadline + HIDE_DURATION);
                }
                NotificationState::Hiding | NotificationState::Hidden => {
                    self.state = NotificationState::Hidden;
                    self.deadline = None;
                }
            }
        }
        self.state
    }
}
