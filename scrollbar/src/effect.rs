//! Outputs of the state machine.
//!
//! The widget never talks to the host directly. Every side effect it needs
//! (cursor, pointer capture, timers, redraws, notifications) comes back as
//! an [`Effect`] for the host to carry out.

use std::time::Duration;

use crate::session::{CursorIcon, LeaseId, TimerId};

/// Which way a step or page request goes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Decrement,
    Increment,
}

impl Direction {
    /// Sign to apply to a step or page amount.
    pub fn signum(&self) -> f64 {
        match self {
            Direction::Decrement => -1.0,
            Direction::Increment => 1.0,
        }
    }
}

/// Notification for consumers of the scroll bar.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Intent {
    /// The thumb was dragged to a new value.
    ThumbMoved(f64),
    /// A button asked for a single step.
    StepRequested(Direction),
    /// The track asked for a page.
    PageRequested(Direction),
}

/// Side effect the host must perform.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    /// State changed; render before the next paint. Sent once per dirty cycle.
    RequestRedraw,
    /// Force the cursor shape until the lease is restored.
    OverrideCursor { lease: LeaseId, cursor: CursorIcon },
    /// Drop the cursor override held by `lease`.
    RestoreCursor { lease: LeaseId },
    /// Route move/up/key/context-menu events here regardless of position.
    CapturePointer,
    /// Stop routing events captured by `CapturePointer`.
    ReleasePointer,
    /// Deliver `Event::Repeat(timer)` after `delay`.
    ScheduleRepeat { timer: TimerId, delay: Duration },
    /// Forget a pending repeat.
    CancelRepeat { timer: TimerId },
    /// Publish an intent to consumers.
    Notify(Intent),
}

/// Result of handling an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventResult {
    /// Event was ignored, let other handlers see it.
    Ignored,
    /// Event was consumed: prevent default, stop propagation.
    Consumed,
    /// Event started a press session.
    StartDrag,
}

impl EventResult {
    /// Check if the event was handled (consumed or started drag).
    pub fn is_handled(&self) -> bool {
        !matches!(self, EventResult::Ignored)
    }
}

/// What a single dispatch produced.
#[derive(Debug, Clone, PartialEq)]
pub struct Response {
    pub result: EventResult,
    pub effects: Vec<Effect>,
}

impl Response {
    pub fn ignored() -> Self {
        Self {
            result: EventResult::Ignored,
            effects: Vec::new(),
        }
    }

    pub fn new(result: EventResult, effects: Vec<Effect>) -> Self {
        Self { result, effects }
    }

    /// Intents among the effects, in emission order.
    pub fn intents(&self) -> impl Iterator<Item = Intent> + '_ {
        self.effects.iter().filter_map(|effect| match effect {
            Effect::Notify(intent) => Some(*intent),
            _ => None,
        })
    }
}
