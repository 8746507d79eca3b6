//! Press session and the handles it owns.

use crate::effect::Effect;
use crate::hit::Part;

/// Handle for a scheduled repeat.
///
/// The host echoes it back through `Event::Repeat`. A fire carrying an id
/// that no longer matches the pending timer is stale and dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimerId(pub(crate) u64);

impl std::fmt::Display for TimerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "repeat#{}", self.0)
    }
}

/// Identifies one cursor override between acquire and restore.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LeaseId(pub(crate) u64);

/// An acquired cursor override.
///
/// Not `Clone`: [`CursorLease::release`] consumes it, so each lease is
/// restored exactly once.
#[derive(Debug)]
pub struct CursorLease {
    id: LeaseId,
}

impl CursorLease {
    /// Acquire a lease, returning it with the effect that applies it.
    pub(crate) fn acquire(id: LeaseId, cursor: CursorIcon) -> (Self, Effect) {
        (Self { id }, Effect::OverrideCursor { lease: id, cursor })
    }

    /// Give the override back.
    pub(crate) fn release(self) -> Effect {
        Effect::RestoreCursor { lease: self.id }
    }
}

/// Cursor shape requested while a press is captured.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum CursorIcon {
    #[default]
    Default,
}

/// Active press. Exists only between a qualifying press and its release.
#[derive(Debug)]
pub struct PressSession {
    /// Region the press started on
    pub part: Part,
    /// Pointer offset from the thumb's leading edge; thumb presses only
    pub delta: Option<u16>,
    /// Cursor override held for the lifetime of the session
    pub cursor: CursorLease,
    pub last_x: u16,
    pub last_y: u16,
}

impl PressSession {
    pub fn is_dragging(&self) -> bool {
        self.part == Part::Thumb
    }
}
