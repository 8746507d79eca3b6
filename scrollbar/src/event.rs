use crate::session::TimerId;

/// Input delivered to [`ScrollBar::dispatch`](crate::ScrollBar::dispatch).
///
/// Pointer coordinates are absolute cells, the same space the host uses
/// for [`PartLayout`](crate::PartLayout).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    /// Mouse button pressed
    PointerDown { x: u16, y: u16, button: MouseButton },
    /// Pointer moved (with or without a button held)
    PointerMove { x: u16, y: u16 },
    /// Mouse button released
    PointerUp { x: u16, y: u16, button: MouseButton },
    /// Key press
    Key { key: Key, modifiers: Modifiers },
    /// Context menu request (right click)
    ContextMenu { x: u16, y: u16 },
    /// A repeat timer scheduled through `Effect::ScheduleRepeat` fired
    Repeat(TimerId),
}

impl Event {
    /// Translate a raw crossterm event.
    ///
    /// Returns `None` for events the scroll bar never looks at (resize,
    /// focus, paste, wheel, key releases).
    pub fn from_crossterm(event: &crossterm::event::Event) -> Option<Self> {
        use crossterm::event::{Event as CtEvent, KeyEventKind, MouseEventKind};

        match event {
            CtEvent::Mouse(mouse) => {
                let (x, y) = (mouse.column, mouse.row);
                match mouse.kind {
                    MouseEventKind::Down(button) => Some(Event::PointerDown {
                        x,
                        y,
                        button: button.into(),
                    }),
                    MouseEventKind::Up(button) => Some(Event::PointerUp {
                        x,
                        y,
                        button: button.into(),
                    }),
                    MouseEventKind::Drag(_) | MouseEventKind::Moved => {
                        Some(Event::PointerMove { x, y })
                    }
                    _ => None,
                }
            }
            CtEvent::Key(key) if key.kind != KeyEventKind::Release => Some(Event::Key {
                key: key.code.into(),
                modifiers: key.modifiers.into(),
            }),
            _ => None,
        }
    }
}

/// Simplified key representation
///
/// The scroll bar only tells `Escape` apart; `Char` is kept so hosts can
/// route their own shortcuts before dispatching.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Char(char),
    Escape,
    Other,
}

/// Key modifiers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Modifiers {
    pub shift: bool,
    pub ctrl: bool,
    pub alt: bool,
}

impl Modifiers {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Mouse button
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    Left,
    Right,
    Middle,
}

impl MouseButton {
    /// Only the primary button drives the scroll bar.
    pub fn is_primary(&self) -> bool {
        matches!(self, MouseButton::Left)
    }
}

// Conversion from crossterm types
impl From<crossterm::event::KeyCode> for Key {
    fn from(code: crossterm::event::KeyCode) -> Self {
        use crossterm::event::KeyCode;
        match code {
            KeyCode::Char(c) => Key::Char(c),
            KeyCode::Esc => Key::Escape,
            _ => Key::Other,
        }
    }
}

impl From<crossterm::event::KeyModifiers> for Modifiers {
    fn from(mods: crossterm::event::KeyModifiers) -> Self {
        use crossterm::event::KeyModifiers;
        Self {
            shift: mods.contains(KeyModifiers::SHIFT),
            ctrl: mods.contains(KeyModifiers::CONTROL),
            alt: mods.contains(KeyModifiers::ALT),
        }
    }
}

impl From<crossterm::event::MouseButton> for MouseButton {
    fn from(btn: crossterm::event::MouseButton) -> Self {
        use crossterm::event::MouseButton as CtBtn;
        match btn {
            CtBtn::Left => MouseButton::Left,
            CtBtn::Right => MouseButton::Right,
            CtBtn::Middle => MouseButton::Middle,
        }
    }
}
