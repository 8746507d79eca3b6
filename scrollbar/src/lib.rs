pub mod config;
pub mod effect;
pub mod event;
pub mod hit;
pub mod layout;
pub mod model;
pub mod render;
pub mod session;
pub mod widget;

pub use config::{ConfigError, RepeatConfig, ScrollBarOptions};
pub use effect::{Direction, Effect, EventResult, Intent, Response};
pub use event::{Event, Key, Modifiers, MouseButton};
pub use hit::{classify, Part};
pub use layout::{arrange, PartLayout, Rect};
pub use model::{Orientation, ValueModel};
pub use render::{paint, project, Frame, Glyph, ThumbStyle};
pub use session::{CursorIcon, LeaseId, TimerId};
pub use widget::ScrollBar;
