mod rect;

pub use rect::Rect;

use crate::hit::Part;
use crate::model::Orientation;
use crate::render::ThumbStyle;

/// Screen rectangles of the four regions, as placed by the host.
///
/// The widget never computes these itself during dispatch; it only reads
/// them for hit testing and drag math. A hidden thumb has no rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PartLayout {
    pub decrement: Rect,
    pub increment: Rect,
    pub track: Rect,
    pub thumb: Option<Rect>,
}

impl PartLayout {
    /// Rectangle of a part, if it has a non-empty one.
    pub fn rect(&self, part: Part) -> Option<Rect> {
        let rect = match part {
            Part::Thumb => self.thumb?,
            Part::Track => self.track,
            Part::Decrement => self.decrement,
            Part::Increment => self.increment,
        };
        (!rect.is_empty()).then_some(rect)
    }
}

/// Lay out a scroll bar inside `root` for cell-based hosts.
///
/// Buttons take one cell at each end of the axis, the track fills the space
/// between them and the thumb is resolved from the projected style.
pub fn arrange(root: Rect, orientation: Orientation, thumb: &ThumbStyle) -> PartLayout {
    let length = root.length(orientation);
    let button = length.min(1);
    let track_len = length.saturating_sub(2 * button);

    let (decrement, track, increment) = match orientation {
        Orientation::Horizontal => (
            Rect::new(root.x, root.y, button, root.height),
            Rect::new(root.x.saturating_add(button), root.y, track_len, root.height),
            Rect::new(
                root.x.saturating_add(button + track_len),
                root.y,
                length - button - track_len,
                root.height,
            ),
        ),
        Orientation::Vertical => (
            Rect::new(root.x, root.y, root.width, button),
            Rect::new(root.x, root.y.saturating_add(button), root.width, track_len),
            Rect::new(
                root.x,
                root.y.saturating_add(button + track_len),
                root.width,
                length - button - track_len,
            ),
        ),
    };

    PartLayout {
        decrement,
        increment,
        track,
        thumb: thumb.resolve(track),
    }
}
