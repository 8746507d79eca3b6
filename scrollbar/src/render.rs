//! Projection of scroll bar state onto visual output.
//!
//! [`project`] turns the value model into a [`Frame`]: percentage-based
//! inline style for the thumb plus the class/attribute state the host
//! styles on. [`paint`] turns a frame and a concrete layout into cells.

use crate::hit::Part;
use crate::layout::{PartLayout, Rect};
use crate::model::{Orientation, ValueModel};

/// Modifier class on hidden thumbs.
pub const HIDDEN_CLASS: &str = "mod-hidden";
/// Modifier class on pressed thumb/decrement/increment.
pub const ACTIVE_CLASS: &str = "mod-active";

/// Inline style of the thumb, in percent.
///
/// Only the fields of the current axis are set; the other axis is `None`
/// so nothing stale survives an orientation change.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ThumbStyle {
    pub hidden: bool,
    pub left: Option<f64>,
    pub width: Option<f64>,
    pub translate_x: Option<f64>,
    pub top: Option<f64>,
    pub height: Option<f64>,
    pub translate_y: Option<f64>,
}

impl ThumbStyle {
    pub fn hidden() -> Self {
        Self {
            hidden: true,
            ..Default::default()
        }
    }

    /// Resolve the percentages against a track rectangle.
    ///
    /// `offset` is relative to the full track and `translate` to the thumb's
    /// own length, so the leading edge lands at `offset%` of the travel
    /// (`track - thumb`). The thumb is at least one cell long.
    pub fn resolve(&self, track: Rect) -> Option<Rect> {
        if self.hidden || track.is_empty() {
            return None;
        }

        if let (Some(left), Some(width)) = (self.left, self.width) {
            let (start, len) = place(track.width, left, width, self.translate_x.unwrap_or(0.0));
            return Some(Rect::new(track.x.saturating_add(start), track.y, len, track.height));
        }
        if let (Some(top), Some(height)) = (self.top, self.height) {
            let (start, len) = place(track.height, top, height, self.translate_y.unwrap_or(0.0));
            return Some(Rect::new(track.x, track.y.saturating_add(start), track.width, len));
        }
        None
    }
}

fn place(track_len: u16, offset_pct: f64, size_pct: f64, translate_pct: f64) -> (u16, u16) {
    let track = f64::from(track_len);
    let len = (size_pct / 100.0 * track).round().clamp(1.0, track);
    let start = offset_pct / 100.0 * track + translate_pct / 100.0 * len;
    let start = start.round().clamp(0.0, track - len);
    (start as u16, len as u16)
}

/// Everything the host needs to draw one scroll bar.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Frame {
    pub orientation: Orientation,
    pub thumb: ThumbStyle,
    /// Part carrying the active modifier. Never `Track`.
    pub active: Option<Part>,
}

impl Frame {
    /// Value of the root's `data-orientation` attribute.
    pub fn data_orientation(&self) -> &'static str {
        self.orientation.as_str()
    }

    pub fn is_active(&self, part: Part) -> bool {
        self.active == Some(part)
    }

    /// Modifier classes currently set on a part.
    pub fn classes(&self, part: Part) -> Vec<&'static str> {
        let mut classes = Vec::new();
        if part == Part::Thumb && self.thumb.hidden {
            classes.push(HIDDEN_CLASS);
        }
        if self.is_active(part) {
            classes.push(ACTIVE_CLASS);
        }
        classes
    }
}

/// Compute the thumb style for the current model and orientation.
pub fn project(model: &ValueModel, orientation: Orientation) -> ThumbStyle {
    let Some((value_pct, size_pct)) = model.thumb_percentages() else {
        return ThumbStyle::hidden();
    };

    match orientation {
        Orientation::Horizontal => ThumbStyle {
            hidden: false,
            left: Some(value_pct),
            width: Some(size_pct),
            translate_x: Some(-value_pct),
            ..Default::default()
        },
        Orientation::Vertical => ThumbStyle {
            hidden: false,
            top: Some(value_pct),
            height: Some(size_pct),
            translate_y: Some(-value_pct),
            ..Default::default()
        },
    }
}

/// A single painted cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Glyph {
    pub x: u16,
    pub y: u16,
    pub symbol: char,
    pub part: Part,
    pub active: bool,
}

/// Paint a frame into glyphs, track first and thumb on top.
pub fn paint(frame: &Frame, layout: &PartLayout) -> Vec<Glyph> {
    let (dec, inc, track) = match frame.orientation {
        Orientation::Horizontal => ('◀', '▶', '─'),
        Orientation::Vertical => ('▲', '▼', '│'),
    };

    let mut glyphs = Vec::new();
    fill(&mut glyphs, frame, layout.rect(Part::Decrement), Part::Decrement, dec);
    fill(&mut glyphs, frame, layout.rect(Part::Track), Part::Track, track);
    fill(&mut glyphs, frame, layout.rect(Part::Increment), Part::Increment, inc);
    if !frame.thumb.hidden {
        fill(&mut glyphs, frame, layout.rect(Part::Thumb), Part::Thumb, '█');
    }
    glyphs
}

fn fill(glyphs: &mut Vec<Glyph>, frame: &Frame, rect: Option<Rect>, part: Part, symbol: char) {
    let Some(rect) = rect else {
        return;
    };
    let active = frame.is_active(part);
    for y in rect.y..rect.bottom() {
        for x in rect.x..rect.right() {
            glyphs.push(Glyph {
                x,
                y,
                symbol,
                part,
                active,
            });
        }
    }
}
