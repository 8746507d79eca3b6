use crate::layout::{PartLayout, Rect};

/// One of the four interactive regions of a scroll bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Part {
    Thumb,
    Track,
    Decrement,
    Increment,
}

/// Find the part under the given coordinates.
///
/// The thumb sits inside the track, so it is tested first; then track,
/// decrement and increment. Returns None for points outside all four
/// (padding or background of the root).
pub fn classify(layout: &PartLayout, x: u16, y: u16) -> Option<Part> {
    const ORDER: [Part; 4] = [Part::Thumb, Part::Track, Part::Decrement, Part::Increment];

    ORDER
        .into_iter()
        .find(|part| hits(layout.rect(*part), x, y))
}

/// Check whether the point lies inside a single part.
pub fn hit_part(layout: &PartLayout, part: Part, x: u16, y: u16) -> bool {
    hits(layout.rect(part), x, y)
}

fn hits(rect: Option<Rect>, x: u16, y: u16) -> bool {
    rect.is_some_and(|rect| rect.contains(x, y))
}
