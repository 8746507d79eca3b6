//! Numeric state of a scroll bar.
//!
//! The model owns the value, the maximum and the page size and keeps them
//! inside their invariants on every write:
//!
//! - `0 <= value <= max_value`
//! - `0 <= max_value`
//! - `0 <= page_size`
//!
//! Out-of-range writes are clamped, never rejected. Non-finite writes are
//! dropped. Each setter reports whether anything actually changed so the
//! caller can skip redraws and notifications for no-op writes.

use log::warn;
use serde::Deserialize;

/// Axis the scroll bar runs along.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    Horizontal,
    #[default]
    Vertical,
}

impl Orientation {
    /// Value published as the root's `data-orientation` attribute.
    pub fn as_str(&self) -> &'static str {
        match self {
            Orientation::Horizontal => "horizontal",
            Orientation::Vertical => "vertical",
        }
    }

    /// Pick the coordinate that runs along this axis.
    pub fn along(&self, x: u16, y: u16) -> u16 {
        match self {
            Orientation::Horizontal => x,
            Orientation::Vertical => y,
        }
    }
}

impl std::fmt::Display for Orientation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Clamped value / maximum / page size triple.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ValueModel {
    value: f64,
    max_value: f64,
    page_size: f64,
}

impl Default for ValueModel {
    fn default() -> Self {
        Self {
            value: 0.0,
            max_value: 100.0,
            page_size: 10.0,
        }
    }
}

impl ValueModel {
    /// Build a model from raw numbers, clamping each into range.
    ///
    /// Non-finite inputs fall back to the defaults.
    pub fn new(value: f64, max_value: f64, page_size: f64) -> Self {
        let defaults = Self::default();
        let max_value = if max_value.is_finite() {
            max_value.max(0.0)
        } else {
            defaults.max_value
        };
        let page_size = if page_size.is_finite() {
            page_size.max(0.0)
        } else {
            defaults.page_size
        };
        let value = if value.is_finite() {
            value.clamp(0.0, max_value)
        } else {
            0.0
        };
        Self {
            value,
            max_value,
            page_size,
        }
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn max_value(&self) -> f64 {
        self.max_value
    }

    pub fn page_size(&self) -> f64 {
        self.page_size
    }

    /// A range exists only while the page is smaller than the maximum.
    pub fn is_scrollable(&self) -> bool {
        self.page_size < self.max_value
    }

    /// Set the value, clamped to `[0, max_value]`.
    ///
    /// Returns `true` if the stored value changed.
    pub fn set_value(&mut self, value: f64) -> bool {
        if !value.is_finite() {
            warn!("Ignoring non-finite scroll value {}", value);
            return false;
        }
        let value = value.clamp(0.0, self.max_value);
        if value == self.value {
            return false;
        }
        self.value = value;
        true
    }

    /// Set the maximum, clamped to `[0, inf)`. Pulls the value down with it.
    ///
    /// Returns `true` if the stored maximum changed.
    pub fn set_max_value(&mut self, max_value: f64) -> bool {
        if !max_value.is_finite() {
            warn!("Ignoring non-finite scroll maximum {}", max_value);
            return false;
        }
        let max_value = max_value.max(0.0);
        if max_value == self.max_value {
            return false;
        }
        self.max_value = max_value;
        self.value = self.value.min(max_value);
        true
    }

    /// Set the page size, clamped to `[0, inf)`.
    ///
    /// Returns `true` if the stored page size changed.
    pub fn set_page_size(&mut self, page_size: f64) -> bool {
        if !page_size.is_finite() {
            warn!("Ignoring non-finite page size {}", page_size);
            return false;
        }
        let page_size = page_size.max(0.0);
        if page_size == self.page_size {
            return false;
        }
        self.page_size = page_size;
        true
    }

    /// Thumb position and size as percentages of the track.
    ///
    /// `None` when there is no scrollable range.
    pub fn thumb_percentages(&self) -> Option<(f64, f64)> {
        if !self.is_scrollable() {
            return None;
        }
        let value_pct = self.value * 100.0 / self.max_value;
        let size_pct = self.page_size * 100.0 / self.max_value;
        Some((value_pct, size_pct))
    }

    /// Map a thumb offset within its travel onto `[0, max_value]`.
    ///
    /// A zero travel maps everything to 0. The result is clamped.
    pub fn value_for_offset(&self, offset: i32, travel: i32) -> f64 {
        if travel <= 0 {
            return 0.0;
        }
        let raw = f64::from(offset) * self.max_value / f64::from(travel);
        raw.clamp(0.0, self.max_value)
    }
}
