use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::warn;

/// Opaque handle for a node exposed by a layout provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct NodeId(u32);

impl NodeId {
    #[must_use]
    pub const fn new(raw: u32) -> Self {
        Self(raw)
    }

    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Replaces a non-finite geometry value with `0.0`.
///
/// Live layouts can hand out NaN/inf for detached or collapsed nodes; those
/// collapse to a neutral value instead of poisoning every later sum.
#[must_use]
pub(crate) fn finite_or_zero(value: f64, field: &'static str) -> f64 {
    if value.is_finite() {
        value
    } else {
        warn!(field, value, "non-finite geometry value replaced with 0");
        0.0
    }
}

/// Axis-aligned rectangle in viewport-relative CSS pixels.
///
/// Mirrors what `getBoundingClientRect` reports: `right`/`bottom` are stored
/// rather than derived so callers can pass through provider values untouched.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct LayoutBox {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
    pub width: f64,
    pub height: f64,
}

impl LayoutBox {
    /// Builds a box from its origin and size.
    #[must_use]
    pub fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            top,
            right: left + width,
            bottom: top + height,
            left,
            width,
            height,
        }
    }

    /// Returns `true` when `inner` lies within this box on all four edges.
    #[must_use]
    pub fn contains_box(self, inner: LayoutBox) -> bool {
        inner.top >= self.top
            && inner.bottom <= self.bottom
            && inner.left >= self.left
            && inner.right <= self.right
    }

    #[must_use]
    pub(crate) fn sanitized(self) -> Self {
        Self {
            top: finite_or_zero(self.top, "box.top"),
            right: finite_or_zero(self.right, "box.right"),
            bottom: finite_or_zero(self.bottom, "box.bottom"),
            left: finite_or_zero(self.left, "box.left"),
            width: finite_or_zero(self.width, "box.width"),
            height: finite_or_zero(self.height, "box.height"),
        }
    }
}

/// Used border widths of a scroll container.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct BorderWidths {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

impl BorderWidths {
    #[must_use]
    pub fn uniform(width: f64) -> Self {
        Self {
            top: width,
            right: width,
            bottom: width,
            left: width,
        }
    }

    #[must_use]
    pub(crate) fn sanitized(self) -> Self {
        Self {
            top: finite_or_zero(self.top, "border.top"),
            right: finite_or_zero(self.right, "border.right"),
            bottom: finite_or_zero(self.bottom, "border.bottom"),
            left: finite_or_zero(self.left, "border.left"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    #[must_use]
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// Visible viewport dimensions and absolute page scroll position.
///
/// Providers should report the pinch-zoom aware visual viewport size when the
/// platform exposes one, and the layout viewport size otherwise.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ViewportSnapshot {
    pub width: f64,
    pub height: f64,
    pub scroll_x: f64,
    pub scroll_y: f64,
}

impl ViewportSnapshot {
    #[must_use]
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            scroll_x: 0.0,
            scroll_y: 0.0,
        }
    }

    #[must_use]
    pub fn with_scroll(mut self, scroll_x: f64, scroll_y: f64) -> Self {
        self.scroll_x = scroll_x;
        self.scroll_y = scroll_y;
        self
    }

    /// Returns `true` when the box is fully inside `[0, width] x [0, height]`.
    #[must_use]
    pub fn contains_box(self, target: LayoutBox) -> bool {
        target.top >= 0.0
            && target.left >= 0.0
            && target.bottom <= self.height
            && target.right <= self.width
    }

    #[must_use]
    pub(crate) fn sanitized(self) -> Self {
        Self {
            width: finite_or_zero(self.width, "viewport.width"),
            height: finite_or_zero(self.height, "viewport.height"),
            scroll_x: finite_or_zero(self.scroll_x, "viewport.scroll_x"),
            scroll_y: finite_or_zero(self.scroll_y, "viewport.scroll_y"),
        }
    }
}
