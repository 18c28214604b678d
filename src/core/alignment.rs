//! Per-axis alignment arithmetic.
//!
//! Every function here is a closed-form expression over one axis; nothing
//! touches layout or carries state between containers.

use serde::{Deserialize, Serialize};

/// Logical position the target should take inside each scroll container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AlignmentMode {
    Start,
    Center,
    End,
    /// Move the least distance needed; stay put when already visible.
    Nearest,
}

/// Whether containers are scrolled unconditionally or only while the target
/// is not fully visible.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ScrollPolicy {
    #[default]
    Always,
    IfNeeded,
}

/// One-dimensional extent along an axis.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AxisRange {
    pub start: f64,
    pub end: f64,
    pub size: f64,
}

impl AxisRange {
    #[must_use]
    pub fn new(start: f64, end: f64, size: f64) -> Self {
        Self { start, end, size }
    }

    /// Range of `size` beginning at `start`.
    #[must_use]
    pub fn from_start(start: f64, size: f64) -> Self {
        Self {
            start,
            end: start + size,
            size,
        }
    }
}

/// Signed scroll delta that brings the nearer out-of-view edge of `element`
/// flush with `container`.
///
/// Returns `0.0` when the element already spans the container, or sits fully
/// inside it. For elements larger than the container the edge that is
/// actually out of view wins, so the visible part keeps showing.
#[must_use]
pub fn align_nearest(
    container: AxisRange,
    border_before: f64,
    border_after: f64,
    element: AxisRange,
) -> f64 {
    let straddles = element.start < container.start && element.end > container.end;
    let inside = element.start > container.start && element.end < container.end;
    if straddles || inside {
        return 0.0;
    }

    if (element.start <= container.start && element.size <= container.size)
        || (element.end >= container.end && element.size >= container.size)
    {
        return element.start - container.start - border_before;
    }

    if (element.end > container.end && element.size < container.size)
        || (element.start < container.start && element.size > container.size)
    {
        return element.end - container.end + border_after;
    }

    0.0
}

/// Initial effective target coordinate for one axis.
///
/// `start` and `nearest` track the near edge, `end` the far edge and
/// `center` the midpoint.
#[must_use]
pub fn seed_position(mode: AlignmentMode, element: AxisRange) -> f64 {
    match mode {
        AlignmentMode::Start | AlignmentMode::Nearest => element.start,
        AlignmentMode::End => element.end,
        AlignmentMode::Center => element.start + element.size / 2.0,
    }
}

/// Viewport-relative geometry of a nested scroll container along one axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameAxis {
    pub range: AxisRange,
    pub border_before: f64,
    pub border_after: f64,
    pub scrollbar: f64,
}

/// Scroll delta for a nested container.
///
/// `position` is the effective target coordinate (as seeded by
/// [`seed_position`] and shifted by inner containers); `element_size` is the
/// target extent on this axis.
#[must_use]
pub fn frame_delta(mode: AlignmentMode, frame: FrameAxis, position: f64, element_size: f64) -> f64 {
    match mode {
        AlignmentMode::Start => position - frame.range.start - frame.border_before,
        AlignmentMode::End => {
            position - frame.range.end + frame.border_after + frame.scrollbar
        }
        AlignmentMode::Center => {
            position - (frame.range.start + frame.range.size / 2.0) + frame.scrollbar / 2.0
        }
        AlignmentMode::Nearest => align_nearest(
            frame.range,
            frame.border_before,
            frame.border_after + frame.scrollbar,
            AxisRange::from_start(position, element_size),
        ),
    }
}

/// Document scroll state along one axis for the top-level scrolling surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewportAxis {
    pub scroll: f64,
    pub size: f64,
    pub border_before: f64,
    pub border_after: f64,
}

/// Scroll delta for the top-level scrolling surface.
///
/// Positions are viewport-relative, so `nearest` lifts both ranges into
/// document coordinates before comparing them.
#[must_use]
pub fn viewport_delta(
    mode: AlignmentMode,
    viewport: ViewportAxis,
    position: f64,
    element_size: f64,
) -> f64 {
    match mode {
        AlignmentMode::Start => position,
        AlignmentMode::End => position - viewport.size,
        AlignmentMode::Center => position - viewport.size / 2.0,
        AlignmentMode::Nearest => align_nearest(
            AxisRange::from_start(viewport.scroll, viewport.size),
            viewport.border_before,
            viewport.border_after,
            AxisRange::from_start(viewport.scroll + position, element_size),
        ),
    }
}
