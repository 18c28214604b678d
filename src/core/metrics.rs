use serde::{Deserialize, Serialize};

use crate::core::types::finite_or_zero;
use crate::core::{BorderWidths, LayoutBox, Overflow, Size};

/// Geometry and overflow state of one potential scroll container.
///
/// This is a snapshot: providers fill it once per computation and the core
/// never writes back into it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ContainerMetrics {
    pub bounding_box: LayoutBox,
    #[serde(default)]
    pub borders: BorderWidths,
    #[serde(default)]
    pub scroll_top: f64,
    #[serde(default)]
    pub scroll_left: f64,
    pub scroll_width: f64,
    pub scroll_height: f64,
    pub client_width: f64,
    pub client_height: f64,
    pub offset_width: f64,
    pub offset_height: f64,
    #[serde(default)]
    pub overflow_x: Overflow,
    #[serde(default)]
    pub overflow_y: Overflow,
    /// Client size of the frame element embedding this node's document, if any.
    #[serde(default)]
    pub frame_client_size: Option<Size>,
}

impl ContainerMetrics {
    /// Creates metrics for a non-overflowing, borderless box.
    ///
    /// Offset, client and scroll extents all start at the box size.
    #[must_use]
    pub fn new(bounding_box: LayoutBox) -> Self {
        Self {
            bounding_box,
            borders: BorderWidths::default(),
            scroll_top: 0.0,
            scroll_left: 0.0,
            scroll_width: bounding_box.width,
            scroll_height: bounding_box.height,
            client_width: bounding_box.width,
            client_height: bounding_box.height,
            offset_width: bounding_box.width,
            offset_height: bounding_box.height,
            overflow_x: Overflow::Visible,
            overflow_y: Overflow::Visible,
            frame_client_size: None,
        }
    }

    #[must_use]
    pub fn with_borders(mut self, borders: BorderWidths) -> Self {
        self.borders = borders;
        self
    }

    #[must_use]
    pub fn with_scroll_offset(mut self, scroll_left: f64, scroll_top: f64) -> Self {
        self.scroll_left = scroll_left;
        self.scroll_top = scroll_top;
        self
    }

    #[must_use]
    pub fn with_scroll_extent(mut self, scroll_width: f64, scroll_height: f64) -> Self {
        self.scroll_width = scroll_width;
        self.scroll_height = scroll_height;
        self
    }

    #[must_use]
    pub fn with_client_size(mut self, client_width: f64, client_height: f64) -> Self {
        self.client_width = client_width;
        self.client_height = client_height;
        self
    }

    #[must_use]
    pub fn with_offset_size(mut self, offset_width: f64, offset_height: f64) -> Self {
        self.offset_width = offset_width;
        self.offset_height = offset_height;
        self
    }

    #[must_use]
    pub fn with_overflow(mut self, overflow_x: Overflow, overflow_y: Overflow) -> Self {
        self.overflow_x = overflow_x;
        self.overflow_y = overflow_y;
        self
    }

    #[must_use]
    pub fn with_frame_client_size(mut self, size: Size) -> Self {
        self.frame_client_size = Some(size);
        self
    }

    /// Vertical scrollbar thickness (offset width minus client width and borders).
    #[must_use]
    pub fn scrollbar_width(&self) -> f64 {
        (self.offset_width - self.client_width - self.borders.left - self.borders.right).max(0.0)
    }

    /// Horizontal scrollbar thickness (offset height minus client height and borders).
    #[must_use]
    pub fn scrollbar_height(&self) -> f64 {
        (self.offset_height - self.client_height - self.borders.top - self.borders.bottom).max(0.0)
    }

    #[must_use]
    pub fn overflows_x(&self) -> bool {
        self.client_width < self.scroll_width
    }

    #[must_use]
    pub fn overflows_y(&self) -> bool {
        self.client_height < self.scroll_height
    }

    /// Overflowing content clipped by the embedding frame, even with `overflow: visible`.
    #[must_use]
    pub fn is_hidden_by_frame(&self) -> bool {
        match self.frame_client_size {
            Some(frame) => {
                frame.height < self.scroll_height || frame.width < self.scroll_width
            }
            None => false,
        }
    }

    /// Whether this node is a scroll container in its own right.
    #[must_use]
    pub fn is_scrollable(&self, skip_overflow_hidden: bool) -> bool {
        let overflows_x = self.overflows_x();
        let overflows_y = self.overflows_y();
        if !overflows_x && !overflows_y {
            return false;
        }

        (overflows_y && self.overflow_y.can_overflow(skip_overflow_hidden))
            || (overflows_x && self.overflow_x.can_overflow(skip_overflow_hidden))
            || self.is_hidden_by_frame()
    }

    /// Ratio between rendered width and layout width; `0.0` for zero-width boxes.
    #[must_use]
    pub fn scale_x(&self) -> f64 {
        if self.offset_width == 0.0 {
            0.0
        } else {
            self.bounding_box.width / self.offset_width
        }
    }

    /// Ratio between rendered height and layout height; `0.0` for zero-height boxes.
    #[must_use]
    pub fn scale_y(&self) -> f64 {
        if self.offset_height == 0.0 {
            0.0
        } else {
            self.bounding_box.height / self.offset_height
        }
    }

    #[must_use]
    pub(crate) fn sanitized(self) -> Self {
        Self {
            bounding_box: self.bounding_box.sanitized(),
            borders: self.borders.sanitized(),
            scroll_top: finite_or_zero(self.scroll_top, "scroll_top"),
            scroll_left: finite_or_zero(self.scroll_left, "scroll_left"),
            scroll_width: finite_or_zero(self.scroll_width, "scroll_width"),
            scroll_height: finite_or_zero(self.scroll_height, "scroll_height"),
            client_width: finite_or_zero(self.client_width, "client_width"),
            client_height: finite_or_zero(self.client_height, "client_height"),
            offset_width: finite_or_zero(self.offset_width, "offset_width"),
            offset_height: finite_or_zero(self.offset_height, "offset_height"),
            overflow_x: self.overflow_x,
            overflow_y: self.overflow_y,
            frame_client_size: self.frame_client_size.map(|size| {
                Size::new(
                    finite_or_zero(size.width, "frame.width"),
                    finite_or_zero(size.height, "frame.height"),
                )
            }),
        }
    }
}
