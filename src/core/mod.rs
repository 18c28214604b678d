pub mod alignment;
pub mod metrics;
pub mod overflow;
pub mod types;

pub use alignment::{
    AlignmentMode, AxisRange, FrameAxis, ScrollPolicy, ViewportAxis, align_nearest, frame_delta,
    seed_position, viewport_delta,
};
pub use metrics::ContainerMetrics;
pub use overflow::Overflow;
pub use types::{BorderWidths, LayoutBox, NodeId, Size, ViewportSnapshot};
