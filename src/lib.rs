//! scroll-into-view-rs: pure scroll-into-view geometry.
//!
//! Given a target element and the layout of its ancestors, this crate works
//! out how far each enclosing scroll container (and finally the viewport)
//! has to scroll so the target ends up in view, following the semantics of
//! the browser's native `scrollIntoView`. It never scrolls anything: callers
//! receive an ordered list of [`ScrollAction`]s to apply themselves.
//!
//! The split mirrors the computation:
//! - [`core`]: geometry value types and per-axis alignment arithmetic.
//! - [`layout`]: the [`LayoutProvider`] seam plus an in-memory snapshot.
//! - [`api`]: chain collection, offset propagation and the public entry point.

pub mod api;
pub mod core;
pub mod error;
pub mod layout;
pub mod telemetry;

pub use api::{
    Boundary, ScrollAction, ScrollIntoViewOptions, ScrollPlan, compute_scroll_into_view,
};
pub use error::{ScrollError, ScrollResult};
pub use layout::{LayoutProvider, LayoutSnapshot};
