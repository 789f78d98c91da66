mod frame;
mod metrics;
mod null_renderer;
mod primitives;

pub use frame::{FrameRecorder, RenderFrame};
pub use metrics::{aligned_extent, approximate_text_extent, approximate_text_size};
pub use null_renderer::NullRenderer;
pub use primitives::{
    Color, LinePrimitive, LineStrokeStyle, MarkerPrimitive, TextHAlign, TextPrimitive,
    TextRotation, TextVAlign, TickMarker,
};

use crate::core::BoundingBox;
use crate::error::AxisResult;

/// Contract implemented by any rendering backend.
///
/// Axes hand over primitives that already live in device space, so backends
/// stay free of tick, style and cache logic. Errors abort the current pass
/// and propagate to the caller unchanged.
pub trait Renderer {
    fn open_group(&mut self, _name: &str) {}

    fn close_group(&mut self, _name: &str) {}

    fn draw_markers(&mut self, markers: &MarkerPrimitive) -> AxisResult<()>;

    fn draw_line(&mut self, line: &LinePrimitive) -> AxisResult<()>;

    fn draw_text(&mut self, text: &TextPrimitive) -> AxisResult<()>;

    /// Device-space extent `text` would cover if drawn.
    fn text_extent(&mut self, text: &TextPrimitive) -> AxisResult<BoundingBox>;
}

#[cfg(feature = "cairo-backend")]
mod cairo_backend;
#[cfg(feature = "cairo-backend")]
pub use cairo_backend::{CairoRenderStats, CairoRenderer, pixels_identical};
