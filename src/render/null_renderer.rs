use crate::core::BoundingBox;
use crate::error::AxisResult;
use crate::render::{
    LinePrimitive, MarkerPrimitive, Renderer, TextPrimitive, approximate_text_extent,
};

/// Counting renderer used by benchmarks and headless layout.
///
/// It keeps no primitives, so a redraw through it measures the axis work
/// alone. Text extents come from the approximate metric.
#[derive(Debug, Default)]
pub struct NullRenderer {
    pub marker_batches: usize,
    pub marker_count: usize,
    pub line_count: usize,
    pub text_count: usize,
    pub extent_queries: usize,
}

impl Renderer for NullRenderer {
    fn draw_markers(&mut self, markers: &MarkerPrimitive) -> AxisResult<()> {
        self.marker_batches += 1;
        self.marker_count += markers.points.len();
        Ok(())
    }

    fn draw_line(&mut self, _line: &LinePrimitive) -> AxisResult<()> {
        self.line_count += 1;
        Ok(())
    }

    fn draw_text(&mut self, _text: &TextPrimitive) -> AxisResult<()> {
        self.text_count += 1;
        Ok(())
    }

    fn text_extent(&mut self, text: &TextPrimitive) -> AxisResult<BoundingBox> {
        self.extent_queries += 1;
        Ok(approximate_text_extent(text))
    }
}
