use crate::core::BoundingBox;
use crate::error::{AxisError, AxisResult};
use crate::render::{
    LinePrimitive, MarkerPrimitive, Renderer, TextPrimitive, approximate_text_extent,
};

/// Backend-agnostic record of one draw pass.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RenderFrame {
    pub groups: Vec<String>,
    pub markers: Vec<MarkerPrimitive>,
    pub lines: Vec<LinePrimitive>,
    pub texts: Vec<TextPrimitive>,
}

impl RenderFrame {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn validate(&self) -> AxisResult<()> {
        for markers in &self.markers {
            markers.validate()?;
        }
        for line in &self.lines {
            line.validate()?;
        }
        for text in &self.texts {
            text.validate()?;
        }
        Ok(())
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.markers.is_empty() && self.lines.is_empty() && self.texts.is_empty()
    }

    /// Text of every recorded label, in draw order.
    #[must_use]
    pub fn text_contents(&self) -> Vec<&str> {
        self.texts.iter().map(|text| text.text.as_str()).collect()
    }

    pub fn clear(&mut self) {
        self.groups.clear();
        self.markers.clear();
        self.lines.clear();
        self.texts.clear();
    }
}

/// Renderer that records every primitive into a `RenderFrame`.
///
/// Primitives are validated on arrival and text extents come from the
/// approximate metric, so tests see the same geometry a layout pass would.
#[derive(Debug, Default)]
pub struct FrameRecorder {
    frame: RenderFrame,
    open_groups: Vec<String>,
}

impl FrameRecorder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn frame(&self) -> &RenderFrame {
        &self.frame
    }

    /// Returns the recorded frame and starts a new one.
    pub fn take_frame(&mut self) -> RenderFrame {
        std::mem::take(&mut self.frame)
    }

    /// Groups opened but not yet closed.
    #[must_use]
    pub fn open_groups(&self) -> &[String] {
        &self.open_groups
    }
}

impl Renderer for FrameRecorder {
    fn open_group(&mut self, name: &str) {
        self.open_groups.push(name.to_owned());
        self.frame.groups.push(name.to_owned());
    }

    fn close_group(&mut self, name: &str) {
        if let Some(position) = self.open_groups.iter().rposition(|open| open == name) {
            self.open_groups.remove(position);
        }
    }

    fn draw_markers(&mut self, markers: &MarkerPrimitive) -> AxisResult<()> {
        markers.validate()?;
        self.frame.markers.push(markers.clone());
        Ok(())
    }

    fn draw_line(&mut self, line: &LinePrimitive) -> AxisResult<()> {
        line.validate()?;
        self.frame.lines.push(*line);
        Ok(())
    }

    fn draw_text(&mut self, text: &TextPrimitive) -> AxisResult<()> {
        text.validate()?;
        self.frame.texts.push(text.clone());
        Ok(())
    }

    fn text_extent(&mut self, text: &TextPrimitive) -> AxisResult<BoundingBox> {
        if !text.x.is_finite() || !text.y.is_finite() {
            return Err(AxisError::InvalidData(
                "text coordinates must be finite".to_owned(),
            ));
        }
        Ok(approximate_text_extent(text))
    }
}
