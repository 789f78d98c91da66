use std::f64::consts::FRAC_PI_2;
use std::fmt;
use std::fs::File;
use std::path::Path;

use cairo::{Context, Format, ImageSurface};
use pango::FontDescription;

use super::metrics::alignment_offset;
use crate::core::BoundingBox;
use crate::error::{AxisError, AxisResult};
use crate::render::{
    Color, LinePrimitive, MarkerPrimitive, Renderer, TextPrimitive, TextRotation, aligned_extent,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CairoRenderStats {
    pub marker_batches: usize,
    pub lines_drawn: usize,
    pub texts_drawn: usize,
}

/// Cairo + Pango + PangoCairo renderer drawing into an offscreen image surface.
pub struct CairoRenderer {
    surface: ImageSurface,
    context: Context,
    clear_color: Color,
    stats: CairoRenderStats,
}

impl fmt::Debug for CairoRenderer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CairoRenderer")
            .field("width", &self.surface.width())
            .field("height", &self.surface.height())
            .field("clear_color", &self.clear_color)
            .field("stats", &self.stats)
            .finish_non_exhaustive()
    }
}

impl CairoRenderer {
    pub fn new(width: i32, height: i32) -> AxisResult<Self> {
        if width <= 0 || height <= 0 {
            return Err(AxisError::InvalidData(
                "cairo surface size must be > 0".to_owned(),
            ));
        }

        let surface = ImageSurface::create(Format::ARgb32, width, height)
            .map_err(|err| map_backend_error("failed to create cairo surface", err))?;
        let context = Context::new(&surface)
            .map_err(|err| map_backend_error("failed to create cairo context", err))?;
        let mut renderer = Self {
            surface,
            context,
            clear_color: Color::rgb(1.0, 1.0, 1.0),
            stats: CairoRenderStats::default(),
        };
        renderer.clear()?;
        Ok(renderer)
    }

    #[must_use]
    pub fn stats(&self) -> CairoRenderStats {
        self.stats
    }

    /// Paints the whole surface with the clear color and resets the stats.
    pub fn clear(&mut self) -> AxisResult<()> {
        apply_color(&self.context, self.clear_color);
        self.context
            .paint()
            .map_err(|err| map_backend_error("failed to clear surface", err))?;
        self.stats = CairoRenderStats::default();
        Ok(())
    }

    pub fn write_png(&self, path: &Path) -> AxisResult<()> {
        self.surface.flush();
        let mut file = File::create(path).map_err(|err| {
            AxisError::Backend(format!("failed to create `{}`: {err}", path.display()))
        })?;
        self.surface
            .write_to_png(&mut file)
            .map_err(|err| AxisError::Backend(format!("failed to write png: {err}")))
    }

    /// Copy of the surface's decoded pixel buffer.
    pub fn pixels(&self) -> AxisResult<Vec<u8>> {
        self.surface.flush();
        let mut pixels = Vec::new();
        self.surface
            .with_data(|data| pixels.extend_from_slice(data))
            .map_err(|err| AxisError::Backend(format!("failed to read surface data: {err}")))?;
        Ok(pixels)
    }

    fn text_layout(&self, text: &TextPrimitive) -> pango::Layout {
        let layout = pangocairo::functions::create_layout(&self.context);
        let font_description = FontDescription::from_string(&format!("Sans {}", text.font_size_px));
        layout.set_font_description(Some(&font_description));
        layout.set_text(&text.text);
        layout
    }
}

/// Compares two renderers' decoded pixels; metadata never participates.
pub fn pixels_identical(left: &CairoRenderer, right: &CairoRenderer) -> AxisResult<bool> {
    if left.surface.width() != right.surface.width()
        || left.surface.height() != right.surface.height()
    {
        return Ok(false);
    }
    Ok(left.pixels()? == right.pixels()?)
}

impl Renderer for CairoRenderer {
    fn draw_markers(&mut self, markers: &MarkerPrimitive) -> AxisResult<()> {
        markers.validate()?;
        self.stats.marker_batches += 1;
        if markers.points.is_empty() || markers.stroke_width == 0.0 || markers.size == 0.0 {
            return Ok(());
        }

        apply_color(&self.context, markers.color);
        self.context.set_line_width(markers.stroke_width);
        for (from, to) in markers.segments() {
            self.context.move_to(from.x, from.y);
            self.context.line_to(to.x, to.y);
        }
        self.context
            .stroke()
            .map_err(|err| map_backend_error("failed to stroke tick marks", err))
    }

    fn draw_line(&mut self, line: &LinePrimitive) -> AxisResult<()> {
        line.validate()?;
        let dashes: Vec<f64> = line
            .stroke_style
            .dash_pattern()
            .iter()
            .map(|length| length * line.stroke_width)
            .collect();

        apply_color(&self.context, line.color);
        self.context.set_line_width(line.stroke_width);
        self.context.set_dash(&dashes, 0.0);
        self.context.move_to(line.x1, line.y1);
        self.context.line_to(line.x2, line.y2);
        let stroked = self.context.stroke();
        self.context.set_dash(&[], 0.0);
        stroked.map_err(|err| map_backend_error("failed to stroke line", err))?;
        self.stats.lines_drawn += 1;
        Ok(())
    }

    fn draw_text(&mut self, text: &TextPrimitive) -> AxisResult<()> {
        text.validate()?;
        let layout = self.text_layout(text);
        let (width, height) = layout.pixel_size();
        let (dx, dy) = alignment_offset(text, f64::from(width), f64::from(height));

        self.context
            .save()
            .map_err(|err| map_backend_error("failed to save cairo state", err))?;
        apply_color(&self.context, text.color);
        self.context.translate(text.x, text.y);
        if text.rotation == TextRotation::Vertical {
            self.context.rotate(-FRAC_PI_2);
        }
        self.context.move_to(dx, dy);
        pangocairo::functions::show_layout(&self.context, &layout);
        self.context
            .restore()
            .map_err(|err| map_backend_error("failed to restore cairo state", err))?;
        self.stats.texts_drawn += 1;
        Ok(())
    }

    fn text_extent(&mut self, text: &TextPrimitive) -> AxisResult<BoundingBox> {
        if text.text.is_empty() {
            return Ok(aligned_extent(text, 0.0, 0.0));
        }
        let layout = self.text_layout(text);
        let (width, height) = layout.pixel_size();
        Ok(aligned_extent(text, f64::from(width), f64::from(height)))
    }
}

fn apply_color(context: &Context, color: Color) {
    context.set_source_rgba(color.red, color.green, color.blue, color.alpha);
}

fn map_backend_error(prefix: &str, err: cairo::Error) -> AxisError {
    AxisError::Backend(format!("{prefix}: {err}"))
}
