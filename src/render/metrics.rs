use crate::core::BoundingBox;
use crate::render::{TextHAlign, TextPrimitive, TextRotation, TextVAlign};

/// Average glyph advance as a fraction of the font size.
const AVERAGE_ADVANCE_RATIO: f64 = 0.6;
/// Line height as a fraction of the font size.
const LINE_HEIGHT_RATIO: f64 = 1.2;

/// Unrotated width and height of `text` from a fixed average glyph advance.
#[must_use]
pub fn approximate_text_size(text: &TextPrimitive) -> (f64, f64) {
    if text.text.is_empty() {
        return (0.0, 0.0);
    }
    let chars = text.text.chars().count() as f64;
    (
        chars * text.font_size_px * AVERAGE_ADVANCE_RATIO,
        text.font_size_px * LINE_HEIGHT_RATIO,
    )
}

/// Device-space extent of a text block of `width` x `height` placed per the
/// primitive's anchor, alignment and rotation.
///
/// Alignment applies to the unrotated block; vertical text is then turned a
/// quarter counter-clockwise about the anchor.
#[must_use]
pub fn aligned_extent(text: &TextPrimitive, width: f64, height: f64) -> BoundingBox {
    let (dx0, dy0) = alignment_offset(text, width, height);
    let (dx1, dy1) = (dx0 + width, dy0 + height);

    match text.rotation {
        TextRotation::Horizontal => BoundingBox {
            x0: text.x + dx0,
            y0: text.y + dy0,
            x1: text.x + dx1,
            y1: text.y + dy1,
        },
        // (dx, dy) -> (dy, -dx) in y-down device space
        TextRotation::Vertical => BoundingBox {
            x0: text.x + dy0,
            y0: text.y - dx1,
            x1: text.x + dy1,
            y1: text.y - dx0,
        },
    }
}

/// Offset of the unrotated block's top-left corner from the anchor.
#[must_use]
pub(crate) fn alignment_offset(text: &TextPrimitive, width: f64, height: f64) -> (f64, f64) {
    let dx = match text.h_align {
        TextHAlign::Left => 0.0,
        TextHAlign::Center => -width * 0.5,
        TextHAlign::Right => -width,
    };
    let dy = match text.v_align {
        TextVAlign::Top => 0.0,
        TextVAlign::Center => -height * 0.5,
        TextVAlign::Bottom => -height,
    };
    (dx, dy)
}

/// Extent from the approximate metric; used by headless renderers.
#[must_use]
pub fn approximate_text_extent(text: &TextPrimitive) -> BoundingBox {
    let (width, height) = approximate_text_size(text);
    aligned_extent(text, width, height)
}
