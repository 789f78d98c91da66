//! Reusable artists owned by an axis: tick-mark batches and text labels.

use std::sync::atomic::{AtomicU64, Ordering};

use serde::{Deserialize, Serialize};

use crate::core::{Point, TransformAnchor};
use crate::render::{
    Color, MarkerPrimitive, TextHAlign, TextPrimitive, TextRotation, TextVAlign, TickMarker,
};
use crate::style::TickStyle;

use super::geometry::AxisGeometry;
use super::orientation::{Orientation, Placement};

static NEXT_ARTIST_ID: AtomicU64 = AtomicU64::new(1);

/// Process-unique identity of a constructed artist.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ArtistId(u64);

impl ArtistId {
    pub(crate) fn next() -> Self {
        Self(NEXT_ARTIST_ID.fetch_add(1, Ordering::Relaxed))
    }

    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }
}

/// Font properties shared by every label of a cache.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FontSpec {
    pub size_px: f64,
}

impl FontSpec {
    #[must_use]
    pub const fn new(size_px: f64) -> Self {
        Self { size_px }
    }
}

/// Tick marks of one class on one side of the axes.
///
/// Built once per axis and class; every redraw rewrites the coordinate
/// arrays and the device-space anchors in place.
#[derive(Debug, Clone)]
pub struct TickMarkers {
    id: ArtistId,
    anchor: TransformAnchor,
    xdata: Vec<f64>,
    ydata: Vec<f64>,
    primitive: MarkerPrimitive,
}

impl TickMarkers {
    pub(crate) fn new(style: &TickStyle, anchor: TransformAnchor, marker: TickMarker) -> Self {
        Self {
            id: ArtistId::next(),
            anchor,
            xdata: Vec::new(),
            ydata: Vec::new(),
            primitive: MarkerPrimitive {
                points: Vec::new(),
                marker,
                size: style.length,
                stroke_width: style.line_width,
                color: style.color,
                z_order: style.z_order,
            },
        }
    }

    #[must_use]
    pub fn id(&self) -> ArtistId {
        self.id
    }

    #[must_use]
    pub fn anchor(&self) -> TransformAnchor {
        self.anchor
    }

    #[must_use]
    pub fn marker(&self) -> TickMarker {
        self.primitive.marker
    }

    /// X coordinates: data values on a horizontal axis, axes-relative on a vertical one.
    #[must_use]
    pub fn xdata(&self) -> &[f64] {
        &self.xdata
    }

    #[must_use]
    pub fn ydata(&self) -> &[f64] {
        &self.ydata
    }

    #[must_use]
    pub fn primitive(&self) -> &MarkerPrimitive {
        &self.primitive
    }

    pub(crate) fn update<O: Orientation>(&mut self, positions: &[f64], geometry: &AxisGeometry) {
        let secondary = self.anchor.secondary();
        O::fill_coordinates(positions, secondary, &mut self.xdata, &mut self.ydata);

        self.primitive.points.clear();
        self.primitive.points.extend(
            positions
                .iter()
                .map(|value| geometry.to_device::<O>(*value, secondary)),
        );
    }
}

/// Positioned text artist: tick labels, the axis title and the offset annotation.
#[derive(Debug, Clone)]
pub struct TextLabel {
    id: ArtistId,
    value: f64,
    visible: bool,
    primitive: TextPrimitive,
}

impl TextLabel {
    pub(crate) fn new(
        font: FontSpec,
        color: Color,
        v_align: TextVAlign,
        h_align: TextHAlign,
    ) -> Self {
        Self {
            id: ArtistId::next(),
            value: 0.0,
            visible: true,
            primitive: TextPrimitive::new(
                String::new(),
                0.0,
                0.0,
                font.size_px,
                color,
                h_align,
                v_align,
            ),
        }
    }

    #[must_use]
    pub fn id(&self) -> ArtistId {
        self.id
    }

    /// Data value this label was last placed at.
    #[must_use]
    pub fn value(&self) -> f64 {
        self.value
    }

    #[must_use]
    pub fn text(&self) -> &str {
        &self.primitive.text
    }

    #[must_use]
    pub fn position(&self) -> Point {
        Point::new(self.primitive.x, self.primitive.y)
    }

    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    #[must_use]
    pub fn primitive(&self) -> &TextPrimitive {
        &self.primitive
    }

    /// Visible and non-empty.
    #[must_use]
    pub fn is_drawable(&self) -> bool {
        self.visible && !self.primitive.text.is_empty()
    }

    pub(crate) fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }

    pub(crate) fn place(&mut self, value: f64, anchor: Point) {
        self.value = value;
        self.primitive.x = anchor.x;
        self.primitive.y = anchor.y;
    }

    /// Replaces the text, reusing the existing buffer.
    pub(crate) fn set_text(&mut self, text: &str) {
        if self.primitive.text != text {
            self.primitive.text.clear();
            self.primitive.text.push_str(text);
        }
    }

    pub(crate) fn set_font(&mut self, font: FontSpec, color: Color) {
        self.primitive.font_size_px = font.size_px;
        self.primitive.color = color;
    }

    pub(crate) fn apply_placement(&mut self, placement: Placement) {
        self.primitive.x = placement.anchor.x;
        self.primitive.y = placement.anchor.y;
        self.primitive.h_align = placement.h_align;
        self.primitive.v_align = placement.v_align;
        self.primitive.rotation = placement.rotation;
    }

    #[must_use]
    pub fn rotation(&self) -> TextRotation {
        self.primitive.rotation
    }
}

#[cfg(test)]
mod tests {
    use super::{ArtistId, FontSpec, TextLabel};
    use crate::core::Point;
    use crate::render::{Color, TextHAlign, TextVAlign};

    #[test]
    fn artist_ids_are_unique() {
        let first = ArtistId::next();
        let second = ArtistId::next();
        assert_ne!(first, second);
        assert!(second.get() > first.get());
    }

    #[test]
    fn text_label_reuses_buffer_and_tracks_placement() {
        let mut label = TextLabel::new(
            FontSpec::new(10.0),
            Color::BLACK,
            TextVAlign::Top,
            TextHAlign::Center,
        );
        assert!(!label.is_drawable());

        label.place(2.0, Point::new(30.0, 40.0));
        label.set_text("2.0");
        assert!(label.is_drawable());
        assert_eq!(label.text(), "2.0");
        assert_eq!(label.value(), 2.0);
        assert_eq!(label.position(), Point::new(30.0, 40.0));

        label.set_visible(false);
        assert!(!label.is_drawable());
    }
}
