//! Per-direction layout rules shared by the horizontal and vertical axis.

use std::fmt;

use crate::core::{AxisKind, BoundingBox, Point};
use crate::render::{TextHAlign, TextRotation, TextVAlign};

/// Gap between the tick labels and the offset annotation, in pixels.
const OFFSET_TEXT_PAD: f64 = 3.0;

/// Where and how a decoration text is anchored.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
    pub anchor: Point,
    pub h_align: TextHAlign,
    pub v_align: TextVAlign,
    pub rotation: TextRotation,
}

/// Direction-specific behavior of an axis.
///
/// Device space is y-down; axes space runs from `(0, 0)` at the bottom-left
/// to `(1, 1)` at the top-right.
pub trait Orientation: fmt::Debug + Send + Sync + 'static {
    const KIND: AxisKind;
    /// Renderer group wrapping everything the axis draws.
    const GROUP_NAME: &'static str;
    const LABEL_H_ALIGN: TextHAlign;
    const LABEL_V_ALIGN: TextVAlign;

    /// Writes per-tick x/y arrays: data values along the axis and the
    /// constant `secondary` across it.
    fn fill_coordinates(
        positions: &[f64],
        secondary: f64,
        xdata: &mut Vec<f64>,
        ydata: &mut Vec<f64>,
    );

    fn axes_point(fraction: f64, secondary: f64) -> Point;

    /// Device offset from a tick's axis-line anchor to its label anchor.
    fn label_offset(pad: f64) -> (f64, f64);

    fn title_placement(axes: BoundingBox, labels: Option<BoundingBox>, pad: f64) -> Placement;

    fn offset_text_placement(axes: BoundingBox, labels: Option<BoundingBox>) -> Placement;
}

/// Bottom edge of the axes, values growing to the right.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Horizontal;

/// Left edge of the axes, values growing upward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Vertical;

impl Orientation for Horizontal {
    const KIND: AxisKind = AxisKind::X;
    const GROUP_NAME: &'static str = "xaxis";
    const LABEL_H_ALIGN: TextHAlign = TextHAlign::Center;
    const LABEL_V_ALIGN: TextVAlign = TextVAlign::Top;

    fn fill_coordinates(
        positions: &[f64],
        secondary: f64,
        xdata: &mut Vec<f64>,
        ydata: &mut Vec<f64>,
    ) {
        xdata.clear();
        xdata.extend_from_slice(positions);
        ydata.clear();
        ydata.resize(positions.len(), secondary);
    }

    fn axes_point(fraction: f64, secondary: f64) -> Point {
        Point::new(fraction, secondary)
    }

    fn label_offset(pad: f64) -> (f64, f64) {
        (0.0, pad)
    }

    fn title_placement(axes: BoundingBox, labels: Option<BoundingBox>, pad: f64) -> Placement {
        let bottom = labels.map_or(axes.y1, |labels| labels.y1.max(axes.y1));
        Placement {
            anchor: Point::new(axes.center().x, bottom + pad),
            h_align: TextHAlign::Center,
            v_align: TextVAlign::Top,
            rotation: TextRotation::Horizontal,
        }
    }

    fn offset_text_placement(axes: BoundingBox, labels: Option<BoundingBox>) -> Placement {
        let bottom = labels.map_or(axes.y1, |labels| labels.y1.max(axes.y1));
        Placement {
            anchor: Point::new(axes.x1, bottom + OFFSET_TEXT_PAD),
            h_align: TextHAlign::Right,
            v_align: TextVAlign::Top,
            rotation: TextRotation::Horizontal,
        }
    }
}

impl Orientation for Vertical {
    const KIND: AxisKind = AxisKind::Y;
    const GROUP_NAME: &'static str = "yaxis";
    const LABEL_H_ALIGN: TextHAlign = TextHAlign::Right;
    const LABEL_V_ALIGN: TextVAlign = TextVAlign::Center;

    fn fill_coordinates(
        positions: &[f64],
        secondary: f64,
        xdata: &mut Vec<f64>,
        ydata: &mut Vec<f64>,
    ) {
        xdata.clear();
        xdata.resize(positions.len(), secondary);
        ydata.clear();
        ydata.extend_from_slice(positions);
    }

    fn axes_point(fraction: f64, secondary: f64) -> Point {
        Point::new(secondary, fraction)
    }

    fn label_offset(pad: f64) -> (f64, f64) {
        (-pad, 0.0)
    }

    fn title_placement(axes: BoundingBox, labels: Option<BoundingBox>, pad: f64) -> Placement {
        let left = labels.map_or(axes.x0, |labels| labels.x0.min(axes.x0));
        Placement {
            anchor: Point::new(left - pad, axes.center().y),
            h_align: TextHAlign::Center,
            v_align: TextVAlign::Bottom,
            rotation: TextRotation::Vertical,
        }
    }

    fn offset_text_placement(axes: BoundingBox, _labels: Option<BoundingBox>) -> Placement {
        Placement {
            anchor: Point::new(axes.x0, axes.y0 - OFFSET_TEXT_PAD),
            h_align: TextHAlign::Left,
            v_align: TextVAlign::Bottom,
            rotation: TextRotation::Horizontal,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{Horizontal, Orientation, Vertical};
    use crate::core::{BoundingBox, Point};
    use crate::render::TextRotation;

    #[test]
    fn coordinates_put_data_along_the_axis() {
        let (mut xdata, mut ydata) = (Vec::new(), Vec::new());
        Horizontal::fill_coordinates(&[1.0, 2.0], 1.0, &mut xdata, &mut ydata);
        assert_eq!(xdata, vec![1.0, 2.0]);
        assert_eq!(ydata, vec![1.0, 1.0]);

        Vertical::fill_coordinates(&[3.0], 0.0, &mut xdata, &mut ydata);
        assert_eq!(xdata, vec![0.0]);
        assert_eq!(ydata, vec![3.0]);
    }

    #[test]
    fn titles_clear_the_tick_labels() {
        let axes = BoundingBox::from_corners(Point::new(50.0, 20.0), Point::new(250.0, 220.0));
        let labels = BoundingBox::from_corners(Point::new(20.0, 200.0), Point::new(260.0, 240.0));

        let x_title = Horizontal::title_placement(axes, Some(labels), 4.0);
        assert_eq!(x_title.anchor, Point::new(150.0, 244.0));

        let y_title = Vertical::title_placement(axes, Some(labels), 4.0);
        assert_eq!(y_title.anchor, Point::new(16.0, 120.0));
        assert_eq!(y_title.rotation, TextRotation::Vertical);

        let bare = Horizontal::title_placement(axes, None, 4.0);
        assert_eq!(bare.anchor, Point::new(150.0, 224.0));
    }
}
