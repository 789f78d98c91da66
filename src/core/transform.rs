use std::fmt;

use serde::{Deserialize, Serialize};

use crate::core::types::{BoundingBox, Point};
use crate::error::{AxisError, AxisResult};

/// Anchor line a reusable artist is registered against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TransformAnchor {
    /// Near side of the axes (bottom for x, left for y).
    Tick1,
    /// Far side of the axes (top for x, right for y).
    Tick2,
}

impl TransformAnchor {
    /// Axes-relative secondary coordinate of the anchor line.
    #[must_use]
    pub const fn secondary(self) -> f64 {
        match self {
            Self::Tick1 => 0.0,
            Self::Tick2 => 1.0,
        }
    }
}

/// Host transform from axes-relative coordinates to device space.
///
/// Axes-relative coordinates run from `(0, 0)` at the lower-left corner of
/// the plot area to `(1, 1)` at the upper-right corner.
pub trait AxesTransform: fmt::Debug {
    fn axes_to_device(&self, point: Point) -> Point;
}

/// Plot area occupying a device rectangle; device y grows downward.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AxesBox {
    bounds: BoundingBox,
}

impl AxesBox {
    pub fn new(bounds: BoundingBox) -> AxisResult<Self> {
        let finite = [bounds.x0, bounds.y0, bounds.x1, bounds.y1]
            .iter()
            .all(|value| value.is_finite());
        if !finite || bounds.width() <= 0.0 || bounds.height() <= 0.0 {
            return Err(AxisError::InvalidData(
                "axes bounds must be finite with width and height > 0".to_owned(),
            ));
        }
        Ok(Self { bounds })
    }

    #[must_use]
    pub fn bounds(self) -> BoundingBox {
        self.bounds
    }
}

impl AxesTransform for AxesBox {
    fn axes_to_device(&self, point: Point) -> Point {
        Point::new(
            self.bounds.x0 + point.x * self.bounds.width(),
            self.bounds.y1 - point.y * self.bounds.height(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::{AxesBox, AxesTransform};
    use crate::core::types::{BoundingBox, Point};

    #[test]
    fn axes_box_maps_lower_left_origin_to_device_bottom() {
        let axes = AxesBox::new(BoundingBox::from_origin_size(50.0, 20.0, 400.0, 300.0))
            .expect("valid bounds");
        assert_eq!(axes.axes_to_device(Point::new(0.0, 0.0)), Point::new(50.0, 320.0));
        assert_eq!(axes.axes_to_device(Point::new(1.0, 1.0)), Point::new(450.0, 20.0));
        assert_eq!(axes.axes_to_device(Point::new(0.5, 0.5)), Point::new(250.0, 170.0));
    }

    #[test]
    fn axes_box_rejects_empty_bounds() {
        assert!(AxesBox::new(BoundingBox::from_origin_size(0.0, 0.0, 0.0, 10.0)).is_err());
    }
}
