use std::sync::Arc;

use crate::core::{AxesTransform, AxisScale, BoundingBox, Point, ViewInterval};

use super::orientation::Orientation;

/// Everything needed to turn a data value into a device-space point.
#[derive(Debug, Clone)]
pub(crate) struct AxisGeometry {
    pub(crate) transform: Arc<dyn AxesTransform>,
    pub(crate) scale: AxisScale,
    pub(crate) view: ViewInterval,
}

impl AxisGeometry {
    pub(crate) fn new(transform: Arc<dyn AxesTransform>) -> Self {
        Self {
            transform,
            scale: AxisScale::Linear,
            view: ViewInterval {
                start: 0.0,
                end: 1.0,
            },
        }
    }

    pub(crate) fn fraction(&self, value: f64) -> f64 {
        self.scale.to_fraction(value, self.view)
    }

    /// `value` along the axis, `secondary` across it in axes coordinates.
    pub(crate) fn to_device<O: Orientation>(&self, value: f64, secondary: f64) -> Point {
        self.transform
            .axes_to_device(O::axes_point(self.fraction(value), secondary))
    }

    /// Device-space box of the whole axes area.
    pub(crate) fn axes_bounds(&self) -> BoundingBox {
        BoundingBox::from_corners(
            self.transform.axes_to_device(Point::new(0.0, 0.0)),
            self.transform.axes_to_device(Point::new(1.0, 1.0)),
        )
    }

    /// Endpoints of the grid line through `value`, spanning the axes.
    pub(crate) fn gridline<O: Orientation>(&self, value: f64) -> (Point, Point) {
        (self.to_device::<O>(value, 0.0), self.to_device::<O>(value, 1.0))
    }
}
