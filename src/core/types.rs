use serde::{Deserialize, Serialize};

use crate::error::{AxisError, AxisResult};

/// Which axis of a 2-D plot an object belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AxisKind {
    /// Horizontal axis.
    X,
    /// Vertical axis.
    Y,
}

impl AxisKind {
    /// Style-sheet namespace holding the tick parameters of this axis kind.
    #[must_use]
    pub const fn namespace(self) -> &'static str {
        match self {
            Self::X => "xtick",
            Self::Y => "ytick",
        }
    }
}

/// Tick class: fine unlabeled subdivisions or labeled primary ticks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TickWhich {
    Minor,
    Major,
}

impl TickWhich {
    #[must_use]
    pub const fn is_major(self) -> bool {
        matches!(self, Self::Major)
    }
}

/// Point in device (pixel) space or axes-relative space, depending on context.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    #[must_use]
    pub fn offset(self, dx: f64, dy: f64) -> Self {
        Self::new(self.x + dx, self.y + dy)
    }
}

/// Device-space rectangle with `x0 <= x1` and `y0 <= y1`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    pub x0: f64,
    pub y0: f64,
    pub x1: f64,
    pub y1: f64,
}

impl BoundingBox {
    /// Builds a box from two corners in any order.
    #[must_use]
    pub fn from_corners(a: Point, b: Point) -> Self {
        Self {
            x0: a.x.min(b.x),
            y0: a.y.min(b.y),
            x1: a.x.max(b.x),
            y1: a.y.max(b.y),
        }
    }

    #[must_use]
    pub fn from_origin_size(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self::from_corners(Point::new(x, y), Point::new(x + width, y + height))
    }

    #[must_use]
    pub fn width(self) -> f64 {
        self.x1 - self.x0
    }

    #[must_use]
    pub fn height(self) -> f64 {
        self.y1 - self.y0
    }

    #[must_use]
    pub fn center(self) -> Point {
        Point::new((self.x0 + self.x1) * 0.5, (self.y0 + self.y1) * 0.5)
    }

    /// A box with neither width nor height contributes nothing to layout.
    #[must_use]
    pub fn is_degenerate(self) -> bool {
        self.width() == 0.0 && self.height() == 0.0
    }

    #[must_use]
    pub fn union(self, other: Self) -> Self {
        Self {
            x0: self.x0.min(other.x0),
            y0: self.y0.min(other.y0),
            x1: self.x1.max(other.x1),
            y1: self.y1.max(other.y1),
        }
    }

    /// Unions every non-degenerate box; `None` when nothing remains.
    #[must_use]
    pub fn union_all<I>(boxes: I) -> Option<Self>
    where
        I: IntoIterator<Item = Self>,
    {
        boxes
            .into_iter()
            .filter(|bbox| !bbox.is_degenerate())
            .reduce(Self::union)
    }
}

/// Visible data range along one axis. `start > end` describes an inverted axis.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ViewInterval {
    pub start: f64,
    pub end: f64,
}

impl ViewInterval {
    pub fn new(start: f64, end: f64) -> AxisResult<Self> {
        if !start.is_finite() || !end.is_finite() || start == end {
            return Err(AxisError::InvalidViewInterval { start, end });
        }
        Ok(Self { start, end })
    }

    /// Bounds ordered low to high.
    #[must_use]
    pub fn sorted(self) -> (f64, f64) {
        if self.start <= self.end {
            (self.start, self.end)
        } else {
            (self.end, self.start)
        }
    }

    #[must_use]
    pub fn contains(self, value: f64) -> bool {
        let (low, high) = self.sorted();
        value >= low && value <= high
    }

    #[must_use]
    pub fn span(self) -> f64 {
        let (low, high) = self.sorted();
        high - low
    }

    /// Drops values outside the inclusive bounds, keeping order and allocation.
    pub fn retain_visible(self, values: &mut Vec<f64>) {
        values.retain(|value| self.contains(*value));
    }
}

#[cfg(test)]
mod tests {
    use super::{BoundingBox, Point, ViewInterval};

    #[test]
    fn view_interval_filters_inclusively() {
        let view = ViewInterval::new(1.5, 2.5).expect("valid view");
        let mut values = vec![1.0, 1.5, 2.0, 2.5, 3.0];
        view.retain_visible(&mut values);
        assert_eq!(values, vec![1.5, 2.0, 2.5]);
    }

    #[test]
    fn inverted_view_interval_filters_like_sorted_one() {
        let view = ViewInterval::new(10.0, 0.0).expect("valid view");
        let mut values = vec![-1.0, 0.0, 5.0, 10.0, 11.0];
        view.retain_visible(&mut values);
        assert_eq!(values, vec![0.0, 5.0, 10.0]);
    }

    #[test]
    fn view_interval_rejects_empty_and_non_finite_spans() {
        assert!(ViewInterval::new(1.0, 1.0).is_err());
        assert!(ViewInterval::new(f64::NAN, 1.0).is_err());
        assert!(ViewInterval::new(0.0, f64::INFINITY).is_err());
    }

    #[test]
    fn union_all_skips_degenerate_boxes() {
        let a = BoundingBox::from_origin_size(0.0, 0.0, 10.0, 5.0);
        let empty = BoundingBox::from_corners(Point::new(50.0, 50.0), Point::new(50.0, 50.0));
        let b = BoundingBox::from_origin_size(20.0, -5.0, 1.0, 1.0);

        let union = BoundingBox::union_all([a, empty, b]).expect("non-empty union");
        assert_eq!(union, BoundingBox::from_corners(Point::new(0.0, -5.0), Point::new(21.0, 5.0)));
        assert_eq!(BoundingBox::union_all([empty]), None);
    }
}
