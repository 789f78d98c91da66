pub mod formatter;
pub mod locator;
pub mod scale;
pub mod transform;
pub mod types;

pub use formatter::{
    FixedFormatter, FuncFormatter, LogFormatter, NullFormatter, ScalarFormatter, TickFormatter,
    TickLabelFn,
};
pub use locator::{
    AutoMinorLocator, FixedLocator, LinearLocator, Locator, LogLocator, MaxNLocator,
    MultipleLocator, NullLocator,
};
pub use scale::AxisScale;
pub use transform::{AxesBox, AxesTransform, TransformAnchor};
pub use types::{AxisKind, BoundingBox, Point, TickWhich, ViewInterval};
