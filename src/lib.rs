//! fast-axis: axis rendering with reusable tick artists.
//!
//! Tick marks and tick labels are built once per axis and tick class and then
//! updated in place on every redraw, so interactive pan/zoom loops do not pay
//! for rebuilding artists each frame.

pub mod axis;
pub mod core;
pub mod error;
pub mod projection;
pub mod render;
pub mod style;
pub mod telemetry;

pub use axis::{Axis, AxisArtist, XAxis, YAxis};
pub use error::{AxisError, AxisResult};
pub use projection::{AxesArtist, FastAxes, ProjectionRegistry};
pub use style::StyleSheet;
