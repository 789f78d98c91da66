use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::core::{AxisKind, TickWhich};
use crate::render::{Color, LineStrokeStyle, TickMarker};

use super::{AxesSheet, GridSheet, StyleSheet, TickDirection, TickSheet};

/// Stacking order of line artists; tick marks sit at this level.
pub const LINE_Z_ORDER: f64 = 2.0;
/// Added to the major class so major marks draw over coincident minor ones.
pub const MAJOR_Z_ORDER_INCREMENT: f64 = 0.01;

/// Resolved appearance of one tick class on one axis kind.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TickStyle {
    pub kind: AxisKind,
    pub which: TickWhich,
    pub length: f64,
    pub line_width: f64,
    pub color: Color,
    pub label_color: Color,
    pub label_font_size: f64,
    pub z_order: f64,
    pub direction: TickDirection,
    /// Marker shapes for the near (`[0]`) and far (`[1]`) side of the axes.
    pub markers: [TickMarker; 2],
    pub base_pad: f64,
    /// Distance from the axis line to the tick labels.
    pub pad: f64,
    pub grid_on: bool,
}

/// Resolves the tick style of `which` ticks on a `kind` axis from `sheet`.
///
/// A missing namespace resolves against the built-in defaults, and so does
/// any size or color a renderer would reject.
#[must_use]
pub fn resolve_style(sheet: &StyleSheet, kind: AxisKind, which: TickWhich) -> TickStyle {
    let ticks = match sheet.tick_sheet(kind) {
        Some(ticks) => *ticks,
        None => {
            warn!(
                namespace = kind.namespace(),
                "style sheet has no tick namespace; using defaults"
            );
            TickSheet::default()
        }
    };
    let defaults = TickSheet::default();
    let class = ticks.class(which);
    let default_class = defaults.class(which);
    let size = non_negative_or(class.size, default_class.size, "tick size");
    let line_width = non_negative_or(class.width, default_class.width, "tick width");
    let base_pad = finite_or(class.pad, default_class.pad, "tick pad");
    let color = color_or(ticks.color, defaults.color, "tick color");
    let label_color = ticks
        .label_color
        .map_or(color, |label_color| color_or(label_color, color, "tick label color"));

    let (markers, pad) = match ticks.direction {
        TickDirection::In => (inward_markers(kind), base_pad),
        TickDirection::InOut => (bar_markers(kind), base_pad + size / 2.0),
        TickDirection::Out => (outward_markers(kind), base_pad + size),
    };

    let z_order = if which.is_major() {
        LINE_Z_ORDER + MAJOR_Z_ORDER_INCREMENT
    } else {
        LINE_Z_ORDER
    };

    TickStyle {
        kind,
        which,
        length: size,
        line_width,
        color,
        label_color,
        label_font_size: positive_or(ticks.label_size, defaults.label_size, "tick label size"),
        z_order,
        direction: ticks.direction,
        markers,
        base_pad,
        pad,
        grid_on: grid_enabled(&sheet.grid) && sheet.grid.which.includes(which),
    }
}

/// A visible grid with a non-positive line width is treated as hidden.
fn grid_enabled(grid: &GridSheet) -> bool {
    if !grid.visible {
        return false;
    }
    if grid.line_width.is_finite() && grid.line_width > 0.0 {
        return true;
    }
    warn!(line_width = grid.line_width, "grid line width is not positive; grid off");
    false
}

fn positive_or(value: f64, fallback: f64, field: &'static str) -> f64 {
    if value.is_finite() && value > 0.0 {
        return value;
    }
    warn!(field, value, fallback, "style value must be finite and > 0; using default");
    fallback
}

fn non_negative_or(value: f64, fallback: f64, field: &'static str) -> f64 {
    if value.is_finite() && value >= 0.0 {
        return value;
    }
    warn!(field, value, fallback, "style value must be finite and >= 0; using default");
    fallback
}

fn finite_or(value: f64, fallback: f64, field: &'static str) -> f64 {
    if value.is_finite() {
        return value;
    }
    warn!(field, value, fallback, "style value must be finite; using default");
    fallback
}

fn color_or(color: Color, fallback: Color, field: &'static str) -> Color {
    match color.validate() {
        Ok(()) => color,
        Err(err) => {
            warn!(field, error = %err, "invalid style color; using default");
            fallback
        }
    }
}

fn inward_markers(kind: AxisKind) -> [TickMarker; 2] {
    match kind {
        AxisKind::X => [TickMarker::Up, TickMarker::Down],
        AxisKind::Y => [TickMarker::Right, TickMarker::Left],
    }
}

fn outward_markers(kind: AxisKind) -> [TickMarker; 2] {
    match kind {
        AxisKind::X => [TickMarker::Down, TickMarker::Up],
        AxisKind::Y => [TickMarker::Left, TickMarker::Right],
    }
}

fn bar_markers(kind: AxisKind) -> [TickMarker; 2] {
    match kind {
        AxisKind::X => [TickMarker::VerticalBar; 2],
        AxisKind::Y => [TickMarker::HorizontalBar; 2],
    }
}

/// Resolved appearance of grid lines.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridStyle {
    pub color: Color,
    pub line_style: LineStrokeStyle,
    pub line_width: f64,
}

#[must_use]
pub fn resolve_grid_style(sheet: &StyleSheet) -> GridStyle {
    let defaults = GridSheet::default();
    let grid = &sheet.grid;
    let color = color_or(grid.color, defaults.color, "grid color");
    let alpha = if grid.alpha.is_finite() {
        grid.alpha.clamp(0.0, 1.0)
    } else {
        warn!(alpha = grid.alpha, "grid alpha must be finite; using 1");
        1.0
    };
    // widths that hide the grid never reach a renderer; see `grid_enabled`
    let line_width = if grid.line_width.is_finite() && grid.line_width > 0.0 {
        grid.line_width
    } else {
        defaults.line_width
    };
    GridStyle {
        color: color.with_alpha(color.alpha * alpha),
        line_style: grid.line_style,
        line_width,
    }
}

/// Resolved appearance of the axis title.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TitleStyle {
    pub font_size: f64,
    pub color: Color,
    /// Gap between the tick labels and the title.
    pub pad: f64,
}

#[must_use]
pub fn resolve_title_style(sheet: &StyleSheet) -> TitleStyle {
    let defaults = AxesSheet::default();
    TitleStyle {
        font_size: positive_or(sheet.axes.label_size, defaults.label_size, "axes label size"),
        color: color_or(sheet.axes.label_color, defaults.label_color, "axes label color"),
        pad: finite_or(sheet.axes.label_pad, defaults.label_pad, "axes label pad"),
    }
}
