use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::core::Point;
use crate::error::{AxisError, AxisResult};

/// RGBA color in normalized 0..=1 channel values.
///
/// Deserializes from either the channel object or a `#rrggbb[aa]` string.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "ColorRepr")]
pub struct Color {
    pub red: f64,
    pub green: f64,
    pub blue: f64,
    pub alpha: f64,
}

impl Color {
    pub const BLACK: Self = Self::rgb(0.0, 0.0, 0.0);

    #[must_use]
    pub const fn rgba(red: f64, green: f64, blue: f64, alpha: f64) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }

    #[must_use]
    pub const fn rgb(red: f64, green: f64, blue: f64) -> Self {
        Self::rgba(red, green, blue, 1.0)
    }

    /// Parses `#rrggbb` or `#rrggbbaa`.
    pub fn from_hex(hex: &str) -> AxisResult<Self> {
        let digits = hex.strip_prefix('#').unwrap_or(hex);
        if !(digits.len() == 6 || digits.len() == 8) || !digits.is_ascii() {
            return Err(AxisError::InvalidData(format!(
                "color `{hex}` must be #rrggbb or #rrggbbaa"
            )));
        }
        let channel = |index: usize| -> AxisResult<f64> {
            u8::from_str_radix(&digits[index * 2..index * 2 + 2], 16)
                .map(|value| f64::from(value) / 255.0)
                .map_err(|_| AxisError::InvalidData(format!("color `{hex}` is not hexadecimal")))
        };
        let alpha = if digits.len() == 8 { channel(3)? } else { 1.0 };
        Ok(Self::rgba(channel(0)?, channel(1)?, channel(2)?, alpha))
    }

    #[must_use]
    pub fn with_alpha(self, alpha: f64) -> Self {
        Self { alpha, ..self }
    }

    pub fn validate(self) -> AxisResult<()> {
        for (channel, value) in [
            ("red", self.red),
            ("green", self.green),
            ("blue", self.blue),
            ("alpha", self.alpha),
        ] {
            if !value.is_finite() || !(0.0..=1.0).contains(&value) {
                return Err(AxisError::InvalidData(format!(
                    "color channel `{channel}` must be finite and in [0, 1]"
                )));
            }
        }
        Ok(())
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum ColorRepr {
    Hex(String),
    Channels {
        red: f64,
        green: f64,
        blue: f64,
        #[serde(default = "opaque")]
        alpha: f64,
    },
}

const fn opaque() -> f64 {
    1.0
}

impl TryFrom<ColorRepr> for Color {
    type Error = AxisError;

    fn try_from(repr: ColorRepr) -> AxisResult<Self> {
        match repr {
            ColorRepr::Hex(hex) => Self::from_hex(&hex),
            ColorRepr::Channels {
                red,
                green,
                blue,
                alpha,
            } => Ok(Self::rgba(red, green, blue, alpha)),
        }
    }
}

/// Dash pattern of a stroked line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum LineStrokeStyle {
    #[default]
    Solid,
    Dashed,
    Dotted,
    DashDot,
}

impl LineStrokeStyle {
    /// Accepts both names (`solid`, `dashed`, ...) and the short forms
    /// (`-`, `--`, `:`, `-.`); anything else is drawn solid.
    #[must_use]
    pub fn parse_lenient(raw: &str) -> Self {
        match raw.trim().to_ascii_lowercase().as_str() {
            "-" | "solid" => Self::Solid,
            "--" | "dashed" => Self::Dashed,
            ":" | "dotted" => Self::Dotted,
            "-." | "dashdot" => Self::DashDot,
            other => {
                warn!(line_style = other, "unrecognized line style; drawing solid");
                Self::Solid
            }
        }
    }

    /// On/off lengths in multiples of the stroke width; empty for solid.
    #[must_use]
    pub const fn dash_pattern(self) -> &'static [f64] {
        match self {
            Self::Solid => &[],
            Self::Dashed => &[3.7, 1.6],
            Self::Dotted => &[1.0, 1.65],
            Self::DashDot => &[6.4, 1.6, 1.0, 1.6],
        }
    }
}

impl From<String> for LineStrokeStyle {
    fn from(raw: String) -> Self {
        Self::parse_lenient(&raw)
    }
}

impl From<LineStrokeStyle> for String {
    fn from(style: LineStrokeStyle) -> Self {
        match style {
            LineStrokeStyle::Solid => "solid",
            LineStrokeStyle::Dashed => "dashed",
            LineStrokeStyle::Dotted => "dotted",
            LineStrokeStyle::DashDot => "dashdot",
        }
        .to_owned()
    }
}

/// Draw command for one line segment in pixel space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinePrimitive {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
    pub stroke_width: f64,
    pub color: Color,
    pub stroke_style: LineStrokeStyle,
}

impl LinePrimitive {
    #[must_use]
    pub const fn new(x1: f64, y1: f64, x2: f64, y2: f64, stroke_width: f64, color: Color) -> Self {
        Self {
            x1,
            y1,
            x2,
            y2,
            stroke_width,
            color,
            stroke_style: LineStrokeStyle::Solid,
        }
    }

    #[must_use]
    pub fn between(from: Point, to: Point, stroke_width: f64, color: Color) -> Self {
        Self::new(from.x, from.y, to.x, to.y, stroke_width, color)
    }

    #[must_use]
    pub const fn with_stroke_style(mut self, stroke_style: LineStrokeStyle) -> Self {
        self.stroke_style = stroke_style;
        self
    }

    pub fn validate(self) -> AxisResult<()> {
        if !self.x1.is_finite()
            || !self.y1.is_finite()
            || !self.x2.is_finite()
            || !self.y2.is_finite()
        {
            return Err(AxisError::InvalidData(
                "line coordinates must be finite".to_owned(),
            ));
        }
        if !self.stroke_width.is_finite() || self.stroke_width <= 0.0 {
            return Err(AxisError::InvalidData(
                "line stroke width must be finite and > 0".to_owned(),
            ));
        }
        self.color.validate()
    }
}

/// Tick mark shape drawn at every anchor point of a marker batch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TickMarker {
    /// Segment from the anchor toward smaller device y.
    Up,
    /// Segment from the anchor toward larger device y.
    Down,
    Left,
    Right,
    /// Vertical segment centered on the anchor.
    VerticalBar,
    /// Horizontal segment centered on the anchor.
    HorizontalBar,
}

impl TickMarker {
    /// Device-space segment of a mark of `size` pixels anchored at `anchor`.
    #[must_use]
    pub fn segment(self, anchor: Point, size: f64) -> (Point, Point) {
        let half = size * 0.5;
        match self {
            Self::Up => (anchor, anchor.offset(0.0, -size)),
            Self::Down => (anchor, anchor.offset(0.0, size)),
            Self::Left => (anchor, anchor.offset(-size, 0.0)),
            Self::Right => (anchor, anchor.offset(size, 0.0)),
            Self::VerticalBar => (anchor.offset(0.0, -half), anchor.offset(0.0, half)),
            Self::HorizontalBar => (anchor.offset(-half, 0.0), anchor.offset(half, 0.0)),
        }
    }
}

/// Batch of identical tick marks at device-space anchor points.
#[derive(Debug, Clone, PartialEq)]
pub struct MarkerPrimitive {
    pub points: Vec<Point>,
    pub marker: TickMarker,
    pub size: f64,
    pub stroke_width: f64,
    pub color: Color,
    pub z_order: f64,
}

impl MarkerPrimitive {
    pub fn segments(&self) -> impl Iterator<Item = (Point, Point)> + '_ {
        self.points
            .iter()
            .map(|point| self.marker.segment(*point, self.size))
    }

    pub fn validate(&self) -> AxisResult<()> {
        if self
            .points
            .iter()
            .any(|point| !point.x.is_finite() || !point.y.is_finite())
        {
            return Err(AxisError::InvalidData(
                "marker anchors must be finite".to_owned(),
            ));
        }
        if !self.size.is_finite() || self.size < 0.0 {
            return Err(AxisError::InvalidData(
                "marker size must be finite and >= 0".to_owned(),
            ));
        }
        if !self.stroke_width.is_finite() || self.stroke_width < 0.0 {
            return Err(AxisError::InvalidData(
                "marker stroke width must be finite and >= 0".to_owned(),
            ));
        }
        self.color.validate()
    }
}

/// Horizontal text alignment relative to `TextPrimitive::x`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TextHAlign {
    Left,
    Center,
    Right,
}

/// Vertical text alignment relative to `TextPrimitive::y`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TextVAlign {
    Top,
    Center,
    Bottom,
}

/// Text orientation; vertical text reads bottom-to-top.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum TextRotation {
    #[default]
    Horizontal,
    Vertical,
}

/// Draw command for one label in pixel space.
#[derive(Debug, Clone, PartialEq)]
pub struct TextPrimitive {
    pub text: String,
    pub x: f64,
    pub y: f64,
    pub font_size_px: f64,
    pub color: Color,
    pub h_align: TextHAlign,
    pub v_align: TextVAlign,
    pub rotation: TextRotation,
}

impl TextPrimitive {
    #[must_use]
    pub fn new(
        text: impl Into<String>,
        x: f64,
        y: f64,
        font_size_px: f64,
        color: Color,
        h_align: TextHAlign,
        v_align: TextVAlign,
    ) -> Self {
        Self {
            text: text.into(),
            x,
            y,
            font_size_px,
            color,
            h_align,
            v_align,
            rotation: TextRotation::Horizontal,
        }
    }

    #[must_use]
    pub fn with_rotation(mut self, rotation: TextRotation) -> Self {
        self.rotation = rotation;
        self
    }

    pub fn validate(&self) -> AxisResult<()> {
        if self.text.is_empty() {
            return Err(AxisError::InvalidData(
                "text primitive must not be empty".to_owned(),
            ));
        }
        if !self.x.is_finite() || !self.y.is_finite() {
            return Err(AxisError::InvalidData(
                "text coordinates must be finite".to_owned(),
            ));
        }
        if !self.font_size_px.is_finite() || self.font_size_px <= 0.0 {
            return Err(AxisError::InvalidData(
                "font size must be finite and > 0".to_owned(),
            ));
        }
        self.color.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::{Color, LineStrokeStyle, TickMarker};
    use crate::core::Point;

    #[test]
    fn color_parses_hex_forms() {
        let grey = Color::from_hex("#b0b0b0").expect("valid hex");
        assert!((grey.red - 176.0 / 255.0).abs() < 1e-12);
        assert_eq!(grey.alpha, 1.0);
        let translucent = Color::from_hex("00000080").expect("valid hex");
        assert!((translucent.alpha - 128.0 / 255.0).abs() < 1e-12);
        assert!(Color::from_hex("#12345").is_err());
        assert!(Color::from_hex("#gggggg").is_err());
    }

    #[test]
    fn color_deserializes_from_hex_or_channels() {
        let grey: Color = serde_json::from_str(r##""#b0b0b0""##).expect("hex color");
        assert_eq!(grey, Color::from_hex("#b0b0b0").expect("valid hex"));

        let red: Color =
            serde_json::from_str(r#"{ "red": 1.0, "green": 0.0, "blue": 0.0 }"#).expect("channels");
        assert_eq!(red, Color::rgb(1.0, 0.0, 0.0));

        assert!(serde_json::from_str::<Color>(r#""blue""#).is_err());
    }

    #[test]
    fn line_style_accepts_short_forms_and_degrades_to_solid() {
        assert_eq!(LineStrokeStyle::parse_lenient("--"), LineStrokeStyle::Dashed);
        assert_eq!(LineStrokeStyle::parse_lenient("Dotted"), LineStrokeStyle::Dotted);
        assert_eq!(LineStrokeStyle::parse_lenient("wavy"), LineStrokeStyle::Solid);
    }

    #[test]
    fn tick_marker_segments_follow_shape() {
        let anchor = Point::new(10.0, 10.0);
        assert_eq!(
            TickMarker::Down.segment(anchor, 4.0),
            (anchor, Point::new(10.0, 14.0))
        );
        assert_eq!(
            TickMarker::HorizontalBar.segment(anchor, 4.0),
            (Point::new(8.0, 10.0), Point::new(12.0, 10.0))
        );
    }
}
