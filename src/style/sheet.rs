use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::core::{AxisKind, TickWhich};
use crate::error::AxisResult;
use crate::render::{Color, LineStrokeStyle};

/// Which side of the axis line tick marks extend to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum TickDirection {
    /// Into the plot area.
    In,
    /// Away from the plot area.
    #[default]
    Out,
    /// Across the axis line.
    InOut,
}

impl TickDirection {
    /// Never fails: unrecognized values behave like `out`.
    #[must_use]
    pub fn parse_lenient(raw: &str) -> Self {
        match raw.trim().to_ascii_lowercase().as_str() {
            "in" => Self::In,
            "inout" => Self::InOut,
            "out" => Self::Out,
            other => {
                warn!(direction = other, "unrecognized tick direction; using `out`");
                Self::Out
            }
        }
    }
}

impl From<String> for TickDirection {
    fn from(raw: String) -> Self {
        Self::parse_lenient(&raw)
    }
}

impl From<TickDirection> for String {
    fn from(direction: TickDirection) -> Self {
        match direction {
            TickDirection::In => "in",
            TickDirection::Out => "out",
            TickDirection::InOut => "inout",
        }
        .to_owned()
    }
}

/// Tick classes that receive grid lines when the grid is enabled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum GridWhich {
    #[default]
    Major,
    Minor,
    Both,
}

impl GridWhich {
    #[must_use]
    pub fn parse_lenient(raw: &str) -> Self {
        match raw.trim().to_ascii_lowercase().as_str() {
            "major" => Self::Major,
            "minor" => Self::Minor,
            "both" => Self::Both,
            other => {
                warn!(which = other, "unrecognized grid selection; using `major`");
                Self::Major
            }
        }
    }

    #[must_use]
    pub fn includes(self, which: TickWhich) -> bool {
        match self {
            Self::Both => true,
            Self::Major => which == TickWhich::Major,
            Self::Minor => which == TickWhich::Minor,
        }
    }
}

impl From<String> for GridWhich {
    fn from(raw: String) -> Self {
        Self::parse_lenient(&raw)
    }
}

impl From<GridWhich> for String {
    fn from(which: GridWhich) -> Self {
        match which {
            GridWhich::Major => "major",
            GridWhich::Minor => "minor",
            GridWhich::Both => "both",
        }
        .to_owned()
    }
}

/// Size parameters of one tick class, in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TickClassSheet {
    pub size: f64,
    pub width: f64,
    pub pad: f64,
}

/// Tick parameters of one axis-kind namespace (`xtick`, `ytick`).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TickSheet {
    pub major: TickClassSheet,
    pub minor: TickClassSheet,
    pub direction: TickDirection,
    pub color: Color,
    /// Falls back to `color` when unset.
    pub label_color: Option<Color>,
    pub label_size: f64,
}

impl TickSheet {
    #[must_use]
    pub fn class(&self, which: TickWhich) -> TickClassSheet {
        match which {
            TickWhich::Major => self.major,
            TickWhich::Minor => self.minor,
        }
    }

    #[must_use]
    pub fn with_direction(mut self, direction: TickDirection) -> Self {
        self.direction = direction;
        self
    }
}

impl Default for TickSheet {
    fn default() -> Self {
        Self {
            major: TickClassSheet {
                size: 3.5,
                width: 0.8,
                pad: 3.5,
            },
            minor: TickClassSheet {
                size: 2.0,
                width: 0.6,
                pad: 3.4,
            },
            direction: TickDirection::Out,
            color: Color::BLACK,
            label_color: None,
            label_size: 10.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GridSheet {
    pub visible: bool,
    pub which: GridWhich,
    pub color: Color,
    pub line_style: LineStrokeStyle,
    pub line_width: f64,
    pub alpha: f64,
}

impl Default for GridSheet {
    fn default() -> Self {
        Self {
            visible: false,
            which: GridWhich::Major,
            color: Color::rgb(176.0 / 255.0, 176.0 / 255.0, 176.0 / 255.0),
            line_style: LineStrokeStyle::Solid,
            line_width: 0.8,
            alpha: 1.0,
        }
    }
}

/// Axis title appearance.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AxesSheet {
    pub label_size: f64,
    pub label_color: Color,
    /// Gap between tick labels and the axis title.
    pub label_pad: f64,
}

impl Default for AxesSheet {
    fn default() -> Self {
        Self {
            label_size: 10.0,
            label_color: Color::BLACK,
            label_pad: 4.0,
        }
    }
}

/// Appearance parameters shared by every axis built from it.
///
/// Axes receive the sheet explicitly (usually behind an `Arc`) and never
/// consult global state; replacing it goes through `Axis::set_style_sheet`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StyleSheet {
    pub ticks: IndexMap<String, TickSheet>,
    pub grid: GridSheet,
    pub axes: AxesSheet,
}

impl Default for StyleSheet {
    fn default() -> Self {
        let mut ticks = IndexMap::new();
        ticks.insert(AxisKind::X.namespace().to_owned(), TickSheet::default());
        ticks.insert(AxisKind::Y.namespace().to_owned(), TickSheet::default());
        Self {
            ticks,
            grid: GridSheet::default(),
            axes: AxesSheet::default(),
        }
    }
}

impl StyleSheet {
    pub fn from_json_str(raw: &str) -> AxisResult<Self> {
        Ok(serde_json::from_str(raw)?)
    }

    pub fn to_json_string(&self) -> AxisResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    #[must_use]
    pub fn tick_sheet(&self, kind: AxisKind) -> Option<&TickSheet> {
        self.ticks.get(kind.namespace())
    }

    #[must_use]
    pub fn with_tick_sheet(mut self, kind: AxisKind, sheet: TickSheet) -> Self {
        self.ticks.insert(kind.namespace().to_owned(), sheet);
        self
    }

    /// Applies `direction` to both axis namespaces.
    #[must_use]
    pub fn with_tick_direction(mut self, direction: TickDirection) -> Self {
        for kind in [AxisKind::X, AxisKind::Y] {
            let sheet = self.tick_sheet(kind).copied().unwrap_or_default();
            self = self.with_tick_sheet(kind, sheet.with_direction(direction));
        }
        self
    }

    #[must_use]
    pub fn with_grid(mut self, visible: bool, which: GridWhich) -> Self {
        self.grid.visible = visible;
        self.grid.which = which;
        self
    }
}
