//! Style sheet and tick-style resolution.

mod sheet;
mod tick_style;

pub use sheet::{
    AxesSheet, GridSheet, GridWhich, StyleSheet, TickClassSheet, TickDirection, TickSheet,
};
pub use tick_style::{
    GridStyle, LINE_Z_ORDER, MAJOR_Z_ORDER_INCREMENT, TickStyle, TitleStyle, resolve_grid_style,
    resolve_style, resolve_title_style,
};
