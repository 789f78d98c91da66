//! Axis rendering with reusable tick artists.
//!
//! An [`Axis`] owns, per tick class, a locator, a formatter and a lazily built
//! set of artists (two marker batches and a label pool). Redraws update those
//! artists in place instead of rebuilding them.

mod artist;
mod config;
mod geometry;
mod label_cache;
mod orientation;
mod render_pass;
mod tick_group;

use std::marker::PhantomData;
use std::sync::Arc;

pub use artist::{ArtistId, FontSpec, TextLabel, TickMarkers};
pub use label_cache::{LabelCache, LabelCacheStats};
pub use orientation::{Horizontal, Orientation, Placement, Vertical};
pub use tick_group::{TickGroup, TickGroups};

use crate::core::{
    AxesTransform, AxisKind, BoundingBox, MaxNLocator, NullFormatter, NullLocator,
    ScalarFormatter, TickWhich,
};
use crate::error::AxisResult;
use crate::render::{Renderer, TextHAlign, TextVAlign};
use crate::style::{
    GridStyle, StyleSheet, TitleStyle, resolve_grid_style, resolve_style, resolve_title_style,
};

use geometry::AxisGeometry;
use tick_group::TickClass;

/// Host-facing contract of anything that renders like an axis.
pub trait AxisArtist {
    fn kind(&self) -> AxisKind;

    fn draw(&mut self, renderer: &mut dyn Renderer) -> AxisResult<()>;

    /// Union of the device extents of everything `draw` would place outside
    /// the axes; `None` when nothing would be visible.
    fn tight_bbox(&mut self, renderer: &mut dyn Renderer) -> AxisResult<Option<BoundingBox>>;
}

/// One axis of a 2-D plot, laid out according to `O`.
#[derive(Debug)]
pub struct Axis<O: Orientation> {
    geometry: AxisGeometry,
    sheet: Arc<StyleSheet>,
    grid_style: GridStyle,
    title_style: TitleStyle,
    minor: TickClass,
    major: TickClass,
    title: TextLabel,
    offset_text: TextLabel,
    visible: bool,
    orientation: PhantomData<O>,
}

pub type XAxis = Axis<Horizontal>;
pub type YAxis = Axis<Vertical>;

impl<O: Orientation> Axis<O> {
    /// Axis over the `[0, 1]` view with auto major ticks and no minor ticks.
    #[must_use]
    pub fn new(transform: Arc<dyn AxesTransform>, sheet: Arc<StyleSheet>) -> Self {
        let title_style = resolve_title_style(&sheet);
        let offset_style = resolve_style(&sheet, O::KIND, TickWhich::Major);
        Self {
            geometry: AxisGeometry::new(transform),
            grid_style: resolve_grid_style(&sheet),
            title_style,
            minor: TickClass::new(
                TickWhich::Minor,
                Box::new(NullLocator),
                Some(Box::new(NullFormatter)),
            ),
            major: TickClass::new(
                TickWhich::Major,
                Box::new(MaxNLocator::default()),
                Some(Box::new(ScalarFormatter::new())),
            ),
            title: TextLabel::new(
                FontSpec::new(title_style.font_size),
                title_style.color,
                TextVAlign::Top,
                TextHAlign::Center,
            ),
            offset_text: TextLabel::new(
                FontSpec::new(offset_style.label_font_size),
                offset_style.label_color,
                TextVAlign::Top,
                TextHAlign::Right,
            ),
            sheet,
            visible: true,
            orientation: PhantomData,
        }
    }

    /// Lazy walk over the visible tick groups, minor first.
    ///
    /// Each call updates the cached marker artists in place.
    pub fn iter_tick_groups(&mut self) -> TickGroups<'_, O> {
        TickGroups::new(
            &self.geometry,
            &self.sheet,
            &mut self.minor,
            &mut self.major,
        )
    }
}

impl<O: Orientation> AxisArtist for Axis<O> {
    fn kind(&self) -> AxisKind {
        O::KIND
    }

    fn draw(&mut self, renderer: &mut dyn Renderer) -> AxisResult<()> {
        Axis::draw(self, renderer)
    }

    fn tight_bbox(&mut self, renderer: &mut dyn Renderer) -> AxisResult<Option<BoundingBox>> {
        Axis::tight_bbox(self, renderer)
    }
}
