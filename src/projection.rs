//! Named axes projections.
//!
//! Hosts opt into the reusable-artist axes by creating them through a
//! [`ProjectionRegistry`] under the name [`FastAxes::NAME`].

use std::fmt;
use std::sync::Arc;

use indexmap::IndexMap;
use tracing::debug;

use crate::axis::{XAxis, YAxis};
use crate::core::{AxesBox, BoundingBox};
use crate::error::{AxisError, AxisResult};
use crate::render::Renderer;
use crate::style::StyleSheet;

/// Host-facing contract of a complete axes (plot area plus its axes).
pub trait AxesArtist: fmt::Debug {
    fn projection_name(&self) -> &str;

    fn draw(&mut self, renderer: &mut dyn Renderer) -> AxisResult<()>;

    fn tight_bbox(&mut self, renderer: &mut dyn Renderer) -> AxisResult<Option<BoundingBox>>;
}

/// Builds an axes for a device rectangle and a style sheet.
pub type ProjectionFactory = fn(BoundingBox, Arc<StyleSheet>) -> AxisResult<Box<dyn AxesArtist>>;

/// Axes whose x and y axis reuse their tick artists across redraws.
#[derive(Debug)]
pub struct FastAxes {
    bounds: Arc<AxesBox>,
    xaxis: XAxis,
    yaxis: YAxis,
}

impl FastAxes {
    pub const NAME: &'static str = "fastticks";

    pub fn new(bounds: BoundingBox, sheet: Arc<StyleSheet>) -> AxisResult<Self> {
        let bounds = Arc::new(AxesBox::new(bounds)?);
        Ok(Self {
            xaxis: XAxis::new(bounds.clone(), sheet.clone()),
            yaxis: YAxis::new(bounds.clone(), sheet),
            bounds,
        })
    }

    #[must_use]
    pub fn bounds(&self) -> BoundingBox {
        self.bounds.bounds()
    }

    #[must_use]
    pub fn xaxis(&self) -> &XAxis {
        &self.xaxis
    }

    pub fn xaxis_mut(&mut self) -> &mut XAxis {
        &mut self.xaxis
    }

    #[must_use]
    pub fn yaxis(&self) -> &YAxis {
        &self.yaxis
    }

    pub fn yaxis_mut(&mut self) -> &mut YAxis {
        &mut self.yaxis
    }

    /// Applies `sheet` to both axes.
    pub fn set_style_sheet(&mut self, sheet: Arc<StyleSheet>) {
        self.xaxis.set_style_sheet(sheet.clone());
        self.yaxis.set_style_sheet(sheet);
    }

    /// Drops the cached tick artists of both axes.
    pub fn reset_ticks(&mut self) {
        self.xaxis.reset_ticks();
        self.yaxis.reset_ticks();
    }
}

impl AxesArtist for FastAxes {
    fn projection_name(&self) -> &str {
        Self::NAME
    }

    fn draw(&mut self, renderer: &mut dyn Renderer) -> AxisResult<()> {
        self.xaxis.draw(renderer)?;
        self.yaxis.draw(renderer)
    }

    fn tight_bbox(&mut self, renderer: &mut dyn Renderer) -> AxisResult<Option<BoundingBox>> {
        let x = self.xaxis.tight_bbox(renderer)?;
        let y = self.yaxis.tight_bbox(renderer)?;
        Ok(BoundingBox::union_all(x.into_iter().chain(y)))
    }
}

fn create_fast_axes(
    bounds: BoundingBox,
    sheet: Arc<StyleSheet>,
) -> AxisResult<Box<dyn AxesArtist>> {
    Ok(Box::new(FastAxes::new(bounds, sheet)?))
}

/// Name-to-factory table, in registration order.
#[derive(Debug, Clone, Default)]
pub struct ProjectionRegistry {
    factories: IndexMap<String, ProjectionFactory>,
}

impl ProjectionRegistry {
    /// Empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry holding the built-in projections.
    #[must_use]
    pub fn with_defaults() -> Self {
        let mut factories = IndexMap::new();
        factories.insert(FastAxes::NAME.to_owned(), create_fast_axes as ProjectionFactory);
        Self { factories }
    }

    pub fn register(
        &mut self,
        name: impl Into<String>,
        factory: ProjectionFactory,
    ) -> AxisResult<()> {
        let name = name.into();
        if name.is_empty() {
            return Err(AxisError::InvalidData(
                "projection name must not be empty".to_owned(),
            ));
        }
        if self.factories.contains_key(&name) {
            return Err(AxisError::DuplicateProjection(name));
        }
        debug!(projection = %name, "registered projection");
        self.factories.insert(name, factory);
        Ok(())
    }

    pub fn create(
        &self,
        name: &str,
        bounds: BoundingBox,
        sheet: Arc<StyleSheet>,
    ) -> AxisResult<Box<dyn AxesArtist>> {
        let factory = self
            .factories
            .get(name)
            .ok_or_else(|| AxisError::UnknownProjection(name.to_owned()))?;
        factory(bounds, sheet)
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.factories.contains_key(name)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.factories.keys().map(String::as_str)
    }
}
