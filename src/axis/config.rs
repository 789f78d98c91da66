use std::sync::Arc;

use tracing::debug;

use crate::core::{
    AxisScale, LogFormatter, LogLocator, Locator, MaxNLocator, NullFormatter, NullLocator,
    ScalarFormatter, TickFormatter, TickWhich, ViewInterval,
};
use crate::error::AxisResult;
use crate::style::{
    StyleSheet, TickStyle, resolve_grid_style, resolve_style, resolve_title_style,
};

use super::Axis;
use super::artist::{ArtistId, FontSpec, TextLabel};
use super::label_cache::LabelCache;
use super::orientation::Orientation;
use super::tick_group::TickClass;

/// Minor subdivisions placed between decades on a log axis.
const LOG_MINOR_SUBS: [f64; 8] = [2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0];

impl<O: Orientation> Axis<O> {
    #[must_use]
    pub fn view_interval(&self) -> ViewInterval {
        self.geometry.view
    }

    /// Sets the visible data range; `start > end` inverts the axis.
    pub fn set_view_interval(&mut self, start: f64, end: f64) -> AxisResult<()> {
        let view = ViewInterval::new(start, end)?;
        self.geometry.scale.validate_view(view)?;
        self.geometry.view = view;
        Ok(())
    }

    #[must_use]
    pub fn scale(&self) -> AxisScale {
        self.geometry.scale
    }

    /// Switches the scale and installs its default locators and formatters.
    pub fn set_scale(&mut self, scale: AxisScale) -> AxisResult<()> {
        scale.validate_view(self.geometry.view)?;
        self.geometry.scale = scale;
        match scale {
            AxisScale::Linear => {
                self.major.locator = Box::new(MaxNLocator::default());
                self.major.formatter = Some(Box::new(ScalarFormatter::new()));
                self.minor.locator = Box::new(NullLocator);
                self.minor.formatter = Some(Box::new(NullFormatter));
            }
            AxisScale::Log10 => {
                self.major.locator = Box::new(LogLocator::default());
                self.major.formatter = Some(Box::new(LogFormatter));
                self.minor.locator = Box::new(LogLocator::new(LOG_MINOR_SUBS));
                self.minor.formatter = Some(Box::new(NullFormatter));
            }
        }
        debug!(axis = ?O::KIND, scale = ?scale, "axis scale changed");
        Ok(())
    }

    pub fn set_major_locator(&mut self, locator: impl Locator + 'static) {
        self.major.locator = Box::new(locator);
    }

    pub fn set_minor_locator(&mut self, locator: impl Locator + 'static) {
        self.minor.locator = Box::new(locator);
    }

    /// `None` disables major tick labels.
    pub fn set_major_formatter(&mut self, formatter: Option<Box<dyn TickFormatter>>) {
        self.major.formatter = formatter;
    }

    /// `None` disables minor tick labels.
    pub fn set_minor_formatter(&mut self, formatter: Option<Box<dyn TickFormatter>>) {
        self.minor.formatter = formatter;
    }

    /// Axis title text; empty hides it.
    pub fn set_label_text(&mut self, text: &str) {
        self.title.set_text(text);
    }

    pub fn set_label_visible(&mut self, visible: bool) {
        self.title.set_visible(visible);
    }

    pub fn set_offset_text_visible(&mut self, visible: bool) {
        self.offset_text.set_visible(visible);
    }

    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }

    /// Drops every cached tick style and artist; the next pass rebuilds them.
    pub fn reset_ticks(&mut self) {
        self.minor.cache = None;
        self.major.cache = None;
        debug!(axis = ?O::KIND, "tick artists reset");
    }

    #[must_use]
    pub fn style_sheet(&self) -> &Arc<StyleSheet> {
        &self.sheet
    }

    /// Replaces the style sheet and discards everything derived from the old one.
    pub fn set_style_sheet(&mut self, sheet: Arc<StyleSheet>) {
        self.grid_style = resolve_grid_style(&sheet);
        self.title_style = resolve_title_style(&sheet);
        self.title.set_font(
            FontSpec::new(self.title_style.font_size),
            self.title_style.color,
        );
        let offset_style = resolve_style(&sheet, O::KIND, TickWhich::Major);
        self.offset_text.set_font(
            FontSpec::new(offset_style.label_font_size),
            offset_style.label_color,
        );
        self.sheet = sheet;
        self.reset_ticks();
    }

    /// Resolved style of a tick class; `None` until the class first produced ticks.
    #[must_use]
    pub fn tick_style(&self, which: TickWhich) -> Option<&TickStyle> {
        self.class(which).cache.as_ref().map(|cache| &cache.style)
    }

    #[must_use]
    pub fn label_cache(&self, which: TickWhich) -> Option<&LabelCache> {
        self.class(which).cache.as_ref().map(|cache| &cache.labels)
    }

    #[must_use]
    pub fn label_cache_len(&self, which: TickWhich) -> usize {
        self.label_cache(which).map_or(0, LabelCache::len)
    }

    /// Identities of the near and far marker batches, once built.
    #[must_use]
    pub fn marker_ids(&self, which: TickWhich) -> Option<[ArtistId; 2]> {
        self.class(which)
            .cache
            .as_ref()
            .map(|cache| [cache.markers[0].id(), cache.markers[1].id()])
    }

    #[must_use]
    pub fn title(&self) -> &TextLabel {
        &self.title
    }

    #[must_use]
    pub fn offset_text(&self) -> &TextLabel {
        &self.offset_text
    }

    fn class(&self, which: TickWhich) -> &TickClass {
        match which {
            TickWhich::Minor => &self.minor,
            TickWhich::Major => &self.major,
        }
    }
}
