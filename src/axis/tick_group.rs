use std::marker::PhantomData;

use tracing::{debug, trace};

use crate::core::{Locator, TickFormatter, TickWhich, TransformAnchor};
use crate::style::{StyleSheet, TickStyle, resolve_style};

use super::artist::TickMarkers;
use super::geometry::AxisGeometry;
use super::label_cache::LabelCache;
use super::orientation::Orientation;

/// Locator, formatter and lazily built artists of one tick class.
#[derive(Debug)]
pub(crate) struct TickClass {
    pub(crate) which: TickWhich,
    pub(crate) locator: Box<dyn Locator>,
    pub(crate) formatter: Option<Box<dyn TickFormatter>>,
    pub(crate) cache: Option<TickClassCache>,
}

/// Artists built on the first pass that produced ticks of a class.
#[derive(Debug)]
pub(crate) struct TickClassCache {
    pub(crate) style: TickStyle,
    pub(crate) markers: [TickMarkers; 2],
    pub(crate) labels: LabelCache,
}

impl TickClassCache {
    fn build<O: Orientation>(sheet: &StyleSheet, which: TickWhich) -> Self {
        let style = resolve_style(sheet, O::KIND, which);
        debug!(axis = ?O::KIND, which = ?which, direction = ?style.direction, "built tick artists");
        Self {
            markers: [
                TickMarkers::new(&style, TransformAnchor::Tick1, style.markers[0]),
                TickMarkers::new(&style, TransformAnchor::Tick2, style.markers[1]),
            ],
            labels: LabelCache::from_style(&style),
            style,
        }
    }
}

impl TickClass {
    pub(crate) fn new(
        which: TickWhich,
        locator: Box<dyn Locator>,
        formatter: Option<Box<dyn TickFormatter>>,
    ) -> Self {
        Self {
            which,
            locator,
            formatter,
            cache: None,
        }
    }

    fn next_group<'a, O: Orientation>(
        &'a mut self,
        geometry: &AxisGeometry,
        sheet: &StyleSheet,
    ) -> Option<TickGroup<'a>> {
        let mut positions = self.locator.tick_values(geometry.view);
        geometry.view.retain_visible(&mut positions);
        if positions.is_empty() {
            trace!(axis = ?O::KIND, which = ?self.which, "no visible ticks");
            return None;
        }

        let which = self.which;
        let cache = self
            .cache
            .get_or_insert_with(|| TickClassCache::build::<O>(sheet, which));
        for markers in &mut cache.markers {
            markers.update::<O>(&positions, geometry);
        }

        let TickClassCache {
            style,
            markers,
            labels,
        } = cache;
        Some(TickGroup {
            which,
            positions,
            markers,
            style,
            labels,
            formatter: self.formatter.as_deref_mut(),
        })
    }
}

/// Visible ticks of one class, with the artists that draw them.
///
/// Marker coordinates are already updated for `positions`; labels are
/// requested from `labels` by the consumer.
#[derive(Debug)]
pub struct TickGroup<'a> {
    pub which: TickWhich,
    pub positions: Vec<f64>,
    pub markers: &'a [TickMarkers; 2],
    pub style: &'a TickStyle,
    pub labels: &'a mut LabelCache,
    /// `None` when the class has no formatter and draws no labels.
    pub formatter: Option<&'a mut (dyn TickFormatter + 'static)>,
}

/// Lazy minor-then-major walk over the tick classes of an axis.
///
/// A class whose locator yields nothing inside the view is skipped without
/// building any artist.
#[derive(Debug)]
pub struct TickGroups<'a, O: Orientation> {
    geometry: &'a AxisGeometry,
    sheet: &'a StyleSheet,
    pending: [Option<&'a mut TickClass>; 2],
    cursor: usize,
    orientation: PhantomData<O>,
}

impl<'a, O: Orientation> TickGroups<'a, O> {
    pub(crate) fn new(
        geometry: &'a AxisGeometry,
        sheet: &'a StyleSheet,
        minor: &'a mut TickClass,
        major: &'a mut TickClass,
    ) -> Self {
        Self {
            geometry,
            sheet,
            pending: [Some(minor), Some(major)],
            cursor: 0,
            orientation: PhantomData,
        }
    }
}

impl<'a, O: Orientation> Iterator for TickGroups<'a, O> {
    type Item = TickGroup<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(slot) = self.pending.get_mut(self.cursor) {
            self.cursor += 1;
            let group = slot
                .take()
                .and_then(|class| class.next_group::<O>(self.geometry, self.sheet));
            if group.is_some() {
                return group;
            }
        }
        None
    }
}
