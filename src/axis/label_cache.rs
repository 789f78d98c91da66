use tracing::trace;

use crate::render::{Color, TextHAlign, TextVAlign};
use crate::style::TickStyle;

use super::artist::{FontSpec, TextLabel};

/// Runtime metrics of one label pool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LabelCacheStats {
    /// Requests served by an existing label.
    pub hits: u64,
    /// Labels constructed.
    pub misses: u64,
    pub size: usize,
}

/// Grow-only pool of tick labels addressed by slot index.
///
/// A slot keeps its label for the lifetime of the pool; callers restyle and
/// reposition it on every request instead of building a new one.
#[derive(Debug, Clone)]
pub struct LabelCache {
    labels: Vec<TextLabel>,
    font: Option<FontSpec>,
    label_size: f64,
    label_color: Color,
    hits: u64,
    misses: u64,
}

impl LabelCache {
    #[must_use]
    pub fn new(label_size: f64, label_color: Color) -> Self {
        Self {
            labels: Vec::new(),
            font: None,
            label_size,
            label_color,
            hits: 0,
            misses: 0,
        }
    }

    #[must_use]
    pub fn from_style(style: &TickStyle) -> Self {
        Self::new(style.label_font_size, style.label_color)
    }

    /// Label for slot `index`, extending the pool to `index + 1` when needed.
    ///
    /// Existing labels come back untouched; the alignment only applies to
    /// labels built by this call.
    pub fn get_label(
        &mut self,
        index: usize,
        v_align: TextVAlign,
        h_align: TextHAlign,
    ) -> &mut TextLabel {
        if index < self.labels.len() {
            self.hits = self.hits.saturating_add(1);
        } else {
            let font = *self
                .font
                .get_or_insert_with(|| FontSpec::new(self.label_size));
            let color = self.label_color;
            let grow_by = index + 1 - self.labels.len();
            self.labels.extend(
                std::iter::repeat_with(|| TextLabel::new(font, color, v_align, h_align))
                    .take(grow_by),
            );
            self.misses = self.misses.saturating_add(grow_by as u64);
            trace!(len = self.labels.len(), "tick label pool grew");
        }

        &mut self.labels[index]
    }

    /// Font shared by every label; `None` until the first label is built.
    #[must_use]
    pub fn font(&self) -> Option<FontSpec> {
        self.font
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&TextLabel> {
        self.labels.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &TextLabel> {
        self.labels.iter()
    }

    #[must_use]
    pub fn stats(&self) -> LabelCacheStats {
        LabelCacheStats {
            hits: self.hits,
            misses: self.misses,
            size: self.labels.len(),
        }
    }
}
