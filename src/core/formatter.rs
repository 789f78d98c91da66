//! Tick formatters: position + index to label text.

use std::fmt;
use std::sync::Arc;

const MAX_DECIMALS: usize = 10;

pub type TickLabelFn = Arc<dyn Fn(f64, usize) -> String + Send + Sync + 'static>;

/// Converts a tick position and its index among visible ticks into label text.
///
/// An empty string suppresses the label for that position.
pub trait TickFormatter: fmt::Debug {
    /// Called with every visible position of a group before any `format` call.
    fn set_locs(&mut self, _locs: &[f64]) {}

    fn format(&self, value: f64, index: usize) -> String;

    /// Common offset/scale summary shown next to the axis; empty when unused.
    fn offset_text(&self) -> String {
        String::new()
    }
}

/// Suppresses every label.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullFormatter;

impl TickFormatter for NullFormatter {
    fn format(&self, _value: f64, _index: usize) -> String {
        String::new()
    }
}

/// Returns the label at the tick index; empty past the end.
#[derive(Debug, Clone, Default)]
pub struct FixedFormatter {
    labels: Vec<String>,
}

impl FixedFormatter {
    #[must_use]
    pub fn new<I, S>(labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            labels: labels.into_iter().map(Into::into).collect(),
        }
    }
}

impl TickFormatter for FixedFormatter {
    fn format(&self, _value: f64, index: usize) -> String {
        self.labels.get(index).cloned().unwrap_or_default()
    }
}

/// Delegates to a host closure.
#[derive(Clone)]
pub struct FuncFormatter {
    func: TickLabelFn,
}

impl FuncFormatter {
    #[must_use]
    pub fn new<F>(func: F) -> Self
    where
        F: Fn(f64, usize) -> String + Send + Sync + 'static,
    {
        Self {
            func: Arc::new(func),
        }
    }
}

impl fmt::Debug for FuncFormatter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FuncFormatter").finish_non_exhaustive()
    }
}

impl TickFormatter for FuncFormatter {
    fn format(&self, value: f64, index: usize) -> String {
        (self.func)(value, index)
    }
}

/// Plain decimal labels with step-derived precision and an optional offset.
///
/// When every visible position shares a magnitude at least
/// `10^offset_threshold` times larger than their span, the common leading
/// part is moved into `offset_text` and labels show the remainder.
#[derive(Debug, Clone)]
pub struct ScalarFormatter {
    pub use_offset: bool,
    pub offset_threshold: i32,
    offset: f64,
    decimals: usize,
}

impl ScalarFormatter {
    #[must_use]
    pub fn new() -> Self {
        Self {
            use_offset: true,
            offset_threshold: 4,
            offset: 0.0,
            decimals: 0,
        }
    }

    #[must_use]
    pub fn with_offset(mut self, use_offset: bool) -> Self {
        self.use_offset = use_offset;
        self
    }

    #[must_use]
    pub fn offset(&self) -> f64 {
        self.offset
    }

    fn compute_offset(&self, locs: &[f64]) -> f64 {
        let mut finite = locs.iter().copied().filter(|value| value.is_finite());
        let Some(first) = finite.next() else {
            return 0.0;
        };
        let (low, high) = finite.fold((first, first), |(low, high), value| {
            (low.min(value), high.max(value))
        });
        let span = high - low;
        if span <= 0.0 || low == 0.0 || high == 0.0 || low.signum() != high.signum() {
            return 0.0;
        }

        let abs_min = low.abs().min(high.abs());
        let span_magnitude = span.log10().floor();
        if abs_min.log10().floor() - span_magnitude < f64::from(self.offset_threshold) {
            return 0.0;
        }

        let unit = 10_f64.powf(span_magnitude + 1.0);
        if low > 0.0 {
            (low / unit).floor() * unit
        } else {
            (high / unit).ceil() * unit
        }
    }
}

impl Default for ScalarFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl TickFormatter for ScalarFormatter {
    fn set_locs(&mut self, locs: &[f64]) {
        self.offset = if self.use_offset {
            self.compute_offset(locs)
        } else {
            0.0
        };
        let step = tick_step_hint_from_values(locs);
        self.decimals = if step > 0.0 {
            decimals_for(step)
        } else {
            locs.first()
                .map(|value| decimals_for(value - self.offset))
                .unwrap_or(0)
        };
    }

    fn format(&self, value: f64, _index: usize) -> String {
        let shifted = value - self.offset;
        let text = format!("{:.*}", self.decimals, shifted);
        if text.starts_with('-') && text[1..].chars().all(|c| c == '0' || c == '.') {
            return text[1..].to_owned();
        }
        text
    }

    fn offset_text(&self) -> String {
        if self.offset == 0.0 {
            String::new()
        } else {
            format!("{:+}", self.offset)
        }
    }
}

/// `10^k` labels for decades, plain values elsewhere.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogFormatter;

impl TickFormatter for LogFormatter {
    fn format(&self, value: f64, _index: usize) -> String {
        if !value.is_finite() || value <= 0.0 {
            return String::new();
        }
        let exponent = value.log10().round();
        if (10_f64.powf(exponent) - value).abs() <= value * 1e-9 {
            format!("10^{}", exponent as i32)
        } else {
            format!("{value}")
        }
    }
}

pub(crate) fn tick_step_hint_from_values(values: &[f64]) -> f64 {
    if values.len() <= 1 {
        return 0.0;
    }

    let mut best = f64::INFINITY;
    for pair in values.windows(2) {
        let step = (pair[1] - pair[0]).abs();
        if step.is_finite() && step > 0.0 {
            best = best.min(step);
        }
    }

    if best.is_finite() { best } else { 0.0 }
}

fn decimals_for(value: f64) -> usize {
    let magnitude = value.abs();
    if !magnitude.is_finite() || magnitude == 0.0 {
        return 0;
    }
    for decimals in 0..=MAX_DECIMALS {
        let scaled = magnitude * 10_f64.powi(decimals as i32);
        if (scaled - scaled.round()).abs() <= 1e-6 * scaled.max(1.0) {
            return decimals;
        }
    }
    MAX_DECIMALS
}
