//! Tick locators: candidate tick positions for a view interval.
//!
//! Locators may return positions outside the view (most "nice number"
//! locators extend one step past each bound); the axis filters them.

use std::fmt;

use tracing::warn;

use crate::core::types::ViewInterval;

/// Upper bound on positions produced by one locator call.
pub const MAX_TICKS: usize = 1000;

const NICE_STEPS: [f64; 5] = [1.0, 2.0, 2.5, 5.0, 10.0];

/// Produces ordered candidate tick positions for a view interval.
pub trait Locator: fmt::Debug {
    fn tick_values(&self, view: ViewInterval) -> Vec<f64>;
}

/// Produces no ticks.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullLocator;

impl Locator for NullLocator {
    fn tick_values(&self, _view: ViewInterval) -> Vec<f64> {
        Vec::new()
    }
}

/// Fixed list of positions, independent of the view.
#[derive(Debug, Clone, Default)]
pub struct FixedLocator {
    locs: Vec<f64>,
}

impl FixedLocator {
    #[must_use]
    pub fn new(locs: impl Into<Vec<f64>>) -> Self {
        let mut locs = locs.into();
        locs.retain(|value| value.is_finite());
        locs.sort_by(f64::total_cmp);
        Self { locs }
    }
}

impl Locator for FixedLocator {
    fn tick_values(&self, _view: ViewInterval) -> Vec<f64> {
        self.locs.clone()
    }
}

/// `numticks` evenly spaced positions spanning the view, bounds included.
#[derive(Debug, Clone, Copy)]
pub struct LinearLocator {
    pub numticks: usize,
}

impl LinearLocator {
    #[must_use]
    pub const fn new(numticks: usize) -> Self {
        Self { numticks }
    }
}

impl Locator for LinearLocator {
    fn tick_values(&self, view: ViewInterval) -> Vec<f64> {
        evenly_spaced(view.sorted(), self.numticks.min(MAX_TICKS))
    }
}

/// Every integer multiple of `base` covering the view.
#[derive(Debug, Clone, Copy)]
pub struct MultipleLocator {
    pub base: f64,
}

impl MultipleLocator {
    #[must_use]
    pub const fn new(base: f64) -> Self {
        Self { base }
    }
}

impl Locator for MultipleLocator {
    fn tick_values(&self, view: ViewInterval) -> Vec<f64> {
        if !self.base.is_finite() || self.base <= 0.0 {
            return Vec::new();
        }
        multiples_covering(view, self.base)
    }
}

/// At most `nbins` intervals using 1-2-2.5-5-10 steps.
#[derive(Debug, Clone, Copy)]
pub struct MaxNLocator {
    pub nbins: usize,
}

impl MaxNLocator {
    #[must_use]
    pub const fn new(nbins: usize) -> Self {
        Self { nbins }
    }

    /// Step this locator would use for `view`, if any.
    #[must_use]
    pub fn step(&self, view: ViewInterval) -> Option<f64> {
        nice_step(view.span(), self.nbins.max(1))
    }
}

impl Default for MaxNLocator {
    fn default() -> Self {
        Self::new(9)
    }
}

impl Locator for MaxNLocator {
    fn tick_values(&self, view: ViewInterval) -> Vec<f64> {
        match self.step(view) {
            Some(step) => multiples_covering(view, step),
            None => Vec::new(),
        }
    }
}

/// Subdivides the step of a `MaxNLocator` into `ndivs` minor intervals.
///
/// When `ndivs` is `None` the division count follows the major step: 5 for
/// steps with a 1 or 5 mantissa, 4 otherwise.
#[derive(Debug, Clone, Copy, Default)]
pub struct AutoMinorLocator {
    pub ndivs: Option<usize>,
    pub major: MaxNLocator,
}

impl AutoMinorLocator {
    #[must_use]
    pub fn new(ndivs: Option<usize>) -> Self {
        Self {
            ndivs,
            major: MaxNLocator::default(),
        }
    }
}

impl Locator for AutoMinorLocator {
    fn tick_values(&self, view: ViewInterval) -> Vec<f64> {
        let Some(major_step) = self.major.step(view) else {
            return Vec::new();
        };
        let ndivs = self.ndivs.unwrap_or_else(|| {
            let mantissa = major_step / 10_f64.powf(major_step.log10().floor());
            if [1.0, 5.0, 10.0].iter().any(|m| (mantissa - m).abs() < 1e-9) {
                5
            } else {
                4
            }
        });
        if ndivs == 0 {
            return Vec::new();
        }
        multiples_covering(view, major_step / ndivs as f64)
    }
}

/// Decade positions `sub * 10^k`, for log-scaled axes.
#[derive(Debug, Clone)]
pub struct LogLocator {
    pub subs: Vec<f64>,
}

impl LogLocator {
    #[must_use]
    pub fn new(subs: impl Into<Vec<f64>>) -> Self {
        Self { subs: subs.into() }
    }
}

impl Default for LogLocator {
    fn default() -> Self {
        Self::new(vec![1.0])
    }
}

impl Locator for LogLocator {
    fn tick_values(&self, view: ViewInterval) -> Vec<f64> {
        let (low, high) = view.sorted();
        if low <= 0.0 || !high.is_finite() {
            return Vec::new();
        }

        let min_exp = low.log10().floor() as i32;
        let max_exp = high.log10().ceil() as i32;
        let mut ticks = Vec::new();
        for exp in min_exp..=max_exp {
            let decade = 10_f64.powi(exp);
            for sub in &self.subs {
                ticks.push(decade * sub);
                if ticks.len() >= MAX_TICKS {
                    warn!(
                        limit = MAX_TICKS,
                        "log locator produced too many ticks; truncating"
                    );
                    return ticks;
                }
            }
        }
        ticks.sort_by(f64::total_cmp);
        ticks
    }
}

pub(crate) fn evenly_spaced(range: (f64, f64), tick_count: usize) -> Vec<f64> {
    if tick_count == 0 {
        return Vec::new();
    }

    if tick_count == 1 {
        return vec![range.0];
    }

    let span = range.1 - range.0;
    let denominator = (tick_count - 1) as f64;
    (0..tick_count)
        .map(|index| {
            let ratio = (index as f64) / denominator;
            range.0 + span * ratio
        })
        .collect()
}

fn nice_step(span: f64, nbins: usize) -> Option<f64> {
    if !span.is_finite() || span <= 0.0 {
        return None;
    }
    let raw = span / nbins as f64;
    let scale = 10_f64.powf(raw.log10().floor());
    let mantissa = raw / scale;
    let factor = NICE_STEPS
        .iter()
        .copied()
        .find(|step| *step >= mantissa - 1e-9)
        .unwrap_or(10.0);
    Some(factor * scale)
}

fn multiples_covering(view: ViewInterval, step: f64) -> Vec<f64> {
    let (low, high) = view.sorted();
    let first = (low / step).floor() as i64;
    let last = (high / step).ceil() as i64;
    let count = last.saturating_sub(first).saturating_add(1).max(0) as usize;
    if count > MAX_TICKS {
        warn!(
            count,
            limit = MAX_TICKS,
            step,
            "locator would exceed tick limit; truncating"
        );
    }
    (first..=last)
        .take(MAX_TICKS)
        .map(|multiple| multiple as f64 * step)
        .collect()
}
