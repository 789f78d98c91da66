use serde::{Deserialize, Serialize};

use crate::core::types::ViewInterval;
use crate::error::{AxisError, AxisResult};

/// Mapping from data values to the fraction along an axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum AxisScale {
    #[default]
    Linear,
    Log10,
}

impl AxisScale {
    /// Checks that `view` can be mapped under this scale.
    pub fn validate_view(self, view: ViewInterval) -> AxisResult<()> {
        match self {
            Self::Linear => Ok(()),
            Self::Log10 => {
                if view.start <= 0.0 || view.end <= 0.0 {
                    return Err(AxisError::InvalidData(
                        "log scale view interval must be > 0".to_owned(),
                    ));
                }
                Ok(())
            }
        }
    }

    /// Fraction of the way from `view.start` to `view.end`; inverted views map
    /// `start` to 0 regardless of ordering.
    #[must_use]
    pub fn to_fraction(self, value: f64, view: ViewInterval) -> f64 {
        match self {
            Self::Linear => (value - view.start) / (view.end - view.start),
            Self::Log10 => {
                let start = view.start.log10();
                let end = view.end.log10();
                (value.log10() - start) / (end - start)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::AxisScale;
    use crate::core::types::ViewInterval;

    #[test]
    fn linear_fraction_respects_inverted_views() {
        let view = ViewInterval::new(10.0, 0.0).expect("valid view");
        assert_relative_eq!(AxisScale::Linear.to_fraction(10.0, view), 0.0);
        assert_relative_eq!(AxisScale::Linear.to_fraction(2.5, view), 0.75);
    }

    #[test]
    fn log_fraction_spaces_decades_evenly() {
        let view = ViewInterval::new(1.0, 1_000.0).expect("valid view");
        assert_relative_eq!(AxisScale::Log10.to_fraction(10.0, view), 1.0 / 3.0, epsilon = 1e-12);
        assert_relative_eq!(AxisScale::Log10.to_fraction(100.0, view), 2.0 / 3.0, epsilon = 1e-12);
    }

    #[test]
    fn log_scale_rejects_non_positive_views() {
        let view = ViewInterval::new(-1.0, 10.0).expect("valid view");
        assert!(AxisScale::Log10.validate_view(view).is_err());
        assert!(AxisScale::Linear.validate_view(view).is_ok());
    }
}
