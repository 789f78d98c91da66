//! Telemetry helpers for hosts embedding `fast-axis`.
//!
//! The crate only emits `tracing` events: artist construction and resets at
//! `debug`, per-redraw tick groups and label-pool growth at `trace`, fail-soft
//! style fallbacks at `warn`. Hosts either call one of the helpers below or
//! install their own subscriber.

/// Filter applied when `RUST_LOG` is unset.
pub const DEFAULT_FILTER: &str = "warn";

/// Installs a compact `tracing` subscriber filtered by `RUST_LOG`, falling
/// back to [`DEFAULT_FILTER`].
#[must_use]
pub fn init_default_tracing() -> bool {
    init_tracing(DEFAULT_FILTER)
}

/// Installs a compact `tracing` subscriber when the `telemetry` feature is enabled.
///
/// `RUST_LOG` wins over `fallback_filter`. Returns `false` when the feature is
/// disabled, the filter does not parse, or the host already set a global
/// subscriber.
#[must_use]
pub fn init_tracing(fallback_filter: &str) -> bool {
    #[cfg(feature = "telemetry")]
    {
        let filter = match tracing_subscriber::EnvFilter::try_from_default_env() {
            Ok(filter) => filter,
            Err(_) => match tracing_subscriber::EnvFilter::try_new(fallback_filter) {
                Ok(filter) => filter,
                Err(_) => return false,
            },
        };
        return tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(true)
            .compact()
            .try_init()
            .is_ok();
    }

    #[cfg(not(feature = "telemetry"))]
    {
        let _ = fallback_filter;
        false
    }
}

#[cfg(all(test, not(feature = "telemetry")))]
mod tests {
    use super::{init_default_tracing, init_tracing};

    #[test]
    fn helpers_are_inert_without_the_feature() {
        assert!(!init_default_tracing());
        assert!(!init_tracing("fast_axis=trace"));
    }
}
