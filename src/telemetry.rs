//! Telemetry helpers for applications embedding `ecodash-rs`.
//!
//! Tracing setup stays explicit and opt-in: hosts either call
//! `init_default_tracing` or install their own subscriber and filters
//! before constructing a [`crate::api::Dashboard`].

/// Initializes a default `tracing` subscriber.
///
/// Returns `true` when initialization succeeds, `false` when a global
/// subscriber was already set by the host application. The filter comes
/// from the environment, defaulting to `info`.
#[cfg(feature = "telemetry")]
#[must_use]
pub fn init_default_tracing() -> bool {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .compact()
        .try_init()
        .is_ok()
}

/// Without the `telemetry` feature no subscriber is installed; the call
/// reports that by returning `false`.
#[cfg(not(feature = "telemetry"))]
#[must_use]
pub fn init_default_tracing() -> bool {
    false
}
