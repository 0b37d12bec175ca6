//! Time abstraction for testability.
//!
//! Access-token expiry is a comparison between "now" and an epoch timestamp
//! reported by the API. This module provides a [`Clock`] trait that allows
//! injecting mock clocks in tests while using the real system clock in
//! production, plus [`epoch_seconds`] to bring a [`SystemTime`] into the
//! epoch domain the API speaks.

use std::time::{SystemTime, UNIX_EPOCH};

/// Abstraction over system time for testability.
///
/// Implementations provide the current time, allowing tests to inject
/// controlled time values instead of relying on actual system time.
///
/// # Example
///
/// ```
/// use squadcast::time::{Clock, SystemClock};
///
/// let clock = SystemClock;
/// let now = clock.now();
/// assert!(now >= std::time::SystemTime::UNIX_EPOCH);
/// ```
pub trait Clock: Send + Sync {
    /// Returns the current time.
    fn now(&self) -> SystemTime;
}

/// Production clock using actual system time.
///
/// This is the default clock implementation that delegates to
/// [`SystemTime::now()`].
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> SystemTime {
        SystemTime::now()
    }
}

/// Converts a [`SystemTime`] to whole seconds since the Unix epoch.
///
/// Token expiry timestamps are epoch seconds, so expiry checks happen in
/// this domain. Pre-epoch instants clamp to 0 to keep the comparison total.
#[must_use]
pub fn epoch_seconds(time: SystemTime) -> i64 {
    time.duration_since(UNIX_EPOCH)
        .map_or(0, |d| i64::try_from(d.as_secs()).unwrap_or(i64::MAX))
}
