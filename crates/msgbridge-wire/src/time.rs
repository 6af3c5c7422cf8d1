//! Time and duration field types
//!
//! Both travel on the wire as two consecutive 4-byte little-endian fields,
//! seconds first and nanoseconds second.

use serde::{Deserialize, Serialize};

const NANOS_PER_SEC: u64 = 1_000_000_000;

/// A point in time as seconds and nanoseconds since the epoch
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct Time {
    pub secs: u32,
    pub nsecs: u32,
}

/// A span of time as seconds and nanoseconds
///
/// Both fields are unsigned on the wire, like [`Time`].
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct Duration {
    pub secs: u32,
    pub nsecs: u32,
}

/// `(secs, nsecs)` for `nanos`, or `None` if the seconds overflow `u32`
fn split_nanos(nanos: u64) -> Option<(u32, u32)> {
    let secs = u32::try_from(nanos / NANOS_PER_SEC).ok()?;
    Some((secs, (nanos % NANOS_PER_SEC) as u32))
}

fn join_nanos(secs: u32, nsecs: u32) -> u64 {
    u64::from(secs) * NANOS_PER_SEC + u64::from(nsecs)
}

impl Time {
    pub const ZERO: Time = Time { secs: 0, nsecs: 0 };

    pub const fn new(secs: u32, nsecs: u32) -> Self {
        Self { secs, nsecs }
    }

    pub fn is_zero(&self) -> bool {
        self.secs == 0 && self.nsecs == 0
    }

    /// Build a time from total nanoseconds, or `None` if the seconds overflow
    pub fn from_nanos(nanos: u64) -> Option<Self> {
        split_nanos(nanos).map(|(secs, nsecs)| Self { secs, nsecs })
    }

    pub fn as_nanos(&self) -> u64 {
        join_nanos(self.secs, self.nsecs)
    }

    pub fn as_secs_f64(&self) -> f64 {
        f64::from(self.secs) + f64::from(self.nsecs) / 1e9
    }

    /// Carry whole seconds out of `nsecs`
    pub fn normalized(&self) -> Option<Self> {
        Self::from_nanos(self.as_nanos())
    }

    pub fn checked_add(&self, d: Duration) -> Option<Self> {
        Self::from_nanos(self.as_nanos().checked_add(d.as_nanos())?)
    }

    pub fn checked_sub(&self, d: Duration) -> Option<Self> {
        Self::from_nanos(self.as_nanos().checked_sub(d.as_nanos())?)
    }

    /// Span from `earlier` to `self`, or `None` if `earlier` is later
    pub fn duration_since(&self, earlier: Time) -> Option<Duration> {
        Duration::from_nanos(self.as_nanos().checked_sub(earlier.as_nanos())?)
    }
}

impl Duration {
    pub const ZERO: Duration = Duration { secs: 0, nsecs: 0 };

    pub const fn new(secs: u32, nsecs: u32) -> Self {
        Self { secs, nsecs }
    }

    pub fn is_zero(&self) -> bool {
        self.secs == 0 && self.nsecs == 0
    }

    /// Build a duration from total nanoseconds, or `None` if the seconds overflow
    pub fn from_nanos(nanos: u64) -> Option<Self> {
        split_nanos(nanos).map(|(secs, nsecs)| Self { secs, nsecs })
    }

    pub fn as_nanos(&self) -> u64 {
        join_nanos(self.secs, self.nsecs)
    }

    pub fn as_secs_f64(&self) -> f64 {
        f64::from(self.secs) + f64::from(self.nsecs) / 1e9
    }

    pub fn normalized(&self) -> Option<Self> {
        Self::from_nanos(self.as_nanos())
    }

    pub fn checked_add(&self, other: Duration) -> Option<Self> {
        Self::from_nanos(self.as_nanos().checked_add(other.as_nanos())?)
    }

    pub fn checked_sub(&self, other: Duration) -> Option<Self> {
        Self::from_nanos(self.as_nanos().checked_sub(other.as_nanos())?)
    }
}
