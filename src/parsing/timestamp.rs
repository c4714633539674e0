//! Reconstruction of cycle timestamps.
//!
//! Absolute times are stored as a file-wide base epoch in the general header
//! plus a per-cycle offset stored just in front of the first data block of the
//! cycle. Both are split into whole seconds (u32) followed by tenths of a
//! millisecond (u16).

use crate::{Result, blocks::ByteReader};
use chrono::{DateTime, Utc};

const NANOS_PER_TENTH_MS: i64 = 100_000;
const NANOS_PER_SECOND: i64 = 1_000_000_000;

/// A time split into whole seconds and tenths of a millisecond.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EpochStamp {
    pub seconds: u32,
    pub tenths_ms: u16,
}

impl EpochStamp {
    /// On-disk size: u32 seconds followed by u16 tenths of ms.
    pub const SIZE: usize = 6;

    pub fn new(seconds: u32, tenths_ms: u16) -> Self {
        Self { seconds, tenths_ms }
    }

    /// Decode the 6-byte stamp at `offset`.
    pub fn from_reader(reader: &ByteReader<'_>, offset: usize) -> Result<Self> {
        Ok(Self {
            seconds: reader.read(offset)?,
            tenths_ms: reader.read(offset + 4)?,
        })
    }

    /// Fractional seconds.
    pub fn as_secs_f64(&self) -> f64 {
        let millis = f64::from(self.tenths_ms) / 10.0;
        f64::from(self.seconds) + millis / 1000.0
    }

    fn as_nanos(&self) -> i64 {
        i64::from(self.seconds) * NANOS_PER_SECOND + i64::from(self.tenths_ms) * NANOS_PER_TENTH_MS
    }
}

/// Absolute Unix time of a cycle, in fractional seconds.
#[inline]
pub fn cycle_uts(base: EpochStamp, offset: EpochStamp) -> f64 {
    base.as_secs_f64() + offset.as_secs_f64()
}

/// Absolute time of a cycle, computed exactly from the integer fields.
pub fn cycle_datetime(base: EpochStamp, offset: EpochStamp) -> Option<DateTime<Utc>> {
    let total = base.as_nanos() + offset.as_nanos();
    let nanos = u32::try_from(total.rem_euclid(NANOS_PER_SECOND)).ok()?;
    DateTime::from_timestamp(total.div_euclid(NANOS_PER_SECOND), nanos)
}
