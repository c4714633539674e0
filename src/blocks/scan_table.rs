// scan_table.rs
use super::{SCAN_TABLE_ENTRY_SIZE, SCAN_TABLE_OFFSET};
use crate::{Error, Result, blocks::common::ByteReader};
use core::fmt;

/// Type tag of a scan table entry.
///
/// Only [`ScanType::Data`] entries carry per-cycle datapoints. Every other tag
/// still occupies a slot in the table but is skipped during data decoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ScanType {
    /// Data-bearing analog scan (`0x11`).
    Data,
    /// Any other tag, kept verbatim.
    Other(u8),
}

impl ScanType {
    /// Tag of data-bearing scans.
    pub const DATA_TAG: u8 = 0x11;

    pub fn from_u8(tag: u8) -> Self {
        match tag {
            Self::DATA_TAG => ScanType::Data,
            other => ScanType::Other(other),
        }
    }

    pub fn to_u8(self) -> u8 {
        match self {
            ScanType::Data => Self::DATA_TAG,
            ScanType::Other(tag) => tag,
        }
    }
}

impl fmt::Display for ScanType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScanType::Data => write!(f, "data (0x11)"),
            ScanType::Other(tag) => write!(f, "other ({tag:#04x})"),
        }
    }
}

/// One 9-byte scan table record.
///
/// `info_position` addresses the scan's [`ScanInfo`](super::ScanInfo) and is the
/// same for every cycle. `data_position` addresses the cycle-0 data block;
/// cycle `n` is found `n * cycle_length` bytes further on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScanTableEntry {
    pub scan_type: ScanType,
    pub info_position: i32,
    pub data_position: i32,
}

impl ScanTableEntry {
    /// Decode the entry at `offset`.
    pub fn from_reader(reader: &ByteReader<'_>, offset: usize) -> Result<Self> {
        reader.bytes(offset, SCAN_TABLE_ENTRY_SIZE)?;
        Ok(Self {
            scan_type: ScanType::from_u8(reader.read(offset)?),
            info_position: reader.read(offset + 1)?,
            data_position: reader.read(offset + 5)?,
        })
    }

    /// Whether this entry carries per-cycle datapoints.
    #[inline]
    pub fn is_data(&self) -> bool {
        self.scan_type == ScanType::Data
    }
}

/// Decode `n_scans` consecutive entries starting at `0xc8`.
///
/// The returned order is the canonical scan order for every cycle.
pub fn read_scan_table(reader: &ByteReader<'_>, n_scans: usize) -> Result<Vec<ScanTableEntry>> {
    // Bounds-check the full table before allocating for it.
    let table_len = n_scans
        .checked_mul(SCAN_TABLE_ENTRY_SIZE)
        .ok_or(Error::TruncatedBuffer {
            offset: SCAN_TABLE_OFFSET,
            needed: usize::MAX,
            available: reader.len(),
        })?;
    reader.bytes(SCAN_TABLE_OFFSET, table_len)?;

    (0..n_scans)
        .map(|k| ScanTableEntry::from_reader(reader, SCAN_TABLE_OFFSET + k * SCAN_TABLE_ENTRY_SIZE))
        .collect()
}

/// Find the first data-bearing entry.
///
/// Its data block anchors the per-cycle timestamp fields.
pub fn find_anchor(entries: &[ScanTableEntry]) -> Result<&ScanTableEntry> {
    entries
        .iter()
        .find(|entry| entry.is_data())
        .ok_or(Error::NoDataScanFound)
}
