// scan_info.rs
use super::SCAN_INFO_SIZE;
use crate::{Result, blocks::common::ByteReader};

/// Scan Info - per-scan metadata shared by every cycle.
///
/// # Structure (137 bytes at `info_position`):
/// - `+0x00` data_format (u16, meaning unknown, kept verbatim)
/// - `+0x02` data_title (13 bytes), `+0x0f` data_unit (14 bytes)
/// - `+0x1d` scan_title (13 bytes), `+0x2a` scan_unit (14 bytes)
/// - `+0x38` comment (66 bytes)
/// - `+0x7a` first_mass (f32), `+0x7e` scan_width (u16), `+0x80` values_per_mass (u8)
/// - `+0x81` zoom_start (f32), `+0x85` zoom_end (f32)
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScanInfo {
    pub data_format: u16,
    /// Title of the measured quantity (e.g. "Ion Current").
    pub data_title: String,
    pub data_unit: String,
    /// Title of the scanned axis (e.g. "Mass").
    pub scan_title: String,
    pub scan_unit: String,
    pub comment: String,
    pub first_mass: f32,
    /// Number of whole mass units covered by the scan.
    pub scan_width: u16,
    pub values_per_mass: u8,
    pub zoom_start: f32,
    pub zoom_end: f32,
}

impl ScanInfo {
    /// Decode the record at `offset`.
    pub fn from_reader(reader: &ByteReader<'_>, offset: usize) -> Result<Self> {
        reader.bytes(offset, SCAN_INFO_SIZE)?;

        Ok(Self {
            data_format: reader.read(offset)?,
            data_title: reader.read_string(offset + 0x02, 13)?,
            data_unit: reader.read_string(offset + 0x0f, 14)?,
            scan_title: reader.read_string(offset + 0x1d, 13)?,
            scan_unit: reader.read_string(offset + 0x2a, 14)?,
            comment: reader.read_string(offset + 0x38, 66)?,
            first_mass: reader.read(offset + 0x7a)?,
            scan_width: reader.read(offset + 0x7e)?,
            values_per_mass: reader.read(offset + 0x80)?,
            zoom_start: reader.read(offset + 0x81)?,
            zoom_end: reader.read(offset + 0x85)?,
        })
    }

    /// Number of datapoints every cycle stores for this scan.
    ///
    /// This, not the count stored in the data block, sizes the datapoint read.
    #[inline]
    pub fn n_values(&self) -> usize {
        usize::from(self.scan_width) * usize::from(self.values_per_mass)
    }

    /// Mass value of every datapoint.
    ///
    /// Evenly spaced from `first_mass` in steps of `1 / values_per_mass`,
    /// covering `[first_mass, first_mass + scan_width)`.
    pub fn mass_axis(&self) -> Vec<f64> {
        let n = self.n_values();
        if n == 0 {
            return Vec::new();
        }
        let start = f64::from(self.first_mass);
        let step = f64::from(self.scan_width) / n as f64;
        (0..n).map(|i| start + i as f64 * step).collect()
    }
}
