use crate::{
    blocks::{ScanInfo, ScanTableEntry},
    parsing::{RawScan, SacFile},
};

/// High level handle for a single data-bearing scan within a cycle.
///
/// It holds references into the decoded file: the scan's metadata is shared
/// with the same scan in every other cycle.
#[derive(Debug, Clone, Copy)]
pub struct Scan<'a> {
    raw_scan: &'a RawScan,
    file: &'a SacFile,
}

impl<'a> Scan<'a> {
    /// Construct a new [`Scan`] from the decoded scan and its owning file.
    pub fn new(raw_scan: &'a RawScan, file: &'a SacFile) -> Self {
        Scan { raw_scan, file }
    }

    /// Titles, units and mass axis parameters of this scan.
    pub fn info(&self) -> &'a ScanInfo {
        &self.file.scan_infos[self.raw_scan.info_index]
    }

    /// The scan table entry this scan was decoded from.
    pub fn entry(&self) -> &'a ScanTableEntry {
        &self.file.scan_table[self.raw_scan.table_index]
    }

    /// Position of [`Self::entry`] in the scan table.
    pub fn table_index(&self) -> usize {
        self.raw_scan.table_index
    }

    /// Mass value of every datapoint; same length as [`Self::datapoints`].
    pub fn mass_axis(&self) -> Vec<f64> {
        self.info().mass_axis()
    }

    /// Datapoints with saturated readings replaced by NaN.
    pub fn datapoints(&self) -> &'a [f32] {
        &self.raw_scan.block.datapoints
    }

    /// Detector full-scale range, `10^data_range`.
    pub fn full_scale_range(&self) -> f64 {
        self.raw_scan.block.full_scale_range()
    }

    pub fn data_range(&self) -> i16 {
        self.raw_scan.block.data_range
    }

    /// Datapoint count stored on disk. Not necessarily the real count.
    pub fn declared_datapoints(&self) -> i32 {
        self.raw_scan.block.declared_datapoints
    }

    /// Number of datapoints that were saturated (now NaN).
    pub fn saturated_count(&self) -> usize {
        self.datapoints().iter().filter(|v| v.is_nan()).count()
    }

    pub fn raw(&self) -> &'a RawScan {
        self.raw_scan
    }
}
