use crate::{
    parsing::{EpochStamp, RawCycle, SacFile, cycle_datetime},
    scan::Scan,
};
use chrono::{DateTime, Utc};

/// High level handle for one cycle of a `.sac` file.
#[derive(Debug, Clone, Copy)]
pub struct Cycle<'a> {
    raw_cycle: &'a RawCycle,
    file: &'a SacFile,
}

impl<'a> Cycle<'a> {
    /// Construct a new [`Cycle`] from the decoded cycle and its owning file.
    pub fn new(raw_cycle: &'a RawCycle, file: &'a SacFile) -> Self {
        Cycle { raw_cycle, file }
    }

    /// Zero-based position of the cycle in the file.
    pub fn index(&self) -> usize {
        self.raw_cycle.index
    }

    /// Absolute Unix time of the cycle in fractional seconds.
    pub fn uts(&self) -> f64 {
        self.raw_cycle.uts
    }

    /// Offset of this cycle from the file's base epoch.
    pub fn offset(&self) -> EpochStamp {
        self.raw_cycle.offset
    }

    /// Absolute time of the cycle, or `None` if it is out of range for `chrono`.
    pub fn datetime(&self) -> Option<DateTime<Utc>> {
        cycle_datetime(self.file.header.base_epoch, self.raw_cycle.offset)
    }

    /// Data-bearing scans in scan table order.
    pub fn scans(&self) -> Vec<Scan<'a>> {
        self.raw_cycle
            .scans
            .iter()
            .map(|raw_scan| Scan::new(raw_scan, self.file))
            .collect()
    }

    /// First scan whose scanned-axis title matches `title`.
    pub fn scan_by_title(&self, title: &str) -> Option<Scan<'a>> {
        self.scans()
            .into_iter()
            .find(|scan| scan.info().scan_title == title)
    }

    /// First scan whose measured-quantity title matches `title`.
    pub fn scan_by_data_title(&self, title: &str) -> Option<Scan<'a>> {
        self.scans()
            .into_iter()
            .find(|scan| scan.info().data_title == title)
    }

    pub fn raw(&self) -> &'a RawCycle {
        self.raw_cycle
    }
}
