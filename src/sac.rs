use crate::{
    Result,
    blocks::{GeneralHeader, ScanInfo, ScanTableEntry},
    cycle::Cycle,
    metadata::SacMetadata,
    parsing::SacFile,
};
use std::path::Path;

/// High level representation of a decoded `.sac` file.
///
/// The struct owns the fully decoded tree and exposes [`Cycle`] handles that
/// borrow from it. Nothing is decoded lazily: once a [`Sac`] exists, every
/// cycle and scan in the file has been read successfully.
#[derive(Debug, Clone, PartialEq)]
pub struct Sac {
    raw: SacFile,
}

impl Sac {
    /// Load and decode a `.sac` file from disk.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let raw = SacFile::parse_from_file(path)?;
        Ok(Sac { raw })
    }

    /// Decode a buffer holding a complete file.
    pub fn from_bytes(data: impl AsRef<[u8]>) -> Result<Self> {
        let raw = SacFile::parse_from_bytes(data.as_ref())?;
        Ok(Sac { raw })
    }

    /// Access the raw decoded structure.
    pub fn raw(&self) -> &SacFile {
        &self.raw
    }

    /// Consume the handle, returning the raw decoded structure.
    pub fn into_raw(self) -> SacFile {
        self.raw
    }

    pub fn header(&self) -> &GeneralHeader {
        &self.raw.header
    }

    /// Every scan table entry, including slots without data.
    pub fn scan_table(&self) -> &[ScanTableEntry] {
        &self.raw.scan_table
    }

    /// Metadata of the data-bearing scans, shared by all cycles.
    pub fn scan_infos(&self) -> &[ScanInfo] {
        &self.raw.scan_infos
    }

    pub fn n_cycles(&self) -> usize {
        self.raw.cycles.len()
    }

    /// Retrieve all cycles in file order.
    pub fn cycles(&self) -> Vec<Cycle<'_>> {
        self.raw
            .cycles
            .iter()
            .map(|raw_cycle| Cycle::new(raw_cycle, &self.raw))
            .collect()
    }

    /// Retrieve a single cycle by its index.
    pub fn cycle(&self, index: usize) -> Option<Cycle<'_>> {
        self.raw
            .cycles
            .get(index)
            .map(|raw_cycle| Cycle::new(raw_cycle, &self.raw))
    }

    /// Build the per-file and per-scan metadata summary.
    pub fn metadata(&self) -> SacMetadata {
        SacMetadata::from_sac(self)
    }
}
