//! File and scan metadata summary.
//!
//! [`SacMetadata`] collects the descriptive fields of a decoded file, without
//! datapoints, into a small structure that can be saved next to the data:
//!
//! ```no_run
//! use quadstar_sac::{Result, Sac};
//!
//! fn export(path: &str) -> Result<()> {
//!     let sac = Sac::from_file(path)?;
//!     let metadata = sac.metadata();
//!     println!("{} cycles by {}", metadata.general.n_cycles, metadata.general.author);
//!
//!     // Requires the `serde` feature.
//!     metadata.save_to_file("measurement.meta.json")?;
//!     Ok(())
//! }
//! ```
//!
//! The `cycles` entry maps one-to-one onto [`Sac::cycles`] and each cycle's
//! [`Cycle::scans`](crate::Cycle::scans).

#[cfg(feature = "serde")]
use crate::Result;
use crate::Sac;

/// File-wide fields taken from the general header.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GeneralMetadata {
    pub software_id: i32,
    /// `"{major}.{minor}"`.
    pub software_version: String,
    /// Measurement start in Unix seconds (UTC); `None` for an invalid date.
    pub measure_uts: Option<f64>,
    pub author: String,
    pub n_cycles: i32,
    pub n_scans: i16,
}

/// Descriptive fields of one scan in one cycle.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScanMetadata {
    /// Absolute time of the owning cycle.
    pub uts: f64,
    pub scan_title: String,
    pub data_title: String,
    pub comment: String,
    pub data_format: u16,
    /// Detector full-scale range.
    pub fsr: f64,
    pub scan_unit: String,
    pub data_unit: String,
}

/// Metadata of a whole `.sac` file.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SacMetadata {
    pub general: GeneralMetadata,
    /// One entry per cycle, each holding one entry per data-bearing scan.
    pub cycles: Vec<Vec<ScanMetadata>>,
}

impl SacMetadata {
    /// Collect the metadata of a decoded file.
    pub fn from_sac(sac: &Sac) -> Self {
        let header = sac.header();
        let general = GeneralMetadata {
            software_id: header.software_id,
            software_version: header.version(),
            measure_uts: header.measure_uts(),
            author: header.author.clone(),
            n_cycles: header.n_cycles,
            n_scans: header.n_scans,
        };

        let cycles = sac
            .cycles()
            .iter()
            .map(|cycle| {
                cycle
                    .scans()
                    .iter()
                    .map(|scan| {
                        let info = scan.info();
                        ScanMetadata {
                            uts: cycle.uts(),
                            scan_title: info.scan_title.clone(),
                            data_title: info.data_title.clone(),
                            comment: info.comment.clone(),
                            data_format: info.data_format,
                            fsr: scan.full_scale_range(),
                            scan_unit: info.scan_unit.clone(),
                            data_unit: info.data_unit.clone(),
                        }
                    })
                    .collect::<Vec<_>>()
            })
            .collect();

        Self { general, cycles }
    }

    /// Serialize to pretty-printed JSON.
    ///
    /// Requires the `serde` feature.
    #[cfg(feature = "serde")]
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Save the metadata as a JSON file.
    ///
    /// Requires the `serde` feature.
    #[cfg(feature = "serde")]
    pub fn save_to_file(&self, path: impl AsRef<std::path::Path>) -> Result<()> {
        std::fs::write(path, self.to_json()?)?;
        Ok(())
    }

    /// Load metadata previously written by [`Self::save_to_file`].
    ///
    /// Requires the `serde` feature.
    #[cfg(feature = "serde")]
    pub fn load_from_file(path: impl AsRef<std::path::Path>) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&json)?)
    }
}
