#![forbid(unsafe_code)]

//! # quadstar-sac
//!
//! A Rust library for reading Quadstar 32-bit analog data (`.sac`) files.
//!
//! `.sac` files are written by the Quadstar 32-bit instrument-control software
//! of Pfeiffer quadrupole mass spectrometers. The format is undocumented; the
//! layout implemented here was reverse engineered. A file holds a general
//! header, a table of scan descriptors, and a number of *cycles*: repeated
//! measurement sweeps laid out at a fixed byte stride, each containing one
//! block of datapoints per data-bearing scan.
//!
//! ## Features
//!
//! - **Decoding**: The whole file is decoded into an immutable tree of cycles
//!   and scans in one call; a file either decodes completely or not at all
//! - **Timestamps**: Absolute cycle times rebuilt from the split base epoch and
//!   per-cycle offsets
//! - **Saturation**: Readings beyond the detector's full-scale range become `NaN`
//! - **Metadata**: A JSON-serializable summary of the file and its scans
//!
//! ## Quick Start
//!
//! ```no_run
//! use quadstar_sac::{Result, Sac};
//!
//! fn main() -> Result<()> {
//!     let sac = Sac::from_file("measurement.sac")?;
//!     println!("Recorded by {} on {:?}", sac.header().author, sac.header().measured_at());
//!
//!     for cycle in sac.cycles() {
//!         for scan in cycle.scans() {
//!             let masses = scan.mass_axis();
//!             let values = scan.datapoints();
//!             println!(
//!                 "cycle {} @ {:.3}: {} ({} points from m/z {})",
//!                 cycle.index(),
//!                 cycle.uts(),
//!                 scan.info().data_title,
//!                 values.len(),
//!                 masses[0]
//!             );
//!         }
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Module Overview
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`blocks`] | Low-level `.sac` structures and the bounds-checked byte reader |
//! | [`parsing`] | Cycle decoding and timestamp reconstruction |
//! | [`metadata`] | File and scan metadata summary |
//! | [`error`] | Error types and [`Result`] alias |
//!
//! ## Error Handling
//!
//! All fallible operations return [`Result<T>`], which is an alias for
//! `std::result::Result<T, Error>`. Reads past the end of the file, a scan
//! table without any data-bearing scan, negative counters, and negative
//! offsets are all reported as errors; no partially decoded file is returned.

pub mod blocks;
pub mod parsing;

mod cycle;
mod sac;
mod scan;

pub mod error;
pub mod metadata;

// Re-export commonly used types at the crate root
pub use blocks::{GeneralHeader, ScanInfo, ScanTableEntry, ScanType};
pub use cycle::Cycle;
pub use error::{Error, Result};
pub use metadata::SacMetadata;
pub use parsing::EpochStamp;
pub use sac::Sac;
pub use scan::Scan;
