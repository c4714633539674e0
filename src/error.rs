//! Error types for `.sac` decoding.
//!
//! This module defines the [`Error`] enum which represents all possible failures
//! that can occur when loading or decoding a Quadstar `.sac` file.
//!
//! Every error is terminal for the file being decoded: a `.sac` file is a
//! static artifact, so there is nothing to retry. Detector saturation is *not*
//! an error; out-of-range datapoints are turned into `NaN` by the decoder.
//!
//! # Example
//!
//! ```no_run
//! use quadstar_sac::{Error, Result, Sac};
//!
//! fn process_file(path: &str) -> Result<()> {
//!     match Sac::from_file(path) {
//!         Ok(sac) => {
//!             println!("Decoded {} cycles", sac.n_cycles());
//!             Ok(())
//!         }
//!         Err(Error::TruncatedBuffer { offset, needed, available }) => {
//!             eprintln!("File cut off: {needed} bytes at {offset:#x}, only {available} available");
//!             Err(Error::TruncatedBuffer { offset, needed, available })
//!         }
//!         Err(e) => Err(e),
//!     }
//! }
//! ```

/// Errors that can occur while decoding a `.sac` file.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A read would extend past the end of the loaded buffer.
    ///
    /// This typically indicates a truncated file or a corrupt position field.
    #[error(
        "Truncated buffer: need {needed} bytes at offset {offset:#x}, but buffer holds {available} bytes"
    )]
    TruncatedBuffer {
        /// Absolute offset of the attempted read
        offset: usize,
        /// Number of bytes the read required
        needed: usize,
        /// Total number of bytes in the buffer
        available: usize,
    },

    /// No scan table entry is data-bearing (type `0x11`).
    ///
    /// Cycle timestamps are stored in front of the first data block, so a file
    /// without any data-bearing scan cannot be decoded.
    #[error("No data-bearing scan (type 0x11) found in the scan table")]
    NoDataScanFound,

    /// An effective file offset computed from on-disk positions is negative.
    #[error("Invalid {context} offset: {offset}")]
    InvalidOffset {
        /// What the offset was meant to address
        context: &'static str,
        /// The computed (negative) offset
        offset: i64,
    },

    /// A header counter that must not be negative is negative.
    #[error("Negative {field} in general header: {value}")]
    NegativeCount {
        /// Name of the header field
        field: &'static str,
        /// Raw value found on disk
        value: i64,
    },

    /// An I/O error occurred while loading the file.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Metadata could not be serialized to or parsed from JSON.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// A specialized Result type for `.sac` operations.
///
/// This is defined as `core::result::Result<T, Error>` for convenience.
pub type Result<T> = core::result::Result<T, Error>;
