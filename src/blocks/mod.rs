// src/blocks/mod.rs

// ============================================================================
// Layout Constants (internal use only)
// ============================================================================
// Fixed positions and sizes of the `.sac` structures. Everything past the scan
// table is addressed through positions stored in the table itself.

/// General header size (200 bytes) - ends where the scan table starts.
pub(crate) const GENERAL_HEADER_SIZE: usize = 0xc8;

/// Author field width (85 bytes, `0x0f..0x64`).
pub(crate) const AUTHOR_LEN: usize = 0x64 - 0x0f;

/// Unidentified header bytes between `cycle_length` and the base epoch.
pub(crate) const RESERVED_START: usize = 0x6e;
pub(crate) const RESERVED_END: usize = 0xc2;

/// Base epoch seconds (u32) followed by tenths of milliseconds (u16).
pub(crate) const BASE_EPOCH_OFFSET: usize = 0xc2;

/// First scan table record.
pub(crate) const SCAN_TABLE_OFFSET: usize = 0xc8;

/// Scan table record size (9 bytes) - type, info position, data position.
pub(crate) const SCAN_TABLE_ENTRY_SIZE: usize = 9;

/// Scan info record size (137 bytes).
pub(crate) const SCAN_INFO_SIZE: usize = 0x89;

/// Declared count (i32) and range exponent (i16) ahead of the datapoints.
pub(crate) const DATA_BLOCK_HEADER_SIZE: usize = 6;

// ============================================================================
// Submodules
// ============================================================================

mod common;
mod data_block;
mod general_header;
mod scan_info;
mod scan_table;

pub use common::{ByteReader, LeScalar, decode_fixed_string};
pub(crate) use common::to_offset;

pub use data_block::{DataBlock, full_scale_range, mask_saturated};
pub use general_header::GeneralHeader;
pub use scan_info::ScanInfo;
pub use scan_table::{ScanTableEntry, ScanType, find_anchor, read_scan_table};
