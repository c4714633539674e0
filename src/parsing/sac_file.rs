use super::timestamp::{EpochStamp, cycle_uts};
use crate::{
    Result,
    blocks::{
        ByteReader, DataBlock, GeneralHeader, ScanInfo, ScanTableEntry, find_anchor,
        read_scan_table, to_offset,
    },
};
use std::path::Path;

/// One data-bearing scan of one cycle.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RawScan {
    /// Position of the scan's entry in [`SacFile::scan_table`].
    pub table_index: usize,
    /// Position of the scan's metadata in [`SacFile::scan_infos`].
    pub info_index: usize,
    pub block: DataBlock,
}

/// One decoded cycle.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RawCycle {
    pub index: usize,
    /// Offset from the header's base epoch.
    pub offset: EpochStamp,
    /// Absolute Unix time in fractional seconds.
    pub uts: f64,
    /// Data-bearing scans in scan table order.
    pub scans: Vec<RawScan>,
}

/// Fully decoded `.sac` file.
///
/// Scan metadata is decoded once and stored in `scan_infos`; every cycle
/// refers to it by index.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SacFile {
    pub header: GeneralHeader,
    /// All scan table entries in on-disk order, including non-data slots.
    pub scan_table: Vec<ScanTableEntry>,
    /// Metadata of every data-bearing entry, in table order.
    pub scan_infos: Vec<ScanInfo>,
    pub cycles: Vec<RawCycle>,
}

impl SacFile {
    /// Parse a `.sac` file from a given file path.
    ///
    /// The whole file is loaded into memory before decoding starts.
    pub fn parse_from_file(path: impl AsRef<Path>) -> Result<Self> {
        let data = std::fs::read(path)?;
        Self::parse_from_bytes(&data)
    }

    /// Parse a `.sac` file from its complete contents.
    ///
    /// # Returns
    /// The decoded tree, or the first error encountered. Nothing is returned
    /// for a file that fails part way through.
    pub fn parse_from_bytes(data: &[u8]) -> Result<Self> {
        let reader = ByteReader::new(data);

        let header = GeneralHeader::from_reader(&reader)?;
        let n_cycles = header.cycle_count()?;
        let n_scans = header.scan_count()?;
        log::debug!(
            "sac header: software {} v{}, {} cycles, {} scans, cycle length {}",
            header.software_id,
            header.version(),
            n_cycles,
            n_scans,
            header.cycle_length
        );

        let scan_table = read_scan_table(&reader, n_scans)?;
        let anchor = i64::from(find_anchor(&scan_table)?.data_position);

        // Metadata is cycle-invariant: decode it once per data-bearing entry.
        let mut data_entries = Vec::new();
        let mut scan_infos = Vec::new();
        for (table_index, entry) in scan_table.iter().enumerate() {
            if !entry.is_data() {
                log::trace!(
                    "scan table entry {table_index} has type {}, no datapoints",
                    entry.scan_type
                );
                continue;
            }
            let info_offset = to_offset(i64::from(entry.info_position), "scan info")?;
            let info = ScanInfo::from_reader(&reader, info_offset)?;
            log::debug!(
                "scan {table_index}: {:?} vs {:?}, {} values from mass {}",
                info.data_title,
                info.scan_title,
                info.n_values(),
                info.first_mass
            );
            data_entries.push((table_index, entry, scan_infos.len()));
            scan_infos.push(info);
        }

        let cycle_length = i64::from(header.cycle_length);
        if cycle_length == 0 && n_cycles > 1 {
            log::debug!("cycle length is 0: all {n_cycles} cycles decode the same bytes");
        }
        let mut cycles = Vec::new();
        for index in 0..n_cycles {
            let cycle_offset = index as i64 * cycle_length;

            // The cycle's time offset sits just before the first data block.
            let stamp_offset = to_offset(
                anchor - EpochStamp::SIZE as i64 + cycle_offset,
                "cycle timestamp",
            )?;
            let offset = EpochStamp::from_reader(&reader, stamp_offset)?;
            let uts = cycle_uts(header.base_epoch, offset);
            log::trace!("cycle {index}: uts {uts:.4}");

            let mut scans = Vec::with_capacity(data_entries.len());
            for &(table_index, entry, info_index) in &data_entries {
                let data_offset =
                    to_offset(i64::from(entry.data_position) + cycle_offset, "data block")?;
                let block =
                    DataBlock::from_reader(&reader, data_offset, scan_infos[info_index].n_values())?;
                scans.push(RawScan {
                    table_index,
                    info_index,
                    block,
                });
            }

            cycles.push(RawCycle {
                index,
                offset,
                uts,
                scans,
            });
        }

        Ok(Self {
            header,
            scan_table,
            scan_infos,
            cycles,
        })
    }
}
