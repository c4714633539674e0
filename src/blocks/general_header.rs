// general_header.rs
use super::{AUTHOR_LEN, BASE_EPOCH_OFFSET, GENERAL_HEADER_SIZE, RESERVED_END, RESERVED_START};
use crate::{Error, Result, blocks::common::ByteReader, parsing::EpochStamp};
use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

/// General Header - file-wide metadata at the start of every `.sac` file.
///
/// # Layout (200 bytes, offsets from file start)
/// - `0x00` data_index (i16)
/// - `0x02` software_id (i32)
/// - `0x06`/`0x07` software version major/minor (u8)
/// - `0x08..0x0e` second, minute, hour, day, month, year - 1900 (u8 each)
/// - `0x0f` author (85-byte Latin-1 string)
/// - `0x64` n_cycles (i32), `0x68` n_scans (i16), `0x6a` cycle_length (i32)
/// - `0x6e..0xc2` unidentified
/// - `0xc2` base epoch seconds (u32), `0xc6` base epoch tenths of ms (u16)
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GeneralHeader {
    pub data_index: i16,
    pub software_id: i32,
    pub version_major: u8,
    pub version_minor: u8,
    pub second: u8,
    pub minute: u8,
    pub hour: u8,
    pub day: u8,
    pub month: u8,
    /// Years since 1900.
    pub year: u8,
    /// Unidentified byte between the date and the author field.
    pub reserved0: u8,
    pub author: String,
    /// Number of cycles in the file.
    pub n_cycles: i32,
    /// Number of scan table entries.
    pub n_scans: i16,
    /// Byte stride between consecutive cycles.
    pub cycle_length: i32,
    /// Bytes `0x6e..0xc2`, kept verbatim.
    pub reserved1: Vec<u8>,
    /// File-wide base epoch every cycle offset is added to.
    pub base_epoch: EpochStamp,
}

impl GeneralHeader {
    /// Decode the general header from the start of the file.
    ///
    /// Fails with [`Error::TruncatedBuffer`] when the file is shorter than the
    /// 200-byte header.
    pub fn from_reader(reader: &ByteReader<'_>) -> Result<Self> {
        // Check the whole header up front so a short file reports the real extent.
        reader.bytes(0, GENERAL_HEADER_SIZE)?;

        Ok(Self {
            data_index: reader.read(0x00)?,
            software_id: reader.read(0x02)?,
            version_major: reader.read(0x06)?,
            version_minor: reader.read(0x07)?,
            second: reader.read(0x08)?,
            minute: reader.read(0x09)?,
            hour: reader.read(0x0a)?,
            day: reader.read(0x0b)?,
            month: reader.read(0x0c)?,
            year: reader.read(0x0d)?,
            reserved0: reader.read(0x0e)?,
            author: reader.read_string(0x0f, AUTHOR_LEN)?,
            n_cycles: reader.read(0x64)?,
            n_scans: reader.read(0x68)?,
            cycle_length: reader.read(0x6a)?,
            reserved1: reader
                .bytes(RESERVED_START, RESERVED_END - RESERVED_START)?
                .to_vec(),
            base_epoch: EpochStamp::from_reader(reader, BASE_EPOCH_OFFSET)?,
        })
    }

    /// Decode the general header from a byte slice.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        Self::from_reader(&ByteReader::new(bytes))
    }

    /// Software version as `"{major}.{minor}"`.
    pub fn version(&self) -> String {
        format!("{}.{}", self.version_major, self.version_minor)
    }

    /// Number of cycles, rejecting negative counts.
    pub fn cycle_count(&self) -> Result<usize> {
        usize::try_from(self.n_cycles).map_err(|_| Error::NegativeCount {
            field: "n_cycles",
            value: i64::from(self.n_cycles),
        })
    }

    /// Number of scan table entries, rejecting negative counts.
    pub fn scan_count(&self) -> Result<usize> {
        usize::try_from(self.n_scans).map_err(|_| Error::NegativeCount {
            field: "n_scans",
            value: i64::from(self.n_scans),
        })
    }

    /// Calendar date and time the measurement was started.
    ///
    /// Returns `None` if the stored components do not form a valid date.
    pub fn measured_at(&self) -> Option<NaiveDateTime> {
        NaiveDate::from_ymd_opt(
            1900 + i32::from(self.year),
            u32::from(self.month),
            u32::from(self.day),
        )?
        .and_hms_opt(
            u32::from(self.hour),
            u32::from(self.minute),
            u32::from(self.second),
        )
    }

    /// Measurement start as Unix seconds, interpreting the date as UTC.
    pub fn measure_uts(&self) -> Option<f64> {
        self.measured_at().map(|dt| dt.and_utc().timestamp() as f64)
    }

    /// Base epoch as fractional Unix seconds.
    pub fn base_uts(&self) -> f64 {
        self.base_epoch.as_secs_f64()
    }

    /// Measurement start as a UTC timestamp.
    pub fn measured_at_utc(&self) -> Option<DateTime<Utc>> {
        self.measured_at().map(|dt| dt.and_utc())
    }
}
