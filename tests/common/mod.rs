//! Synthetic `.sac` file builder shared by the integration tests.
//!
//! Layout produced by [`SacBuilder::build`]:
//! - general header (`0x00..0xc8`)
//! - scan table (`0xc8`, 9 bytes per entry)
//! - one 137-byte scan info record per data-bearing entry
//! - `n_cycles` cycles, each: 6-byte time offset, then one data block per
//!   data-bearing entry in table order
#![allow(dead_code)]

pub const DATA: u8 = 0x11;

#[derive(Debug, Clone)]
pub struct ScanSpec {
    pub scan_type: u8,
    pub data_title: String,
    pub data_unit: String,
    pub scan_title: String,
    pub scan_unit: String,
    pub comment: String,
    pub data_format: u16,
    pub first_mass: f32,
    pub scan_width: u16,
    pub values_per_mass: u8,
    pub zoom_start: f32,
    pub zoom_end: f32,
    pub data_range: i16,
    /// Overrides the datapoint count written to disk.
    pub declared: Option<i32>,
    /// Datapoints for each cycle; `None` generates `cycle * 1000 + i`.
    pub values: Option<Vec<Vec<f32>>>,
}

impl ScanSpec {
    pub fn data(first_mass: f32, scan_width: u16, values_per_mass: u8) -> Self {
        Self {
            scan_type: DATA,
            data_title: "Ion Current".to_string(),
            data_unit: "A".to_string(),
            scan_title: "Mass".to_string(),
            scan_unit: "amu".to_string(),
            comment: String::new(),
            data_format: 0,
            first_mass,
            scan_width,
            values_per_mass,
            zoom_start: first_mass,
            zoom_end: first_mass + f32::from(scan_width),
            data_range: 4,
            declared: None,
            values: None,
        }
    }

    /// A table slot without per-cycle data.
    pub fn empty(scan_type: u8) -> Self {
        Self {
            scan_type,
            ..Self::data(0.0, 0, 0)
        }
    }

    pub fn n_values(&self) -> usize {
        usize::from(self.scan_width) * usize::from(self.values_per_mass)
    }

    fn values_for(&self, cycle: usize) -> Vec<f32> {
        match &self.values {
            Some(per_cycle) => per_cycle[cycle].clone(),
            None => (0..self.n_values())
                .map(|i| (cycle * 1000 + i) as f32)
                .collect(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct SacBuilder {
    pub software_id: i32,
    pub version: (u8, u8),
    /// second, minute, hour, day, month, year - 1900
    pub date: [u8; 6],
    pub author: String,
    pub base_epoch: (u32, u16),
    /// Per-cycle time offsets; missing cycles use `(cycle * 10, 0)`.
    pub cycle_offsets: Vec<(u32, u16)>,
    pub n_cycles: usize,
    pub scans: Vec<ScanSpec>,
    /// Bytes `0x6e..0xc2`.
    pub reserved: [u8; 0xc2 - 0x6e],
}

impl Default for SacBuilder {
    fn default() -> Self {
        Self {
            software_id: 1234,
            version: (7, 2),
            date: [30, 15, 9, 2, 11, 121],
            author: "QMS Lab".to_string(),
            base_epoch: (1_635_843_330, 0),
            cycle_offsets: Vec::new(),
            n_cycles: 1,
            scans: Vec::new(),
            reserved: [0; 0xc2 - 0x6e],
        }
    }
}

fn put(buf: &mut [u8], offset: usize, bytes: &[u8]) {
    buf[offset..offset + bytes.len()].copy_from_slice(bytes);
}

fn put_str(buf: &mut [u8], offset: usize, text: &str, width: usize) {
    let bytes: Vec<u8> = text.chars().map(|c| c as u8).take(width).collect();
    put(buf, offset, &bytes);
}

impl SacBuilder {
    pub fn with_scans(scans: Vec<ScanSpec>) -> Self {
        Self {
            scans,
            ..Self::default()
        }
    }

    fn data_scans(&self) -> impl Iterator<Item = &ScanSpec> {
        self.scans.iter().filter(|s| s.scan_type == DATA)
    }

    /// Start of the scan info records.
    pub fn info_start(&self) -> usize {
        0xc8 + 9 * self.scans.len()
    }

    /// Start of cycle 0 (its time offset field).
    pub fn cycle_start(&self) -> usize {
        self.info_start() + 137 * self.data_scans().count()
    }

    pub fn cycle_length(&self) -> usize {
        6 + self.data_scans().map(|s| 6 + 4 * s.n_values()).sum::<usize>()
    }

    pub fn build(&self) -> Vec<u8> {
        let total = self.cycle_start() + self.n_cycles * self.cycle_length();
        let mut buf = vec![0u8; total];

        put(&mut buf, 0x00, &0i16.to_le_bytes());
        put(&mut buf, 0x02, &self.software_id.to_le_bytes());
        buf[0x06] = self.version.0;
        buf[0x07] = self.version.1;
        put(&mut buf, 0x08, &self.date);
        put_str(&mut buf, 0x0f, &self.author, 0x64 - 0x0f);
        put(&mut buf, 0x64, &(self.n_cycles as i32).to_le_bytes());
        put(&mut buf, 0x68, &(self.scans.len() as i16).to_le_bytes());
        put(&mut buf, 0x6a, &(self.cycle_length() as i32).to_le_bytes());
        put(&mut buf, 0x6e, &self.reserved);
        put(&mut buf, 0xc2, &self.base_epoch.0.to_le_bytes());
        put(&mut buf, 0xc6, &self.base_epoch.1.to_le_bytes());

        let mut info_pos = self.info_start();
        let mut data_pos = self.cycle_start() + 6;
        for (k, scan) in self.scans.iter().enumerate() {
            let entry = 0xc8 + 9 * k;
            buf[entry] = scan.scan_type;
            if scan.scan_type != DATA {
                continue;
            }
            put(&mut buf, entry + 1, &(info_pos as i32).to_le_bytes());
            put(&mut buf, entry + 5, &(data_pos as i32).to_le_bytes());

            put(&mut buf, info_pos, &scan.data_format.to_le_bytes());
            put_str(&mut buf, info_pos + 0x02, &scan.data_title, 13);
            put_str(&mut buf, info_pos + 0x0f, &scan.data_unit, 14);
            put_str(&mut buf, info_pos + 0x1d, &scan.scan_title, 13);
            put_str(&mut buf, info_pos + 0x2a, &scan.scan_unit, 14);
            put_str(&mut buf, info_pos + 0x38, &scan.comment, 66);
            put(&mut buf, info_pos + 0x7a, &scan.first_mass.to_le_bytes());
            put(&mut buf, info_pos + 0x7e, &scan.scan_width.to_le_bytes());
            buf[info_pos + 0x80] = scan.values_per_mass;
            put(&mut buf, info_pos + 0x81, &scan.zoom_start.to_le_bytes());
            put(&mut buf, info_pos + 0x85, &scan.zoom_end.to_le_bytes());

            for cycle in 0..self.n_cycles {
                let block = data_pos + cycle * self.cycle_length();
                let declared = scan.declared.unwrap_or(scan.n_values() as i32);
                put(&mut buf, block, &declared.to_le_bytes());
                put(&mut buf, block + 4, &scan.data_range.to_le_bytes());
                for (i, value) in scan.values_for(cycle).iter().enumerate() {
                    put(&mut buf, block + 6 + 4 * i, &value.to_le_bytes());
                }
            }

            info_pos += 137;
            data_pos += 6 + 4 * scan.n_values();
        }

        for cycle in 0..self.n_cycles {
            let (seconds, tenths) = self
                .cycle_offsets
                .get(cycle)
                .copied()
                .unwrap_or(((cycle * 10) as u32, 0));
            let stamp = self.cycle_start() + cycle * self.cycle_length();
            put(&mut buf, stamp, &seconds.to_le_bytes());
            put(&mut buf, stamp + 4, &tenths.to_le_bytes());
        }

        buf
    }
}

/// The smallest useful file: one empty slot (type 0x0f) followed by one
/// data-bearing scan of three values, one cycle.
pub fn minimal() -> SacBuilder {
    let mut data = ScanSpec::data(1.0, 1, 3);
    data.values = Some(vec![vec![1.5, 2.5, 3.5]]);
    SacBuilder::with_scans(vec![ScanSpec::empty(0x0f), data])
}
