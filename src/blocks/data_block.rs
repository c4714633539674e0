// data_block.rs
use super::DATA_BLOCK_HEADER_SIZE;
use crate::{Result, blocks::common::ByteReader};

/// Data Block - the datapoints of one scan in one cycle.
///
/// # Structure (at the cycle's data position):
/// - `+0x00` declared datapoint count (i32, unreliable)
/// - `+0x04` data range exponent (i16)
/// - `+0x06` datapoints (f32 each)
///
/// Saturated datapoints serialize as `null` and read back as NaN. Equality
/// compares datapoints bit for bit, so a block with NaN equals itself.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DataBlock {
    /// Count stored on disk. Observed to disagree with the real count, so it
    /// is recorded but never used to size the read.
    pub declared_datapoints: i32,
    /// Detector full-scale range as a power-of-ten exponent.
    pub data_range: i16,
    /// Datapoints with saturated values replaced by NaN.
    #[cfg_attr(feature = "serde", serde(with = "nan_as_null"))]
    pub datapoints: Vec<f32>,
}

impl PartialEq for DataBlock {
    fn eq(&self, other: &Self) -> bool {
        self.declared_datapoints == other.declared_datapoints
            && self.data_range == other.data_range
            && self.datapoints.len() == other.datapoints.len()
            && self
                .datapoints
                .iter()
                .zip(&other.datapoints)
                .all(|(a, b)| a.to_bits() == b.to_bits())
    }
}

impl DataBlock {
    /// Decode `n_values` datapoints from the block at `offset`.
    ///
    /// `n_values` is `scan_width * values_per_mass` of the owning scan.
    pub fn from_reader(reader: &ByteReader<'_>, offset: usize, n_values: usize) -> Result<Self> {
        let declared_datapoints: i32 = reader.read(offset)?;
        let data_range: i16 = reader.read(offset + 4)?;
        let mut datapoints = reader.read_array::<f32>(offset + DATA_BLOCK_HEADER_SIZE, n_values)?;

        if usize::try_from(declared_datapoints).ok() != Some(n_values) {
            log::debug!(
                "data block at {offset:#x} declares {declared_datapoints} datapoints, reading {n_values}"
            );
        }

        let saturated = mask_saturated(&mut datapoints, full_scale_range(data_range));
        if saturated > 0 {
            log::debug!("data block at {offset:#x}: {saturated} saturated datapoints set to NaN");
        }

        Ok(Self {
            declared_datapoints,
            data_range,
            datapoints,
        })
    }

    /// Detector full-scale range, `10^data_range`.
    #[inline]
    pub fn full_scale_range(&self) -> f64 {
        full_scale_range(self.data_range)
    }
}

/// `10^exponent`.
#[inline]
pub fn full_scale_range(exponent: i16) -> f64 {
    10f64.powi(i32::from(exponent))
}

/// Replace every value strictly above `fsr` with NaN.
///
/// Once the detector leaves its full-scale range the instrument stores a huge
/// sentinel instead of a reading. Values equal to `fsr` are kept. Applying the
/// mask twice changes nothing, since NaN never compares greater.
///
/// Returns the number of values replaced.
pub fn mask_saturated(values: &mut [f32], fsr: f64) -> usize {
    let mut replaced = 0;
    for value in values.iter_mut() {
        if f64::from(*value) > fsr {
            *value = f32::NAN;
            replaced += 1;
        }
    }
    replaced
}

/// JSON has no NaN: saturated datapoints travel as `null`.
#[cfg(feature = "serde")]
mod nan_as_null {
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    pub fn serialize<S: Serializer>(values: &[f32], serializer: S) -> Result<S::Ok, S::Error> {
        values
            .iter()
            .map(|v| if v.is_nan() { None } else { Some(*v) })
            .collect::<Vec<Option<f32>>>()
            .serialize(serializer)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<f32>, D::Error> {
        let values = Vec::<Option<f32>>::deserialize(deserializer)?;
        Ok(values.into_iter().map(|v| v.unwrap_or(f32::NAN)).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn boundary_value_is_kept() {
        let mut values = [100.0f32, 100.0001, 99.9, f32::MAX, -1.0e6];
        let replaced = mask_saturated(&mut values, full_scale_range(2));
        assert_eq!(replaced, 2);
        assert_eq!(values[0], 100.0);
        assert!(values[1].is_nan());
        assert_eq!(values[2], 99.9);
        assert!(values[3].is_nan());
        assert_eq!(values[4], -1.0e6);
    }

    #[test]
    fn masking_is_idempotent() {
        let mut values = [1.0f32, 11.0, 10.0];
        mask_saturated(&mut values, 10.0);
        let once = values;
        assert_eq!(mask_saturated(&mut values, 10.0), 0);
        assert_eq!(values[0], once[0]);
        assert!(values[1].is_nan());
        assert_eq!(values[2], once[2]);
    }

    #[test]
    fn saturated_block_equals_itself() {
        let block = DataBlock {
            declared_datapoints: 2,
            data_range: 0,
            datapoints: vec![0.5, f32::NAN],
        };
        assert_eq!(block, block.clone());
    }

    #[test]
    fn negative_exponents() {
        assert_eq!(full_scale_range(0), 1.0);
        assert!((full_scale_range(-9) - 1e-9).abs() < 1e-24);
    }
}
