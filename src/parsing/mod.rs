mod sac_file;
mod timestamp;

pub use sac_file::{RawCycle, RawScan, SacFile};
pub use timestamp::{EpochStamp, cycle_datetime, cycle_uts};
