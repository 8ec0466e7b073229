use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// A single centroided signal: an m/z and its intensity.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Peak {
    pub mz: f64,
    pub intensity: f64,
}

impl Peak {
    pub fn new(mz: f64, intensity: f64) -> Self {
        Self { mz, intensity }
    }

    /// Total ordering on m/z alone. Intensity never takes part in ordering.
    pub fn cmp_mz(&self, other: &Self) -> Ordering {
        self.mz.total_cmp(&other.mz)
    }

    pub fn same_mz(&self, other: &Self) -> bool {
        self.cmp_mz(other) == Ordering::Equal
    }
}

impl From<(f64, f64)> for Peak {
    fn from((mz, intensity): (f64, f64)) -> Self {
        Self { mz, intensity }
    }
}
