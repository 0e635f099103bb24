//! Byte-size aggregation and unit conversion.

use std::fs;
use std::path::Path;

use clap::ValueEnum;

use crate::errors::{ResourceError, Result};
use crate::probe;
use crate::walk::{self, ListingOptions, UNLIMITED_DEPTH};

/// Scale factors for size reporting. Pure conversion constants, 1024-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CapacityUnit {
    Byte,
    Kilobyte,
    Megabyte,
    Gigabyte,
    Terabyte,
    Petabyte,
}

impl CapacityUnit {
    /// Bytes per unit.
    pub fn factor(self) -> u64 {
        match self {
            CapacityUnit::Byte => 1,
            CapacityUnit::Kilobyte => 1 << 10,
            CapacityUnit::Megabyte => 1 << 20,
            CapacityUnit::Gigabyte => 1 << 30,
            CapacityUnit::Terabyte => 1 << 40,
            CapacityUnit::Petabyte => 1 << 50,
        }
    }

    /// Convert a byte count into this unit, rounded half-up to `scale`
    /// decimal digits. Presentation only; the byte count is the truth.
    pub fn convert(self, bytes: u64, scale: u32) -> f64 {
        round_half_up(bytes as f64 / self.factor() as f64, scale)
    }
}

/// Total content size of `path` in bytes.
///
/// A file reports its filesystem length. A directory reports the sum over
/// every file in its recursive listing (default filters); directory nodes
/// themselves contribute nothing, so an empty tree is 0.
pub fn size_in_bytes(path: &Path) -> Result<u64> {
    if !probe::exists(path)? {
        return Err(ResourceError::NotFound(path.to_path_buf()));
    }
    if !probe::is_directory(path)? {
        let meta = fs::metadata(path).map_err(|e| ResourceError::io(path, e))?;
        return Ok(meta.len());
    }

    let mut total = 0u64;
    for entry in walk::list(path, UNLIMITED_DEPTH, ListingOptions::default())? {
        let meta = fs::metadata(&entry).map_err(|e| ResourceError::io(&entry, e))?;
        if meta.is_file() {
            total += meta.len();
        }
    }
    Ok(total)
}

/// [`size_in_bytes`] converted into `unit` at `scale` decimal digits.
pub fn size(path: &Path, unit: CapacityUnit, scale: u32) -> Result<f64> {
    Ok(unit.convert(size_in_bytes(path)?, scale))
}

fn round_half_up(value: f64, scale: u32) -> f64 {
    let factor = 10f64.powi(scale as i32);
    (value * factor).round() / factor
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn factors_are_1024_based() {
        assert_eq!(CapacityUnit::Byte.factor(), 1);
        assert_eq!(CapacityUnit::Kilobyte.factor(), 1024);
        assert_eq!(CapacityUnit::Megabyte.factor(), 1024 * 1024);
        assert_eq!(CapacityUnit::Petabyte.factor(), 1u64 << 50);
    }

    #[test]
    fn rounding_is_half_up() {
        // Values chosen to be exact in binary so the test is not at the
        // mercy of float representation.
        assert_eq!(round_half_up(2.5, 0), 3.0);
        assert_eq!(round_half_up(0.125, 2), 0.13);
        assert_eq!(round_half_up(2.5, 2), 2.5);
    }

    #[test]
    fn convert_reports_kilobytes() {
        assert_eq!(CapacityUnit::Kilobyte.convert(2560, 2), 2.5);
        assert_eq!(CapacityUnit::Byte.convert(2560, 0), 2560.0);
    }
}
