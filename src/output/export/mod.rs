//! Export module for environment and mode data.
//!
//! # Architecture
//!
//! This module defines the [`Exporter`] trait that abstracts the export format.
//! Each format is an independent implementation in its own sub-module.
//! Adding a new format means adding a file, without modifying existing code.
//!
//! # Available formats
//!
//! | Format  | Module           |
//! |---------|------------------|
//! | CSV     | [`csv`]          |
//!
//! # Usage example
//!
//! ```rust,ignore
//! use ocean_env::output::export::{CsvExporter, Exporter};
//!
//! let exporter = CsvExporter::default();
//!
//! // Composed sound-speed function sampled on 201 uniform depths
//! exporter.export_profile(&sspf, 201, "ssp.csv")?;
//!
//! // Latest excited-mode selection stored on the mode set
//! exporter.export_excited_modes(&modes, "excited.csv")?;
//! ```

pub mod csv;

pub use csv::{
    export_modes_csv,
    export_profile_csv,
    export_wavenumbers_csv,
    CsvConfig,
    CsvError,
    CsvMetadata,
};

use crate::environment::DepthProfile;
use crate::modes::ModeSet;

/// Abstraction trait for all export formats.
///
/// # Associated type `Error`
///
/// Each format manages its own errors via the associated type, so callers can
/// react to the precise failure.
pub trait Exporter {
    /// Error type specific to this export format.
    type Error: std::error::Error;

    /// Exports a depth profile sampled on `n_points` uniform depths.
    ///
    /// The first and last samples are always the ends of the profile's
    /// depth range.
    ///
    /// # Errors
    ///
    /// Returns an error if `n_points < 2`, if sampling fails, or if the path
    /// is invalid.
    fn export_profile(
        &self,
        profile: &dyn DepthProfile,
        n_points: usize,
        path: &str,
    ) -> Result<(), Self::Error>;

    /// Exports the excited eigenfunctions of the latest selection on `mode_set`.
    ///
    /// # Errors
    ///
    /// Returns an error if no selection has been made or the path is invalid.
    fn export_excited_modes(&self, mode_set: &ModeSet, path: &str) -> Result<(), Self::Error>;
}

/// Exporter writing CSV files with a fixed configuration
#[derive(Debug, Clone, Default)]
pub struct CsvExporter {
    pub config: CsvConfig,
}

impl CsvExporter {
    pub fn new(config: CsvConfig) -> Self {
        Self { config }
    }
}

/// `n` uniformly spaced depths from `top` to `bottom`, both included
pub fn uniform_depths(top: f64, bottom: f64, n: usize) -> Vec<f64> {
    match n {
        0 => Vec::new(),
        1 => vec![top],
        _ => {
            let step = (bottom - top) / (n - 1) as f64;
            (0..n)
                .map(|i| if i == n - 1 { bottom } else { top + step * i as f64 })
                .collect()
        }
    }
}

impl Exporter for CsvExporter {
    type Error = CsvError;

    fn export_profile(
        &self,
        profile: &dyn DepthProfile,
        n_points: usize,
        path: &str,
    ) -> Result<(), CsvError> {
        if n_points < 2 {
            return Err(CsvError::LengthMismatch {
                what: "profile samples".to_string(),
                expected: 2,
                actual: n_points,
            });
        }

        let (top, bottom) = profile.depth_range();
        let depths = uniform_depths(top, bottom, n_points);
        let values = profile.evaluate_many(&depths)?;

        export_profile_csv(&depths, values.as_slice(), path, Some(&self.config))
    }

    fn export_excited_modes(&self, mode_set: &ModeSet, path: &str) -> Result<(), CsvError> {
        let excited = mode_set.excited().ok_or(CsvError::NoSelection)?;
        export_modes_csv(mode_set.z().as_slice(), excited, path, Some(&self.config))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::environment::SspProfile;
    use nalgebra::DMatrix;
    use std::fs;
    use tempfile::NamedTempFile;

    #[test]
    fn test_uniform_depths_endpoints() {
        let depths = uniform_depths(0.0, 100.0, 5);
        assert_eq!(depths, vec![0.0, 25.0, 50.0, 75.0, 100.0]);
        assert_eq!(uniform_depths(3.0, 7.0, 1), vec![3.0]);
        assert!(uniform_depths(3.0, 7.0, 0).is_empty());
    }

    #[test]
    fn test_exporter_profile() {
        let file = NamedTempFile::new().unwrap();
        let path = file.path().to_str().unwrap();

        let sspf = SspProfile::fluid(vec![0.0, 100.0], vec![1500.0, 1520.0], vec![1.0, 1.0])
            .build_interpolant()
            .unwrap();

        CsvExporter::default().export_profile(&sspf, 3, path).unwrap();

        let content = fs::read_to_string(path).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[2], "50.000000,1510.000000");
    }

    #[test]
    fn test_exporter_rejects_single_sample() {
        let sspf = SspProfile::fluid(vec![0.0, 100.0], vec![1500.0, 1520.0], vec![1.0, 1.0])
            .build_interpolant()
            .unwrap();

        let result = CsvExporter::default().export_profile(&sspf, 1, "unused.csv");
        assert!(matches!(result, Err(CsvError::LengthMismatch { .. })));
    }

    #[test]
    fn test_exporter_requires_selection() {
        let phi = DMatrix::from_row_slice(2, 1, &[0.0, 1.0]);
        let mut modes = ModeSet::from_real(&[0.5], &phi, &[0.0, 10.0]).unwrap();

        let exporter = CsvExporter::default();
        assert!(matches!(
            exporter.export_excited_modes(&modes, "unused.csv"),
            Err(CsvError::NoSelection)
        ));

        let file = NamedTempFile::new().unwrap();
        let path = file.path().to_str().unwrap();
        modes.select_excited(10.0, 0.5).unwrap();
        exporter.export_excited_modes(&modes, path).unwrap();

        let content = fs::read_to_string(path).unwrap();
        assert!(content.starts_with("Depth (m),mode_0 (re),mode_0 (im)"));
    }
}
