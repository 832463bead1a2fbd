//! Excited-mode selection
//!
//! A mode is excited by a source when its eigenfunction amplitude at the
//! source depth is large relative to the most strongly excited mode:
//!
//! ```text
//! |phi[r, i]| / max_j |phi[r, j]|  >  threshold
//! ```
//!
//! where `r` is the grid row of the source depth. The comparison is strict, so
//! a threshold of 1.0 selects nothing and a threshold of 0.0 selects every mode
//! with non-zero amplitude.
//!
//! # Example
//!
//! ```rust
//! use ocean_env::modes::{ExcitedModeSelector, ModeSet};
//! use nalgebra::DMatrix;
//!
//! let phi = DMatrix::from_row_slice(2, 3, &[
//!     0.0, 0.0, 0.0,
//!     1.0, 0.5, 0.1,
//! ]);
//! let modes = ModeSet::from_real(&[0.5, 0.4, 0.3], &phi, &[0.0, 30.0]).unwrap();
//!
//! let excited = ExcitedModeSelector::select(&modes, 30.0, 0.3).unwrap();
//! assert_eq!(excited.indices, vec![0, 1]);
//! assert_eq!(excited.k.len(), 2);
//! ```

use crate::error::{EnvError, EnvResult};
use crate::modes::mode_set::ModeSet;
use nalgebra::{DMatrix, DVector};
use num::complex::Complex64;

// =================================================================================================
// Configuration
// =================================================================================================

/// Selector configuration
///
/// # Example
///
/// ```rust
/// use ocean_env::modes::ExcitationConfig;
///
/// let config = ExcitationConfig::with_threshold(0.25);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExcitationConfig {
    /// Relative amplitude threshold (fraction of the peak amplitude)
    ///
    /// Values outside `[0, 1]` are accepted and give all-or-nothing selections.
    pub threshold: f64,
}

impl Default for ExcitationConfig {
    fn default() -> Self {
        Self { threshold: 0.1 }
    }
}

impl ExcitationConfig {
    pub fn with_threshold(threshold: f64) -> Self {
        Self { threshold }
    }

    /// Reject thresholds that cannot be compared (NaN, infinite)
    pub fn validate(&self) -> EnvResult<()> {
        if !self.threshold.is_finite() {
            return Err(EnvError::invalid_config(
                "threshold",
                format!("must be finite, got {}", self.threshold),
            ));
        }
        Ok(())
    }
}

// =================================================================================================
// Result
// =================================================================================================

/// Modes excited by a source, in original mode order
#[derive(Debug, Clone, PartialEq)]
pub struct ExcitedModes {
    /// Selected mode indices, ascending
    pub indices: Vec<usize>,
    /// Eigenfunctions of the selected modes (all depths × selected modes)
    pub phi: DMatrix<Complex64>,
    /// Wavenumbers of the selected modes
    pub k: DVector<Complex64>,
    /// Source depth used for the selection (m)
    pub source_depth: f64,
    /// Grid row of the source depth
    pub source_row: usize,
    /// Peak amplitude at the source row (the normaliser)
    pub peak: f64,
    /// Threshold used for the selection
    pub threshold: f64,
}

impl ExcitedModes {
    /// Number of selected modes
    pub fn len(&self) -> usize {
        self.indices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }
}

// =================================================================================================
// Selector
// =================================================================================================

/// Excited-mode selector
#[derive(Debug, Clone, Copy, Default)]
pub struct ExcitedModeSelector {
    config: ExcitationConfig,
}

impl ExcitedModeSelector {
    /// Create with a validated configuration
    pub fn new(config: ExcitationConfig) -> EnvResult<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &ExcitationConfig {
        &self.config
    }

    /// Select with the configured threshold
    pub fn apply(&self, mode_set: &ModeSet, source_depth: f64) -> EnvResult<ExcitedModes> {
        Self::select(mode_set, source_depth, self.config.threshold)
    }

    /// Select the modes excited by a source at `source_depth`
    ///
    /// # Errors
    /// - `DepthNotFound` if `source_depth` is not exactly on `mode_set.z()`
    /// - `DegenerateModeSet` if every mode has zero amplitude at that depth
    pub fn select(
        mode_set: &ModeSet,
        source_depth: f64,
        threshold: f64,
    ) -> EnvResult<ExcitedModes> {
        let row = mode_set.depth_row(source_depth)?;
        let amplitudes = mode_set.amplitudes_at(row);

        let peak = amplitudes.iter().copied().fold(0.0, f64::max);
        if !(peak > 0.0 && peak.is_finite()) {
            return Err(EnvError::DegenerateModeSet {
                depth: source_depth,
                row,
                peak,
            });
        }

        if !(0.0..=1.0).contains(&threshold) {
            log::warn!(
                "threshold {} outside [0, 1]: selection is all-or-nothing",
                threshold
            );
        }

        let indices: Vec<usize> = amplitudes
            .iter()
            .enumerate()
            .filter(|(_, &a)| a / peak > threshold)
            .map(|(i, _)| i)
            .collect();

        log::debug!(
            "{} of {} modes excited at depth {} (threshold {})",
            indices.len(),
            mode_set.m(),
            source_depth,
            threshold
        );

        Ok(ExcitedModes {
            phi: mode_set.phi().select_columns(&indices),
            k: mode_set.k().select_rows(&indices),
            indices,
            source_depth,
            source_row: row,
            peak,
            threshold,
        })
    }
}

// =================================================================================================
// Tests
// =================================================================================================
