//! Normal-mode solution container
//!
//! A [`ModeSet`] holds the wavenumbers and depth-sampled eigenfunctions
//! produced by an external normal-mode solver, together with the metadata the
//! solver passes through. Column `i` of `phi` and entry `i` of `k` describe the
//! same mode and are always indexed together.
//!
//! # Example
//!
//! ```rust
//! use ocean_env::modes::ModeSet;
//! use nalgebra::DMatrix;
//!
//! let phi = DMatrix::from_row_slice(3, 2, &[
//!     0.0, 0.0,
//!     1.0, 0.4,
//!     0.5, -0.8,
//! ]);
//! let mut modes = ModeSet::from_real(&[0.42, 0.40], &phi, &[0.0, 10.0, 20.0]).unwrap();
//!
//! let excited = modes.select_excited(10.0, 0.5).unwrap();
//! assert_eq!(excited.indices, vec![0]);
//! assert_eq!(modes.to_string(), "ModeSet with 2 distinct modes");
//! ```

use crate::environment::boundary::Boundaries;
use crate::environment::interpolation::validate_axis;
use crate::error::{EnvError, EnvResult};
use crate::modes::excitation::{ExcitedModeSelector, ExcitedModes};
use nalgebra::{DMatrix, DVector, DVectorView};
use num::complex::Complex64;
use std::fmt;

/// Typed constructor input for [`ModeSet`]
///
/// Metadata fields are passed through untouched.
#[derive(Debug, Clone)]
pub struct ModeSetParts {
    /// Number of modes M
    pub m: usize,
    /// Horizontal wavenumbers, length M
    pub k: DVector<Complex64>,
    /// Eigenfunctions, `z.len()` rows × M columns
    pub phi: DMatrix<Complex64>,
    /// Depth grid of the eigenfunction samples (m), strictly increasing
    pub z: DVector<f64>,
    /// Frequencies of the solution (Hz)
    pub freq_vec: Vec<f64>,
    /// Number of frequencies
    pub n_freq: usize,
    /// Number of media in the solver environment
    pub n_media: usize,
    /// Mesh points per medium
    pub n_points: Vec<usize>,
    /// Depths of the medium interfaces (m)
    pub depth: Vec<f64>,
    /// Density per medium
    pub rho: Vec<f64>,
    /// Surface and seabed descriptions
    pub boundaries: Boundaries,
}

impl ModeSetParts {
    /// Parts with empty metadata
    pub fn new(k: DVector<Complex64>, phi: DMatrix<Complex64>, z: DVector<f64>) -> Self {
        Self {
            m: k.len(),
            k,
            phi,
            z,
            freq_vec: Vec::new(),
            n_freq: 0,
            n_media: 0,
            n_points: Vec::new(),
            depth: Vec::new(),
            rho: Vec::new(),
            boundaries: Boundaries::default(),
        }
    }
}

/// Complete normal-mode solution
#[derive(Debug, Clone)]
pub struct ModeSet {
    m: usize,
    k: DVector<Complex64>,
    phi: DMatrix<Complex64>,
    z: DVector<f64>,
    freq_vec: Vec<f64>,
    n_freq: usize,
    n_media: usize,
    n_points: Vec<usize>,
    depth: Vec<f64>,
    rho: Vec<f64>,
    boundaries: Boundaries,

    /// Latest selection, replaced on every call to `select_excited`
    excited: Option<ExcitedModes>,
}

impl ModeSet {
    /// Create from validated parts
    ///
    /// # Errors
    /// - `ShapeMismatch` if `k` does not hold M entries, `phi` does not have M
    ///   columns, or `phi` rows differ from `z.len()`
    /// - `DomainError` if `z` is not strictly increasing
    pub fn new(parts: ModeSetParts) -> EnvResult<Self> {
        let ModeSetParts {
            m,
            k,
            phi,
            z,
            freq_vec,
            n_freq,
            n_media,
            n_points,
            depth,
            rho,
            boundaries,
        } = parts;

        if k.len() != m {
            return Err(EnvError::shape_mismatch("k", m, k.len()));
        }
        if phi.ncols() != m {
            return Err(EnvError::shape_mismatch("phi columns", m, phi.ncols()));
        }
        if phi.nrows() != z.len() {
            return Err(EnvError::shape_mismatch("phi rows", z.len(), phi.nrows()));
        }
        validate_axis(z.as_slice(), "ModeSet")?;

        log::debug!("mode set: {} modes on {} depths", m, z.len());

        Ok(Self {
            m,
            k,
            phi,
            z,
            freq_vec,
            n_freq,
            n_media,
            n_points,
            depth,
            rho,
            boundaries,
            excited: None,
        })
    }

    /// Create from a real-valued solution with empty metadata
    pub fn from_real(k: &[f64], phi: &DMatrix<f64>, z: &[f64]) -> EnvResult<Self> {
        let k = DVector::from_iterator(k.len(), k.iter().map(|&v| Complex64::new(v, 0.0)));
        let phi = phi.map(|v| Complex64::new(v, 0.0));
        Self::new(ModeSetParts::new(k, phi, DVector::from_column_slice(z)))
    }

    // ======================================= accessors ==========================================

    /// Number of modes M
    pub fn m(&self) -> usize {
        self.m
    }

    /// Alias of [`ModeSet::m`]
    pub fn num_modes(&self) -> usize {
        self.m
    }

    pub fn k(&self) -> &DVector<Complex64> {
        &self.k
    }

    pub fn phi(&self) -> &DMatrix<Complex64> {
        &self.phi
    }

    pub fn z(&self) -> &DVector<f64> {
        &self.z
    }

    pub fn freq_vec(&self) -> &[f64] {
        &self.freq_vec
    }

    pub fn n_freq(&self) -> usize {
        self.n_freq
    }

    pub fn n_media(&self) -> usize {
        self.n_media
    }

    pub fn n_points(&self) -> &[usize] {
        &self.n_points
    }

    pub fn depth(&self) -> &[f64] {
        &self.depth
    }

    pub fn rho(&self) -> &[f64] {
        &self.rho
    }

    pub fn boundaries(&self) -> &Boundaries {
        &self.boundaries
    }

    /// Wavenumber and eigenfunction of mode `index`
    pub fn mode(&self, index: usize) -> Option<(Complex64, DVectorView<'_, Complex64>)> {
        (index < self.m).then(|| (self.k[index], self.phi.column(index)))
    }

    /// Row of the first grid depth exactly equal to `depth`
    ///
    /// Eigenfunctions are not interpolated between grid depths.
    pub fn depth_row(&self, depth: f64) -> EnvResult<usize> {
        self.z
            .iter()
            .position(|&z| z == depth)
            .ok_or(EnvError::DepthNotFound {
                depth,
                grid_points: self.z.len(),
            })
    }

    /// Modal amplitudes `|phi[row, i]|` for every mode
    pub fn amplitudes_at(&self, row: usize) -> DVector<f64> {
        DVector::from_iterator(self.m, self.phi.row(row).iter().map(|c| c.norm()))
    }

    // ======================================= selection ==========================================

    /// Select the modes excited by a source at `source_depth`
    ///
    /// The result replaces any previous selection. On error the previous
    /// selection is kept.
    pub fn select_excited(&mut self, source_depth: f64, threshold: f64) -> EnvResult<&ExcitedModes> {
        let selection = ExcitedModeSelector::select(self, source_depth, threshold)?;
        let stored: &ExcitedModes = self.excited.insert(selection);
        Ok(stored)
    }

    /// Latest selection, if any
    pub fn excited(&self) -> Option<&ExcitedModes> {
        self.excited.as_ref()
    }

    /// Excited eigenfunctions of the latest selection
    pub fn excited_phi(&self) -> Option<&DMatrix<Complex64>> {
        self.excited.as_ref().map(|e| &e.phi)
    }

    /// Excited wavenumbers of the latest selection
    pub fn excited_k(&self) -> Option<&DVector<Complex64>> {
        self.excited.as_ref().map(|e| &e.k)
    }
}

impl fmt::Display for ModeSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ModeSet with {} distinct modes", self.m)
    }
}

// =================================================================================================
// Tests
// =================================================================================================
