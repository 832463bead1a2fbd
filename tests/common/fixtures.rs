//! Reference environments and mode sets for integration tests
//!
//! The profiles are small but physically plausible: a Munk-like water
//! column, a sediment layer and a basement, each sampled on a few depths.

use nalgebra::{DMatrix, DVector};
use num::complex::Complex64;
use ocean_env::environment::{
    Boundaries, BottomBoundary, HalfSpace, LayeredSspModel, SspProfile, TopBoundary,
};
use ocean_env::modes::{ModeSet, ModeSetParts};

/// Water column 0-100 m
pub fn water_column() -> SspProfile {
    SspProfile::new(
        vec![0.0, 25.0, 50.0, 75.0, 100.0],
        vec![1510.0, 1500.0, 1490.0, 1492.0, 1496.0],
        vec![0.0; 5],
        vec![1.0; 5],
        vec![0.0; 5],
        vec![0.0; 5],
    )
}

/// Sediment 100-130 m
pub fn sediment() -> SspProfile {
    SspProfile::new(
        vec![100.0, 115.0, 130.0],
        vec![1650.0, 1665.0, 1680.0],
        vec![0.0; 3],
        vec![1.8; 3],
        vec![0.2; 3],
        vec![0.0; 3],
    )
}

/// Basement 130-200 m
pub fn basement() -> SspProfile {
    SspProfile::new(
        vec![130.0, 200.0],
        vec![2000.0, 2070.0],
        vec![800.0, 800.0],
        vec![2.2, 2.2],
        vec![0.1, 0.1],
        vec![0.2, 0.2],
    )
}

/// Master depth grid from 0 to `bottom` every 10 m
pub fn depth_grid(bottom: f64) -> Vec<f64> {
    let n = (bottom / 10.0) as usize;
    (0..=n).map(|i| i as f64 * 10.0).collect()
}

pub fn one_layer_model() -> LayeredSspModel {
    LayeredSspModel::new(vec![water_column()], depth_grid(100.0), 1)
}

pub fn two_layer_model() -> LayeredSspModel {
    LayeredSspModel::new(vec![water_column(), sediment()], depth_grid(130.0), 2)
}

pub fn three_layer_model() -> LayeredSspModel {
    LayeredSspModel::new(
        vec![water_column(), sediment(), basement()],
        depth_grid(200.0),
        3,
    )
    .with_opt("CVW")
    .with_point_counts(vec![500, 150, 350])
    .with_roughness(vec![0.0, 0.0, 0.0])
}

/// Mode set of 3 modes on a 5-point grid
///
/// At z = 40 m the amplitudes are exactly [1.0, 0.5, 0.1]; the surface row
/// is a pressure-release null.
pub fn reference_mode_set() -> ModeSet {
    let z = DVector::from_vec(vec![0.0, 20.0, 40.0, 60.0, 80.0]);
    let k = DVector::from_vec(vec![
        Complex64::new(0.4180, 1.0e-7),
        Complex64::new(0.4150, 3.0e-7),
        Complex64::new(0.4100, 9.0e-7),
    ]);

    let real = [
        0.0, 0.0, 0.0,
        0.6, 0.9, 0.7,
        1.0, -0.5, 0.1,
        0.7, -0.8, -0.6,
        0.3, -0.2, 0.4,
    ];
    let values: Vec<Complex64> = real.iter().map(|&v| Complex64::new(v, 0.0)).collect();
    let phi = DMatrix::from_row_slice(5, 3, &values);

    let mut parts = ModeSetParts::new(k, phi, z);
    parts.freq_vec = vec![100.0];
    parts.n_freq = 1;
    parts.n_media = 2;
    parts.n_points = vec![500, 150];
    parts.depth = vec![0.0, 100.0, 130.0];
    parts.rho = vec![1.0, 1.8];
    parts.boundaries = Boundaries::new(
        TopBoundary::new("V"),
        BottomBoundary::new("A").with_half_space(HalfSpace::fluid(1800.0, 2.0)),
    );

    ModeSet::new(parts).expect("reference mode set is valid")
}
