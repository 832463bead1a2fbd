//! Three-Media Environment: Profile Export and Excited Modes
//!
//! Builds a water / sediment / basement sound-speed model, samples the
//! composed profile across all interfaces, then selects the modes of an
//! ideal waveguide that a source at 25 m actually excites.
//!
//! ## Structure
//!
//! **Phase 1 — Environment** (`LayeredSspModel`, 3 media)
//! - Layer routing at the interfaces (a boundary belongs to the deeper layer)
//! - CSV export of the composed profile
//!
//! **Phase 2 — Modes** (isovelocity 100 m channel, pressure-release surface, rigid bottom)
//! - φ_m(z) = sin((m - ½)·π·z / D)
//! - Selection at the source depth for a few thresholds
//! - CSV export of the excited eigenfunctions and wavenumbers
//!
//! Output files are written to the system temporary directory.

use nalgebra::DMatrix;
use ocean_env::{
    environment::{DepthProfile, LayeredSspModel, SspProfile},
    modes::{ExcitationConfig, ExcitedModeSelector, ModeSet},
    output::export::{export_wavenumbers_csv, CsvConfig, CsvExporter, CsvMetadata, Exporter},
};
use std::error::Error;
use std::f64::consts::PI;

// =============================================================================
// Environment
// =============================================================================

fn water_column() -> SspProfile {
    SspProfile::fluid(
        vec![0.0, 20.0, 50.0, 80.0, 100.0],
        vec![1510.0, 1502.0, 1490.0, 1493.0, 1497.0],
        vec![1.0; 5],
    )
}

fn sediment() -> SspProfile {
    SspProfile::new(
        vec![100.0, 130.0],
        vec![1650.0, 1680.0],
        vec![0.0, 0.0],
        vec![1.8, 1.8],
        vec![0.2, 0.2],
        vec![0.0, 0.0],
    )
}

fn basement() -> SspProfile {
    SspProfile::new(
        vec![130.0, 200.0],
        vec![2000.0, 2070.0],
        vec![800.0, 800.0],
        vec![2.2, 2.2],
        vec![0.1, 0.1],
        vec![0.2, 0.2],
    )
}

// =============================================================================
// Modes
// =============================================================================

/// Ideal waveguide modes on a 1 m grid
fn ideal_waveguide(depth: f64, frequency: f64, speed: f64, n_modes: usize) -> Result<ModeSet, Box<dyn Error>> {
    let k0 = 2.0 * PI * frequency / speed;
    let nz = depth as usize + 1;
    let z: Vec<f64> = (0..nz).map(|i| i as f64).collect();

    let kz = |m: usize| (m as f64 + 0.5) * PI / depth;
    let k: Vec<f64> = (0..n_modes).map(|m| (k0 * k0 - kz(m) * kz(m)).sqrt()).collect();
    let phi = DMatrix::from_fn(nz, n_modes, |r, m| (kz(m) * z[r]).sin());

    Ok(ModeSet::from_real(&k, &phi, &z)?)
}

fn main() -> Result<(), Box<dyn Error>> {
    println!("=== Three-Media Environment ===\n");

    // ---------------------------------------------------------------- Phase 1
    let model = LayeredSspModel::new(
        vec![water_column(), sediment(), basement()],
        (0..=20).map(|i| i as f64 * 10.0).collect(),
        3,
    )
    .with_opt("CVW")
    .with_point_counts(vec![500, 150, 350])
    .with_roughness(vec![0.0, 0.0, 0.0]);

    let sspf = model.build_interpolant()?;
    let (top, bottom) = sspf.depth_range();

    println!("Environment:");
    println!("  Media: {}", sspf.n_media());
    println!("  Depth range: {} - {} m", top, bottom);
    println!("  Interfaces: {:?} m", sspf.boundaries());
    println!("  Placeholder ssp_vals: {}\n", sspf.ssp_vals().is_placeholder());

    for depth in [50.0, 99.9, 100.0, 129.9, 130.0, 200.0] {
        println!(
            "  c({:>5.1} m) = {:>7.2} m/s  (layer {})",
            depth,
            sspf.evaluate(depth)?,
            sspf.layer_index(depth)?
        );
    }

    let out_dir = std::env::temp_dir();
    let profile_path = out_dir.join("three_media_ssp.csv");
    let profile_path = profile_path.to_string_lossy();

    let metadata = CsvMetadata {
        title: Some("three media".to_string()),
        parameter: Some(sspf.name().to_string()),
        n_media: Some(sspf.n_media()),
        ..Default::default()
    };
    CsvExporter::new(CsvConfig::default().with_metadata(metadata)).export_profile(&sspf, 201, &profile_path)?;
    println!("\nProfile written to {}", profile_path);

    // ---------------------------------------------------------------- Phase 2
    let frequency = 50.0;
    let source_depth = 25.0;
    let mut modes = ideal_waveguide(100.0, frequency, 1500.0, 8)?;

    println!("\n=== Excited Modes ===\n");
    println!("{} at {} Hz, source at {} m", modes, frequency, source_depth);

    for threshold in [0.0, 0.1, 0.5, 0.9] {
        let excited = ExcitedModeSelector::select(&modes, source_depth, threshold)?;
        println!("  threshold {:.1}: modes {:?}", threshold, excited.indices);
    }

    let selector = ExcitedModeSelector::new(ExcitationConfig::with_threshold(0.3))?;
    let excited = selector.apply(&modes, source_depth)?;
    println!(
        "\nSelected {} of {} modes (peak |phi| = {:.3})",
        excited.len(),
        modes.m(),
        excited.peak
    );

    modes.select_excited(source_depth, 0.3)?;

    let modes_path = out_dir.join("three_media_modes.csv");
    let modes_path = modes_path.to_string_lossy();
    CsvExporter::default().export_excited_modes(&modes, &modes_path)?;

    let k_path = out_dir.join("three_media_wavenumbers.csv");
    let k_path = k_path.to_string_lossy();
    let k_config = CsvConfig::high_precision().with_metadata(CsvMetadata {
        frequency: Some(frequency),
        ..CsvMetadata::from_selection(&excited)
    });
    export_wavenumbers_csv(&excited, &k_path, Some(&k_config))?;

    println!("Eigenfunctions written to {}", modes_path);
    println!("Wavenumbers written to {}", k_path);

    Ok(())
}
