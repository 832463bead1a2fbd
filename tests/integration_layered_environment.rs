//! Integration tests: single layers + layered composition
//!
//! These tests verify that the composed sound-speed function routes every
//! depth to the right layer and reproduces the layer samples.

use approx::assert_relative_eq;
use ocean_env::environment::{AcousticParameter, DepthProfile, SspValues};
use ocean_env::EnvError;

mod common;
use common::{
    assert_values_close, basement, one_layer_model, sample, sediment, three_layer_model,
    two_layer_model, water_column,
};

// =================================================================================================
// Single layer
// =================================================================================================

#[test]
fn test_single_layer_passes_through_samples() {
    let layer = water_column();
    let sspf = one_layer_model().build_interpolant().unwrap();

    for (z, c) in layer.z.iter().zip(layer.alpha_r.iter()) {
        assert_eq!(sspf.evaluate(*z).unwrap(), *c, "sample at z = {}", z);
    }
}

#[test]
fn test_single_layer_exposes_raw_speeds() {
    let sspf = one_layer_model().build_interpolant().unwrap();

    match sspf.ssp_vals() {
        SspValues::Sampled(values) => {
            assert_eq!(values.as_slice(), water_column().alpha_r.as_slice())
        }
        SspValues::Placeholder(_) => panic!("single medium must expose sampled values"),
    }
}

#[test]
fn test_single_layer_matches_layer_interpolant() {
    let composed = one_layer_model().build_interpolant().unwrap();
    let layer = water_column().build_interpolant().unwrap();

    let depths = [0.0, 12.5, 33.3, 50.0, 99.9, 100.0];
    assert_eq!(sample(&composed, &depths), sample(&layer, &depths));
}

// =================================================================================================
// Two layers
// =================================================================================================

#[test]
fn test_two_layer_half_open_boundary() {
    let sspf = two_layer_model().build_interpolant().unwrap();
    let upper = water_column().build_interpolant().unwrap();
    let lower = sediment().build_interpolant().unwrap();

    let b1 = 100.0;
    for eps in [1e-3, 1e-6, 0.5] {
        assert_eq!(sspf.evaluate(b1 - eps).unwrap(), upper.evaluate(b1 - eps).unwrap());
    }
    assert_eq!(sspf.evaluate(b1).unwrap(), lower.evaluate(b1).unwrap());
    assert_eq!(sspf.evaluate(b1).unwrap(), 1650.0);
}

#[test]
fn test_two_layer_placeholder_values() {
    let model = two_layer_model();
    let sspf = model.build_interpolant().unwrap();

    assert!(sspf.ssp_vals().is_placeholder());
    match sspf.ssp_vals() {
        SspValues::Placeholder(m) => assert_eq!(m.shape(), (model.depth.len(), 1)),
        SspValues::Sampled(_) => unreachable!(),
    }
}

// =================================================================================================
// Three layers
// =================================================================================================

#[test]
fn test_three_layer_routing() {
    let sspf = three_layer_model().build_interpolant().unwrap();
    let layers = [
        water_column().build_interpolant().unwrap(),
        sediment().build_interpolant().unwrap(),
        basement().build_interpolant().unwrap(),
    ];

    let cases = [
        (0.0, 0),
        (60.0, 0),
        (99.99, 0),
        (100.0, 1),
        (120.0, 1),
        (129.99, 1),
        (130.0, 2),
        (180.0, 2),
        (200.0, 2),
    ];

    for (depth, layer) in cases {
        assert_eq!(sspf.layer_index(depth).unwrap(), layer, "depth {}", depth);
        assert_eq!(
            sspf.evaluate(depth).unwrap(),
            layers[layer].evaluate(depth).unwrap(),
            "depth {}",
            depth
        );
    }
}

#[test]
fn test_deep_depths_use_deepest_layer() {
    let sspf = three_layer_model().build_interpolant().unwrap();

    // Basement: 2000 m/s at 130 m to 2070 m/s at 200 m
    assert_relative_eq!(sspf.evaluate(180.0).unwrap(), 2050.0, epsilon = 1e-9);
    assert_eq!(sspf.evaluate(130.0).unwrap(), 2000.0);
}

#[test]
fn test_vectorised_matches_scalar() {
    let sspf = three_layer_model().build_interpolant().unwrap();
    let depths = [5.0, 99.0, 100.0, 101.0, 129.0, 130.0, 131.0, 199.0];

    let vectorised = sample(&sspf, &depths);
    let scalar: Vec<f64> = depths.iter().map(|&d| sspf.evaluate(d).unwrap()).collect();

    assert_values_close(&vectorised, &scalar, 1e-12, "vectorised vs scalar");
}

#[test]
fn test_depth_grid_sampling() {
    let model = three_layer_model();
    let sspf = model.build_interpolant().unwrap();
    let values = sspf.sample_depth_grid().unwrap();

    assert_eq!(values.len(), model.depth.len());
    assert_eq!(values[0], 1510.0);
    assert_eq!(values[10], 1650.0);
    assert_eq!(values[20], 2070.0);
}

#[test]
fn test_attenuation_through_layers() {
    let attenuation = three_layer_model()
        .build_parameter_interpolant(AcousticParameter::CompressionalAttenuation)
        .unwrap();

    assert_eq!(attenuation.evaluate(50.0).unwrap(), 0.0);
    assert_eq!(attenuation.evaluate(110.0).unwrap(), 0.2);
    assert_eq!(attenuation.evaluate(150.0).unwrap(), 0.1);
}

#[test]
fn test_build_is_repeatable() {
    let model = three_layer_model();
    let first = model.build_interpolant().unwrap();
    let second = model.build_interpolant().unwrap();

    assert_eq!(first, second);
}

// =================================================================================================
// Failures
// =================================================================================================

#[test]
fn test_unsupported_layer_counts() {
    for n_media in [0, 4, -3] {
        let mut model = two_layer_model();
        model.n_media = n_media;

        let err = model.build_interpolant().unwrap_err();
        assert!(
            matches!(err, EnvError::UnsupportedLayerCount { n_media: n, .. } if n == n_media),
            "n_media = {}: {:?}",
            n_media,
            err
        );
    }
}

#[test]
fn test_outside_total_range() {
    let sspf = three_layer_model().build_interpolant().unwrap();

    assert!(matches!(sspf.evaluate(-1.0), Err(EnvError::OutOfRange { .. })));
    assert!(matches!(sspf.evaluate(200.5), Err(EnvError::OutOfRange { .. })));
    assert!(matches!(
        sspf.evaluate_many(&[10.0, 250.0]),
        Err(EnvError::OutOfRange { .. })
    ));
}

#[test]
fn test_overlapping_layers_rejected() {
    let mut model = two_layer_model();
    model.raw[1].z = vec![90.0, 115.0, 130.0];

    assert!(matches!(model.build_interpolant(), Err(EnvError::DomainError { .. })));
}

#[test]
fn test_layer_shape_mismatch_propagates() {
    let mut model = three_layer_model();
    model.raw[1].alpha_r.push(1700.0);

    assert_eq!(
        model.build_interpolant().unwrap_err(),
        EnvError::ShapeMismatch { field: "alpha_r", expected: 3, actual: 4 }
    );
}
