//! Common utilities for integration tests
#![allow(dead_code)]

pub mod fixtures;
pub mod test_helpers;

// Re-export commonly used items
pub use fixtures::{
    basement,
    depth_grid,
    one_layer_model,
    reference_mode_set,
    sediment,
    three_layer_model,
    two_layer_model,
    water_column,
};
pub use test_helpers::{assert_values_close, relative_error, sample};
