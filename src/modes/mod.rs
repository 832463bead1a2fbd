//! Normal modes
//!
//! This module holds the normal-mode solution computed by an external
//! eigen-solver and extracts the modes a source actually excites.
//!
//! # Core Concepts
//!
//! - **Mode set** ([`ModeSet`]): wavenumbers `k[i]` and eigenfunctions
//!   `phi[:, i]` sampled on the solver's depth grid
//! - **Selection** ([`ExcitedModeSelector`]): relative-amplitude filter at the
//!   source depth, returning a fresh [`ExcitedModes`]
//!
//! The selector never interpolates eigenfunctions: the source depth must be a
//! grid depth.

pub mod excitation;
pub mod mode_set;

pub use excitation::{ExcitationConfig, ExcitedModeSelector, ExcitedModes};
pub use mode_set::{ModeSet, ModeSetParts};
