//! Sound-speed environment
//!
//! This module turns per-layer samples of the water column and seabed into
//! depth-continuous functions.
//!
//! # Core Concepts
//!
//! - **Layer** ([`SspProfile`]): raw samples of one medium on its own depth axis
//! - **Layered model** ([`LayeredSspModel`]): up to three contiguous layers
//! - **Ready functions** ([`ProfileInterpolant`], [`LayeredSsp`]): validated,
//!   immutable, queried through the [`DepthProfile`] trait
//!
//! # Raw vs Ready
//!
//! Raw types hold data exactly as read and check nothing. `build_interpolant`
//! validates and returns a distinct ready type, so a depth query can never be
//! issued against unvalidated samples.
//!
//! # Example
//!
//! ```rust
//! use ocean_env::environment::{LayeredSspModel, SspProfile, DepthProfile};
//!
//! let water = SspProfile::fluid(vec![0.0, 50.0], vec![1500.0, 1490.0], vec![1.0, 1.0]);
//! let model = LayeredSspModel::new(vec![water], vec![0.0, 25.0, 50.0], 1);
//!
//! let sspf = model.build_interpolant().unwrap();
//! let speeds = sspf.evaluate_many(&[0.0, 25.0, 50.0]).unwrap();
//! assert_eq!(speeds.as_slice(), &[1500.0, 1495.0, 1490.0]);
//! ```

pub mod boundary;
pub mod interpolation;
pub mod layered;
pub mod profile;
pub mod traits;

pub use boundary::{Boundaries, BottomBoundary, HalfSpace, TopBoundary};
pub use interpolation::LinearInterpolant;
pub use layered::{LayerSegment, LayeredSsp, LayeredSspModel, SspValues, MAX_MEDIA};
pub use profile::{ProfileInterpolant, SspProfile};
pub use traits::{AcousticParameter, DepthProfile};
