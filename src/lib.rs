//! ocean-env-rs: Ocean Acoustic Environment Framework
//!
//! Data structures for a normal-mode propagation pipeline: layered
//! sound-speed environments and excited-mode extraction from precomputed
//! modal solutions.
//!
//! # Architecture
//!
//! ocean-env-rs is built on two principles:
//!
//! 1. **Environment and Modes are independent**
//!    - The environment describes the medium (what the sound travels through)
//!    - The mode set is the external solver's answer (how it propagates)
//!
//! 2. **Raw and Ready types**
//!    - Raw types hold samples exactly as read
//!    - A single `build_interpolant` call validates them and returns an
//!      immutable, queryable type
//!
//! # Quick Start
//!
//! ```rust
//! use ocean_env::environment::{DepthProfile, LayeredSspModel, SspProfile};
//! use ocean_env::modes::ModeSet;
//! use nalgebra::DMatrix;
//!
//! # fn main() -> Result<(), ocean_env::EnvError> {
//! // 1. Water column over a sediment layer
//! let water = SspProfile::fluid(vec![0.0, 100.0], vec![1500.0, 1480.0], vec![1.0, 1.0]);
//! let sediment = SspProfile::fluid(vec![100.0, 130.0], vec![1700.0, 1730.0], vec![1.8, 1.8]);
//! let model = LayeredSspModel::new(vec![water, sediment], vec![0.0, 100.0, 130.0], 2);
//!
//! // 2. Compose the sound-speed function
//! let sspf = model.build_interpolant()?;
//! assert_eq!(sspf.evaluate(50.0)?, 1490.0);
//! assert_eq!(sspf.evaluate(100.0)?, 1700.0);
//!
//! // 3. Select the modes excited by a source at 50 m
//! let phi = DMatrix::from_row_slice(3, 3, &[
//!     0.0, 0.0, 0.0,
//!     1.0, 0.5, 0.1,
//!     0.2, 0.9, 0.8,
//! ]);
//! let mut modes = ModeSet::from_real(&[0.42, 0.41, 0.40], &phi, &[0.0, 50.0, 100.0])?;
//! let excited = modes.select_excited(50.0, 0.3)?;
//! assert_eq!(excited.indices, vec![0, 1]);
//! # Ok(())
//! # }
//! ```
//!
//! # Modules
//!
//! - [`environment`]: Sound-speed layers and their composition
//! - [`modes`]: Normal-mode solutions and excited-mode selection
//! - [`output`]: CSV export
//! - [`error`]: Error taxonomy

pub mod error;
pub mod environment;
pub mod modes;
pub mod output;

pub use error::{EnvError, EnvResult};

pub mod prelude {
    //! Convenient imports for common usage
    //!
    //! ```rust
    //!
    //! use ocean_env::prelude::*;
    //! ```
    pub use crate::environment::{AcousticParameter,
                                 DepthProfile,
                                 LayeredSsp,
                                 LayeredSspModel,
                                 ProfileInterpolant,
                                 SspProfile,
                                 SspValues};
    pub use crate::modes::{ExcitationConfig,
                           ExcitedModeSelector,
                           ExcitedModes,
                           ModeSet,
                           ModeSetParts};
    pub use crate::error::{EnvError, EnvResult};
}
