//! Environment traits and types
//!
//! This module defines the core API shared by every depth-dependent quantity:
//! - `AcousticParameter`: type-safe identifier for the sampled layer columns
//! - `DepthProfile`: trait for anything that can be queried as `value(depth)`

use crate::error::EnvResult;
use nalgebra::DVector;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

// =================================================================================================
// Acoustic parameters (type-safe identifiers)
// =================================================================================================

/// Acoustic parameters sampled per layer
///
/// Each layer of a sound-speed profile stores one column per variant, all
/// sampled on the same depth axis.
///
/// # Example
/// ```
/// use ocean_env::environment::AcousticParameter;
///
/// let p = AcousticParameter::CompressionalSpeed;
/// assert_eq!(p.field_name(), "alpha_r");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AcousticParameter {
    /// Compressional (sound) speed αr (m/s)
    CompressionalSpeed,

    /// Shear speed βr (m/s)
    ShearSpeed,

    /// Density ρ (g/cm³)
    Density,

    /// Compressional attenuation αi
    CompressionalAttenuation,

    /// Shear attenuation βi
    ShearAttenuation,
}

impl AcousticParameter {
    /// All parameters, in storage order
    pub const ALL: [AcousticParameter; 5] = [
        AcousticParameter::CompressionalSpeed,
        AcousticParameter::ShearSpeed,
        AcousticParameter::Density,
        AcousticParameter::CompressionalAttenuation,
        AcousticParameter::ShearAttenuation,
    ];

    /// Field name used in error reports
    pub fn field_name(&self) -> &'static str {
        match self {
            AcousticParameter::CompressionalSpeed => "alpha_r",
            AcousticParameter::ShearSpeed => "beta_r",
            AcousticParameter::Density => "rho",
            AcousticParameter::CompressionalAttenuation => "alpha_i",
            AcousticParameter::ShearAttenuation => "beta_i",
        }
    }
}

// =================================================================================================
// Depth profile trait
// =================================================================================================

/// Trait for depth-dependent functions
///
/// # Responsibility
/// Answers `value(depth)` over a closed depth range. Queries outside the range
/// fail with [`EnvError::OutOfRange`](crate::error::EnvError::OutOfRange);
/// implementations never extrapolate.
///
/// Implemented by a single layer's [`ProfileInterpolant`](crate::environment::ProfileInterpolant)
/// and by the composed [`LayeredSsp`](crate::environment::LayeredSsp).
pub trait DepthProfile: Send + Sync {

    /// Evaluate at a single depth (m)
    fn evaluate(&self, depth: f64) -> EnvResult<f64>;

    /// Closed depth range `(top, bottom)` on which `evaluate` is defined
    fn depth_range(&self) -> (f64, f64);

    /// Evaluate at every depth of `depths`
    ///
    /// Returns a vector of the same length. The first failing depth aborts the
    /// whole evaluation.
    fn evaluate_many(&self, depths: &[f64]) -> EnvResult<DVector<f64>> {
        #[cfg(feature = "parallel")]
        {
            let values = depths
                .par_iter()
                .map(|&d| self.evaluate(d))
                .collect::<EnvResult<Vec<f64>>>()?;
            Ok(DVector::from_vec(values))
        }

        #[cfg(not(feature = "parallel"))]
        {
            let values = depths
                .iter()
                .map(|&d| self.evaluate(d))
                .collect::<EnvResult<Vec<f64>>>()?;
            Ok(DVector::from_vec(values))
        }
    }

    /// Whether `depth` lies inside `depth_range()`
    fn contains(&self, depth: f64) -> bool {
        let (top, bottom) = self.depth_range();
        depth >= top && depth <= bottom
    }

    /// Name used in logs and export headers
    fn name(&self) -> &str {
        "depth profile"
    }
}

// =================================================================================================
// Tests
// =================================================================================================
#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::EnvError;

    struct Linear;

    impl DepthProfile for Linear {
        fn evaluate(&self, depth: f64) -> EnvResult<f64> {
            if !self.contains(depth) {
                return Err(EnvError::out_of_range(depth, 0.0, 10.0));
            }
            Ok(1500.0 + depth)
        }

        fn depth_range(&self) -> (f64, f64) {
            (0.0, 10.0)
        }
    }

    #[test]
    fn test_evaluate_many_keeps_order() {
        let values = Linear.evaluate_many(&[0.0, 5.0, 10.0]).unwrap();
        assert_eq!(values.as_slice(), &[1500.0, 1505.0, 1510.0]);
    }

    #[test]
    fn test_evaluate_many_aborts_on_failure() {
        let result = Linear.evaluate_many(&[1.0, 11.0]);
        assert!(matches!(result, Err(EnvError::OutOfRange { .. })));
    }

    #[test]
    fn test_field_names_unique() {
        let names: std::collections::HashSet<_> =
            AcousticParameter::ALL.iter().map(|p| p.field_name()).collect();
        assert_eq!(names.len(), 5);
    }
}
