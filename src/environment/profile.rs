//! Single-layer sound-speed profile
//!
//! [`SspProfile`] holds the raw samples of one homogeneous layer exactly as
//! they were read from an environment description. Nothing is checked until
//! [`SspProfile::build_interpolant`] turns the samples into a
//! [`ProfileInterpolant`].
//!
//! # Example
//!
//! ```rust
//! use ocean_env::environment::{SspProfile, DepthProfile};
//!
//! let layer = SspProfile::fluid(
//!     vec![0.0, 50.0, 100.0],
//!     vec![1500.0, 1490.0, 1495.0],
//!     vec![1.0, 1.0, 1.0],
//! );
//!
//! let sspf = layer.build_interpolant().unwrap();
//! assert_eq!(sspf.evaluate(50.0).unwrap(), 1490.0);
//! assert!(sspf.evaluate(150.0).is_err());
//! ```

use crate::environment::interpolation::{validate_axis, LinearInterpolant};
use crate::environment::traits::{AcousticParameter, DepthProfile};
use crate::error::{EnvError, EnvResult};
use nalgebra::DVector;

/// Raw samples of one layer
///
/// All value columns are parallel to `z`.
#[derive(Debug, Clone, PartialEq)]
pub struct SspProfile {
    /// Sample depths (m), expected strictly increasing
    pub z: Vec<f64>,
    /// Compressional speed αr (m/s)
    pub alpha_r: Vec<f64>,
    /// Shear speed βr (m/s)
    pub beta_r: Vec<f64>,
    /// Density ρ (g/cm³)
    pub rho: Vec<f64>,
    /// Compressional attenuation αi
    pub alpha_i: Vec<f64>,
    /// Shear attenuation βi
    pub beta_i: Vec<f64>,
}

impl SspProfile {
    /// Create from the six raw columns
    pub fn new(
        z: Vec<f64>,
        alpha_r: Vec<f64>,
        beta_r: Vec<f64>,
        rho: Vec<f64>,
        alpha_i: Vec<f64>,
        beta_i: Vec<f64>,
    ) -> Self {
        Self {
            z,
            alpha_r,
            beta_r,
            rho,
            alpha_i,
            beta_i,
        }
    }

    /// Acoustic fluid layer: no shear, no attenuation
    pub fn fluid(z: Vec<f64>, alpha_r: Vec<f64>, rho: Vec<f64>) -> Self {
        let n = z.len();
        Self::new(z, alpha_r, vec![0.0; n], rho, vec![0.0; n], vec![0.0; n])
    }

    /// Number of depth samples
    pub fn points(&self) -> usize {
        self.z.len()
    }

    /// Shallowest sample depth, if any
    pub fn top(&self) -> Option<f64> {
        self.z.first().copied()
    }

    /// Deepest sample depth, if any
    pub fn bottom(&self) -> Option<f64> {
        self.z.last().copied()
    }

    /// Raw column for a parameter
    pub fn column(&self, parameter: AcousticParameter) -> &[f64] {
        match parameter {
            AcousticParameter::CompressionalSpeed => &self.alpha_r,
            AcousticParameter::ShearSpeed => &self.beta_r,
            AcousticParameter::Density => &self.rho,
            AcousticParameter::CompressionalAttenuation => &self.alpha_i,
            AcousticParameter::ShearAttenuation => &self.beta_i,
        }
    }

    /// Check the layer invariants
    ///
    /// # Errors
    /// - `DomainError` if `z` is shorter than 2 or not strictly increasing
    /// - `ShapeMismatch` naming the first column whose length differs from `z`
    pub fn validate(&self) -> EnvResult<()> {
        validate_axis(&self.z, "SspProfile")?;

        for parameter in AcousticParameter::ALL {
            let len = self.column(parameter).len();
            if len != self.z.len() {
                return Err(EnvError::shape_mismatch(
                    parameter.field_name(),
                    self.z.len(),
                    len,
                ));
            }
        }

        Ok(())
    }

    /// Build the sound-speed interpolant `αr(z)`
    ///
    /// Every call returns an independent, equivalent interpolant.
    pub fn build_interpolant(&self) -> EnvResult<ProfileInterpolant> {
        self.build_parameter_interpolant(AcousticParameter::CompressionalSpeed)
    }

    /// Build the interpolant of any sampled parameter against depth
    ///
    /// The whole layer is validated, not only the requested column.
    pub fn build_parameter_interpolant(
        &self,
        parameter: AcousticParameter,
    ) -> EnvResult<ProfileInterpolant> {
        self.validate()?;

        let interpolant =
            LinearInterpolant::new(&self.z, self.column(parameter), parameter.field_name())?;

        log::debug!(
            "built {} interpolant over [{}, {}] from {} samples",
            parameter.field_name(),
            interpolant.lower(),
            interpolant.upper(),
            self.z.len()
        );

        Ok(ProfileInterpolant {
            parameter,
            interpolant,
        })
    }
}

/// Ready-to-query interpolant of one layer parameter
#[derive(Debug, Clone, PartialEq)]
pub struct ProfileInterpolant {
    parameter: AcousticParameter,
    interpolant: LinearInterpolant,
}

impl ProfileInterpolant {
    /// Interpolated parameter
    pub fn parameter(&self) -> AcousticParameter {
        self.parameter
    }

    /// Sample depths
    pub fn depths(&self) -> &DVector<f64> {
        self.interpolant.axis()
    }

    /// Sample values
    pub fn values(&self) -> &DVector<f64> {
        self.interpolant.values()
    }
}

impl DepthProfile for ProfileInterpolant {
    fn evaluate(&self, depth: f64) -> EnvResult<f64> {
        self.interpolant.evaluate(depth)
    }

    fn depth_range(&self) -> (f64, f64) {
        (self.interpolant.lower(), self.interpolant.upper())
    }

    fn name(&self) -> &str {
        self.parameter.field_name()
    }
}

// =================================================================================================
// Tests
// =================================================================================================
