//! Piecewise-linear interpolation on a strictly increasing axis
//!
//! The interpolant passes through every sample and is monotone between
//! samples. Queries outside `[x[0], x[n-1]]` are rejected instead of
//! extrapolated.

use crate::error::{EnvError, EnvResult};
use nalgebra::DVector;

/// Check that `axis` has at least two points and is strictly increasing
pub(crate) fn validate_axis(axis: &[f64], context: &'static str) -> EnvResult<()> {
    if axis.len() < 2 {
        return Err(EnvError::domain(
            context,
            format!("need at least 2 depth points, got {}", axis.len()),
        ));
    }

    if let Some(i) = axis.iter().position(|z| !z.is_finite()) {
        return Err(EnvError::domain(
            context,
            format!("non-finite depth {} at index {}", axis[i], i),
        ));
    }

    if let Some(i) = axis.windows(2).position(|w| w[1] <= w[0]) {
        return Err(EnvError::domain(
            context,
            format!(
                "depths must be strictly increasing: z[{}] = {} followed by z[{}] = {}",
                i,
                axis[i],
                i + 1,
                axis[i + 1]
            ),
        ));
    }

    Ok(())
}

/// 1-D piecewise-linear interpolant `y(x)`
#[derive(Debug, Clone, PartialEq)]
pub struct LinearInterpolant {
    x: DVector<f64>,
    y: DVector<f64>,
}

impl LinearInterpolant {
    /// Build from an axis and a value column
    ///
    /// # Errors
    /// - `DomainError` if `x` has fewer than 2 points or is not strictly increasing
    /// - `ShapeMismatch` (reported as `field`) if `y.len() != x.len()`
    pub fn new(x: &[f64], y: &[f64], field: &'static str) -> EnvResult<Self> {
        validate_axis(x, "LinearInterpolant")?;

        if y.len() != x.len() {
            return Err(EnvError::shape_mismatch(field, x.len(), y.len()));
        }

        Ok(Self {
            x: DVector::from_column_slice(x),
            y: DVector::from_column_slice(y),
        })
    }

    /// Sample axis
    pub fn axis(&self) -> &DVector<f64> {
        &self.x
    }

    /// Sample values
    pub fn values(&self) -> &DVector<f64> {
        &self.y
    }

    /// Lower bound of the axis
    pub fn lower(&self) -> f64 {
        self.x[0]
    }

    /// Upper bound of the axis
    pub fn upper(&self) -> f64 {
        self.x[self.x.len() - 1]
    }

    /// Interpolate at `x`
    ///
    /// # Errors
    /// `OutOfRange` if `x` is outside `[lower, upper]` or not finite.
    pub fn evaluate(&self, x: f64) -> EnvResult<f64> {
        let (lower, upper) = (self.lower(), self.upper());

        // NaN fails both comparisons, so test the accepted range explicitly
        if !(x >= lower && x <= upper) {
            return Err(EnvError::out_of_range(x, lower, upper));
        }

        let xs = self.x.as_slice();
        let ys = self.y.as_slice();

        // First index with xs[idx] >= x
        let idx = xs.partition_point(|&v| v < x);

        if xs[idx] == x {
            return Ok(ys[idx]);
        }

        let lo = idx - 1;
        let t = (x - xs[lo]) / (xs[idx] - xs[lo]);
        Ok(ys[lo] + t * (ys[idx] - ys[lo]))
    }
}

// =================================================================================================
// Tests
// =================================================================================================
