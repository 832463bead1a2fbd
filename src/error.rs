//! Error types for environment and mode computations
//!
//! Every fallible operation in the crate returns [`EnvResult`]. Errors are
//! raised where they are detected and propagate unchanged; nothing in the
//! crate retries or substitutes values.

use thiserror::Error;

/// Crate-wide result type
pub type EnvResult<T> = Result<T, EnvError>;

/// Environment / mode error taxonomy
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EnvError {
    /// Malformed depth axis (too short, unordered, duplicated, gaps between layers)
    #[error("domain error in {context}: {details}")]
    DomainError {
        context: &'static str,
        details: String,
    },

    /// Parallel sequences with inconsistent lengths
    #[error("shape mismatch for `{field}`: expected {expected}, got {actual}")]
    ShapeMismatch {
        field: &'static str,
        expected: usize,
        actual: usize,
    },

    /// Interpolation query outside the sampled depth range
    #[error("depth {depth} outside sampled range [{lower}, {upper}]")]
    OutOfRange {
        depth: f64,
        lower: f64,
        upper: f64,
    },

    /// Layer count outside {1, 2, 3}
    #[error("unsupported number of media: {n_media} (expected 1 to {max})")]
    UnsupportedLayerCount {
        n_media: i32,
        max: usize,
    },

    /// Source depth is not an exact member of the mode depth grid
    #[error("source depth {depth} is not on the mode depth grid ({grid_points} points)")]
    DepthNotFound {
        depth: f64,
        grid_points: usize,
    },

    /// Peak modal amplitude at the source row is zero
    #[error("degenerate mode set: peak amplitude {peak} at depth {depth} (row {row})")]
    DegenerateModeSet {
        depth: f64,
        row: usize,
        peak: f64,
    },

    /// Configuration value rejected by `validate()`
    #[error("invalid configuration `{parameter}`: {details}")]
    InvalidConfig {
        parameter: &'static str,
        details: String,
    },
}

impl EnvError {
    pub fn domain(context: &'static str, details: impl Into<String>) -> Self {
        Self::DomainError {
            context,
            details: details.into(),
        }
    }

    pub fn shape_mismatch(field: &'static str, expected: usize, actual: usize) -> Self {
        Self::ShapeMismatch {
            field,
            expected,
            actual,
        }
    }

    pub fn out_of_range(depth: f64, lower: f64, upper: f64) -> Self {
        Self::OutOfRange {
            depth,
            lower,
            upper,
        }
    }

    pub fn invalid_config(parameter: &'static str, details: impl Into<String>) -> Self {
        Self::InvalidConfig {
            parameter,
            details: details.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        let err = EnvError::shape_mismatch("rho", 4, 3);
        assert_eq!(err.to_string(), "shape mismatch for `rho`: expected 4, got 3");

        let err = EnvError::out_of_range(120.0, 0.0, 100.0);
        assert_eq!(err.to_string(), "depth 120 outside sampled range [0, 100]");

        let err = EnvError::UnsupportedLayerCount { n_media: 4, max: 3 };
        assert!(err.to_string().contains("unsupported number of media: 4"));
    }

    #[test]
    fn test_domain_constructor() {
        let err = EnvError::domain("SspProfile", "depths not increasing");
        assert!(matches!(err, EnvError::DomainError { context: "SspProfile", .. }));
    }
}
