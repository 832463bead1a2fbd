//! Layered sound-speed model
//!
//! Stitches the interpolants of up to three depth-contiguous layers into one
//! piecewise function of depth.
//!
//! # Lifecycle
//!
//! - [`LayeredSspModel`]: raw state, exactly as read (nothing validated)
//! - [`LayeredSspModel::build_interpolant`]: validates and composes
//! - [`LayeredSsp`]: ready state, the only type that answers depth queries
//!
//! # Boundary convention
//!
//! The boundary between layer `i` and layer `i + 1` is `b = raw[i].z[last]`.
//! Depths strictly above it (`d < b`) use layer `i`; depths at or below it
//! (`d >= b`) use layer `i + 1`. The composed function may be discontinuous in
//! value at a boundary, never in its domain: when the next layer starts up to
//! [`INTERFACE_TOLERANCE`] below `b`, it is evaluated at its own top for depths
//! in that gap.
//!
//! # Example
//!
//! ```rust
//! use ocean_env::environment::{LayeredSspModel, SspProfile, DepthProfile};
//!
//! let water = SspProfile::fluid(vec![0.0, 100.0], vec![1500.0, 1490.0], vec![1.0, 1.0]);
//! let sediment = SspProfile::fluid(vec![100.0, 120.0], vec![1600.0, 1650.0], vec![1.8, 1.8]);
//!
//! let model = LayeredSspModel::new(vec![water, sediment], vec![0.0, 50.0, 100.0, 120.0], 2);
//! let sspf = model.build_interpolant().unwrap();
//!
//! assert_eq!(sspf.evaluate(50.0).unwrap(), 1495.0);
//! assert_eq!(sspf.evaluate(100.0).unwrap(), 1600.0); // boundary belongs to the deeper layer
//! ```

use crate::environment::profile::{ProfileInterpolant, SspProfile};
use crate::environment::traits::{AcousticParameter, DepthProfile};
use crate::error::{EnvError, EnvResult};
use nalgebra::{DMatrix, DVector};

/// Largest supported number of media
pub const MAX_MEDIA: usize = 3;

/// Absolute tolerance (m) when matching a layer bottom to the next layer top
pub const INTERFACE_TOLERANCE: f64 = 1e-9;

// =================================================================================================
// Raw model
// =================================================================================================

/// Raw layered sound-speed description
#[derive(Debug, Clone, PartialEq)]
pub struct LayeredSspModel {
    /// Number of media, as declared by the environment (valid: 1 to 3)
    pub n_media: i32,
    /// Per-layer samples, shallowest first
    pub raw: Vec<SspProfile>,
    /// Master depth grid spanning all layers (m)
    pub depth: Vec<f64>,
    /// Interpolation / option string carried from the environment
    pub opt: Option<String>,
    /// Number of mesh points per layer
    pub n_points: Option<Vec<usize>>,
    /// Interface roughness per layer (m)
    pub sigma: Option<Vec<f64>>,
}

impl LayeredSspModel {
    /// Create without optional metadata
    pub fn new(raw: Vec<SspProfile>, depth: Vec<f64>, n_media: i32) -> Self {
        Self {
            n_media,
            raw,
            depth,
            opt: None,
            n_points: None,
            sigma: None,
        }
    }

    /// Attach the option string
    pub fn with_opt(mut self, opt: impl Into<String>) -> Self {
        self.opt = Some(opt.into());
        self
    }

    /// Attach per-layer mesh point counts
    pub fn with_point_counts(mut self, n_points: Vec<usize>) -> Self {
        self.n_points = Some(n_points);
        self
    }

    /// Attach per-layer interface roughness
    pub fn with_roughness(mut self, sigma: Vec<f64>) -> Self {
        self.sigma = Some(sigma);
        self
    }

    /// Validated number of media
    ///
    /// # Errors
    /// - `UnsupportedLayerCount` if `n_media` is outside `1..=3`
    /// - `ShapeMismatch` if `raw` (or optional per-layer metadata) does not
    ///   hold exactly `n_media` entries
    pub fn layer_count(&self) -> EnvResult<usize> {
        let n = usize::try_from(self.n_media)
            .ok()
            .filter(|n| (1..=MAX_MEDIA).contains(n))
            .ok_or(EnvError::UnsupportedLayerCount {
                n_media: self.n_media,
                max: MAX_MEDIA,
            })?;

        if self.raw.len() != n {
            return Err(EnvError::shape_mismatch("raw", n, self.raw.len()));
        }
        if let Some(points) = &self.n_points {
            if points.len() != n {
                return Err(EnvError::shape_mismatch("n_points", n, points.len()));
            }
        }
        if let Some(sigma) = &self.sigma {
            if sigma.len() != n {
                return Err(EnvError::shape_mismatch("sigma", n, sigma.len()));
            }
        }

        Ok(n)
    }

    /// Build the composed sound-speed function
    pub fn build_interpolant(&self) -> EnvResult<LayeredSsp> {
        self.build_parameter_interpolant(AcousticParameter::CompressionalSpeed)
    }

    /// Build the composed function of any layer parameter
    ///
    /// Layer interpolant errors (`DomainError`, `ShapeMismatch`) propagate
    /// unchanged. Adjacent layers that do not share their interface depth fail
    /// with `DomainError`.
    pub fn build_parameter_interpolant(
        &self,
        parameter: AcousticParameter,
    ) -> EnvResult<LayeredSsp> {
        let n_media = self.layer_count()?;

        let interpolants = self
            .raw
            .iter()
            .map(|layer| layer.build_parameter_interpolant(parameter))
            .collect::<EnvResult<Vec<ProfileInterpolant>>>()?;

        for (i, pair) in interpolants.windows(2).enumerate() {
            let (_, bottom) = pair[0].depth_range();
            let (top, _) = pair[1].depth_range();
            if (bottom - top).abs() > INTERFACE_TOLERANCE {
                return Err(EnvError::domain(
                    "LayeredSspModel",
                    format!(
                        "layer {} ends at {} but layer {} starts at {}",
                        i,
                        bottom,
                        i + 1,
                        top
                    ),
                ));
            }
        }

        let segments: Vec<LayerSegment> = interpolants
            .into_iter()
            .map(|interpolant| {
                let (lower, upper) = interpolant.depth_range();
                LayerSegment {
                    lower,
                    upper,
                    interpolant,
                }
            })
            .collect();

        let ssp_vals = if n_media == 1 {
            SspValues::Sampled(DVector::from_column_slice(self.raw[0].column(parameter)))
        } else {
            log::debug!(
                "{} media: ssp_vals is a zero placeholder of shape ({}, 1)",
                n_media,
                self.depth.len()
            );
            SspValues::Placeholder(DMatrix::zeros(self.depth.len(), 1))
        };

        log::debug!(
            "composed {} over {} media, boundaries {:?}",
            parameter.field_name(),
            n_media,
            segments[..n_media - 1].iter().map(|s| s.upper).collect::<Vec<_>>()
        );

        Ok(LayeredSsp {
            parameter,
            segments,
            depth: DVector::from_column_slice(&self.depth),
            ssp_vals,
        })
    }
}

// =================================================================================================
// Ready model
// =================================================================================================

/// One layer of the composed function
#[derive(Debug, Clone, PartialEq)]
pub struct LayerSegment {
    /// Shallowest depth covered by the layer (m)
    pub lower: f64,
    /// Deepest depth covered by the layer (m)
    pub upper: f64,
    /// Layer interpolant
    pub interpolant: ProfileInterpolant,
}

/// Per-depth values exposed next to the composed function
#[derive(Debug, Clone, PartialEq)]
pub enum SspValues {
    /// Single medium: the layer's raw samples
    Sampled(DVector<f64>),

    /// Several media: zero matrix of shape `(depth.len(), 1)`
    ///
    /// Descriptive only. It is never filled from layer data; query the
    /// composed function instead.
    Placeholder(DMatrix<f64>),
}

impl SspValues {
    /// Whether the values are a placeholder
    pub fn is_placeholder(&self) -> bool {
        matches!(self, Self::Placeholder(_))
    }

    /// Sampled values (single medium only)
    pub fn sampled(&self) -> Option<&DVector<f64>> {
        match self {
            Self::Sampled(values) => Some(values),
            Self::Placeholder(_) => None,
        }
    }
}

/// Composed piecewise function over all layers
#[derive(Debug, Clone, PartialEq)]
pub struct LayeredSsp {
    parameter: AcousticParameter,
    segments: Vec<LayerSegment>,
    depth: DVector<f64>,
    ssp_vals: SspValues,
}

impl LayeredSsp {
    /// Parameter represented by this function
    pub fn parameter(&self) -> AcousticParameter {
        self.parameter
    }

    /// Number of media
    pub fn n_media(&self) -> usize {
        self.segments.len()
    }

    /// Ordered layer segments, shallowest first
    pub fn segments(&self) -> &[LayerSegment] {
        &self.segments
    }

    /// Interface depths `[b_1, ..]` between consecutive layers
    pub fn boundaries(&self) -> Vec<f64> {
        self.segments[..self.segments.len() - 1]
            .iter()
            .map(|s| s.upper)
            .collect()
    }

    /// Master depth grid
    pub fn depth(&self) -> &DVector<f64> {
        &self.depth
    }

    /// Sampled values or placeholder, see [`SspValues`]
    pub fn ssp_vals(&self) -> &SspValues {
        &self.ssp_vals
    }

    /// Index of the layer that evaluates `depth`
    ///
    /// # Errors
    /// `OutOfRange` if `depth` is outside the union of the layer ranges.
    pub fn layer_index(&self, depth: f64) -> EnvResult<usize> {
        let (top, bottom) = self.depth_range();
        if !(depth >= top && depth <= bottom) {
            return Err(EnvError::out_of_range(depth, top, bottom));
        }

        // Half-open: a depth equal to an interface goes to the deeper layer
        let interfaces = &self.segments[..self.segments.len() - 1];
        Ok(interfaces.partition_point(|s| s.upper <= depth))
    }

    /// Evaluate at every entry of the master depth grid
    pub fn sample_depth_grid(&self) -> EnvResult<DVector<f64>> {
        self.evaluate_many(self.depth.as_slice())
    }
}

impl DepthProfile for LayeredSsp {
    fn evaluate(&self, depth: f64) -> EnvResult<f64> {
        let segment = &self.segments[self.layer_index(depth)?];
        // A deeper layer owns [b, upper] even if its samples start inside the tolerance gap
        segment.interpolant.evaluate(depth.max(segment.lower))
    }

    fn depth_range(&self) -> (f64, f64) {
        let top = self.segments[0].lower;
        let bottom = self.segments[self.segments.len() - 1].upper;
        (top, bottom)
    }

    fn name(&self) -> &str {
        self.parameter.field_name()
    }
}

// =================================================================================================
// Tests
// =================================================================================================
