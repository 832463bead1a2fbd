//! Top and bottom boundary records
//!
//! Plain data carried alongside a mode solution. No invariants beyond field
//! presence.

/// Halfspace properties at a domain edge
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct HalfSpace {
    /// Compressional speed (m/s)
    pub alpha_r: f64,
    /// Shear speed (m/s)
    pub beta_r: f64,
    /// Density (g/cm³)
    pub rho: f64,
    /// Compressional attenuation
    pub alpha_i: f64,
    /// Shear attenuation
    pub beta_i: f64,
}

impl HalfSpace {
    /// Fluid halfspace (no shear, no attenuation)
    pub fn fluid(alpha_r: f64, rho: f64) -> Self {
        Self {
            alpha_r,
            rho,
            ..Default::default()
        }
    }
}

/// Surface boundary
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TopBoundary {
    /// Option string (e.g. `"V"` vacuum, `"A"` acousto-elastic)
    pub opt: String,
    pub half_space: Option<HalfSpace>,
}

impl TopBoundary {
    pub fn new(opt: impl Into<String>) -> Self {
        Self {
            opt: opt.into(),
            half_space: None,
        }
    }

    pub fn with_half_space(mut self, half_space: HalfSpace) -> Self {
        self.half_space = Some(half_space);
        self
    }
}

/// Seabed boundary
#[derive(Debug, Clone, PartialEq, Default)]
pub struct BottomBoundary {
    /// Option string (`"A"` analytic halfspace, `"R"` rigid, ...)
    pub opt: String,
    pub half_space: Option<HalfSpace>,
    /// Interface roughness (m)
    pub sigma: f64,
}

impl BottomBoundary {
    pub fn new(opt: impl Into<String>) -> Self {
        Self {
            opt: opt.into(),
            half_space: None,
            sigma: 0.0,
        }
    }

    pub fn with_half_space(mut self, half_space: HalfSpace) -> Self {
        self.half_space = Some(half_space);
        self
    }
}

/// Both domain edges
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Boundaries {
    pub top: TopBoundary,
    pub bottom: BottomBoundary,
}

impl Boundaries {
    pub fn new(top: TopBoundary, bottom: BottomBoundary) -> Self {
        Self { top, bottom }
    }
}
