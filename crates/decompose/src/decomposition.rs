//! The decomposition result triple and the algorithm contract.

use crate::error::DecomposeError;

/// An additive decomposition of a series into trend, seasonal, and
/// residual components, index-aligned with the input.
///
/// Invariant: `trend[i] + seasonal[i] + residual[i]` reconstructs the
/// original value at every position (implementations define the residual
/// by subtraction, so the identity is exact up to floating-point
/// rounding).
#[derive(Debug, Clone, PartialEq)]
pub struct Decomposition {
    trend: Vec<f64>,
    seasonal: Vec<f64>,
    residual: Vec<f64>,
}

impl Decomposition {
    /// Creates a decomposition from its three components.
    ///
    /// # Panics
    ///
    /// Panics if the component lengths differ; implementations of
    /// [`Decompose`] always produce equal-length components.
    pub fn new(trend: Vec<f64>, seasonal: Vec<f64>, residual: Vec<f64>) -> Self {
        assert_eq!(
            trend.len(),
            seasonal.len(),
            "decomposition components must have equal length"
        );
        assert_eq!(
            trend.len(),
            residual.len(),
            "decomposition components must have equal length"
        );
        Self {
            trend,
            seasonal,
            residual,
        }
    }

    /// The slow-varying trend component.
    pub fn trend(&self) -> &[f64] {
        &self.trend
    }

    /// The repeating seasonal component, centered to zero mean.
    pub fn seasonal(&self) -> &[f64] {
        &self.seasonal
    }

    /// What remains after trend and seasonal are removed.
    pub fn residual(&self) -> &[f64] {
        &self.residual
    }

    /// Number of timesteps.
    pub fn len(&self) -> usize {
        self.trend.len()
    }

    /// Whether the decomposition is empty.
    pub fn is_empty(&self) -> bool {
        self.trend.is_empty()
    }

    /// Recombines the three components: `trend + seasonal + residual`.
    pub fn reconstruct(&self) -> Vec<f64> {
        self.trend
            .iter()
            .zip(&self.seasonal)
            .zip(&self.residual)
            .map(|((t, s), r)| t + s + r)
            .collect()
    }
}

/// The fixed contract for seasonal-trend decomposition algorithms.
///
/// The pipeline invokes this with default configuration and consumes the
/// three components; any STL-style implementation satisfying the additive
/// invariant can stand behind it.
pub trait Decompose {
    /// Decomposes `series` into trend, seasonal, and residual components
    /// of the same length.
    fn decompose(&self, series: &[f64]) -> Result<Decomposition, DecomposeError>;
}
