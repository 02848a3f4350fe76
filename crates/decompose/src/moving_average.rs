//! Classical moving-average decomposition.

use crate::decomposition::{Decompose, Decomposition};
use crate::error::DecomposeError;

/// Classical additive decomposition with a centered moving-average trend.
///
/// - Trend: centered moving average over one full period. For an even
///   period the window spans `period + 1` points with half weight at both
///   ends. Near the series edges the window is clamped to the available
///   range and its weights renormalized, so every point receives a finite
///   trend value and downstream adjusted series stay finite.
/// - Seasonal: per-phase mean of the detrended series, re-centered to zero
///   mean over one period.
/// - Residual: `input - trend - seasonal`, making the additive
///   reconstruction exact.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MovingAverageDecomposer {
    period: usize,
}

impl MovingAverageDecomposer {
    /// Creates a decomposer with the given seasonal period.
    ///
    /// # Errors
    ///
    /// Returns [`DecomposeError::InvalidPeriod`] if `period < 2`.
    pub fn new(period: usize) -> Result<Self, DecomposeError> {
        if period < 2 {
            return Err(DecomposeError::InvalidPeriod { period });
        }
        Ok(Self { period })
    }

    /// The seasonal period.
    pub fn period(&self) -> usize {
        self.period
    }
}

impl Default for MovingAverageDecomposer {
    /// Monthly data: period 12.
    fn default() -> Self {
        Self { period: 12 }
    }
}

impl Decompose for MovingAverageDecomposer {
    fn decompose(&self, series: &[f64]) -> Result<Decomposition, DecomposeError> {
        let n = series.len();
        let p = self.period;
        if n < 2 * p {
            return Err(DecomposeError::TooShort { len: n, min: 2 * p });
        }

        let trend = centered_moving_average(series, p);

        // Per-phase means of the detrended series.
        let mut phase_sum = vec![0.0; p];
        let mut phase_count = vec![0usize; p];
        for (i, (&x, &t)) in series.iter().zip(&trend).enumerate() {
            phase_sum[i % p] += x - t;
            phase_count[i % p] += 1;
        }
        let mut phase_mean: Vec<f64> = phase_sum
            .iter()
            .zip(&phase_count)
            .map(|(&s, &c)| s / c as f64)
            .collect();

        // Center the seasonal cycle to zero mean so the trend keeps the level.
        let offset = phase_mean.iter().sum::<f64>() / p as f64;
        for m in &mut phase_mean {
            *m -= offset;
        }

        let seasonal: Vec<f64> = (0..n).map(|i| phase_mean[i % p]).collect();
        let residual: Vec<f64> = series
            .iter()
            .zip(&trend)
            .zip(&seasonal)
            .map(|((&x, &t), &s)| x - t - s)
            .collect();

        Ok(Decomposition::new(trend, seasonal, residual))
    }
}

/// Centered moving average over one period, half-weighted at the window
/// ends for even periods, clamped and renormalized at the series edges.
fn centered_moving_average(series: &[f64], period: usize) -> Vec<f64> {
    let n = series.len();
    let half = period / 2;
    let even = period % 2 == 0;

    let mut trend = Vec::with_capacity(n);
    for i in 0..n {
        let lo = i.saturating_sub(half);
        let hi = (i + half).min(n - 1);
        let mut num = 0.0;
        let mut den = 0.0;
        for (j, &x) in series.iter().enumerate().take(hi + 1).skip(lo) {
            let dist = i.abs_diff(j);
            let w = if even && dist == half { 0.5 } else { 1.0 };
            num += w * x;
            den += w;
        }
        trend.push(num / den);
    }
    trend
}
