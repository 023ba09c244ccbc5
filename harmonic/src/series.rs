use crate::{ProductConfig, SeriesError, SeriesResult};

/// Truncated cosine series `Σ c[n]·cos(nωx)` for `n` in `0..len`.
/// Index `n` of the coefficients is the amplitude of the n-th harmonic.
#[derive(Debug, Clone, PartialEq)]
pub struct CosineSeries {
  coefficients: Vec<f64>,
  omega: f64,
}

impl CosineSeries {
  pub fn new(coefficients: Vec<f64>, omega: f64) -> SeriesResult<Self> {
    if coefficients.is_empty() {
      return Err(SeriesError::InvalidArgument(
        "Series needs at least one coefficient".to_string(),
      ));
    }
    if !omega.is_finite() {
      return Err(SeriesError::InvalidArgument(format!(
        "Omega must be finite, got {}",
        omega
      )));
    }
    if let Some((n, c)) = coefficients.iter().enumerate().find(|(_, c)| !c.is_finite()) {
      return Err(SeriesError::InvalidArgument(format!(
        "Coefficient {} must be finite, got {}",
        n, c
      )));
    }
    Ok(Self {
      coefficients,
      omega,
    })
  }

  pub fn omega(&self) -> f64 {
    self.omega
  }

  pub fn coefficients(&self) -> &[f64] {
    &self.coefficients
  }

  pub fn len(&self) -> usize {
    self.coefficients.len()
  }

  /// Always false, construction rejects an empty coefficient list.
  pub fn is_empty(&self) -> bool {
    self.coefficients.is_empty()
  }

  pub fn highest_harmonic(&self) -> usize {
    self.coefficients.len() - 1
  }

  /// Partial sum at `x`. A non-finite `x` gives a non-finite result.
  pub fn evaluate(&self, x: f64) -> f64 {
    self
      .coefficients
      .iter()
      .enumerate()
      .map(|(n, c)| c * (n as f64 * self.omega * x).cos())
      .sum()
  }

  pub fn multiply(&self, other: &Self, cfg: &ProductConfig) -> SeriesResult<Self> {
    crate::multiply(self, other, cfg)
  }

  pub fn truncation_error(&self, other: &Self) -> SeriesResult<f64> {
    crate::truncation_error(self, other)
  }
}
