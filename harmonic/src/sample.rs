use crate::{SeriesError, SeriesResult};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Sample {
  pub x: f64,
  pub y: f64,
}

/// Evaluate `f` at `samples` evenly spaced points of `[start, end)`.
/// The step is `(end - start) / samples` and the first point is `start`.
pub fn sample<F>(f: F, start: f64, end: f64, samples: usize) -> SeriesResult<Vec<Sample>>
where
  F: Fn(f64) -> f64 + Sync,
{
  if samples == 0 {
    return Err(SeriesError::InvalidDomain(
      "Sample count must be positive".to_string(),
    ));
  }
  if !start.is_finite() || !end.is_finite() {
    return Err(SeriesError::InvalidDomain(format!(
      "Domain bounds must be finite, got [{}, {})",
      start, end
    )));
  }
  if end < start {
    return Err(SeriesError::InvalidDomain(format!(
      "Domain end {} is before start {}",
      end, start
    )));
  }

  let step = (end - start) / samples as f64;
  Ok(
    (0..samples)
      .into_par_iter()
      .map(|i| {
        let x = start + i as f64 * step;
        Sample { x, y: f(x) }
      })
      .collect(),
  )
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct ComparisonRow {
  x: f64,
  direct: f64,
  series: f64,
}

/// Two curves sampled on the same grid, e.g. `u(x)·v(x)` and the product series `f(x)`.
#[derive(Debug, Clone)]
pub struct Comparison {
  pub direct: Vec<Sample>,
  pub series: Vec<Sample>,
}

impl Comparison {
  pub fn new(direct: Vec<Sample>, series: Vec<Sample>) -> SeriesResult<Self> {
    if direct.len() != series.len() {
      return Err(SeriesError::LengthMismatch {
        lhs: direct.len(),
        rhs: series.len(),
      });
    }
    if let Some((d, s)) = direct.iter().zip(series.iter()).find(|(d, s)| d.x != s.x) {
      return Err(SeriesError::InvalidDomain(format!(
        "Sample grids differ at x = {} and x = {}",
        d.x, s.x
      )));
    }
    Ok(Self { direct, series })
  }

  fn deviations(&self) -> impl Iterator<Item = f64> + '_ {
    self
      .direct
      .iter()
      .zip(self.series.iter())
      .map(|(d, s)| (d.y - s.y).abs())
  }

  pub fn max_abs_deviation(&self) -> f64 {
    self.deviations().fold(0.0, f64::max)
  }

  pub fn rms_deviation(&self) -> f64 {
    if self.direct.is_empty() {
      return 0.0;
    }
    let sum_sq: f64 = self.deviations().map(|d| d.powi(2)).sum();
    (sum_sq / self.direct.len() as f64).sqrt()
  }

  /// CSV with header `x,direct,series`.
  pub fn write_csv(&self, path: &Path) -> anyhow::Result<()> {
    let mut writer = csv::Writer::from_path(path)?;
    for (d, s) in self.direct.iter().zip(self.series.iter()) {
      writer.serialize(ComparisonRow {
        x: d.x,
        direct: d.y,
        series: s.y,
      })?;
    }
    writer.flush()?;
    Ok(())
  }
}
