use crate::{CosineSeries, ProductConfig, SeriesError, SeriesResult};
use log::*;

fn check_compatible(u: &CosineSeries, v: &CosineSeries) -> SeriesResult {
  if u.omega() != v.omega() {
    return Err(SeriesError::IncompatibleFrequency {
      lhs: u.omega(),
      rhs: v.omega(),
    });
  }
  if u.len() != v.len() {
    return Err(SeriesError::LengthMismatch {
      lhs: u.len(),
      rhs: v.len(),
    });
  }
  Ok(())
}

/// Product of two cosine series of equal frequency and length N.
///
/// Every pair of harmonics is folded with `cos(p)cos(q) = ½[cos(p−q) + cos(p+q)]`:
/// ```text
/// r[0] = a[0]b[0] + ½ Σ_{n=1}^{N-1} a[n]b[n]
/// r[k] = ½ Σ_{n=0}^{N-1-k} (a[n]b[n+k] + a[n+k]b[n]) + ½ Σ_{n=0}^{k} a[n]b[k-n]    1 <= k <= N-1
/// r[k] = ½ Σ_{n=k-N+1}^{N-1} a[n]b[k-n]                                             N <= k <= 2N-2
/// ```
/// The result has `2N-1` coefficients, or `N` when `cfg.neglect_high_harmonics` drops the last band.
pub fn multiply(u: &CosineSeries, v: &CosineSeries, cfg: &ProductConfig) -> SeriesResult<CosineSeries> {
  check_compatible(u, v)?;

  let a = u.coefficients();
  let b = v.coefficients();
  let n = a.len();

  let out_len = match cfg.neglect_high_harmonics {
    true => n,
    false => 2 * n - 1,
  };
  let mut coefficients = Vec::with_capacity(out_len);

  // difference pairs p == q contribute half to the constant term
  let mut dc = 0.0;
  for i in 1..n {
    dc += a[i] * b[i];
  }
  coefficients.push(a[0] * b[0] + dc / 2.0);

  for k in 1..n {
    let mut diff = 0.0;
    for i in 0..n - k {
      diff += a[i] * b[i + k] + a[i + k] * b[i];
    }
    let mut sum = 0.0;
    for i in 0..=k {
      sum += a[i] * b[k - i];
    }
    coefficients.push(diff / 2.0 + sum / 2.0);
  }

  if cfg.neglect_high_harmonics {
    debug!(
      "Neglecting harmonics {}..={} of product",
      n,
      2 * n - 2
    );
  } else {
    for k in n..2 * n - 1 {
      let mut sum = 0.0;
      for i in k + 1 - n..n {
        sum += a[i] * b[k - i];
      }
      coefficients.push(sum / 2.0);
    }
  }

  trace!("Product coefficients: {:?}", coefficients);
  CosineSeries::new(coefficients, u.omega())
}

/// Signed sum of the harmonics `multiply` drops when neglecting the high band:
/// ```text
/// ½ Σ_{g=0}^{N-2} Σ_{h=0}^{N-2-g} a[g+h+1] b[N-1-h]
/// ```
/// With `k = g + N` and `i = g + h + 1` the summand is `a[i]b[k-i]` for `i` in `k-N+1..=N-1`,
/// so this equals `Σ r[k]` over the high band, the amount the truncated product misses at `x = 0`.
pub fn truncation_error(u: &CosineSeries, v: &CosineSeries) -> SeriesResult<f64> {
  check_compatible(u, v)?;

  let a = u.coefficients();
  let b = v.coefficients();
  let n = a.len();

  let mut error = 0.0;
  for g in 0..n.saturating_sub(1) {
    for h in 0..n - 1 - g {
      error += a[g + h + 1] * b[n - 1 - h];
    }
  }
  Ok(error / 2.0)
}

#[cfg(test)]
mod tests {
  use super::*;
  use rand::Rng;

  const EPS: f64 = 1e-9;

  fn assert_close(lhs: &[f64], rhs: &[f64]) {
    assert_eq!(lhs.len(), rhs.len());
    for (k, (l, r)) in lhs.iter().zip(rhs.iter()).enumerate() {
      assert!((l - r).abs() < EPS, "coefficient {}: {} != {}", k, l, r);
    }
  }

  fn random_series(rng: &mut impl Rng, len: usize, omega: f64) -> anyhow::Result<CosineSeries> {
    let coefficients = (0..len).map(|_| rng.gen_range(-10.0..10.0)).collect();
    Ok(CosineSeries::new(coefficients, omega)?)
  }

  #[test]
  fn known_product() -> anyhow::Result<()> {
    // (1 + 2cos x)(3 + 4cos x) = 7 + 10cos x + 4cos 2x
    let u = CosineSeries::new(vec![1.0, 2.0], 1.0)?;
    let v = CosineSeries::new(vec![3.0, 4.0], 1.0)?;
    let f = multiply(&u, &v, &ProductConfig::complete())?;
    assert_close(f.coefficients(), &[7.0, 10.0, 4.0]);
    assert_eq!(f.omega(), 1.0);
    Ok(())
  }

  #[test]
  fn square_of_first_harmonic() -> anyhow::Result<()> {
    // cos²(2x) = ½ + ½cos(4x)
    let u = CosineSeries::new(vec![0.0, 1.0], 2.0)?;
    let f = multiply(&u, &u, &ProductConfig::complete())?;
    assert_close(f.coefficients(), &[0.5, 0.0, 0.5]);
    assert_eq!(f.omega(), 2.0);
    Ok(())
  }

  #[test]
  fn output_length() -> anyhow::Result<()> {
    let mut rng = rand::thread_rng();
    for len in 1..8 {
      let u = random_series(&mut rng, len, 1.5)?;
      let v = random_series(&mut rng, len, 1.5)?;
      assert_eq!(multiply(&u, &v, &ProductConfig::complete())?.len(), 2 * len - 1);
      assert_eq!(multiply(&u, &v, &ProductConfig::truncated())?.len(), len);
    }
    Ok(())
  }

  #[test]
  fn truncated_is_prefix_of_complete() -> anyhow::Result<()> {
    let mut rng = rand::thread_rng();
    let u = random_series(&mut rng, 6, 1.0)?;
    let v = random_series(&mut rng, 6, 1.0)?;
    let full = multiply(&u, &v, &ProductConfig::complete())?;
    let low = multiply(&u, &v, &ProductConfig::truncated())?;
    assert_close(low.coefficients(), &full.coefficients()[..6]);
    Ok(())
  }

  #[test]
  fn commutative() -> anyhow::Result<()> {
    let mut rng = rand::thread_rng();
    for len in 1..10 {
      let u = random_series(&mut rng, len, 0.7)?;
      let v = random_series(&mut rng, len, 0.7)?;
      let uv = multiply(&u, &v, &ProductConfig::complete())?;
      let vu = multiply(&v, &u, &ProductConfig::complete())?;
      assert_close(uv.coefficients(), vu.coefficients());
    }
    Ok(())
  }

  #[test]
  fn constant_acts_as_scalar() -> anyhow::Result<()> {
    let mut rng = rand::thread_rng();
    let c = 3.25;
    let v = random_series(&mut rng, 5, 1.0)?;
    let u = CosineSeries::new(vec![c, 0.0, 0.0, 0.0, 0.0], 1.0)?;
    let f = multiply(&u, &v, &ProductConfig::complete())?;

    let mut expected: Vec<f64> = v.coefficients().iter().map(|b| c * b).collect();
    expected.extend([0.0; 4]);
    assert_close(f.coefficients(), &expected);
    Ok(())
  }

  #[test]
  fn matches_pointwise_product() -> anyhow::Result<()> {
    let mut rng = rand::thread_rng();
    let u = random_series(&mut rng, 7, 1.3)?;
    let v = random_series(&mut rng, 7, 1.3)?;
    let f = multiply(&u, &v, &ProductConfig::complete())?;
    for i in 0..200 {
      let x = -5.0 + i as f64 * 0.05;
      let direct = u.evaluate(x) * v.evaluate(x);
      assert!((f.evaluate(x) - direct).abs() < 1e-8, "x = {}", x);
    }
    Ok(())
  }

  #[test]
  fn error_is_sum_of_high_band() -> anyhow::Result<()> {
    let mut rng = rand::thread_rng();
    for len in 1..9 {
      let u = random_series(&mut rng, len, 1.0)?;
      let v = random_series(&mut rng, len, 1.0)?;
      let full = multiply(&u, &v, &ProductConfig::complete())?;
      let high: f64 = full.coefficients()[len..].iter().sum();
      assert!((truncation_error(&u, &v)? - high).abs() < EPS);

      let low = multiply(&u, &v, &ProductConfig::truncated())?;
      let direct = u.evaluate(0.0) * v.evaluate(0.0);
      assert!((low.evaluate(0.0) + truncation_error(&u, &v)? - direct).abs() < 1e-8);
    }
    Ok(())
  }

  #[test]
  fn single_coefficient_has_no_error() -> anyhow::Result<()> {
    let u = CosineSeries::new(vec![2.0], 1.0)?;
    let v = CosineSeries::new(vec![-3.0], 1.0)?;
    assert_eq!(truncation_error(&u, &v)?, 0.0);
    let f = multiply(&u, &v, &ProductConfig::complete())?;
    assert_close(f.coefficients(), &[-6.0]);
    Ok(())
  }

  #[test]
  fn rejects_mismatched_inputs() -> anyhow::Result<()> {
    let u = CosineSeries::new(vec![1.0, 2.0, 3.0], 1.0)?;
    let w = CosineSeries::new(vec![1.0, 2.0, 3.0], 2.0)?;
    let x = CosineSeries::new(vec![1.0, 2.0, 3.0, 4.0], 1.0)?;
    let cfg = ProductConfig::default();

    assert_eq!(
      multiply(&u, &w, &cfg).unwrap_err(),
      SeriesError::IncompatibleFrequency { lhs: 1.0, rhs: 2.0 }
    );
    assert_eq!(
      multiply(&u, &x, &cfg).unwrap_err(),
      SeriesError::LengthMismatch { lhs: 3, rhs: 4 }
    );
    assert!(matches!(
      truncation_error(&u, &w),
      Err(SeriesError::IncompatibleFrequency { .. })
    ));
    assert!(matches!(
      truncation_error(&x, &u),
      Err(SeriesError::LengthMismatch { lhs: 4, rhs: 3 })
    ));
    Ok(())
  }
}
