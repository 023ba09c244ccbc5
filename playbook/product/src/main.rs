use crate::config::ProductRun;
use harmonic::*;
use log::*;

mod config;

fn title(neglect_high_harmonics: bool, error: f64) -> String {
  match neglect_high_harmonics {
    true => format!("f(x) ~ u(x) * v(x);      error: {:.2}", error),
    false => "f(x) = u(x) * v(x)".to_string(),
  }
}

fn main() -> anyhow::Result<()> {
  dotenv::dotenv().ok();
  init_logger();

  let ProductRun {
    product,
    u,
    v,
    start,
    end,
    samples,
    out_file,
    csv_file,
  } = ProductRun::read()?;

  let f = u.multiply(&v, &product)?;
  info!(
    "Multiplied {} x {} harmonics at omega {} into {} coefficients",
    u.len(),
    v.len(),
    u.omega(),
    f.len()
  );
  debug!("f(x) coefficients: {:?}", f.coefficients());

  let error = match product.neglect_high_harmonics {
    true => {
      let error = u.truncation_error(&v)?;
      info!("Maximal error due to multiplication: {}", error);
      error
    }
    false => 0.0,
  };

  let direct = sample(|x| u.evaluate(x) * v.evaluate(x), start, end, samples)?;
  let series = sample(|x| f.evaluate(x), start, end, samples)?;
  let cmp = Comparison::new(direct, series)?;
  info!(
    "Deviation over [{}, {}) with {} samples: max {:.3e}, rms {:.3e}",
    start,
    end,
    samples,
    cmp.max_abs_deviation(),
    cmp.rms_deviation()
  );

  if let Some(csv_file) = csv_file {
    cmp.write_csv(&csv_file)?;
    info!("Wrote samples to {}", csv_file.display());
  }

  let Comparison { direct, series } = cmp;
  Plot::plot(
    &[
      Curve::new(direct, "u(x) * v(x)"),
      Curve::new(series, "f(x)").dashed(),
    ],
    &out_file,
    &title(product.neglect_high_harmonics, error),
    "x",
    "y",
  )?;
  info!("Saved plot to {}", out_file.display());

  Ok(())
}
