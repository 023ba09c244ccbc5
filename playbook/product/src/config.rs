use std::path::PathBuf;

use harmonic::{workspace_path, CosineSeries, ProductConfig};
use serde::Deserialize;

#[derive(Debug)]
pub struct ProductRun {
  pub product: ProductConfig,
  pub u: CosineSeries,
  pub v: CosineSeries,
  pub start: f64,
  pub end: f64,
  pub samples: usize,
  pub out_file: PathBuf,
  pub csv_file: Option<PathBuf>,
}

#[derive(Debug, Deserialize)]
#[serde(default)]
struct YamlConfig {
  pub neglect_high_harmonics: bool,
  pub omega: f64,
  pub u: Vec<f64>,
  pub v: Vec<f64>,
  pub start: f64,
  pub end: f64,
  pub samples: usize,
  pub out_file: String,
  pub csv_file: Option<String>,
}

impl Default for YamlConfig {
  fn default() -> Self {
    Self {
      neglect_high_harmonics: false,
      omega: 1.0,
      u: vec![1.0, 1.0 / 2.0, 1.0 / 4.0, 1.0 / 8.0, 1.0 / 16.0, 1.0 / 32.0, 1.0 / 16.0],
      v: vec![9.0, -8.0, 7.0, 6.0, 5.0, -4.0, 3.0],
      start: 0.0,
      end: 4.0,
      samples: 1000,
      out_file: "product.png".to_string(),
      csv_file: None,
    }
  }
}

impl ProductRun {
  /// Reads `config.yaml` next to this crate's manifest, or the file named by `PRODUCT_CONFIG`.
  pub fn read() -> anyhow::Result<Self> {
    let path = match std::env::var("PRODUCT_CONFIG") {
      Ok(path) => PathBuf::from(path),
      Err(_) => PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("config.yaml"),
    };
    let contents = String::from_utf8(std::fs::read(&path)?)?;
    Self::from_yaml(&contents)
  }

  pub fn from_yaml(contents: &str) -> anyhow::Result<Self> {
    let yaml: YamlConfig = serde_yaml::from_str(contents)?;
    if yaml.samples == 0 {
      return Err(anyhow::anyhow!("samples must be positive"));
    }
    if !yaml.start.is_finite() || !yaml.end.is_finite() || yaml.start >= yaml.end {
      return Err(anyhow::anyhow!(
        "Domain start {} must be before end {}",
        yaml.start,
        yaml.end
      ));
    }
    let csv_file = match yaml.csv_file {
      Some(csv_file) => Some(workspace_path(&csv_file)?),
      None => None,
    };
    Ok(Self {
      product: ProductConfig {
        neglect_high_harmonics: yaml.neglect_high_harmonics,
      },
      u: CosineSeries::new(yaml.u, yaml.omega)?,
      v: CosineSeries::new(yaml.v, yaml.omega)?,
      start: yaml.start,
      end: yaml.end,
      samples: yaml.samples,
      out_file: workspace_path(&yaml.out_file)?,
      csv_file,
    })
  }
}
