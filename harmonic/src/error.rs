use thiserror::Error;

pub type SeriesResult<T = ()> = Result<T, SeriesError>;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum SeriesError {
  #[error("Invalid argument: {0}")]
  InvalidArgument(String),

  #[error("Incompatible frequency: {lhs} != {rhs}")]
  IncompatibleFrequency { lhs: f64, rhs: f64 },

  #[error("Coefficient length mismatch: {lhs} != {rhs}")]
  LengthMismatch { lhs: usize, rhs: usize },

  #[error("Invalid domain: {0}")]
  InvalidDomain(String),
}
