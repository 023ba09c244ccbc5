use serde::{Deserialize, Serialize};

/// Options consumed by [`crate::multiply`].
///
/// `neglect_high_harmonics` drops harmonics `N..=2N-2` from a product so it keeps
/// the length of its inputs. The discarded amount is what [`crate::truncation_error`] reports.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductConfig {
  #[serde(default)]
  pub neglect_high_harmonics: bool,
}

impl ProductConfig {
  pub fn complete() -> Self {
    Self {
      neglect_high_harmonics: false,
    }
  }

  pub fn truncated() -> Self {
    Self {
      neglect_high_harmonics: true,
    }
  }
}
