pub mod config;
pub mod error;
pub mod math;
pub mod sample;
pub mod series;
pub mod utils;

pub use config::*;
pub use error::*;
pub use math::*;
pub use sample::*;
pub use series::*;
pub use utils::*;
