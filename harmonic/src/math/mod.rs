pub use convolution::*;

pub mod convolution;
