pub use env::*;
pub use logger::*;
pub use plot::*;

pub mod env;
pub mod logger;
pub mod plot;
