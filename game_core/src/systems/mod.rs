pub mod levelup;
pub mod tug;

pub use levelup::*;
pub use tug::*;
