pub mod class;
pub mod generator;
pub mod league;

pub use class::*;
pub use generator::*;
pub use league::*;
