pub mod generators;
pub mod loaders;

pub use generators::*;
pub use loaders::*;
