pub mod advisor;
pub mod needs;

pub use advisor::*;
pub use needs::*;
