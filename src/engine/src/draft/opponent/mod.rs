pub mod model;
pub mod personality;
pub mod scoring;

pub use model::*;
pub use personality::*;
pub use scoring::*;
