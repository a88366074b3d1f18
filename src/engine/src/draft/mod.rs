pub mod candidate;
pub mod context;
pub mod engine;
pub mod market;
pub mod opponent;
pub mod pick;
pub mod recommendation;
pub mod strategy;

pub use candidate::*;
pub use context::*;
pub use engine::*;
pub use market::*;
pub use opponent::*;
pub use pick::*;
pub use recommendation::*;
pub use strategy::*;
