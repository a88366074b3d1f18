pub mod league;
pub mod position;
pub mod team;

pub use league::*;
pub use position::*;
pub use team::*;
