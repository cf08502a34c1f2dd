pub mod exhaustive;
pub mod greedy;
pub mod limits;
pub mod merit;
pub mod types;

pub use limits::*;
pub use merit::*;
pub use types::*;
