pub mod plan;
pub mod plant;
pub mod request;
pub mod scenario;

pub use plan::*;
pub use plant::*;
pub use request::*;
pub use scenario::*;
