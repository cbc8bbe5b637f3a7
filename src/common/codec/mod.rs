pub mod encoder;
pub mod segment;
pub mod types;

pub use encoder::*;
pub use segment::*;
pub use types::*;
