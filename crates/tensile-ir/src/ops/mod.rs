mod input;
mod slice;

pub use input::*;
pub use slice::*;
