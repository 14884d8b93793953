mod accumulate;
mod complex;
mod device;
mod dtype;
mod element;
mod shape;

pub use complex::*;
pub use device::*;
pub use dtype::*;
pub use element::*;
pub use shape::*;
