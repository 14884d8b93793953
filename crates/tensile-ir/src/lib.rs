#![warn(missing_docs)]

//! # Tensile IR
//!
//! A lazy intermediate representation for tensor programs. Operations are
//! recorded as immutable graph nodes: the operation kind and attributes are
//! captured eagerly, while derived properties such as the output shape are
//! inferred on first demand and memoized, so recording an operation never
//! forces upstream shape resolution. Every node carries a structural hash
//! over its kind and attributes, which the graph builder uses to merge
//! equivalent subexpressions.

pub mod infer;

mod cache;
mod error;
mod node;
mod ops;

pub use cache::*;
pub use error::*;
pub use node::*;
pub use ops::*;
