#![cfg_attr(not(feature = "std"), no_std)]
#![warn(missing_docs)]

//! # Tensile Standard Library
//!
//! This library contains the core vocabulary types shared across tensile:
//! shapes, data types, device classes, complex numbers, and the
//! accumulation-precision policy applied by numeric kernels.

extern crate alloc;

mod tensor;
pub use tensor::*;

// Re-exported types
pub use half::{bf16, f16};
