//! Accumulation-precision policy.
//!
//! Intermediate computations (sum reductions, dot products, matrix multiply)
//! should run at a higher precision than the storage type, otherwise rounding
//! errors compound and reduced-precision inputs like [`DType::F16`] or
//! [`DType::BF16`] overflow or underflow on benign-looking data. The mapping
//! lives here so that every kernel applies the same policy instead of picking
//! an ad hoc accumulator.
//!
//! The policy is keyed on the device class: accelerators cap accumulation at
//! single precision because double-precision arithmetic is markedly slower
//! there, while CPU paths promote single precision up to double. Complex
//! types follow the same rules component-wise.
//!
//! The table is total over the closed [`DType`] and [`DeviceKind`]
//! enumerations, so an unsupported pair is unrepresentable.

use crate::{DType, DeviceKind};

impl DType {
    /// Returns the data type used for intermediate accumulation when
    /// computing with elements of this type on the given device class.
    pub fn accumulate(self, device: DeviceKind) -> DType {
        match device {
            DeviceKind::Cpu => self.accumulate_cpu(),
            DeviceKind::Cuda | DeviceKind::Metal => self.accumulate_accelerator(),
        }
    }

    /// Binary-device form of [`accumulate`](DType::accumulate): collapses the
    /// device class to an accelerator/non-accelerator distinction.
    ///
    /// `accumulate_on(true)` agrees with `accumulate(DeviceKind::Cuda)` for
    /// every data type.
    pub fn accumulate_on(self, is_accelerator: bool) -> DType {
        if is_accelerator {
            self.accumulate(DeviceKind::Cuda)
        } else {
            self.accumulate(DeviceKind::Cpu)
        }
    }

    fn accumulate_cpu(self) -> DType {
        match self {
            DType::F64 => DType::F64,
            DType::F32 => DType::F64,
            DType::F16 => DType::F32,
            DType::BF16 => DType::F32,
            DType::F8E4M3 => DType::F32,
            DType::F8E5M2 => DType::F32,
            DType::F8E4M3FNUZ => DType::F32,
            DType::F8E5M2FNUZ => DType::F32,
            DType::I64 => DType::I64,
            DType::I32 => DType::I64,
            DType::I16 => DType::I64,
            DType::I8 => DType::I64,
            DType::U8 => DType::I64,
            DType::Bool => DType::Bool,
            DType::Complex16 => DType::Complex32,
            DType::Complex32 => DType::Complex64,
            DType::Complex64 => DType::Complex64,
        }
    }

    // Accelerators never accumulate wider than single precision.
    fn accumulate_accelerator(self) -> DType {
        match self {
            DType::F64 => DType::F32,
            DType::F32 => DType::F32,
            DType::F16 => DType::F32,
            DType::BF16 => DType::F32,
            DType::F8E4M3 => DType::F32,
            DType::F8E5M2 => DType::F32,
            DType::F8E4M3FNUZ => DType::F32,
            DType::F8E5M2FNUZ => DType::F32,
            DType::I64 => DType::I64,
            DType::I32 => DType::I64,
            DType::I16 => DType::I64,
            DType::I8 => DType::I64,
            DType::U8 => DType::I64,
            DType::Bool => DType::Bool,
            DType::Complex16 => DType::Complex32,
            DType::Complex32 => DType::Complex32,
            DType::Complex64 => DType::Complex32,
        }
    }
}
