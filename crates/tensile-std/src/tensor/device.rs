use serde::{Deserialize, Serialize};

/// The class of execution hardware a kernel runs on.
///
/// The accumulation-precision policy is keyed on this distinction because the
/// cost of double-precision arithmetic differs sharply between device classes.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, Serialize, Deserialize)]
pub enum DeviceKind {
    /// General-purpose host processor.
    Cpu,
    /// CUDA-class accelerator.
    Cuda,
    /// Metal-class accelerator.
    Metal,
}

impl DeviceKind {
    /// Returns true for device classes where double-precision arithmetic is
    /// markedly slower than single precision.
    pub fn is_accelerator(&self) -> bool {
        !matches!(self, DeviceKind::Cpu)
    }
}
