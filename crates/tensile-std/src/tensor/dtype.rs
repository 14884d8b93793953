use serde::{Deserialize, Serialize};

/// The data type of tensor elements.
///
/// Complex variants follow the component-width naming convention:
/// [`Complex16`](crate::Complex16) holds two [`f16`](half::f16) components,
/// and so on.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, Serialize, Deserialize)]
pub enum DType {
    /// 64-bit float.
    F64,
    /// 32-bit float.
    F32,
    /// 16-bit float (IEEE half precision).
    F16,
    /// 16-bit brain float.
    BF16,
    /// 8-bit float, 4-bit exponent and 3-bit mantissa. Storage only.
    F8E4M3,
    /// 8-bit float, 5-bit exponent and 2-bit mantissa. Storage only.
    F8E5M2,
    /// 8-bit float, 4-bit exponent and 3-bit mantissa, no negative zero or
    /// infinity. Storage only.
    F8E4M3FNUZ,
    /// 8-bit float, 5-bit exponent and 2-bit mantissa, no negative zero or
    /// infinity. Storage only.
    F8E5M2FNUZ,
    /// 64-bit signed integer.
    I64,
    /// 32-bit signed integer.
    I32,
    /// 16-bit signed integer.
    I16,
    /// 8-bit signed integer.
    I8,
    /// 8-bit unsigned integer.
    U8,
    /// Boolean.
    Bool,
    /// Complex number with two [`f16`](half::f16) components.
    Complex16,
    /// Complex number with two `f32` components.
    Complex32,
    /// Complex number with two `f64` components.
    Complex64,
}

impl DType {
    /// Every supported data type.
    pub const ALL: [DType; 17] = [
        DType::F64,
        DType::F32,
        DType::F16,
        DType::BF16,
        DType::F8E4M3,
        DType::F8E5M2,
        DType::F8E4M3FNUZ,
        DType::F8E5M2FNUZ,
        DType::I64,
        DType::I32,
        DType::I16,
        DType::I8,
        DType::U8,
        DType::Bool,
        DType::Complex16,
        DType::Complex32,
        DType::Complex64,
    ];

    /// Returns the size of the data type in bytes.
    pub fn size(&self) -> usize {
        match self {
            DType::F64 => core::mem::size_of::<f64>(),
            DType::F32 => core::mem::size_of::<f32>(),
            DType::F16 => core::mem::size_of::<half::f16>(),
            DType::BF16 => core::mem::size_of::<half::bf16>(),
            DType::F8E4M3 => 1,
            DType::F8E5M2 => 1,
            DType::F8E4M3FNUZ => 1,
            DType::F8E5M2FNUZ => 1,
            DType::I64 => core::mem::size_of::<i64>(),
            DType::I32 => core::mem::size_of::<i32>(),
            DType::I16 => core::mem::size_of::<i16>(),
            DType::I8 => core::mem::size_of::<i8>(),
            DType::U8 => core::mem::size_of::<u8>(),
            DType::Bool => core::mem::size_of::<bool>(),
            DType::Complex16 => 2 * core::mem::size_of::<half::f16>(),
            DType::Complex32 => 2 * core::mem::size_of::<f32>(),
            DType::Complex64 => 2 * core::mem::size_of::<f64>(),
        }
    }

    /// Returns true if the data type is a float type.
    pub fn is_float(&self) -> bool {
        matches!(
            self,
            DType::F64
                | DType::F32
                | DType::F16
                | DType::BF16
                | DType::F8E4M3
                | DType::F8E5M2
                | DType::F8E4M3FNUZ
                | DType::F8E5M2FNUZ
        )
    }

    /// Returns true if the data type is a signed integer type.
    pub fn is_int(&self) -> bool {
        matches!(self, DType::I64 | DType::I32 | DType::I16 | DType::I8)
    }

    /// Returns true if the data type is an unsigned integer type.
    pub fn is_uint(&self) -> bool {
        matches!(self, DType::U8)
    }

    /// Returns true if the data type is a boolean type.
    pub fn is_bool(&self) -> bool {
        matches!(self, DType::Bool)
    }

    /// Returns true if the data type is a complex type.
    pub fn is_complex(&self) -> bool {
        matches!(self, DType::Complex16 | DType::Complex32 | DType::Complex64)
    }

    /// Returns the name of the data type.
    pub fn name(&self) -> &'static str {
        match self {
            DType::F64 => "f64",
            DType::F32 => "f32",
            DType::F16 => "f16",
            DType::BF16 => "bf16",
            DType::F8E4M3 => "f8e4m3",
            DType::F8E5M2 => "f8e5m2",
            DType::F8E4M3FNUZ => "f8e4m3fnuz",
            DType::F8E5M2FNUZ => "f8e5m2fnuz",
            DType::I64 => "i64",
            DType::I32 => "i32",
            DType::I16 => "i16",
            DType::I8 => "i8",
            DType::U8 => "u8",
            DType::Bool => "bool",
            DType::Complex16 => "complex16",
            DType::Complex32 => "complex32",
            DType::Complex64 => "complex64",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_classify_dtypes() {
        assert!(DType::F16.is_float());
        assert!(DType::F8E5M2.is_float());
        assert!(!DType::Complex32.is_float());
        assert!(DType::I16.is_int());
        assert!(!DType::U8.is_int());
        assert!(DType::U8.is_uint());
        assert!(DType::Bool.is_bool());
        assert!(DType::Complex16.is_complex());
    }

    #[test]
    fn should_report_sizes() {
        assert_eq!(DType::F8E4M3.size(), 1);
        assert_eq!(DType::BF16.size(), 2);
        assert_eq!(DType::Complex64.size(), 16);
    }
}
