use core::fmt::Debug;

use half::{bf16, f16};

use crate::{Complex16, Complex32, Complex64, DType};

/// A scalar type that can be stored in a tensor.
///
/// Each element type carries the accumulator types a kernel should use for
/// intermediate computation, per device class. This is the compile-time
/// counterpart of [`DType::accumulate`]; the two tables agree by
/// construction and the agreement is enforced by tests.
///
/// The float8 storage formats have no scalar representation and therefore no
/// `Element` impl; they exist only as [`DType`] entries.
pub trait Element: Copy + Debug + Default + PartialEq + Send + Sync + 'static {
    /// Accumulator used for intermediate computation on CPU devices.
    type CpuAccumulator: Element;
    /// Accumulator used for intermediate computation on accelerator devices.
    type AcceleratorAccumulator: Element;

    /// The runtime data type tag of this element type.
    fn dtype() -> DType;
}

/// Accumulation type of `E` on CPU devices.
pub type CpuAcc<E> = <E as Element>::CpuAccumulator;
/// Accumulation type of `E` on accelerator devices.
pub type AcceleratorAcc<E> = <E as Element>::AcceleratorAccumulator;

/// Implements [`Element`] for a type, naming its entry in the
/// accumulation-type table.
macro_rules! make_element {
    (ty $type:ty, dtype $dtype:expr, cpu $cpu:ty, accelerator $accelerator:ty) => {
        impl Element for $type {
            type CpuAccumulator = $cpu;
            type AcceleratorAccumulator = $accelerator;

            fn dtype() -> DType {
                $dtype
            }
        }
    };
}

make_element!(ty bool, dtype DType::Bool, cpu bool, accelerator bool);

make_element!(ty i8, dtype DType::I8, cpu i64, accelerator i64);
make_element!(ty i16, dtype DType::I16, cpu i64, accelerator i64);
make_element!(ty i32, dtype DType::I32, cpu i64, accelerator i64);
make_element!(ty i64, dtype DType::I64, cpu i64, accelerator i64);
make_element!(ty u8, dtype DType::U8, cpu i64, accelerator i64);

make_element!(ty f16, dtype DType::F16, cpu f32, accelerator f32);
make_element!(ty bf16, dtype DType::BF16, cpu f32, accelerator f32);
make_element!(ty f32, dtype DType::F32, cpu f64, accelerator f32);
make_element!(ty f64, dtype DType::F64, cpu f64, accelerator f32);

make_element!(ty Complex16, dtype DType::Complex16, cpu Complex32, accelerator Complex32);
make_element!(ty Complex32, dtype DType::Complex32, cpu Complex64, accelerator Complex32);
make_element!(ty Complex64, dtype DType::Complex64, cpu Complex64, accelerator Complex32);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::DeviceKind;

    fn assert_matches_runtime_table<E: Element>() {
        assert_eq!(
            CpuAcc::<E>::dtype(),
            E::dtype().accumulate(DeviceKind::Cpu),
            "cpu accumulator for {}",
            E::dtype().name()
        );
        for device in [DeviceKind::Cuda, DeviceKind::Metal] {
            assert_eq!(
                AcceleratorAcc::<E>::dtype(),
                E::dtype().accumulate(device),
                "accelerator accumulator for {}",
                E::dtype().name()
            );
        }
    }

    #[test]
    fn should_agree_with_runtime_table() {
        assert_matches_runtime_table::<bool>();
        assert_matches_runtime_table::<i8>();
        assert_matches_runtime_table::<i16>();
        assert_matches_runtime_table::<i32>();
        assert_matches_runtime_table::<i64>();
        assert_matches_runtime_table::<u8>();
        assert_matches_runtime_table::<f16>();
        assert_matches_runtime_table::<bf16>();
        assert_matches_runtime_table::<f32>();
        assert_matches_runtime_table::<f64>();
        assert_matches_runtime_table::<Complex16>();
        assert_matches_runtime_table::<Complex32>();
        assert_matches_runtime_table::<Complex64>();
    }

    #[test]
    fn should_promote_half_sums_without_overflow() {
        // 4096 is already past f16::MAX once summed 16x; the accumulator
        // must hold the running sum.
        let values = [f16::from_f32(4096.0); 16];
        let sum: CpuAcc<f16> = values.iter().map(|v| v.to_f32()).sum();
        assert_eq!(sum, 65536.0);
        assert!(sum > f32::from(f16::MAX));
    }
}
