use core::fmt;
use core::ops::{Add, Mul, Neg, Sub};

use half::f16;
use num_traits::{One, Zero};
use serde::{Deserialize, Serialize};

/// A complex number with `T` real and imaginary components.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Complex<T> {
    /// Real component.
    pub real: T,
    /// Imaginary component.
    pub imag: T,
}

/// Complex number with [`f16`] components.
pub type Complex16 = Complex<f16>;
/// Complex number with `f32` components.
pub type Complex32 = Complex<f32>;
/// Complex number with `f64` components.
pub type Complex64 = Complex<f64>;

impl<T> Complex<T> {
    /// Creates a complex number from real and imaginary parts.
    pub const fn new(real: T, imag: T) -> Self {
        Self { real, imag }
    }
}

impl<T: Zero> Complex<T> {
    /// Creates a complex number from a real number.
    pub fn from_real(real: T) -> Self {
        Self {
            real,
            imag: T::zero(),
        }
    }
}

impl<T: Copy + Neg<Output = T>> Complex<T> {
    /// Returns the conjugate of the complex number.
    pub fn conj(self) -> Self {
        Self::new(self.real, -self.imag)
    }
}

impl<T: Add<Output = T>> Add for Complex<T> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self::new(self.real + rhs.real, self.imag + rhs.imag)
    }
}

impl<T: Sub<Output = T>> Sub for Complex<T> {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self::new(self.real - rhs.real, self.imag - rhs.imag)
    }
}

impl<T: Copy + Add<Output = T> + Sub<Output = T> + Mul<Output = T>> Mul for Complex<T> {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        Self::new(
            self.real * rhs.real - self.imag * rhs.imag,
            self.real * rhs.imag + self.imag * rhs.real,
        )
    }
}

impl<T: Neg<Output = T>> Neg for Complex<T> {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self::new(-self.real, -self.imag)
    }
}

impl<T: Zero> Zero for Complex<T> {
    fn zero() -> Self {
        Self::new(T::zero(), T::zero())
    }

    fn is_zero(&self) -> bool {
        self.real.is_zero() && self.imag.is_zero()
    }
}

impl<T: Copy + Zero + One + Sub<Output = T>> One for Complex<T> {
    fn one() -> Self {
        Self::new(T::one(), T::zero())
    }
}

impl<T: Copy + fmt::Display + Zero + PartialOrd> fmt::Display for Complex<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.imag >= T::zero() {
            write!(f, "{}+{}i", self.real, self.imag)
        } else {
            write!(f, "{}{}i", self.real, self.imag)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::format;

    #[test]
    fn should_compute_conjugate() {
        let c = Complex32::new(3.0, 4.0);
        assert_eq!(c.conj(), Complex32::new(3.0, -4.0));
    }

    #[test]
    fn should_multiply() {
        let lhs = Complex64::new(1.0, 2.0);
        let rhs = Complex64::new(3.0, -1.0);
        assert_eq!(lhs * rhs, Complex64::new(5.0, 5.0));
    }

    #[test]
    fn should_display_signed_imaginary_part() {
        assert_eq!(format!("{}", Complex32::new(3.0, 4.0)), "3+4i");
        assert_eq!(format!("{}", Complex32::new(3.0, -4.0)), "3-4i");
        assert_eq!(format!("{}", Complex64::new(-3.0, 4.0)), "-3+4i");
    }

    #[test]
    fn should_have_additive_and_multiplicative_identities() {
        let c = Complex32::new(2.5, -1.5);
        assert_eq!(c + Complex32::zero(), c);
        assert_eq!(c * Complex32::one(), c);
    }
}
