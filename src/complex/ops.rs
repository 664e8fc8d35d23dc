use super::Complex;
use std::iter::{Product, Sum};
use std::ops::{Add, AddAssign, Mul, MulAssign, Neg, Sub, SubAssign};

// Forwards the borrowed forms of a binary operator to the by-value impl
macro_rules! impl_math_op {
    (impl $imp:ident, $method:ident for $t:ty, $u:ty) => {
        impl $imp<$u> for &$t {
            type Output = <$t as $imp<$u>>::Output;

            fn $method(self, other: $u) -> Self::Output {
                $imp::$method(*self, other)
            }
        }

        impl $imp<&$u> for $t {
            type Output = <$t as $imp<$u>>::Output;

            fn $method(self, other: &$u) -> Self::Output {
                $imp::$method(self, *other)
            }
        }

        impl $imp<&$u> for &$t {
            type Output = <$t as $imp<$u>>::Output;

            fn $method(self, other: &$u) -> Self::Output {
                $imp::$method(*self, *other)
            }
        }
    };
}

macro_rules! impl_math_assign_op {
    (impl $imp:ident, $method:ident for $t:ty, $u:ty) => {
        impl $imp<&$u> for $t {
            fn $method(&mut self, other: &$u) {
                $imp::$method(self, *other);
            }
        }
    };
}

impl Add for Complex {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Complex::new(self.re + other.re, self.im + other.im)
    }
}

impl Add<f64> for Complex {
    type Output = Self;

    fn add(self, other: f64) -> Self::Output {
        Complex::new(self.re + other, self.im)
    }
}

impl Add<Complex> for f64 {
    type Output = Complex;

    fn add(self, other: Complex) -> Self::Output {
        other + self
    }
}

impl Sub for Complex {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Complex::new(self.re - other.re, self.im - other.im)
    }
}

impl Sub<f64> for Complex {
    type Output = Self;

    fn sub(self, other: f64) -> Self::Output {
        Complex::new(self.re - other, self.im)
    }
}

impl Sub<Complex> for f64 {
    type Output = Complex;

    fn sub(self, other: Complex) -> Self::Output {
        Complex::new(self - other.re, -other.im)
    }
}

impl Mul for Complex {
    type Output = Self;

    fn mul(self, other: Self) -> Self {
        Complex::new(
            self.re * other.re - self.im * other.im,
            self.re * other.im + other.re * self.im,
        )
    }
}

impl Mul<f64> for Complex {
    type Output = Self;

    fn mul(self, other: f64) -> Self::Output {
        self.scale(other)
    }
}

impl Mul<Complex> for f64 {
    type Output = Complex;

    fn mul(self, other: Complex) -> Self::Output {
        other.scale(self)
    }
}

impl_math_op!(impl Add, add for Complex, Complex);
impl_math_op!(impl Add, add for Complex, f64);
impl_math_op!(impl Add, add for f64, Complex);
impl_math_op!(impl Sub, sub for Complex, Complex);
impl_math_op!(impl Sub, sub for Complex, f64);
impl_math_op!(impl Sub, sub for f64, Complex);
impl_math_op!(impl Mul, mul for Complex, Complex);
impl_math_op!(impl Mul, mul for Complex, f64);
impl_math_op!(impl Mul, mul for f64, Complex);

impl Neg for Complex {
    type Output = Self;

    fn neg(self) -> Self {
        Complex::new(-self.re, -self.im)
    }
}

impl Neg for &Complex {
    type Output = Complex;

    fn neg(self) -> Complex {
        -*self
    }
}

impl AddAssign for Complex {
    fn add_assign(&mut self, other: Self) {
        *self = *self + other;
    }
}

impl AddAssign<f64> for Complex {
    fn add_assign(&mut self, other: f64) {
        self.re += other;
    }
}

impl SubAssign for Complex {
    fn sub_assign(&mut self, other: Self) {
        *self = *self - other;
    }
}

impl SubAssign<f64> for Complex {
    fn sub_assign(&mut self, other: f64) {
        self.re -= other;
    }
}

impl MulAssign for Complex {
    fn mul_assign(&mut self, other: Self) {
        *self = *self * other;
    }
}

impl MulAssign<f64> for Complex {
    fn mul_assign(&mut self, other: f64) {
        *self = self.scale(other);
    }
}

impl_math_assign_op!(impl AddAssign, add_assign for Complex, Complex);
impl_math_assign_op!(impl AddAssign, add_assign for Complex, f64);
impl_math_assign_op!(impl SubAssign, sub_assign for Complex, Complex);
impl_math_assign_op!(impl SubAssign, sub_assign for Complex, f64);
impl_math_assign_op!(impl MulAssign, mul_assign for Complex, Complex);
impl_math_assign_op!(impl MulAssign, mul_assign for Complex, f64);

impl Sum for Complex {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Complex::ZERO, |acc, x| acc + x)
    }
}

impl<'a> Sum<&'a Complex> for Complex {
    fn sum<I: Iterator<Item = &'a Complex>>(iter: I) -> Self {
        iter.fold(Complex::ZERO, |acc, x| acc + x)
    }
}

impl Product for Complex {
    fn product<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Complex::ONE, |acc, x| acc * x)
    }
}

impl<'a> Product<&'a Complex> for Complex {
    fn product<I: Iterator<Item = &'a Complex>>(iter: I) -> Self {
        iter.fold(Complex::ONE, |acc, x| acc * x)
    }
}
