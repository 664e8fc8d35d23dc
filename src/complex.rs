use crate::error::ComplexError;
use approx::{AbsDiffEq, RelativeEq, UlpsEq};
use log::debug;
use num::complex::Complex64;
use num_traits::{One, Zero};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use simple_error::{SimpleError, bail};
use std::f64::consts::PI;

pub mod ops;

/// A complex number `re + im·i` with `f64` components.
///
/// No normalization is applied to either component: `-0.0` stays `-0.0` and a
/// purely real value keeps its zero imaginary part as given.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Complex {
    pub re: f64,
    pub im: f64,
}

impl Complex {
    /// `0 + 0i`
    pub const ZERO: Complex = Complex::new(0.0, 0.0);
    /// `1 + 0i`
    pub const ONE: Complex = Complex::new(1.0, 0.0);
    /// `0 + 1i`
    pub const I: Complex = Complex::new(0.0, 1.0);

    /// Create a new complex number from real and imaginary parts
    pub const fn new(re: f64, im: f64) -> Self {
        Complex { re, im }
    }

    /// Create a new complex number from a real number (imaginary part = 0)
    pub const fn from_real(re: f64) -> Self {
        Complex::new(re, 0.0)
    }

    /// Create a new complex number from an imaginary number (real part = 0)
    pub const fn from_imag(im: f64) -> Self {
        Complex::new(0.0, im)
    }

    /// Create a new complex number from a magnitude and angle in radians
    pub fn from_polar(mag: f64, ang: f64) -> Self {
        let (sin, cos) = ang.sin_cos();
        Complex::new(mag * cos, mag * sin)
    }

    /// Get the real part
    pub fn real(&self) -> f64 {
        self.re
    }

    /// Get the imaginary part
    pub fn imag(&self) -> f64 {
        self.im
    }

    pub fn set_real(&mut self, re: f64) {
        self.re = re;
    }

    pub fn set_imag(&mut self, im: f64) {
        self.im = im;
    }

    /// Overwrite both components
    pub fn set(&mut self, re: f64, im: f64) {
        self.set_real(re);
        self.set_imag(im);
    }

    /// Overwrite both components with those of `other`
    pub fn copy_from(&mut self, other: &Complex) {
        self.set(other.real(), other.imag());
    }

    /// Get the complex conjugate
    pub fn conj(&self) -> Self {
        Complex::new(self.re, -self.im)
    }

    /// Multiply both components by a real factor
    pub fn scale(&self, factor: f64) -> Self {
        Complex::new(self.re * factor, self.im * factor)
    }

    /// Raise to a non-negative integer power.
    ///
    /// Exponentiation by squaring: each level squares the base once and
    /// recurses on `exp / 2`, so the cost is O(log exp) multiplications.
    /// Any value to the power zero is `1 + 0i`, zero included.
    pub fn powu(&self, exp: u32) -> Self {
        match exp {
            0 => Complex::ONE,
            1 => *self,
            _ => {
                let z = *self;
                let half = (z * z).powu(exp / 2);
                if exp % 2 == 0 { half } else { z * half }
            }
        }
    }

    /// Raise to a signed integer power, rejecting negative exponents
    pub fn powi(&self, exp: i32) -> Result<Self, ComplexError> {
        match u32::try_from(exp) {
            Ok(n) => Ok(self.powu(n)),
            Err(_) => {
                debug!("rejected negative exponent {} for {:?}", exp, self);
                Err(ComplexError::NegativeExponent(exp))
            }
        }
    }

    /// Calculate the square of the magnitude (norm squared)
    pub fn squared_modulus(&self) -> f64 {
        self.re * self.re + self.im * self.im
    }

    /// Get the magnitude (absolute value) of the complex number
    pub fn modulus(&self) -> f64 {
        self.squared_modulus().sqrt()
    }

    /// Get the principal argument (phase angle) in `(-π, π]`.
    ///
    /// Uses the half-angle form `2·atan(im / (re + |z|))`, with the
    /// non-positive real axis answered as exactly `π`. The argument of zero is
    /// undefined and reported as [`ComplexError::ZeroArgument`].
    pub fn argument(&self) -> Result<f64, ComplexError> {
        if self.is_zero() {
            debug!("rejected argument of zero {:?}", self);
            return Err(ComplexError::ZeroArgument);
        }
        if self.im == 0.0 && self.re <= 0.0 {
            return Ok(PI);
        }
        // hypot keeps the magnitude finite where re² + im² would overflow or underflow
        let m = self.re.hypot(self.im);
        // (re + |z|)(|z| - re) = im², so for re <= 0 the same tangent is
        // (|z| - re) / im, which does not cancel near the negative real axis
        let half_tan = if self.re > 0.0 {
            self.im / (self.re + m)
        } else {
            (m - self.re) / self.im
        };
        let arg = 2.0 * half_tan.atan();
        // rounding can land on -π, which names the same angle as π
        Ok(if arg <= -PI { PI } else { arg })
    }

    /// Check if both components are zero (of either sign)
    pub fn is_zero(&self) -> bool {
        self.re == 0.0 && self.im == 0.0
    }

    /// Check if the complex number contains NaN
    pub fn is_nan(&self) -> bool {
        self.re.is_nan() || self.im.is_nan()
    }

    /// Check if the complex number is infinite
    pub fn is_infinite(&self) -> bool {
        !self.is_nan() && (self.re.is_infinite() || self.im.is_infinite())
    }

    /// Check if the complex number is finite
    pub fn is_finite(&self) -> bool {
        self.re.is_finite() && self.im.is_finite()
    }
}

impl From<f64> for Complex {
    fn from(re: f64) -> Self {
        Complex::from_real(re)
    }
}

impl From<(f64, f64)> for Complex {
    fn from((re, im): (f64, f64)) -> Self {
        Complex::new(re, im)
    }
}

impl From<Complex64> for Complex {
    fn from(num: Complex64) -> Self {
        Complex::new(num.re, num.im)
    }
}

impl From<Complex> for Complex64 {
    fn from(num: Complex) -> Self {
        Complex64::new(num.re, num.im)
    }
}

impl TryFrom<&[f64]> for Complex {
    type Error = SimpleError;

    // Convert a `[re, im]` buffer into a Complex
    fn try_from(parts: &[f64]) -> Result<Self, Self::Error> {
        match parts {
            [re, im] => Ok(Complex::new(*re, *im)),
            _ => {
                debug!("rejected buffer of {} components", parts.len());
                bail!("buffer must hold exactly two components")
            }
        }
    }
}

impl TryFrom<Vec<f64>> for Complex {
    type Error = SimpleError;

    fn try_from(parts: Vec<f64>) -> Result<Self, Self::Error> {
        Complex::try_from(parts.as_slice())
    }
}

impl Zero for Complex {
    fn zero() -> Self {
        Complex::ZERO
    }

    fn is_zero(&self) -> bool {
        Complex::is_zero(self)
    }
}

impl One for Complex {
    fn one() -> Self {
        Complex::ONE
    }
}

impl AbsDiffEq for Complex {
    type Epsilon = f64;

    fn default_epsilon() -> Self::Epsilon {
        f64::EPSILON
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
        self.re.abs_diff_eq(&other.re, epsilon) && self.im.abs_diff_eq(&other.im, epsilon)
    }
}

impl RelativeEq for Complex {
    fn default_max_relative() -> Self::Epsilon {
        f64::EPSILON
    }

    fn relative_eq(
        &self,
        other: &Self,
        epsilon: Self::Epsilon,
        max_relative: Self::Epsilon,
    ) -> bool {
        self.re.relative_eq(&other.re, epsilon, max_relative)
            && self.im.relative_eq(&other.im, epsilon, max_relative)
    }
}

impl UlpsEq for Complex {
    fn default_max_ulps() -> u32 {
        4
    }

    fn ulps_eq(&self, other: &Self, epsilon: Self::Epsilon, max_ulps: u32) -> bool {
        self.re.ulps_eq(&other.re, epsilon, max_ulps)
            && self.im.ulps_eq(&other.im, epsilon, max_ulps)
    }
}
