//! Output-parameter form of the [`Complex`] operations.
//!
//! Every procedure that produces a complex value writes it into a
//! caller-supplied `result` location instead of returning it. Inputs are taken
//! by value and never mutated. Because `result` is an exclusive borrow, it can
//! never alias a borrowed input:
//!
//! ```compile_fail
//! use cplx::complex::Complex;
//! use cplx::procedures::copy;
//!
//! let mut z = Complex::new(1.0, 2.0);
//! copy(&mut z, &z);
//! ```

use crate::complex::Complex;
use crate::error::ComplexError;

/// Returns the real part of `z`
pub fn real(z: Complex) -> f64 {
    z.real()
}

/// Returns the imaginary part of `z`
pub fn imag(z: Complex) -> f64 {
    z.imag()
}

/// Sets the real part of `z`; afterwards `real(*z) == x`
pub fn set_real(z: &mut Complex, x: f64) {
    z.set_real(x);
}

/// Sets the imaginary part of `z`; afterwards `imag(*z) == y`
pub fn set_imag(z: &mut Complex, y: f64) {
    z.set_imag(y);
}

/// Sets both parts of `z`; afterwards `real(*z) == x` and `imag(*z) == y`
pub fn init(z: &mut Complex, x: f64, y: f64) {
    set_real(z, x);
    set_imag(z, y);
}

/// Gives `dest` the components of `src`
pub fn copy(dest: &mut Complex, src: &Complex) {
    init(dest, real(*src), imag(*src));
}

/// `result = conj(op)`
pub fn conjugate(result: &mut Complex, op: Complex) {
    let c = op.conj();
    init(result, c.re, c.im);
}

/// `result = left + right`
pub fn add(result: &mut Complex, left: Complex, right: Complex) {
    let c = left + right;
    init(result, c.re, c.im);
}

/// `result = left - right`
pub fn sub(result: &mut Complex, left: Complex, right: Complex) {
    let c = left - right;
    init(result, c.re, c.im);
}

/// `result = left * right`
pub fn mul(result: &mut Complex, left: Complex, right: Complex) {
    let c = left * right;
    init(result, c.re, c.im);
}

/// `result = op * factor` for a real `factor`
pub fn scale(result: &mut Complex, op: Complex, factor: f64) {
    let c = op.scale(factor);
    init(result, c.re, c.im);
}

/// `result = op ^ exponent`.
///
/// `result` is only written, never read, so it needs no prior value. A
/// negative `exponent` is rejected and leaves `result` untouched.
pub fn pow(result: &mut Complex, op: Complex, exponent: i32) -> Result<(), ComplexError> {
    let c = op.powi(exponent)?;
    init(result, c.re, c.im);
    Ok(())
}

pub fn squared_modulus(z: Complex) -> f64 {
    z.squared_modulus()
}

pub fn modulus(z: Complex) -> f64 {
    z.modulus()
}

/// Principal argument of `z` in `(-π, π]`; fails for `z == 0`
pub fn argument(z: Complex) -> Result<f64, ComplexError> {
    z.argument()
}
