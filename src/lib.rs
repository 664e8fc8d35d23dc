pub mod complex;
pub mod error;
pub mod prelude;
pub mod procedures;

/// Create a **[`Complex`](crate::complex::Complex)** from its components.
///
/// ```
/// use cplx::complex;
/// use cplx::complex::Complex;
///
/// let z = complex!(3, -4);
/// assert_eq!(z, Complex::new(3.0, -4.0));
///
/// let r = complex!(2.5);
/// assert_eq!(r, Complex::new(2.5, 0.0));
/// ```
///
/// Both components are converted with `as f64`, so integer literals are
/// accepted.
#[macro_export]
macro_rules! complex {
    ($re:expr, $im:expr $(,)*) => {{
        $crate::complex::Complex::new($re as f64, $im as f64)
    }};
    ($re:expr $(,)*) => {{
        $crate::complex::Complex::from_real($re as f64)
    }};
}
