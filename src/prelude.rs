//! cplx prelude.
//!
//! This module contains the most used types that you can import easily as a
//! group.
//!
//! ```
//! use cplx::prelude::*;
//!
//! let z = Complex::new(3.0, 4.0);
//! assert_eq!(z.modulus(), 5.0);
//! ```

#[doc(no_inline)]
pub use crate::complex::Complex;

#[doc(no_inline)]
pub use crate::error::ComplexError;
