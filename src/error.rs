use std::fmt;

/// Error types for complex operations whose pre-conditions were violated
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ComplexError {
    NegativeExponent(i32),
    ZeroArgument,
}

impl fmt::Display for ComplexError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ComplexError::NegativeExponent(exp) => {
                write!(f, "Exponent must be non-negative, got {}", exp)
            }
            ComplexError::ZeroArgument => {
                write!(f, "Argument of zero is undefined")
            }
        }
    }
}

impl std::error::Error for ComplexError {}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(
            ComplexError::NegativeExponent(-3).to_string(),
            "Exponent must be non-negative, got -3"
        );
        assert_eq!(
            ComplexError::ZeroArgument.to_string(),
            "Argument of zero is undefined"
        );
    }

    #[test]
    fn test_boxed() {
        let err: Box<dyn std::error::Error> = Box::new(ComplexError::ZeroArgument);
        assert_eq!(err.to_string(), "Argument of zero is undefined");
    }
}
