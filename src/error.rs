use thiserror::Error;

/// Errors from BigInt arithmetic and strict parsing.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BigIntError {
    /// Divisor of a division or modulo was zero.
    #[error("divide by zero")]
    DivideByZero,

    /// Strict parsing hit a character that is not a digit of the radix,
    /// or found no digits at all.
    #[error("invalid numeral '{input}' at byte {position}")]
    InvalidNumeral { input: String, position: usize },
}

pub type Result<T> = std::result::Result<T, BigIntError>;
