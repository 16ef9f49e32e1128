//! Parsing of bounded unsigned integers from decimal text.
//!
//! Prefix lengths, and any other small number that appears in textual
//! input, are given as a plain sequence of ASCII decimal digits. This
//! module provides the one place where such text is checked and converted.
//! The accepted syntax is strict: at least one digit, digits only. There is
//! no sign, no whitespace, and no radix prefix. Leading zeros are fine.
//!
//! The target type determines the upper bound. A value that does not fit
//! into it is an error rather than being truncated.

use core::fmt;

//------------ Convenience Functions -----------------------------------------

/// Parses a decimal number that has to fit into `T`.
///
/// ```
/// use inet::utils::uint::{parse_bounded, ParseUintError};
///
/// assert_eq!(parse_bounded::<u8>("24"), Ok(24));
/// assert_eq!(parse_bounded::<u8>("256"), Err(ParseUintError::Overflow));
/// assert_eq!(parse_bounded::<u8>(""), Err(ParseUintError::Empty));
/// ```
pub fn parse_bounded<T: BoundedUint>(s: &str) -> Result<T, ParseUintError> {
    parse_bounded_slice(s.as_bytes())
}

/// Parses a decimal number given as octets that has to fit into `T`.
pub fn parse_bounded_slice<T: BoundedUint>(
    s: &[u8],
) -> Result<T, ParseUintError> {
    if s.is_empty() {
        return Err(ParseUintError::Empty);
    }
    let mut res = T::ZERO;
    for &ch in s {
        let digit = match ch {
            b'0'..=b'9' => ch - b'0',
            _ => return Err(ParseUintError::InvalidDigit),
        };
        res = res.push_digit(digit).ok_or(ParseUintError::Overflow)?;
    }
    Ok(res)
}

//------------ BoundedUint ---------------------------------------------------

/// An unsigned integer type that decimal text can be parsed into.
pub trait BoundedUint: Copy + Sized {
    /// The value zero.
    const ZERO: Self;

    /// Appends a decimal digit, returning `None` on overflow.
    fn push_digit(self, digit: u8) -> Option<Self>;
}

macro_rules! impl_bounded_uint {
    ( $type:ident ) => {
        impl BoundedUint for $type {
            const ZERO: Self = 0;

            fn push_digit(self, digit: u8) -> Option<Self> {
                self.checked_mul(10)?.checked_add($type::from(digit))
            }
        }
    };
}

impl_bounded_uint!(u8);
impl_bounded_uint!(u16);
impl_bounded_uint!(u32);
impl_bounded_uint!(u64);
impl_bounded_uint!(u128);

//------------ ParseUintError ------------------------------------------------

/// Decimal text could not be converted into an integer.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ParseUintError {
    /// The text was empty.
    Empty,

    /// The text contained something other than a decimal digit.
    InvalidDigit,

    /// The number is too large for the target type.
    Overflow,
}

//--- Display and Error

impl fmt::Display for ParseUintError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            ParseUintError::Empty => f.write_str("empty number"),
            ParseUintError::InvalidDigit => {
                f.write_str("expected decimal number")
            }
            ParseUintError::Overflow => f.write_str("decimal number overflow"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ParseUintError {}

//============ Testing =======================================================
