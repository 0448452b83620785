//! Integer arithmetic kernel behind librlib_ffi (no_std compatible).
//!
//! This crate holds the arithmetic itself:
//! - Wrapping `i32` addition, multiplication and exponentiation
//! - Checked division
//! - Error type shared with the C ABI
//!
//! # no_std Support
//!
//! This crate is `no_std` compatible. Enable the `std` feature for
//! `std::error::Error` support.
//!
//! # Overflow
//!
//! Every operation wraps on overflow (two's complement), the same result a
//! C caller gets from the fixed-width types at the boundary.

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(unsafe_code)]
#![warn(missing_docs, rust_2018_idioms)]

use serde::{Deserialize, Serialize};

/// Add two integers.
#[inline]
pub const fn add(a: i32, b: i32) -> i32 {
    a.wrapping_add(b)
}

/// Multiply two integers.
#[inline]
pub const fn multiply(a: i32, b: i32) -> i32 {
    a.wrapping_mul(b)
}

/// Raise `base` to the power `exp`.
///
/// The exponent is unsigned: negative powers have no integer result and
/// cannot be requested. `exponent(x, 0) == 1` for every `x`, including 0.
#[inline]
pub const fn exponent(base: i32, exp: u32) -> i32 {
    base.wrapping_pow(exp)
}

/// Divide two integers, truncating toward zero.
///
/// `i32::MIN / -1` wraps to `i32::MIN`.
///
/// # Errors
///
/// Returns [`Error::DivisionByZero`] if `b == 0`.
#[inline]
pub const fn divide(a: i32, b: i32) -> Result<i32, Error> {
    if b == 0 {
        return Err(Error::DivisionByZero);
    }
    Ok(a.wrapping_div(b))
}

/// Error type.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Error {
    /// Divisor was zero.
    DivisionByZero,
    /// A caller handed the C ABI an unusable argument (null pointer).
    InvalidArgument,
}

impl Error {
    /// Human-readable message, identical to what the C ABI reports.
    pub const fn message(self) -> &'static str {
        match self {
            Error::DivisionByZero => "Division by zero",
            Error::InvalidArgument => "Invalid argument",
        }
    }
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.message())
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}
