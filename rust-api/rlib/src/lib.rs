//! rlib: integer arithmetic over a C ABI, with a safe Rust face.
//!
//! Each function forwards one call to the native core. [`divide`] is the only
//! fallible one: the core reports a status code plus an output slot, and this
//! crate turns that into a `Result` whose error carries the core's own
//! message.
//!
//! # Quick Start
//!
//! ```
//! assert_eq!(rlib::add(2, 3), 5);
//! assert_eq!(rlib::exponent(2, 8), 256);
//! assert_eq!(rlib::divide(-10, 2)?, -5);
//!
//! let err = rlib::divide(10, 0).unwrap_err();
//! assert_eq!(err.to_string(), "Division by zero");
//! # Ok::<(), rlib::Error>(())
//! ```
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────┐
//! │   rlib (Safe Rust API)          │
//! └─────────────┬───────────────────┘
//!               │ FFI (safe wrappers)
//! ┌─────────────▼───────────────────┐
//! │  rlib-sys (FFI declarations)    │
//! └─────────────┬───────────────────┘
//!               │ extern "C"
//! ┌─────────────▼───────────────────┐
//! │ librlib_ffi (rlib-ffi + core)   │
//! └─────────────────────────────────┘
//! ```
//!
//! # Overflow
//!
//! All operations wrap (two's complement). `divide(i32::MIN, -1)` is
//! `Ok(i32::MIN)`.
//!
//! # Thread Safety
//!
//! Every call is independent and synchronous. Calling from several threads
//! at once is sound provided the linked core is reentrant, i.e. a pure
//! function of its value arguments with no global state. The bundled core
//! is; an external `librlib_ffi` must be as well.

#![deny(unsafe_op_in_unsafe_fn)]
#![warn(missing_docs, rust_2018_idioms)]

use rlib_sys as ffi;
use thiserror::Error as ThisError;
use tracing::{debug, trace};

mod status;

pub use status::{error_message, Status};

/// rlib errors.
///
/// `Display` renders exactly the message the core returned.
#[derive(Clone, Debug, PartialEq, Eq, ThisError)]
pub enum Error {
    /// Divisor was zero.
    #[error("{message}")]
    DivisionByZero {
        /// Core message ("Division by zero").
        message: String,
    },

    /// Any other non-OK status, including codes this crate doesn't know.
    #[error("{message}")]
    Core {
        /// Status reported by the core.
        status: Status,
        /// Core message for `status`.
        message: String,
    },
}

impl Error {
    /// Build the error for a non-OK status, fetching its message from the core.
    pub(crate) fn from_status(status: Status) -> Self {
        debug_assert!(!status.is_ok(), "no error for {}", status);
        let message = error_message(status);
        if status == Status::DIVISION_BY_ZERO {
            Error::DivisionByZero { message }
        } else {
            Error::Core { status, message }
        }
    }

    /// Message reported by the core.
    pub fn message(&self) -> &str {
        match self {
            Error::DivisionByZero { message } | Error::Core { message, .. } => message,
        }
    }

    /// Status code reported by the core.
    pub fn status(&self) -> Status {
        match self {
            Error::DivisionByZero { .. } => Status::DIVISION_BY_ZERO,
            Error::Core { status, .. } => *status,
        }
    }
}

/// Add two integers (wrapping).
pub fn add(a: i32, b: i32) -> i32 {
    trace!(a, b, "rlib_add");
    // SAFETY: scalar arguments only.
    unsafe { ffi::rlib_add(a, b) }
}

/// Multiply two integers (wrapping).
pub fn multiply(a: i32, b: i32) -> i32 {
    trace!(a, b, "rlib_multiply");
    // SAFETY: scalar arguments only.
    unsafe { ffi::rlib_multiply(a, b) }
}

/// Raise `base` to the power `exp` (wrapping).
///
/// Negative exponents have no integer result; the unsigned `exp` rules
/// them out.
pub fn exponent(base: i32, exp: u32) -> i32 {
    trace!(base, exp, "rlib_exponent");
    // SAFETY: scalar arguments only.
    unsafe { ffi::rlib_exponent(base, exp) }
}

/// Divide two integers, truncating toward zero.
///
/// # Errors
///
/// Returns [`Error::DivisionByZero`] if `b == 0`, or [`Error::Core`] if the
/// core reports any other failure.
///
/// # Example
///
/// ```
/// assert_eq!(rlib::divide(10, 5), Ok(2));
///
/// match rlib::divide(10, 0) {
///     Err(rlib::Error::DivisionByZero { message }) => assert_eq!(message, "Division by zero"),
///     other => panic!("unexpected {:?}", other),
/// }
/// ```
pub fn divide(a: i32, b: i32) -> Result<i32, Error> {
    trace!(a, b, "rlib_divide");

    // Only read back when the core reports OK.
    let mut quotient: i32 = 0;
    // SAFETY: `quotient` is a live, aligned i32 for the duration of the call.
    let raw = unsafe { ffi::rlib_divide(a, b, &mut quotient) };

    let status = Status::from_raw(raw);
    if status.is_ok() {
        return Ok(quotient);
    }

    let err = Error::from_status(status);
    debug!(
        a,
        b,
        code = status.code(),
        error = err.message(),
        "rlib_divide failed"
    );
    Err(err)
}
