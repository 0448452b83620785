//! C ABI of the rlib arithmetic core.
//!
//! Builds `librlib_ffi` (`.so`/`.dylib`/`.dll` and `.a`) exporting the
//! `rlib_*` symbols declared in `include/rlib.h`. Rust callers should use the
//! `rlib` crate, which wraps these through `rlib-sys`.
//!
//! All exports are reentrant: they only touch their value arguments and the
//! caller-supplied output slot.

#![deny(unsafe_op_in_unsafe_fn)]
#![warn(missing_docs, rust_2018_idioms)]

use std::os::raw::{c_char, c_uint};

/// Status code returned by fallible calls.
///
/// Kept as a transparent integer rather than a Rust `enum`: C callers may
/// pass any value back into [`rlib_error_message`].
#[repr(transparent)]
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct RlibStatus(pub c_uint);

#[allow(non_upper_case_globals)]
impl RlibStatus {
    /// Success.
    pub const Ok: RlibStatus = RlibStatus(0);
    /// Division by zero.
    pub const DivisionByZero: RlibStatus = RlibStatus(1);
    /// Invalid argument (null pointer).
    pub const InvalidArgument: RlibStatus = RlibStatus(2);
}

impl From<rlib_core::Error> for RlibStatus {
    fn from(err: rlib_core::Error) -> Self {
        match err {
            rlib_core::Error::DivisionByZero => RlibStatus::DivisionByZero,
            rlib_core::Error::InvalidArgument => RlibStatus::InvalidArgument,
        }
    }
}

const MSG_SUCCESS: &[u8] = b"Success\0";
const MSG_DIVISION_BY_ZERO: &[u8] = b"Division by zero\0";
const MSG_INVALID_ARGUMENT: &[u8] = b"Invalid argument\0";
const MSG_UNKNOWN: &[u8] = b"Unknown error\0";

/// Add two integers (wrapping).
#[no_mangle]
pub extern "C" fn rlib_add(a: i32, b: i32) -> i32 {
    rlib_core::add(a, b)
}

/// Multiply two integers (wrapping).
#[no_mangle]
pub extern "C" fn rlib_multiply(a: i32, b: i32) -> i32 {
    rlib_core::multiply(a, b)
}

/// Raise `base` to the unsigned power `exp` (wrapping).
#[no_mangle]
pub extern "C" fn rlib_exponent(base: i32, exp: u32) -> i32 {
    rlib_core::exponent(base, exp)
}

/// Divide two integers.
///
/// Writes the quotient through `result` and returns [`RlibStatus::Ok`] on
/// success. On any failure `result` is left untouched.
///
/// # Safety
///
/// `result` must be null or valid for a write of one `i32`.
#[no_mangle]
pub unsafe extern "C" fn rlib_divide(a: i32, b: i32, result: *mut i32) -> RlibStatus {
    if result.is_null() {
        return RlibStatus::InvalidArgument;
    }

    match rlib_core::divide(a, b) {
        Ok(value) => {
            // SAFETY: non-null checked above, validity is the caller's contract.
            unsafe { result.write(value) };
            RlibStatus::Ok
        }
        Err(err) => err.into(),
    }
}

/// Human-readable message for a status code.
///
/// The returned pointer is a static NUL-terminated string, never null.
/// Callers must not free it.
#[no_mangle]
pub extern "C" fn rlib_error_message(error: RlibStatus) -> *const c_char {
    let msg = match error {
        RlibStatus::Ok => MSG_SUCCESS,
        RlibStatus::DivisionByZero => MSG_DIVISION_BY_ZERO,
        RlibStatus::InvalidArgument => MSG_INVALID_ARGUMENT,
        _ => MSG_UNKNOWN,
    };
    msg.as_ptr().cast()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::ffi::CStr;
    use std::ptr;

    fn message(status: RlibStatus) -> &'static str {
        let ptr = rlib_error_message(status);
        assert!(!ptr.is_null());
        unsafe { CStr::from_ptr(ptr) }.to_str().unwrap()
    }

    #[test]
    fn test_divide_writes_result() {
        let mut out = 0;
        let status = unsafe { rlib_divide(10, 5, &mut out) };
        assert_eq!(status, RlibStatus::Ok);
        assert_eq!(out, 2);
    }

    #[test]
    fn test_divide_by_zero_leaves_slot() {
        let mut out = -77;
        let status = unsafe { rlib_divide(10, 0, &mut out) };
        assert_eq!(status, RlibStatus::DivisionByZero);
        assert_eq!(out, -77);
    }

    #[test]
    fn test_divide_null_result() {
        let status = unsafe { rlib_divide(10, 5, ptr::null_mut()) };
        assert_eq!(status, RlibStatus::InvalidArgument);
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(message(RlibStatus::Ok), "Success");
        assert_eq!(message(RlibStatus::DivisionByZero), "Division by zero");
        assert_eq!(message(RlibStatus::InvalidArgument), "Invalid argument");
        assert_eq!(message(RlibStatus(42)), "Unknown error");
        assert_eq!(message(RlibStatus(c_uint::MAX)), "Unknown error");
    }

    #[test]
    fn test_messages_match_core() {
        for err in [
            rlib_core::Error::DivisionByZero,
            rlib_core::Error::InvalidArgument,
        ] {
            assert_eq!(message(err.into()), err.message());
        }
    }

    #[test]
    fn test_scalar_exports() {
        assert_eq!(rlib_add(2, 3), 5);
        assert_eq!(rlib_multiply(-2, 3), -6);
        assert_eq!(rlib_exponent(2, 8), 256);
    }
}
