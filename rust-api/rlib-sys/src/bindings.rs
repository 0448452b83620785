//! Declarations matching `rlib-ffi/include/rlib.h`.
//!
//! Shaped like `bindgen` output for that header so the `bindgen` feature is a
//! drop-in replacement.

use std::os::raw::{c_char, c_uint};

impl RlibStatus {
    pub const Ok: RlibStatus = RlibStatus(0);
    pub const DivisionByZero: RlibStatus = RlibStatus(1);
    pub const InvalidArgument: RlibStatus = RlibStatus(2);
}

/// Status codes returned by fallible calls.
#[repr(transparent)]
#[derive(Debug, Copy, Clone, Hash, PartialEq, Eq)]
pub struct RlibStatus(pub c_uint);

pub type rlib_error_t = RlibStatus;

extern "C" {
    pub fn rlib_add(a: i32, b: i32) -> i32;

    pub fn rlib_multiply(a: i32, b: i32) -> i32;

    pub fn rlib_exponent(base: i32, exp: u32) -> i32;

    /// Writes the quotient to `*result` only when `Ok` is returned.
    pub fn rlib_divide(a: i32, b: i32, result: *mut i32) -> RlibStatus;

    /// Static NUL-terminated string, never null. Do not free.
    pub fn rlib_error_message(error: RlibStatus) -> *const c_char;
}
