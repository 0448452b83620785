//! FFI bindings to librlib_ffi.
//!
//! This crate provides low-level, unsafe bindings to the C ABI of the rlib
//! arithmetic core. You probably want to use the `rlib` crate instead, which
//! provides a safe Rust API.
//!
//! # Linking
//!
//! - `bundled` (default): the in-workspace core (`rlib-ffi`) is compiled and
//!   linked in.
//! - otherwise: a prebuilt `librlib_ffi` is linked dynamically. Set
//!   `RLIB_LIB_DIR` to its directory and `RLIB_LIB_NAME` if it was renamed.
//!
//! The `bindgen` feature regenerates the declarations from `rlib.h` at build
//! time (needs libclang).
//!
//! # Safety
//!
//! All functions in this crate are `unsafe` and require careful handling of:
//! - Validity of the `rlib_divide` output pointer
//! - Reading an uninitialized output slot after a non-`Ok` status
//! - Lifetime of strings returned by `rlib_error_message`

#![allow(non_upper_case_globals)]
#![allow(non_camel_case_types)]
#![allow(non_snake_case)]
#![allow(dead_code)]

#[cfg(feature = "bundled")]
extern crate rlib_ffi as _;

#[cfg(feature = "bindgen")]
include!(concat!(env!("OUT_DIR"), "/bindings.rs"));

#[cfg(not(feature = "bindgen"))]
mod bindings;
#[cfg(not(feature = "bindgen"))]
pub use bindings::*;

#[cfg(test)]
mod tests {
    use super::*;
    use std::ffi::CStr;
    use std::ptr;

    #[test]
    fn test_rlib_divide_null_out() {
        unsafe {
            let status = rlib_divide(1, 1, ptr::null_mut());
            assert_eq!(status, RlibStatus::InvalidArgument);
        }
    }

    #[test]
    fn test_rlib_divide_ok() {
        let mut out = 0i32;
        unsafe {
            let status = rlib_divide(9, 3, &mut out);
            assert_eq!(status, RlibStatus::Ok);
        }
        assert_eq!(out, 3);
    }

    #[test]
    fn test_rlib_error_message_unknown() {
        unsafe {
            let msg = rlib_error_message(RlibStatus(1000));
            assert!(!msg.is_null());
            assert_eq!(CStr::from_ptr(msg).to_bytes(), b"Unknown error");
        }
    }
}
