//! Status codes and message lookup.

use rlib_sys as ffi;
use std::ffi::CStr;
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Status code reported by the core.
///
/// Any value is representable; codes the core has not defined are treated
/// as generic failures.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(transparent))]
pub struct Status(u32);

impl Status {
    /// Success.
    pub const OK: Status = Status(0);
    /// Division by zero.
    pub const DIVISION_BY_ZERO: Status = Status(1);
    /// Invalid argument (null output pointer).
    pub const INVALID_ARGUMENT: Status = Status(2);

    /// Wrap a raw code.
    pub const fn from_code(code: u32) -> Self {
        Status(code)
    }

    /// Raw code.
    pub const fn code(self) -> u32 {
        self.0
    }

    /// Whether this is [`Status::OK`].
    pub const fn is_ok(self) -> bool {
        self.0 == Status::OK.0
    }

    pub(crate) fn from_raw(raw: ffi::RlibStatus) -> Self {
        Status(raw.0)
    }

    pub(crate) fn to_raw(self) -> ffi::RlibStatus {
        ffi::RlibStatus(self.0)
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "status {}", self.0)
    }
}

/// Look up the core's message for `status`.
///
/// The core hands back a borrowed C string; it is copied into an owned
/// `String` before this returns.
pub fn error_message(status: Status) -> String {
    // SAFETY: takes the status by value, no pointers involved.
    let ptr = unsafe { ffi::rlib_error_message(status.to_raw()) };
    if ptr.is_null() {
        return format!("unknown error ({})", status);
    }

    // SAFETY: non-null and NUL-terminated per the core's contract.
    unsafe { CStr::from_ptr(ptr) }
        .to_string_lossy()
        .into_owned()
}
