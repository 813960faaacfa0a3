//! C Foreign Function Interface (FFI) for the column balancer.
//!
//! Hosts that render cards themselves (a browser shell through a C/wasm
//! bridge, a native console) can ask for column assignments without
//! linking the rest of the crate's types. All functions are `extern "C"`
//! with stable ABI and use the default breakpoint table.
//!
//! # Safety
//!
//! Pointer arguments must be valid for `len` elements. Output buffers are
//! written in full on success and left untouched on error.
//!
//! # Example (C)
//!
//! ```c
//! #include "wingrade.h"
//!
//! const char* addresses[] = {"aaa", "a", "aa"};
//! uint32_t columns[3];
//! if (wingrade_balance_addresses(addresses, 3, 2000.0, columns) == WINGRADE_OK) {
//!     // columns == {0, 1, 2}
//! }
//! ```

// FFI modules intentionally use unsafe and no_mangle
#![allow(unsafe_op_in_unsafe_fn)]
#![allow(clippy::missing_safety_doc)]
#![allow(clippy::not_unsafe_ptr_arg_deref)]

use crate::layout::{column_count_for_width, utf16_len, Masonry};
use std::ffi::CStr;
use std::os::raw::{c_char, c_uint};
use std::slice;

/// Result codes for FFI functions.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WingradeResult {
    /// Operation succeeded.
    Ok = 0,
    /// Null pointer passed.
    NullPointer = 1,
    /// Invalid UTF-8 string.
    InvalidUtf8 = 2,
}

/// Number of columns for a viewport width.
#[unsafe(no_mangle)]
pub extern "C" fn wingrade_column_count(width: f64) -> c_uint {
    c_uint::try_from(column_count_for_width(width)).unwrap_or(c_uint::MAX)
}

/// Balance items given by their weights.
///
/// Writes the chosen column index for each item into `out_columns`.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn wingrade_balance(
    weights: *const u64,
    len: usize,
    width: f64,
    out_columns: *mut u32,
) -> WingradeResult {
    if len == 0 {
        return WingradeResult::Ok;
    }
    if weights.is_null() || out_columns.is_null() {
        return WingradeResult::NullPointer;
    }

    let weights = slice::from_raw_parts(weights, len);
    let out = slice::from_raw_parts_mut(out_columns, len);
    assign_columns(weights.iter().copied(), width, out);
    WingradeResult::Ok
}

/// Balance items given by their NUL-terminated UTF-8 addresses.
///
/// Addresses are weighed by UTF-16 length, like a browser string.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn wingrade_balance_addresses(
    addresses: *const *const c_char,
    len: usize,
    width: f64,
    out_columns: *mut u32,
) -> WingradeResult {
    if len == 0 {
        return WingradeResult::Ok;
    }
    if addresses.is_null() || out_columns.is_null() {
        return WingradeResult::NullPointer;
    }

    let mut weights = Vec::with_capacity(len);
    for &address in slice::from_raw_parts(addresses, len) {
        if address.is_null() {
            return WingradeResult::NullPointer;
        }
        let Ok(text) = CStr::from_ptr(address).to_str() else {
            return WingradeResult::InvalidUtf8;
        };
        weights.push(utf16_len(text) as u64);
    }

    let out = slice::from_raw_parts_mut(out_columns, len);
    assign_columns(weights.into_iter(), width, out);
    WingradeResult::Ok
}

/// Get the library version string.
#[unsafe(no_mangle)]
pub extern "C" fn wingrade_version() -> *const c_char {
    static VERSION: &[u8] = concat!(env!("CARGO_PKG_VERSION"), "\0").as_bytes();
    VERSION.as_ptr().cast()
}

fn assign_columns(weights: impl Iterator<Item = u64>, width: f64, out: &mut [u32]) {
    let mut masonry = Masonry::new(column_count_for_width(width), width);
    for ((index, weight), slot) in weights.enumerate().zip(out.iter_mut()) {
        *slot = masonry
            .place(index, weight)
            .and_then(|column| u32::try_from(column).ok())
            .unwrap_or(u32::MAX);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::ffi::CString;
    use std::ptr;

    #[test]
    fn test_wingrade_column_count() {
        assert_eq!(wingrade_column_count(2000.0), 8);
        assert_eq!(wingrade_column_count(800.0), 4);
        assert_eq!(wingrade_column_count(-1.0), 2);
    }

    #[test]
    fn test_wingrade_balance_weights() {
        let weights = [3u64, 1, 2];
        let mut out = [u32::MAX; 3];
        let result = unsafe { wingrade_balance(weights.as_ptr(), 3, 2000.0, out.as_mut_ptr()) };
        assert_eq!(result, WingradeResult::Ok);
        assert_eq!(out, [0, 1, 2]);
    }

    #[test]
    fn test_wingrade_balance_addresses() {
        let owned: Vec<CString> = ["aaa", "a", "aa"]
            .iter()
            .map(|s| CString::new(*s).unwrap())
            .collect();
        let pointers: Vec<*const c_char> = owned.iter().map(|s| s.as_ptr()).collect();
        let mut out = [0u32; 3];

        // Two columns: aaa -> 0, a -> 1, aa -> 1.
        let result = unsafe {
            wingrade_balance_addresses(pointers.as_ptr(), 3, 500.0, out.as_mut_ptr())
        };
        assert_eq!(result, WingradeResult::Ok);
        assert_eq!(out, [0, 1, 1]);
    }

    #[test]
    fn test_wingrade_null_pointers() {
        let mut out = [0u32; 1];
        let result = unsafe { wingrade_balance(ptr::null(), 1, 900.0, out.as_mut_ptr()) };
        assert_eq!(result, WingradeResult::NullPointer);

        let pointers = [ptr::null::<c_char>()];
        let result = unsafe {
            wingrade_balance_addresses(pointers.as_ptr(), 1, 900.0, out.as_mut_ptr())
        };
        assert_eq!(result, WingradeResult::NullPointer);

        let empty = unsafe { wingrade_balance(ptr::null(), 0, 900.0, ptr::null_mut()) };
        assert_eq!(empty, WingradeResult::Ok);
    }

    #[test]
    fn test_wingrade_version() {
        unsafe {
            let version = wingrade_version();
            let version_str = CStr::from_ptr(version).to_str().unwrap();
            assert_eq!(version_str, env!("CARGO_PKG_VERSION"));
        }
    }
}
