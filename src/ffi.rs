//! C FFI bindings
//!
//! Pointer-and-length mirrors of [`hash`] and [`hash512`] for miners and
//! node software linking the crate as a cdylib.

use crate::params::{DIGEST256_SIZE, DIGEST512_SIZE};
use core::slice;

/// Compute the full ZR5 proof-of-work digest.
/// - input: pointer to input bytes
/// - input_len: length of input
/// - output: pointer to a 32-byte buffer for the result
#[unsafe(no_mangle)]
pub extern "C" fn zr5_hash(input: *const u8, input_len: u32, output: *mut u8) {
    if input.is_null() || output.is_null() {
        return;
    }

    unsafe {
        let input_slice = slice::from_raw_parts(input, input_len as usize);
        let result = crate::hash(input_slice);

        let output_slice = slice::from_raw_parts_mut(output, DIGEST256_SIZE);
        output_slice.copy_from_slice(&result);
    }
}

/// Compute the five-stage 512-bit chain.
/// - input: pointer to input bytes
/// - input_len: length of input
/// - output: pointer to a 64-byte buffer for the result
#[unsafe(no_mangle)]
pub extern "C" fn zr5_hash512(input: *const u8, input_len: u32, output: *mut u8) {
    if input.is_null() || output.is_null() {
        return;
    }

    unsafe {
        let input_slice = slice::from_raw_parts(input, input_len as usize);
        let result = crate::hash512(input_slice);

        let output_slice = slice::from_raw_parts_mut(output, DIGEST512_SIZE);
        output_slice.copy_from_slice(&result);
    }
}
