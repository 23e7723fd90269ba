//! # ZR5 Proof-of-Work Hash
//!
//! ZR5 chains five independent 512-bit hash primitives. Keccak-512 always
//! runs first; the low 32 bits of its digest pick one of the 24 orderings
//! of the remaining four (BLAKE-512, Groestl-512, JH-512, Skein-512), so
//! the structure of the chain itself depends on the input.
//!
//! On top of the chain sits a two-pass "Proof of Knowledge" wrapper: the
//! first pass derives a 16-bit payload which is embedded into the block
//! header's version field, and a second pass over the updated header
//! yields the final 256-bit digest.
//!
//! ## Entry points
//!
//! - [`hash512`]: the five-stage chain, 64-byte output.
//! - [`hash`]: the two-pass PoK-embedding wrapper, 32-byte output. This
//!   is what mining and validation loops call.
//!
//! ```rust
//! let header = [0u8; 80];
//! let digest = zr5::hash(&header);
//! assert_eq!(digest.len(), 32);
//! ```
//!
//! Both functions are pure and keep no state between calls, so concurrent
//! callers need no synchronization.
//!
//! ## no_std Support
//!
//! The core uses only fixed-size buffers and works without `std`:
//!
//! ```toml
//! [dependencies]
//! zr5-core = { version = "0.1", default-features = false }
//! ```

#![cfg_attr(not(feature = "std"), no_std)]

mod params;
mod permute;
mod primitives;
mod zr5;

#[cfg(feature = "std")]
mod ffi;

pub use params::*;
pub use permute::{Algo, permutation_at, permutation_index};
pub use zr5::{has_pok, hash, hash512, pok_data, version_number};
