//! One-shot wrappers over the five 512-bit primitives
//!
//! Each primitive is a single-use init/absorb/finalize hasher consumed
//! through the `Digest` trait. `jh` and `blake-hash` sit on the older
//! digest-0.9 trait while the other three use digest-0.10, so every
//! wrapper imports its own trait locally.

use crate::params::DIGEST512_SIZE;

/// Keccak-512 (original Keccak padding, not NIST SHA3-512).
pub fn keccak512(data: &[u8]) -> [u8; DIGEST512_SIZE] {
    use sha3::{Digest, Keccak512};
    let mut out = [0u8; DIGEST512_SIZE];
    out.copy_from_slice(&Keccak512::digest(data));
    out
}

/// BLAKE-512, the SHA-3 finalist (not BLAKE2 or BLAKE3).
pub fn blake512(data: &[u8]) -> [u8; DIGEST512_SIZE] {
    use blake_hash::{Blake512, Digest};
    let mut out = [0u8; DIGEST512_SIZE];
    out.copy_from_slice(&Blake512::digest(data));
    out
}

/// Groestl-512.
pub fn groestl512(data: &[u8]) -> [u8; DIGEST512_SIZE] {
    use groestl::{Digest, Groestl512};
    let mut out = [0u8; DIGEST512_SIZE];
    out.copy_from_slice(&Groestl512::digest(data));
    out
}

/// JH-512.
pub fn jh512(data: &[u8]) -> [u8; DIGEST512_SIZE] {
    use jh::{Digest, Jh512};
    let mut out = [0u8; DIGEST512_SIZE];
    out.copy_from_slice(&Jh512::digest(data));
    out
}

/// Skein-512 with 512-bit output.
pub fn skein512(data: &[u8]) -> [u8; DIGEST512_SIZE] {
    use skein::{Digest, Skein512, consts::U64};
    let mut out = [0u8; DIGEST512_SIZE];
    out.copy_from_slice(&Skein512::<U64>::digest(data));
    out
}
