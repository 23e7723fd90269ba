//! The ZR5 chain and its Proof-of-Knowledge wrapper
//!
//! [`hash512`] is the five-stage chain: Keccak-512 first, then the four
//! remaining primitives in an order chosen by the Keccak digest itself.
//! [`hash`] runs the chain twice over a block header, embedding a 16-bit
//! payload derived from the first pass into the header's version field
//! before the second pass.

use crate::params::{
    DIGEST256_SIZE, DIGEST512_SIZE, POK_BOOL_MASK, POK_DATA_MASK, VERSION_MASK, WORK_SIZE,
};
use crate::permute::{Algo, permutation_at, permutation_index};
use crate::primitives::{blake512, groestl512, jh512, keccak512, skein512};

/// Little-endian decode of the leading word of a digest.
///
/// This is the one place integer values are read out of digest bytes: the
/// permutation selector and the PoK payload both come from here.
#[inline(always)]
fn leading_word(digest: &[u8; DIGEST512_SIZE]) -> u32 {
    u32::from_le_bytes([digest[0], digest[1], digest[2], digest[3]])
}

/// Compute the five-stage ZR5 chain over `input`, yielding 512 bits.
///
/// Keccak-512 runs over the full input; every later stage consumes the
/// 64-byte digest of the stage before it, never the original input. The
/// order of the four follow-up stages is `leading_word(keccak) mod 24`
/// into the permutation table, so the chain's structure is itself
/// input-dependent.
pub fn hash512(input: &[u8]) -> [u8; DIGEST512_SIZE] {
    let mut digest = keccak512(input);

    let order = permutation_at(permutation_index(leading_word(&digest)));
    for algo in order {
        digest = match algo {
            Algo::Blake => blake512(&digest),
            Algo::Groestl => groestl512(&digest),
            Algo::Jh => jh512(&digest),
            Algo::Skein => skein512(&digest),
        };
    }

    digest
}

/// Compute the full ZR5 proof-of-work digest of a block header.
///
/// Two chain passes with a version-field update in between:
///
/// 1. The first pass runs [`hash512`] over the caller's input, untouched.
/// 2. The PoK payload is the high 16 bits of the first-pass digest's
///    leading word (bytes 0..4, little endian, masked `0xFFFF_0000`).
/// 3. The header's version field (bytes 0..4) is rewritten as
///    `(version & 0x7FFF) | payload`: version number preserved, PoK flag
///    bit cleared, payload embedded.
/// 4. The second pass runs over a fixed 64-byte working copy of the
///    header carrying the updated version field; shorter inputs are zero
///    padded, longer inputs contribute only their first 64 bytes here.
///
/// The result is the upper 256 bits of the second-pass digest. The
/// caller's buffer is never mutated.
pub fn hash(input: &[u8]) -> [u8; DIGEST256_SIZE] {
    let mut work = [0u8; WORK_SIZE];
    let n = input.len().min(WORK_SIZE);
    work[..n].copy_from_slice(&input[..n]);

    let version = u32::from_le_bytes([work[0], work[1], work[2], work[3]]);

    let first = hash512(input);
    let pok = leading_word(&first);

    let version = (version & VERSION_MASK) | (pok & POK_DATA_MASK);
    work[..4].copy_from_slice(&version.to_le_bytes());

    // Second-pass width is always the whole 64-byte working copy.
    let second = hash512(&work);

    let mut out = [0u8; DIGEST256_SIZE];
    out.copy_from_slice(&second[DIGEST512_SIZE / 2..]);
    out
}

/// The semantic version number: low 15 bits of the version field.
#[inline(always)]
pub fn version_number(version: u32) -> u32 {
    version & VERSION_MASK
}

/// Whether the version field's PoK flag (bit 15) is set.
#[inline(always)]
pub fn has_pok(version: u32) -> bool {
    version & POK_BOOL_MASK != 0
}

/// The embedded PoK payload: bits 16..32 of the version field.
#[inline(always)]
pub fn pok_data(version: u32) -> u32 {
    version & POK_DATA_MASK
}
