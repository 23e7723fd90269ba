//! Permutation table for the four follow-up primitives
//!
//! The first chain stage is always Keccak-512. The low 32 bits of its
//! digest, reduced modulo 24, select which order the remaining four
//! primitives run in.

use crate::params::PERMUTATION_COUNT;

/// The four primitives applied after the fixed Keccak stage.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Algo {
    Blake = 0,
    Groestl = 1,
    Jh = 2,
    Skein = 3,
}

use Algo::{Blake, Groestl, Jh, Skein};

/// All 24 orderings of the follow-up primitives, lexicographic.
///
/// The table contents are consensus-critical: swapping any two entries
/// changes every digest the chain produces.
const ORDERS: [[Algo; 4]; PERMUTATION_COUNT] = [
    [Blake, Groestl, Jh, Skein],
    [Blake, Groestl, Skein, Jh],
    [Blake, Jh, Groestl, Skein],
    [Blake, Jh, Skein, Groestl],
    [Blake, Skein, Groestl, Jh],
    [Blake, Skein, Jh, Groestl],
    [Groestl, Blake, Jh, Skein],
    [Groestl, Blake, Skein, Jh],
    [Groestl, Jh, Blake, Skein],
    [Groestl, Jh, Skein, Blake],
    [Groestl, Skein, Blake, Jh],
    [Groestl, Skein, Jh, Blake],
    [Jh, Blake, Groestl, Skein],
    [Jh, Blake, Skein, Groestl],
    [Jh, Groestl, Blake, Skein],
    [Jh, Groestl, Skein, Blake],
    [Jh, Skein, Blake, Groestl],
    [Jh, Skein, Groestl, Blake],
    [Skein, Blake, Groestl, Jh],
    [Skein, Blake, Jh, Groestl],
    [Skein, Groestl, Blake, Jh],
    [Skein, Groestl, Jh, Blake],
    [Skein, Jh, Blake, Groestl],
    [Skein, Jh, Groestl, Blake],
];

/// Reduce a 32-bit selector word to a table index.
#[inline(always)]
pub fn permutation_index(word: u32) -> usize {
    (word % PERMUTATION_COUNT as u32) as usize
}

/// Look up one ordering. `index` must already be reduced with
/// [`permutation_index`].
#[inline(always)]
pub fn permutation_at(index: usize) -> [Algo; 4] {
    ORDERS[index]
}
