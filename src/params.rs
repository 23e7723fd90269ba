//! ZR5 algorithm constants
//!
//! The mask values are consensus-critical: they define how the 32-bit
//! version field splits into version number, PoK flag, and PoK payload.

/// Output size of each chained primitive (512 bits)
pub const DIGEST512_SIZE: usize = 64;

/// Final output size of the PoK wrapper (256 bits)
pub const DIGEST256_SIZE: usize = 32;

/// Size of the fixed scratch header used by the second hashing pass
pub const WORK_SIZE: usize = 64;

/// Number of orderings of the four non-Keccak primitives (4!)
pub const PERMUTATION_COUNT: usize = 24;

/// Low 15 bits of the version field: the semantic version number
pub const VERSION_MASK: u32 = 0x0000_7FFF;

/// Bit 15 of the version field: the "PoK present" flag
pub const POK_BOOL_MASK: u32 = 0x0000_8000;

/// Bits 16..32 of the version field: the embedded PoK payload
pub const POK_DATA_MASK: u32 = 0xFFFF_0000;
