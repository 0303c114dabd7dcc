//! CRC-32C (Castagnoli) constants.
//!
//! Polynomial: 0x1EDC6F41 (reflected: 0x82F63B78)
//! Used by: iSCSI, SCTP, Btrfs, ext4, RocksDB, LevelDB
//!
//! The slicing tables are produced by `const fn` at compile time and live in a
//! `static`, so they exist before any caller runs and are never written.

// SAFETY: All array indexing in this module uses bounded loop indices (0..256, 0..8).
// Clippy cannot prove this in const fn contexts, but bounds are statically guaranteed.
#![allow(clippy::indexing_slicing)]

/// Normal (MSB-first) form of the Castagnoli polynomial.
pub const POLYNOMIAL_NORMAL: u32 = 0x1EDC_6F41;

/// Reflected (LSB-first) form of the Castagnoli polynomial.
///
/// All kernels in this crate are reflected, so this is the form they use.
pub const POLYNOMIAL: u32 = 0x82F6_3B78;

/// Pre/post conditioning mask: the register starts at `!0` and is inverted
/// before it is handed back to callers.
pub const XOR_MASK: u32 = 0xFFFF_FFFF;

/// Wrapper type to force 64-byte (cache line) alignment.
#[cfg(not(feature = "no-tables"))]
#[repr(align(64))]
pub struct Aligned64<T>(pub T);

/// Slicing-by-8 lookup tables.
///
/// `TABLES.0[0]` is the classic byte-at-a-time table; table `k` advances a byte
/// that sits `k` positions earlier in an 8-byte word. Total size 8 KiB.
#[cfg(not(feature = "no-tables"))]
pub static TABLES: Aligned64<[[u32; 256]; 8]> = Aligned64(generate_slicing_tables(POLYNOMIAL));

/// Base table: the register effect of each byte value.
#[cfg(not(feature = "no-tables"))]
const fn generate_table_0(poly: u32) -> [u32; 256] {
  let mut table = [0u32; 256];
  let mut i = 0usize;

  while i < 256 {
    table[i] = crate::bitwise::compute_byte_with(poly, 0, i as u8);
    i += 1;
  }

  table
}

/// All 8 slicing tables; table `t` is table `t - 1` pushed through one more zero byte.
#[cfg(not(feature = "no-tables"))]
const fn generate_slicing_tables(poly: u32) -> [[u32; 256]; 8] {
  let mut tables = [[0u32; 256]; 8];
  tables[0] = generate_table_0(poly);

  let mut t = 1;
  while t < 8 {
    let mut i = 0;
    while i < 256 {
      let prev = tables[t - 1][i];
      tables[t][i] = (prev >> 8) ^ tables[0][(prev & 0xFF) as usize];
      i += 1;
    }
    t += 1;
  }

  tables
}
