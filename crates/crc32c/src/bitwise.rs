//! Table-less CRC-32C.
//!
//! One bit per step, using a branchless mask instead of a conditional XOR:
//! `0u32.wrapping_sub(crc & 1)` is all ones exactly when the low bit is set.
//! No tables, no `unsafe`, and usable in `const` contexts.
//!
//! This is the portable kernel under the `no-tables` feature and the
//! reference the faster kernels are tested against.

use crate::constants::POLYNOMIAL;

/// Advance the raw register over `data`.
#[cfg_attr(not(any(feature = "no-tables", test)), allow(dead_code))]
#[inline]
pub fn compute(crc: u32, data: &[u8]) -> u32 {
  data.iter().fold(crc, |crc, &byte| compute_byte(crc, byte))
}

/// Advance the raw register over a single byte.
#[cfg_attr(not(any(feature = "no-tables", test)), allow(dead_code))]
#[inline]
pub const fn compute_byte(crc: u32, byte: u8) -> u32 {
  compute_byte_with(POLYNOMIAL, crc, byte)
}

/// [`compute_byte`] for an arbitrary reflected polynomial.
#[inline]
pub(crate) const fn compute_byte_with(poly: u32, mut crc: u32, byte: u8) -> u32 {
  crc ^= byte as u32;

  let mut bit = 0;
  while bit < 8 {
    let mask = 0u32.wrapping_sub(crc & 1);
    crc = (crc >> 1) ^ (poly & mask);
    bit += 1;
  }

  crc
}
