//! CRC-32C combination.
//!
//! Computes `crc(A || B)` from `crc(A)`, `crc(B)` and `len(B)` without touching
//! the bytes of `A`. Appending `len(B)` zero bytes is a linear map on the
//! register; it is applied to `crc(A)` by square-and-multiply over the byte
//! count, so the cost is O(log len(B)) 32×32 GF(2) matrix products.
//!
//! The pre/post inversions cancel: with init and xorout both all-ones the
//! affine terms of `crc(A)` shifted and `crc(B)` XOR away, leaving
//! `shift(crc(A)) ^ crc(B)`.

// SAFETY: All array indexing in this module uses bounded loop indices (0..32)
// or `trailing_zeros` of a non-zero u32, both below the array length.
#![allow(clippy::indexing_slicing)]

use crate::constants::POLYNOMIAL;

/// A 32×32 GF(2) matrix; column `i` is the image of bit `i`.
#[derive(Clone, Copy)]
struct Gf2Matrix([u32; 32]);

impl Gf2Matrix {
  /// The effect of one zero bit on the reflected register.
  const fn one_zero_bit() -> Self {
    let mut m = [0u32; 32];
    m[0] = POLYNOMIAL;
    let mut i = 1;
    while i < 32 {
      m[i] = 1 << (i - 1);
      i += 1;
    }
    Self(m)
  }

  const fn times(&self, vec: u32) -> u32 {
    let mut sum = 0u32;
    let mut v = vec;
    while v != 0 {
      sum ^= self.0[v.trailing_zeros() as usize];
      v &= v - 1;
    }
    sum
  }

  const fn square(&self) -> Self {
    let mut out = [0u32; 32];
    let mut i = 0;
    while i < 32 {
      out[i] = self.times(self.0[i]);
      i += 1;
    }
    Self(out)
  }
}

/// The effect of one zero byte: `x^8`.
const ZERO_BYTE: Gf2Matrix = Gf2Matrix::one_zero_bit().square().square().square();

/// Combine two CRC-32C values.
///
/// Given `crc_a = value(A)` and `crc_b = value(B)`, returns `value(A || B)`.
#[must_use]
pub fn combine(crc_a: u32, crc_b: u32, len_b: usize) -> u32 {
  let mut op = ZERO_BYTE;
  let mut crc = crc_a;
  let mut len = len_b as u64;

  while len != 0 {
    if len & 1 != 0 {
      crc = op.times(crc);
    }
    len >>= 1;
    if len != 0 {
      op = op.square();
    }
  }

  crc ^ crc_b
}
