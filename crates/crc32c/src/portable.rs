//! Portable CRC-32C using slicing-by-8.
//!
//! For each 8-byte word:
//! 1. XOR the low half of the word with the register
//! 2. Look up each of the 8 bytes in the table for its distance from the end
//! 3. XOR the 8 entries together to form the new register
//!
//! The lookups are independent, which hides most of the table latency.
//! Trailing bytes go through table 0 one at a time.

// SAFETY: table lookups index 256-entry tables with `u8` values, and
// `chunks_exact(8)` fixes the word size.
#![allow(clippy::indexing_slicing)]

#[cfg(not(feature = "no-tables"))]
use crate::constants::TABLES;

/// Advance the raw register over `data`.
///
/// `crc` is the register value, not the finalized checksum: callers apply
/// the pre/post inversion.
#[inline]
pub fn compute(crc: u32, data: &[u8]) -> u32 {
  #[cfg(feature = "no-tables")]
  {
    crate::bitwise::compute(crc, data)
  }

  #[cfg(not(feature = "no-tables"))]
  {
    let [t0, t1, t2, t3, t4, t5, t6, t7] = &TABLES.0;
    let mut crc = crc;
    let mut chunks = data.chunks_exact(8);

    for chunk in chunks.by_ref() {
      let mut word = [0u8; 8];
      word.copy_from_slice(chunk);
      let d = u64::from_le_bytes(word);

      let lo = u64::from(crc) ^ (d & 0xFFFF_FFFF);
      let hi = d >> 32;

      crc = t7[usize::from(lo as u8)]
        ^ t6[usize::from((lo >> 8) as u8)]
        ^ t5[usize::from((lo >> 16) as u8)]
        ^ t4[usize::from((lo >> 24) as u8)]
        ^ t3[usize::from(hi as u8)]
        ^ t2[usize::from((hi >> 8) as u8)]
        ^ t1[usize::from((hi >> 16) as u8)]
        ^ t0[usize::from((hi >> 24) as u8)];
    }

    for &byte in chunks.remainder() {
      crc = (crc >> 8) ^ t0[usize::from(crc as u8 ^ byte)];
    }

    crc
  }
}

#[cfg(test)]
mod tests {
  use alloc::vec::Vec;

  use super::*;

  const INIT: u32 = 0xFFFF_FFFF;

  #[test]
  fn check_string() {
    assert_eq!(compute(INIT, b"123456789") ^ INIT, 0xE306_9283);
  }

  #[test]
  fn empty() {
    assert_eq!(compute(INIT, b"") ^ INIT, 0);
  }

  #[test]
  fn zeros_and_ones() {
    assert_eq!(compute(INIT, &[0u8; 32]) ^ INIT, 0x8A91_36AA);
    assert_eq!(compute(INIT, &[0xFFu8; 32]) ^ INIT, 0x62A8_AB43);
  }

  #[test]
  fn matches_bitwise_across_word_boundaries() {
    let data: Vec<u8> = (0..=200u8).map(|b| b.wrapping_mul(31).wrapping_add(7)).collect();

    for len in 0..data.len() {
      let input = &data[..len];
      for init in [0u32, INIT, 0x0123_4567] {
        assert_eq!(
          compute(init, input),
          crate::bitwise::compute(init, input),
          "len={len} init={init:#010x}"
        );
      }
    }
  }

  #[test]
  fn every_byte_value_in_every_lane() {
    // Each of the 8 table lookups sees all 256 indices, plus a 1-7 byte tail.
    for lane in 0..8 {
      for byte in 0..=255u8 {
        let mut data = [0u8; 15];
        data[lane] = byte;
        data[8 + lane.min(6)] = byte;
        for init in [0u32, INIT, 0x89AB_CDEF] {
          assert_eq!(
            compute(init, &data),
            crate::bitwise::compute(init, &data),
            "lane={lane} byte={byte:#04x}"
          );
        }
      }
    }
  }

  #[test]
  fn incremental_matches_oneshot() {
    let data = b"hello world, this is a test of incremental CRC";
    let oneshot = compute(INIT, data);

    for split in 0..=data.len() {
      let (a, b) = data.split_at(split);
      assert_eq!(compute(compute(INIT, a), b), oneshot, "mismatch at split point {split}");
    }
  }
}
