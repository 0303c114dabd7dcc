//! x86_64 CRC-32C using the SSE4.2 `crc32` instruction.
//!
//! The instruction implements exactly the reflected Castagnoli polynomial, so
//! it operates on the same raw register as the portable kernel.
//!
//! Safety:
//! - This file is allowed to use `unsafe` for ISA-specific intrinsics.
//! - All unsafe is contained within this module.

#![allow(unsafe_code)]

use core::arch::x86_64::{_mm_crc32_u16, _mm_crc32_u32, _mm_crc32_u64, _mm_crc32_u8};

/// Advance the raw register over `data` with SSE4.2.
///
/// # Safety
/// Caller must ensure the CPU supports the `sse4.2` target feature.
#[target_feature(enable = "sse4.2")]
unsafe fn compute_sse42_unchecked(crc: u32, data: &[u8]) -> u32 {
  let mut current = crc;

  let mut words = data.chunks_exact(8);
  for word in words.by_ref() {
    let mut buf = [0u8; 8];
    buf.copy_from_slice(word);
    current = _mm_crc32_u64(u64::from(current), u64::from_le_bytes(buf)) as u32;
  }

  let mut tail = words.remainder();

  if tail.len() >= 4 {
    let (head, rest) = tail.split_at(4);
    let mut buf = [0u8; 4];
    buf.copy_from_slice(head);
    current = _mm_crc32_u32(current, u32::from_le_bytes(buf));
    tail = rest;
  }

  if tail.len() >= 2 {
    let (head, rest) = tail.split_at(2);
    let mut buf = [0u8; 2];
    buf.copy_from_slice(head);
    current = _mm_crc32_u16(current, u16::from_le_bytes(buf));
    tail = rest;
  }

  if let Some(&byte) = tail.first() {
    current = _mm_crc32_u8(current, byte);
  }

  current
}

/// Advance the raw register with SSE4.2.
///
/// Only reachable through [`Backend::Sse42`](crate::Backend::Sse42), which is
/// handed out after `sse4.2` has been confirmed at compile time or runtime.
#[inline]
pub(crate) fn compute_sse42(crc: u32, data: &[u8]) -> u32 {
  debug_assert!(crate::Backend::Sse42.is_available());
  // SAFETY: callers obtain this kernel only after confirming `sse4.2`.
  unsafe { compute_sse42_unchecked(crc, data) }
}

/// Whether `sse4.2` is usable by this process.
#[inline]
pub(crate) fn has_sse42() -> bool {
  if cfg!(target_feature = "sse4.2") {
    return true;
  }

  #[cfg(feature = "std")]
  {
    std::arch::is_x86_feature_detected!("sse4.2")
  }

  #[cfg(not(feature = "std"))]
  {
    false
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn matches_portable_when_present() {
    if !has_sse42() {
      return;
    }

    let data: [u8; 67] = core::array::from_fn(|i| (i as u8).wrapping_mul(151).wrapping_add(3));
    for len in 0..=data.len() {
      for init in [0u32, 0xFFFF_FFFF, 0x0123_4567] {
        let input = &data[..len];
        assert_eq!(
          compute_sse42(init, input),
          crate::portable::compute(init, input),
          "sse4.2 mismatch at len={len}"
        );
      }
    }
  }
}
