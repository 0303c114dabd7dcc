//! aarch64 CRC-32C using the ARMv8 CRC extension (`crc32c*` instructions).
//!
//! Safety:
//! - This file is allowed to use `unsafe` for ISA-specific intrinsics.
//! - All unsafe is contained within this module.

#![allow(unsafe_code)]

use core::arch::aarch64::{__crc32cb, __crc32cd, __crc32ch, __crc32cw};

/// Advance the raw register over `data` with the CRC extension.
///
/// # Safety
/// Caller must ensure the CPU supports the `crc` target feature.
#[target_feature(enable = "crc")]
unsafe fn compute_crc_unchecked(crc: u32, data: &[u8]) -> u32 {
  let mut current = crc;

  let mut words = data.chunks_exact(8);
  for word in words.by_ref() {
    let mut buf = [0u8; 8];
    buf.copy_from_slice(word);
    current = __crc32cd(current, u64::from_le_bytes(buf));
  }

  let mut tail = words.remainder();

  if tail.len() >= 4 {
    let (head, rest) = tail.split_at(4);
    let mut buf = [0u8; 4];
    buf.copy_from_slice(head);
    current = __crc32cw(current, u32::from_le_bytes(buf));
    tail = rest;
  }

  if tail.len() >= 2 {
    let (head, rest) = tail.split_at(2);
    let mut buf = [0u8; 2];
    buf.copy_from_slice(head);
    current = __crc32ch(current, u16::from_le_bytes(buf));
    tail = rest;
  }

  if let Some(&byte) = tail.first() {
    current = __crc32cb(current, byte);
  }

  current
}

/// Advance the raw register with the CRC extension.
///
/// Only reachable through [`Backend::ArmCrc`](crate::Backend::ArmCrc).
#[inline]
pub(crate) fn compute_crc(crc: u32, data: &[u8]) -> u32 {
  debug_assert!(crate::Backend::ArmCrc.is_available());
  // SAFETY: callers obtain this kernel only after confirming `crc`.
  unsafe { compute_crc_unchecked(crc, data) }
}

/// Whether the `crc` extension is usable by this process.
#[inline]
pub(crate) fn has_crc() -> bool {
  if cfg!(target_feature = "crc") {
    return true;
  }

  #[cfg(feature = "std")]
  {
    std::arch::is_aarch64_feature_detected!("crc")
  }

  #[cfg(not(feature = "std"))]
  {
    false
  }
}
