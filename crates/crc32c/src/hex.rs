//! Fixed-size hex digest.

// SAFETY: indices are nibbles (< 16) and loop counters bounded by the array sizes.
#![allow(clippy::indexing_slicing)]

use core::{fmt, ops::Deref};

const HEX_LOWER: &[u8; 16] = b"0123456789abcdef";

/// Lowercase hex form of a 4-byte big-endian digest.
///
/// Always exactly 8 ASCII characters in `[0-9a-f]`. Lives on the stack, so it is
/// available without `alloc`; it derefs to `str` and also exposes the raw
/// ASCII bytes.
///
/// ```
/// use crc32c::HexDigest;
///
/// let hex = HexDigest::from_digest([0x09, 0x1a, 0x3b, 0x2c]);
/// assert_eq!(hex, "091a3b2c");
/// assert_eq!(hex.as_bytes(), b"091a3b2c");
/// assert_eq!(hex.len(), 8);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct HexDigest([u8; 8]);

impl HexDigest {
  /// Number of characters.
  pub const LEN: usize = 8;

  /// Encode a big-endian digest.
  #[must_use]
  pub const fn from_digest(digest: [u8; 4]) -> Self {
    let mut out = [0u8; 8];
    let mut i = 0;
    while i < 4 {
      out[2 * i] = HEX_LOWER[(digest[i] >> 4) as usize];
      out[2 * i + 1] = HEX_LOWER[(digest[i] & 0x0F) as usize];
      i += 1;
    }
    Self(out)
  }

  /// The hex text.
  #[must_use]
  pub fn as_str(&self) -> &str {
    // Only ever built from HEX_LOWER, so always ASCII.
    core::str::from_utf8(&self.0).unwrap_or_default()
  }

  /// The hex text as ASCII bytes.
  #[must_use]
  pub const fn as_bytes(&self) -> &[u8; 8] {
    &self.0
  }

  /// The hex text as an owned ASCII array.
  #[must_use]
  pub const fn to_bytes(self) -> [u8; 8] {
    self.0
  }
}

impl Deref for HexDigest {
  type Target = str;

  fn deref(&self) -> &str {
    self.as_str()
  }
}

impl AsRef<str> for HexDigest {
  fn as_ref(&self) -> &str {
    self.as_str()
  }
}

impl AsRef<[u8]> for HexDigest {
  fn as_ref(&self) -> &[u8] {
    &self.0
  }
}

impl fmt::Display for HexDigest {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.pad(self.as_str())
  }
}

impl fmt::Debug for HexDigest {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_tuple("HexDigest").field(&self.as_str()).finish()
  }
}

impl PartialEq<str> for HexDigest {
  fn eq(&self, other: &str) -> bool {
    self.as_str() == other
  }
}

impl PartialEq<&str> for HexDigest {
  fn eq(&self, other: &&str) -> bool {
    self.as_str() == *other
  }
}

impl PartialEq<[u8]> for HexDigest {
  fn eq(&self, other: &[u8]) -> bool {
    self.0.as_slice() == other
  }
}

impl PartialEq<[u8; 8]> for HexDigest {
  fn eq(&self, other: &[u8; 8]) -> bool {
    self.0 == *other
  }
}

impl PartialEq<&[u8; 8]> for HexDigest {
  fn eq(&self, other: &&[u8; 8]) -> bool {
    self.0 == **other
  }
}

#[cfg(feature = "alloc")]
impl From<HexDigest> for alloc::string::String {
  fn from(hex: HexDigest) -> Self {
    alloc::string::String::from(hex.as_str())
  }
}

#[cfg(test)]
mod tests {
  use alloc::format;

  use super::*;

  #[test]
  fn zero() {
    assert_eq!(HexDigest::from_digest([0; 4]), "00000000");
  }

  #[test]
  fn big_endian_order_and_lowercase() {
    let hex = HexDigest::from_digest([0xDE, 0xAD, 0xBE, 0xEF]);
    assert_eq!(hex, "deadbeef");
    assert_eq!(hex, *b"deadbeef");
  }

  #[test]
  fn every_nibble() {
    let hex = HexDigest::from_digest([0x01, 0x23, 0xAB, 0xCD]);
    assert_eq!(hex.as_str(), "0123abcd");
    let hex = HexDigest::from_digest([0x45, 0x67, 0x89, 0xEF]);
    assert_eq!(hex.as_str(), "456789ef");
  }

  #[test]
  fn formatting() {
    let hex = HexDigest::from_digest([0x09, 0x1A, 0x3B, 0x2C]);
    assert_eq!(format!("{hex}"), "091a3b2c");
    assert_eq!(format!("{hex:>10}"), "  091a3b2c");
    assert_eq!(format!("{hex:?}"), "HexDigest(\"091a3b2c\")");
  }

  #[cfg(feature = "alloc")]
  #[test]
  fn into_string() {
    let hex = HexDigest::from_digest([0x09, 0x1A, 0x3B, 0x2C]);
    assert_eq!(alloc::string::String::from(hex), "091a3b2c");
  }

  #[test]
  fn derefs_to_str() {
    let hex = HexDigest::from_digest([0xFF; 4]);
    assert!(hex.chars().all(|c| c == 'f'));
    assert_eq!(hex.len(), HexDigest::LEN);
  }
}
