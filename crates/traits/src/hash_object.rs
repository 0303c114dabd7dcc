//! Hash-object capability set.
//!
//! The familiar `update` / `digest` / `hexdigest` / `copy` shape used by
//! hashing libraries. This is a capability interface rather than a base type:
//! implementors are concrete values and `copy()` is a value snapshot.

use core::fmt::Debug;

/// A stateful hasher exposing binary and hex digests.
///
/// # Implementor Requirements
///
/// - `digest()` and `hexdigest()` are pure reads; further updates may follow
/// - `hexdigest()` is the lowercase hex encoding of `digest()`
/// - `copy()` shares no mutable state with `self`
///
/// # Example
///
/// ```rust
/// # use traits::HashObject;
/// # #[derive(Clone)]
/// # struct Xor(u8);
/// # impl HashObject for Xor {
/// #   type Digest = [u8; 1];
/// #   type HexDigest = [u8; 2];
/// #   fn update(&mut self, data: &[u8]) {
/// #     self.0 = data.iter().fold(self.0, |acc, &b| acc ^ b);
/// #   }
/// #   fn digest(&self) -> [u8; 1] { [self.0] }
/// #   fn hexdigest(&self) -> [u8; 2] {
/// #     const HEX: &[u8; 16] = b"0123456789abcdef";
/// #     [HEX[usize::from(self.0 >> 4)], HEX[usize::from(self.0 & 0xF)]]
/// #   }
/// # }
/// let mut h = Xor(0);
/// h.update(b"\x0f\xf0");
/// let snapshot = h.copy();
/// h.update(b"\x01");
///
/// assert_eq!(snapshot.digest(), [0xff]);
/// assert_eq!(&snapshot.hexdigest(), b"ff");
/// assert_eq!(h.digest(), [0xfe]);
/// ```
pub trait HashObject: Clone {
  /// Binary digest, e.g. `[u8; 4]`.
  type Digest: Copy + Eq + Debug + AsRef<[u8]>;

  /// Lowercase hex form of [`Digest`](Self::Digest).
  type HexDigest: Copy + Eq + Debug + AsRef<[u8]>;

  /// Fold `data` into the running state.
  fn update(&mut self, data: &[u8]);

  /// Binary digest of everything fed so far.
  #[must_use]
  fn digest(&self) -> Self::Digest;

  /// Hex digest of everything fed so far.
  #[must_use]
  fn hexdigest(&self) -> Self::HexDigest;

  /// Independent snapshot of the current state.
  #[inline]
  #[must_use]
  fn copy(&self) -> Self {
    self.clone()
  }
}
