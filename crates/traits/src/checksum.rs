//! Streaming checksum traits.
//!
//! - **Streaming**: incremental updates over any split of the input
//! - **Resumable**: a finalized value can seed a new hasher
//! - **Combinable**: `crc(A || B)` without reprocessing `A`

use core::fmt::Debug;

/// Non-cryptographic checksum algorithm.
///
/// # Usage
///
/// ```rust,ignore
/// use crc32c::{Checksum, Crc32c};
///
/// // One-shot
/// let crc = Crc32c::checksum(b"hello world");
///
/// // Streaming
/// let mut hasher = Crc32c::new();
/// hasher.update(b"hello ");
/// hasher.update(b"world");
/// assert_eq!(hasher.finalize(), crc);
/// ```
///
/// # Implementor Requirements
///
/// - `new()` must return the same state as `Default::default()`
/// - `finalize()` must be idempotent and must not consume the hasher
/// - `update(a); update(b)` must equal `update(a || b)` for every split
/// - `update(&[])` must leave the state untouched
/// - `with_initial(h.finalize())` must continue exactly where `h` stopped
pub trait Checksum: Clone + Default {
  /// Output size in bytes.
  const OUTPUT_SIZE: usize;

  /// The checksum output type.
  type Output: Copy + Eq + Debug + Default;

  /// Create a new hasher over empty input.
  #[must_use]
  fn new() -> Self;

  /// Create a hasher that resumes from a previously finalized value.
  #[must_use]
  fn with_initial(initial: Self::Output) -> Self;

  /// Fold `data` into the running checksum.
  fn update(&mut self, data: &[u8]);

  /// Fold several non-contiguous buffers, in order.
  ///
  /// Identical to calling [`update`](Self::update) on each buffer.
  #[inline]
  fn update_vectored(&mut self, bufs: &[&[u8]]) {
    for buf in bufs {
      self.update(buf);
    }
  }

  /// Return the checksum of everything fed so far.
  #[must_use]
  fn finalize(&self) -> Self::Output;

  /// Return the hasher to the empty-input state.
  ///
  /// After calling this, the hasher behaves as if built by [`new`](Self::new).
  fn reset(&mut self);

  /// Compute the checksum of `data` in one shot.
  #[inline]
  #[must_use]
  fn checksum(data: &[u8]) -> Self::Output {
    let mut h = Self::new();
    h.update(data);
    h.finalize()
  }

  /// Compute the checksum of several buffers in one shot.
  #[inline]
  #[must_use]
  fn checksum_vectored(bufs: &[&[u8]]) -> Self::Output {
    let mut h = Self::new();
    h.update_vectored(bufs);
    h.finalize()
  }
}

/// Checksums that support combination of independently computed parts.
///
/// For CRCs this works because appending `B` to `A` multiplies the register
/// by `x^(8*len(B))` modulo the generator polynomial:
///
/// ```text
/// crc(A || B) = crc(A) * x^(8*len(B)) mod G(x) XOR crc(B)
/// ```
pub trait ChecksumCombine: Checksum {
  /// Given `crc_a = crc(A)` and `crc_b = crc(B)`, computes `crc(A || B)`.
  #[must_use]
  fn combine(crc_a: Self::Output, crc_b: Self::Output, len_b: usize) -> Self::Output;
}
