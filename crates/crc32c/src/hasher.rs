//! The CRC-32C accumulator.

use core::fmt;

use traits::{Checksum, ChecksumCombine, HashObject};

use crate::{extend, hex::HexDigest, value};

/// Running CRC-32C (Castagnoli) checksum.
///
/// Holds exactly one `u32`: the checksum of every byte fed so far, as if the
/// concatenation of all chunks had been processed in one pass. Reading the
/// result (`value`, `digest`, `hexdigest`) never consumes state.
///
/// # Thread Safety
///
/// `Crc32c` is `Send` and `Sync` but not internally synchronized: `update`
/// takes `&mut self`. Distinct accumulators need no coordination.
///
/// # Example
///
/// ```
/// use crc32c::Crc32c;
///
/// let mut crc = Crc32c::new();
/// crc.update(b"1234");
/// crc.update(b"56789");
///
/// assert_eq!(crc.value(), 0xE306_9283);
/// assert_eq!(crc.digest(), [0xE3, 0x06, 0x92, 0x83]);
/// assert_eq!(crc.hexdigest(), "e3069283");
/// ```
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Crc32c {
  crc: u32,
}

impl Crc32c {
  /// Accumulator over empty input (value `0`).
  #[inline]
  #[must_use]
  pub const fn new() -> Self {
    Self { crc: 0 }
  }

  /// Accumulator whose first chunk is `data`.
  #[inline]
  #[must_use]
  pub fn with_data(data: &[u8]) -> Self {
    Self { crc: value(data) }
  }

  /// Continue from a previously computed checksum.
  ///
  /// ```
  /// use crc32c::Crc32c;
  ///
  /// let data = b"hello world";
  /// let (first, second) = data.split_at(6);
  ///
  /// let mut crc = Crc32c::resume(crc32c::value(first));
  /// crc.update(second);
  /// assert_eq!(crc.value(), crc32c::value(data));
  /// ```
  #[inline]
  #[must_use]
  pub const fn resume(crc: u32) -> Self {
    Self { crc }
  }

  /// One-shot checksum; same as [`value`](crate::value).
  #[inline]
  #[must_use]
  pub fn checksum(data: &[u8]) -> u32 {
    value(data)
  }

  /// Fold `data` into the checksum. Empty input is a no-op.
  #[inline]
  pub fn update(&mut self, data: &[u8]) {
    self.crc = extend(self.crc, data);
  }

  /// Fold several buffers, in order.
  #[inline]
  pub fn update_vectored(&mut self, bufs: &[&[u8]]) {
    for buf in bufs {
      self.update(buf);
    }
  }

  /// The current checksum.
  #[inline]
  #[must_use]
  pub const fn value(&self) -> u32 {
    self.crc
  }

  /// The current checksum. Does not consume the accumulator.
  #[inline]
  #[must_use]
  pub const fn finalize(&self) -> u32 {
    self.crc
  }

  /// The current checksum as 4 big-endian bytes.
  #[inline]
  #[must_use]
  pub const fn digest(&self) -> [u8; 4] {
    self.crc.to_be_bytes()
  }

  /// The current checksum as 8 lowercase hex characters.
  #[inline]
  #[must_use]
  pub const fn hexdigest(&self) -> HexDigest {
    HexDigest::from_digest(self.digest())
  }

  /// An independent snapshot of this accumulator.
  #[inline]
  #[must_use]
  pub fn copy(&self) -> Self {
    self.clone()
  }

  /// Back to the empty-input state.
  #[inline]
  pub fn reset(&mut self) {
    self.crc = 0;
  }

  /// Combine two checksums: `value(A || B)` from `value(A)`, `value(B)`, `len(B)`.
  ///
  /// ```
  /// use crc32c::Crc32c;
  ///
  /// let (a, b) = b"hello world".split_at(6);
  /// let combined = Crc32c::combine(crc32c::value(a), crc32c::value(b), b.len());
  /// assert_eq!(combined, crc32c::value(b"hello world"));
  /// ```
  #[inline]
  #[must_use]
  pub fn combine(crc_a: u32, crc_b: u32, len_b: usize) -> u32 {
    crate::combine::combine(crc_a, crc_b, len_b)
  }
}

impl Default for Crc32c {
  #[inline]
  fn default() -> Self {
    Self::new()
  }
}

impl fmt::Debug for Crc32c {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("Crc32c").field("crc", &format_args!("{:#010x}", self.crc)).finish()
  }
}

impl fmt::LowerHex for Crc32c {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    fmt::LowerHex::fmt(&self.crc, f)
  }
}

impl fmt::UpperHex for Crc32c {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    fmt::UpperHex::fmt(&self.crc, f)
  }
}

impl From<Crc32c> for u32 {
  #[inline]
  fn from(crc: Crc32c) -> Self {
    crc.crc
  }
}

impl Checksum for Crc32c {
  const OUTPUT_SIZE: usize = 4;
  type Output = u32;

  #[inline]
  fn new() -> Self {
    Crc32c::new()
  }

  #[inline]
  fn with_initial(initial: u32) -> Self {
    Crc32c::resume(initial)
  }

  #[inline]
  fn update(&mut self, data: &[u8]) {
    Crc32c::update(self, data);
  }

  #[inline]
  fn finalize(&self) -> u32 {
    Crc32c::finalize(self)
  }

  #[inline]
  fn reset(&mut self) {
    Crc32c::reset(self);
  }

  #[inline]
  fn checksum(data: &[u8]) -> u32 {
    value(data)
  }
}

impl ChecksumCombine for Crc32c {
  #[inline]
  fn combine(crc_a: u32, crc_b: u32, len_b: usize) -> u32 {
    Crc32c::combine(crc_a, crc_b, len_b)
  }
}

impl HashObject for Crc32c {
  type Digest = [u8; 4];
  type HexDigest = HexDigest;

  #[inline]
  fn update(&mut self, data: &[u8]) {
    Crc32c::update(self, data);
  }

  #[inline]
  fn digest(&self) -> [u8; 4] {
    Crc32c::digest(self)
  }

  #[inline]
  fn hexdigest(&self) -> HexDigest {
    Crc32c::hexdigest(self)
  }
}

#[cfg(feature = "std")]
impl std::io::Write for Crc32c {
  #[inline]
  fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
    self.update(buf);
    Ok(buf.len())
  }

  #[inline]
  fn flush(&mut self) -> std::io::Result<()> {
    Ok(())
  }
}
