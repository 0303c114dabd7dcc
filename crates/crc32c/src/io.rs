//! I/O adapters that checksum data as it moves.
//!
//! - [`ChecksumReader`]: wraps a reader, folds in every byte actually read
//! - [`ChecksumWriter`]: wraps a writer, folds in every byte actually accepted
//! - [`Crc32c::consume`]: drains a reader in fixed-size chunks, yielding each
//!   chunk after it has been folded in
//!
//! Short reads and short writes are accounted for: the checksum only ever
//! covers bytes that crossed the inner reader or writer.

use std::io::{self, IoSlice, IoSliceMut, Read, Write};
use std::vec::Vec;

use crate::Crc32c;

/// Wraps a [`Read`] and checksums everything read through it.
///
/// ```
/// use std::io::{Cursor, Read};
///
/// use crc32c::ChecksumReader;
///
/// let mut reader = ChecksumReader::new(Cursor::new(b"123456789".to_vec()));
/// let mut out = Vec::new();
/// reader.read_to_end(&mut out)?;
/// assert_eq!(reader.crc(), 0xE306_9283);
/// # Ok::<(), std::io::Error>(())
/// ```
#[derive(Clone, Debug)]
pub struct ChecksumReader<R> {
  inner: R,
  hasher: Crc32c,
}

impl<R> ChecksumReader<R> {
  /// Wrap `inner`, starting from the empty-input checksum.
  #[inline]
  #[must_use]
  pub fn new(inner: R) -> Self {
    Self::with_hasher(inner, Crc32c::new())
  }

  /// Wrap `inner`, continuing an existing accumulator.
  #[inline]
  #[must_use]
  pub fn with_hasher(inner: R, hasher: Crc32c) -> Self {
    Self { inner, hasher }
  }

  /// Checksum of everything read so far.
  #[inline]
  #[must_use]
  pub fn crc(&self) -> u32 {
    self.hasher.value()
  }

  /// The accumulator itself.
  #[inline]
  #[must_use]
  pub fn hasher(&self) -> &Crc32c {
    &self.hasher
  }

  #[inline]
  pub fn get_ref(&self) -> &R {
    &self.inner
  }

  /// Reading directly from the inner reader bypasses the checksum.
  #[inline]
  pub fn get_mut(&mut self) -> &mut R {
    &mut self.inner
  }

  #[inline]
  pub fn into_inner(self) -> R {
    self.inner
  }

  /// Unwrap into the inner reader and the final checksum.
  #[inline]
  pub fn into_parts(self) -> (R, u32) {
    (self.inner, self.hasher.value())
  }
}

impl<R: Read> Read for ChecksumReader<R> {
  fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
    let n = self.inner.read(buf)?;
    if let Some(data) = buf.get(..n) {
      self.hasher.update(data);
    }
    Ok(n)
  }

  fn read_vectored(&mut self, bufs: &mut [IoSliceMut<'_>]) -> io::Result<usize> {
    let n = self.inner.read_vectored(bufs)?;
    let mut remaining = n;
    for buf in bufs.iter() {
      if remaining == 0 {
        break;
      }
      let take = remaining.min(buf.len());
      if let Some(data) = buf.get(..take) {
        self.hasher.update(data);
      }
      remaining -= take;
    }
    Ok(n)
  }
}

/// Wraps a [`Write`] and checksums everything the inner writer accepts.
///
/// ```
/// use std::io::Write;
///
/// use crc32c::ChecksumWriter;
///
/// let mut writer = ChecksumWriter::new(Vec::new());
/// writer.write_all(b"123456789")?;
/// let (out, crc) = writer.into_parts();
/// assert_eq!(out, b"123456789");
/// assert_eq!(crc, 0xE306_9283);
/// # Ok::<(), std::io::Error>(())
/// ```
#[derive(Clone, Debug)]
pub struct ChecksumWriter<W> {
  inner: W,
  hasher: Crc32c,
}

impl<W> ChecksumWriter<W> {
  /// Wrap `inner`, starting from the empty-input checksum.
  #[inline]
  #[must_use]
  pub fn new(inner: W) -> Self {
    Self::with_hasher(inner, Crc32c::new())
  }

  /// Wrap `inner`, continuing an existing accumulator.
  #[inline]
  #[must_use]
  pub fn with_hasher(inner: W, hasher: Crc32c) -> Self {
    Self { inner, hasher }
  }

  /// Checksum of everything written so far.
  #[inline]
  #[must_use]
  pub fn crc(&self) -> u32 {
    self.hasher.value()
  }

  #[inline]
  #[must_use]
  pub fn hasher(&self) -> &Crc32c {
    &self.hasher
  }

  #[inline]
  pub fn get_ref(&self) -> &W {
    &self.inner
  }

  /// Writing directly to the inner writer bypasses the checksum.
  #[inline]
  pub fn get_mut(&mut self) -> &mut W {
    &mut self.inner
  }

  #[inline]
  pub fn into_inner(self) -> W {
    self.inner
  }

  /// Unwrap into the inner writer and the final checksum.
  #[inline]
  pub fn into_parts(self) -> (W, u32) {
    (self.inner, self.hasher.value())
  }
}

impl<W: Write> Write for ChecksumWriter<W> {
  fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
    let n = self.inner.write(buf)?;
    if let Some(data) = buf.get(..n) {
      self.hasher.update(data);
    }
    Ok(n)
  }

  fn write_vectored(&mut self, bufs: &[IoSlice<'_>]) -> io::Result<usize> {
    let n = self.inner.write_vectored(bufs)?;
    let mut remaining = n;
    for buf in bufs {
      if remaining == 0 {
        break;
      }
      let take = remaining.min(buf.len());
      if let Some(data) = buf.get(..take) {
        self.hasher.update(data);
      }
      remaining -= take;
    }
    Ok(n)
  }

  fn flush(&mut self) -> io::Result<()> {
    self.inner.flush()
  }
}

/// Iterator returned by [`Crc32c::consume`].
///
/// Each item is the next chunk read from the source, already folded into the
/// accumulator. Iteration ends at EOF or after the first error.
#[derive(Debug)]
pub struct Consume<'a, R> {
  hasher: &'a mut Crc32c,
  reader: R,
  chunk_size: usize,
  done: bool,
}

impl<R: Read> Iterator for Consume<'_, R> {
  type Item = io::Result<Vec<u8>>;

  fn next(&mut self) -> Option<Self::Item> {
    if self.done {
      return None;
    }

    let mut chunk = std::vec![0u8; self.chunk_size];
    loop {
      match self.reader.read(&mut chunk) {
        Ok(0) => {
          self.done = true;
          return None;
        }
        Ok(n) => {
          chunk.truncate(n);
          self.hasher.update(&chunk);
          return Some(Ok(chunk));
        }
        Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
        Err(e) => {
          self.done = true;
          return Some(Err(e));
        }
      }
    }
  }
}

impl<R: Read> core::iter::FusedIterator for Consume<'_, R> {}

impl Crc32c {
  /// Read `reader` to the end in chunks of at most `chunk_size` bytes,
  /// folding each into the checksum and yielding it.
  ///
  /// A `chunk_size` of 0 is treated as 1.
  ///
  /// ```
  /// use std::io::Cursor;
  ///
  /// use crc32c::Crc32c;
  ///
  /// let mut crc = Crc32c::new();
  /// let mut copied = Vec::new();
  /// for chunk in crc.consume(Cursor::new(b"123456789"), 4) {
  ///   copied.extend_from_slice(&chunk?);
  /// }
  /// assert_eq!(copied, b"123456789");
  /// assert_eq!(crc.value(), 0xE306_9283);
  /// # Ok::<(), std::io::Error>(())
  /// ```
  pub fn consume<R: Read>(&mut self, reader: R, chunk_size: usize) -> Consume<'_, R> {
    Consume {
      hasher: self,
      reader,
      chunk_size: chunk_size.max(1),
      done: false,
    }
  }
}
