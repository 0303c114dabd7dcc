//! Error types.
//!
//! Checksum computation itself is total: every byte sequence and every prior
//! value is valid input. The only failure is asking for an acceleration backend
//! that this CPU or build cannot run.

use core::fmt;

/// A requested checksum backend cannot run here.
///
/// Returned by explicit backend requests only. Automatic selection never
/// fails; it falls back to the portable implementation.
///
/// # Examples
///
/// ```
/// use traits::BackendUnavailable;
///
/// fn require(name: &'static str, present: bool) -> Result<(), BackendUnavailable> {
///   if present { Ok(()) } else { Err(BackendUnavailable::new(name)) }
/// }
///
/// let err = require("sse4.2", false).unwrap_err();
/// assert_eq!(err.backend(), "sse4.2");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub struct BackendUnavailable {
  backend: &'static str,
}

impl BackendUnavailable {
  /// Create an error naming the backend that was requested.
  #[inline]
  #[must_use]
  pub const fn new(backend: &'static str) -> Self {
    Self { backend }
  }

  /// Name of the backend that was requested.
  #[inline]
  #[must_use]
  pub const fn backend(&self) -> &'static str {
    self.backend
  }
}

impl fmt::Display for BackendUnavailable {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "checksum backend initialization failed: `{}` is not available", self.backend)
  }
}

impl core::error::Error for BackendUnavailable {}
