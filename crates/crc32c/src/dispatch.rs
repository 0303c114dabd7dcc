//! Backend selection for the CRC-32C engine.
//!
//! Selection order:
//!
//! - **x86_64**: SSE4.2 `crc32` → portable
//! - **aarch64**: CRC extension → portable
//! - **everything else**: portable
//!
//! Selection happens once per process. With `std`, CPU features are detected
//! at runtime and the result is cached in a `OnceLock`; without `std`, only
//! compile-time target features are considered. Every backend produces
//! bit-identical results, and a backend that cannot run is never selected.

use traits::BackendUnavailable;

use crate::config::{self, Crc32cForce};

/// A CRC-32C kernel family.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum Backend {
  /// Slicing-by-8 tables (or the bitwise kernel under `no-tables`).
  Portable,
  /// x86_64 SSE4.2 `crc32` instruction.
  Sse42,
  /// aarch64 ARMv8 CRC extension.
  ArmCrc,
}

impl Backend {
  /// Every backend this crate knows about, available or not.
  pub const ALL: [Self; 3] = [Self::Portable, Self::Sse42, Self::ArmCrc];

  /// Stable diagnostic name.
  #[must_use]
  pub const fn name(self) -> &'static str {
    match self {
      #[cfg(not(feature = "no-tables"))]
      Self::Portable => "portable/slicing-by-8",
      #[cfg(feature = "no-tables")]
      Self::Portable => "portable/bitwise",
      Self::Sse42 => "x86_64/sse4.2",
      Self::ArmCrc => "aarch64/crc",
    }
  }

  /// Whether this backend uses a dedicated CPU instruction.
  #[must_use]
  pub const fn is_hardware(self) -> bool {
    !matches!(self, Self::Portable)
  }

  /// Whether this backend can run in this process.
  #[must_use]
  pub fn is_available(self) -> bool {
    match self {
      Self::Portable => true,
      #[cfg(target_arch = "x86_64")]
      Self::Sse42 => crate::x86_64::has_sse42(),
      #[cfg(target_arch = "aarch64")]
      Self::ArmCrc => crate::aarch64::has_crc(),
      #[allow(unreachable_patterns)]
      _ => false,
    }
  }

  /// Confirm this backend can run, or say why not.
  ///
  /// # Errors
  ///
  /// [`BackendUnavailable`] if the CPU or build lacks the required feature.
  pub fn require(self) -> Result<Self, BackendUnavailable> {
    if self.is_available() {
      Ok(self)
    } else {
      Err(BackendUnavailable::new(self.name()))
    }
  }

  /// [`extend`](crate::extend) using exactly this backend.
  ///
  /// # Errors
  ///
  /// [`BackendUnavailable`] if the backend cannot run here. No checksum is
  /// computed in that case.
  pub fn extend(self, crc: u32, data: &[u8]) -> Result<u32, BackendUnavailable> {
    let backend = self.require()?;
    Ok(backend.compute(crc ^ crate::constants::XOR_MASK, data) ^ crate::constants::XOR_MASK)
  }

  /// Advance the raw register. `self` must be available.
  #[inline]
  pub(crate) fn compute(self, crc: u32, data: &[u8]) -> u32 {
    match self {
      #[cfg(target_arch = "x86_64")]
      Self::Sse42 => crate::x86_64::compute_sse42(crc, data),
      #[cfg(target_arch = "aarch64")]
      Self::ArmCrc => crate::aarch64::compute_crc(crc, data),
      _ => crate::portable::compute(crc, data),
    }
  }
}

/// The hardware backend for this architecture, if the CPU has it.
#[inline]
pub(crate) fn hardware_backend() -> Option<Backend> {
  [Backend::Sse42, Backend::ArmCrc]
    .into_iter()
    .find(|backend| backend.is_available())
}

fn select() -> Backend {
  match config::get().effective_force {
    Crc32cForce::Portable => Backend::Portable,
    Crc32cForce::Auto | Crc32cForce::Hwcrc => hardware_backend().unwrap_or(Backend::Portable),
  }
}

/// The backend [`value`](crate::value) and [`extend`](crate::extend) use.
///
/// Resolved on first use and fixed for the lifetime of the process.
#[must_use]
pub fn selected_backend() -> Backend {
  #[cfg(feature = "std")]
  {
    use std::sync::OnceLock;
    static SELECTED: OnceLock<Backend> = OnceLock::new();
    *SELECTED.get_or_init(select)
  }

  // Compile-time features only; nothing to cache.
  #[cfg(not(feature = "std"))]
  {
    select()
  }
}

/// Name of the selected backend, e.g. `"x86_64/sse4.2"`.
#[inline]
#[must_use]
pub fn implementation() -> &'static str {
  selected_backend().name()
}

/// Advance the raw register with the selected backend.
#[inline]
pub(crate) fn compute(crc: u32, data: &[u8]) -> u32 {
  selected_backend().compute(crc, data)
}
