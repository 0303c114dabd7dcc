//! CRC-32C runtime configuration.
//!
//! The only knob is which backend the engine is allowed to use:
//!
//! - `CRC32C_FORCE=auto` (default): fastest available backend
//! - `CRC32C_FORCE=portable`: table-driven software only
//! - `CRC32C_FORCE=hwcrc`: hardware CRC instruction if present
//!
//! The environment is read once per process. Forced modes are always clamped
//! to detected CPU capabilities, so an override can never select a kernel the
//! machine cannot execute.

use core::{fmt, str::FromStr};

/// Environment variable consulted for [`Crc32cForce`] overrides.
pub const FORCE_ENV: &str = "CRC32C_FORCE";

/// Forced backend selection for CRC-32C.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum Crc32cForce {
  /// Use the default auto selector.
  #[default]
  Auto,
  /// Force the portable software implementation.
  Portable,
  /// Force hardware CRC instructions (if available).
  ///
  /// - x86_64: SSE4.2 `crc32`
  /// - aarch64: ARMv8 CRC extension
  Hwcrc,
}

impl Crc32cForce {
  #[must_use]
  pub const fn as_str(self) -> &'static str {
    match self {
      Self::Auto => "auto",
      Self::Portable => "portable",
      Self::Hwcrc => "hwcrc",
    }
  }

  /// Parse an override value. Empty or unrecognised text yields `None`.
  #[must_use]
  pub fn parse(value: &str) -> Option<Self> {
    let value = value.trim();
    if value.is_empty() {
      return None;
    }

    if value.eq_ignore_ascii_case("auto") {
      return Some(Self::Auto);
    }
    if value.eq_ignore_ascii_case("portable")
      || value.eq_ignore_ascii_case("scalar")
      || value.eq_ignore_ascii_case("table")
    {
      return Some(Self::Portable);
    }
    if value.eq_ignore_ascii_case("hwcrc")
      || value.eq_ignore_ascii_case("hw")
      || value.eq_ignore_ascii_case("crc")
      || value.eq_ignore_ascii_case("sse4.2")
    {
      return Some(Self::Hwcrc);
    }

    None
  }
}

impl fmt::Display for Crc32cForce {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}

/// Unrecognised [`Crc32cForce`] text.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[non_exhaustive]
pub struct ParseForceError;

impl fmt::Display for ParseForceError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str("expected one of `auto`, `portable`, `hwcrc`")
  }
}

impl core::error::Error for ParseForceError {}

impl FromStr for Crc32cForce {
  type Err = ParseForceError;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    Self::parse(s).ok_or(ParseForceError)
  }
}

/// Full CRC-32C runtime configuration (after applying overrides).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Crc32cConfig {
  /// Requested force mode (environment).
  pub requested_force: Crc32cForce,
  /// Force mode clamped to detected CPU capabilities.
  pub effective_force: Crc32cForce,
}

#[cfg(feature = "std")]
fn read_env_override() -> Crc32cForce {
  std::env::var(FORCE_ENV)
    .ok()
    .and_then(|value| Crc32cForce::parse(&value))
    .unwrap_or_default()
}

#[cfg(feature = "std")]
fn requested() -> Crc32cForce {
  use std::sync::OnceLock;
  static OVERRIDE: OnceLock<Crc32cForce> = OnceLock::new();
  *OVERRIDE.get_or_init(read_env_override)
}

#[cfg(not(feature = "std"))]
fn requested() -> Crc32cForce {
  Crc32cForce::Auto
}

/// Clamp a request to what this machine can run.
#[inline]
#[must_use]
pub(crate) fn clamp_force(requested: Crc32cForce) -> Crc32cForce {
  match requested {
    Crc32cForce::Auto | Crc32cForce::Portable => requested,
    Crc32cForce::Hwcrc => {
      if crate::dispatch::hardware_backend().is_some() {
        Crc32cForce::Hwcrc
      } else {
        Crc32cForce::Auto
      }
    }
  }
}

/// Get the effective CRC-32C configuration for the current process.
#[inline]
#[must_use]
pub fn get() -> Crc32cConfig {
  let requested_force = requested();
  Crc32cConfig {
    requested_force,
    effective_force: clamp_force(requested_force),
  }
}
