//! CRC-32C (Castagnoli) checksums with hardware acceleration.
//!
//! CRC-32C uses the polynomial `0x1EDC6F41` (reflected `0x82F63B78`) with an
//! all-ones initial register and final XOR. It is the checksum of iSCSI, SCTP,
//! ext4 metadata, and Btrfs.
//!
//! # Engine
//!
//! | Function | Meaning |
//! |----------|---------|
//! | [`value`] | checksum of a byte sequence |
//! | [`extend`] | continue a previous checksum over more bytes |
//!
//! `extend(value(a), b) == value(a ++ b)` for all `a`, `b`, and
//! `value(x) == extend(0, x)`.
//!
//! # Hardware Acceleration
//!
//! | Arch | Feature | Backend |
//! |------|---------|---------|
//! | x86_64 | SSE4.2 `crc32` | [`Backend::Sse42`] |
//! | aarch64 | CRC extension | [`Backend::ArmCrc`] |
//! | any | slicing-by-8 tables | [`Backend::Portable`] |
//!
//! The backend is chosen once per process; see [`selected_backend`] and the
//! [`config`] module for the `CRC32C_FORCE` override. All backends produce
//! identical results.
//!
//! # Example
//!
//! ```rust
//! use crc32c::Crc32c;
//!
//! // One-shot
//! assert_eq!(crc32c::value(b"123456789"), 0xE306_9283);
//!
//! // Incremental
//! let crc = crc32c::extend(crc32c::value(b"1234"), b"56789");
//! assert_eq!(crc, 0xE306_9283);
//!
//! // Accumulator
//! let mut hasher = Crc32c::new();
//! hasher.update(b"1234");
//! hasher.update(b"56789");
//! assert_eq!(hasher.hexdigest(), "e3069283");
//! ```
//!
//! # no_std Support
//!
//! Disable the `std` feature for embedded use. Without `std` the backend is
//! picked from compile-time target features only.
//!
//! ```toml
//! [dependencies]
//! crc32c = { version = "0.1", default-features = false }
//! ```

#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![cfg_attr(not(test), deny(clippy::expect_used))]
#![cfg_attr(not(test), deny(clippy::indexing_slicing))]
#![no_std]

#[cfg(any(feature = "alloc", test))]
extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

mod bitwise;
mod combine;
pub mod config;
mod constants;
pub mod dispatch;
mod hasher;
mod hex;
mod introspect;
#[cfg(feature = "std")]
pub mod io;
mod portable;

#[cfg(target_arch = "aarch64")]
mod aarch64;
#[cfg(target_arch = "x86_64")]
mod x86_64;

pub use config::{Crc32cConfig, Crc32cForce};
pub use constants::{POLYNOMIAL, POLYNOMIAL_NORMAL};
pub use dispatch::{Backend, implementation, selected_backend};
pub use hasher::Crc32c;
pub use hex::HexDigest;
pub use introspect::DispatchInfo;
#[cfg(feature = "std")]
pub use io::{ChecksumReader, ChecksumWriter, Consume};
pub use traits::{BackendUnavailable, Checksum, ChecksumCombine, HashObject};

use constants::XOR_MASK;

/// Continue the checksum `crc` over `data`.
///
/// `crc` is a finalized checksum as returned by [`value`] or a previous
/// `extend`; `0` is the checksum of empty input. Empty `data` returns `crc`
/// unchanged.
///
/// ```
/// let a = crc32c::value(b"DEADBEEF");
/// assert_eq!(crc32c::extend(a, b"FACEDACE"), crc32c::value(b"DEADBEEFFACEDACE"));
/// ```
#[inline]
#[must_use]
pub fn extend(crc: u32, data: &[u8]) -> u32 {
  dispatch::compute(crc ^ XOR_MASK, data) ^ XOR_MASK
}

/// Checksum of `data`.
///
/// ```
/// assert_eq!(crc32c::value(b""), 0);
/// assert_eq!(crc32c::value(b"123456789"), 0xE306_9283);
/// ```
#[inline]
#[must_use]
pub fn value(data: &[u8]) -> u32 {
  extend(0, data)
}
