//! Capability traits for the crc32c workspace.
//!
//! This crate holds the interfaces the checksum implementation conforms to.
//! It is `no_std` compatible and has zero dependencies.
//!
//! # Traits
//!
//! | Trait | Purpose |
//! |-------|---------|
//! | [`Checksum`] | Streaming checksum: update, finalize, reset, one-shot |
//! | [`ChecksumCombine`] | `crc(A || B)` from `crc(A)`, `crc(B)`, `len(B)` |
//! | [`HashObject`] | Hash-object shape: update, digest, hexdigest, copy |
//!
//! # Error Types
//!
//! - [`BackendUnavailable`] - a specific acceleration backend was requested
//!   but cannot run on this CPU or build
//!
//! # Fallibility Discipline
//!
//! This crate denies `unwrap`, `expect`, and indexing in non-test code to ensure
//! all error paths are handled explicitly.
#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![cfg_attr(not(test), deny(clippy::expect_used))]
#![cfg_attr(not(test), deny(clippy::indexing_slicing))]
#![no_std]

#[cfg(feature = "std")]
extern crate std;

mod checksum;
pub mod error;
mod hash_object;

pub use checksum::{Checksum, ChecksumCombine};
pub use error::BackendUnavailable;
pub use hash_object::HashObject;
