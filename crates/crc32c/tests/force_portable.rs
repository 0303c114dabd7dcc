//! `CRC32C_FORCE=portable` pins the table-driven kernel.
//!
//! Selection is cached per process, so this file holds a single test that sets
//! the override before anything touches the engine.

use crc32c::{Backend, Crc32c, Crc32cForce, DispatchInfo, config};

#[test]
fn forced_portable() {
  std::env::set_var(config::FORCE_ENV, "portable");

  let cfg = config::get();
  assert_eq!(cfg.requested_force, Crc32cForce::Portable);
  assert_eq!(cfg.effective_force, Crc32cForce::Portable);

  assert_eq!(crc32c::selected_backend(), Backend::Portable);
  assert_eq!(crc32c::implementation(), Backend::Portable.name());

  let info = DispatchInfo::current().to_string();
  assert!(info.contains("forced portable"), "{info}");

  // Still correct, and hardware backends stay reachable explicitly.
  assert_eq!(crc32c::value(b"123456789"), 0xE306_9283);
  assert_eq!(Crc32c::with_data(b"123456789").hexdigest(), "e3069283");
  for backend in Backend::ALL.into_iter().filter(|b| b.is_available()) {
    assert_eq!(backend.extend(0, b"123456789"), Ok(0xE306_9283));
  }

  // The environment is read once; later changes are ignored.
  std::env::set_var(config::FORCE_ENV, "hwcrc");
  assert_eq!(config::get().requested_force, Crc32cForce::Portable);
  assert_eq!(crc32c::selected_backend(), Backend::Portable);
}
