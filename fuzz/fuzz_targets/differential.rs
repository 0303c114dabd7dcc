//! Differential fuzzing against `crc-fast` and across backends.

#![no_main]

use crc_fast::CrcAlgorithm;
use crc32c::Backend;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
  let ours = crc32c::value(data);
  let reference = crc_fast::checksum(CrcAlgorithm::Crc32Iscsi, data) as u32;

  assert_eq!(
    ours,
    reference,
    "CRC-32C differential mismatch: ours={ours:#010x}, reference={reference:#010x}, len={}",
    data.len()
  );

  for backend in Backend::ALL.into_iter().filter(|b| b.is_available()) {
    assert_eq!(backend.extend(0, data), Ok(ours), "{} disagrees with dispatch", backend.name());
  }
});
