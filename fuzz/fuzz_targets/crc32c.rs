//! Fuzz target for the CRC-32C engine and accumulator.
//!
//! Tests that:
//! - No panics on arbitrary input
//! - `extend` over a split equals `value` of the whole
//! - Resume and combine agree with one-shot
//! - `digest`/`hexdigest` encode the same value

#![no_main]

use arbitrary::Arbitrary;
use crc32c::Crc32c;
use libfuzzer_sys::fuzz_target;

#[derive(Arbitrary, Debug)]
struct Input {
  data: Vec<u8>,
  split_point: usize,
  seed: u32,
}

fuzz_target!(|input: Input| {
  let data = &input.data;
  let split = input.split_point % (data.len() + 1);
  let (a, b) = data.split_at(split);

  let oneshot = crc32c::value(data);
  assert_eq!(crc32c::extend(crc32c::value(a), b), oneshot, "extend mismatch");
  assert_eq!(crc32c::extend(0, data), oneshot, "value != extend(0, _)");
  assert_eq!(crc32c::extend(input.seed, &[]), input.seed, "empty extend changed value");

  let mut hasher = Crc32c::new();
  hasher.update(a);
  let snapshot = hasher.copy();
  hasher.update(b);
  assert_eq!(hasher.value(), oneshot, "accumulator mismatch");
  assert_eq!(snapshot.value(), crc32c::value(a), "copy was not independent");

  let mut resumed = Crc32c::resume(crc32c::value(a));
  resumed.update(b);
  assert_eq!(resumed.value(), oneshot, "resume mismatch");

  let combined = Crc32c::combine(crc32c::value(a), crc32c::value(b), b.len());
  assert_eq!(combined, oneshot, "combine mismatch");

  assert_eq!(hasher.digest(), oneshot.to_be_bytes());
  assert_eq!(hasher.hexdigest().as_str(), format!("{oneshot:08x}"));
});
