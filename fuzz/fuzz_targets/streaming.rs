//! Fuzz target for the streaming API.
//!
//! Arbitrary sequences of chunk sizes, fed through `update`, `extend`, and
//! `consume`, must all land on the one-shot value.

#![no_main]

use std::io::Cursor;

use arbitrary::Arbitrary;
use crc32c::Crc32c;
use libfuzzer_sys::fuzz_target;

#[derive(Arbitrary, Debug)]
struct Input {
  data: Vec<u8>,
  /// Chunk sizes for streaming updates
  chunk_sizes: Vec<usize>,
  read_size: u16,
}

fuzz_target!(|input: Input| {
  let data = &input.data;
  let expected = crc32c::value(data);

  let mut hasher = Crc32c::new();
  let mut crc = 0;
  let mut offset = 0;
  let mut chunk_idx = 0;

  while offset < data.len() {
    let chunk_size = if input.chunk_sizes.is_empty() {
      1
    } else {
      (input.chunk_sizes[chunk_idx % input.chunk_sizes.len()] % 256).max(1)
    };

    let end = (offset + chunk_size).min(data.len());
    hasher.update(&data[offset..end]);
    crc = crc32c::extend(crc, &data[offset..end]);
    offset = end;
    chunk_idx += 1;
  }

  assert_eq!(hasher.value(), expected, "update streaming mismatch");
  assert_eq!(crc, expected, "extend streaming mismatch");

  let mut consumed = Crc32c::new();
  let mut total = 0;
  for chunk in consumed.consume(Cursor::new(data), usize::from(input.read_size)) {
    let chunk = chunk.expect("cursor reads cannot fail");
    assert!(!chunk.is_empty() && chunk.len() <= usize::from(input.read_size).max(1));
    total += chunk.len();
  }
  assert_eq!(total, data.len());
  assert_eq!(consumed.value(), expected, "consume mismatch");
});
