//! Basic CRC-32C usage: one-shot, incremental, accumulator, and I/O.
//!
//! Run with: `cargo run --example basic -p crc32c`

use std::io::{self, Cursor, Write};

use crc32c::{ChecksumWriter, Crc32c, DispatchInfo};

fn main() -> io::Result<()> {
  println!("=== CRC-32C Basic Examples ===\n");
  println!("{}\n", DispatchInfo::current());

  one_shot();
  incremental();
  accumulator();
  streaming_io()?;

  Ok(())
}

/// One-shot computation over data already in memory.
fn one_shot() {
  println!("--- One-Shot ---\n");

  let crc = crc32c::value(b"123456789");
  println!("value(\"123456789\") = 0x{crc:08X}");
  assert_eq!(crc, 0xE306_9283);

  println!("value(\"\")          = 0x{:08X}\n", crc32c::value(b""));
}

/// Continue a checksum chunk by chunk.
fn incremental() {
  println!("--- Incremental ---\n");

  let crc = [&b"1234"[..], &b"56"[..], &b"789"[..]].into_iter().fold(0, crc32c::extend);
  println!("extend over 3 chunks = 0x{crc:08X}");
  assert_eq!(crc, crc32c::value(b"123456789"));

  // Parts computed separately can be merged without rereading the first part.
  let (a, b) = b"123456789".split_at(4);
  let merged = Crc32c::combine(crc32c::value(a), crc32c::value(b), b.len());
  println!("combine(a, b)        = 0x{merged:08X}\n");
  assert_eq!(merged, crc);
}

/// Hash-object style: update, digest, hexdigest, copy.
fn accumulator() {
  println!("--- Accumulator ---\n");

  let mut hasher = Crc32c::with_data(b"DEADBEEF");
  let snapshot = hasher.copy();
  hasher.update(b"FACEDACE");

  println!("snapshot  = {}", snapshot.hexdigest());
  println!("hexdigest = {}", hasher.hexdigest());
  println!("digest    = {:02x?}\n", hasher.digest());
  assert_eq!(hasher.value(), crc32c::value(b"DEADBEEFFACEDACE"));
}

/// Checksum while copying.
fn streaming_io() -> io::Result<()> {
  println!("--- Streaming I/O ---\n");

  let mut writer = ChecksumWriter::new(Vec::new());
  writer.write_all(b"hello ")?;
  writer.write_all(b"world")?;
  let (bytes, crc) = writer.into_parts();
  println!("wrote {} bytes, crc 0x{crc:08X}", bytes.len());

  let mut hasher = Crc32c::new();
  for chunk in hasher.consume(Cursor::new(bytes), 4) {
    print!("[{}]", String::from_utf8_lossy(&chunk?));
  }
  println!(" -> 0x{:08X}", hasher.value());
  assert_eq!(hasher.value(), crc);

  Ok(())
}
