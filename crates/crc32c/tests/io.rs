//! Reader/writer adapters and chunked consumption.

use std::io::{self, BufReader, Cursor, Read, Write};

use crc32c::{ChecksumReader, ChecksumWriter, Crc32c, value};

const ISCSI_CRC: u32 = 0xD996_3A56;

fn iscsi_pdu() -> Vec<u8> {
  let mut pdu = vec![0u8; 48];
  for (idx, byte) in [(0, 0x01), (1, 0xC0), (16, 0x14), (22, 0x04), (27, 0x14), (31, 0x18), (32, 0x28), (40, 0x02)] {
    pdu[idx] = byte;
  }
  pdu
}

#[test]
fn copy_through_reader_and_writer() {
  let pdu = iscsi_pdu();
  let mut reader = ChecksumReader::new(BufReader::with_capacity(5, Cursor::new(pdu.clone())));
  let mut writer = ChecksumWriter::new(Vec::new());

  let copied = io::copy(&mut reader, &mut writer).unwrap();
  assert_eq!(copied, 48);

  let (_, read_crc) = reader.into_parts();
  let (out, write_crc) = writer.into_parts();
  assert_eq!(out, pdu);
  assert_eq!(read_crc, ISCSI_CRC);
  assert_eq!(write_crc, ISCSI_CRC);
}

#[test]
fn partial_read_checksums_only_what_was_read() {
  let mut reader = ChecksumReader::new(Cursor::new(b"123456789"));
  let mut buf = [0u8; 4];
  reader.read_exact(&mut buf).unwrap();
  assert_eq!(reader.crc(), value(b"1234"));
}

#[test]
fn writer_over_full_buffer() {
  let mut backing = [0u8; 4];
  let mut writer = ChecksumWriter::new(&mut backing[..]);

  let err = writer.write_all(b"123456789").unwrap_err();
  assert_eq!(err.kind(), io::ErrorKind::WriteZero);
  assert_eq!(writer.crc(), value(b"1234"));
}

#[test]
fn accumulator_is_a_writer() {
  let mut crc = Crc32c::new();
  write!(crc, "{}{}", 1234, 56789).unwrap();
  assert_eq!(crc.value(), 0xE306_9283);
}

#[test]
fn consume_then_continue() {
  let pdu = iscsi_pdu();
  let (head, tail) = pdu.split_at(20);

  let mut crc = Crc32c::new();
  let chunks: Vec<Vec<u8>> = crc.consume(Cursor::new(head), 7).collect::<io::Result<_>>().unwrap();
  assert_eq!(chunks.len(), 3);

  crc.update(tail);
  assert_eq!(crc.value(), ISCSI_CRC);
}

#[test]
fn consume_propagates_errors() {
  struct Broken;

  impl Read for Broken {
    fn read(&mut self, _: &mut [u8]) -> io::Result<usize> {
      Err(io::Error::other("disk on fire"))
    }
  }

  let mut crc = Crc32c::with_data(b"before");
  let mut iter = crc.consume(Broken, 8);
  let err = iter.next().unwrap().unwrap_err();
  assert_eq!(err.to_string(), "disk on fire");
  assert!(iter.next().is_none());
  assert_eq!(crc.value(), value(b"before"));
}
