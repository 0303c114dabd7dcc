//! Property-based tests for CRC-32C.
//!
//! Invariants that must hold for all inputs, not just specific vectors.

use crc32c::{Checksum, ChecksumCombine, Crc32c, HashObject, extend, value};
use proptest::prelude::*;

/// Arbitrary byte vectors up to 8KB.
fn arb_data() -> impl Strategy<Value = Vec<u8>> {
  prop::collection::vec(any::<u8>(), 0..8192)
}

/// Sorted, deduplicated split points ending at `len`.
fn arb_splits(len: usize, count: usize) -> impl Strategy<Value = Vec<usize>> {
  prop::collection::vec(0..=len, count).prop_map(move |mut splits| {
    splits.sort_unstable();
    splits.push(len);
    splits.dedup();
    splits
  })
}

fn arb_data_with_splits() -> impl Strategy<Value = (Vec<u8>, Vec<usize>)> {
  arb_data().prop_flat_map(|data| {
    let len = data.len();
    (Just(data), arb_splits(len, 8))
  })
}

fn pieces<'a>(data: &'a [u8], splits: &[usize]) -> Vec<&'a [u8]> {
  let mut out = Vec::with_capacity(splits.len());
  let mut prev = 0;
  for &split in splits {
    out.push(&data[prev..split]);
    prev = split;
  }
  out
}

proptest! {
  #![proptest_config(ProptestConfig::with_cases(1000))]

  #[test]
  fn value_is_extend_from_zero(data in arb_data()) {
    prop_assert_eq!(value(&data), extend(0, &data));
  }

  #[test]
  fn extend_concatenates(data in arb_data(), split in 0..8192usize) {
    let (a, b) = data.split_at(split.min(data.len()));
    prop_assert_eq!(extend(value(a), b), value(&data));
  }

  #[test]
  fn extend_empty_is_identity(crc in any::<u32>()) {
    prop_assert_eq!(extend(crc, &[]), crc);
  }

  #[test]
  fn chunking_is_irrelevant((data, splits) in arb_data_with_splits()) {
    let parts = pieces(&data, &splits);

    let folded = parts.iter().fold(0, |crc, part| extend(crc, part));
    prop_assert_eq!(folded, value(&data));

    let mut hasher = Crc32c::new();
    for part in &parts {
      hasher.update(part);
    }
    prop_assert_eq!(hasher.value(), value(&data));

    let mut vectored = Crc32c::new();
    vectored.update_vectored(&parts);
    prop_assert_eq!(vectored.value(), value(&data));
  }

  #[test]
  fn single_bit_flip_changes_value(data in prop::collection::vec(any::<u8>(), 1..1024), pos in any::<usize>(), bit in 0u8..8) {
    let mut flipped = data.clone();
    let idx = pos % flipped.len();
    flipped[idx] ^= 1 << bit;
    prop_assert_ne!(value(&data), value(&flipped));
  }

  #[test]
  fn combine_matches_concatenation(data in arb_data(), split in 0..8192usize) {
    let (a, b) = data.split_at(split.min(data.len()));
    prop_assert_eq!(Crc32c::combine(value(a), value(b), b.len()), value(&data));
  }

  #[test]
  fn digest_and_hexdigest_agree(data in arb_data()) {
    let hasher = Crc32c::with_data(&data);
    let crc = hasher.value();

    prop_assert_eq!(hasher.digest(), crc.to_be_bytes());
    let hex = hasher.hexdigest();
    prop_assert_eq!(hex.as_str(), format!("{crc:08x}"));
    prop_assert_eq!(hex.len(), 8);
    prop_assert_eq!(u32::from_be_bytes(hasher.digest()), crc);
  }

  #[test]
  fn copy_is_a_snapshot(a in arb_data(), b in arb_data()) {
    let mut hasher = Crc32c::with_data(&a);
    let snapshot = hasher.copy();
    hasher.update(&b);

    prop_assert_eq!(snapshot.value(), value(&a));
    prop_assert_eq!(hasher.value(), extend(value(&a), &b));
  }

  #[test]
  fn resume_continues(a in arb_data(), b in arb_data()) {
    let mut hasher = Crc32c::resume(value(&a));
    hasher.update(&b);

    let mut whole = a.clone();
    whole.extend_from_slice(&b);
    prop_assert_eq!(hasher.value(), value(&whole));
  }

  #[test]
  fn reset_forgets(a in arb_data(), b in arb_data()) {
    let mut hasher = Crc32c::with_data(&a);
    hasher.reset();
    hasher.update(&b);
    prop_assert_eq!(hasher.value(), value(&b));
  }
}

// Trait surfaces must agree with the inherent API.
proptest! {
  #![proptest_config(ProptestConfig::with_cases(256))]

  #[test]
  fn checksum_trait(data in arb_data(), split in 0..8192usize) {
    let (a, b) = data.split_at(split.min(data.len()));

    let mut hasher = <Crc32c as Checksum>::new();
    Checksum::update(&mut hasher, a);
    Checksum::update(&mut hasher, b);

    prop_assert_eq!(Checksum::finalize(&hasher), value(&data));
    prop_assert_eq!(<Crc32c as Checksum>::checksum(&data), value(&data));
    prop_assert_eq!(<Crc32c as ChecksumCombine>::combine(value(a), value(b), b.len()), value(&data));
  }

  #[test]
  fn hash_object_trait(data in arb_data()) {
    let mut hasher = Crc32c::new();
    HashObject::update(&mut hasher, &data);
    let snapshot = HashObject::copy(&hasher);

    prop_assert_eq!(HashObject::digest(&snapshot), value(&data).to_be_bytes());
    prop_assert_eq!(HashObject::hexdigest(&snapshot), hasher.hexdigest());
  }
}
