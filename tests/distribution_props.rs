use dicesum::{
  Dice, DiceError, Distribution, compute_array, compute_stream, compute_stream_half,
  distribution::Engine,
};
use itertools::Itertools;
use num_bigint::BigInt;
use proptest::prelude::*;

#[test]
fn four_d_six_fixed() {
  let expected = [
    1u32, 4, 10, 20, 35, 56, 80, 104, 125, 140, 146, 140, 125, 104, 80, 56, 35, 20, 10, 4, 1,
  ]
  .into_iter()
  .map(BigInt::from)
  .collect_vec();
  assert_eq!(compute_array(6, 4).unwrap(), expected);
  assert_eq!(compute_stream(6, 4).unwrap().collect_vec(), expected);
  assert_eq!(expected.iter().sum::<BigInt>(), BigInt::from(1296));
}

#[test]
fn large_counts_exceed_machine_words() {
  let dice = Dice::new(100, 300).unwrap();
  let dist = Distribution::from_array(&dice);
  assert_eq!(dist.counts().len(), 300 * 99 + 1);
  assert_eq!(dist.total(), dice.total());
  assert!(dist.max().bits() > 1000);
  assert!(dist.is_palindrome());
}

#[test]
fn invalid_arguments() {
  for (faces, num) in [(0, 5), (5, 0), (-1, 3)] {
    assert!(matches!(
      compute_array(faces, num),
      Err(DiceError::InvalidArgument { .. })
    ));
    assert!(matches!(
      compute_stream(faces, num),
      Err(DiceError::InvalidArgument { .. })
    ));
  }
}

proptest! {
  #![proptest_config(ProptestConfig { cases: 64, .. ProptestConfig::default() })]
  #[test]
  fn symmetric_and_complete(faces in 1i64..=12, num in 1i64..=25) {
    let counts = compute_array(faces, num).unwrap();
    let dice = Dice::new(faces, num).unwrap();
    prop_assert_eq!(counts.len(), dice.num_sums());
    prop_assert!(counts.iter().eq(counts.iter().rev()));
    prop_assert_eq!(counts.iter().sum::<BigInt>(), dice.total());
  }

  #[test]
  fn unimodal(faces in 1i64..=12, num in 2i64..=25) {
    let counts = compute_array(faces, num).unwrap();
    let mid = (counts.len() - 1) / 2;
    prop_assert!(counts[..=mid].iter().tuple_windows().all(|(a, b)| a <= b));
    prop_assert!(counts[mid..].iter().tuple_windows().all(|(a, b)| a >= b));
  }

  #[test]
  fn engines_agree(faces in 1i64..=8, num in 1i64..=12) {
    let dice = Dice::new(faces, num).unwrap();
    let expected = compute_array(faces, num).unwrap();
    prop_assert_eq!(compute_stream(faces, num).unwrap().collect_vec(), expected.clone());
    for engine in [Engine::Naive, Engine::Squaring] {
      prop_assert_eq!(engine.counts(&dice), expected.clone());
    }
  }

  #[test]
  fn half_stream_is_prefix(faces in 1i64..=12, num in 1i64..=25) {
    let dice = Dice::new(faces, num).unwrap();
    let half = compute_stream_half(faces, num).unwrap().collect_vec();
    prop_assert_eq!(half.len(), dice.half_len());
    let dist = Distribution::from_array(&dice);
    prop_assert_eq!(&half[..], dist.half());
  }

  #[test]
  fn two_dice_are_triangular(faces in 1i64..=40) {
    let counts = compute_array(faces, 2).unwrap();
    let expected = (1..=faces).chain((1..faces).rev()).map(BigInt::from).collect_vec();
    prop_assert_eq!(counts, expected);
  }
}
