// Copyright (c) The dicesum Authors.
// SPDX-License-Identifier: MIT
// This file is part of the dicesum project.
// See the LICENSE file in the project root for full license information.

//! Symmetric array engine.
//!
//! Adding one die convolves the distribution with `faces` ones. Each output entry is the
//! sum of a window of `faces` consecutive input entries, so consecutive outputs differ by
//! one entry entering the window and one leaving it. [`HalfBuffer::fold`] applies this as
//! a differencing pass followed by a prefix sum, on the first half of the distribution only.
use crate::{
  dice::{Dice, double_middle, half_len, mirror},
  errors::DiceError,
  start_span,
  traits::Count,
};
use num_bigint::BigInt;
use tracing::{info, trace};

/// The first half (middle entry included) of a dice-sum distribution.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HalfBuffer<T> {
  faces: usize,
  dice: usize,
  counts: Vec<T>,
}

impl<T: Count> HalfBuffer<T> {
  /// Seeds the half of the two-dice distribution, the ramp `1, 2, ..., faces`.
  ///
  /// Space for the half of the final distribution of `dice` is reserved up front.
  pub fn seed(dice: &Dice) -> Self {
    let faces = dice.faces();
    let mut counts = Vec::with_capacity(dice.num_sums() / 2 + 1);
    // faces fits in u32 (checked by Dice::new)
    counts.extend((1..=faces as u32).map(T::from));
    Self {
      faces,
      dice: 2,
      counts,
    }
  }

  /// Returns the number of dice folded in so far.
  pub fn dice(&self) -> usize {
    self.dice
  }

  /// Returns the half as a slice.
  pub fn as_slice(&self) -> &[T] {
    &self.counts
  }

  /// Folds in one more die.
  pub fn fold(&mut self) {
    let faces = self.faces;
    let old = self.counts.len();
    let double = usize::from(double_middle(faces, self.dice));
    let extra = half_len(faces, self.dice + 1) - old;
    debug_assert_eq!(extra, (faces - 1) / 2 + double);

    // the entries just past the old middle, read from their mirror image
    for j in 0..extra {
      let value = self.counts[old + double - 2 - j].clone();
      self.counts.push(value);
    }
    let len = self.counts.len();

    // high to low, so every subtrahend is read before it is overwritten
    for j in (faces..len).rev() {
      let (head, tail) = self.counts.split_at_mut(j);
      tail[0] -= &head[j - faces];
    }

    for j in 1..len {
      let (head, tail) = self.counts.split_at_mut(j);
      tail[0] += &head[j - 1];
    }

    self.dice += 1;
    trace!(dice = self.dice, half_len = len, "fold");
  }

  /// Expands the half into the full distribution.
  pub fn mirror(self) -> Vec<T> {
    mirror(self.counts, double_middle(self.faces, self.dice))
  }
}

/// Computes the distribution of a validated request with any [`Count`] type.
pub fn distribution<T: Count>(dice: &Dice) -> Vec<T> {
  if dice.num() == 1 {
    return vec![T::one(); dice.faces()];
  }
  let mut half = HalfBuffer::seed(dice);
  while half.dice() < dice.num() {
    half.fold();
  }
  half.mirror()
}

/// Computes the number of ways to roll each sum `num ..= faces * num` with `num` dice.
///
/// # Errors
/// Returns `DiceError::InvalidArgument` if `faces < 1` or `num < 1`.
pub fn compute_array(faces: i64, num: i64) -> Result<Vec<BigInt>, DiceError> {
  let dice = Dice::new(faces, num)?;
  let (_span, t) = start_span!("compute_array", faces, num);
  let counts = distribution::<BigInt>(&dice);
  info!(elapsed_ms = %t.elapsed().as_millis(), len = counts.len(), "compute_array");
  Ok(counts)
}

#[cfg(test)]
mod tests {
  use super::*;
  use tracing_subscriber::EnvFilter;

  fn big(values: &[u64]) -> Vec<BigInt> {
    values.iter().map(|&v| BigInt::from(v)).collect()
  }

  #[test]
  fn test_four_d_six() {
    let _ = tracing_subscriber::fmt()
      .with_target(false)
      .with_env_filter(EnvFilter::from_default_env())
      .try_init();

    let counts = compute_array(6, 4).unwrap();
    assert_eq!(
      counts,
      big(&[
        1, 4, 10, 20, 35, 56, 80, 104, 125, 140, 146, 140, 125, 104, 80, 56, 35, 20, 10, 4, 1
      ])
    );
    assert_eq!(counts.iter().sum::<BigInt>(), BigInt::from(1296));
  }

  #[test]
  fn test_coin_flips_are_binomial() {
    let counts = compute_array(2, 10).unwrap();
    assert_eq!(counts, big(&[1, 10, 45, 120, 210, 252, 210, 120, 45, 10, 1]));
  }

  #[test]
  fn test_five_d_seven() {
    // 5d7, sums 5..=35
    let counts = distribution::<i64>(&Dice::new(7, 5).unwrap());
    assert_eq!(
      counts,
      vec![
        1, 5, 15, 35, 70, 126, 210, 325, 470, 640, 826, 1015, 1190, 1330, 1420, 1451, 1420, 1330,
        1190, 1015, 826, 640, 470, 325, 210, 126, 70, 35, 15, 5, 1
      ]
    );
  }

  #[test]
  fn test_base_cases() {
    assert_eq!(compute_array(5, 1).unwrap(), big(&[1, 1, 1, 1, 1]));
    assert_eq!(compute_array(4, 2).unwrap(), big(&[1, 2, 3, 4, 3, 2, 1]));
    assert_eq!(compute_array(1, 9).unwrap(), big(&[1]));
  }

  #[test]
  fn test_every_fold_is_symmetric() {
    for faces in 1..=8 {
      let dice = Dice::new(faces, 12).unwrap();
      let mut half = HalfBuffer::<i64>::seed(&dice);
      while half.dice() < dice.num() {
        half.fold();
        let full = half.clone().mirror();
        assert_eq!(full.len(), half.dice() * (dice.faces() - 1) + 1);
        assert!(full.iter().eq(full.iter().rev()), "{faces} faces, {} dice", half.dice());
        assert_eq!(
          full.iter().sum::<i64>(),
          i64::try_from(dice.faces()).unwrap().pow(half.dice() as u32)
        );
      }
    }
  }

  #[test]
  fn test_invalid_arguments() {
    for (faces, num) in [(0, 5), (5, 0), (-1, 3)] {
      assert!(matches!(
        compute_array(faces, num),
        Err(DiceError::InvalidArgument { .. })
      ));
    }
  }
}
