// Copyright (c) The dicesum Authors.
// SPDX-License-Identifier: MIT
// This file is part of the dicesum project.
// See the LICENSE file in the project root for full license information.

//! A validated `(faces, num)` request and the length arithmetic shared by both engines.
//!
//! After `k` dice have been folded in, the distribution covers sums `k ..= k * faces`,
//! so it has `k * (faces - 1) + 1` entries. It is a palindrome, and the first
//! `ceil(len / 2)` entries (the half) determine the rest.
use crate::errors::DiceError;
use num_bigint::BigInt;
use serde::{Deserialize, Serialize};

/// A request for the distribution of the sum of `num` dice with `faces` faces each.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Dice {
  faces: usize,
  num: usize,
}

impl Dice {
  /// Validates a request.
  ///
  /// # Errors
  /// Returns `DiceError::InvalidArgument` if `faces < 1` or `num < 1`, if `faces` does not
  /// fit in a `u32`, or if the largest sum `faces * num` does not fit in a `usize`.
  pub fn new(faces: i64, num: i64) -> Result<Self, DiceError> {
    if faces < 1 {
      return Err(invalid(format!("faces must be at least 1, got {faces}")));
    }
    if num < 1 {
      return Err(invalid(format!("num must be at least 1, got {num}")));
    }
    if u32::try_from(faces).is_err() {
      return Err(invalid(format!("faces must fit in 32 bits, got {faces}")));
    }
    let (faces, num) = match (usize::try_from(faces), usize::try_from(num)) {
      (Ok(faces), Ok(num)) => (faces, num),
      _ => return Err(invalid(format!("{num}d{faces} does not fit in usize"))),
    };
    if faces.checked_mul(num).is_none() {
      return Err(invalid(format!("the largest sum of {num}d{faces} overflows usize")));
    }
    Ok(Self { faces, num })
  }

  /// Returns the number of faces on each die.
  pub fn faces(&self) -> usize {
    self.faces
  }

  /// Returns the number of dice.
  pub fn num(&self) -> usize {
    self.num
  }

  /// Returns the number of attainable sums, `num * (faces - 1) + 1`.
  pub fn num_sums(&self) -> usize {
    full_len(self.faces, self.num)
  }

  /// Returns the length of the half that determines the whole distribution.
  pub fn half_len(&self) -> usize {
    half_len(self.faces, self.num)
  }

  /// Returns true when the distribution has even length, so its middle value appears twice.
  pub fn has_double_middle(&self) -> bool {
    double_middle(self.faces, self.num)
  }

  /// Smallest attainable sum.
  pub fn min_sum(&self) -> usize {
    self.num
  }

  /// Largest attainable sum.
  pub fn max_sum(&self) -> usize {
    self.faces * self.num
  }

  /// Total number of outcomes, `faces^num`.
  pub fn total(&self) -> BigInt {
    num_traits::pow(BigInt::from(self.faces), self.num)
  }
}

fn invalid(reason: String) -> DiceError {
  DiceError::InvalidArgument { reason }
}

/// Length of the distribution after `k` dice.
pub(crate) fn full_len(faces: usize, k: usize) -> usize {
  k * (faces - 1) + 1
}

/// Length of the half after `k` dice, middle entry included.
pub(crate) fn half_len(faces: usize, k: usize) -> usize {
  full_len(faces, k).div_ceil(2)
}

/// Parity flag: the length after `k` dice is even exactly when `faces` is even and `k` is odd.
pub(crate) fn double_middle(faces: usize, k: usize) -> bool {
  (faces + 1) % 2 == 1 && k % 2 == 1
}

/// Expands a half into the full palindrome, repeating the middle entry only if `double_middle`.
pub(crate) fn mirror<T: Clone>(mut half: Vec<T>, double_middle: bool) -> Vec<T> {
  let len = half.len();
  let reflected = if double_middle { len } else { len.saturating_sub(1) };
  half.reserve(reflected);
  for i in (0..reflected).rev() {
    let value = half[i].clone();
    half.push(value);
  }
  half
}
