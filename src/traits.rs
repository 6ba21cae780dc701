// Copyright (c) The dicesum Authors.
// SPDX-License-Identifier: MIT
// This file is part of the dicesum project.
// See the LICENSE file in the project root for full license information.

//! Capabilities the engines need from an integer type.
use core::fmt::Debug;
use num_traits::{One, Zero};
use std::ops::{AddAssign, SubAssign};

/// An exact integer that can hold a count of dice outcomes.
///
/// The engines only ever add, subtract and compare counts, so any type with those
/// operations qualifies. `num_bigint::BigInt` is the intended choice; fixed-width
/// signed integers also work as long as `faces^num` fits.
///
/// Intermediate values of the array engine can be negative, so unsigned types are not
/// suitable there.
pub trait Count:
  Clone
  + Debug
  + Ord
  + Zero
  + One
  + From<u32>
  + for<'a> AddAssign<&'a Self>
  + for<'a> SubAssign<&'a Self>
  + Send
  + Sync
{
}

impl<T> Count for T where
  T: Clone
    + Debug
    + Ord
    + Zero
    + One
    + From<u32>
    + for<'a> AddAssign<&'a T>
    + for<'a> SubAssign<&'a T>
    + Send
    + Sync
{
}

#[cfg(test)]
mod tests {
  use super::*;
  use num_bigint::BigInt;

  fn accumulate<T: Count>(values: &[u32]) -> T {
    let mut acc = T::zero();
    for v in values {
      acc += &T::from(*v);
    }
    acc -= &T::one();
    acc
  }

  #[test]
  fn test_count_impls() {
    let values = [3, 5, 7];
    assert_eq!(accumulate::<BigInt>(&values), BigInt::from(14));
    assert_eq!(accumulate::<i64>(&values), 14);
    assert_eq!(accumulate::<i128>(&values), 14);
  }
}
