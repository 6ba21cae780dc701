// Copyright (c) The dicesum Authors.
// SPDX-License-Identifier: MIT
// This file is part of the dicesum project.
// See the LICENSE file in the project root for full license information.

//! An owned dice-sum distribution, and the engine that produced it.
use crate::{
  array, baseline,
  dice::Dice,
  errors::DiceError,
  start_span,
  stream::DiceStream,
};
use num_bigint::BigInt;
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};
use tracing::info;

/// Selects how a [`Distribution`] is computed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Engine {
  /// The symmetric half-buffer engine.
  #[default]
  Array,
  /// The sliding-window streaming engine, collected.
  Stream,
  /// Repeated direct convolution with a row of ones.
  Naive,
  /// Polynomial power by repeated squaring.
  Squaring,
}

impl Engine {
  /// All engines, fastest first.
  pub const ALL: [Engine; 4] = [Engine::Array, Engine::Stream, Engine::Naive, Engine::Squaring];

  /// Runs this engine on a validated request.
  pub fn counts(self, dice: &Dice) -> Vec<BigInt> {
    match self {
      Engine::Array => array::distribution(dice),
      Engine::Stream => DiceStream::<BigInt>::new(dice).collect(),
      Engine::Naive => baseline::naive(dice),
      Engine::Squaring => baseline::squaring(dice),
    }
  }
}

impl fmt::Display for Engine {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let name = match self {
      Engine::Array => "array",
      Engine::Stream => "stream",
      Engine::Naive => "naive",
      Engine::Squaring => "squaring",
    };
    f.write_str(name)
  }
}

impl FromStr for Engine {
  type Err = DiceError;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    Engine::ALL
      .into_iter()
      .find(|engine| engine.to_string() == s)
      .ok_or_else(|| DiceError::InvalidArgument {
        reason: format!("unknown engine {s:?}, expected one of array, stream, naive, squaring"),
      })
  }
}

/// The number of ways to roll each sum with `num` dice of `faces` faces.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Distribution {
  dice: Dice,
  counts: Vec<BigInt>,
}

impl Distribution {
  /// Computes a distribution with the given engine.
  pub fn compute(dice: &Dice, engine: Engine) -> Self {
    let (_span, t) = start_span!("distribution", faces = dice.faces(), num = dice.num(), %engine);
    let counts = engine.counts(dice);
    info!(elapsed_ms = %t.elapsed().as_millis(), %engine, len = counts.len(), "distribution");
    Self {
      dice: *dice,
      counts,
    }
  }

  /// Computes a distribution with the array engine.
  pub fn from_array(dice: &Dice) -> Self {
    Self::compute(dice, Engine::Array)
  }

  /// Computes a distribution by collecting the streaming engine.
  pub fn from_stream(dice: &Dice) -> Self {
    Self::compute(dice, Engine::Stream)
  }

  /// Wraps counts produced elsewhere.
  ///
  /// # Errors
  /// Returns `DiceError::InvalidArgument` if the number of counts does not match the request.
  pub fn from_counts(dice: &Dice, counts: Vec<BigInt>) -> Result<Self, DiceError> {
    if counts.len() != dice.num_sums() {
      return Err(DiceError::InvalidArgument {
        reason: format!(
          "{}d{} has {} sums, got {} counts",
          dice.num(),
          dice.faces(),
          dice.num_sums(),
          counts.len()
        ),
      });
    }
    Ok(Self {
      dice: *dice,
      counts,
    })
  }

  /// Returns the request this distribution answers.
  pub fn dice(&self) -> &Dice {
    &self.dice
  }

  /// Smallest attainable sum, the one `counts()[0]` belongs to.
  pub fn min_sum(&self) -> usize {
    self.dice.min_sum()
  }

  /// Largest attainable sum.
  pub fn max_sum(&self) -> usize {
    self.dice.max_sum()
  }

  /// Returns the counts, indexed by `sum - min_sum`.
  pub fn counts(&self) -> &[BigInt] {
    &self.counts
  }

  /// Consumes the distribution, returning the counts.
  pub fn into_counts(self) -> Vec<BigInt> {
    self.counts
  }

  /// Returns the count for `sum`, or `None` if `sum` cannot be rolled.
  pub fn get(&self, sum: usize) -> Option<&BigInt> {
    sum
      .checked_sub(self.dice.min_sum())
      .and_then(|i| self.counts.get(i))
  }

  /// Iterates over `(sum, count)` pairs in order of increasing sum.
  pub fn iter(&self) -> impl Iterator<Item = (usize, &BigInt)> + '_ {
    let min_sum = self.dice.min_sum();
    self
      .counts
      .iter()
      .enumerate()
      .map(move |(i, count)| (min_sum + i, count))
  }

  /// Returns the first half of the counts, middle entry included.
  pub fn half(&self) -> &[BigInt] {
    &self.counts[..self.dice.half_len()]
  }

  /// Returns the sum of all counts, which is `faces^num`.
  pub fn total(&self) -> BigInt {
    self.counts.iter().sum()
  }

  /// Returns the largest count, found at the middle sum.
  pub fn max(&self) -> &BigInt {
    &self.counts[(self.counts.len() - 1) / 2]
  }

  /// Returns true if the counts read the same in both directions.
  pub fn is_palindrome(&self) -> bool {
    self.counts.iter().eq(self.counts.iter().rev())
  }
}

impl fmt::Display for Distribution {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    for (sum, count) in self.iter() {
      writeln!(f, "{sum}\t{count}")?;
    }
    Ok(())
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_accessors() {
    let dice = Dice::new(6, 3).unwrap();
    let dist = Distribution::from_array(&dice);
    assert_eq!(dist.counts().len(), 16);
    assert_eq!(dist.get(3), Some(&BigInt::from(1)));
    assert_eq!(dist.get(10), Some(&BigInt::from(27)));
    assert_eq!(dist.get(11), Some(&BigInt::from(27)));
    assert_eq!((dist.min_sum(), dist.max_sum()), (3, 18));
    assert_eq!(dist.get(2), None);
    assert_eq!(dist.get(19), None);
    assert_eq!(dist.max(), &BigInt::from(27));
    assert_eq!(dist.total(), dice.total());
    assert_eq!(dist.half().len(), 8);
    assert!(dist.is_palindrome());
    assert_eq!(dist.iter().next(), Some((3, &BigInt::from(1))));
    assert_eq!(dist.iter().last(), Some((18, &BigInt::from(1))));
  }

  #[test]
  fn test_engines_agree() {
    let dice = Dice::new(5, 7).unwrap();
    let expected = Distribution::from_array(&dice);
    for engine in Engine::ALL {
      assert_eq!(Distribution::compute(&dice, engine), expected, "{engine}");
    }
  }

  #[test]
  fn test_engine_names() {
    for engine in Engine::ALL {
      assert_eq!(engine.to_string().parse::<Engine>(), Ok(engine));
    }
    assert!("fft".parse::<Engine>().is_err());
  }

  #[test]
  fn test_from_counts_checks_length() {
    let dice = Dice::new(2, 2).unwrap();
    let ok = vec![BigInt::from(1), BigInt::from(2), BigInt::from(1)];
    assert!(Distribution::from_counts(&dice, ok).is_ok());
    assert!(Distribution::from_counts(&dice, vec![BigInt::from(4)]).is_err());
  }

  #[test]
  fn test_display() {
    let dist = Distribution::from_stream(&Dice::new(2, 2).unwrap());
    assert_eq!(dist.to_string(), "2\t1\n3\t2\n4\t1\n");
  }

  #[test]
  fn test_serde() {
    let dist = Distribution::from_array(&Dice::new(20, 30).unwrap());
    let bytes = bincode::serialize(&dist).unwrap();
    let back: Distribution = bincode::deserialize(&bytes).unwrap();
    assert_eq!(back, dist);
  }
}
