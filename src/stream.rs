// Copyright (c) The dicesum Authors.
// SPDX-License-Identifier: MIT
// This file is part of the dicesum project.
// See the LICENSE file in the project root for full license information.

//! Bounded-memory streaming engine.
//!
//! A [`DiceStream`] is a pipeline: a closed-form seed sequence followed by one [`Window`] per
//! additional die. Each pull feeds one seed value (or the end of the seed) through every
//! window in order, and every window answers with exactly one value (or the end of its
//! own output). The pipeline is driven by a loop, so there is no call depth that grows
//! with the number of dice, and each window holds at most `faces` values.
use crate::{
  dice::{Dice, double_middle, full_len, half_len},
  errors::DiceError,
  traits::Count,
};
use num_bigint::BigInt;
use std::{collections::VecDeque, iter::FusedIterator, marker::PhantomData};
use tracing::debug;

/// Shape of the sequence a pipeline starts from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Shape {
  /// `1, 1, ..., 1`: a single die.
  Ones,
  /// `1, 2, ..., faces, ..., 2, 1`: two dice.
  Triangle,
  /// `1, 2, ..., faces`: the half of two dice.
  Ramp,
}

/// A closed-form sequence, generated one value at a time.
#[derive(Clone, Debug)]
pub(crate) struct Seed<T> {
  shape: Shape,
  faces: usize,
  len: usize,
  pos: usize,
  _p: PhantomData<T>,
}

impl<T> Seed<T> {
  fn new(shape: Shape, faces: usize, len: usize) -> Self {
    Self {
      shape,
      faces,
      len,
      pos: 0,
      _p: PhantomData,
    }
  }
}

impl<T: Count> Iterator for Seed<T> {
  type Item = T;

  fn next(&mut self) -> Option<T> {
    if self.pos == self.len {
      return None;
    }
    let t = self.pos;
    self.pos += 1;
    let value = match self.shape {
      Shape::Ones => 1,
      Shape::Triangle => (t + 1).min(2 * self.faces - 1 - t),
      Shape::Ramp => t + 1,
    };
    // bounded by faces, which fits in u32
    Some(T::from(value as u32))
  }

  fn size_hint(&self) -> (usize, Option<usize>) {
    let n = self.len - self.pos;
    (n, Some(n))
  }
}

/// How a [`Window`] finishes once its upstream has ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Tail {
  /// Emit the remaining `width - 1` sums of the full convolution.
  Full,
  /// The upstream is the half of a palindrome: continue it from the back of the queue,
  /// dropping the shared middle value first when the upstream length is odd.
  Half { drop_middle: bool },
}

/// One fold: convolution of the upstream with `width` ones, over a sliding window.
#[derive(Clone, Debug)]
pub struct Window<T> {
  width: usize,
  queue: VecDeque<T>,
  sum: T,
  tail: Tail,
  fed: bool,
  upstream_done: bool,
  // window positions past the end of the upstream
  drained: usize,
}

impl<T: Count> Window<T> {
  /// A window whose output is the full convolution of its upstream with `width` ones.
  pub fn full(width: usize) -> Self {
    Self::new(width, Tail::Full)
  }

  /// A window whose upstream is the first half of a palindrome and whose output is the
  /// first half of the convolution. `drop_middle` must be set when the whole upstream
  /// palindrome has odd length.
  pub fn half(width: usize, drop_middle: bool) -> Self {
    Self::new(width, Tail::Half { drop_middle })
  }

  fn new(width: usize, tail: Tail) -> Self {
    Self {
      width,
      queue: VecDeque::new(),
      sum: T::zero(),
      tail,
      fed: false,
      upstream_done: false,
      drained: 0,
    }
  }

  /// Consumes the next upstream value, or `None` once the upstream has ended, and
  /// returns the next output value, or `None` once this window has ended.
  pub fn feed(&mut self, input: Option<T>) -> Option<T> {
    match input {
      Some(value) => {
        debug_assert!(!self.upstream_done);
        self.fed = true;
        self.sum += &value;
        if self.queue.len() == self.width {
          if let Some(leaving) = self.queue.pop_front() {
            self.sum -= &leaving;
          }
        }
        self.queue.push_back(value);
        Some(self.sum.clone())
      }
      None => self.drain(),
    }
  }

  fn drain(&mut self) -> Option<T> {
    let first = !self.upstream_done;
    self.upstream_done = true;
    match self.tail {
      Tail::Full => {
        if self.fed && self.drained + 1 < self.width {
          // an upstream shorter than the window leaves nothing to drop at first
          if self.queue.len() + self.drained >= self.width {
            if let Some(leaving) = self.queue.pop_front() {
              self.sum -= &leaving;
            }
          }
          self.drained += 1;
          return Some(self.sum.clone());
        }
      }
      Tail::Half { drop_middle } => {
        if first && drop_middle {
          self.queue.pop_back();
        }
        if self.queue.len() > 1 {
          let entering = self.queue.pop_back()?;
          let leaving = self.queue.pop_front()?;
          self.sum += &entering;
          self.sum -= &leaving;
          return Some(self.sum.clone());
        }
      }
    }
    self.queue.clear();
    None
  }
}

/// The counts of a dice-sum distribution, produced lazily in order of increasing sum.
///
/// The stream is single-pass. Dropping it part way through cancels the computation.
#[derive(Clone, Debug)]
pub struct DiceStream<T> {
  seed: Seed<T>,
  folds: Vec<Window<T>>,
  remaining: usize,
}

impl<T: Count> DiceStream<T> {
  /// Streams the whole distribution, `num * (faces - 1) + 1` counts.
  pub fn new(dice: &Dice) -> Self {
    let (faces, num) = (dice.faces(), dice.num());
    let seed = if num == 1 {
      Seed::new(Shape::Ones, faces, faces)
    } else {
      Seed::new(Shape::Triangle, faces, full_len(faces, 2))
    };
    let folds = (3..=num).map(|_| Window::full(faces)).collect();
    debug!(faces, num, len = dice.num_sums(), "stream");
    Self {
      seed,
      folds,
      remaining: dice.num_sums(),
    }
  }

  /// Streams the first `ceil(len / 2)` counts; the rest is their mirror image.
  pub fn half(dice: &Dice) -> Self {
    let (faces, num) = (dice.faces(), dice.num());
    let seed = if num == 1 {
      Seed::new(Shape::Ones, faces, half_len(faces, 1))
    } else {
      Seed::new(Shape::Ramp, faces, faces)
    };
    let folds = (3..=num)
      .map(|k| Window::half(faces, !double_middle(faces, k - 1)))
      .collect();
    debug!(faces, num, len = dice.half_len(), "half stream");
    Self {
      seed,
      folds,
      remaining: dice.half_len(),
    }
  }
}

impl<T: Count> Iterator for DiceStream<T> {
  type Item = T;

  fn next(&mut self) -> Option<T> {
    if self.remaining == 0 {
      return None;
    }
    let mut value = self.seed.next();
    for window in &mut self.folds {
      value = window.feed(value);
    }
    debug_assert!(value.is_some());
    self.remaining -= 1;
    value
  }

  fn size_hint(&self) -> (usize, Option<usize>) {
    (self.remaining, Some(self.remaining))
  }
}

impl<T: Count> ExactSizeIterator for DiceStream<T> {}

impl<T: Count> FusedIterator for DiceStream<T> {}

/// Streams the number of ways to roll each sum `num ..= faces * num` with `num` dice.
///
/// # Errors
/// Returns `DiceError::InvalidArgument` if `faces < 1` or `num < 1`.
pub fn compute_stream(faces: i64, num: i64) -> Result<DiceStream<BigInt>, DiceError> {
  let dice = Dice::new(faces, num)?;
  Ok(DiceStream::new(&dice))
}

/// Streams the counts for the sums up to and including the middle of the distribution.
///
/// # Errors
/// Returns `DiceError::InvalidArgument` if `faces < 1` or `num < 1`.
pub fn compute_stream_half(faces: i64, num: i64) -> Result<DiceStream<BigInt>, DiceError> {
  let dice = Dice::new(faces, num)?;
  Ok(DiceStream::half(&dice))
}
