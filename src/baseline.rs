// Copyright (c) The dicesum Authors.
// SPDX-License-Identifier: MIT
// This file is part of the dicesum project.
// See the LICENSE file in the project root for full license information.

//! Reference implementations based on polynomial multiplication.
//!
//! The distribution of `num` dice is the coefficient list of `(1 + x + ... + x^(faces-1))^num`.
//! These routines compute that power directly. They are much slower than the engines in
//! [`crate::array`] and [`crate::stream`] and exist to cross-check and benchmark them.
use crate::dice::Dice;
use num_bigint::BigInt;
use num_integer::Integer;
use num_traits::{One, Zero};

/// Multiplies two polynomials given by their coefficients, lowest degree first.
pub fn convolve(a: &[BigInt], b: &[BigInt]) -> Vec<BigInt> {
  if a.is_empty() || b.is_empty() {
    return Vec::new();
  }
  let mut out = vec![BigInt::zero(); a.len() + b.len() - 1];
  for (i, x) in a.iter().enumerate() {
    if x.is_zero() {
      continue;
    }
    for (j, y) in b.iter().enumerate() {
      out[i + j] += x * y;
    }
  }
  out
}

fn ones(faces: usize) -> Vec<BigInt> {
  vec![BigInt::one(); faces]
}

/// Folds in one die at a time by direct convolution with `faces` ones.
pub fn naive(dice: &Dice) -> Vec<BigInt> {
  let kernel = ones(dice.faces());
  let mut acc = kernel.clone();
  for _ in 1..dice.num() {
    acc = convolve(&acc, &kernel);
  }
  acc
}

/// Raises the ones polynomial to the `num`-th power by repeated squaring.
pub fn squaring(dice: &Dice) -> Vec<BigInt> {
  let mut result = vec![BigInt::one()];
  let mut base = ones(dice.faces());
  let mut n = dice.num();
  while n > 0 {
    if n.is_odd() {
      result = convolve(&result, &base);
    }
    n >>= 1;
    if n > 0 {
      base = convolve(&base, &base);
    }
  }
  result
}
