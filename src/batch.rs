// Copyright (c) The dicesum Authors.
// SPDX-License-Identifier: MIT
// This file is part of the dicesum project.
// See the LICENSE file in the project root for full license information.

//! Independent requests computed in parallel.
//!
//! Every request owns its buffers, so requests run on separate threads without any
//! coordination. Each request is still folded sequentially.
use crate::{
  dice::Dice,
  distribution::{Distribution, Engine},
  errors::DiceError,
};
use rayon::prelude::*;

/// Computes one distribution per `(faces, num)` request, in request order.
///
/// Invalid requests yield `DiceError::InvalidArgument` in their slot without affecting the others.
pub fn distributions(
  requests: &[(i64, i64)],
  engine: Engine,
) -> Vec<Result<Distribution, DiceError>> {
  requests
    .par_iter()
    .map(|&(faces, num)| Dice::new(faces, num).map(|dice| Distribution::compute(&dice, engine)))
    .collect()
}
