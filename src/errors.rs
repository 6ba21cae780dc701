// Copyright (c) The dicesum Authors.
// SPDX-License-Identifier: MIT
// This file is part of the dicesum project.
// See the LICENSE file in the project root for full license information.

//! This module defines errors returned by the library.
use thiserror::Error;

/// Errors returned by dicesum
#[derive(Clone, Debug, Eq, PartialEq, Error)]
pub enum DiceError {
  /// returned if the face count or the dice count is out of range
  #[error("InvalidArgument: {reason}")]
  InvalidArgument {
    /// The reason the request was rejected
    reason: String,
  },
}
