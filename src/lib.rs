// Copyright (c) The dicesum Authors.
// SPDX-License-Identifier: MIT
// This file is part of the dicesum project.
// See the LICENSE file in the project root for full license information.

//! This library computes the exact distribution of the sum of `num` dice with `faces` faces each.
//! The result is the count of outcomes for every attainable sum, as arbitrary-precision integers.
//!
//! Two engines produce the same sequence:
//! - [`array`] folds dice into a half-sized palindromic buffer and mirrors it at the end,
//! - [`stream`] chains bounded sliding windows and yields the counts lazily.
//!
//! Neither engine multiplies big integers; every fold is one subtraction and one addition per entry.
#![deny(
  warnings,
  unused,
  future_incompatible,
  nonstandard_style,
  rust_2018_idioms,
  missing_docs
)]
#![forbid(unsafe_code)]

// public modules
pub mod array;
pub mod baseline;
pub mod batch;
pub mod dice;
pub mod distribution;
pub mod errors;
pub mod stream;
pub mod traits;

pub use array::compute_array;
pub use dice::Dice;
pub use distribution::Distribution;
pub use errors::DiceError;
pub use stream::{compute_stream, compute_stream_half};

/// Start a span + timer, return `(Span, Instant)`.
macro_rules! start_span {
    ($name:expr $(, $($fmt:tt)+)?) => {{
        let span       = tracing::info_span!($name $(, $($fmt)+)?);
        let span_clone = span.clone();    // lives as long as the guard
        let _guard      = span_clone.enter();
        (span, std::time::Instant::now())
    }};
}
pub(crate) use start_span;
