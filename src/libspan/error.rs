// Copyright 2015 Pierre Talbot (IRCAM)

// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Failures of the span and find operations.
//!
//! Every failing call leaves the collection it was called on untouched, so the caller can recover by skipping the value, submitting a smaller range or reporting the error.

use thiserror::Error;

pub type Result<T, E = SpanError> = std::result::Result<T, E>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum SpanError {
  /// A single number was added to a full span.
  #[error("span is full: cannot add more numbers (capacity {capacity})")]
  CapacityExceeded { capacity: usize },

  /// A range of numbers does not fit in the remaining room of the span.
  ///
  /// `requested` is exact for ranges of known length; otherwise it counts the numbers read before the range was known to be too big.
  #[error("range too big: adding {requested} numbers to {len} would exceed capacity {capacity}")]
  RangeExceedsCapacity { len: usize, requested: usize, capacity: usize },

  /// A gap was asked for with fewer than two numbers stored.
  #[error("no span available: need at least 2 numbers, found {len}")]
  InsufficientElements { len: usize },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Error)]
#[error("value not found in container")]
pub struct NotFound;
