// Copyright 2015 Pierre Talbot (IRCAM)

// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at

//     http://www.apache.org/licenses/LICENSE-2.0

// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! This library proposes a fixed-capacity collection of integers, the span, answering the shortest and longest distances between its numbers. A second part gathers small helpers over the standard collections: a generic search of the first occurrence of a value and a stack whose content can be traversed.
//!
//! # Examples
//!
//! ```rust
//! use span::{Span, SpanError};
//!
//! let mut sp: Span = Span::new(2);
//! sp.add_number(1)?;
//! assert_eq!(sp.shortest_span(), Err(SpanError::InsufficientElements { len: 1 }));
//! sp.add_number(2)?;
//! assert_eq!(sp.add_number(3), Err(SpanError::CapacityExceeded { capacity: 2 }));
//! assert_eq!(sp.len(), 2);
//! # Ok::<(), SpanError>(())
//! ```
//!
//! For more examples see the [span module](span/index.html) or the [ncollections module](ncollections/index.html).

pub mod error;
pub mod ops;
pub mod span;
pub mod ncollections;

pub use crate::error::{NotFound, SpanError};
pub use crate::ncollections::{find, find_mut, position, IterableStack};
pub use crate::ops::Distance;
pub use crate::span::Span;
