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

//! Helpers over the standard collection library.
//!
//! `find` searches any container that can be traversed by reference, and `IterableStack` is a stack that, unlike a bare stack discipline, lets its content be traversed in both directions.
//!
//! # Examples
//!
//! ```rust
//! use span::ncollections::{find, position, IterableStack};
//!
//! let mut stack = IterableStack::new();
//! stack.push(5);
//! stack.push(17);
//! stack.push(3);
//! assert_eq!(position(&stack, &17), Ok(1));
//! assert!(find(&stack, &4).is_err());
//! let pop_order: Vec<i32> = stack.iter().rev().cloned().collect();
//! assert_eq!(pop_order, vec![3, 17, 5]);
//! ```

pub mod find;
pub mod stack;

pub use self::find::{find, find_mut, position};
pub use self::stack::IterableStack;
