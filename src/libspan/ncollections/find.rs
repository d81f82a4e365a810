// Copyright 2015 Pierre Talbot (IRCAM)

// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! First occurrence of a value in any container that can be traversed by reference.
//!
//! A container qualifies as soon as a reference to it is `IntoIterator`, which covers slices, arrays, `Vec`, `VecDeque`, `LinkedList`, the ordered sets, [`Span`](../../span/struct.Span.html) and [`IterableStack`](../stack/struct.IterableStack.html). Searching an empty container, or one without a matching element, fails with `NotFound`.

use crate::error::NotFound;

/// Index of the first element equal to `value`, counted in the iteration order of the container.
pub fn position<'a, C, T>(container: &'a C, value: &T) -> Result<usize, NotFound> where
 C: ?Sized,
 &'a C: IntoIterator<Item=&'a T>,
 T: PartialEq + 'a
{
  container.into_iter()
    .position(|x| x == value)
    .ok_or(NotFound)
}

pub fn find<'a, C, T>(container: &'a C, value: &T) -> Result<&'a T, NotFound> where
 C: ?Sized,
 &'a C: IntoIterator<Item=&'a T>,
 T: PartialEq + 'a
{
  container.into_iter()
    .find(|x| *x == value)
    .ok_or(NotFound)
}

pub fn find_mut<'a, C, T>(container: &'a mut C, value: &T) -> Result<&'a mut T, NotFound> where
 C: ?Sized,
 &'a mut C: IntoIterator<Item=&'a mut T>,
 T: PartialEq + 'a
{
  container.into_iter()
    .find(|x| **x == *value)
    .ok_or(NotFound)
}
