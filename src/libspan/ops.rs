// Copyright 2015 Pierre Talbot (IRCAM)

// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Operations on the numbers stored in a span.

use num_integer::Integer;
use num_traits::Unsigned;

/// Gap between two values, represented in a type able to hold the distance between `min_value()` and `max_value()` of `Self`.
pub trait Distance : Ord + Copy
{
  type Output: Unsigned + Integer + Copy;

  /// `lower` must not be greater than `upper`.
  fn distance(lower: &Self, upper: &Self) -> Self::Output;
}

macro_rules! unsigned_distance_impl
{
  ( $( $t: ty ),* ) =>
  {$(
    impl Distance for $t
    {
      type Output = $t;

      fn distance(lower: &$t, upper: &$t) -> $t {
        debug_assert!(lower <= upper,
          "Distance cannot be computed because the lower value is greater than the upper one.");
        *upper - *lower
      }
    }
  )*}
}

macro_rules! signed_distance_impl
{
  ( $( $t: ty, $u: ty ),* ) =>
  {$(
    impl Distance for $t
    {
      type Output = $u;

      fn distance(lower: &$t, upper: &$t) -> $u {
        debug_assert!(lower <= upper,
          "Distance cannot be computed because the lower value is greater than the upper one.");
        // The exact difference always fits in the unsigned type, even from `MIN` to `MAX`.
        (*upper as $u).wrapping_sub(*lower as $u)
      }
    }
  )*}
}

unsigned_distance_impl!(u8,u16,u32,u64,usize);
signed_distance_impl!(i8,u8,i16,u16,i32,u32,i64,u64,isize,usize);
