// Copyright 2015 Pierre Talbot (IRCAM)

// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Fixed-capacity collection of numbers with gap queries.
//!
//! A span holds at most `capacity` numbers, chosen once at construction. Numbers are kept in insertion order and duplicates are allowed. Adding past the capacity fails without touching the collection, and a range is added either completely or not at all.
//!
//! The *shortest span* is the smallest distance between any two stored numbers and the *longest span* the largest one. Both need at least two numbers and are expressed in the unsigned counterpart of the element type (see [`Distance`](../ops/trait.Distance.html)), so `i32::MIN` and `i32::MAX` are `u32::MAX` apart without overflow.
//!
//! # Examples
//!
//! ```rust
//! use span::Span;
//!
//! let mut sp: Span = Span::new(5);
//! sp.add_number(6)?;
//! sp.add_numbers(vec![3, 17, 9, 11])?;
//! assert!(sp.is_full());
//! assert_eq!(sp.shortest_span()?, 2);
//! assert_eq!(sp.longest_span()?, 14);
//! # Ok::<(), span::SpanError>(())
//! ```
//!
//! `Span` alone names a span of `i32`. Without that annotation, the element type must come from the numbers themselves, for example through a suffixed literal:
//!
//! ```rust
//! use span::Span;
//!
//! let sp = Span::with_numbers(4, vec![-7i64, 2, 40])?;
//! assert_eq!(sp.shortest_span()?, 9);
//! assert_eq!(sp.longest_span()?, 47u64);
//! # Ok::<(), span::SpanError>(())
//! ```

use crate::error::{Result, SpanError};
use crate::ops::Distance;
use gcollections::kind::*;
use gcollections::ops::*;
use serde::de::{self, MapAccess, SeqAccess, Visitor};
use serde::ser::SerializeStruct;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt::{self, Display, Formatter};
use std::marker::PhantomData;
use std::slice;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Span<T = i32> {
  numbers: Vec<T>,
  capacity: usize
}

impl<T> Span<T>
{
  pub fn new(capacity: usize) -> Span<T> {
    Span {
      numbers: Vec::new(),
      capacity: capacity
    }
  }

  /// Creates a span and fills it with `numbers`, failing like [`add_numbers`](#method.add_numbers) if they do not fit.
  pub fn with_numbers<I>(capacity: usize, numbers: I) -> Result<Span<T>> where
   I: IntoIterator<Item=T>
  {
    let mut span = Span::new(capacity);
    span.add_numbers(numbers)?;
    Ok(span)
  }

  fn from_parts(capacity: usize, numbers: Vec<T>) -> Option<Span<T>> {
    if numbers.len() > capacity { None }
    else {
      Some(Span {
        numbers: numbers,
        capacity: capacity
      })
    }
  }

  pub fn add_number(&mut self, number: T) -> Result<()> {
    if self.is_full() {
      return Err(SpanError::CapacityExceeded { capacity: self.capacity });
    }
    self.numbers.push(number);
    Ok(())
  }

  /// Appends every number of `numbers` in iteration order, or none of them if they would not all fit.
  ///
  /// A range whose size hint already exceeds the remaining room is rejected without being read. Otherwise at most `remaining() + 1` numbers are read before deciding, so any finite iterator is accepted.
  pub fn add_numbers<I>(&mut self, numbers: I) -> Result<()> where
   I: IntoIterator<Item=T>
  {
    let numbers = numbers.into_iter();
    let remaining = self.remaining();
    let (at_least, _) = numbers.size_hint();
    if at_least > remaining {
      return Err(self.range_too_big(at_least));
    }
    let buffer: Vec<T> = numbers.take(remaining.saturating_add(1)).collect();
    if buffer.len() > remaining {
      return Err(self.range_too_big(buffer.len()));
    }
    self.numbers.extend(buffer);
    Ok(())
  }

  fn range_too_big(&self, requested: usize) -> SpanError {
    SpanError::RangeExceedsCapacity {
      len: self.len(),
      requested: requested,
      capacity: self.capacity
    }
  }

  pub fn len(&self) -> usize {
    self.numbers.len()
  }

  pub fn capacity(&self) -> usize {
    self.capacity
  }

  pub fn remaining(&self) -> usize {
    self.capacity - self.numbers.len()
  }

  pub fn is_empty(&self) -> bool {
    self.numbers.is_empty()
  }

  pub fn is_full(&self) -> bool {
    self.numbers.len() == self.capacity
  }

  /// The stored numbers in insertion order.
  pub fn as_slice(&self) -> &[T] {
    &self.numbers
  }

  pub fn iter(&self) -> slice::Iter<T> {
    self.numbers.iter()
  }

  fn too_few_numbers(&self) -> SpanError {
    SpanError::InsufficientElements { len: self.numbers.len() }
  }
}

impl<T: Distance> Span<T>
{
  /// Smallest distance between two stored numbers.
  ///
  /// Once sorted, the closest pair of numbers is necessarily adjacent, so only adjacent pairs of a sorted copy are compared. There is no pair, hence no span, with fewer than two numbers.
  pub fn shortest_span(&self) -> Result<T::Output> {
    let mut sorted = self.numbers.clone();
    sorted.sort_unstable();
    sorted.windows(2)
      .map(|pair| T::distance(&pair[0], &pair[1]))
      .min()
      .ok_or_else(|| self.too_few_numbers())
  }

  /// Distance between the smallest and the largest stored numbers.
  pub fn longest_span(&self) -> Result<T::Output> {
    match (self.smallest(), self.largest()) {
      (Some(lower), Some(upper)) if self.numbers.len() >= 2 => Ok(T::distance(&lower, &upper)),
      _ => Err(self.too_few_numbers())
    }
  }

  pub fn smallest(&self) -> Option<T> {
    self.numbers.iter().cloned().min()
  }

  pub fn largest(&self) -> Option<T> {
    self.numbers.iter().cloned().max()
  }
}

impl<'a, T> IntoIterator for &'a Span<T>
{
  type Item = &'a T;
  type IntoIter = slice::Iter<'a, T>;

  fn into_iter(self) -> slice::Iter<'a, T> {
    self.numbers.iter()
  }
}

impl<T: Display> Display for Span<T>
{
  fn fmt(&self, formatter: &mut Formatter) -> fmt::Result {
    formatter.write_str("{")?;
    for (i, number) in self.numbers.iter().enumerate() {
      if i > 0 {
        formatter.write_str(", ")?;
      }
      write!(formatter, "{}", number)?;
    }
    write!(formatter, "}} ({}/{})", self.numbers.len(), self.capacity)
  }
}

impl<T> Collection for Span<T>
{
  type Item = T;
}

impl<T> Cardinality for Span<T>
{
  type Size = usize;

  fn size(&self) -> usize {
    self.numbers.len()
  }
}

impl<T: PartialEq> Contains for Span<T>
{
  fn contains(&self, value: &T) -> bool {
    self.numbers.contains(value)
  }
}

impl<T: Distance> Bounded for Span<T>
{
  fn lower(&self) -> T {
    match self.smallest() {
      Some(lower) => lower,
      None => panic!("Cannot access lower bound on empty span.")
    }
  }

  fn upper(&self) -> T {
    match self.largest() {
      Some(upper) => upper,
      None => panic!("Cannot access upper bound on empty span.")
    }
  }
}

impl<T: Serialize> Serialize for Span<T>
{
  fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error> where
   S: Serializer
  {
    let mut state = serializer.serialize_struct("Span", 2)?;
    state.serialize_field("capacity", &self.capacity)?;
    state.serialize_field("elements", &self.numbers)?;
    state.end()
  }
}

const FIELDS: &[&str] = &["capacity", "elements"];

enum Field { Capacity, Elements }

impl<'de> Deserialize<'de> for Field
{
  fn deserialize<D>(deserializer: D) -> Result<Field, D::Error> where
   D: Deserializer<'de>
  {
    struct FieldVisitor;

    impl<'de> Visitor<'de> for FieldVisitor
    {
      type Value = Field;

      fn expecting(&self, formatter: &mut Formatter) -> fmt::Result {
        formatter.write_str("`capacity` or `elements`")
      }

      fn visit_str<E: de::Error>(self, value: &str) -> Result<Field, E> {
        match value {
          "capacity" => Ok(Field::Capacity),
          "elements" => Ok(Field::Elements),
          _ => Err(de::Error::unknown_field(value, FIELDS))
        }
      }
    }

    deserializer.deserialize_identifier(FieldVisitor)
  }
}

struct SpanVisitor<T> {
  marker: PhantomData<T>
}

fn checked_span<T, E: de::Error>(capacity: usize, numbers: Vec<T>) -> Result<Span<T>, E> {
  let len = numbers.len();
  Span::from_parts(capacity, numbers).ok_or_else(||
    E::custom(format!("span holds {} elements but its capacity is {}", len, capacity)))
}

impl<'de, T: Deserialize<'de>> Visitor<'de> for SpanVisitor<T>
{
  type Value = Span<T>;

  fn expecting(&self, formatter: &mut Formatter) -> fmt::Result {
    formatter.write_str("struct Span")
  }

  fn visit_seq<A>(self, mut seq: A) -> Result<Span<T>, A::Error> where
   A: SeqAccess<'de>
  {
    let capacity = seq.next_element()?
      .ok_or_else(|| de::Error::invalid_length(0, &self))?;
    let numbers = seq.next_element()?
      .ok_or_else(|| de::Error::invalid_length(1, &self))?;
    checked_span(capacity, numbers)
  }

  fn visit_map<A>(self, mut map: A) -> Result<Span<T>, A::Error> where
   A: MapAccess<'de>
  {
    let mut capacity = None;
    let mut numbers = None;
    while let Some(key) = map.next_key()? {
      match key {
        Field::Capacity => {
          if capacity.is_some() {
            return Err(de::Error::duplicate_field("capacity"));
          }
          capacity = Some(map.next_value()?);
        }
        Field::Elements => {
          if numbers.is_some() {
            return Err(de::Error::duplicate_field("elements"));
          }
          numbers = Some(map.next_value()?);
        }
      }
    }
    let capacity = capacity.ok_or_else(|| de::Error::missing_field("capacity"))?;
    let numbers = numbers.ok_or_else(|| de::Error::missing_field("elements"))?;
    checked_span(capacity, numbers)
  }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for Span<T>
{
  fn deserialize<D>(deserializer: D) -> Result<Span<T>, D::Error> where
   D: Deserializer<'de>
  {
    deserializer.deserialize_struct("Span", FIELDS, SpanVisitor { marker: PhantomData })
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use serde_test::{assert_de_tokens_error, assert_tokens, Token};
  use std::cell::Cell;
  use std::collections::LinkedList;

  fn make_span(capacity: usize, numbers: Vec<i32>) -> Span<i32> {
    Span::with_numbers(capacity, numbers)
      .expect("test numbers must fit in the capacity")
  }

  #[test]
  fn new_span_is_empty() {
    for capacity in 0..5 {
      let sp: Span = Span::new(capacity);
      assert_eq!(sp.len(), 0);
      assert_eq!(sp.capacity(), capacity);
      assert!(sp.is_empty());
      assert_eq!(sp.is_full(), capacity == 0,
        "a new span of capacity {} has a wrong fullness", capacity);
    }
  }

  #[test]
  fn zero_capacity_rejects_everything() {
    let mut sp: Span = Span::new(0);
    assert_eq!(sp.add_number(1), Err(SpanError::CapacityExceeded { capacity: 0 }));
    assert_eq!(sp.add_numbers(vec![1]),
      Err(SpanError::RangeExceedsCapacity { len: 0, requested: 1, capacity: 0 }));
    assert_eq!(sp.add_numbers(vec![]), Ok(()));
    assert!(sp.is_empty());
  }

  #[test]
  fn required_example() {
    let mut sp: Span = Span::new(5);
    for &n in &[6, 3, 17, 9, 11] {
      sp.add_number(n).unwrap();
    }
    assert_eq!(sp.shortest_span(), Ok(2));
    assert_eq!(sp.longest_span(), Ok(14));
  }

  #[test]
  fn too_few_numbers() {
    let empty: Span = Span::new(10);
    let single = make_span(10, vec![42]);
    let cases = vec![(empty, 0), (single, 1)];

    for (sp, len) in cases {
      assert_eq!(sp.shortest_span(), Err(SpanError::InsufficientElements { len: len }));
      assert_eq!(sp.longest_span(), Err(SpanError::InsufficientElements { len: len }));
    }
  }

  #[test]
  fn add_number_past_capacity() {
    let mut sp: Span = Span::new(2);
    sp.add_number(1).unwrap();
    sp.add_number(2).unwrap();
    assert_eq!(sp.add_number(3), Err(SpanError::CapacityExceeded { capacity: 2 }));
    assert_eq!(sp.len(), 2);
    assert_eq!(sp.as_slice(), &[1, 2]);
  }

  #[test]
  fn add_numbers_is_atomic() {
    let mut sp: Span = Span::new(3);
    assert_eq!(sp.add_numbers(1..6),
      Err(SpanError::RangeExceedsCapacity { len: 0, requested: 5, capacity: 3 }));
    assert_eq!(sp.len(), 0);

    sp.add_number(10).unwrap();
    assert_eq!(sp.add_numbers(vec![20, 30, 40]),
      Err(SpanError::RangeExceedsCapacity { len: 1, requested: 3, capacity: 3 }));
    assert_eq!(sp.as_slice(), &[10]);

    sp.add_numbers(vec![20, 30]).unwrap();
    assert!(sp.is_full());
    assert_eq!(sp.as_slice(), &[10, 20, 30]);
  }

  #[test]
  fn add_numbers_from_any_iterator() {
    let mut sp = Span::new(4);
    sp.add_numbers((0..100).filter(|n| n % 50 == 0)).unwrap();
    let list: LinkedList<i32> = vec![7, 8].into_iter().collect();
    sp.add_numbers(list).unwrap();
    assert_eq!(sp.as_slice(), &[0, 50, 7, 8]);
    assert_eq!(sp.add_numbers(Vec::new()), Ok(()));
    assert_eq!(sp.add_numbers((0..10).filter(|n| *n == 3)),
      Err(SpanError::RangeExceedsCapacity { len: 4, requested: 1, capacity: 4 }));
  }

  #[test]
  fn rejected_range_is_not_read() {
    let pulled = Cell::new(0usize);
    let mut sp: Span<i64> = Span::new(3);

    let result = sp.add_numbers((0..50_000_000).inspect(|_| pulled.set(pulled.get() + 1)));
    assert_eq!(result,
      Err(SpanError::RangeExceedsCapacity { len: 0, requested: 50_000_000, capacity: 3 }));
    assert_eq!(pulled.get(), 0, "a range of known length must be rejected before being read");

    // Filtering hides the length, so only one number past the remaining room is read.
    let result = sp.add_numbers((0..50_000_000).filter(|_| true).inspect(|_| pulled.set(pulled.get() + 1)));
    assert_eq!(result,
      Err(SpanError::RangeExceedsCapacity { len: 0, requested: 4, capacity: 3 }));
    assert_eq!(pulled.get(), 4);
    assert!(sp.is_empty());

    pulled.set(0);
    sp.add_number(9).unwrap();
    sp.add_numbers((0..2).filter(|_| true).inspect(|_| pulled.set(pulled.get() + 1))).unwrap();
    assert_eq!(pulled.get(), 2);
    assert_eq!(sp.as_slice(), &[9, 0, 1]);
  }

  #[test]
  fn identical_numbers() {
    let sp = make_span(3, vec![5, 5, 5]);
    assert_eq!(sp.shortest_span(), Ok(0));
    assert_eq!(sp.longest_span(), Ok(0));
  }

  #[test]
  fn gaps() {
    // Numbers, then the expected shortest and longest spans.
    let cases = vec![
      (vec![1, 2], 1, 1),
      (vec![2, 1], 1, 1),
      (vec![-5, 5], 10, 10),
      (vec![1, 10, 100, 1000], 9, 999),
      (vec![100, -100, 0, 1], 1, 200),
      (vec![-3, -30, -20, -21], 1, 27),
      (vec![7, 1, 7, 20], 0, 19),
    ];

    for (numbers, shortest, longest) in cases {
      let sp = make_span(numbers.len(), numbers.clone());
      assert_eq!(sp.shortest_span(), Ok(shortest), "shortest span of {:?}", numbers);
      assert_eq!(sp.longest_span(), Ok(longest), "longest span of {:?}", numbers);
      assert!(sp.shortest_span().unwrap() <= sp.longest_span().unwrap());
    }
  }

  #[test]
  fn extreme_numbers() {
    let sp = make_span(3, vec![i32::max_value(), 0, i32::min_value()]);
    assert_eq!(sp.longest_span(), Ok(u32::max_value()));
    assert_eq!(sp.shortest_span(), Ok(i32::max_value() as u32));

    let bytes: Span<i8> = Span::with_numbers(2, vec![-128, 127]).unwrap();
    assert_eq!(bytes.longest_span(), Ok(255u8));

    let unsigned: Span<u64> = Span::with_numbers(3, vec![u64::max_value(), 1, 4]).unwrap();
    assert_eq!(unsigned.shortest_span(), Ok(3));
    assert_eq!(unsigned.longest_span(), Ok(u64::max_value() - 1));
  }

  #[test]
  fn queries_do_not_mutate() {
    let sp = make_span(6, vec![6, 3, 17, 9, 11, 3]);
    let before = sp.clone();
    for _ in 0..3 {
      assert_eq!(sp.shortest_span(), Ok(0));
      assert_eq!(sp.longest_span(), Ok(14));
      assert_eq!(sp.len(), 6);
    }
    assert_eq!(sp, before);
    assert_eq!(sp.as_slice(), &[6, 3, 17, 9, 11, 3]);
  }

  #[test]
  fn large_span() {
    let numbers: Vec<i32> = (0..10_000).map(|i| i * 3).rev().collect();
    let sp = make_span(10_000, numbers);
    assert!(sp.is_full());
    assert_eq!(sp.shortest_span(), Ok(3));
    assert_eq!(sp.longest_span(), Ok(29_997));
  }

  #[test]
  fn clones_are_independent() {
    let original = make_span(4, vec![1, 2]);
    let mut copy = original.clone();
    copy.add_number(100).unwrap();
    assert_eq!(original.as_slice(), &[1, 2]);
    assert_eq!(original.longest_span(), Ok(1));
    assert_eq!(copy.longest_span(), Ok(99));
    assert_eq!(copy.remaining(), 1);
    assert_eq!(original.remaining(), 2);
  }

  #[test]
  fn collection_ops() {
    let sp = make_span(5, vec![4, -2, 9]);
    assert_eq!(sp.size(), 3);
    assert!(!IsEmpty::is_empty(&sp));
    assert!(!sp.is_singleton());
    assert!(sp.contains(&-2));
    assert!(!sp.contains(&3));
    assert_eq!(sp.lower(), -2);
    assert_eq!(sp.upper(), 9);
    assert!(make_span(5, vec![1]).is_singleton());
    assert_eq!(sp.iter().cloned().collect::<Vec<_>>(), vec![4, -2, 9]);
    assert_eq!((&sp).into_iter().count(), 3);
  }

  #[test]
  #[should_panic]
  fn lower_on_empty_panics() {
    let sp: Span = Span::new(3);
    sp.lower();
  }

  #[test]
  fn display() {
    assert_eq!(make_span(5, vec![3, 6, 9]).to_string(), "{3, 6, 9} (3/5)");
    assert_eq!(make_span(0, vec![]).to_string(), "{} (0/0)");
  }

  #[test]
  fn serde_tokens() {
    let sp = make_span(5, vec![3, -6]);
    assert_tokens(&sp, &[
      Token::Struct { name: "Span", len: 2 },
      Token::Str("capacity"),
      Token::U64(5),
      Token::Str("elements"),
      Token::Seq { len: Some(2) },
      Token::I32(3),
      Token::I32(-6),
      Token::SeqEnd,
      Token::StructEnd,
    ]);
  }

  #[test]
  fn serde_rejects_overfull_span() {
    assert_de_tokens_error::<Span<i32>>(&[
      Token::Struct { name: "Span", len: 2 },
      Token::Str("capacity"),
      Token::U64(1),
      Token::Str("elements"),
      Token::Seq { len: Some(2) },
      Token::I32(1),
      Token::I32(2),
      Token::SeqEnd,
      Token::StructEnd,
    ], "span holds 2 elements but its capacity is 1");
  }

  #[test]
  fn serde_rejects_missing_field() {
    assert_de_tokens_error::<Span<i32>>(&[
      Token::Struct { name: "Span", len: 1 },
      Token::Str("capacity"),
      Token::U64(1),
      Token::StructEnd,
    ], "missing field `elements`");
  }
}
