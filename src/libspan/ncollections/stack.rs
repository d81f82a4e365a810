// Copyright 2015 Pierre Talbot (IRCAM)

// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Stack whose elements can be traversed.
//!
//! The stack wraps a `VecDeque` whose back is the top of the stack. Read access to the deque is given through `Deref`, so `iter()`, `len()` or `get()` are available; mutation goes through the stack operations and `iter_mut()` only. Iteration runs from the bottom to the top, and `.rev()` runs in pop order.

use gcollections::kind::*;
use gcollections::ops::*;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::vec_deque::{self, VecDeque};
use std::iter::FromIterator;
use std::mem;
use std::ops::Deref;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct IterableStack<T>
{
  items: VecDeque<T>
}

impl<T> IterableStack<T>
{
  pub fn new() -> IterableStack<T> {
    IterableStack::wrap(VecDeque::new())
  }

  pub fn with_capacity(capacity: usize) -> IterableStack<T> {
    IterableStack::wrap(VecDeque::with_capacity(capacity))
  }

  /// Adapts `items` as a stack, its back being the top.
  pub fn wrap(items: VecDeque<T>) -> IterableStack<T> {
    IterableStack { items: items }
  }

  pub fn into_inner(self) -> VecDeque<T> {
    self.items
  }

  pub fn push(&mut self, value: T) {
    self.items.push_back(value);
  }

  pub fn pop(&mut self) -> Option<T> {
    self.items.pop_back()
  }

  pub fn top(&self) -> Option<&T> {
    self.items.back()
  }

  pub fn top_mut(&mut self) -> Option<&mut T> {
    self.items.back_mut()
  }

  pub fn clear(&mut self) {
    self.items.clear();
  }

  pub fn swap(&mut self, other: &mut IterableStack<T>) {
    mem::swap(&mut self.items, &mut other.items);
  }

  pub fn iter_mut(&mut self) -> vec_deque::IterMut<T> {
    self.items.iter_mut()
  }
}

impl<T> Default for IterableStack<T>
{
  fn default() -> IterableStack<T> {
    IterableStack::new()
  }
}

impl<T> Deref for IterableStack<T>
{
  type Target = VecDeque<T>;

  fn deref(&self) -> &VecDeque<T> {
    &self.items
  }
}

impl<T> FromIterator<T> for IterableStack<T>
{
  fn from_iter<I: IntoIterator<Item=T>>(iterable: I) -> IterableStack<T> {
    IterableStack::wrap(iterable.into_iter().collect())
  }
}

impl<T> Extend<T> for IterableStack<T>
{
  fn extend<I: IntoIterator<Item=T>>(&mut self, iterable: I) {
    self.items.extend(iterable);
  }
}

impl<T> IntoIterator for IterableStack<T>
{
  type Item = T;
  type IntoIter = vec_deque::IntoIter<T>;

  fn into_iter(self) -> vec_deque::IntoIter<T> {
    self.items.into_iter()
  }
}

impl<'a, T> IntoIterator for &'a IterableStack<T>
{
  type Item = &'a T;
  type IntoIter = vec_deque::Iter<'a, T>;

  fn into_iter(self) -> vec_deque::Iter<'a, T> {
    self.items.iter()
  }
}

impl<'a, T> IntoIterator for &'a mut IterableStack<T>
{
  type Item = &'a mut T;
  type IntoIter = vec_deque::IterMut<'a, T>;

  fn into_iter(self) -> vec_deque::IterMut<'a, T> {
    self.items.iter_mut()
  }
}

impl<T> Collection for IterableStack<T>
{
  type Item = T;
}

impl<T> Cardinality for IterableStack<T>
{
  type Size = usize;

  fn size(&self) -> usize {
    self.items.len()
  }
}

impl<T: PartialEq> Contains for IterableStack<T>
{
  fn contains(&self, value: &T) -> bool {
    self.items.contains(value)
  }
}

impl<T: Serialize> Serialize for IterableStack<T>
{
  fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error> where
   S: Serializer
  {
    serializer.collect_seq(self.items.iter())
  }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for IterableStack<T>
{
  fn deserialize<D>(deserializer: D) -> Result<IterableStack<T>, D::Error> where
   D: Deserializer<'de>
  {
    VecDeque::deserialize(deserializer).map(IterableStack::wrap)
  }
}
