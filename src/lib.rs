#![doc = include_str!("../README.md")]
#![no_std]
#![cfg_attr(feature = "allocator_api", feature(allocator_api))]

extern crate alloc;

use core::alloc::Layout;
use core::fmt;
use link::Link;
use link::Node;
use link::Store;

pub use allocator_api2::alloc::Allocator;
pub use allocator_api2::alloc::Global;
pub use iter::Iter;

/// The element type held by a [`List`].

pub type Elem = i32;

/// The error returned by the fallible `try_*` operations when the list's
/// node store cannot grow.
///
/// A list is left unchanged by an operation that returns this error.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AllocError;

////////////////////////////////////////////////////////////////////////////////
//                                                                            //
// SUBMODULES                                                                 //
//                                                                            //
////////////////////////////////////////////////////////////////////////////////

mod iter;
mod link;
mod prelude;

////////////////////////////////////////////////////////////////////////////////
//                                                                            //
// PUBLIC TYPE AND TRAIT DEFINITIONS                                          //
//                                                                            //
////////////////////////////////////////////////////////////////////////////////

/// A singly-linked list of [`Elem`] values.
///
/// Nodes live in a single growable store obtained from the allocator `A`.
/// Each node links to its successor by slot index, and the slots of removed
/// nodes are reused by later insertions. Dropping the list releases the
/// store.
///
/// Positions are 1-based throughout: the first element is at index `1`.

pub struct List<A: Allocator = Global> {
  store: Store<A>,
  head: Link,
  tail: Link,
  len: usize,
}

////////////////////////////////////////////////////////////////////////////////
//                                                                            //
// PRIVATE TYPE AND TRAIT DEFINITIONS                                         //
//                                                                            //
////////////////////////////////////////////////////////////////////////////////

enum Error {
  ParentAllocatorFailed(Layout),
  TooLarge,
}

enum Panicked { }

trait Fail: Sized {
  fn fail<T>(_: Error) -> Result<T, Self>;
}

////////////////////////////////////////////////////////////////////////////////
//                                                                            //
// UTILITY FUNCTIONS                                                          //
//                                                                            //
////////////////////////////////////////////////////////////////////////////////

#[inline(always)]
fn unwrap<T>(x: Result<T, Panicked>) -> T {
  match x { Ok(x) => x, Err(e) => match e { } }
}

#[inline(always)]
fn lift<T, E: Fail>(x: Result<T, Error>) -> Result<T, E> {
  match x { Ok(x) => Ok(x), Err(e) => E::fail(e) }
}

////////////////////////////////////////////////////////////////////////////////
//                                                                            //
// Fail                                                                       //
//                                                                            //
////////////////////////////////////////////////////////////////////////////////

impl Fail for Panicked {
  #[inline(never)]
  #[cold]
  fn fail<T>(e: Error) -> Result<T, Self> {
    match e {
      Error::ParentAllocatorFailed(layout) =>
        alloc::alloc::handle_alloc_error(layout),
      Error::TooLarge =>
        // Link indices are 32 bits wide, so a list can never hold more than
        // `u32::MAX` nodes regardless of available memory.
        panic!("intlist: node store exceeded its index space!"),
    }
  }
}

impl Fail for AllocError {
  #[inline(always)]
  fn fail<T>(_: Error) -> Result<T, Self> {
    Err(AllocError)
  }
}

impl fmt::Display for AllocError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str("memory allocation failed")
  }
}

impl core::error::Error for AllocError { }

////////////////////////////////////////////////////////////////////////////////
//                                                                            //
// List                                                                       //
//                                                                            //
////////////////////////////////////////////////////////////////////////////////

fn with_capacity<A, E>(capacity: usize, allocator: A) -> Result<List<A>, E>
where
  A: Allocator,
  E: Fail,
{
  let mut list = List::new_in(allocator);
  lift(list.store.reserve(capacity))?;
  Ok(list)
}

fn add_front<A, E>(list: &mut List<A>, value: Elem) -> Result<(), E>
where
  A: Allocator,
  E: Fail,
{
  let k = lift(list.store.insert(Node { value, next: list.head }))?;

  if list.tail.is_none() {
    list.tail = k;
  }

  list.head = k;
  list.len = list.len + 1;
  Ok(())
}

fn add_back<A, E>(list: &mut List<A>, value: Elem) -> Result<(), E>
where
  A: Allocator,
  E: Fail,
{
  let k = lift(list.store.insert(Node { value, next: Link::NONE }))?;

  if list.tail.is_none() {
    list.head = k;
  } else {
    list.store.node_mut(list.tail).next = k;
  }

  list.tail = k;
  list.len = list.len + 1;
  Ok(())
}

fn add_at<A, E>(list: &mut List<A>, value: Elem, index: usize) -> Result<bool, E>
where
  A: Allocator,
  E: Fail,
{
  let n = list.len;

  if index == 0 || index > n + 1 {
    return Ok(false);
  }

  if index == 1 {
    add_front(list, value)?;
    return Ok(true);
  }

  if index == n + 1 {
    add_back(list, value)?;
    return Ok(true);
  }

  let p = list.link_at(index - 1);
  let next = list.store.node(p).next;
  let k = lift(list.store.insert(Node { value, next }))?;
  list.store.node_mut(p).next = k;
  list.len = n + 1;
  Ok(true)
}

fn reserve<A, E>(list: &mut List<A>, additional: usize) -> Result<(), E>
where
  A: Allocator,
  E: Fail,
{
  lift(list.store.reserve(additional))
}

impl List<Global> {
  /// Creates an empty list backed by the global allocator. No memory is
  /// allocated until the first insertion.

  pub fn new() -> Self {
    Self::new_in(Global)
  }

  /// Creates an empty list with room for at least `capacity` nodes, backed
  /// by the global allocator.
  ///
  /// # Panics
  ///
  /// Panics on failure to allocate memory.

  pub fn with_capacity(capacity: usize) -> Self {
    unwrap(with_capacity(capacity, Global))
  }

  /// Creates an empty list with room for at least `capacity` nodes, backed
  /// by the global allocator.
  ///
  /// # Errors
  ///
  /// An error is returned on failure to allocate memory.

  pub fn try_with_capacity(capacity: usize) -> Result<Self, AllocError> {
    with_capacity(capacity, Global)
  }
}

impl<A: Allocator> List<A> {
  /// Creates an empty list backed by the given allocator.

  pub fn new_in(allocator: A) -> Self {
    Self {
      store: Store::new_in(allocator),
      head: Link::NONE,
      tail: Link::NONE,
      len: 0,
    }
  }

  /// Creates an empty list with room for at least `capacity` nodes, backed
  /// by the given allocator.
  ///
  /// # Panics
  ///
  /// Panics on failure to allocate memory.

  pub fn with_capacity_in(capacity: usize, allocator: A) -> Self {
    unwrap(with_capacity(capacity, allocator))
  }

  /// Creates an empty list with room for at least `capacity` nodes, backed
  /// by the given allocator.
  ///
  /// # Errors
  ///
  /// An error is returned on failure to allocate memory.

  pub fn try_with_capacity_in(capacity: usize, allocator: A) -> Result<Self, AllocError> {
    with_capacity(capacity, allocator)
  }

  /// A reference to the parent allocator.

  pub fn allocator(&self) -> &A {
    self.store.allocator()
  }

  /// The number of elements in the list.

  #[inline(always)]
  pub fn len(&self) -> usize {
    self.len
  }

  /// Whether the list holds no elements.

  #[inline(always)]
  pub fn is_empty(&self) -> bool {
    self.len == 0
  }

  /// The number of nodes the list can hold before its store must grow.
  /// Slots vacated by removals count toward this only once they are
  /// reused; see [`reserve`](Self::reserve).

  pub fn capacity(&self) -> usize {
    self.store.capacity()
  }

  /// Inserts `value` at the front of the list.
  ///
  /// # Panics
  ///
  /// Panics on failure to allocate memory.

  #[inline(always)]
  pub fn add_front(&mut self, value: Elem) {
    unwrap(add_front(self, value))
  }

  /// Inserts `value` at the front of the list.
  ///
  /// # Errors
  ///
  /// An error is returned on failure to allocate memory.

  #[inline(always)]
  pub fn try_add_front(&mut self, value: Elem) -> Result<(), AllocError> {
    add_front(self, value)
  }

  /// Appends `value` to the back of the list.
  ///
  /// # Panics
  ///
  /// Panics on failure to allocate memory.

  #[inline(always)]
  pub fn add_back(&mut self, value: Elem) {
    unwrap(add_back(self, value))
  }

  /// Appends `value` to the back of the list.
  ///
  /// # Errors
  ///
  /// An error is returned on failure to allocate memory.

  #[inline(always)]
  pub fn try_add_back(&mut self, value: Elem) -> Result<(), AllocError> {
    add_back(self, value)
  }

  /// Inserts `value` so that it ends up at the 1-based `index`.
  ///
  /// Valid indices are `1 ..= len + 1`. Returns `false` and leaves the list
  /// unchanged for any other index.
  ///
  /// # Panics
  ///
  /// Panics on failure to allocate memory.

  pub fn add_at(&mut self, value: Elem, index: usize) -> bool {
    unwrap(add_at(self, value, index))
  }

  /// Inserts `value` so that it ends up at the 1-based `index`.
  ///
  /// Returns `Ok(false)` for an index outside `1 ..= len + 1`.
  ///
  /// # Errors
  ///
  /// An error is returned on failure to allocate memory.

  pub fn try_add_at(&mut self, value: Elem, index: usize) -> Result<bool, AllocError> {
    add_at(self, value, index)
  }

  /// Removes and returns the first element, or `None` if the list is empty.

  pub fn remove_front(&mut self) -> Option<Elem> {
    let k = self.head;

    if k.is_none() {
      return None;
    }

    self.head = self.store.node(k).next;

    if self.head.is_none() {
      self.tail = Link::NONE;
    }

    self.len = self.len - 1;
    Some(self.store.remove(k))
  }

  /// Removes and returns the last element, or `None` if the list is empty.
  ///
  /// This walks the list to find the new last node.

  pub fn remove_back(&mut self) -> Option<Elem> {
    if self.len <= 1 {
      return self.remove_front();
    }

    let p = self.link_at(self.len - 1);
    let k = self.tail;
    self.store.node_mut(p).next = Link::NONE;
    self.tail = p;
    self.len = self.len - 1;
    Some(self.store.remove(k))
  }

  /// Removes and returns the element at the 1-based `index`, or `None` if
  /// `index` is outside `1 ..= len`.

  pub fn remove_at(&mut self, index: usize) -> Option<Elem> {
    if index == 0 || index > self.len {
      return None;
    }

    if index == 1 {
      return self.remove_front();
    }

    let p = self.link_at(index - 1);
    let k = self.store.node(p).next;
    self.store.node_mut(p).next = self.store.node(k).next;

    if k == self.tail {
      self.tail = p;
    }

    self.len = self.len - 1;
    Some(self.store.remove(k))
  }

  /// Removes every element. The store keeps its capacity.

  pub fn clear(&mut self) {
    self.store.clear();
    self.head = Link::NONE;
    self.tail = Link::NONE;
    self.len = 0;
  }

  /// Whether some element equals `value`.

  pub fn contains(&self, value: Elem) -> bool {
    self.iter().any(|x| x == value)
  }

  /// The element at the 1-based `index`, or `None` if `index` is outside
  /// `1 ..= len`.

  pub fn value_at(&self, index: usize) -> Option<Elem> {
    if index == 0 || index > self.len {
      return None;
    }

    Some(self.store.node(self.link_at(index)).value)
  }

  /// The 1-based index of the first element equal to `value`, or `None`.

  pub fn index_of(&self, value: Elem) -> Option<usize> {
    self.iter().position(|x| x == value).map(|i| i + 1)
  }

  /// The first element, or `None` if the list is empty.

  pub fn front(&self) -> Option<Elem> {
    self.head.get().map(|i| self.store.nodes()[i].value)
  }

  /// The last element, or `None` if the list is empty.

  pub fn back(&self) -> Option<Elem> {
    self.tail.get().map(|i| self.store.nodes()[i].value)
  }

  /// Traverses the list from front to back.

  pub fn iter(&self) -> Iter<'_> {
    Iter::new(self.store.nodes(), self.head, self.len)
  }

  /// Makes room for at least `additional` more insertions without the
  /// store growing.
  ///
  /// # Panics
  ///
  /// Panics on failure to allocate memory.

  pub fn reserve(&mut self, additional: usize) {
    unwrap(reserve(self, additional))
  }

  /// Makes room for at least `additional` more insertions without the
  /// store growing.
  ///
  /// # Errors
  ///
  /// An error is returned on failure to allocate memory.

  pub fn try_reserve(&mut self, additional: usize) -> Result<(), AllocError> {
    reserve(self, additional)
  }

  /// Moves the nodes into list order at the start of the store and returns
  /// unused memory to the allocator.

  pub fn shrink_to_fit(&mut self) {
    let (head, tail) = self.store.compact(self.head, self.len);
    self.head = head;
    self.tail = tail;
  }

  // `1 <= pos <= len`

  fn link_at(&self, pos: usize) -> Link {
    debug_assert!(1 <= pos && pos <= self.len);

    let mut k = self.head;
    let mut i = 1;

    while i < pos {
      k = self.store.node(k).next;
      i = i + 1;
    }

    k
  }
}

impl Default for List<Global> {
  fn default() -> Self {
    Self::new()
  }
}

impl<A: Allocator> Extend<Elem> for List<A> {
  fn extend<I: IntoIterator<Item = Elem>>(&mut self, iter: I) {
    let iter = iter.into_iter();
    self.reserve(iter.size_hint().0);

    for x in iter {
      self.add_back(x);
    }
  }
}

impl FromIterator<Elem> for List<Global> {
  fn from_iter<I: IntoIterator<Item = Elem>>(iter: I) -> Self {
    let mut list = Self::new();
    list.extend(iter);
    list
  }
}

impl<'a, A: Allocator> IntoIterator for &'a List<A> {
  type Item = Elem;
  type IntoIter = Iter<'a>;

  fn into_iter(self) -> Iter<'a> {
    self.iter()
  }
}

impl<A: Allocator, B: Allocator> PartialEq<List<B>> for List<A> {
  fn eq(&self, other: &List<B>) -> bool {
    self.len == other.len && self.iter().eq(other.iter())
  }
}

impl<A: Allocator> Eq for List<A> { }

/// Renders the list as `v1->v2->...->NULL`. An empty list renders as `NULL`.

impl<A: Allocator> fmt::Display for List<A> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    for x in self.iter() {
      write!(f, "{x}->")?;
    }

    f.write_str("NULL")
  }
}

impl<A: Allocator> fmt::Debug for List<A> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_list().entries(self.iter()).finish()
  }
}
