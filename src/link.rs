use crate::prelude::*;
use crate::Elem;
use crate::Error;

/// The most slots a store can hold. `u32::MAX` itself is `Link::NONE`.

pub(crate) const MAX_SLOTS: usize = u32::MAX as usize;

/// The smallest number of slots added when the store grows.

pub(crate) const MIN_CAPACITY: usize = 4;

/// A slot index into a `Store`, or `NONE`.

#[derive(Clone, Copy, PartialEq, Eq)]
pub(crate) struct Link(u32);

#[derive(Clone, Copy)]
pub(crate) struct Node {
  pub(crate) value: Elem,
  pub(crate) next: Link,
}

/// Nodes of one list, addressed by `Link`.
///
/// Slots are either live (reachable from the list head) or vacant. Vacant
/// slots form the free chain through their `next` links and are handed out
/// again before the backing vector grows.

pub(crate) struct Store<A: Allocator> {
  slots: Vec<Node, A>,
  free: Link,
  free_len: usize,
}

impl Link {
  pub(crate) const NONE: Self = Self(u32::MAX);

  #[inline(always)]
  pub(crate) fn at(i: usize) -> Self {
    debug_assert!(i < MAX_SLOTS);
    Self(i as u32)
  }

  #[inline(always)]
  pub(crate) fn get(self) -> Option<usize> {
    if self == Self::NONE { None } else { Some(self.0 as usize) }
  }

  #[inline(always)]
  pub(crate) fn is_none(self) -> bool {
    self == Self::NONE
  }
}

impl fmt::Debug for Link {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self.get() {
      None => f.write_str("NONE"),
      Some(i) => write!(f, "#{i}"),
    }
  }
}

impl<A: Allocator> Store<A> {
  pub(crate) fn new_in(allocator: A) -> Self {
    Self {
      slots: Vec::new_in(allocator),
      free: Link::NONE,
      free_len: 0,
    }
  }

  #[inline(always)]
  pub(crate) fn node(&self, k: Link) -> &Node {
    &self.slots[k.0 as usize]
  }

  #[inline(always)]
  pub(crate) fn node_mut(&mut self, k: Link) -> &mut Node {
    &mut self.slots[k.0 as usize]
  }

  #[inline(always)]
  pub(crate) fn nodes(&self) -> &[Node] {
    &self.slots
  }

  pub(crate) fn capacity(&self) -> usize {
    self.slots.capacity()
  }

  pub(crate) fn allocator(&self) -> &A {
    self.slots.allocator()
  }

  /// Places `node` in a vacant slot, growing the store if there is none.
  ///
  /// On error the store is unchanged.

  #[inline(always)]
  pub(crate) fn insert(&mut self, node: Node) -> Result<Link, Error> {
    if let Some(i) = self.free.get() {
      let k = self.free;
      let slot = &mut self.slots[i];
      self.free = slot.next;
      self.free_len = self.free_len - 1;
      *slot = node;
      return Ok(k);
    }

    if self.slots.len() == self.slots.capacity() {
      self.grow()?;
    }

    let k = Link::at(self.slots.len());
    self.slots.push(node);
    Ok(k)
  }

  /// Vacates the slot at `k` and returns the value it held.

  #[inline(always)]
  pub(crate) fn remove(&mut self, k: Link) -> Elem {
    let slot = &mut self.slots[k.0 as usize];
    let value = slot.value;
    slot.next = self.free;
    self.free = k;
    self.free_len = self.free_len + 1;
    value
  }

  pub(crate) fn clear(&mut self) {
    self.slots.clear();
    self.free = Link::NONE;
    self.free_len = 0;
  }

  /// Makes room for at least `additional` more inserts without growing.

  pub(crate) fn reserve(&mut self, additional: usize) -> Result<(), Error> {
    let n = self.slots.len();
    let vacant = self.free_len + (self.slots.capacity() - n);

    if additional <= vacant {
      return Ok(());
    }

    let k = additional - self.free_len;

    if k > MAX_SLOTS - n {
      return Err(Error::TooLarge);
    }

    self.reserve_exact(k)
  }

  #[inline(never)]
  #[cold]
  fn grow(&mut self) -> Result<(), Error> {
    // Called only when every slot is live, so `capacity == len`.

    let n = self.slots.capacity();
    let k = min(max(n / 2, MIN_CAPACITY), MAX_SLOTS - n);

    if k == 0 {
      return Err(Error::TooLarge);
    }

    self.reserve_exact(k)
  }

  fn reserve_exact(&mut self, additional: usize) -> Result<(), Error> {
    let n = self.slots.len() + additional;

    let Ok(layout) = Layout::array::<Node>(n) else {
      return Err(Error::TooLarge);
    };

    if self.slots.try_reserve_exact(additional).is_err() {
      log::debug!("intlist: failed to grow node store to {} slots", n);
      return Err(Error::ParentAllocatorFailed(layout));
    }

    log::trace!("intlist: node store grew to {} slots", self.slots.capacity());
    Ok(())
  }

  /// Moves the `len` live nodes reachable from `head` into slots `0 .. len`
  /// in list order, drops every vacant slot, and returns the new head and
  /// tail links.

  pub(crate) fn compact(&mut self, head: Link, len: usize) -> (Link, Link) {
    // Mark vacant slots with `NONE` and live slots with their final index.
    // The free chain and the list links are consumed in the process.

    let mut k = self.free;

    while let Some(i) = k.get() {
      k = self.slots[i].next;
      self.slots[i].next = Link::NONE;
    }

    let mut k = head;
    let mut j = 0;

    while let Some(i) = k.get() {
      k = self.slots[i].next;
      self.slots[i].next = Link::at(j);
      j = j + 1;
    }

    debug_assert!(j == len);

    // Each swap puts one live node in its final slot.

    for i in 0 .. self.slots.len() {
      while let Some(t) = self.slots[i].next.get() {
        if t == i { break; }
        self.slots.swap(i, t);
      }
    }

    self.slots.truncate(len);

    for i in 0 .. len {
      self.slots[i].next = if i + 1 < len { Link::at(i + 1) } else { Link::NONE };
    }

    self.slots.shrink_to_fit();
    self.free = Link::NONE;
    self.free_len = 0;

    log::debug!("intlist: compacted node store to {} slots", len);

    if len == 0 {
      (Link::NONE, Link::NONE)
    } else {
      (Link::at(0), Link::at(len - 1))
    }
  }
}
