use crate::prelude::*;
use crate::link::Link;
use crate::link::Node;
use crate::Elem;

/// A front-to-back traversal of a [`List`](crate::List).
///
/// Created by [`List::iter`](crate::List::iter).

#[derive(Clone)]
pub struct Iter<'a> {
  nodes: &'a [Node],
  next: Link,
  remaining: usize,
}

impl<'a> Iter<'a> {
  pub(crate) fn new(nodes: &'a [Node], head: Link, len: usize) -> Self {
    Self { nodes, next: head, remaining: len }
  }
}

impl<'a> Iterator for Iter<'a> {
  type Item = Elem;

  #[inline(always)]
  fn next(&mut self) -> Option<Elem> {
    let i = self.next.get()?;
    let node = &self.nodes[i];
    self.next = node.next;
    self.remaining = self.remaining - 1;
    Some(node.value)
  }

  #[inline(always)]
  fn size_hint(&self) -> (usize, Option<usize>) {
    (self.remaining, Some(self.remaining))
  }
}

impl<'a> ExactSizeIterator for Iter<'a> { }

impl<'a> FusedIterator for Iter<'a> { }

impl<'a> fmt::Debug for Iter<'a> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_list().entries(self.clone()).finish()
  }
}
