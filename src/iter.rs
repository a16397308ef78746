//! The iterator behind [`Once`](crate::Once).
//!
//! [`Iter`] holds its single pending element as an `Option<()>` and hands it
//! out with `Option::take`, so the first `next` yields `Some(())` and every
//! call after that yields `None`. The whole state machine is: element pending,
//! then spent.

use core::iter::FusedIterator;

/// A one-element iterator over `()`.
///
/// Created by iterating a [`Once`](crate::Once) value, either implicitly in a
/// `for` loop header or explicitly via [`Once::iter`](crate::Once::iter).
/// Reports an exact [`size_hint`](Iterator::size_hint) and stays at `None`
/// once exhausted.
#[derive(Clone, Debug)]
pub struct Iter {
   item: Option<()>,
}

impl Iter {
   /// Creates an iterator with its element still pending.
   #[inline]
   pub(crate) const fn new() -> Self {
      Self { item: Some(()) }
   }
}

impl Iterator for Iter {
   type Item = ();

   #[inline]
   fn next(&mut self) -> Option<()> {
      self.item.take()
   }

   #[inline]
   fn size_hint(&self) -> (usize, Option<usize>) {
      let len = self.len();
      (len, Some(len))
   }
}

impl DoubleEndedIterator for Iter {
   // A one-element sequence reads the same from either end.
   #[inline]
   fn next_back(&mut self) -> Option<()> {
      self.item.take()
   }
}

impl ExactSizeIterator for Iter {
   #[inline]
   fn len(&self) -> usize {
      usize::from(self.item.is_some())
   }
}

impl FusedIterator for Iter {}
