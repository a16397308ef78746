//! The single-iteration sequence value.
//!
//! This module provides [`Once`], a zero-sized value that yields exactly one
//! element when iterated, and [`ONCE`], the shared constant callers are
//! expected to name in loop headers. The element type is `()`: element values
//! are never inspected, only the fact that iteration happens once matters.

use crate::iter::Iter;

/// A sequence that yields exactly one element when iterated.
///
/// Iterating a `Once` with a `for` loop runs the body exactly once, turning
/// `break` into a scoped early exit: control resumes immediately after the
/// loop block. The type is zero-sized and stateless, so every iteration is
/// independent — sequential reuse and unbounded concurrent use are both fine
/// with no synchronization.
///
/// Most callers want the [`ONCE`] constant rather than constructing values.
///
/// # Examples
///
/// ```rust
/// use loop_once::ONCE;
///
/// let mut outcome = "fell through";
/// for _ in ONCE {
///    if "input".len() > 3 {
///       outcome = "bailed early";
///       break;
///    }
/// }
/// assert_eq!(outcome, "bailed early");
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Once;

/// The shared single-iteration sequence.
///
/// `Once` is a zero-sized `Copy` type, so this one constant serves every call
/// site in the process; there is no state to share or race on.
///
/// ```rust
/// use loop_once::ONCE;
///
/// let mut runs = 0;
/// for _ in ONCE {
///    runs += 1;
/// }
/// for _ in ONCE {
///    runs += 1;
/// }
/// assert_eq!(runs, 2);
/// ```
pub const ONCE: Once = Once;

impl Once {
   /// Creates a new `Once`.
   ///
   /// Every `Once` is identical to [`ONCE`]; this constructor exists for call
   /// sites where an expression reads better than the constant.
   #[inline]
   #[must_use]
   pub const fn new() -> Self {
      Once
   }

   /// Returns the one-element iterator without consuming the value.
   ///
   /// `for _ in ONCE` does this implicitly; `iter` is for driving the
   /// iterator by hand.
   ///
   /// # Examples
   ///
   /// ```rust
   /// use loop_once::ONCE;
   ///
   /// let mut it = ONCE.iter();
   /// assert_eq!(it.next(), Some(()));
   /// assert_eq!(it.next(), None);
   /// ```
   #[inline]
   #[must_use]
   pub const fn iter(&self) -> Iter {
      Iter::new()
   }
}

impl IntoIterator for Once {
   type Item = ();
   type IntoIter = Iter;

   #[inline]
   fn into_iter(self) -> Iter {
      Iter::new()
   }
}

impl IntoIterator for &Once {
   type Item = ();
   type IntoIter = Iter;

   #[inline]
   fn into_iter(self) -> Iter {
      Iter::new()
   }
}
