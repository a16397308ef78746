use loop_once::{Iter, ONCE};

#[test]
fn test_yields_one_element_then_none() {
   let mut it = ONCE.iter();
   assert_eq!(it.next(), Some(()));
   assert_eq!(it.next(), None);
}

#[test]
fn test_fused_after_exhaustion() {
   let mut it = ONCE.into_iter();
   assert_eq!(it.next(), Some(()));
   // None must be permanent, however many times we ask.
   for _ in 0..5 {
      assert_eq!(it.next(), None);
   }
}

#[test]
fn test_size_hint_is_exact() {
   let mut it = ONCE.iter();
   assert_eq!(it.size_hint(), (1, Some(1)));
   assert_eq!(it.len(), 1);

   it.next();
   assert_eq!(it.size_hint(), (0, Some(0)));
   assert_eq!(it.len(), 0);
}

#[test]
fn test_count_and_last() {
   assert_eq!(ONCE.iter().count(), 1);
   assert_eq!(ONCE.iter().last(), Some(()));
}

#[test]
fn test_double_ended_reads_the_same() {
   let mut it = ONCE.iter();
   assert_eq!(it.next_back(), Some(()));
   assert_eq!(it.next_back(), None);
   assert_eq!(it.next(), None);

   let mut runs = 0;
   for _ in ONCE.iter().rev() {
      runs += 1;
   }
   assert_eq!(runs, 1);
}

#[test]
fn test_clone_is_independent() {
   let mut it = ONCE.iter();
   let mut fresh = it.clone();

   assert_eq!(it.next(), Some(()));
   assert_eq!(it.next(), None);

   // The clone still holds its own pending element.
   assert_eq!(fresh.len(), 1);
   assert_eq!(fresh.next(), Some(()));
}

#[test]
fn test_fresh_iterator_per_iteration_site() {
   // Driving one iterator to exhaustion has no effect on the next.
   let spent: Iter = {
      let mut it = ONCE.iter();
      it.next();
      it
   };
   assert_eq!(spent.len(), 0);
   assert_eq!(ONCE.iter().len(), 1);
}
