use core::fmt;
use core::ops::ControlFlow;

use crate::traits::{FusedIterable, Iterable};

/// An iterable that ends at the first element failing a predicate.
///
/// Created by [`Iterable::take_while`]. The failing element itself is
/// *discarded*, not yielded, and the adapter latches shut: every later
/// call returns `None` even if the inner iterable has more to give. A
/// [`Filter`](crate::Filter) with the same predicate would instead skip
/// the failing element and keep the rest reachable.
#[derive(Clone)]
#[must_use = "iterables are lazy and do nothing unless consumed"]
pub struct TakeWhile<I, P> {
    iter: I,
    predicate: P,
    done: bool,
}

impl<I, P> TakeWhile<I, P> {
    #[inline]
    pub(crate) fn new(iter: I, predicate: P) -> Self {
        Self {
            iter,
            predicate,
            done: false,
        }
    }
}

impl<I: fmt::Debug, P> fmt::Debug for TakeWhile<I, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TakeWhile")
            .field("iter", &self.iter)
            .field("done", &self.done)
            .finish_non_exhaustive()
    }
}

impl<I, P> Iterable for TakeWhile<I, P>
where
    I: Iterable,
    P: FnMut(&I::Item) -> bool,
{
    type Item = I::Item;

    #[inline]
    fn next(&mut self) -> Option<I::Item> {
        if self.done {
            return None;
        }
        match self.iter.next() {
            Some(x) if (self.predicate)(&x) => Some(x),
            Some(_) => {
                self.done = true;
                None
            }
            None => None,
        }
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.done {
            (0, Some(0))
        } else {
            (0, self.iter.size_hint().1)
        }
    }

    #[inline]
    fn try_fold<Acc, B, G>(&mut self, init: Acc, mut g: G) -> ControlFlow<B, Acc>
    where
        G: FnMut(Acc, I::Item) -> ControlFlow<B, Acc>,
    {
        if self.done {
            return ControlFlow::Continue(init);
        }
        let predicate = &mut self.predicate;
        let done = &mut self.done;
        let result = self.iter.try_fold(init, |acc, x| {
            if predicate(&x) {
                match g(acc, x) {
                    ControlFlow::Continue(acc) => ControlFlow::Continue(acc),
                    ControlFlow::Break(b) => ControlFlow::Break(ControlFlow::Break(b)),
                }
            } else {
                *done = true;
                ControlFlow::Break(ControlFlow::Continue(acc))
            }
        });
        match result {
            ControlFlow::Continue(acc) => ControlFlow::Continue(acc),
            ControlFlow::Break(inner) => inner,
        }
    }
}

impl<I, P> FusedIterable for TakeWhile<I, P>
where
    I: FusedIterable,
    P: FnMut(&I::Item) -> bool,
{
}

#[cfg(test)]
mod tests {
    use crate::sources::from_vec;
    use crate::traits::Iterable;
    use alloc::vec;
    use alloc::vec::Vec;
    use proptest::prelude::*;

    #[test]
    fn truncates_and_discards_the_first_failure() {
        let data = vec![-1, 0, 1];
        let mut inner = from_vec(data.clone());
        {
            let taken: Vec<i32> = inner.by_ref().take_while(|x| *x < 0).collect();
            assert_eq!(taken, [-1]);
        }
        // The failing element 0 was consumed and discarded by take_while;
        // only 1 survives downstream.
        assert_eq!(inner.next(), Some(1));

        // Filter over the same data keeps the rest reachable instead.
        let filtered: Vec<i32> = from_vec(data).filter(|x| *x < 0).collect();
        assert_eq!(filtered, [-1]);
    }

    #[test]
    fn latches_shut() {
        let mut iter = from_vec(vec![1, 9, 2]).take_while(|x| *x < 5);
        assert_eq!(iter.next(), Some(1));
        assert_eq!(iter.next(), None);
        assert_eq!(iter.next(), None);
        assert_eq!(iter.size_hint(), (0, Some(0)));
    }

    #[test]
    fn fold_stops_at_the_boundary() {
        let sum = from_vec(vec![1, 2, 9, 4]).take_while(|x| *x < 5).fold(0, |a, b| a + b);
        assert_eq!(sum, 3);
    }

    proptest! {
        #[test]
        fn matches_core_take_while(collection in any::<Vec<u8>>(), bound in any::<u8>()) {
            let ours: Vec<u8> = from_vec(collection.clone()).take_while(|x| *x < bound).collect();
            let theirs: Vec<u8> = collection.into_iter().take_while(|x| *x < bound).collect();
            prop_assert_eq!(ours, theirs);
        }
    }
}
