use core::fmt;
use core::ops::ControlFlow;

use crate::traits::{DoubleEndedIterable, FusedIterable, Iterable};

/// An iterable that yields only the elements satisfying a predicate.
///
/// Created by [`Iterable::filter`]. A failing element is skipped, not
/// terminal: everything after it remains reachable, which is what
/// distinguishes `filter` from [`take_while`](Iterable::take_while).
#[derive(Clone)]
#[must_use = "iterables are lazy and do nothing unless consumed"]
pub struct Filter<I, P> {
    iter: I,
    predicate: P,
}

impl<I, P> Filter<I, P> {
    #[inline]
    pub(crate) fn new(iter: I, predicate: P) -> Self {
        Self { iter, predicate }
    }
}

impl<I: fmt::Debug, P> fmt::Debug for Filter<I, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Filter").field("iter", &self.iter).finish_non_exhaustive()
    }
}

impl<I, P> Iterable for Filter<I, P>
where
    I: Iterable,
    P: FnMut(&I::Item) -> bool,
{
    type Item = I::Item;

    #[inline]
    fn next(&mut self) -> Option<I::Item> {
        self.iter.find(&mut self.predicate)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        // No survivor can be promised.
        (0, self.iter.size_hint().1)
    }

    /// Counts by summing the predicate's verdicts instead of re-deriving a
    /// bespoke counting loop.
    #[inline]
    fn count(self) -> usize {
        let mut predicate = self.predicate;
        self.iter.map(|x| predicate(&x) as usize).fold(0, |acc, n| acc + n)
    }

    #[inline]
    fn try_fold<Acc, B, G>(&mut self, init: Acc, mut g: G) -> ControlFlow<B, Acc>
    where
        G: FnMut(Acc, I::Item) -> ControlFlow<B, Acc>,
    {
        let predicate = &mut self.predicate;
        self.iter.try_fold(init, |acc, x| {
            if predicate(&x) {
                g(acc, x)
            } else {
                ControlFlow::Continue(acc)
            }
        })
    }

    #[inline]
    fn fold<Acc, G>(self, init: Acc, mut g: G) -> Acc
    where
        G: FnMut(Acc, I::Item) -> Acc,
    {
        let mut predicate = self.predicate;
        self.iter
            .fold(init, |acc, x| if predicate(&x) { g(acc, x) } else { acc })
    }
}

impl<I, P> DoubleEndedIterable for Filter<I, P>
where
    I: DoubleEndedIterable,
    P: FnMut(&I::Item) -> bool,
{
    #[inline]
    fn next_back(&mut self) -> Option<I::Item> {
        self.iter.rfind(&mut self.predicate)
    }

    #[inline]
    fn try_rfold<Acc, B, G>(&mut self, init: Acc, mut g: G) -> ControlFlow<B, Acc>
    where
        G: FnMut(Acc, I::Item) -> ControlFlow<B, Acc>,
    {
        let predicate = &mut self.predicate;
        self.iter.try_rfold(init, |acc, x| {
            if predicate(&x) {
                g(acc, x)
            } else {
                ControlFlow::Continue(acc)
            }
        })
    }

    #[inline]
    fn rfold<Acc, G>(self, init: Acc, mut g: G) -> Acc
    where
        G: FnMut(Acc, I::Item) -> Acc,
    {
        let mut predicate = self.predicate;
        self.iter
            .rfold(init, |acc, x| if predicate(&x) { g(acc, x) } else { acc })
    }
}

impl<I, P> FusedIterable for Filter<I, P>
where
    I: FusedIterable,
    P: FnMut(&I::Item) -> bool,
{
}

#[cfg(test)]
mod tests {
    use crate::sources::from_vec;
    use crate::traits::{DoubleEndedIterable, Iterable};
    use alloc::vec;
    use alloc::vec::Vec;
    use proptest::prelude::*;

    #[test]
    fn skips_non_matching() {
        let mut iter = from_vec(vec![1, 2, 3, 4]).filter(|x| x % 2 == 0);
        assert_eq!(iter.size_hint(), (0, Some(4)));
        assert_eq!(iter.next(), Some(2));
        assert_eq!(iter.next(), Some(4));
        assert_eq!(iter.next(), None);
    }

    #[test]
    fn count_via_predicate_sum() {
        let count = from_vec(vec![1, 2, 3, 4, 5]).filter(|x| x % 2 == 1).count();
        assert_eq!(count, 3);
    }

    #[test]
    fn backwards_filtering() {
        let mut iter = from_vec(vec![1, 2, 3, 4]).filter(|x| x % 2 == 0);
        assert_eq!(iter.next_back(), Some(4));
        assert_eq!(iter.next_back(), Some(2));
        assert_eq!(iter.next_back(), None);
    }

    proptest! {
        #[test]
        fn matches_core_filter(collection in any::<Vec<u8>>(), threshold in any::<u8>()) {
            let ours: Vec<u8> = from_vec(collection.clone())
                .filter(|x| *x < threshold)
                .collect();
            let theirs: Vec<u8> = collection.into_iter().filter(|x| *x < threshold).collect();
            prop_assert_eq!(ours, theirs);
        }
    }
}
