use core::ops::ControlFlow;

use crate::traits::{
    DoubleEndedIterable, ExactSizeIterable, FusedIterable, Iterable,
};

/// An iterable that yields at most the first `n` elements.
///
/// Created by [`Iterable::take`]. The remaining-count is decremented on
/// every successful pull, and the folds stop the *inner* traversal the
/// moment the budget runs out, so a single `fold` over a `Take` never
/// consumes more than `n` inner elements.
#[derive(Clone, Debug)]
#[must_use = "iterables are lazy and do nothing unless consumed"]
pub struct Take<I> {
    iter: I,
    n: usize,
}

impl<I> Take<I> {
    #[inline]
    pub(crate) fn new(iter: I, n: usize) -> Self {
        Self { iter, n }
    }
}

impl<I: Iterable> Iterable for Take<I> {
    type Item = I::Item;

    #[inline]
    fn next(&mut self) -> Option<I::Item> {
        if self.n == 0 {
            return None;
        }
        self.n -= 1;
        self.iter.next()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.n == 0 {
            return (0, Some(0));
        }
        let (lower, upper) = self.iter.size_hint();
        let upper = match upper {
            Some(u) if u < self.n => Some(u),
            _ => Some(self.n),
        };
        (lower.min(self.n), upper)
    }

    #[inline]
    fn nth(&mut self, n: usize) -> Option<I::Item> {
        if self.n > n {
            self.n -= n + 1;
            self.iter.nth(n)
        } else {
            if self.n > 0 {
                self.iter.nth(self.n - 1);
                self.n = 0;
            }
            None
        }
    }

    #[inline]
    fn try_fold<Acc, B, G>(&mut self, init: Acc, mut g: G) -> ControlFlow<B, Acc>
    where
        G: FnMut(Acc, I::Item) -> ControlFlow<B, Acc>,
    {
        if self.n == 0 {
            return ControlFlow::Continue(init);
        }
        let n = &mut self.n;
        let result = self.iter.try_fold(init, |acc, x| {
            *n -= 1;
            match g(acc, x) {
                ControlFlow::Continue(acc) => {
                    if *n == 0 {
                        // Budget exhausted: stop the inner fold without
                        // pulling another element.
                        ControlFlow::Break(ControlFlow::Continue(acc))
                    } else {
                        ControlFlow::Continue(acc)
                    }
                }
                ControlFlow::Break(b) => ControlFlow::Break(ControlFlow::Break(b)),
            }
        });
        match result {
            ControlFlow::Continue(acc) => ControlFlow::Continue(acc),
            ControlFlow::Break(inner) => inner,
        }
    }
}

impl<I> DoubleEndedIterable for Take<I>
where
    I: DoubleEndedIterable + ExactSizeIterable,
{
    #[inline]
    fn next_back(&mut self) -> Option<I::Item> {
        if self.n == 0 {
            return None;
        }
        let n = self.n;
        self.n -= 1;
        // Discard whatever lies beyond the take window, then yield its
        // last element.
        self.iter.nth_back(self.iter.len().saturating_sub(n))
    }
}

impl<I: ExactSizeIterable> ExactSizeIterable for Take<I> {
    #[inline]
    fn len(&self) -> usize {
        self.iter.len().min(self.n)
    }
}

impl<I: FusedIterable> FusedIterable for Take<I> {}

#[cfg(test)]
mod tests {
    use crate::sources::{from_vec, repeat};
    use crate::traits::{DoubleEndedIterable, Iterable};
    use alloc::vec;
    use alloc::vec::Vec;
    use proptest::prelude::*;

    #[test]
    fn bounds_an_endless_source() {
        let taken: Vec<i32> = repeat(5).take(3).collect();
        assert_eq!(taken, [5, 5, 5]);
    }

    #[test]
    fn fold_never_overdraws() {
        let mut pulls = 0;
        let source = crate::sources::from_fn(|| {
            pulls += 1;
            Some(pulls)
        });
        let sum = source.take(3).fold(0, |acc, x| acc + x);
        assert_eq!(sum, 1 + 2 + 3);
        assert_eq!(pulls, 3);
    }

    #[test]
    fn size_hint_clamps() {
        assert_eq!(from_vec(vec![1, 2, 3]).take(2).size_hint(), (2, Some(2)));
        assert_eq!(from_vec(vec![1]).take(5).size_hint(), (1, Some(1)));
        assert_eq!(repeat(0).take(4).size_hint(), (0, Some(4)));
        assert_eq!(from_vec(vec![1]).take(0).size_hint(), (0, Some(0)));
    }

    #[test]
    fn nth_spends_the_budget() {
        let mut iter = from_vec(vec![1, 2, 3, 4, 5]).take(3);
        assert_eq!(iter.nth(1), Some(2));
        assert_eq!(iter.nth(1), None);
        assert_eq!(iter.next(), None);
    }

    #[test]
    fn take_from_the_back() {
        let mut iter = from_vec(vec![1, 2, 3, 4, 5]).take(3);
        assert_eq!(iter.next_back(), Some(3));
        assert_eq!(iter.next_back(), Some(2));
        assert_eq!(iter.next(), Some(1));
        assert_eq!(iter.next(), None);
        assert_eq!(iter.next_back(), None);
    }

    proptest! {
        #[test]
        fn matches_core_take(collection in any::<Vec<u8>>(), n in 0..12usize) {
            let ours: Vec<u8> = from_vec(collection.clone()).take(n).collect();
            let theirs: Vec<u8> = collection.into_iter().take(n).collect();
            prop_assert_eq!(ours, theirs);
        }
    }
}
