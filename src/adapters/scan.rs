use core::fmt;
use core::ops::ControlFlow;

use crate::traits::Iterable;

/// A fold that yields its intermediate results.
///
/// Created by [`Iterable::scan`]. The closure may mutate the carried state
/// and decide per element whether to produce a value.
///
/// A `None` from the closure is handed to the caller as-is and does *not*
/// latch the adapter: if the caller keeps pulling, the closure is invoked
/// again for later elements. (Any single `fold`/`try_fold` call still
/// stops at the first `None`, mirroring what a `next` loop would do.) This
/// asymmetry with [`MapWhile`](crate::MapWhile) is deliberate, documented
/// behavior; wrap the scan in [`fuse`](Iterable::fuse) to pin the sequence
/// shut at the first `None`.
#[derive(Clone)]
#[must_use = "iterables are lazy and do nothing unless consumed"]
pub struct Scan<I, St, F> {
    iter: I,
    state: St,
    f: F,
}

impl<I, St, F> Scan<I, St, F> {
    #[inline]
    pub(crate) fn new(iter: I, state: St, f: F) -> Self {
        Self { iter, state, f }
    }
}

impl<I: fmt::Debug, St: fmt::Debug, F> fmt::Debug for Scan<I, St, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Scan")
            .field("iter", &self.iter)
            .field("state", &self.state)
            .finish_non_exhaustive()
    }
}

impl<B, I, St, F> Iterable for Scan<I, St, F>
where
    I: Iterable,
    F: FnMut(&mut St, I::Item) -> Option<B>,
{
    type Item = B;

    #[inline]
    fn next(&mut self) -> Option<B> {
        let x = self.iter.next()?;
        (self.f)(&mut self.state, x)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        // The closure may cut the sequence short at any point.
        (0, self.iter.size_hint().1)
    }

    #[inline]
    fn try_fold<Acc, R, G>(&mut self, init: Acc, mut g: G) -> ControlFlow<R, Acc>
    where
        G: FnMut(Acc, B) -> ControlFlow<R, Acc>,
    {
        let state = &mut self.state;
        let f = &mut self.f;
        let result = self.iter.try_fold(init, |acc, x| match f(state, x) {
            Some(y) => match g(acc, y) {
                ControlFlow::Continue(acc) => ControlFlow::Continue(acc),
                ControlFlow::Break(r) => ControlFlow::Break(ControlFlow::Break(r)),
            },
            None => ControlFlow::Break(ControlFlow::Continue(acc)),
        });
        match result {
            ControlFlow::Continue(acc) => ControlFlow::Continue(acc),
            ControlFlow::Break(inner) => inner,
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::sources::from_vec;
    use crate::traits::Iterable;
    use alloc::vec;
    use alloc::vec::Vec;
    use proptest::prelude::*;

    #[test]
    fn running_totals() {
        let totals: Vec<i32> = from_vec(vec![1, 2, 3, 4])
            .scan(0, |acc, x| {
                *acc += x;
                Some(*acc)
            })
            .collect();
        assert_eq!(totals, [1, 3, 6, 10]);
    }

    #[test]
    fn none_passes_through_without_latching() {
        let mut iter = from_vec(vec![1, 0, 3]).scan((), |(), x| {
            if x == 0 {
                None
            } else {
                Some(x)
            }
        });
        assert_eq!(iter.next(), Some(1));
        // The zero produces None...
        assert_eq!(iter.next(), None);
        // ...but the scan has not latched: pulling again resumes.
        assert_eq!(iter.next(), Some(3));
        assert_eq!(iter.next(), None);
    }

    #[test]
    fn fused_scan_stays_shut() {
        let mut iter = from_vec(vec![1, 0, 3])
            .scan((), |(), x| if x == 0 { None } else { Some(x) })
            .fuse();
        assert_eq!(iter.next(), Some(1));
        assert_eq!(iter.next(), None);
        assert_eq!(iter.next(), None);
    }

    proptest! {
        #[test]
        fn matches_core_scan(collection in any::<Vec<u8>>()) {
            let ours: Vec<u32> = from_vec(collection.clone())
                .scan(0u32, |acc, x| {
                    *acc = acc.wrapping_add(u32::from(x));
                    Some(*acc)
                })
                .collect();
            let theirs: Vec<u32> = collection
                .into_iter()
                .scan(0u32, |acc, x| {
                    *acc = acc.wrapping_add(u32::from(x));
                    Some(*acc)
                })
                .collect();
            prop_assert_eq!(ours, theirs);
        }
    }
}
