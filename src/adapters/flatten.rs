use core::fmt;
use core::ops::ControlFlow;

use crate::adapters::{Fuse, Map};
use crate::traits::{DoubleEndedIterable, FusedIterable, IntoIterable, Iterable};

/// Runs `f` on an `Option`'s contents and clears the slot if it reports
/// exhaustion.
#[inline]
fn and_then_or_clear<T, U>(opt: &mut Option<T>, f: impl FnOnce(&mut T) -> Option<U>) -> Option<U> {
    let result = f(opt.as_mut()?);
    if result.is_none() {
        *opt = None;
    }
    result
}

/// Shared engine of [`Flatten`] and [`FlatMap`].
///
/// Keeps one partially consumed inner iterable per traversal direction.
/// The front slot is refilled from the front of the (fused) outer
/// sequence, the back slot from its back; once the outer sequence is
/// spent from both directions, each cursor finishes by draining the
/// *other* cursor's slot, which is where the two meet in the middle.
#[derive(Clone, Debug)]
struct FlattenBase<I, U> {
    iter: Fuse<I>,
    front: Option<U>,
    back: Option<U>,
}

impl<I, U> FlattenBase<I, U>
where
    I: Iterable,
    I::Item: IntoIterable<IntoIter = U, Item = U::Item>,
    U: Iterable,
{
    #[inline]
    fn new(iter: I) -> Self {
        Self {
            iter: Fuse::new(iter),
            front: None,
            back: None,
        }
    }

    #[inline]
    fn next(&mut self) -> Option<U::Item> {
        loop {
            if let item @ Some(_) = and_then_or_clear(&mut self.front, Iterable::next) {
                return item;
            }
            match self.iter.next() {
                Some(inner) => self.front = Some(inner.into_iterable()),
                None => return and_then_or_clear(&mut self.back, Iterable::next),
            }
        }
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let (front_lower, front_upper) = self.front.as_ref().map_or((0, Some(0)), U::size_hint);
        let (back_lower, back_upper) = self.back.as_ref().map_or((0, Some(0)), U::size_hint);
        let lower = front_lower.saturating_add(back_lower);
        // An exact upper bound exists only when the outer sequence is
        // provably empty on both ends; anything still unexpanded could
        // hold any number of elements.
        match (self.iter.size_hint(), front_upper, back_upper) {
            ((0, Some(0)), Some(f), Some(b)) => (lower, f.checked_add(b)),
            _ => (lower, None),
        }
    }

    fn try_fold<Acc, B, G>(&mut self, mut acc: Acc, mut g: G) -> ControlFlow<B, Acc>
    where
        G: FnMut(Acc, U::Item) -> ControlFlow<B, Acc>,
    {
        if let Some(front) = &mut self.front {
            // An early break leaves the slot holding its remainder.
            acc = front.try_fold(acc, &mut g)?;
            self.front = None;
        }
        while let Some(inner) = self.iter.next() {
            let mut inner = inner.into_iterable();
            match inner.try_fold(acc, &mut g) {
                ControlFlow::Continue(folded) => acc = folded,
                ControlFlow::Break(b) => {
                    self.front = Some(inner);
                    return ControlFlow::Break(b);
                }
            }
        }
        if let Some(back) = &mut self.back {
            acc = back.try_fold(acc, &mut g)?;
            self.back = None;
        }
        ControlFlow::Continue(acc)
    }

    fn fold<Acc, G>(self, mut acc: Acc, mut g: G) -> Acc
    where
        G: FnMut(Acc, U::Item) -> Acc,
    {
        if let Some(front) = self.front {
            acc = front.fold(acc, &mut g);
        }
        acc = self.iter.fold(acc, |acc, inner| {
            inner.into_iterable().fold(acc, &mut g)
        });
        if let Some(back) = self.back {
            acc = back.fold(acc, &mut g);
        }
        acc
    }
}

impl<I, U> FlattenBase<I, U>
where
    I: DoubleEndedIterable,
    I::Item: IntoIterable<IntoIter = U, Item = U::Item>,
    U: DoubleEndedIterable,
{
    #[inline]
    fn next_back(&mut self) -> Option<U::Item> {
        loop {
            if let item @ Some(_) = and_then_or_clear(&mut self.back, DoubleEndedIterable::next_back)
            {
                return item;
            }
            match self.iter.next_back() {
                Some(inner) => self.back = Some(inner.into_iterable()),
                None => {
                    return and_then_or_clear(&mut self.front, DoubleEndedIterable::next_back)
                }
            }
        }
    }

    fn try_rfold<Acc, B, G>(&mut self, mut acc: Acc, mut g: G) -> ControlFlow<B, Acc>
    where
        G: FnMut(Acc, U::Item) -> ControlFlow<B, Acc>,
    {
        if let Some(back) = &mut self.back {
            acc = back.try_rfold(acc, &mut g)?;
            self.back = None;
        }
        while let Some(inner) = self.iter.next_back() {
            let mut inner = inner.into_iterable();
            match inner.try_rfold(acc, &mut g) {
                ControlFlow::Continue(folded) => acc = folded,
                ControlFlow::Break(b) => {
                    self.back = Some(inner);
                    return ControlFlow::Break(b);
                }
            }
        }
        if let Some(front) = &mut self.front {
            acc = front.try_rfold(acc, &mut g)?;
            self.front = None;
        }
        ControlFlow::Continue(acc)
    }
}

/// An iterable that flattens one level of nesting.
///
/// Created by [`Iterable::flatten`]. Double-ended when both the outer
/// sequence and the inner iterables are.
#[must_use = "iterables are lazy and do nothing unless consumed"]
pub struct Flatten<I: Iterable>
where
    I::Item: IntoIterable,
{
    base: FlattenBase<I, <I::Item as IntoIterable>::IntoIter>,
}

impl<I: Iterable> Clone for Flatten<I>
where
    I: Clone,
    I::Item: IntoIterable,
    <I::Item as IntoIterable>::IntoIter: Clone,
{
    #[inline]
    fn clone(&self) -> Self {
        Self {
            base: self.base.clone(),
        }
    }
}

impl<I: Iterable> fmt::Debug for Flatten<I>
where
    I: fmt::Debug,
    I::Item: IntoIterable,
    <I::Item as IntoIterable>::IntoIter: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Flatten").field("base", &self.base).finish()
    }
}

impl<I: Iterable> Flatten<I>
where
    I::Item: IntoIterable,
{
    #[inline]
    pub(crate) fn new(iter: I) -> Self {
        Self {
            base: FlattenBase::new(iter),
        }
    }
}

impl<I: Iterable> Iterable for Flatten<I>
where
    I::Item: IntoIterable,
{
    type Item = <I::Item as IntoIterable>::Item;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.base.next()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.base.size_hint()
    }

    #[inline]
    fn try_fold<Acc, B, G>(&mut self, init: Acc, g: G) -> ControlFlow<B, Acc>
    where
        G: FnMut(Acc, Self::Item) -> ControlFlow<B, Acc>,
    {
        self.base.try_fold(init, g)
    }

    #[inline]
    fn fold<Acc, G>(self, init: Acc, g: G) -> Acc
    where
        G: FnMut(Acc, Self::Item) -> Acc,
    {
        self.base.fold(init, g)
    }
}

impl<I: DoubleEndedIterable> DoubleEndedIterable for Flatten<I>
where
    I::Item: IntoIterable,
    <I::Item as IntoIterable>::IntoIter: DoubleEndedIterable,
{
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        self.base.next_back()
    }

    #[inline]
    fn try_rfold<Acc, B, G>(&mut self, init: Acc, g: G) -> ControlFlow<B, Acc>
    where
        G: FnMut(Acc, Self::Item) -> ControlFlow<B, Acc>,
    {
        self.base.try_rfold(init, g)
    }
}

impl<I: FusedIterable> FusedIterable for Flatten<I> where I::Item: IntoIterable {}

/// An iterable that maps each element to a sequence and flattens the
/// results.
///
/// Created by [`Iterable::flat_map`]; exactly a [`Map`] followed by a
/// [`Flatten`], sharing the same engine.
#[must_use = "iterables are lazy and do nothing unless consumed"]
pub struct FlatMap<I, U: IntoIterable, F> {
    base: FlattenBase<Map<I, F>, U::IntoIter>,
}

impl<I, U, F> Clone for FlatMap<I, U, F>
where
    I: Clone,
    U: IntoIterable,
    U::IntoIter: Clone,
    F: Clone,
{
    #[inline]
    fn clone(&self) -> Self {
        Self {
            base: self.base.clone(),
        }
    }
}

impl<I, U, F> fmt::Debug for FlatMap<I, U, F>
where
    I: fmt::Debug,
    U: IntoIterable,
    U::IntoIter: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FlatMap").field("base", &self.base).finish()
    }
}

impl<I, U, F> FlatMap<I, U, F>
where
    I: Iterable,
    U: IntoIterable,
    F: FnMut(I::Item) -> U,
{
    #[inline]
    pub(crate) fn new(iter: I, f: F) -> Self {
        Self {
            base: FlattenBase::new(Map::new(iter, f)),
        }
    }
}

impl<I, U, F> Iterable for FlatMap<I, U, F>
where
    I: Iterable,
    U: IntoIterable,
    F: FnMut(I::Item) -> U,
{
    type Item = U::Item;

    #[inline]
    fn next(&mut self) -> Option<U::Item> {
        self.base.next()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.base.size_hint()
    }

    #[inline]
    fn try_fold<Acc, B, G>(&mut self, init: Acc, g: G) -> ControlFlow<B, Acc>
    where
        G: FnMut(Acc, U::Item) -> ControlFlow<B, Acc>,
    {
        self.base.try_fold(init, g)
    }

    #[inline]
    fn fold<Acc, G>(self, init: Acc, g: G) -> Acc
    where
        G: FnMut(Acc, U::Item) -> Acc,
    {
        self.base.fold(init, g)
    }
}

impl<I, U, F> DoubleEndedIterable for FlatMap<I, U, F>
where
    I: DoubleEndedIterable,
    U: IntoIterable,
    U::IntoIter: DoubleEndedIterable,
    F: FnMut(I::Item) -> U,
{
    #[inline]
    fn next_back(&mut self) -> Option<U::Item> {
        self.base.next_back()
    }

    #[inline]
    fn try_rfold<Acc, B, G>(&mut self, init: Acc, g: G) -> ControlFlow<B, Acc>
    where
        G: FnMut(Acc, U::Item) -> ControlFlow<B, Acc>,
    {
        self.base.try_rfold(init, g)
    }
}

impl<I, U, F> FusedIterable for FlatMap<I, U, F>
where
    I: FusedIterable,
    U: IntoIterable,
    F: FnMut(I::Item) -> U,
{
}

#[cfg(test)]
mod tests {
    use crate::sources::{from_vec, range};
    use crate::traits::{DoubleEndedIterable, Iterable};
    use alloc::vec;
    use alloc::vec::Vec;
    use proptest::prelude::*;

    #[test]
    fn flattens_one_level() {
        let flat: Vec<i32> = from_vec(vec![vec![1, 2], vec![], vec![3]])
            .map(from_vec)
            .flatten()
            .collect();
        assert_eq!(flat, [1, 2, 3]);
    }

    #[test]
    fn flat_map_expands_each_element() {
        let expanded: Vec<i32> = from_vec(vec![1, 2, 3]).flat_map(|x| range(0, x)).collect();
        assert_eq!(expanded, [0, 0, 1, 0, 1, 2]);
    }

    #[test]
    fn back_traversal_meets_in_the_middle() {
        let mut iter = from_vec(vec![1, 2, 3]).flat_map(|x| range(0, x));
        assert_eq!(iter.next(), Some(0)); // from [0]
        assert_eq!(iter.next_back(), Some(2)); // from [0, 1, 2]
        assert_eq!(iter.next_back(), Some(1));
        assert_eq!(iter.next(), Some(0)); // from [0, 1]
        assert_eq!(iter.next(), Some(1));
        assert_eq!(iter.next(), Some(0)); // the back slot, drained frontwards
        assert_eq!(iter.next(), None);
        assert_eq!(iter.next_back(), None);
    }

    #[test]
    fn size_hint_is_exact_only_when_fully_expanded() {
        let mut iter = from_vec(vec![vec![1, 2], vec![3]]).map(from_vec).flatten();
        // Unexpanded outer elements leave the upper bound open.
        assert_eq!(iter.size_hint(), (0, None));
        iter.next();
        assert_eq!(iter.size_hint().0, 1);
    }

    #[test]
    fn try_fold_resumes_mid_inner() {
        let mut iter = from_vec(vec![vec![1, 2, 3], vec![4, 5]]).map(from_vec).flatten();
        assert_eq!(iter.find(|&x| x == 2), Some(2));
        // The remainder of the first inner sequence is still there.
        assert_eq!(iter.next(), Some(3));
        assert_eq!(iter.next(), Some(4));
    }

    proptest! {
        #[test]
        fn matches_core_flatten(data in proptest::collection::vec(proptest::collection::vec(any::<u8>(), 0..5), 0..6)) {
            let ours: Vec<u8> = from_vec(data.clone()).map(from_vec).flatten().collect();
            let theirs: Vec<u8> = data.into_iter().flatten().collect();
            prop_assert_eq!(ours, theirs);
        }
    }
}
