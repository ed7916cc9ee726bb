use core::ops::ControlFlow;

use crate::traits::{DoubleEndedIterable, FusedIterable, Iterable, Shortfall};

/// An iterable that runs one sequence to exhaustion, then a second.
///
/// Created by [`Iterable::chain`].
///
/// The sides are stored as `Option`s so no separate flag is needed to
/// remember which part is spent: the side a traversal direction exhausts
/// is dropped to `None`, and later calls go straight to the other side.
/// Only the side "first" in the traversal direction gets fused this way;
/// the far side keeps its own resumption semantics.
#[derive(Clone, Debug)]
#[must_use = "iterables are lazy and do nothing unless consumed"]
pub struct Chain<A, B> {
    a: Option<A>,
    b: Option<B>,
}

impl<A, B> Chain<A, B> {
    #[inline]
    pub(crate) fn new(a: A, b: B) -> Self {
        Self {
            a: Some(a),
            b: Some(b),
        }
    }
}

/// Calls an iterable method and drops the side to `None` if it reports
/// exhaustion.
macro_rules! fuse {
    ($self:ident . $side:ident . $($call:tt)+) => {
        match $self.$side {
            Some(ref mut side) => match side.$($call)+ {
                None => {
                    $self.$side = None;
                    None
                }
                item => item,
            },
            None => None,
        }
    };
}

/// Calls an iterable method on a side that may already be spent, without
/// fusing it.
macro_rules! maybe {
    ($self:ident . $side:ident . $($call:tt)+) => {
        match $self.$side {
            Some(ref mut side) => side.$($call)+,
            None => None,
        }
    };
}

impl<A, B> Iterable for Chain<A, B>
where
    A: Iterable,
    B: Iterable<Item = A::Item>,
{
    type Item = A::Item;

    #[inline]
    fn next(&mut self) -> Option<A::Item> {
        match fuse!(self.a.next()) {
            None => maybe!(self.b.next()),
            item => item,
        }
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        match (&self.a, &self.b) {
            (Some(a), Some(b)) => {
                let (a_lower, a_upper) = a.size_hint();
                let (b_lower, b_upper) = b.size_hint();
                let lower = a_lower.saturating_add(b_lower);
                let upper = match (a_upper, b_upper) {
                    (Some(x), Some(y)) => x.checked_add(y),
                    _ => None,
                };
                (lower, upper)
            }
            (Some(a), None) => a.size_hint(),
            (None, Some(b)) => b.size_hint(),
            (None, None) => (0, Some(0)),
        }
    }

    #[inline]
    fn count(self) -> usize {
        let a_count = self.a.map_or(0, Iterable::count);
        let b_count = self.b.map_or(0, Iterable::count);
        a_count + b_count
    }

    #[inline]
    fn last(self) -> Option<A::Item> {
        // Both sides must be drained; the second side wins if non-empty.
        let a_last = self.a.and_then(Iterable::last);
        let b_last = self.b.and_then(Iterable::last);
        b_last.or(a_last)
    }

    fn advance_by(&mut self, n: usize) -> Result<(), Shortfall> {
        let mut rem = n;
        let mut consumed = 0;
        if let Some(ref mut a) = self.a {
            match a.advance_by(rem) {
                Ok(()) => return Ok(()),
                Err(Shortfall(k)) => {
                    consumed += k;
                    rem -= k;
                }
            }
            self.a = None;
        }
        if let Some(ref mut b) = self.b {
            match b.advance_by(rem) {
                Ok(()) => return Ok(()),
                Err(Shortfall(k)) => consumed += k,
            }
        }
        if rem == 0 {
            Ok(())
        } else {
            Err(Shortfall(consumed))
        }
    }

    fn nth(&mut self, mut n: usize) -> Option<A::Item> {
        if let Some(ref mut a) = self.a {
            match a.advance_by(n) {
                Ok(()) => match a.next() {
                    None => n = 0,
                    item => return item,
                },
                Err(Shortfall(k)) => n -= k,
            }
            self.a = None;
        }
        maybe!(self.b.nth(n))
    }

    #[inline]
    fn find<P>(&mut self, mut predicate: P) -> Option<A::Item>
    where
        P: FnMut(&A::Item) -> bool,
    {
        match fuse!(self.a.find(&mut predicate)) {
            None => maybe!(self.b.find(predicate)),
            item => item,
        }
    }

    fn try_fold<Acc, R, G>(&mut self, mut acc: Acc, mut g: G) -> ControlFlow<R, Acc>
    where
        G: FnMut(Acc, A::Item) -> ControlFlow<R, Acc>,
    {
        if let Some(ref mut a) = self.a {
            acc = a.try_fold(acc, &mut g)?;
            self.a = None;
        }
        if let Some(ref mut b) = self.b {
            acc = b.try_fold(acc, &mut g)?;
            // The far side is not fused.
        }
        ControlFlow::Continue(acc)
    }

    fn fold<Acc, G>(self, mut acc: Acc, mut g: G) -> Acc
    where
        G: FnMut(Acc, A::Item) -> Acc,
    {
        if let Some(a) = self.a {
            acc = a.fold(acc, &mut g);
        }
        if let Some(b) = self.b {
            acc = b.fold(acc, g);
        }
        acc
    }
}

impl<A, B> DoubleEndedIterable for Chain<A, B>
where
    A: DoubleEndedIterable,
    B: DoubleEndedIterable<Item = A::Item>,
{
    #[inline]
    fn next_back(&mut self) -> Option<A::Item> {
        match fuse!(self.b.next_back()) {
            None => maybe!(self.a.next_back()),
            item => item,
        }
    }

    fn advance_back_by(&mut self, n: usize) -> Result<(), Shortfall> {
        let mut rem = n;
        let mut consumed = 0;
        if let Some(ref mut b) = self.b {
            match b.advance_back_by(rem) {
                Ok(()) => return Ok(()),
                Err(Shortfall(k)) => {
                    consumed += k;
                    rem -= k;
                }
            }
            self.b = None;
        }
        if let Some(ref mut a) = self.a {
            match a.advance_back_by(rem) {
                Ok(()) => return Ok(()),
                Err(Shortfall(k)) => consumed += k,
            }
        }
        if rem == 0 {
            Ok(())
        } else {
            Err(Shortfall(consumed))
        }
    }

    fn nth_back(&mut self, mut n: usize) -> Option<A::Item> {
        if let Some(ref mut b) = self.b {
            match b.advance_back_by(n) {
                Ok(()) => match b.next_back() {
                    None => n = 0,
                    item => return item,
                },
                Err(Shortfall(k)) => n -= k,
            }
            self.b = None;
        }
        maybe!(self.a.nth_back(n))
    }

    #[inline]
    fn rfind<P>(&mut self, mut predicate: P) -> Option<A::Item>
    where
        P: FnMut(&A::Item) -> bool,
    {
        match fuse!(self.b.rfind(&mut predicate)) {
            None => maybe!(self.a.rfind(predicate)),
            item => item,
        }
    }

    fn try_rfold<Acc, R, G>(&mut self, mut acc: Acc, mut g: G) -> ControlFlow<R, Acc>
    where
        G: FnMut(Acc, A::Item) -> ControlFlow<R, Acc>,
    {
        if let Some(ref mut b) = self.b {
            acc = b.try_rfold(acc, &mut g)?;
            self.b = None;
        }
        if let Some(ref mut a) = self.a {
            acc = a.try_rfold(acc, &mut g)?;
        }
        ControlFlow::Continue(acc)
    }

    fn rfold<Acc, G>(self, mut acc: Acc, mut g: G) -> Acc
    where
        G: FnMut(Acc, A::Item) -> Acc,
    {
        if let Some(b) = self.b {
            acc = b.rfold(acc, &mut g);
        }
        if let Some(a) = self.a {
            acc = a.rfold(acc, g);
        }
        acc
    }
}

impl<A, B> FusedIterable for Chain<A, B>
where
    A: FusedIterable,
    B: FusedIterable<Item = A::Item>,
{
}

#[cfg(test)]
mod tests {
    use crate::sources::{from_vec, repeat};
    use crate::traits::{DoubleEndedIterable, Iterable, Shortfall};
    use alloc::vec;
    use alloc::vec::Vec;
    use proptest::prelude::*;

    #[test]
    fn runs_both_sides_in_order() {
        let joined: Vec<i32> = from_vec(vec![1, 2]).chain(from_vec(vec![3, 4, 5])).collect();
        assert_eq!(joined, [1, 2, 3, 4, 5]);
    }

    #[test]
    fn size_hint_sums_and_saturates() {
        let finite = from_vec(vec![1, 2]).chain(from_vec(vec![3, 4, 5, 6]));
        assert_eq!(finite.size_hint(), (6, Some(6)));

        // An endless left side leaves the upper bound unknown.
        let endless = repeat(0).chain(from_vec(vec![1, 2]));
        assert_eq!(endless.size_hint(), (2, None));
    }

    #[test]
    fn count_sums_both_sides() {
        let mut chain = from_vec(vec![1, 2, 3]).chain(from_vec(vec![4, 5]));
        chain.next();
        assert_eq!(chain.count(), 4);
    }

    #[test]
    fn nth_and_advance_cross_the_seam() {
        let mut chain = from_vec(vec![1, 2]).chain(from_vec(vec![3, 4, 5]));
        assert_eq!(chain.nth(3), Some(4));
        assert_eq!(chain.next(), Some(5));

        let mut chain = from_vec(vec![1, 2]).chain(from_vec(vec![3]));
        assert_eq!(chain.advance_by(2), Ok(()));
        assert_eq!(chain.advance_by(2), Err(Shortfall(1)));
    }

    #[test]
    fn back_traversal_mirrors() {
        let mut chain = from_vec(vec![1, 2]).chain(from_vec(vec![3, 4]));
        assert_eq!(chain.next_back(), Some(4));
        assert_eq!(chain.next(), Some(1));
        assert_eq!(chain.next_back(), Some(3));
        assert_eq!(chain.next_back(), Some(2));
        assert_eq!(chain.next_back(), None);
        assert_eq!(chain.next(), None);
    }

    #[test]
    fn short_circuit_stops_in_the_left_side() {
        let mut pulls = 0;
        let right = crate::sources::from_fn(|| {
            pulls += 1;
            Some(9)
        });
        let mut chain = from_vec(vec![1, 2, 3]).chain(right);
        assert_eq!(chain.find(|&x| x == 2), Some(2));
        drop(chain);
        assert_eq!(pulls, 0);
    }

    proptest! {
        #[test]
        fn matches_core_chain(a in any::<Vec<u8>>(), b in any::<Vec<u8>>()) {
            let ours: Vec<u8> = from_vec(a.clone()).chain(from_vec(b.clone())).collect();
            let theirs: Vec<u8> = a.into_iter().chain(b).collect();
            prop_assert_eq!(ours, theirs);
        }

        #[test]
        fn rfold_matches_core(a in any::<Vec<u8>>(), b in any::<Vec<u8>>()) {
            let ours = from_vec(a.clone())
                .chain(from_vec(b.clone()))
                .rfold(0u64, |acc, x| acc * 31 + u64::from(x));
            let theirs = a
                .into_iter()
                .chain(b)
                .rfold(0u64, |acc, x| acc * 31 + u64::from(x));
            prop_assert_eq!(ours, theirs);
        }
    }
}
