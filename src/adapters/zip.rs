use crate::traits::{DoubleEndedIterable, ExactSizeIterable, FusedIterable, Iterable};

/// An iterable that pairs up two sequences, stopping at the shorter one.
///
/// Created by [`Iterable::zip`]. A pair is yielded only when *both* sides
/// produce an element; the moment either side comes up empty, the whole
/// zip reports `None` for that pull and does not retry the pairing.
///
/// Back-traversal requires exact sizes: before the first `next_back`, the
/// longer side is trimmed from the back so that both ends pair up the same
/// logical positions as forward traversal would.
#[derive(Clone, Debug)]
#[must_use = "iterables are lazy and do nothing unless consumed"]
pub struct Zip<A, B> {
    a: A,
    b: B,
}

impl<A, B> Zip<A, B> {
    #[inline]
    pub(crate) fn new(a: A, b: B) -> Self {
        Self { a, b }
    }
}

impl<A, B> Iterable for Zip<A, B>
where
    A: Iterable,
    B: Iterable,
{
    type Item = (A::Item, B::Item);

    #[inline]
    fn next(&mut self) -> Option<(A::Item, B::Item)> {
        let x = self.a.next()?;
        let y = self.b.next()?;
        Some((x, y))
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let (a_lower, a_upper) = self.a.size_hint();
        let (b_lower, b_upper) = self.b.size_hint();
        let lower = a_lower.min(b_lower);
        let upper = match (a_upper, b_upper) {
            (Some(x), Some(y)) => Some(x.min(y)),
            (Some(x), None) => Some(x),
            (None, Some(y)) => Some(y),
            (None, None) => None,
        };
        (lower, upper)
    }
}

impl<A, B> DoubleEndedIterable for Zip<A, B>
where
    A: DoubleEndedIterable + ExactSizeIterable,
    B: DoubleEndedIterable + ExactSizeIterable,
{
    fn next_back(&mut self) -> Option<(A::Item, B::Item)> {
        // Equalize the remaining lengths: the trailing surplus of the
        // longer side can never participate in a pair.
        let a_len = self.a.len();
        let b_len = self.b.len();
        if a_len > b_len {
            let _ = self.a.advance_back_by(a_len - b_len);
        } else if b_len > a_len {
            let _ = self.b.advance_back_by(b_len - a_len);
        }
        match (self.a.next_back(), self.b.next_back()) {
            (Some(x), Some(y)) => Some((x, y)),
            _ => None,
        }
    }
}

impl<A, B> ExactSizeIterable for Zip<A, B>
where
    A: ExactSizeIterable,
    B: ExactSizeIterable,
{
    #[inline]
    fn len(&self) -> usize {
        self.a.len().min(self.b.len())
    }
}

impl<A, B> FusedIterable for Zip<A, B>
where
    A: FusedIterable,
    B: FusedIterable,
{
}

#[cfg(test)]
mod tests {
    use crate::sources::{from_vec, repeat};
    use crate::traits::{DoubleEndedIterable, Iterable};
    use alloc::vec;
    use alloc::vec::Vec;
    use proptest::prelude::*;

    #[test]
    fn shortest_side_wins() {
        let mut zip = from_vec(vec![1, 2, 3]).zip(from_vec(vec![4, 5]));
        assert_eq!(zip.next(), Some((1, 4)));
        assert_eq!(zip.next(), Some((2, 5)));
        assert_eq!(zip.next(), None);
    }

    #[test]
    fn size_hint_takes_the_minimum() {
        let zip = from_vec(vec![1, 2, 3]).zip(from_vec(vec![4, 5]));
        assert_eq!(zip.size_hint(), (2, Some(2)));
        let zip = from_vec(vec![1, 2, 3]).zip(repeat(0));
        assert_eq!(zip.size_hint(), (0, Some(3)));
    }

    #[test]
    fn back_pairing_matches_front_positions() {
        // Forward pairing is [(1, 'a'), (2, 'b')]; pairing from the back
        // must see the same pairs, so 3 is trimmed first.
        let mut zip = from_vec(vec![1, 2, 3]).zip(from_vec(vec!['a', 'b']));
        assert_eq!(zip.next_back(), Some((2, 'b')));
        assert_eq!(zip.next_back(), Some((1, 'a')));
        assert_eq!(zip.next_back(), None);
    }

    #[test]
    fn mixed_direction_consumption() {
        let mut zip = from_vec(vec![1, 2, 3, 4]).zip(from_vec(vec![10, 20, 30]));
        assert_eq!(zip.next(), Some((1, 10)));
        assert_eq!(zip.next_back(), Some((3, 30)));
        assert_eq!(zip.next(), Some((2, 20)));
        assert_eq!(zip.next(), None);
    }

    proptest! {
        #[test]
        fn matches_core_zip(a in any::<Vec<u8>>(), b in any::<Vec<i8>>()) {
            let ours: Vec<(u8, i8)> = from_vec(a.clone()).zip(from_vec(b.clone())).collect();
            let theirs: Vec<(u8, i8)> = a.into_iter().zip(b).collect();
            prop_assert_eq!(ours, theirs);
        }
    }
}
