use core::fmt;

use crate::adapters::Peekable;
use crate::traits::{FusedIterable, Iterable};

/// Where the next pull's element comes from.
///
/// The machine starts in `First`, then alternates `Separator` /
/// `Element`. A separator is only ever emitted when a lookahead confirms
/// another element follows it, so no trailing separator can occur.
#[derive(Copy, Clone, Debug)]
enum Pending {
    First,
    Element,
    Separator,
}

/// An iterable that places a clone of a separator between adjacent
/// elements.
///
/// Created by [`Iterable::intersperse`].
///
/// # Example
///
/// ```
/// use reiter::{Iterable, from_vec};
///
/// let sentence: String = from_vec(vec!["never", "trailing"])
///     .intersperse(" ")
///     .collect();
/// assert_eq!(sentence, "never trailing");
/// ```
#[derive(Clone, Debug)]
#[must_use = "iterables are lazy and do nothing unless consumed"]
pub struct Intersperse<I: Iterable> {
    iter: Peekable<I>,
    separator: I::Item,
    state: Pending,
}

impl<I: Iterable> Intersperse<I> {
    #[inline]
    pub(crate) fn new(iter: I, separator: I::Item) -> Self {
        Self {
            iter: Peekable::new(iter),
            separator,
            state: Pending::First,
        }
    }
}

impl<I> Iterable for Intersperse<I>
where
    I: Iterable,
    I::Item: Clone,
{
    type Item = I::Item;

    #[inline]
    fn next(&mut self) -> Option<I::Item> {
        match self.state {
            Pending::First | Pending::Element => {
                self.state = Pending::Separator;
                self.iter.next()
            }
            Pending::Separator => {
                if self.iter.peek().is_some() {
                    self.state = Pending::Element;
                    Some(self.separator.clone())
                } else {
                    None
                }
            }
        }
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        intersperse_size_hint(&self.iter, matches!(self.state, Pending::Separator))
    }
}

impl<I> FusedIterable for Intersperse<I>
where
    I: FusedIterable,
    I::Item: Clone,
{
}

/// An iterable that places a freshly produced separator between adjacent
/// elements.
///
/// Created by [`Iterable::intersperse_with`]. Like [`Intersperse`] but
/// the separator is built on demand, so it need not be `Clone`.
#[must_use = "iterables are lazy and do nothing unless consumed"]
pub struct IntersperseWith<I: Iterable, G> {
    iter: Peekable<I>,
    separator: G,
    state: Pending,
}

impl<I, G> Clone for IntersperseWith<I, G>
where
    I: Iterable + Clone,
    I::Item: Clone,
    G: Clone,
{
    #[inline]
    fn clone(&self) -> Self {
        Self {
            iter: self.iter.clone(),
            separator: self.separator.clone(),
            state: self.state,
        }
    }
}

impl<I: Iterable, G> IntersperseWith<I, G> {
    #[inline]
    pub(crate) fn new(iter: I, separator: G) -> Self {
        Self {
            iter: Peekable::new(iter),
            separator,
            state: Pending::First,
        }
    }
}

impl<I, G> fmt::Debug for IntersperseWith<I, G>
where
    I: Iterable + fmt::Debug,
    I::Item: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IntersperseWith")
            .field("iter", &self.iter)
            .field("state", &self.state)
            .finish_non_exhaustive()
    }
}

impl<I, G> Iterable for IntersperseWith<I, G>
where
    I: Iterable,
    G: FnMut() -> I::Item,
{
    type Item = I::Item;

    #[inline]
    fn next(&mut self) -> Option<I::Item> {
        match self.state {
            Pending::First | Pending::Element => {
                self.state = Pending::Separator;
                self.iter.next()
            }
            Pending::Separator => {
                if self.iter.peek().is_some() {
                    self.state = Pending::Element;
                    Some((self.separator)())
                } else {
                    None
                }
            }
        }
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        intersperse_size_hint(&self.iter, matches!(self.state, Pending::Separator))
    }
}

impl<I, G> FusedIterable for IntersperseWith<I, G>
where
    I: FusedIterable,
    G: FnMut() -> I::Item,
{
}

/// `n` remaining elements imply `n - 1` separators between them — or `n`
/// separators when the machine owes one before the next element.
fn intersperse_size_hint<I: Iterable>(
    iter: &Peekable<I>,
    separator_due: bool,
) -> (usize, Option<usize>) {
    let (lower, upper) = iter.size_hint();
    if separator_due {
        (
            lower.saturating_mul(2),
            upper.and_then(|u| u.checked_mul(2)),
        )
    } else {
        (
            lower.saturating_add(lower.saturating_sub(1)),
            upper.and_then(|u| u.checked_add(u.saturating_sub(1))),
        )
    }
}

#[cfg(test)]
mod tests {
    use crate::sources::{from_vec, once};
    use crate::traits::Iterable;
    use alloc::vec;
    use alloc::vec::Vec;
    use proptest::prelude::*;

    #[test]
    fn separators_between_elements_only() {
        let spaced: Vec<i32> = from_vec(vec![1, 2, 3]).intersperse(0).collect();
        assert_eq!(spaced, [1, 0, 2, 0, 3]);
    }

    #[test]
    fn no_trailing_separator() {
        let lone: Vec<i32> = once(1).intersperse(0).collect();
        assert_eq!(lone, [1]);
        let none: Vec<i32> = from_vec(Vec::new()).intersperse(0).collect();
        assert_eq!(none, []);
    }

    #[test]
    fn separator_built_on_demand() {
        let mut counter = 0;
        let spaced: Vec<i32> = from_vec(vec![10, 20, 30])
            .intersperse_with(|| {
                counter -= 1;
                counter
            })
            .collect();
        assert_eq!(spaced, [10, -1, 20, -2, 30]);
    }

    #[test]
    fn state_machine_pauses_correctly() {
        let mut iter = from_vec(vec![1, 2]).intersperse(9);
        assert_eq!(iter.next(), Some(1));
        assert_eq!(iter.size_hint(), (2, Some(2)));
        assert_eq!(iter.next(), Some(9));
        assert_eq!(iter.next(), Some(2));
        assert_eq!(iter.next(), None);
        assert_eq!(iter.next(), None);
    }

    #[test]
    fn size_hint_counts_separators() {
        let iter = from_vec(vec![1, 2, 3]).intersperse(0);
        assert_eq!(iter.size_hint(), (5, Some(5)));
    }

    proptest! {
        #[test]
        fn separator_placement(collection in any::<Vec<u8>>()) {
            let ours: Vec<Option<u8>> = from_vec(collection.clone())
                .map(Some)
                .intersperse(None)
                .collect();
            let mut expected = Vec::new();
            for (i, x) in collection.into_iter().enumerate() {
                if i > 0 {
                    expected.push(None);
                }
                expected.push(Some(x));
            }
            prop_assert_eq!(ours, expected);
        }
    }
}
