use core::cmp::Ordering;
use core::convert::Infallible;
use core::fmt;
use core::ops::ControlFlow;

use alloc::vec::Vec;

use crate::adapters::{
    ArrayChunks, Chain, ChunkBy, Cycle, Enumerate, Filter, FilterMap, FlatMap, Flatten, Fuse,
    Inspect, Intersperse, IntersperseWith, Map, MapWhile, MapWindows, Peekable, Rev, Scan, Skip,
    SkipWhile, StepBy, Take, TakeWhile, Zip,
};
use crate::sources::CoreIter;
use crate::traits::{
    DoubleEndedIterable, Extendable, FromIterable, IntoIterable, Product, Sum,
};

/// Error payload of a partial [`Iterable::advance_by`] or
/// [`advance_back_by`](crate::DoubleEndedIterable::advance_back_by).
///
/// Carries the number of elements that were actually consumed before the
/// sequence ran out. Running short is ordinary arithmetic for the caller to
/// act on, not a failure of the iterable, which is why the count is the
/// payload rather than an opaque error.
///
/// # Example
///
/// ```
/// use reiter::{Iterable, Shortfall, from_vec};
///
/// let mut iter = from_vec(vec![1, 2, 3]);
/// assert_eq!(iter.advance_by(2), Ok(()));
/// assert_eq!(iter.advance_by(5), Err(Shortfall(1)));
/// ```
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Shortfall(pub usize);

impl Shortfall {
    /// The number of elements actually consumed before exhaustion.
    #[inline]
    #[must_use]
    pub const fn consumed(&self) -> usize {
        self.0
    }
}

impl fmt::Display for Shortfall {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "sequence ran out after {} elements", self.0)
    }
}

/// A lazily evaluated, pull-based sequence of values.
///
/// The only required method is [`next`]; everything else — the adapter
/// constructors and the consumer operations — has a default implementation.
/// Consumers that may stop early are all thin wrappers around a single
/// primitive, [`try_fold`], so an implementation that can traverse itself
/// faster than the generic `next` loop only has to override `try_fold` (and
/// usually [`fold`]) to accelerate `count`, `find`, `position`, `all`,
/// `any`, `reduce` and the rest of the family at once.
///
/// Constructing an adapter performs no work: no element is pulled from the
/// underlying sequence until a consumer runs.
///
/// # Example
///
/// ```
/// use reiter::{Iterable, from_vec};
///
/// let total: i32 = from_vec(vec![1, 2, 3, 4])
///     .filter(|n| n % 2 == 0)
///     .map(|n| n * 10)
///     .sum();
/// assert_eq!(total, 60);
/// ```
///
/// [`next`]: Iterable::next
/// [`try_fold`]: Iterable::try_fold
/// [`fold`]: Iterable::fold
#[must_use = "iterables are lazy and do nothing unless consumed"]
pub trait Iterable {
    /// The type of element the sequence produces.
    type Item;

    /// Advances the sequence and returns the next value, or `None` once the
    /// sequence is finished.
    ///
    /// `None` is a signal, not a latch: unless the iterable is fused (see
    /// [`fuse`](Iterable::fuse)), calling `next` again after `None` may or
    /// may not produce further values.
    ///
    /// # Example
    ///
    /// ```
    /// use reiter::{Iterable, from_vec};
    ///
    /// let mut iter = from_vec(vec!['a', 'b']);
    /// assert_eq!(iter.next(), Some('a'));
    /// assert_eq!(iter.next(), Some('b'));
    /// assert_eq!(iter.next(), None);
    /// ```
    fn next(&mut self) -> Option<Self::Item>;

    /// Returns the bounds on the remaining length as
    /// `(lower, Option<upper>)`.
    ///
    /// The hint exists for optimizations such as pre-allocating collection
    /// capacity; it must never be trusted for correctness. The default
    /// `(0, None)` is correct for any sequence. Implementations that cannot
    /// deduce an exact bound must understate the lower bound rather than
    /// overstate it.
    ///
    /// # Example
    ///
    /// ```
    /// use reiter::{Iterable, from_slice};
    ///
    /// let iter = from_slice(&[1, 2, 3]);
    /// assert_eq!(iter.size_hint(), (3, Some(3)));
    /// // A filter cannot promise any survivors:
    /// assert_eq!(iter.filter(|n| **n > 1).size_hint(), (0, Some(3)));
    /// ```
    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, None)
    }

    /// Applies `f` as long as it keeps returning
    /// [`ControlFlow::Continue`], threading an accumulator through; stops
    /// and surfaces the payload of the first [`ControlFlow::Break`].
    ///
    /// This is the primitive every short-circuiting consumer is defined in
    /// terms of. Implementations should override it whenever they can do
    /// better than the generic `next` loop — doing so upgrades `fold`,
    /// `count`, `find`, `position`, `all`, `any`, `reduce`, `last` and the
    /// `try_*` helpers for free.
    ///
    /// # Example
    ///
    /// ```
    /// use core::ops::ControlFlow;
    /// use reiter::{Iterable, from_vec};
    ///
    /// // Sum until the total would exceed 5.
    /// let partial = from_vec(vec![1, 2, 3, 4]).try_fold(0, |acc, x| {
    ///     if acc + x > 5 { ControlFlow::Break(acc) } else { ControlFlow::Continue(acc + x) }
    /// });
    /// assert_eq!(partial, ControlFlow::Break(3));
    /// ```
    #[inline]
    fn try_fold<Acc, B, F>(&mut self, init: Acc, mut f: F) -> ControlFlow<B, Acc>
    where
        Self: Sized,
        F: FnMut(Acc, Self::Item) -> ControlFlow<B, Acc>,
    {
        let mut acc = init;
        while let Some(x) = self.next() {
            acc = f(acc, x)?;
        }
        ControlFlow::Continue(acc)
    }

    /// Folds every element into an accumulator, left to right.
    ///
    /// Defined atop [`try_fold`](Iterable::try_fold) with an uninhabited
    /// break type, so overriding `try_fold` accelerates `fold` as well. An
    /// implementation may still override `fold` directly when consuming
    /// `self` by value unlocks a cheaper traversal.
    ///
    /// # Example
    ///
    /// ```
    /// use reiter::{Iterable, from_vec};
    ///
    /// let sum = from_vec(vec![1, 2, 3]).fold(0, |acc, x| acc + x);
    /// assert_eq!(sum, 6);
    /// ```
    #[inline]
    fn fold<Acc, F>(mut self, init: Acc, mut f: F) -> Acc
    where
        Self: Sized,
        F: FnMut(Acc, Self::Item) -> Acc,
    {
        match self.try_fold(init, |acc, x| {
            ControlFlow::<Infallible, _>::Continue(f(acc, x))
        }) {
            ControlFlow::Continue(acc) => acc,
            ControlFlow::Break(never) => match never {},
        }
    }

    /// Consumes the sequence, counting the elements.
    ///
    /// # Example
    ///
    /// ```
    /// use reiter::{Iterable, from_vec};
    ///
    /// assert_eq!(from_vec(vec![1, 2, 3]).count(), 3);
    /// ```
    #[inline]
    fn count(self) -> usize
    where
        Self: Sized,
    {
        self.fold(0, |count, _| count + 1)
    }

    /// Consumes the sequence, returning the final element.
    ///
    /// # Example
    ///
    /// ```
    /// use reiter::{Iterable, from_vec};
    ///
    /// assert_eq!(from_vec(vec![1, 2, 3]).last(), Some(3));
    /// assert_eq!(from_vec(Vec::<i32>::new()).last(), None);
    /// ```
    #[inline]
    fn last(self) -> Option<Self::Item>
    where
        Self: Sized,
    {
        self.fold(None, |_, x| Some(x))
    }

    /// Eagerly skips `n` elements.
    ///
    /// On success the sequence has advanced by exactly `n`. When the
    /// sequence runs out first, the error carries how many elements were
    /// actually consumed — a partial-success count, not a catastrophe.
    ///
    /// # Example
    ///
    /// ```
    /// use reiter::{Iterable, Shortfall, from_vec};
    ///
    /// let mut iter = from_vec(vec![1, 2, 3, 4]);
    /// assert_eq!(iter.advance_by(2), Ok(()));
    /// assert_eq!(iter.next(), Some(3));
    /// assert_eq!(iter.advance_by(9), Err(Shortfall(1)));
    /// ```
    #[inline]
    fn advance_by(&mut self, n: usize) -> Result<(), Shortfall> {
        for consumed in 0..n {
            if self.next().is_none() {
                return Err(Shortfall(consumed));
            }
        }
        Ok(())
    }

    /// Returns the `n`th element (zero-indexed), consuming everything up to
    /// and including it.
    ///
    /// # Example
    ///
    /// ```
    /// use reiter::{Iterable, from_vec};
    ///
    /// let mut iter = from_vec(vec![1, 2, 3]);
    /// assert_eq!(iter.nth(1), Some(2));
    /// // `nth` consumed elements 0..=1; only 3 remains.
    /// assert_eq!(iter.next(), Some(3));
    /// ```
    #[inline]
    fn nth(&mut self, n: usize) -> Option<Self::Item> {
        self.advance_by(n).ok()?;
        self.next()
    }

    /// Pulls the next `n` elements into a `Vec`.
    ///
    /// Returns `Ok` with exactly `n` elements, or — when the sequence runs
    /// out first — `Err` carrying the partial chunk collected so far.
    ///
    /// # Example
    ///
    /// ```
    /// use reiter::{Iterable, from_vec};
    ///
    /// let mut iter = from_vec(vec![1, 2, 3]);
    /// assert_eq!(iter.next_chunk(2), Ok(vec![1, 2]));
    /// assert_eq!(iter.next_chunk(2), Err(vec![3]));
    /// ```
    fn next_chunk(&mut self, n: usize) -> Result<Vec<Self::Item>, Vec<Self::Item>> {
        let mut chunk = Vec::with_capacity(n);
        for _ in 0..n {
            match self.next() {
                Some(x) => chunk.push(x),
                None => return Err(chunk),
            }
        }
        Ok(chunk)
    }

    /// Calls `f` on each element.
    ///
    /// Equivalent to a `for` loop over the sequence, expressed through
    /// [`fold`](Iterable::fold) so adapter overrides apply.
    #[inline]
    fn for_each<F>(self, mut f: F)
    where
        Self: Sized,
        F: FnMut(Self::Item),
    {
        self.fold((), |(), x| f(x));
    }

    /// Folds the elements using the first one as the initial accumulator.
    ///
    /// Returns `None` on an empty sequence.
    ///
    /// # Example
    ///
    /// ```
    /// use reiter::{Iterable, from_vec};
    ///
    /// assert_eq!(from_vec(vec![3, 1, 7]).reduce(i32::max), Some(7));
    /// assert_eq!(from_vec(Vec::<i32>::new()).reduce(i32::max), None);
    /// ```
    #[inline]
    fn reduce<F>(mut self, f: F) -> Option<Self::Item>
    where
        Self: Sized,
        F: FnMut(Self::Item, Self::Item) -> Self::Item,
    {
        let first = self.next()?;
        Some(self.fold(first, f))
    }

    /// Tests whether every element satisfies the predicate.
    ///
    /// Short-circuits on the first `false`; an empty sequence returns
    /// `true`.
    ///
    /// # Example
    ///
    /// ```
    /// use reiter::{Iterable, from_vec};
    ///
    /// assert!(from_vec(vec![1, 2, 3]).all(|x| x > 0));
    /// assert!(!from_vec(vec![1, -2, 3]).all(|x| x > 0));
    /// ```
    #[inline]
    fn all<F>(&mut self, mut f: F) -> bool
    where
        Self: Sized,
        F: FnMut(Self::Item) -> bool,
    {
        self.try_fold((), |(), x| {
            if f(x) {
                ControlFlow::Continue(())
            } else {
                ControlFlow::Break(())
            }
        })
        .is_continue()
    }

    /// Tests whether any element satisfies the predicate.
    ///
    /// Short-circuits on the first `true`; an empty sequence returns
    /// `false`.
    #[inline]
    fn any<F>(&mut self, mut f: F) -> bool
    where
        Self: Sized,
        F: FnMut(Self::Item) -> bool,
    {
        self.try_fold((), |(), x| {
            if f(x) {
                ControlFlow::Break(())
            } else {
                ControlFlow::Continue(())
            }
        })
        .is_break()
    }

    /// Returns the first element satisfying the predicate, consuming the
    /// sequence up to and including it.
    ///
    /// # Example
    ///
    /// ```
    /// use reiter::{Iterable, from_vec};
    ///
    /// let mut iter = from_vec(vec![1, 2, 3]);
    /// assert_eq!(iter.find(|&x| x > 1), Some(2));
    /// assert_eq!(iter.next(), Some(3));
    /// ```
    #[inline]
    fn find<P>(&mut self, mut predicate: P) -> Option<Self::Item>
    where
        Self: Sized,
        P: FnMut(&Self::Item) -> bool,
    {
        self.try_fold((), |(), x| {
            if predicate(&x) {
                ControlFlow::Break(x)
            } else {
                ControlFlow::Continue(())
            }
        })
        .break_value()
    }

    /// Applies `f` to each element and returns the first `Some` it
    /// produces.
    ///
    /// # Example
    ///
    /// ```
    /// use reiter::{Iterable, from_vec};
    ///
    /// let mut words = from_vec(vec!["a", "17", "b"]);
    /// assert_eq!(words.find_map(|s| s.parse::<i32>().ok()), Some(17));
    /// ```
    #[inline]
    fn find_map<B, F>(&mut self, mut f: F) -> Option<B>
    where
        Self: Sized,
        F: FnMut(Self::Item) -> Option<B>,
    {
        self.try_fold((), |(), x| match f(x) {
            Some(found) => ControlFlow::Break(found),
            None => ControlFlow::Continue(()),
        })
        .break_value()
    }

    /// Returns the index of the first element satisfying the predicate.
    ///
    /// # Example
    ///
    /// ```
    /// use reiter::{Iterable, from_vec};
    ///
    /// assert_eq!(from_vec(vec!['a', 'b', 'c']).position(|c| c == 'b'), Some(1));
    /// assert_eq!(from_vec(vec!['a', 'b', 'c']).position(|c| c == 'z'), None);
    /// ```
    #[inline]
    fn position<P>(&mut self, mut predicate: P) -> Option<usize>
    where
        Self: Sized,
        P: FnMut(Self::Item) -> bool,
    {
        self.try_fold(0usize, |index, x| {
            if predicate(x) {
                ControlFlow::Break(index)
            } else {
                ControlFlow::Continue(index + 1)
            }
        })
        .break_value()
    }

    /// Calls a fallible `f` on each element, stopping at and returning the
    /// first error.
    ///
    /// # Example
    ///
    /// ```
    /// use reiter::{Iterable, from_vec};
    ///
    /// let res = from_vec(vec!["1", "2", "x", "3"])
    ///     .try_for_each(|s| s.parse::<i32>().map(drop));
    /// assert!(res.is_err());
    /// ```
    #[inline]
    fn try_for_each<E, F>(&mut self, mut f: F) -> Result<(), E>
    where
        Self: Sized,
        F: FnMut(Self::Item) -> Result<(), E>,
    {
        match self.try_fold((), |(), x| match f(x) {
            Ok(()) => ControlFlow::Continue(()),
            Err(e) => ControlFlow::Break(e),
        }) {
            ControlFlow::Continue(()) => Ok(()),
            ControlFlow::Break(e) => Err(e),
        }
    }

    /// Like [`find`](Iterable::find), but the predicate itself may fail;
    /// the first error is propagated verbatim.
    #[inline]
    fn try_find<E, F>(&mut self, mut f: F) -> Result<Option<Self::Item>, E>
    where
        Self: Sized,
        F: FnMut(&Self::Item) -> Result<bool, E>,
    {
        match self.try_fold((), |(), x| match f(&x) {
            Ok(true) => ControlFlow::Break(Ok(x)),
            Ok(false) => ControlFlow::Continue(()),
            Err(e) => ControlFlow::Break(Err(e)),
        }) {
            ControlFlow::Continue(()) => Ok(None),
            ControlFlow::Break(Ok(x)) => Ok(Some(x)),
            ControlFlow::Break(Err(e)) => Err(e),
        }
    }

    /// Like [`reduce`](Iterable::reduce), but the combining function may
    /// fail; the first error is propagated verbatim.
    #[inline]
    fn try_reduce<E, F>(&mut self, mut f: F) -> Result<Option<Self::Item>, E>
    where
        Self: Sized,
        F: FnMut(Self::Item, Self::Item) -> Result<Self::Item, E>,
    {
        let first = match self.next() {
            Some(x) => x,
            None => return Ok(None),
        };
        match self.try_fold(first, |acc, x| match f(acc, x) {
            Ok(acc) => ControlFlow::Continue(acc),
            Err(e) => ControlFlow::Break(e),
        }) {
            ControlFlow::Continue(acc) => Ok(Some(acc)),
            ControlFlow::Break(e) => Err(e),
        }
    }

    // ---- adapter constructors -------------------------------------------

    /// Transforms each element with `f`.
    ///
    /// # Example
    ///
    /// ```
    /// use reiter::{Iterable, from_vec};
    ///
    /// let doubled: Vec<i32> = from_vec(vec![1, 2, 3]).map(|x| x * 2).collect();
    /// assert_eq!(doubled, [2, 4, 6]);
    /// ```
    #[inline]
    fn map<B, F>(self, f: F) -> Map<Self, F>
    where
        Self: Sized,
        F: FnMut(Self::Item) -> B,
    {
        Map::new(self, f)
    }

    /// Keeps only the elements satisfying the predicate.
    ///
    /// Unlike [`take_while`](Iterable::take_while), a failing element is
    /// merely skipped: the elements after it remain reachable.
    ///
    /// # Example
    ///
    /// ```
    /// use reiter::{Iterable, from_vec};
    ///
    /// let odds: Vec<i32> = from_vec(vec![1, 2, 3, 4, 5]).filter(|x| x % 2 == 1).collect();
    /// assert_eq!(odds, [1, 3, 5]);
    /// ```
    #[inline]
    fn filter<P>(self, predicate: P) -> Filter<Self, P>
    where
        Self: Sized,
        P: FnMut(&Self::Item) -> bool,
    {
        Filter::new(self, predicate)
    }

    /// Filters and maps in one pass: yields the contents of every `Some`
    /// that `f` produces, skipping the `None`s.
    ///
    /// # Example
    ///
    /// ```
    /// use reiter::{Iterable, from_vec};
    ///
    /// let parsed: Vec<i32> = from_vec(vec!["1", "two", "3"])
    ///     .filter_map(|s| s.parse().ok())
    ///     .collect();
    /// assert_eq!(parsed, [1, 3]);
    /// ```
    #[inline]
    fn filter_map<B, F>(self, f: F) -> FilterMap<Self, F>
    where
        Self: Sized,
        F: FnMut(Self::Item) -> Option<B>,
    {
        FilterMap::new(self, f)
    }

    /// Maps elements while `f` returns `Some`; the first `None` ends the
    /// sequence permanently.
    ///
    /// Contrast with [`filter_map`](Iterable::filter_map), which skips and
    /// keeps going, and with [`scan`](Iterable::scan), which passes the
    /// `None` through without latching.
    ///
    /// # Example
    ///
    /// ```
    /// use reiter::{Iterable, from_vec};
    ///
    /// let head: Vec<u8> = from_vec(vec![1, 2, -3, 4])
    ///     .map_while(|x| u8::try_from(x).ok())
    ///     .collect();
    /// // -3 ends the sequence; 4 is never reached.
    /// assert_eq!(head, [1, 2]);
    /// ```
    #[inline]
    fn map_while<B, F>(self, f: F) -> MapWhile<Self, F>
    where
        Self: Sized,
        F: FnMut(Self::Item) -> Option<B>,
    {
        MapWhile::new(self, f)
    }

    /// A fold that yields its intermediate results.
    ///
    /// `f` receives mutable access to the state and the next element; a
    /// `None` result is passed through to the caller *without* ending the
    /// sequence — see the type-level docs on [`Scan`] for the contrast
    /// with [`map_while`](Iterable::map_while).
    ///
    /// # Example
    ///
    /// ```
    /// use reiter::{Iterable, from_vec};
    ///
    /// let running: Vec<i32> = from_vec(vec![1, 2, 3])
    ///     .scan(0, |acc, x| {
    ///         *acc += x;
    ///         Some(*acc)
    ///     })
    ///     .collect();
    /// assert_eq!(running, [1, 3, 6]);
    /// ```
    #[inline]
    fn scan<St, B, F>(self, initial_state: St, f: F) -> Scan<Self, St, F>
    where
        Self: Sized,
        F: FnMut(&mut St, Self::Item) -> Option<B>,
    {
        Scan::new(self, initial_state, f)
    }

    /// Calls `f` with a reference to each element as it passes through,
    /// in either direction of traversal.
    #[inline]
    fn inspect<F>(self, f: F) -> Inspect<Self, F>
    where
        Self: Sized,
        F: FnMut(&Self::Item),
    {
        Inspect::new(self, f)
    }

    /// Skips elements while the predicate holds; once one element fails it,
    /// everything from that element on is yielded unchecked.
    ///
    /// # Example
    ///
    /// ```
    /// use reiter::{Iterable, from_vec};
    ///
    /// let rest: Vec<i32> = from_vec(vec![-1, -2, 3, -4]).skip_while(|x| *x < 0).collect();
    /// // -4 comes after the first keeper, so it is no longer checked.
    /// assert_eq!(rest, [3, -4]);
    /// ```
    #[inline]
    fn skip_while<P>(self, predicate: P) -> SkipWhile<Self, P>
    where
        Self: Sized,
        P: FnMut(&Self::Item) -> bool,
    {
        SkipWhile::new(self, predicate)
    }

    /// Yields elements while the predicate holds; the first failing element
    /// is discarded and the sequence ends permanently.
    ///
    /// # Example
    ///
    /// ```
    /// use reiter::{Iterable, from_vec};
    ///
    /// let head: Vec<i32> = from_vec(vec![1, 2, 9, 3]).take_while(|x| *x < 5).collect();
    /// assert_eq!(head, [1, 2]);
    /// ```
    #[inline]
    fn take_while<P>(self, predicate: P) -> TakeWhile<Self, P>
    where
        Self: Sized,
        P: FnMut(&Self::Item) -> bool,
    {
        TakeWhile::new(self, predicate)
    }

    /// Skips the first `n` elements.
    ///
    /// # Example
    ///
    /// ```
    /// use reiter::{Iterable, from_vec};
    ///
    /// let tail: Vec<i32> = from_vec(vec![1, 2, 3, 4, 5]).skip(2).take(2).collect();
    /// assert_eq!(tail, [3, 4]);
    /// ```
    #[inline]
    fn skip(self, n: usize) -> Skip<Self>
    where
        Self: Sized,
    {
        Skip::new(self, n)
    }

    /// Yields at most the first `n` elements.
    ///
    /// The usual way to make an endless sequence finite:
    ///
    /// ```
    /// use reiter::{repeat, Iterable};
    ///
    /// let fives: Vec<i32> = repeat(5).take(3).collect();
    /// assert_eq!(fives, [5, 5, 5]);
    /// ```
    #[inline]
    fn take(self, n: usize) -> Take<Self>
    where
        Self: Sized,
    {
        Take::new(self, n)
    }

    /// Yields the first element and then every `step`th element after it.
    ///
    /// # Panics
    ///
    /// Panics if `step` is zero — a zero step is a programming error, not a
    /// data condition.
    #[inline]
    fn step_by(self, step: usize) -> StepBy<Self>
    where
        Self: Sized,
    {
        StepBy::new(self, step)
    }

    /// Runs this sequence to exhaustion, then `other`.
    ///
    /// # Example
    ///
    /// ```
    /// use reiter::{Iterable, from_vec};
    ///
    /// let joined: Vec<i32> = from_vec(vec![1, 2]).chain(from_vec(vec![3])).collect();
    /// assert_eq!(joined, [1, 2, 3]);
    /// ```
    #[inline]
    fn chain<U>(self, other: U) -> Chain<Self, U::IntoIter>
    where
        Self: Sized,
        U: IntoIterable<Item = Self::Item>,
    {
        Chain::new(self, other.into_iterable())
    }

    /// Pairs up elements with `other`, stopping at the shorter side.
    ///
    /// # Example
    ///
    /// ```
    /// use reiter::{Iterable, from_vec};
    ///
    /// let pairs: Vec<(i32, char)> =
    ///     from_vec(vec![1, 2, 3]).zip(from_vec(vec!['a', 'b'])).collect();
    /// assert_eq!(pairs, [(1, 'a'), (2, 'b')]);
    /// ```
    #[inline]
    fn zip<U>(self, other: U) -> Zip<Self, U::IntoIter>
    where
        Self: Sized,
        U: IntoIterable,
    {
        Zip::new(self, other.into_iterable())
    }

    /// Attaches a running index to each element.
    ///
    /// # Example
    ///
    /// ```
    /// use reiter::{Iterable, from_vec};
    ///
    /// let indexed: Vec<(usize, char)> = from_vec(vec!['a', 'b']).enumerate().collect();
    /// assert_eq!(indexed, [(0, 'a'), (1, 'b')]);
    /// ```
    #[inline]
    fn enumerate(self) -> Enumerate<Self>
    where
        Self: Sized,
    {
        Enumerate::new(self)
    }

    /// Makes the sequence peekable: the next element can be inspected
    /// without being consumed. See [`Peekable`] for the lookahead
    /// operations this unlocks.
    #[inline]
    fn peekable(self) -> Peekable<Self>
    where
        Self: Sized,
    {
        Peekable::new(self)
    }

    /// Maps each element to an iterable and flattens the results into one
    /// sequence.
    ///
    /// # Example
    ///
    /// ```
    /// use reiter::{range, Iterable};
    ///
    /// let triangle: Vec<i32> = range(1, 4).flat_map(|n| range(0, n)).collect();
    /// assert_eq!(triangle, [0, 0, 1, 0, 1, 2]);
    /// ```
    #[inline]
    fn flat_map<U, F>(self, f: F) -> FlatMap<Self, U, F>
    where
        Self: Sized,
        U: IntoIterable,
        F: FnMut(Self::Item) -> U,
    {
        FlatMap::new(self, f)
    }

    /// Flattens a sequence of iterables into one sequence.
    ///
    /// Removes exactly one level of nesting.
    ///
    /// # Example
    ///
    /// ```
    /// use reiter::{from_vec, Iterable};
    ///
    /// let flat: Vec<i32> = from_vec(vec![vec![1, 2], vec![3]])
    ///     .map(from_vec)
    ///     .flatten()
    ///     .collect();
    /// assert_eq!(flat, [1, 2, 3]);
    /// ```
    #[inline]
    fn flatten(self) -> Flatten<Self>
    where
        Self: Sized,
        Self::Item: IntoIterable,
    {
        Flatten::new(self)
    }

    /// Guarantees that once `next` returns `None`, it keeps returning
    /// `None` forever.
    ///
    /// This is the only adapter that makes that promise; a plain iterable
    /// may resume after reporting exhaustion.
    ///
    /// # Example
    ///
    /// ```
    /// use reiter::{from_fn, Iterable};
    ///
    /// // Yields 1, then None, then would resume with 3...
    /// let mut n = 0;
    /// let mut flicker = from_fn(move || {
    ///     n += 1;
    ///     if n % 2 == 1 { Some(n) } else { None }
    /// })
    /// .fuse();
    ///
    /// assert_eq!(flicker.next(), Some(1));
    /// assert_eq!(flicker.next(), None);
    /// // ...but the fuse holds it shut.
    /// assert_eq!(flicker.next(), None);
    /// ```
    #[inline]
    fn fuse(self) -> Fuse<Self>
    where
        Self: Sized,
    {
        Fuse::new(self)
    }

    /// Places a clone of `separator` between adjacent elements.
    ///
    /// No separator is ever emitted after the final element.
    ///
    /// # Example
    ///
    /// ```
    /// use reiter::{Iterable, from_vec};
    ///
    /// let spaced: Vec<i32> = from_vec(vec![1, 2, 3]).intersperse(0).collect();
    /// assert_eq!(spaced, [1, 0, 2, 0, 3]);
    /// ```
    #[inline]
    fn intersperse(self, separator: Self::Item) -> Intersperse<Self>
    where
        Self: Sized,
        Self::Item: Clone,
    {
        Intersperse::new(self, separator)
    }

    /// Places a freshly produced separator between adjacent elements.
    ///
    /// Like [`intersperse`](Iterable::intersperse) for separators that are
    /// expensive or impossible to clone.
    #[inline]
    fn intersperse_with<G>(self, separator: G) -> IntersperseWith<Self, G>
    where
        Self: Sized,
        G: FnMut() -> Self::Item,
    {
        IntersperseWith::new(self, separator)
    }

    /// Groups elements into `Vec` chunks of `size`; a final chunk shorter
    /// than `size` is yielded once if the length does not divide evenly.
    ///
    /// # Panics
    ///
    /// Panics if `size` is zero.
    ///
    /// # Example
    ///
    /// ```
    /// use reiter::{Iterable, from_vec};
    ///
    /// let chunks: Vec<Vec<i32>> = from_vec(vec![1, 2, 3, 4, 5]).array_chunks(2).collect();
    /// assert_eq!(chunks, [vec![1, 2], vec![3, 4], vec![5]]);
    /// ```
    #[inline]
    fn array_chunks(self, size: usize) -> ArrayChunks<Self>
    where
        Self: Sized,
    {
        ArrayChunks::new(self, size)
    }

    /// Groups *consecutive* elements for which `eq` holds into `Vec`
    /// chunks.
    ///
    /// # Example
    ///
    /// ```
    /// use reiter::{Iterable, from_vec};
    ///
    /// let groups: Vec<Vec<i32>> =
    ///     from_vec(vec![1, 1, 2, 2, 2, 3]).chunk_by(|a, b| a == b).collect();
    /// assert_eq!(groups, [vec![1, 1], vec![2, 2, 2], vec![3]]);
    /// ```
    #[inline]
    fn chunk_by<P>(self, eq: P) -> ChunkBy<Self, P>
    where
        Self: Sized,
        P: FnMut(&Self::Item, &Self::Item) -> bool,
    {
        ChunkBy::new(self, eq)
    }

    /// Calls `f` on overlapping windows of `size` elements, advancing one
    /// element at a time. A sequence shorter than `size` yields nothing and
    /// never calls `f`.
    ///
    /// # Panics
    ///
    /// Panics if `size` is zero.
    ///
    /// # Example
    ///
    /// ```
    /// use reiter::{Iterable, from_vec};
    ///
    /// let pairwise_max: Vec<i32> = from_vec(vec![1, 5, 2, 4])
    ///     .map_windows(2, |w| w[0].max(w[1]))
    ///     .collect();
    /// assert_eq!(pairwise_max, [5, 5, 4]);
    /// ```
    #[inline]
    fn map_windows<R, F>(self, size: usize, f: F) -> MapWindows<Self, F>
    where
        Self: Sized,
        F: FnMut(&[Self::Item]) -> R,
    {
        MapWindows::new(self, size, f)
    }

    /// Repeats the sequence endlessly by caching every element on the first
    /// pass and replaying the cache thereafter.
    ///
    /// An empty sequence cycles into an empty sequence.
    ///
    /// # Example
    ///
    /// ```
    /// use reiter::{Iterable, from_vec};
    ///
    /// let looped: Vec<i32> = from_vec(vec![1, 2]).cycle().take(5).collect();
    /// assert_eq!(looped, [1, 2, 1, 2, 1]);
    /// ```
    #[inline]
    fn cycle(self) -> Cycle<Self>
    where
        Self: Sized,
        Self::Item: Clone,
    {
        Cycle::new(self)
    }

    /// Reverses the direction of a double-ended sequence.
    ///
    /// # Example
    ///
    /// ```
    /// use reiter::{range, Iterable};
    ///
    /// let countdown: Vec<i32> = range(0, 4).rev().collect();
    /// assert_eq!(countdown, [3, 2, 1, 0]);
    /// ```
    #[inline]
    fn rev(self) -> Rev<Self>
    where
        Self: Sized + DoubleEndedIterable,
    {
        Rev::new(self)
    }

    /// Borrows the iterable rather than consuming it, so adapters can be
    /// applied while keeping ownership.
    ///
    /// # Example
    ///
    /// ```
    /// use reiter::{Iterable, from_vec};
    ///
    /// let mut iter = from_vec(vec![1, 2, 3, 4]);
    /// let head: Vec<i32> = iter.by_ref().take(2).collect();
    /// assert_eq!(head, [1, 2]);
    /// // `iter` is still usable after the adapter is done with it.
    /// assert_eq!(iter.next(), Some(3));
    /// ```
    #[inline]
    fn by_ref(&mut self) -> &mut Self
    where
        Self: Sized,
    {
        self
    }

    // ---- consumers ------------------------------------------------------

    /// Drains the sequence into a collection.
    ///
    /// # Example
    ///
    /// ```
    /// use reiter::{Iterable, from_vec};
    ///
    /// let letters: String = from_vec(vec!['r', 'u', 's', 't']).collect();
    /// assert_eq!(letters, "rust");
    ///
    /// // Collecting `Result`s short-circuits on the first `Err`:
    /// let nums: Result<Vec<i32>, &str> =
    ///     from_vec(vec![Ok(1), Err("nope"), Ok(3)]).collect();
    /// assert_eq!(nums, Err("nope"));
    /// ```
    #[inline]
    fn collect<C>(self) -> C
    where
        Self: Sized,
        C: FromIterable<Self::Item>,
    {
        C::from_iterable(self)
    }

    /// Splits the elements into those satisfying the predicate and those
    /// that do not, preserving order within each side.
    ///
    /// # Example
    ///
    /// ```
    /// use reiter::{Iterable, from_vec};
    ///
    /// let (even, odd): (Vec<i32>, Vec<i32>) =
    ///     from_vec(vec![1, 2, 3, 4]).partition(|x| x % 2 == 0);
    /// assert_eq!(even, [2, 4]);
    /// assert_eq!(odd, [1, 3]);
    /// ```
    fn partition<C, F>(self, mut f: F) -> (C, C)
    where
        Self: Sized,
        C: Default + Extendable<Self::Item>,
        F: FnMut(&Self::Item) -> bool,
    {
        let mut matched = C::default();
        let mut unmatched = C::default();
        self.for_each(|x| {
            if f(&x) {
                matched.extend_one(x);
            } else {
                unmatched.extend_one(x);
            }
        });
        (matched, unmatched)
    }

    /// Splits a sequence of pairs into a pair of collections.
    ///
    /// # Example
    ///
    /// ```
    /// use reiter::{Iterable, from_vec};
    ///
    /// let (ids, names): (Vec<u32>, Vec<&str>) =
    ///     from_vec(vec![(1, "ada"), (2, "grace")]).unzip();
    /// assert_eq!(ids, [1, 2]);
    /// assert_eq!(names, ["ada", "grace"]);
    /// ```
    fn unzip<A, B, FromA, FromB>(self) -> (FromA, FromB)
    where
        Self: Sized + Iterable<Item = (A, B)>,
        FromA: Default + Extendable<A>,
        FromB: Default + Extendable<B>,
    {
        let mut left = FromA::default();
        let mut right = FromB::default();
        self.for_each(|(a, b)| {
            left.extend_one(a);
            right.extend_one(b);
        });
        (left, right)
    }

    /// Sums the elements.
    ///
    /// Summing `Option`s or `Result`s stops at the first absence or error,
    /// mirroring [`collect`](Iterable::collect).
    ///
    /// # Example
    ///
    /// ```
    /// use reiter::{Iterable, from_vec};
    ///
    /// let total: i32 = from_vec(vec![1, 2, 3]).sum();
    /// assert_eq!(total, 6);
    /// ```
    #[inline]
    fn sum<S>(self) -> S
    where
        Self: Sized,
        S: Sum<Self::Item>,
    {
        Sum::sum(self)
    }

    /// Multiplies the elements.
    ///
    /// # Example
    ///
    /// ```
    /// use reiter::{range, Iterable};
    ///
    /// let factorial: u64 = range(1u64, 6).product();
    /// assert_eq!(factorial, 120);
    /// ```
    #[inline]
    fn product<P>(self) -> P
    where
        Self: Sized,
        P: Product<Self::Item>,
    {
        Product::product(self)
    }

    /// Returns the maximum element; on ties the later element wins.
    ///
    /// # Example
    ///
    /// ```
    /// use reiter::{Iterable, from_vec};
    ///
    /// assert_eq!(from_vec(vec![2, 7, 3]).max(), Some(7));
    /// assert_eq!(from_vec(Vec::<i32>::new()).max(), None);
    /// ```
    #[inline]
    fn max(self) -> Option<Self::Item>
    where
        Self: Sized,
        Self::Item: Ord,
    {
        self.max_by(Ord::cmp)
    }

    /// Returns the minimum element; on ties the earlier element wins.
    #[inline]
    fn min(self) -> Option<Self::Item>
    where
        Self: Sized,
        Self::Item: Ord,
    {
        self.min_by(Ord::cmp)
    }

    /// Returns the element giving the maximum value of `key`.
    ///
    /// # Example
    ///
    /// ```
    /// use reiter::{Iterable, from_vec};
    ///
    /// let longest = from_vec(vec!["hi", "hello", "hey"]).max_by_key(|s| s.len());
    /// assert_eq!(longest, Some("hello"));
    /// ```
    #[inline]
    fn max_by_key<K, F>(self, mut key: F) -> Option<Self::Item>
    where
        Self: Sized,
        K: Ord,
        F: FnMut(&Self::Item) -> K,
    {
        self.map(|x| (key(&x), x))
            .max_by(|a, b| a.0.cmp(&b.0))
            .map(|(_, x)| x)
    }

    /// Returns the maximum element under `compare`; on ties the later
    /// element wins.
    #[inline]
    fn max_by<F>(self, mut compare: F) -> Option<Self::Item>
    where
        Self: Sized,
        F: FnMut(&Self::Item, &Self::Item) -> Ordering,
    {
        self.reduce(|a, b| if compare(&a, &b).is_gt() { a } else { b })
    }

    /// Returns the element giving the minimum value of `key`.
    #[inline]
    fn min_by_key<K, F>(self, mut key: F) -> Option<Self::Item>
    where
        Self: Sized,
        K: Ord,
        F: FnMut(&Self::Item) -> K,
    {
        self.map(|x| (key(&x), x))
            .min_by(|a, b| a.0.cmp(&b.0))
            .map(|(_, x)| x)
    }

    /// Returns the minimum element under `compare`; on ties the earlier
    /// element wins.
    #[inline]
    fn min_by<F>(self, mut compare: F) -> Option<Self::Item>
    where
        Self: Sized,
        F: FnMut(&Self::Item, &Self::Item) -> Ordering,
    {
        self.reduce(|a, b| if compare(&a, &b).is_le() { a } else { b })
    }

    // ---- lexicographic comparison ---------------------------------------

    /// Lexicographically compares against another iterable.
    ///
    /// # Example
    ///
    /// ```
    /// use core::cmp::Ordering;
    /// use reiter::{Iterable, from_vec};
    ///
    /// assert_eq!(from_vec(vec![1, 2]).cmp(from_vec(vec![1, 2, 3])), Ordering::Less);
    /// ```
    #[inline]
    fn cmp<I>(self, other: I) -> Ordering
    where
        Self: Sized,
        I: IntoIterable<Item = Self::Item>,
        Self::Item: Ord,
    {
        self.cmp_by(other, |x, y| x.cmp(&y))
    }

    /// Lexicographically compares against another iterable using `cmp` as
    /// the per-element comparison.
    fn cmp_by<I, F>(mut self, other: I, mut cmp: F) -> Ordering
    where
        Self: Sized,
        I: IntoIterable,
        F: FnMut(Self::Item, I::Item) -> Ordering,
    {
        let mut other = other.into_iterable();
        loop {
            let x = match self.next() {
                None => {
                    return if other.next().is_none() {
                        Ordering::Equal
                    } else {
                        Ordering::Less
                    };
                }
                Some(x) => x,
            };
            let y = match other.next() {
                None => return Ordering::Greater,
                Some(y) => y,
            };
            match cmp(x, y) {
                Ordering::Equal => {}
                non_eq => return non_eq,
            }
        }
    }

    /// Lexicographically compares against another iterable of possibly
    /// incomparable elements.
    #[inline]
    fn partial_cmp<I>(self, other: I) -> Option<Ordering>
    where
        Self: Sized,
        I: IntoIterable,
        Self::Item: PartialOrd<I::Item>,
    {
        self.partial_cmp_by(other, |x, y| x.partial_cmp(&y))
    }

    /// Lexicographic partial comparison with a caller-supplied per-element
    /// comparison.
    fn partial_cmp_by<I, F>(mut self, other: I, mut partial_cmp: F) -> Option<Ordering>
    where
        Self: Sized,
        I: IntoIterable,
        F: FnMut(Self::Item, I::Item) -> Option<Ordering>,
    {
        let mut other = other.into_iterable();
        loop {
            let x = match self.next() {
                None => {
                    return if other.next().is_none() {
                        Some(Ordering::Equal)
                    } else {
                        Some(Ordering::Less)
                    };
                }
                Some(x) => x,
            };
            let y = match other.next() {
                None => return Some(Ordering::Greater),
                Some(y) => y,
            };
            match partial_cmp(x, y) {
                Some(Ordering::Equal) => {}
                non_eq => return non_eq,
            }
        }
    }

    /// Element-wise equality against another iterable, including length.
    ///
    /// # Example
    ///
    /// ```
    /// use reiter::{range, Iterable, from_vec};
    ///
    /// assert!(from_vec(vec![0, 1, 2]).eq(range(0, 3)));
    /// assert!(!from_vec(vec![0, 1]).eq(range(0, 3)));
    /// ```
    #[inline]
    fn eq<I>(self, other: I) -> bool
    where
        Self: Sized,
        I: IntoIterable,
        Self::Item: PartialEq<I::Item>,
    {
        self.eq_by(other, |x, y| x == y)
    }

    /// Element-wise equality with a caller-supplied equivalence.
    fn eq_by<I, F>(mut self, other: I, mut eq: F) -> bool
    where
        Self: Sized,
        I: IntoIterable,
        F: FnMut(Self::Item, I::Item) -> bool,
    {
        let mut other = other.into_iterable();
        loop {
            let x = match self.next() {
                None => return other.next().is_none(),
                Some(x) => x,
            };
            let y = match other.next() {
                None => return false,
                Some(y) => y,
            };
            if !eq(x, y) {
                return false;
            }
        }
    }

    /// Element-wise inequality against another iterable.
    #[inline]
    fn ne<I>(self, other: I) -> bool
    where
        Self: Sized,
        I: IntoIterable,
        Self::Item: PartialEq<I::Item>,
    {
        !self.eq(other)
    }

    /// Lexicographically `<` against another iterable.
    #[inline]
    fn lt<I>(self, other: I) -> bool
    where
        Self: Sized,
        I: IntoIterable,
        Self::Item: PartialOrd<I::Item>,
    {
        matches!(self.partial_cmp(other), Some(Ordering::Less))
    }

    /// Lexicographically `<=` against another iterable.
    #[inline]
    fn le<I>(self, other: I) -> bool
    where
        Self: Sized,
        I: IntoIterable,
        Self::Item: PartialOrd<I::Item>,
    {
        matches!(
            self.partial_cmp(other),
            Some(Ordering::Less | Ordering::Equal)
        )
    }

    /// Lexicographically `>` against another iterable.
    #[inline]
    fn gt<I>(self, other: I) -> bool
    where
        Self: Sized,
        I: IntoIterable,
        Self::Item: PartialOrd<I::Item>,
    {
        matches!(self.partial_cmp(other), Some(Ordering::Greater))
    }

    /// Lexicographically `>=` against another iterable.
    #[inline]
    fn ge<I>(self, other: I) -> bool
    where
        Self: Sized,
        I: IntoIterable,
        Self::Item: PartialOrd<I::Item>,
    {
        matches!(
            self.partial_cmp(other),
            Some(Ordering::Greater | Ordering::Equal)
        )
    }

    /// Checks that the elements are in non-decreasing order.
    ///
    /// # Example
    ///
    /// ```
    /// use reiter::{Iterable, from_vec};
    ///
    /// assert!(from_vec(vec![1, 1, 2]).is_sorted());
    /// assert!(!from_vec(vec![2, 1]).is_sorted());
    /// ```
    #[inline]
    fn is_sorted(self) -> bool
    where
        Self: Sized,
        Self::Item: PartialOrd,
    {
        self.is_sorted_by(|a, b| a <= b)
    }

    /// Checks ordering with a caller-supplied "is correctly ordered"
    /// relation on adjacent elements.
    fn is_sorted_by<F>(mut self, mut compare: F) -> bool
    where
        Self: Sized,
        F: FnMut(&Self::Item, &Self::Item) -> bool,
    {
        let mut last = match self.next() {
            Some(x) => x,
            None => return true,
        };
        self.all(|curr| {
            if !compare(&last, &curr) {
                return false;
            }
            last = curr;
            true
        })
    }

    /// Checks that the values of `key` are in non-decreasing order.
    #[inline]
    fn is_sorted_by_key<K, F>(self, key: F) -> bool
    where
        Self: Sized,
        K: PartialOrd,
        F: FnMut(Self::Item) -> K,
    {
        self.map(key).is_sorted()
    }

    /// Bridges into the `core::iter` world, so `for` loops and std
    /// consumers work on any chain.
    ///
    /// # Example
    ///
    /// ```
    /// use reiter::{Iterable, from_vec};
    ///
    /// let mut sum = 0;
    /// for x in from_vec(vec![1, 2, 3]).map(|x| x * 2).into_core_iter() {
    ///     sum += x;
    /// }
    /// assert_eq!(sum, 12);
    /// ```
    #[inline]
    fn into_core_iter(self) -> CoreIter<Self>
    where
        Self: Sized,
    {
        CoreIter::new(self)
    }
}

impl<I: Iterable + ?Sized> Iterable for &mut I {
    type Item = I::Item;

    #[inline]
    fn next(&mut self) -> Option<I::Item> {
        (**self).next()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (**self).size_hint()
    }

    #[inline]
    fn advance_by(&mut self, n: usize) -> Result<(), Shortfall> {
        (**self).advance_by(n)
    }

    #[inline]
    fn nth(&mut self, n: usize) -> Option<I::Item> {
        (**self).nth(n)
    }
}
