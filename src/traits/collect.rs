use alloc::collections::{BTreeMap, BTreeSet, VecDeque};
use alloc::string::String;
use alloc::vec::Vec;

use crate::traits::Iterable;

/// Conversion into an [`Iterable`].
///
/// The blanket impl makes every `Iterable` trivially convertible, which is
/// what lets combining operations (`chain`, `zip`, the comparison family)
/// accept "anything iterable" without a second trait bound at every call
/// site. Containers themselves are turned into iterables by the explicit
/// constructors (`from_vec`, `from_slice`, `range`, `compat`, …).
pub trait IntoIterable {
    /// The element type of the produced iterable.
    type Item;
    /// The concrete iterable this conversion produces.
    type IntoIter: Iterable<Item = Self::Item>;

    /// Performs the conversion.
    fn into_iterable(self) -> Self::IntoIter;
}

impl<I: Iterable> IntoIterable for I {
    type Item = I::Item;
    type IntoIter = I;

    #[inline]
    fn into_iterable(self) -> I {
        self
    }
}

/// Conversion from an [`Iterable`] — the target side of
/// [`Iterable::collect`].
///
/// # Example
///
/// ```
/// use std::collections::BTreeSet;
/// use reiter::{Iterable, from_vec};
///
/// let unique: BTreeSet<i32> = from_vec(vec![3, 1, 3, 2]).collect();
/// assert_eq!(unique.len(), 3);
/// ```
pub trait FromIterable<A> {
    /// Builds `Self` by draining `iter`.
    fn from_iterable<I: IntoIterable<Item = A>>(iter: I) -> Self;
}

/// Growing a collection from an [`Iterable`] — backs
/// [`Iterable::partition`] and [`Iterable::unzip`].
pub trait Extendable<A> {
    /// Appends a single element.
    fn extend_one(&mut self, item: A);

    /// Appends every element of `iter`.
    #[inline]
    fn extend_from<I: IntoIterable<Item = A>>(&mut self, iter: I) {
        iter.into_iterable().for_each(|x| self.extend_one(x));
    }
}

impl<T> FromIterable<T> for Vec<T> {
    fn from_iterable<I: IntoIterable<Item = T>>(iter: I) -> Self {
        let mut iter = iter.into_iterable();
        let (lower, _) = iter.size_hint();
        let mut out = Vec::with_capacity(lower);
        iter.for_each(|x| out.push(x));
        out
    }
}

impl<T> Extendable<T> for Vec<T> {
    #[inline]
    fn extend_one(&mut self, item: T) {
        self.push(item);
    }

    fn extend_from<I: IntoIterable<Item = T>>(&mut self, iter: I) {
        let mut iter = iter.into_iterable();
        let (lower, _) = iter.size_hint();
        self.reserve(lower);
        iter.for_each(|x| self.push(x));
    }
}

impl<T> FromIterable<T> for VecDeque<T> {
    fn from_iterable<I: IntoIterable<Item = T>>(iter: I) -> Self {
        let mut iter = iter.into_iterable();
        let (lower, _) = iter.size_hint();
        let mut out = VecDeque::with_capacity(lower);
        iter.for_each(|x| out.push_back(x));
        out
    }
}

impl<T> Extendable<T> for VecDeque<T> {
    #[inline]
    fn extend_one(&mut self, item: T) {
        self.push_back(item);
    }
}

impl<T: Ord> FromIterable<T> for BTreeSet<T> {
    fn from_iterable<I: IntoIterable<Item = T>>(iter: I) -> Self {
        let mut out = BTreeSet::new();
        iter.into_iterable().for_each(|x| {
            out.insert(x);
        });
        out
    }
}

impl<T: Ord> Extendable<T> for BTreeSet<T> {
    #[inline]
    fn extend_one(&mut self, item: T) {
        self.insert(item);
    }
}

impl<K: Ord, V> FromIterable<(K, V)> for BTreeMap<K, V> {
    fn from_iterable<I: IntoIterable<Item = (K, V)>>(iter: I) -> Self {
        let mut out = BTreeMap::new();
        iter.into_iterable().for_each(|(k, v)| {
            out.insert(k, v);
        });
        out
    }
}

impl<K: Ord, V> Extendable<(K, V)> for BTreeMap<K, V> {
    #[inline]
    fn extend_one(&mut self, (k, v): (K, V)) {
        self.insert(k, v);
    }
}

impl FromIterable<char> for String {
    fn from_iterable<I: IntoIterable<Item = char>>(iter: I) -> Self {
        let mut out = String::new();
        iter.into_iterable().for_each(|c| out.push(c));
        out
    }
}

impl<'a> FromIterable<&'a str> for String {
    fn from_iterable<I: IntoIterable<Item = &'a str>>(iter: I) -> Self {
        let mut out = String::new();
        iter.into_iterable().for_each(|s| out.push_str(s));
        out
    }
}

impl FromIterable<String> for String {
    fn from_iterable<I: IntoIterable<Item = String>>(iter: I) -> Self {
        let mut out = String::new();
        iter.into_iterable().for_each(|s| out.push_str(&s));
        out
    }
}

impl Extendable<char> for String {
    #[inline]
    fn extend_one(&mut self, item: char) {
        self.push(item);
    }
}

impl<'a> Extendable<&'a str> for String {
    #[inline]
    fn extend_one(&mut self, item: &'a str) {
        self.push_str(item);
    }
}

// Collecting options/results short-circuits at the first absence/error,
// leaving the remainder of the source unconsumed.

impl<A, C: FromIterable<A>> FromIterable<Option<A>> for Option<C> {
    fn from_iterable<I: IntoIterable<Item = Option<A>>>(iter: I) -> Self {
        let mut iter = iter.into_iterable();
        let mut saw_none = false;
        let collected = C::from_iterable(iter.by_ref().map_while(|x| {
            if x.is_none() {
                saw_none = true;
            }
            x
        }));
        if saw_none {
            None
        } else {
            Some(collected)
        }
    }
}

impl<A, E, C: FromIterable<A>> FromIterable<Result<A, E>> for Result<C, E> {
    fn from_iterable<I: IntoIterable<Item = Result<A, E>>>(iter: I) -> Self {
        let mut iter = iter.into_iterable();
        let mut error = None;
        let collected = C::from_iterable(iter.by_ref().map_while(|x| match x {
            Ok(v) => Some(v),
            Err(e) => {
                error = Some(e);
                None
            }
        }));
        match error {
            Some(e) => Err(e),
            None => Ok(collected),
        }
    }
}
