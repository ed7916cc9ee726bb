use crate::traits::Iterable;

/// An [`Iterable`] that knows its exact remaining length.
///
/// Implementors must keep [`size_hint`](Iterable::size_hint) exact — both
/// bounds equal to the true remaining count — so the default [`len`]
/// can simply read the lower bound. Double-ended implementors report the
/// same length regardless of which end was consumed from.
///
/// [`len`]: ExactSizeIterable::len
///
/// # Example
///
/// ```
/// use reiter::{ExactSizeIterable, Iterable, from_vec};
///
/// let mut iter = from_vec(vec![1, 2, 3]);
/// assert_eq!(iter.len(), 3);
/// iter.next();
/// assert_eq!(iter.len(), 2);
/// ```
pub trait ExactSizeIterable: Iterable {
    /// The exact number of elements remaining.
    #[inline]
    fn len(&self) -> usize {
        let (lower, upper) = self.size_hint();
        requires!(
            upper == Some(lower),
            "ExactSizeIterable requires an exact size_hint"
        );
        lower
    }

    /// Whether the sequence is exhausted.
    #[inline]
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<I: ExactSizeIterable + ?Sized> ExactSizeIterable for &mut I {
    #[inline]
    fn len(&self) -> usize {
        (**self).len()
    }
}
