use crate::traits::Iterable;

/// Marker for iterables that keep returning `None` once exhausted.
///
/// Ordinary iterables make no promise about what happens after the first
/// `None`; a fused one guarantees `next` (and `next_back`, where present)
/// stay `None` forever. [`Fuse`](crate::Fuse) grants this guarantee to any
/// iterable; sources and adapters that already behave this way implement
/// the marker directly so `fuse()` on them costs nothing extra in
/// practice.
pub trait FusedIterable: Iterable {}

impl<I: FusedIterable + ?Sized> FusedIterable for &mut I {}
