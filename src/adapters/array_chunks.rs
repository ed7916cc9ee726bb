use alloc::vec::Vec;

use crate::traits::Iterable;

/// An iterable that groups elements into `Vec` chunks of a fixed size.
///
/// Created by [`Iterable::array_chunks`]. Each pull fills a fresh chunk
/// by drawing up to `size` elements from the inner iterable. When the
/// inner sequence runs out mid-chunk, the partial chunk is yielded once
/// and the adapter latches; an exactly-divisible sequence yields only
/// full chunks.
#[derive(Clone, Debug)]
#[must_use = "iterables are lazy and do nothing unless consumed"]
pub struct ArrayChunks<I> {
    iter: I,
    size: usize,
    done: bool,
}

impl<I> ArrayChunks<I> {
    #[inline]
    pub(crate) fn new(iter: I, size: usize) -> Self {
        assert!(size != 0, "array_chunks: size must be non-zero");
        Self {
            iter,
            size,
            done: false,
        }
    }
}

impl<I: Iterable> Iterable for ArrayChunks<I> {
    type Item = Vec<I::Item>;

    fn next(&mut self) -> Option<Vec<I::Item>> {
        if self.done {
            return None;
        }
        let mut chunk = Vec::with_capacity(self.size);
        for _ in 0..self.size {
            match self.iter.next() {
                Some(item) => chunk.push(item),
                None => {
                    self.done = true;
                    break;
                }
            }
        }
        if chunk.is_empty() {
            None
        } else {
            Some(chunk)
        }
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.done {
            return (0, Some(0));
        }
        let ceil_div = |n: usize| n / self.size + usize::from(n % self.size != 0);
        let (lower, upper) = self.iter.size_hint();
        (ceil_div(lower), upper.map(ceil_div))
    }
}
