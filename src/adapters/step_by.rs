use crate::traits::{ExactSizeIterable, FusedIterable, Iterable};

/// An iterable that yields the first element and then every `step`th
/// element after it.
///
/// Created by [`Iterable::step_by`]. The first element is yielded
/// unconditionally regardless of the step; afterwards each pull forwards
/// a `nth(step - 1)` to the inner iterable to stride over the gap.
#[derive(Clone, Debug)]
#[must_use = "iterables are lazy and do nothing unless consumed"]
pub struct StepBy<I> {
    iter: I,
    step_minus_one: usize,
    first_take: bool,
}

impl<I> StepBy<I> {
    #[inline]
    pub(crate) fn new(iter: I, step: usize) -> Self {
        assert!(step != 0, "step_by: step must be non-zero");
        Self {
            iter,
            step_minus_one: step - 1,
            first_take: true,
        }
    }
}

impl<I: Iterable> Iterable for StepBy<I> {
    type Item = I::Item;

    #[inline]
    fn next(&mut self) -> Option<I::Item> {
        if self.first_take {
            self.first_take = false;
            self.iter.next()
        } else {
            self.iter.nth(self.step_minus_one)
        }
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let step = self.step_minus_one + 1;
        let (low, high) = self.iter.size_hint();
        if self.first_take {
            // The unconditional first element shifts the formula.
            let f = |n: usize| if n == 0 { 0 } else { 1 + (n - 1) / step };
            (f(low), high.map(f))
        } else {
            let f = |n: usize| n / step;
            (f(low), high.map(f))
        }
    }
}

impl<I: ExactSizeIterable> ExactSizeIterable for StepBy<I> {}

impl<I: FusedIterable> FusedIterable for StepBy<I> {}

#[cfg(test)]
mod tests {
    use crate::sources::{from_vec, range};
    use crate::traits::Iterable;
    use alloc::vec;
    use alloc::vec::Vec;
    use proptest::prelude::*;

    #[test]
    fn strides_from_the_first_element() {
        let stepped: Vec<i32> = range(0, 10).step_by(3).collect();
        assert_eq!(stepped, [0, 3, 6, 9]);
        // Step of 1 is the identity.
        let dense: Vec<i32> = range(0, 4).step_by(1).collect();
        assert_eq!(dense, [0, 1, 2, 3]);
    }

    #[test]
    #[should_panic(expected = "step must be non-zero")]
    fn zero_step_is_a_construction_error() {
        let _ = from_vec(vec![1]).step_by(0);
    }

    #[test]
    fn size_hint_formulas() {
        let fresh = range(0, 10).step_by(3);
        assert_eq!(fresh.size_hint(), (4, Some(4)));

        let mut started = range(0, 10).step_by(3);
        started.next();
        // 9 elements left, one yield per full stride of 3.
        assert_eq!(started.size_hint(), (3, Some(3)));

        assert_eq!(range(0, 0).step_by(2).size_hint(), (0, Some(0)));
    }

    proptest! {
        #[test]
        fn matches_core_step_by(len in 0..40u8, step in 1..6usize) {
            let data: Vec<u8> = (0..len).collect();
            let ours: Vec<u8> = from_vec(data.clone()).step_by(step).collect();
            let theirs: Vec<u8> = data.into_iter().step_by(step).collect();
            prop_assert_eq!(ours, theirs);
        }
    }
}
