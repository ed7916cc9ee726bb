use crate::traits::Iterable;

/// Types that can be produced by summing an iterable — the target side of
/// [`Iterable::sum`].
pub trait Sum<A = Self>: Sized {
    /// Sums the elements of `iter` into `Self`.
    fn sum<I: Iterable<Item = A>>(iter: I) -> Self;
}

/// Types that can be produced by multiplying an iterable — the target side
/// of [`Iterable::product`].
pub trait Product<A = Self>: Sized {
    /// Multiplies the elements of `iter` into `Self`.
    fn product<I: Iterable<Item = A>>(iter: I) -> Self;
}

macro_rules! integer_sum_product {
    ($($t:ty)*) => ($(
        impl Sum for $t {
            fn sum<I: Iterable<Item = Self>>(iter: I) -> Self {
                iter.fold(0, |acc, x| acc + x)
            }
        }

        impl Product for $t {
            fn product<I: Iterable<Item = Self>>(iter: I) -> Self {
                iter.fold(1, |acc, x| acc * x)
            }
        }

        impl<'a> Sum<&'a $t> for $t {
            fn sum<I: Iterable<Item = &'a $t>>(iter: I) -> Self {
                iter.fold(0, |acc, x| acc + x)
            }
        }

        impl<'a> Product<&'a $t> for $t {
            fn product<I: Iterable<Item = &'a $t>>(iter: I) -> Self {
                iter.fold(1, |acc, x| acc * x)
            }
        }
    )*)
}

integer_sum_product! { i8 i16 i32 i64 i128 isize u8 u16 u32 u64 u128 usize }

macro_rules! float_sum_product {
    ($($t:ty)*) => ($(
        impl Sum for $t {
            fn sum<I: Iterable<Item = Self>>(iter: I) -> Self {
                iter.fold(0.0, |acc, x| acc + x)
            }
        }

        impl Product for $t {
            fn product<I: Iterable<Item = Self>>(iter: I) -> Self {
                iter.fold(1.0, |acc, x| acc * x)
            }
        }

        impl<'a> Sum<&'a $t> for $t {
            fn sum<I: Iterable<Item = &'a $t>>(iter: I) -> Self {
                iter.fold(0.0, |acc, x| acc + x)
            }
        }

        impl<'a> Product<&'a $t> for $t {
            fn product<I: Iterable<Item = &'a $t>>(iter: I) -> Self {
                iter.fold(1.0, |acc, x| acc * x)
            }
        }
    )*)
}

float_sum_product! { f32 f64 }

// Summing options/results stops at the first absence/error, leaving the
// rest of the source unconsumed — the same contract as collecting them.

impl<A, T: Sum<A>> Sum<Option<A>> for Option<T> {
    fn sum<I: Iterable<Item = Option<A>>>(iter: I) -> Self {
        let mut iter = iter;
        let mut saw_none = false;
        let total = T::sum(iter.by_ref().map_while(|x| {
            if x.is_none() {
                saw_none = true;
            }
            x
        }));
        if saw_none {
            None
        } else {
            Some(total)
        }
    }
}

impl<A, E, T: Sum<A>> Sum<Result<A, E>> for Result<T, E> {
    fn sum<I: Iterable<Item = Result<A, E>>>(iter: I) -> Self {
        let mut iter = iter;
        let mut error = None;
        let total = T::sum(iter.by_ref().map_while(|x| match x {
            Ok(v) => Some(v),
            Err(e) => {
                error = Some(e);
                None
            }
        }));
        match error {
            Some(e) => Err(e),
            None => Ok(total),
        }
    }
}

impl<A, T: Product<A>> Product<Option<A>> for Option<T> {
    fn product<I: Iterable<Item = Option<A>>>(iter: I) -> Self {
        let mut iter = iter;
        let mut saw_none = false;
        let total = T::product(iter.by_ref().map_while(|x| {
            if x.is_none() {
                saw_none = true;
            }
            x
        }));
        if saw_none {
            None
        } else {
            Some(total)
        }
    }
}

impl<A, E, T: Product<A>> Product<Result<A, E>> for Result<T, E> {
    fn product<I: Iterable<Item = Result<A, E>>>(iter: I) -> Self {
        let mut iter = iter;
        let mut error = None;
        let total = T::product(iter.by_ref().map_while(|x| match x {
            Ok(v) => Some(v),
            Err(e) => {
                error = Some(e);
                None
            }
        }));
        match error {
            Some(e) => Err(e),
            None => Ok(total),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::sources::from_vec;
    use crate::traits::Iterable;
    use alloc::vec;
    use alloc::vec::Vec;

    #[test]
    fn sum_and_product() {
        let sum: i32 = from_vec(vec![1, 2, 3, 4]).sum();
        assert_eq!(sum, 10);
        let product: i32 = from_vec(vec![1, 2, 3, 4]).product();
        assert_eq!(product, 24);
        let empty_sum: i32 = from_vec(Vec::<i32>::new()).sum();
        assert_eq!(empty_sum, 0);
        let empty_product: i32 = from_vec(Vec::<i32>::new()).product();
        assert_eq!(empty_product, 1);
    }

    #[test]
    fn sum_over_references() {
        let data = [1u64, 2, 3];
        let sum: u64 = crate::sources::from_slice(&data).sum();
        assert_eq!(sum, 6);
    }

    #[test]
    fn fallible_sum_short_circuits() {
        let ok: Result<i32, &str> = from_vec(vec![Ok(1), Ok(2)]).sum();
        assert_eq!(ok, Ok(3));
        let err: Result<i32, &str> = from_vec(vec![Ok(1), Err("bad"), Ok(2)]).sum();
        assert_eq!(err, Err("bad"));
        let none: Option<i32> = from_vec(vec![Some(1), None]).sum();
        assert_eq!(none, None);
    }
}
