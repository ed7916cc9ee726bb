#![forbid(unsafe_code)]
#![no_std]
#![deny(missing_docs)]
#![doc = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/README.md"))]

extern crate alloc;

#[cfg(test)]
extern crate std;

/// Internal invariant checks. These guard states that safe callers cannot
/// reach; they compile to nothing in release builds.
macro_rules! requires {
    ($cond:expr $(, $msg:literal)?) => {
        debug_assert!($cond $(, $msg)?)
    };
}

mod adapters;
mod sources;
mod traits;

pub use self::adapters::{
    ArrayChunks, Chain, ChunkBy, Cycle, Enumerate, Filter, FilterMap, FlatMap, Flatten, Fuse,
    Inspect, Intersperse, IntersperseWith, Map, MapWhile, MapWindows, Peekable, Rev, Scan, Skip,
    SkipWhile, StepBy, Take, TakeWhile, Zip,
};
pub use self::sources::{
    compat, empty, from_fn, from_slice, from_vec, once, once_with, range, repeat, repeat_with,
    successors, Compat, CoreIter, Empty, FromFn, Once, OnceWith, RangeIter, RangeStep, Repeat,
    RepeatWith, SliceIter, Successors, VecIter,
};
pub use self::traits::{
    DoubleEndedIterable, ExactSizeIterable, Extendable, FromIterable, FusedIterable, IntoIterable,
    Iterable, Product, Shortfall, Sum,
};

#[cfg(test)]
mod tests {
    //! Cross-adapter composition tests. Single-adapter behavior is
    //! covered next to each adapter; these exercise whole stacks.

    use crate::{compat, from_slice, from_vec, range, DoubleEndedIterable, Iterable};
    use alloc::collections::BTreeMap;
    use alloc::string::String;
    use alloc::vec;
    use alloc::vec::Vec;
    use proptest::prelude::*;

    #[test]
    fn deep_stack_matches_core() {
        let ours: Vec<i32> = range(0, 50)
            .map(|x| x * 2)
            .filter(|x| x % 3 != 0)
            .skip(2)
            .step_by(3)
            .take(4)
            .collect();
        let expected: Vec<i32> = (0..50)
            .map(|x| x * 2)
            .filter(|x| x % 3 != 0)
            .skip(2)
            .step_by(3)
            .take(4)
            .collect();
        assert_eq!(ours, expected);
    }

    #[test]
    fn reversing_a_chained_map() {
        let ours: Vec<i32> = from_vec(vec![1, 2])
            .chain(from_vec(vec![3, 4]))
            .map(|x| x + 1)
            .rev()
            .collect();
        assert_eq!(ours, [5, 4, 3, 2]);
    }

    #[test]
    fn mixed_direction_through_a_stack() {
        let data = [10, 20, 30, 40];
        let mut iter = from_slice(&data)
            .enumerate()
            .map(|(i, v)| (i, *v))
            .filter(|(i, _)| i % 2 == 0);
        assert_eq!(iter.next_back(), Some((2, 30)));
        assert_eq!(iter.next(), Some((0, 10)));
        assert_eq!(iter.next_back(), None);
        assert_eq!(iter.next(), None);
    }

    #[test]
    fn peek_through_an_interspersed_stream() {
        let mut iter = from_vec(vec!["a", "b"]).intersperse(",").peekable();
        assert_eq!(iter.peek(), Some(&"a"));
        let joined: String = iter.collect();
        assert_eq!(joined, "a,b");
    }

    #[test]
    fn short_circuit_crosses_adapter_layers() {
        let mut pulls = 0;
        let source = crate::from_fn(|| {
            pulls += 1;
            Some(pulls)
        });
        let found = source
            .map(|x| x * 2)
            .filter(|x| x % 4 == 0)
            .find(|&x| x > 10);
        assert_eq!(found, Some(12));
        // find stopped at the sixth pull; nothing was over-consumed.
        assert_eq!(pulls, 6);
    }

    #[test]
    fn collect_round_trips() {
        let map: BTreeMap<i32, char> = range(0, 3).zip(from_vec(vec!['a', 'b', 'c'])).collect();
        assert_eq!(map.len(), 3);
        assert_eq!(map[&1], 'b');

        let grouped: Option<Vec<i32>> = from_vec(vec![Some(1), Some(2)])
            .chain(from_vec(vec![Some(3)]))
            .collect();
        assert_eq!(grouped, Some(vec![1, 2, 3]));
    }

    #[test]
    fn flattened_windows_compose() {
        let ours: Vec<i32> = from_vec(vec![1, 2, 3, 4])
            .map_windows(2, |w| w[0] + w[1])
            .flat_map(|sum| from_vec(vec![sum, -sum]))
            .collect();
        assert_eq!(ours, [3, -3, 5, -5, 7, -7]);
    }

    proptest! {
        #[test]
        fn pipeline_matches_core(
            data in any::<Vec<u8>>(),
            skip in 0..5usize,
            take in 0..20usize,
            step in 1..4usize,
        ) {
            let ours: Vec<u16> = from_vec(data.clone())
                .map(u16::from)
                .filter(|x| x % 3 != 0)
                .skip(skip)
                .take(take)
                .step_by(step)
                .collect();
            let theirs: Vec<u16> = data
                .into_iter()
                .map(u16::from)
                .filter(|x| x % 3 != 0)
                .skip(skip)
                .take(take)
                .step_by(step)
                .collect();
            prop_assert_eq!(ours, theirs);
        }

        #[test]
        fn reversed_pipeline_matches_core(data in any::<Vec<u8>>()) {
            let ours: Vec<u8> = from_vec(data.clone()).map(|x| x.wrapping_mul(3)).rev().collect();
            let theirs: Vec<u8> = data.into_iter().map(|x| x.wrapping_mul(3)).rev().collect();
            prop_assert_eq!(ours, theirs);
        }

        #[test]
        fn interleaved_ends_match_core(
            data in any::<Vec<u8>>(),
            ops in prop::collection::vec(any::<bool>(), 0..12),
        ) {
            let mut ours = from_vec(data.clone());
            let mut theirs = data.into_iter();
            for from_front in ops {
                if from_front {
                    prop_assert_eq!(ours.next(), theirs.next());
                } else {
                    prop_assert_eq!(ours.next_back(), theirs.next_back());
                }
            }
        }

        #[test]
        fn compat_round_trip(data in any::<Vec<u8>>()) {
            let round_tripped: Vec<u8> = compat(data.clone()).into_core_iter().collect();
            prop_assert_eq!(round_tripped, data);
        }

        #[test]
        fn size_hint_brackets_reality(
            data in any::<Vec<u8>>(),
            skip in 0..4usize,
            take in 0..12usize,
        ) {
            let iter = from_vec(data).skip(skip).take(take).enumerate();
            let (lower, upper) = iter.size_hint();
            let actual = iter.count();
            prop_assert!(lower <= actual);
            if let Some(upper) = upper {
                prop_assert!(actual <= upper);
            }
        }
    }
}
