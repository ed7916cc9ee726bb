//! The adapter set: wrappers around one or two inner iterables, created by
//! the [`Iterable`](crate::Iterable) provided methods.
//!
//! Every adapter is lazy — construction pulls nothing — and each overrides
//! whichever default methods it can service better than the generic `next`
//! loop, most importantly `try_fold`, which upgrades the whole
//! short-circuiting consumer family at once.

mod array_chunks;
mod chain;
mod chunk_by;
mod cycle;
mod enumerate;
mod filter;
mod filter_map;
mod flatten;
mod fuse;
mod inspect;
mod intersperse;
mod map;
mod map_while;
mod map_windows;
mod peekable;
mod rev;
mod scan;
mod skip;
mod skip_while;
mod step_by;
mod take;
mod take_while;
mod zip;

pub use self::array_chunks::ArrayChunks;
pub use self::chain::Chain;
pub use self::chunk_by::ChunkBy;
pub use self::cycle::Cycle;
pub use self::enumerate::Enumerate;
pub use self::filter::Filter;
pub use self::filter_map::FilterMap;
pub use self::flatten::{FlatMap, Flatten};
pub use self::fuse::Fuse;
pub use self::inspect::Inspect;
pub use self::intersperse::{Intersperse, IntersperseWith};
pub use self::map::Map;
pub use self::map_while::MapWhile;
pub use self::map_windows::MapWindows;
pub use self::peekable::Peekable;
pub use self::rev::Rev;
pub use self::scan::Scan;
pub use self::skip::Skip;
pub use self::skip_while::SkipWhile;
pub use self::step_by::StepBy;
pub use self::take::Take;
pub use self::take_while::TakeWhile;
pub use self::zip::Zip;
