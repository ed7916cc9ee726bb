//! Leaf producers: iterables with no wrapped inner iterable, sourcing
//! elements from a container, a range, a function, or a `core::iter`
//! iterator.

mod compat;
mod empty;
mod from_fn;
mod once;
mod range;
mod repeat;
mod slice;
mod successors;
mod vec;

pub use self::compat::{compat, Compat, CoreIter};
pub use self::empty::{empty, Empty};
pub use self::from_fn::{from_fn, FromFn};
pub use self::once::{once, once_with, Once, OnceWith};
pub use self::range::{range, RangeIter, RangeStep};
pub use self::repeat::{repeat, repeat_with, Repeat, RepeatWith};
pub use self::slice::{from_slice, SliceIter};
pub use self::successors::{successors, Successors};
pub use self::vec::{from_vec, VecIter};
