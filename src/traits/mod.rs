//! The trait layer: the pull contract, its capability extensions, and the
//! conversion/reduction traits consumed by the provided methods.

mod accum;
mod collect;
mod double_ended;
mod exact_size;
mod fused;
mod iterable;

pub use self::accum::{Product, Sum};
pub use self::collect::{Extendable, FromIterable, IntoIterable};
pub use self::double_ended::DoubleEndedIterable;
pub use self::exact_size::ExactSizeIterable;
pub use self::fused::FusedIterable;
pub use self::iterable::{Iterable, Shortfall};
