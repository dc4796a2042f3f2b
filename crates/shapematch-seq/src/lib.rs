#![deny(missing_docs)]
#![doc = env!("CARGO_PKG_DESCRIPTION")]

/// Permutation generation using Heap's algorithm.
pub mod permutation;

/// Lazy, index-addressable views over sequences.
pub mod view;

pub use permutation::{factorial, index_permutations, permutations, Permutations};
pub use view::{Concat, Mapped, Remapped, SeqView, ViewError, ViewIter};
