#![doc = include_str!(concat!("../", env!("CARGO_PKG_README")))]

#[doc(inline)]
pub use shapematch_algebra as algebra;

#[doc(inline)]
pub use shapematch_seq as seq;

#[doc(inline)]
pub use shapematch_align as align;
