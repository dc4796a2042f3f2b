#![deny(missing_docs)]
#![doc = env!("CARGO_PKG_DESCRIPTION")]
//!
//! # Shapematch Align
//!
//! Recovers which point of an observed arrangement corresponds to which point of a reference
//! arrangement, assuming the two differ by rotation, uniform scale and translation only.
//!
//! ## Key Features
//!
//! - **Closed-form estimation**: the similarity transform is derived from two anchor points
//! - **Chain comparison**: sum of point-wise distances to the transformed template
//! - **Exhaustive matching**: every ordering of the target is scored, `O(n · n!)`
//! - **Cancellation**: cooperative abort through an atomic flag
//!
//! ## Example
//!
//! ```rust
//! use shapematch_algebra::Vec2;
//! use shapematch_align::match_points;
//!
//! let template = vec![
//!     Vec2::new(0.0, 0.0),
//!     Vec2::new(5.0, 0.0),
//!     Vec2::new(0.0, 5.0),
//!     Vec2::new(5.0, 5.0),
//! ];
//!
//! // the square turned a quarter, shifted by (3, 4) and listed as [c, a, b, d]
//! let target = vec![
//!     Vec2::new(-2.0, 4.0),
//!     Vec2::new(3.0, 4.0),
//!     Vec2::new(3.0, 9.0),
//!     Vec2::new(-2.0, 9.0),
//! ];
//!
//! let result = match_points(&template, &target)?;
//! assert_eq!(result.correspondence, vec![1, 2, 0, 3]);
//! assert!(result.error < 1e-9);
//! # Ok::<(), shapematch_align::MatchError>(())
//! ```

mod compare;
mod error;
mod matcher;
mod similarity;

/// Reading and writing point sets and results as JSON.
pub mod io;

pub use compare::{compare_chains, CompareResult};
pub use error::MatchError;
pub use matcher::{match_points, match_points_with, MatchParams, MatchResult, MIN_POINTS};
pub use similarity::{expectations, Similarity, DEFAULT_DEGENERATE_EPS};
