//! Error types and shared collections.
//!
//! # Examples
//!
//! ```
//! use result_rail::types::Failure;
//!
//! let err = Failure::new("disk full").context("writing snapshot");
//! assert_eq!(err.messages().as_slice(), ["writing snapshot", "disk full"]);
//! ```
use smallvec::SmallVec;

pub mod alloc_type;
pub mod failure;

pub use failure::{Chain, Failure};

/// SmallVec-backed collection used when walking failure chains.
///
/// Uses inline storage for up to 4 elements; chains deeper than that are rare.
pub type ErrorVec<E> = SmallVec<[E; 4]>;

/// Result alias whose error side is a [`Failure`].
pub type FailureResult<T> = Result<T, Failure>;
