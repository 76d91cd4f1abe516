//! Async bridge for result-rail.
//!
//! Computations are synchronous. This module only lets async code carry them
//! around: a computation can be awaited as a ready future, and a stream whose
//! items are computations can be turned into a stream of their outcomes. The
//! combinators know nothing about polling or timing.
//!
//! # Feature Flag
//!
//! Requires the `async` feature to be enabled:
//!
//! ```toml
//! [dependencies]
//! result-rail = { version = "0.1", features = ["async"] }
//! ```
//!
//! # Examples
//!
//! ```ignore
//! use result_rail::prelude_async::*;
//!
//! async fn settle(order: Order) -> Result<Receipt, Failure> {
//!     validate(order).and_then(charge).context("settling order").ready().await
//! }
//! ```

mod future;
mod occurrences;

pub use future::{ComputationFuture, ComputationFutureExt};
pub use occurrences::{Occurrences, OccurrencesExt};
