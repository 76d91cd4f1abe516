//! Async prelude - the sync prelude plus the async bridge in one import.
//!
//! # Usage
//!
//! ```ignore
//! use result_rail::prelude_async::*;
//!
//! async fn quote(symbol: &'static str) -> Result<f64, Failure> {
//!     lookup(symbol).context("pricing").ready().await
//! }
//! ```
//!
//! # What's Included
//!
//! - Everything from [`prelude`](crate::prelude)
//! - **Traits**: [`ComputationFutureExt`](crate::async_ext::ComputationFutureExt) - `.ready()`,
//!   [`OccurrencesExt`](crate::async_ext::OccurrencesExt) - `.run_each()` for streams
//! - **Types**: [`ComputationFuture`](crate::async_ext::ComputationFuture),
//!   [`Occurrences`](crate::async_ext::Occurrences)

pub use crate::prelude::*;

pub use crate::async_ext::{ComputationFuture, ComputationFutureExt, Occurrences, OccurrencesExt};
