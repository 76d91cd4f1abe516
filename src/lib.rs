//! Lazy, composable computations that either succeed with a value or fail
//! with an error.
//!
//! A [`Computation`] is a description of work, not its outcome: combinators
//! such as [`map`](Computation::map), [`and_then`](Computation::and_then) or
//! [`or_else`](Computation::or_else) build new computations without running
//! anything, and the outcome only exists once [`run`](Computation::run) is
//! called. Failures are plain values returned from `run`; nothing panics or
//! unwinds on the failure path.
//!
//! Each submodule re-exports its public surface from here, so consumers can
//! simply depend on `result_rail::*` or pick focused pieces as needed.
//!
//! # Examples
//!
//! ## Composing and running
//!
//! ```
//! use result_rail::{ok, Computation, Failure};
//!
//! let price = ok::<_, Failure>(1250u32)
//!     .map(|cents| cents as f64 / 100.0)
//!     .filter_or_else(|p| *p < 100.0, |p| Failure::new(format!("{} exceeds limit", p)));
//!
//! assert_eq!(price.run(), Ok(12.5));
//! ```
//!
//! ## Bridging optional values
//!
//! ```
//! use result_rail::{from_nilable, Computation};
//!
//! let config: Option<&u32> = None;
//! let timeout = from_nilable(config, || "timeout not configured");
//!
//! assert_eq!(timeout.get_or_else(|_| 30), 30);
//! ```
//!
//! ## Diagnostic chains
//!
//! ```
//! use result_rail::{error, Computation};
//!
//! let err = error::<(), _>("socket closed")
//!     .context("sending heartbeat")
//!     .run()
//!     .unwrap_err();
//!
//! assert_eq!(err.to_string(), "sending heartbeat: socket closed");
//! assert_eq!(err.root_cause().message(), "socket closed");
//! ```
#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

/// The `Computation` trait, its constructors and adapters
pub mod computation;
/// Conversions from IO actions and settled results
pub mod convert;
/// Macros for deferred computations and failures
pub mod macros;
/// Bridge from optional values into computations
pub mod nilable;
/// Convenience re-exports for quick starts
pub mod prelude;
/// Conversion and extension traits around `Failure`
pub mod traits;
/// Failure type and shared collections
pub mod types;

/// Future and stream bridge (requires `async` feature)
#[cfg(feature = "async")]
pub mod async_ext;

/// Async prelude - all async utilities in one import (requires `async` feature)
#[cfg(feature = "async")]
pub mod prelude_async;

/// Opt-in span instrumentation (requires `tracing` feature)
#[cfg(feature = "tracing")]
pub mod tracing_ext;

pub use computation::{error, from_fn, ok, sequence, zero, BoxComputation, Computation};
pub use nilable::{from_nilable, NilableExt};
pub use types::{ErrorVec, Failure, FailureResult};
