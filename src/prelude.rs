//! Convenience re-exports for common usage patterns.
//!
//! ```
//! use result_rail::prelude::*;
//! ```
//!
//! # What's Included
//!
//! - **Constructors**: [`ok`], [`error`], [`zero`], [`from_fn`], [`from_nilable`], [`sequence`]
//! - **Macros**: [`defer!`], [`failure!`]
//! - **Types**: [`Failure`], [`BoxComputation`]
//! - **Traits**: [`Computation`], [`NilableExt`], [`IntoFailure`], [`ResultExt`]
//!
//! # Examples
//!
//! ```
//! use result_rail::prelude::*;
//!
//! fn port(raw: &'static str) -> impl Computation<Output = u16, Error = Failure> {
//!     defer!(raw.parse::<u16>().map_err(|e| Failure::from_error(&e)))
//!         .filter_or_else(|p| *p >= 1024, |p| failure!("port {} is privileged", p))
//!         .context("reading port")
//! }
//!
//! assert_eq!(port("8080").run(), Ok(8080));
//! assert_eq!(
//!     port("80").run().unwrap_err().to_string(),
//!     "reading port: port 80 is privileged"
//! );
//! ```

// Macros
pub use crate::{defer, failure};

// Constructors
pub use crate::computation::{error, from_fn, ok, sequence, zero};
pub use crate::nilable::from_nilable;

// Core types
pub use crate::computation::BoxComputation;
pub use crate::types::{Failure, FailureResult};

// Traits
pub use crate::computation::Computation;
pub use crate::nilable::NilableExt;
pub use crate::traits::{IntoFailure, ResultExt};
