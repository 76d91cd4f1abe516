//! Conversion and extension traits around [`Failure`](crate::Failure).
//!
//! - [`IntoFailure`]: converts error values into a [`Failure`](crate::Failure)
//! - [`ResultExt`]: wraps the error of a settled `Result` under a new message
//!
//! The central [`Computation`](crate::Computation) trait lives in
//! [`computation`](crate::computation).
//!
//! # Examples
//!
//! ```
//! use result_rail::traits::{IntoFailure, ResultExt};
//!
//! let err = Err::<(), _>("eof").wrap_err("decoding header").unwrap_err();
//! assert_eq!(err.cause(), Some(&"eof".into_failure()));
//! ```

pub mod into_failure;
pub mod result_ext;

pub use into_failure::IntoFailure;
pub use result_ext::ResultExt;
