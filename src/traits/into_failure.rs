//! Trait for converting error values into a [`Failure`].
//!
//! # Implementations
//!
//! - `Failure` - identity
//! - `&'static str`, `String`, `Cow<'static, str>` - become the failure message
//! - any `Display` type registered with [`impl_into_failure!`](crate::impl_into_failure)
//!
//! # Examples
//!
//! ```
//! use result_rail::{traits::IntoFailure, Failure};
//!
//! assert_eq!("timeout".into_failure(), Failure::new("timeout"));
//! assert_eq!(String::from("owned").into_failure().message(), "owned");
//! ```
use crate::types::alloc_type::{Cow, String};
use crate::types::Failure;

/// Converts an error value into a [`Failure`] so it can join a diagnostic chain.
///
/// This is the bound used by [`Computation::context`](crate::Computation::context)
/// and [`ResultExt`](crate::traits::ResultExt).
///
/// ```
/// use result_rail::{traits::IntoFailure, Failure};
///
/// struct Timeout { millis: u64 }
///
/// impl IntoFailure for Timeout {
///     fn into_failure(self) -> Failure {
///         result_rail::failure!("timed out after {}ms", self.millis)
///     }
/// }
///
/// assert_eq!(Timeout { millis: 30 }.into_failure().message(), "timed out after 30ms");
/// ```
#[diagnostic::on_unimplemented(
    message = "`{Self}` cannot be converted into a `Failure`",
    label = "this type does not implement `IntoFailure`",
    note = "implement `IntoFailure` manually or use `impl_into_failure!({Self})`"
)]
pub trait IntoFailure {
    /// Performs the conversion.
    fn into_failure(self) -> Failure;
}

impl IntoFailure for Failure {
    #[inline]
    fn into_failure(self) -> Failure {
        self
    }
}

impl IntoFailure for &'static str {
    #[inline]
    fn into_failure(self) -> Failure {
        Failure::new(self)
    }
}

impl IntoFailure for String {
    #[inline]
    fn into_failure(self) -> Failure {
        Failure::new(self)
    }
}

impl IntoFailure for Cow<'static, str> {
    #[inline]
    fn into_failure(self) -> Failure {
        Failure::new(self)
    }
}
