//! Shorthand macros for building computations and failures.
//!
//! - [`macro@crate::defer`] - wraps a `Result`-producing block in a computation
//!   without running it.
//! - [`macro@crate::failure`] - builds a [`Failure`](crate::Failure) from
//!   `format!`-style arguments.
//! - [`macro@crate::impl_into_failure`] - implements
//!   [`IntoFailure`](crate::traits::IntoFailure) for `Display` types.
//!
//! # Examples
//!
//! ```
//! use result_rail::{defer, failure, Computation};
//!
//! let limit = 3;
//! let checked = defer!({
//!     if limit < 5 { Ok(limit) } else { Err(failure!("limit {} too high", limit)) }
//! });
//!
//! assert_eq!(checked.run(), Ok(3));
//! ```

/// Wraps a `Result`-producing expression or block in a lazy computation.
///
/// The body is evaluated on every `run`, never at the point of the macro.
/// Captured variables are moved into the computation.
///
/// # Examples
///
/// ```
/// use result_rail::{defer, Computation};
///
/// let c = defer!(Ok::<_, ()>(1 + 1));
/// assert_eq!(c.run(), Ok(2));
///
/// let c = defer!({
///     let raw = "12";
///     raw.parse::<i32>()
/// });
/// assert_eq!(c.run(), Ok(12));
/// ```
#[macro_export]
macro_rules! defer {
    ($expr:expr $(,)?) => {
        $crate::computation::from_fn(move || $expr)
    };
}

/// Builds a [`Failure`](crate::Failure) from `format!`-style arguments.
///
/// Static messages are stored without allocating.
///
/// # Examples
///
/// ```
/// use result_rail::failure;
///
/// let id = 42;
/// assert_eq!(failure!("user {} not found", id).message(), "user 42 not found");
/// assert_eq!(failure!("plain").message(), "plain");
/// ```
#[macro_export]
macro_rules! failure {
    ($($arg:tt)*) => {
        $crate::types::Failure::from_args(format_args!($($arg)*))
    };
}

/// Implements [`IntoFailure`](crate::traits::IntoFailure) for types that implement `Display`.
///
/// The `Display` output becomes the failure message.
///
/// # Examples
///
/// ```
/// use result_rail::{error, impl_into_failure, Computation};
///
/// #[derive(Clone, Debug)]
/// struct Timeout;
///
/// impl core::fmt::Display for Timeout {
///     fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
///         f.write_str("request timed out")
///     }
/// }
///
/// impl_into_failure!(Timeout);
///
/// let err = error::<(), _>(Timeout).context("syncing inbox").run().unwrap_err();
/// assert_eq!(err.to_string(), "syncing inbox: request timed out");
/// ```
#[macro_export]
macro_rules! impl_into_failure {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl $crate::traits::IntoFailure for $ty {
                #[inline]
                fn into_failure(self) -> $crate::types::Failure {
                    $crate::types::Failure::from_args(format_args!("{}", self))
                }
            }
        )+
    };
}
