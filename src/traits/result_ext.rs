//! Extension trait for wrapping the error of an already-settled `Result`.
//!
//! # Examples
//!
//! ```
//! use result_rail::traits::ResultExt;
//!
//! let parsed: Result<u8, &str> = Err("not a number");
//! let err = parsed.wrap_err("reading retry count").unwrap_err();
//!
//! assert_eq!(err.to_string(), "reading retry count: not a number");
//! ```
use crate::traits::IntoFailure;
use crate::types::alloc_type::Cow;
use crate::types::Failure;

/// Adds [`Failure`] wrapping to `Result` values.
///
/// This is the eager counterpart of [`Computation::context`](crate::Computation::context)
/// for code that already holds an outcome.
pub trait ResultExt<T, E> {
    /// Converts the error into a [`Failure`] and wraps it under `message`.
    ///
    /// # Examples
    ///
    /// ```
    /// use result_rail::traits::ResultExt;
    ///
    /// let ok: Result<i32, &str> = Ok(1);
    /// assert_eq!(ok.wrap_err("unused").unwrap(), 1);
    /// ```
    fn wrap_err<M>(self, message: M) -> Result<T, Failure>
    where
        M: Into<Cow<'static, str>>;

    /// Like [`wrap_err`](ResultExt::wrap_err), but the message is only built on failure.
    ///
    /// # Examples
    ///
    /// ```
    /// use result_rail::traits::ResultExt;
    ///
    /// let user_id = 7;
    /// let err = Err::<(), _>("missing")
    ///     .wrap_err_with(|| format!("loading user {}", user_id))
    ///     .unwrap_err();
    /// assert_eq!(err.message(), "loading user 7");
    /// ```
    fn wrap_err_with<M, F>(self, f: F) -> Result<T, Failure>
    where
        M: Into<Cow<'static, str>>,
        F: FnOnce() -> M;
}

impl<T, E> ResultExt<T, E> for Result<T, E>
where
    E: IntoFailure,
{
    #[inline]
    fn wrap_err<M>(self, message: M) -> Result<T, Failure>
    where
        M: Into<Cow<'static, str>>,
    {
        self.map_err(|e| e.into_failure().context(message))
    }

    #[inline]
    fn wrap_err_with<M, F>(self, f: F) -> Result<T, Failure>
    where
        M: Into<Cow<'static, str>>,
        F: FnOnce() -> M,
    {
        self.map_err(|e| e.into_failure().context(f()))
    }
}
