//! Bridge from optional values into computations.
//!
//! A *nilable* is a value that may be absent. [`from_nilable`] turns a borrowed
//! `Option<&A>` into a computation that succeeds with the referenced value or
//! fails with the error produced by `on_nil`. [`NilableExt`] does the same for
//! an owned `Option<A>`.
//!
//! `on_nil` is only ever called when the value is absent, and only when the
//! computation is run.
//!
//! # Examples
//!
//! ```
//! use std::collections::HashMap;
//! use result_rail::{from_nilable, Computation, Failure};
//!
//! let mut ports = HashMap::new();
//! ports.insert("http", 80u16);
//!
//! let http = from_nilable(ports.get("http"), || Failure::new("no http port"));
//! let ftp = from_nilable(ports.get("ftp"), || Failure::new("no ftp port"));
//!
//! assert_eq!(http.run(), Ok(80));
//! assert_eq!(ftp.run().unwrap_err().message(), "no ftp port");
//! ```
use core::fmt;

use crate::computation::Computation;

/// Creates a computation from a value that may be absent.
///
/// When run, an absent value fails with `on_nil()`; a present one succeeds
/// with a clone of the referenced value.
#[inline]
pub fn from_nilable<'a, A, E, F>(value: Option<&'a A>, on_nil: F) -> FromNilable<'a, A, F>
where
    F: Fn() -> E,
{
    FromNilable { value, on_nil }
}

/// Computation returned by [`from_nilable`].
pub struct FromNilable<'a, A, F> {
    value: Option<&'a A>,
    on_nil: F,
}

impl<A, F, E> Computation for FromNilable<'_, A, F>
where
    A: Clone,
    F: Fn() -> E,
{
    type Output = A;
    type Error = E;

    #[inline]
    fn run(&self) -> Result<A, E> {
        resolve(self.value, &self.on_nil)
    }
}

impl<A, F: Clone> Clone for FromNilable<'_, A, F> {
    fn clone(&self) -> Self {
        Self { value: self.value, on_nil: self.on_nil.clone() }
    }
}

impl<A: fmt::Debug, F> fmt::Debug for FromNilable<'_, A, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FromNilable").field("value", &self.value).finish_non_exhaustive()
    }
}

/// Computation returned by [`NilableExt::into_computation_or`].
#[derive(Clone)]
pub struct FromOption<A, F> {
    value: Option<A>,
    on_nil: F,
}

impl<A, F, E> Computation for FromOption<A, F>
where
    A: Clone,
    F: Fn() -> E,
{
    type Output = A;
    type Error = E;

    #[inline]
    fn run(&self) -> Result<A, E> {
        resolve(self.value.as_ref(), &self.on_nil)
    }
}

impl<A: fmt::Debug, F> fmt::Debug for FromOption<A, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FromOption").field("value", &self.value).finish_non_exhaustive()
    }
}

/// Extension trait turning an owned `Option` into a computation.
///
/// # Examples
///
/// ```
/// use result_rail::{nilable::NilableExt, Computation};
///
/// let missing: Option<String> = None;
/// let c = missing.into_computation_or(|| "name not set");
/// assert_eq!(c.run(), Err("name not set"));
///
/// let present = Some("ada".to_string()).into_computation_or(|| "name not set");
/// assert_eq!(present.map(|s| s.len()).run(), Ok(3));
/// ```
pub trait NilableExt<A> {
    /// Moves the option into a computation that fails with `on_nil()` when it is `None`.
    fn into_computation_or<E, F>(self, on_nil: F) -> FromOption<A, F>
    where
        F: Fn() -> E;
}

impl<A> NilableExt<A> for Option<A> {
    #[inline]
    fn into_computation_or<E, F>(self, on_nil: F) -> FromOption<A, F>
    where
        F: Fn() -> E,
    {
        FromOption { value: self, on_nil }
    }
}

#[inline]
fn resolve<A, E, F>(value: Option<&A>, on_nil: &F) -> Result<A, E>
where
    A: Clone,
    F: Fn() -> E,
{
    match value {
        Some(value) => Ok(value.clone()),
        None => Err(on_nil()),
    }
}
