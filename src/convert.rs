//! Conversions between computations and their neighbours.
//!
//! - [`from_io`] lifts an unfailable deferred action into a computation that
//!   always succeeds.
//! - [`from_result`] / [`IntoComputation`] replay an already-settled `Result`.
//! - [`to_option`] runs a computation and discards the error.
//!
//! # Examples
//!
//! ```
//! use core::cell::Cell;
//! use result_rail::convert::{from_io, IntoComputation};
//! use result_rail::Computation;
//!
//! let ticks = Cell::new(0u32);
//! let tick = from_io::<_, _, ()>(|| {
//!     ticks.set(ticks.get() + 1);
//!     ticks.get()
//! });
//! assert_eq!(tick.run(), Ok(1));
//!
//! let settled = Ok::<_, &str>(tick.run().unwrap_or(0)).into_computation();
//! assert_eq!(settled.run(), Ok(2));
//! assert_eq!(settled.run(), Ok(2));
//! ```
use core::fmt;
use core::marker::PhantomData;

use crate::computation::Computation;

/// Lifts an unfailable deferred action into a computation that always succeeds.
///
/// The action runs on every invocation; its result is wrapped in `Ok`.
#[inline]
pub fn from_io<A, F, E>(io: F) -> FromIo<F, E>
where
    F: Fn() -> A,
{
    FromIo { io, _error: PhantomData }
}

/// Computation returned by [`from_io`].
pub struct FromIo<F, E> {
    io: F,
    _error: PhantomData<fn() -> E>,
}

impl<A, F, E> Computation for FromIo<F, E>
where
    F: Fn() -> A,
{
    type Output = A;
    type Error = E;

    #[inline]
    fn run(&self) -> Result<A, E> {
        Ok((self.io)())
    }
}

impl<F: Clone, E> Clone for FromIo<F, E> {
    fn clone(&self) -> Self {
        FromIo { io: self.io.clone(), _error: PhantomData }
    }
}

impl<F, E> fmt::Debug for FromIo<F, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FromIo").finish_non_exhaustive()
    }
}

/// Wraps an already-settled `Result`; every invocation yields a clone of it.
///
/// # Examples
///
/// ```
/// use result_rail::{convert::from_result, Computation};
///
/// let parsed = from_result("17".parse::<u8>());
/// assert_eq!(parsed.map(|n| n + 1).run(), Ok(18));
/// ```
#[inline]
pub fn from_result<A, E>(result: Result<A, E>) -> Settled<A, E> {
    Settled { result }
}

/// Computation returned by [`from_result`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Settled<A, E> {
    result: Result<A, E>,
}

impl<A, E> Settled<A, E> {
    /// Returns the stored outcome without cloning it.
    #[inline]
    pub fn into_inner(self) -> Result<A, E> {
        self.result
    }
}

impl<A, E> Computation for Settled<A, E>
where
    A: Clone,
    E: Clone,
{
    type Output = A;
    type Error = E;

    #[inline]
    fn run(&self) -> Result<A, E> {
        self.result.clone()
    }
}

/// Conversion of a value into a computation.
pub trait IntoComputation {
    /// The computation produced.
    type Computation: Computation;

    /// Performs the conversion.
    fn into_computation(self) -> Self::Computation;
}

impl<A, E> IntoComputation for Result<A, E>
where
    A: Clone,
    E: Clone,
{
    type Computation = Settled<A, E>;

    #[inline]
    fn into_computation(self) -> Settled<A, E> {
        from_result(self)
    }
}

/// Runs a computation and keeps only the success value.
///
/// # Examples
///
/// ```
/// use result_rail::{convert::to_option, error, ok};
///
/// assert_eq!(to_option(&ok::<_, ()>(3)), Some(3));
/// assert_eq!(to_option(&error::<i32, _>("gone")), None);
/// ```
#[inline]
pub fn to_option<C>(computation: &C) -> Option<C::Output>
where
    C: Computation,
{
    computation.run().ok()
}
