use core::fmt;
use core::marker::PhantomData;

use super::Computation;

/// Creates a computation that always succeeds with `value`.
///
/// The value is cloned on every invocation.
///
/// # Examples
///
/// ```
/// use result_rail::{ok, Computation};
///
/// let answer = ok::<_, ()>(42);
/// assert_eq!(answer.run(), Ok(42));
/// assert_eq!(answer.run(), Ok(42));
/// ```
#[inline]
pub fn ok<A, E>(value: A) -> Succeed<A, E> {
    Succeed { value, _error: PhantomData }
}

/// Creates a computation that always fails with `error`.
///
/// # Examples
///
/// ```
/// use result_rail::{error, Computation, Failure};
///
/// let failed = error::<i32, _>(Failure::new("failed"));
/// assert_eq!(failed.run().unwrap_err().message(), "failed");
/// ```
#[inline]
pub fn error<A, E>(error: E) -> Fail<A, E> {
    Fail { error, _value: PhantomData }
}

/// Creates a computation that always succeeds with `A::default()`.
///
/// # Examples
///
/// ```
/// use result_rail::{zero, Computation};
///
/// assert_eq!(zero::<String, ()>().run(), Ok(String::new()));
/// ```
#[inline]
pub fn zero<A, E>() -> Zero<A, E> {
    Zero { _marker: PhantomData }
}

/// Wraps a zero-argument closure returning a `Result`.
///
/// The closure is called on every invocation, never while composing.
///
/// # Examples
///
/// ```
/// use core::cell::Cell;
/// use result_rail::{from_fn, Computation};
///
/// let calls = Cell::new(0);
/// let counted = from_fn(|| {
///     calls.set(calls.get() + 1);
///     Ok::<_, ()>(calls.get())
/// });
///
/// assert_eq!(calls.get(), 0);
/// assert_eq!(counted.run(), Ok(1));
/// assert_eq!(counted.run(), Ok(2));
/// ```
#[inline]
pub fn from_fn<A, E, F>(f: F) -> FromFn<F>
where
    F: Fn() -> Result<A, E>,
{
    FromFn { f }
}

/// Computation returned by [`ok`].
pub struct Succeed<A, E> {
    value: A,
    _error: PhantomData<fn() -> E>,
}

impl<A, E> Computation for Succeed<A, E>
where
    A: Clone,
{
    type Output = A;
    type Error = E;

    #[inline]
    fn run(&self) -> Result<A, E> {
        Ok(self.value.clone())
    }
}

impl<A: Clone, E> Clone for Succeed<A, E> {
    fn clone(&self) -> Self {
        ok(self.value.clone())
    }
}

impl<A: fmt::Debug, E> fmt::Debug for Succeed<A, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Succeed").field(&self.value).finish()
    }
}

/// Computation returned by [`error`].
pub struct Fail<A, E> {
    error: E,
    _value: PhantomData<fn() -> A>,
}

impl<A, E> Computation for Fail<A, E>
where
    E: Clone,
{
    type Output = A;
    type Error = E;

    #[inline]
    fn run(&self) -> Result<A, E> {
        Err(self.error.clone())
    }
}

impl<A, E: Clone> Clone for Fail<A, E> {
    fn clone(&self) -> Self {
        error(self.error.clone())
    }
}

impl<A, E: fmt::Debug> fmt::Debug for Fail<A, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Fail").field(&self.error).finish()
    }
}

/// Computation returned by [`zero`].
pub struct Zero<A, E> {
    _marker: PhantomData<fn() -> (A, E)>,
}

impl<A, E> Computation for Zero<A, E>
where
    A: Default,
{
    type Output = A;
    type Error = E;

    #[inline]
    fn run(&self) -> Result<A, E> {
        Ok(A::default())
    }
}

impl<A, E> Clone for Zero<A, E> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<A, E> Copy for Zero<A, E> {}

impl<A, E> fmt::Debug for Zero<A, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Zero")
    }
}

/// Computation returned by [`from_fn`].
#[derive(Clone)]
pub struct FromFn<F> {
    f: F,
}

impl<A, E, F> Computation for FromFn<F>
where
    F: Fn() -> Result<A, E>,
{
    type Output = A;
    type Error = E;

    #[inline]
    fn run(&self) -> Result<A, E> {
        (self.f)()
    }
}

impl<F> fmt::Debug for FromFn<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FromFn").finish_non_exhaustive()
    }
}
