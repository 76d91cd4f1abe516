//! Deferred, possibly-failing computations.
//!
//! A [`Computation`] describes *how* to produce either a value or an error; the
//! outcome only exists once [`run`](Computation::run) is called. Combinators
//! consume their inputs and return new adapter values without invoking
//! anything, in the same way iterator adapters do. Nothing is memoized: every
//! call to `run` re-executes the whole pipeline, including captured closures.
//!
//! # Examples
//!
//! ```
//! use result_rail::{from_fn, ok, Computation, Failure};
//!
//! let parsed = ok::<_, Failure>("42")
//!     .and_then(|s| from_fn(move || s.parse::<i32>().map_err(|e| Failure::from_error(&e))))
//!     .filter_or_else(|n| *n > 0, |n| Failure::new(format!("{} is not positive", n)));
//!
//! assert_eq!(parsed.run(), Ok(42));
//! ```
//!
//! Short-circuiting happens at invocation time:
//!
//! ```
//! use core::cell::Cell;
//! use result_rail::{error, from_fn, Computation};
//!
//! let calls = Cell::new(0);
//! let arg = from_fn(|| {
//!     calls.set(calls.get() + 1);
//!     Ok::<i32, &str>(1)
//! });
//! let pipeline = error::<fn(i32) -> i32, _>("no function").ap(arg);
//!
//! assert_eq!(pipeline.run(), Err("no function"));
//! assert_eq!(calls.get(), 0);
//! ```

mod adapters;
mod boxed;
mod sequence;
mod sources;

pub use adapters::{
    AndThen, Ap, ApFirst, ApSecond, Bimap, ChainFirst, Context, FilterOrElse, Map, MapErr, OrElse,
    Zip,
};
pub use boxed::BoxComputation;
pub use sequence::{sequence, Sequence};
pub use sources::{error, from_fn, ok, zero, Fail, FromFn, Succeed, Zero};

use crate::traits::IntoFailure;
use crate::types::alloc_type::{Box, Cow};

/// A deferred computation that yields either an `Output` or an `Error` when run.
///
/// The only required method is [`run`](Computation::run). Everything else is
/// either a lazy combinator (returns a new computation, invokes nothing) or a
/// terminal consumer (`fold`, `fork`, `get_or_else`) that invokes `self` once.
#[must_use = "computations do nothing unless `run`"]
pub trait Computation {
    /// The success value type.
    type Output;
    /// The failure value type.
    type Error;

    /// Invokes the computation.
    ///
    /// Every call re-runs the computation from scratch.
    fn run(&self) -> Result<Self::Output, Self::Error>;

    /// Transforms the success value; failures pass through unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// use result_rail::{ok, Computation};
    ///
    /// assert_eq!(ok::<_, ()>(21).map(|x| x * 2).run(), Ok(42));
    /// ```
    #[inline]
    fn map<B, F>(self, f: F) -> Map<Self, F>
    where
        Self: Sized,
        F: Fn(Self::Output) -> B,
    {
        Map::new(self, f)
    }

    /// Transforms the error; successes pass through without calling `f`.
    ///
    /// # Examples
    ///
    /// ```
    /// use result_rail::{error, Computation};
    ///
    /// let failed = error::<i32, _>(404).map_err(|code| format!("HTTP {}", code));
    /// assert_eq!(failed.run(), Err("HTTP 404".to_string()));
    /// ```
    #[doc(alias = "map_error")]
    #[inline]
    fn map_err<G, F>(self, f: F) -> MapErr<Self, F>
    where
        Self: Sized,
        F: Fn(Self::Error) -> G,
    {
        MapErr::new(self, f)
    }

    /// Maps both channels at once: `on_error` for failures, `on_success` for values.
    ///
    /// # Examples
    ///
    /// ```
    /// use result_rail::{ok, Computation};
    ///
    /// let c = ok::<i32, &str>(-1).bimap(|e| e.len(), |n| n > 0);
    /// assert_eq!(c.run(), Ok(false));
    /// ```
    #[inline]
    fn bimap<G, B, FE, FS>(self, on_error: FE, on_success: FS) -> Bimap<Self, FE, FS>
    where
        Self: Sized,
        FE: Fn(Self::Error) -> G,
        FS: Fn(Self::Output) -> B,
    {
        Bimap::new(self, on_error, on_success)
    }

    /// Applies the function produced by `self` to the value produced by `arg`.
    ///
    /// `self` is always invoked first. If it fails, `arg` is never invoked.
    ///
    /// # Examples
    ///
    /// ```
    /// use result_rail::{ok, Computation};
    ///
    /// let double = ok::<fn(i32) -> i32, ()>(|x| x * 2);
    /// assert_eq!(double.ap(ok(42)).run(), Ok(84));
    /// ```
    #[inline]
    fn ap<C, B>(self, arg: C) -> Ap<Self, C>
    where
        Self: Sized,
        C: Computation<Error = Self::Error>,
        Self::Output: FnOnce(C::Output) -> B,
    {
        Ap::new(self, arg)
    }

    /// Sequences a computation that depends on the success value.
    ///
    /// On failure `f` is not called.
    ///
    /// # Examples
    ///
    /// ```
    /// use result_rail::{ok, Computation};
    ///
    /// let next = ok::<_, ()>(42).and_then(|a| ok(a + 1));
    /// assert_eq!(next.run(), Ok(43));
    /// ```
    #[doc(alias = "chain")]
    #[doc(alias = "flat_map")]
    #[inline]
    fn and_then<N, F>(self, f: F) -> AndThen<Self, F>
    where
        Self: Sized,
        N: Computation<Error = Self::Error>,
        F: Fn(Self::Output) -> N,
    {
        AndThen::new(self, f)
    }

    /// Runs the computation returned by `f` for its effect and failure only,
    /// keeping the original value.
    ///
    /// # Examples
    ///
    /// ```
    /// use result_rail::{error, ok, Computation};
    ///
    /// let kept = ok::<_, &str>(5).chain_first(|n| ok(n.to_string()));
    /// assert_eq!(kept.run(), Ok(5));
    ///
    /// let rejected = ok::<i32, &str>(5).chain_first(|_| error::<(), _>("audit failed"));
    /// assert_eq!(rejected.run(), Err("audit failed"));
    /// ```
    #[inline]
    fn chain_first<N, F>(self, f: F) -> ChainFirst<Self, F>
    where
        Self: Sized,
        N: Computation<Error = Self::Error>,
        F: Fn(&Self::Output) -> N,
    {
        ChainFirst::new(self, f)
    }

    /// Runs `self` then `other`, keeping the value of `self`.
    ///
    /// # Examples
    ///
    /// ```
    /// use result_rail::{error, ok, Computation};
    ///
    /// assert_eq!(ok::<_, &str>(1).ap_first(ok(2)).run(), Ok(1));
    /// assert_eq!(error::<i32, _>("e").ap_first(ok(2)).run(), Err("e"));
    /// ```
    #[inline]
    fn ap_first<C>(self, other: C) -> ApFirst<Self, C>
    where
        Self: Sized,
        C: Computation<Error = Self::Error>,
    {
        ApFirst::new(self, other)
    }

    /// Runs `self` then `other`, keeping the value of `other`.
    ///
    /// # Examples
    ///
    /// ```
    /// use result_rail::{error, ok, Computation};
    ///
    /// assert_eq!(ok::<_, &str>(1).ap_second(ok(2)).run(), Ok(2));
    /// assert_eq!(ok::<i32, _>(1).ap_second(error::<i32, _>("e")).run(), Err("e"));
    /// ```
    #[inline]
    fn ap_second<C>(self, other: C) -> ApSecond<Self, C>
    where
        Self: Sized,
        C: Computation<Error = Self::Error>,
    {
        ApSecond::new(self, other)
    }

    /// Runs `self` then `other`, pairing both values. The first failure wins.
    #[inline]
    fn zip<C>(self, other: C) -> Zip<Self, C>
    where
        Self: Sized,
        C: Computation<Error = Self::Error>,
    {
        Zip::new(self, other)
    }

    /// Fails with `on_false(value)` unless `predicate` holds for the success value.
    ///
    /// # Examples
    ///
    /// ```
    /// use result_rail::{ok, Computation};
    ///
    /// let positive = |n: &i32| *n > 0;
    /// let mk_err = |n: i32| format!("{} is negative", n);
    ///
    /// assert_eq!(ok(5).filter_or_else(positive, mk_err).run(), Ok(5));
    /// assert_eq!(
    ///     ok(-1).filter_or_else(positive, mk_err).run(),
    ///     Err("-1 is negative".to_string())
    /// );
    /// ```
    #[inline]
    fn filter_or_else<P, F>(self, predicate: P, on_false: F) -> FilterOrElse<Self, P, F>
    where
        Self: Sized,
        P: Fn(&Self::Output) -> bool,
        F: Fn(Self::Output) -> Self::Error,
    {
        FilterOrElse::new(self, predicate, on_false)
    }

    /// Recovers from a failure by switching to the computation returned by `on_error`.
    ///
    /// On success the value from the single invocation of `self` is kept and
    /// `on_error` is not called.
    ///
    /// # Examples
    ///
    /// ```
    /// use result_rail::{error, ok, Computation};
    ///
    /// let recovered = error::<i32, _>("offline").or_else(|_| ok::<_, ()>(0));
    /// assert_eq!(recovered.run(), Ok(0));
    /// ```
    #[inline]
    fn or_else<N, F>(self, on_error: F) -> OrElse<Self, F>
    where
        Self: Sized,
        N: Computation<Output = Self::Output>,
        F: Fn(Self::Error) -> N,
    {
        OrElse::new(self, on_error)
    }

    /// Wraps any failure into a [`Failure`](crate::Failure) whose cause is the original error.
    ///
    /// # Examples
    ///
    /// ```
    /// use result_rail::{error, Computation};
    ///
    /// let err = error::<(), _>("connection reset")
    ///     .context("fetching profile")
    ///     .run()
    ///     .unwrap_err();
    /// assert_eq!(err.to_string(), "fetching profile: connection reset");
    /// ```
    #[inline]
    fn context<M>(self, message: M) -> Context<Self>
    where
        Self: Sized,
        Self::Error: IntoFailure,
        M: Into<Cow<'static, str>>,
    {
        Context::new(self, message.into())
    }

    /// Erases the concrete adapter type.
    ///
    /// # Examples
    ///
    /// ```
    /// use result_rail::{ok, BoxComputation, Computation};
    ///
    /// let steps: Vec<BoxComputation<'_, i32, ()>> =
    ///     vec![ok(1).boxed(), ok(2).map(|x| x * 10).boxed()];
    /// let total: i32 = steps.iter().map(|c| c.run().unwrap_or(0)).sum();
    /// assert_eq!(total, 21);
    /// ```
    #[inline]
    fn boxed<'a>(self) -> BoxComputation<'a, Self::Output, Self::Error>
    where
        Self: Sized + 'a,
    {
        Box::new(self)
    }

    /// Invokes the computation, returning the value or recovering with `on_error`.
    ///
    /// # Examples
    ///
    /// ```
    /// use result_rail::{error, Computation};
    ///
    /// assert_eq!(error::<i32, _>("missing").get_or_else(|_| 7), 7);
    /// ```
    #[inline]
    fn get_or_else<F>(&self, on_error: F) -> Self::Output
    where
        Self: Sized,
        F: FnOnce(Self::Error) -> Self::Output,
    {
        match self.run() {
            Ok(value) => value,
            Err(error) => on_error(error),
        }
    }

    /// Invokes the computation and eliminates it with exactly one of the handlers.
    ///
    /// # Examples
    ///
    /// ```
    /// use result_rail::{ok, Computation};
    ///
    /// let label = ok::<_, &str>(3).fold(|e| format!("error: {}", e), |n| format!("got {}", n));
    /// assert_eq!(label, "got 3");
    /// ```
    #[inline]
    fn fold<B, FE, FS>(&self, on_error: FE, on_success: FS) -> B
    where
        Self: Sized,
        FE: FnOnce(Self::Error) -> B,
        FS: FnOnce(Self::Output) -> B,
    {
        match self.run() {
            Ok(value) => on_success(value),
            Err(error) => on_error(error),
        }
    }

    /// Invokes the computation for its side effects, dispatching to exactly one handler.
    ///
    /// # Examples
    ///
    /// ```
    /// use result_rail::{error, Computation};
    ///
    /// let mut seen = Vec::new();
    /// error::<i32, _>("boom").fork(|e| seen.push(e), |_| unreachable!());
    /// assert_eq!(seen, ["boom"]);
    /// ```
    #[inline]
    fn fork<FE, FS>(&self, on_error: FE, on_success: FS)
    where
        Self: Sized,
        FE: FnOnce(Self::Error),
        FS: FnOnce(Self::Output),
    {
        match self.run() {
            Ok(value) => on_success(value),
            Err(error) => on_error(error),
        }
    }
}

impl<C> Computation for &C
where
    C: Computation + ?Sized,
{
    type Output = C::Output;
    type Error = C::Error;

    #[inline]
    fn run(&self) -> Result<Self::Output, Self::Error> {
        (**self).run()
    }
}

impl<C> Computation for Box<C>
where
    C: Computation + ?Sized,
{
    type Output = C::Output;
    type Error = C::Error;

    #[inline]
    fn run(&self) -> Result<Self::Output, Self::Error> {
        (**self).run()
    }
}
